//! 후기 캐러셀 구동기
//!
//! `CarouselState`에 자동 넘김 타이머와 정착 지연 타이머를 붙입니다.
//! 자동 넘김 타이머는 일시정지 중에는 존재하지 않고, 재개 시 새로 만들어지며,
//! 동시에 두 개가 살아 있는 경우는 없습니다.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::carousel::model::Testimonial;
use crate::carousel::state::CarouselState;
use crate::config::BoardConfig;
use crate::timer::{ScheduledTask, TickControl};

/// 캐러셀 타이밍 설정
#[derive(Debug, Clone)]
pub struct CarouselTiming {
    /// 자동 넘김 주기
    pub auto_advance: Duration,
    /// 전환 애니메이션 정착 지연
    pub settle_delay: Duration,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            auto_advance: Duration::from_secs(5),       // 5초
            settle_delay: Duration::from_millis(500), // 애니메이션 길이와 동일
        }
    }
}

impl From<&BoardConfig> for CarouselTiming {
    fn from(config: &BoardConfig) -> Self {
        Self {
            auto_advance: Duration::from_millis(config.carousel_interval_ms),
            settle_delay: Duration::from_millis(config.settle_delay_ms),
        }
    }
}

/// 화면에 넘겨줄 캐러셀 스냅샷
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselSnapshot {
    pub active_index: usize,
    pub previous_index: usize,
    pub active_page: usize,
    pub page_count: usize,
    pub items_per_page: usize,
    pub is_animating: bool,
    pub is_paused: bool,
    pub visible: Vec<Testimonial>,
}

#[derive(Debug, Clone, Copy)]
enum Navigation {
    Next,
    Previous,
    Page(usize),
}

struct Shared {
    state: CarouselState,
    settle_task: Option<ScheduledTask>,
}

/// 후기 캐러셀
pub struct Carousel {
    items: Arc<Vec<Testimonial>>,
    shared: Arc<Mutex<Shared>>,
    timing: CarouselTiming,
    auto_task: Option<ScheduledTask>,
}

impl Carousel {
    /// 캐러셀 마운트 (자동 넘김 시작)
    ///
    /// tokio 런타임 안에서 호출해야 합니다.
    pub fn mount(items: Vec<Testimonial>, timing: CarouselTiming, viewport_width: u32) -> Self {
        let state = CarouselState::new(items.len(), viewport_width);
        info!(
            "캐러셀 마운트: 항목 {}개, 페이지당 {}개",
            items.len(),
            state.items_per_page()
        );

        let mut carousel = Self {
            items: Arc::new(items),
            shared: Arc::new(Mutex::new(Shared {
                state,
                settle_task: None,
            })),
            timing,
            auto_task: None,
        };
        carousel.start_auto_advance();
        carousel
    }

    pub fn items(&self) -> &[Testimonial] {
        &self.items
    }

    /// 자동 넘김 타이머가 살아 있는지
    pub fn is_auto_advancing(&self) -> bool {
        self.auto_task.is_some()
    }

    pub async fn next(&self) -> bool {
        Self::navigate(&self.shared, Navigation::Next, self.timing.settle_delay).await
    }

    pub async fn previous(&self) -> bool {
        Self::navigate(&self.shared, Navigation::Previous, self.timing.settle_delay).await
    }

    pub async fn go_to_page(&self, page: usize) -> bool {
        Self::navigate(&self.shared, Navigation::Page(page), self.timing.settle_delay).await
    }

    /// 포인터 진입: 일시정지 및 자동 넘김 취소
    pub async fn pointer_enter(&mut self) {
        if self.shared.lock().await.state.pause() {
            debug!("캐러셀 일시정지");
        }
        if let Some(task) = self.auto_task.take() {
            task.cancel();
        }
    }

    /// 포인터 이탈: 재개 및 자동 넘김 재시작
    pub async fn pointer_leave(&mut self) {
        if self.shared.lock().await.state.resume() {
            debug!("캐러셀 재개");
        }
        self.start_auto_advance();
    }

    /// 화면 폭 변경 (활성 인덱스는 유지)
    pub async fn resize(&self, viewport_width: u32) {
        let mut guard = self.shared.lock().await;
        guard.state.resize(viewport_width);
        debug!(
            "캐러셀 폭 변경: {}px, 페이지당 {}개",
            viewport_width,
            guard.state.items_per_page()
        );
    }

    pub async fn snapshot(&self) -> CarouselSnapshot {
        let guard = self.shared.lock().await;
        let state = &guard.state;

        CarouselSnapshot {
            active_index: state.active_index(),
            previous_index: state.previous_index(),
            active_page: state.active_page(),
            page_count: state.page_count(),
            items_per_page: state.items_per_page(),
            is_animating: state.is_animating(),
            is_paused: state.is_paused(),
            visible: state.window(self.items.as_slice()).into_iter().cloned().collect(),
        }
    }

    /// 언마운트: 모든 타이머 취소
    ///
    /// 이후에도 스냅샷은 읽을 수 있지만 더 이상 스스로 움직이지 않습니다.
    pub async fn unmount(&mut self) {
        if let Some(task) = self.auto_task.take() {
            task.cancel();
        }
        if let Some(task) = self.shared.lock().await.settle_task.take() {
            task.cancel();
        }
        info!("캐러셀 언마운트");
    }

    fn start_auto_advance(&mut self) {
        if self.auto_task.is_some() {
            return;
        }

        let shared = Arc::downgrade(&self.shared);
        let settle_delay = self.timing.settle_delay;
        self.auto_task = Some(ScheduledTask::every(
            "carousel-auto-advance",
            self.timing.auto_advance,
            move || {
                let shared = shared.clone();
                async move {
                    let Some(shared) = shared.upgrade() else {
                        return TickControl::Stop;
                    };
                    if shared.lock().await.state.is_paused() {
                        return TickControl::Continue;
                    }
                    Self::navigate(&shared, Navigation::Next, settle_delay).await;
                    TickControl::Continue
                }
            },
        ));
    }

    async fn navigate(shared: &Arc<Mutex<Shared>>, navigation: Navigation, settle_delay: Duration) -> bool {
        let mut guard = shared.lock().await;
        let moved = match navigation {
            Navigation::Next => guard.state.begin_next(),
            Navigation::Previous => guard.state.begin_previous(),
            Navigation::Page(page) => guard.state.begin_go_to_page(page),
        };
        if !moved {
            return false;
        }

        let weak = Arc::downgrade(shared);
        guard.settle_task = Some(ScheduledTask::after("carousel-settle", settle_delay, async move {
            if let Some(shared) = weak.upgrade() {
                shared.lock().await.state.finish_transition();
            }
        }));
        debug!("캐러셀 이동: {:?} -> {}", navigation, guard.state.active_index());
        true
    }
}
