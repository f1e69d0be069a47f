//! 주문 로스터 모니터
//!
//! 로스터를 소유하고 실시간 모니터링(부스터 접속 상태 시뮬레이션) 타이머를
//! 관리합니다. 타이머는 모니터링을 끄거나 모니터를 해제하면 반드시 취소됩니다.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Weak};
use std::time::Duration;

use log::{debug, info};
use tokio::sync::Mutex;

use crate::config::BoardConfig;
use crate::random::RandomSource;
use crate::roster::detail::OrderIntent;
use crate::roster::filter::{OrderFilter, StatusFilter};
use crate::roster::model::{Order, OrderStatus};
use crate::roster::roster::{IntentOutcome, PresenceChange, Roster};
use crate::timer::{ScheduledTask, TickControl};

/// 보관하는 접속 상태 변경 이력 최대 개수
pub const PRESENCE_LOG_CAPACITY: usize = 100;

/// 모니터 설정
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// 접속 상태 시뮬레이션 주기
    pub presence_interval: Duration,
    /// 생성 직후 실시간 모니터링 여부
    pub live_monitoring: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            presence_interval: Duration::from_secs(15), // 15초
            live_monitoring: true,
        }
    }
}

impl From<&BoardConfig> for MonitorConfig {
    fn from(config: &BoardConfig) -> Self {
        Self {
            presence_interval: Duration::from_millis(config.presence_interval_ms),
            live_monitoring: config.live_monitoring,
        }
    }
}

/// 타이머 콜백과 사용자 연산이 함께 쓰는 상태
struct Shared {
    roster: Roster,
    random: Box<dyn RandomSource>,
    /// 시뮬레이션 변경 이력 (최근 것이 뒤)
    presence_log: VecDeque<PresenceChange>,
}

impl Shared {
    /// 이력 추가 (가득 차면 가장 오래된 항목 제거)
    fn record(&mut self, change: PresenceChange) {
        if self.presence_log.len() == PRESENCE_LOG_CAPACITY {
            self.presence_log.pop_front();
        }
        self.presence_log.push_back(change);
    }
}

/// 주문 로스터 모니터
pub struct RosterMonitor {
    shared: Arc<Mutex<Shared>>,
    config: MonitorConfig,
    live_task: Option<ScheduledTask>,
}

impl RosterMonitor {
    /// 새 모니터 생성 (타이머 없음)
    pub fn new(orders: Vec<Order>, config: MonitorConfig, random: Box<dyn RandomSource>) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                roster: Roster::new(orders),
                random,
                presence_log: VecDeque::with_capacity(PRESENCE_LOG_CAPACITY),
            })),
            config,
            live_task: None,
        }
    }

    /// 모니터 생성 후 설정에 따라 실시간 모니터링 시작
    ///
    /// tokio 런타임 안에서 호출해야 합니다.
    pub fn start(orders: Vec<Order>, config: MonitorConfig, random: Box<dyn RandomSource>) -> Self {
        let live = config.live_monitoring;
        let mut monitor = Self::new(orders, config, random);
        monitor.set_live_monitoring(live);
        monitor
    }

    pub fn is_live_monitoring(&self) -> bool {
        self.live_task.is_some()
    }

    /// 실시간 모니터링 토글, 변경 후 상태 반환
    pub fn toggle_live_monitoring(&mut self) -> bool {
        let enabled = !self.is_live_monitoring();
        self.set_live_monitoring(enabled);
        enabled
    }

    /// 실시간 모니터링 켜기/끄기
    pub fn set_live_monitoring(&mut self, enabled: bool) {
        match (enabled, self.live_task.is_some()) {
            (true, false) => {
                self.live_task = Some(Self::spawn_presence_task(
                    Arc::downgrade(&self.shared),
                    self.config.presence_interval,
                ));
                info!(
                    "실시간 모니터링 시작 (주기: {}ms)",
                    self.config.presence_interval.as_millis()
                );
            }
            (false, true) => {
                if let Some(task) = self.live_task.take() {
                    task.cancel();
                }
                info!("실시간 모니터링 중단");
            }
            _ => {}
        }
    }

    /// 모든 타이머 해제
    pub fn shutdown(&mut self) {
        self.set_live_monitoring(false);
    }

    fn spawn_presence_task(shared: Weak<Mutex<Shared>>, period: Duration) -> ScheduledTask {
        ScheduledTask::every("presence-simulation", period, move || {
            let shared = shared.clone();
            async move {
                // 소유자가 사라졌으면 종료
                let Some(shared) = shared.upgrade() else {
                    return TickControl::Stop;
                };
                let mut guard = shared.lock().await;
                let Shared { roster, random, .. } = &mut *guard;
                if let Some(change) = roster.simulate_presence_tick(random.as_mut()) {
                    guard.record(change);
                } else {
                    debug!("빈 로스터, 접속 상태 시뮬레이션 건너뜀");
                }
                TickControl::Continue
            }
        })
    }

    /// 타이머 없이 시뮬레이션 1회 실행
    pub async fn simulate_presence_tick(&self) -> Option<PresenceChange> {
        let mut guard = self.shared.lock().await;
        let Shared { roster, random, .. } = &mut *guard;
        let change = roster.simulate_presence_tick(random.as_mut())?;
        guard.record(change.clone());
        Some(change)
    }

    pub async fn set_search_query(&self, query: impl Into<String>) {
        self.shared.lock().await.roster.set_search_query(query);
    }

    pub async fn set_status_filter(&self, status: StatusFilter) {
        self.shared.lock().await.roster.set_status_filter(status);
    }

    pub async fn set_chat_filter(&self, chat_activity: Option<bool>) {
        self.shared.lock().await.roster.set_chat_filter(chat_activity);
    }

    pub async fn set_order_status(&self, order_id: &str, status: OrderStatus) -> bool {
        self.shared.lock().await.roster.set_order_status(order_id, status)
    }

    pub async fn delete_order(&self, order_id: &str) -> Option<Order> {
        self.shared.lock().await.roster.delete_order(order_id)
    }

    /// 하위 화면 의도 실행
    pub async fn apply_intent(&self, intent: &OrderIntent) -> IntentOutcome {
        self.shared.lock().await.roster.apply_intent(intent)
    }

    pub async fn order(&self, order_id: &str) -> Option<Order> {
        self.shared.lock().await.roster.order(order_id).cloned()
    }

    pub async fn orders(&self) -> Vec<Order> {
        self.shared.lock().await.roster.orders().to_vec()
    }

    pub async fn visible_orders(&self) -> Vec<Order> {
        self.shared.lock().await.roster.visible().to_vec()
    }

    pub async fn filter(&self) -> OrderFilter {
        self.shared.lock().await.roster.filter().clone()
    }

    pub async fn status_counts(&self) -> HashMap<OrderStatus, usize> {
        self.shared.lock().await.roster.status_counts()
    }

    /// 시뮬레이션 변경 이력 (최근 `PRESENCE_LOG_CAPACITY`개, 오래된 것부터)
    pub async fn presence_log(&self) -> Vec<PresenceChange> {
        self.shared.lock().await.presence_log.iter().cloned().collect()
    }

    /// 이력을 비우고 반환
    pub async fn drain_presence_log(&self) -> Vec<PresenceChange> {
        self.shared.lock().await.presence_log.drain(..).collect()
    }
}

impl Drop for RosterMonitor {
    fn drop(&mut self) {
        if self.live_task.is_some() {
            debug!("로스터 모니터 해제, 실시간 모니터링 타이머 취소");
        }
    }
}
