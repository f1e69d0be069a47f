//! 캐러셀 상태 머신
//!
//! 타이머 없이 순수하게 인덱스/애니메이션/일시정지 상태만 다룹니다.
//! 전환이 시작되면 `is_animating`이 켜지고, 호출자가 정착 지연 후
//! `finish_transition`을 불러 해제합니다. 애니메이션 중 이동 요청은 무시됩니다.

use serde::Serialize;

use crate::carousel::viewport::items_per_page;

/// 캐러셀 상태
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselState {
    /// 항목 수
    len: usize,
    active_index: usize,
    /// 직전 인덱스 (슬라이드 방향 표시용)
    previous_index: usize,
    is_animating: bool,
    is_paused: bool,
    viewport_width: u32,
    items_per_page: usize,
}

impl CarouselState {
    pub fn new(len: usize, viewport_width: u32) -> Self {
        Self {
            len,
            active_index: 0,
            previous_index: 0,
            is_animating: false,
            is_paused: false,
            viewport_width,
            items_per_page: items_per_page(viewport_width),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn previous_index(&self) -> usize {
        self.previous_index
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// 다음 항목으로 전환 시작, 시작했으면 `true`
    pub fn begin_next(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }
        let target = (self.active_index + 1) % self.len;
        self.move_to(target);
        true
    }

    /// 이전 항목으로 전환 시작
    pub fn begin_previous(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }
        let target = (self.active_index + self.len - 1) % self.len;
        self.move_to(target);
        true
    }

    /// 페이지 이동 시작 (`page * items_per_page`)
    ///
    /// 범위를 벗어난 페이지는 무시합니다.
    pub fn begin_go_to_page(&mut self, page: usize) -> bool {
        if !self.can_move() || page >= self.page_count() {
            return false;
        }
        let target = page * self.items_per_page;
        self.move_to(target);
        true
    }

    /// 정착 지연이 끝났을 때 호출
    pub fn finish_transition(&mut self) {
        self.is_animating = false;
    }

    /// 일시정지, 상태가 바뀌었으면 `true`
    pub fn pause(&mut self) -> bool {
        !std::mem::replace(&mut self.is_paused, true)
    }

    /// 재개, 상태가 바뀌었으면 `true`
    pub fn resume(&mut self) -> bool {
        std::mem::replace(&mut self.is_paused, false)
    }

    /// 화면 폭 변경 (활성 인덱스는 유지)
    pub fn resize(&mut self, viewport_width: u32) {
        self.viewport_width = viewport_width;
        self.items_per_page = items_per_page(viewport_width);
    }

    /// 페이지 수 (올림)
    pub fn page_count(&self) -> usize {
        self.len.div_ceil(self.items_per_page)
    }

    /// 현재 페이지 (표시 점)
    pub fn active_page(&self) -> usize {
        self.active_index / self.items_per_page
    }

    /// 화면에 보일 항목 인덱스 (원형으로 감김)
    pub fn visible_indices(&self) -> Vec<usize> {
        if self.len == 0 {
            return Vec::new();
        }
        (0..self.items_per_page)
            .map(|offset| (self.active_index + offset) % self.len)
            .collect()
    }

    /// 항목 목록에서 보이는 창 추출
    pub fn window<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.visible_indices()
            .into_iter()
            .filter_map(|index| items.get(index))
            .collect()
    }

    fn can_move(&self) -> bool {
        self.len > 0 && !self.is_animating
    }

    fn move_to(&mut self, target: usize) {
        self.previous_index = self.active_index;
        self.active_index = target;
        self.is_animating = true;
    }
}
