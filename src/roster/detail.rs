//! 주문 상세 화면 상태
//!
//! 상위 로스터가 내려준 주문 스냅샷을 읽기만 하고, 상태 변경/삭제/채팅 이동은
//! `OrderIntent`로 만들어 위로 올려 보냅니다. 실제 반영은 로스터 소유자가 합니다.

use log::info;
use serde::{Deserialize, Serialize};

use crate::roster::model::{Order, OrderStatus};

/// 채팅 화면 라우트
pub fn chat_route(order_id: &str) -> String {
    format!("/owner/chat/{}", order_id)
}

/// 상위로 올려 보내는 의도
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderIntent {
    ChangeStatus { order_id: String, status: OrderStatus },
    Delete { order_id: String },
    NavigateToChat { order_id: String },
}

/// 상세 화면 버튼
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderAction {
    Start,
    Pause,
    Resume,
    Complete,
    Cancel,
    OpenChat,
    Delete,
}

impl OrderAction {
    /// 상태 변경 버튼이면 목표 상태
    pub fn target_status(&self) -> Option<OrderStatus> {
        match self {
            OrderAction::Start | OrderAction::Resume => Some(OrderStatus::InProgress),
            OrderAction::Pause => Some(OrderStatus::Paused),
            OrderAction::Complete => Some(OrderStatus::Completed),
            OrderAction::Cancel => Some(OrderStatus::Cancelled),
            OrderAction::OpenChat | OrderAction::Delete => None,
        }
    }

    pub fn label(&self, chat_activity: bool) -> &'static str {
        match self {
            OrderAction::Start => "Start Order",
            OrderAction::Pause => "Pause Order",
            OrderAction::Resume => "Resume Order",
            OrderAction::Complete => "Mark Completed",
            OrderAction::Cancel => "Cancel Order",
            OrderAction::OpenChat if chat_activity => "View New Messages",
            OrderAction::OpenChat => "Open Chat",
            OrderAction::Delete => "Delete Order",
        }
    }
}

/// 상태별로 노출되는 버튼 목록
pub fn available_actions(status: OrderStatus) -> Vec<OrderAction> {
    let mut actions = Vec::new();
    match status {
        OrderStatus::Pending => actions.push(OrderAction::Start),
        OrderStatus::InProgress => actions.push(OrderAction::Pause),
        OrderStatus::Paused => actions.push(OrderAction::Resume),
        OrderStatus::Completed | OrderStatus::Cancelled => {}
    }
    if status.is_open() {
        actions.push(OrderAction::Complete);
        actions.push(OrderAction::Cancel);
    }
    actions.push(OrderAction::OpenChat);
    actions.push(OrderAction::Delete);
    actions
}

/// 상세 정보 섹션 (빈 값은 생략)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailSection {
    Description(String),
    ClientNotes(String),
    Requirements(Vec<String>),
}

/// 상세 화면 탭
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Details,
    Activity,
}

/// 주문 상세 화면 상태
#[derive(Debug, Clone, Default)]
pub struct OrderDetailView {
    order: Option<Order>,
    is_open: bool,
    tab: DetailTab,
    progress_draft: u8,
    is_editing_progress: bool,
    confirm_delete: bool,
}

impl OrderDetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// 주문 스냅샷으로 열기
    pub fn open(&mut self, order: Order) {
        self.progress_draft = order.progress;
        self.order = Some(order);
        self.is_open = true;
        self.tab = DetailTab::Details;
        self.is_editing_progress = false;
        self.confirm_delete = false;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.confirm_delete = false;
        self.is_editing_progress = false;
    }

    /// 상위에서 새 스냅샷이 내려오면 교체 (삭제되었으면 `None`)
    pub fn sync(&mut self, order: Option<Order>) {
        if let Some(order) = &order {
            self.progress_draft = order.progress;
        }
        self.order = order;
    }

    /// 열려 있고 스냅샷이 있을 때만 표시
    pub fn is_visible(&self) -> bool {
        self.is_open && self.order.is_some()
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn tab(&self) -> DetailTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: DetailTab) {
        self.tab = tab;
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.confirm_delete
    }

    pub fn available_actions(&self) -> Vec<OrderAction> {
        match &self.order {
            Some(order) if self.is_open => available_actions(order.status),
            _ => Vec::new(),
        }
    }

    pub fn sections(&self) -> Vec<DetailSection> {
        let Some(order) = self.order.as_ref().filter(|_| self.is_open) else {
            return Vec::new();
        };

        let mut sections = Vec::new();
        if !order.description.trim().is_empty() {
            sections.push(DetailSection::Description(order.description.clone()));
        }
        if !order.client_notes.trim().is_empty() {
            sections.push(DetailSection::ClientNotes(order.client_notes.clone()));
        }
        if !order.requirements.is_empty() {
            sections.push(DetailSection::Requirements(order.requirements.clone()));
        }
        sections
    }

    pub fn begin_progress_edit(&mut self) {
        if self.is_visible() {
            self.is_editing_progress = true;
        }
    }

    pub fn is_editing_progress(&self) -> bool {
        self.is_editing_progress
    }

    pub fn progress_draft(&self) -> u8 {
        self.progress_draft
    }

    /// 슬라이더 입력 (0~100으로 고정)
    pub fn set_progress_draft(&mut self, value: i32) {
        self.progress_draft = value.clamp(0, 100) as u8;
    }

    /// 진행률 편집 확정
    ///
    /// 로스터에는 반영하지 않고 로그만 남깁니다.
    pub fn commit_progress(&mut self) -> Option<u8> {
        if !self.is_editing_progress {
            return None;
        }
        self.is_editing_progress = false;
        let order = self.order.as_ref()?;
        info!("주문 {} 진행률 편집: {}%", order.order_code, self.progress_draft);
        Some(self.progress_draft)
    }

    /// 버튼 실행
    ///
    /// 삭제는 두 번 눌러야 합니다. 첫 번째는 확인 대기, 두 번째에 의도를
    /// 반환하고 화면을 닫습니다. 노출되지 않은 버튼은 무시합니다.
    pub fn trigger(&mut self, action: OrderAction) -> Option<OrderIntent> {
        if !self.available_actions().contains(&action) {
            return None;
        }
        let order_id = self.order.as_ref()?.id.clone();

        match action {
            OrderAction::Delete => {
                if !self.confirm_delete {
                    self.confirm_delete = true;
                    return None;
                }
                self.confirm_delete = false;
                self.close();
                Some(OrderIntent::Delete { order_id })
            }
            OrderAction::OpenChat => Some(OrderIntent::NavigateToChat { order_id }),
            _ => action
                .target_status()
                .map(|status| OrderIntent::ChangeStatus { order_id, status }),
        }
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FakeDataset;

    fn order_with_status(status: OrderStatus) -> Order {
        FakeDataset::default().orders[0].clone().with_status(status)
    }

    #[test]
    fn test_actions_per_status() {
        use OrderAction::*;

        assert_eq!(
            available_actions(OrderStatus::Pending),
            vec![Start, Complete, Cancel, OpenChat, Delete]
        );
        assert_eq!(
            available_actions(OrderStatus::InProgress),
            vec![Pause, Complete, Cancel, OpenChat, Delete]
        );
        assert_eq!(
            available_actions(OrderStatus::Paused),
            vec![Resume, Complete, Cancel, OpenChat, Delete]
        );
        assert_eq!(available_actions(OrderStatus::Completed), vec![OpenChat, Delete]);
        assert_eq!(available_actions(OrderStatus::Cancelled), vec![OpenChat, Delete]);
    }

    #[test]
    fn test_closed_view_renders_nothing() {
        let mut view = OrderDetailView::new();
        assert!(!view.is_visible());
        assert!(view.available_actions().is_empty());

        view.open(order_with_status(OrderStatus::Pending));
        view.sync(None);
        assert!(!view.is_visible());
        assert!(view.sections().is_empty());
    }

    #[test]
    fn test_pause_emits_status_intent() {
        let mut view = OrderDetailView::new();
        view.open(order_with_status(OrderStatus::InProgress));

        let intent = view.trigger(OrderAction::Pause);
        assert_eq!(
            intent,
            Some(OrderIntent::ChangeStatus {
                order_id: "1".to_string(),
                status: OrderStatus::Paused,
            })
        );
        // 진행 중 주문에는 Resume 버튼이 없음
        assert_eq!(view.trigger(OrderAction::Resume), None);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut view = OrderDetailView::new();
        view.open(order_with_status(OrderStatus::Completed));

        assert_eq!(view.trigger(OrderAction::Delete), None);
        assert!(view.is_confirming_delete());

        view.cancel_delete();
        assert_eq!(view.trigger(OrderAction::Delete), None);

        let intent = view.trigger(OrderAction::Delete);
        assert_eq!(intent, Some(OrderIntent::Delete { order_id: "1".to_string() }));
        assert!(!view.is_visible());
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let mut order = order_with_status(OrderStatus::Pending);
        order.client_notes = String::new();
        order.requirements.clear();

        let mut view = OrderDetailView::new();
        view.open(order.clone());
        assert_eq!(view.sections(), vec![DetailSection::Description(order.description)]);
    }

    #[test]
    fn test_chat_label_reflects_activity() {
        assert_eq!(OrderAction::OpenChat.label(true), "View New Messages");
        assert_eq!(OrderAction::OpenChat.label(false), "Open Chat");
    }

    #[test]
    fn test_progress_edit_is_clamped_and_local() {
        let order = order_with_status(OrderStatus::InProgress);
        let mut view = OrderDetailView::new();
        view.open(order.clone());
        assert_eq!(view.progress_draft(), order.progress);

        // 편집 모드가 아니면 확정되지 않음
        assert_eq!(view.commit_progress(), None);

        view.begin_progress_edit();
        view.set_progress_draft(140);
        assert_eq!(view.commit_progress(), Some(100));
        assert!(!view.is_editing_progress());
        assert_eq!(view.order().unwrap().progress, order.progress);
    }
}
