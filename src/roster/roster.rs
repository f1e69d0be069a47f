//! 주문 로스터 구현
//!
//! 이 모듈은 전체 주문 목록(로스터)과 현재 필터가 적용된 화면 목록을 함께
//! 관리합니다. 모든 변경 연산은 끝에서 화면 목록을 다시 계산하므로
//! 화면 목록은 항상 `filter.apply(orders)`와 같습니다.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::Serialize;

use crate::random::RandomSource;
use crate::roster::detail::{chat_route, OrderIntent};
use crate::roster::filter::{OrderFilter, StatusFilter};
use crate::roster::model::{Order, OrderStatus, Presence};

/// 접속 상태 시뮬레이션 한 번의 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresenceChange {
    pub order_id: String,
    pub booster_id: String,
    pub previous: Presence,
    pub current: Presence,
    pub updated_at: DateTime<Utc>,
}

/// 상위 소유자가 의도를 실행한 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    /// 상태 변경 또는 삭제가 반영됨
    Applied,
    /// 대상 주문이 없어 아무것도 하지 않음
    Ignored,
    /// 채팅 화면으로 이동 (라우트 경로)
    Navigate(String),
}

/// 주문 로스터
#[derive(Debug, Clone, Default)]
pub struct Roster {
    /// 전체 주문 (필터 적용 전)
    orders: Vec<Order>,
    /// 현재 필터
    filter: OrderFilter,
    /// 필터가 적용된 화면 목록
    visible: Vec<Order>,
}

impl Roster {
    /// 새 로스터 생성
    pub fn new(orders: Vec<Order>) -> Self {
        let mut roster = Self {
            orders,
            filter: OrderFilter::new(),
            visible: Vec::new(),
        };
        roster.refresh();
        roster
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn visible(&self) -> &[Order] {
        &self.visible
    }

    pub fn filter(&self) -> &OrderFilter {
        &self.filter
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// ID로 주문 조회
    pub fn order(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.set_search_query(query);
        self.refresh();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.set_status(status);
        self.refresh();
    }

    pub fn set_chat_filter(&mut self, chat_activity: Option<bool>) {
        self.filter.set_chat_activity(chat_activity);
        self.refresh();
    }

    /// 필터 전체 교체
    pub fn replace_filter(&mut self, filter: OrderFilter) {
        self.filter = filter;
        self.refresh();
    }

    /// 주문 상태 변경
    ///
    /// 전이 규칙은 검사하지 않습니다. 대상이 없으면 아무것도 하지 않고
    /// `false`를 반환합니다.
    pub fn set_order_status(&mut self, order_id: &str, status: OrderStatus) -> bool {
        let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) else {
            debug!("상태 변경 대상 주문 없음: {}", order_id);
            return false;
        };

        let previous = order.status;
        order.status = status;
        order.touch();
        info!("주문 상태 변경: {} ({} -> {})", order.order_code, previous, status);

        self.refresh();
        true
    }

    /// 주문 삭제
    ///
    /// 로스터와 화면 목록 양쪽에서 제거합니다. 없는 ID는 무시합니다.
    pub fn delete_order(&mut self, order_id: &str) -> Option<Order> {
        let position = self.orders.iter().position(|o| o.id == order_id);
        let Some(position) = position else {
            debug!("삭제 대상 주문 없음: {}", order_id);
            return None;
        };

        let removed = self.orders.remove(position);
        self.visible.retain(|o| o.id != order_id);
        info!("주문 삭제: {}", removed.order_code);
        Some(removed)
    }

    /// 접속 상태 시뮬레이션 1회
    ///
    /// 주문 하나를 균등하게 골라 부스터 접속 상태를 무작위 값으로 바꾸고
    /// 수정 시각을 갱신합니다. 다른 필드와 로스터 길이는 바뀌지 않습니다.
    pub fn simulate_presence_tick(&mut self, random: &mut dyn RandomSource) -> Option<PresenceChange> {
        if self.orders.is_empty() {
            return None;
        }

        let index = random.next_index(self.orders.len());
        let presence = Presence::ALL[random.next_index(Presence::ALL.len())];

        let order = self.orders.get_mut(index)?;
        let previous = order.booster.presence;
        order.booster.presence = presence;
        order.touch();

        let change = PresenceChange {
            order_id: order.id.clone(),
            booster_id: order.booster.id.clone(),
            previous,
            current: presence,
            updated_at: order.updated_at,
        };
        debug!(
            "부스터 접속 상태 갱신: {} {} ({} -> {})",
            order.order_code, order.booster.name, previous, presence
        );

        self.refresh();
        Some(change)
    }

    /// 하위 화면에서 올라온 의도 실행
    pub fn apply_intent(&mut self, intent: &OrderIntent) -> IntentOutcome {
        match intent {
            OrderIntent::ChangeStatus { order_id, status } => {
                if self.set_order_status(order_id, *status) {
                    IntentOutcome::Applied
                } else {
                    IntentOutcome::Ignored
                }
            }
            OrderIntent::Delete { order_id } => match self.delete_order(order_id) {
                Some(_) => IntentOutcome::Applied,
                None => IntentOutcome::Ignored,
            },
            OrderIntent::NavigateToChat { order_id } => IntentOutcome::Navigate(chat_route(order_id)),
        }
    }

    /// 전체 로스터 기준 상태별 주문 수 (모든 상태 키 포함)
    pub fn status_counts(&self) -> HashMap<OrderStatus, usize> {
        let mut counts: HashMap<OrderStatus, usize> =
            OrderStatus::ALL.iter().map(|status| (*status, 0)).collect();
        for order in &self.orders {
            *counts.entry(order.status).or_insert(0) += 1;
        }
        counts
    }

    /// 화면 목록 재계산
    fn refresh(&mut self) {
        self.visible = self.filter.apply(&self.orders);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FakeDataset;
    use crate::random::ScriptedRandom;

    fn create_test_roster() -> Roster {
        Roster::new(FakeDataset::default().orders)
    }

    fn visible_codes(roster: &Roster) -> Vec<String> {
        roster.visible().iter().map(|o| o.order_code.clone()).collect()
    }

    #[test]
    fn test_roster_initialization() {
        let roster = create_test_roster();
        assert_eq!(roster.len(), 5);
        assert_eq!(roster.visible().len(), 5);
        assert!(!roster.filter().is_active());
    }

    #[test]
    fn test_search_for_order_code_prefix() {
        let mut roster = create_test_roster();
        roster.set_search_query("ORD-56");
        roster.set_status_filter(StatusFilter::All);
        roster.set_chat_filter(None);

        assert_eq!(visible_codes(&roster), vec!["ORD-5678"]);
    }

    #[test]
    fn test_completed_with_chat_activity_is_empty() {
        let mut roster = create_test_roster();
        roster.set_status_filter(StatusFilter::Only(OrderStatus::Completed));
        assert_eq!(visible_codes(&roster), vec!["ORD-9012"]);

        roster.set_chat_filter(Some(true));
        assert!(roster.visible().is_empty());
    }

    #[test]
    fn test_status_change_reapplies_filters() {
        let mut roster = create_test_roster();
        roster.set_status_filter(StatusFilter::Only(OrderStatus::Pending));
        assert_eq!(visible_codes(&roster), vec!["ORD-5678"]);

        let before = roster.order("2").unwrap().updated_at;
        assert!(roster.set_order_status("2", OrderStatus::InProgress));

        // 대기 필터에서 빠짐
        assert!(roster.visible().is_empty());
        let order = roster.order("2").unwrap();
        assert_eq!(order.status, OrderStatus::InProgress);
        assert!(order.updated_at >= before);
    }

    #[test]
    fn test_any_status_may_follow_any_other() {
        let mut roster = create_test_roster();
        // 취소된 주문도 다시 진행으로 바꿀 수 있음
        assert!(roster.set_order_status("5", OrderStatus::InProgress));
        assert!(roster.set_order_status("5", OrderStatus::Pending));
        assert_eq!(roster.order("5").unwrap().status, OrderStatus::Pending);
    }

    #[test]
    fn test_status_change_for_missing_order_is_noop() {
        let mut roster = create_test_roster();
        let before = roster.orders().to_vec();
        assert!(!roster.set_order_status("missing", OrderStatus::Completed));
        assert_eq!(roster.orders(), before.as_slice());
    }

    #[test]
    fn test_delete_removes_from_roster_and_view() {
        let mut roster = create_test_roster();
        roster.set_chat_filter(Some(true));
        assert_eq!(visible_codes(&roster), vec!["ORD-1234", "ORD-3456"]);

        let removed = roster.delete_order("1");
        assert_eq!(removed.map(|o| o.order_code), Some("ORD-1234".to_string()));
        assert_eq!(roster.len(), 4);
        assert!(roster.order("1").is_none());
        assert_eq!(visible_codes(&roster), vec!["ORD-3456"]);
    }

    #[test]
    fn test_delete_missing_order_is_idempotent() {
        let mut roster = create_test_roster();
        roster.set_status_filter(StatusFilter::Only(OrderStatus::Paused));
        let orders_before = roster.orders().to_vec();
        let visible_before = roster.visible().to_vec();

        assert!(roster.delete_order("missing").is_none());
        assert_eq!(roster.orders(), orders_before.as_slice());
        assert_eq!(roster.visible(), visible_before.as_slice());
    }

    #[test]
    fn test_presence_tick_touches_only_presence_and_timestamp() {
        let mut roster = create_test_roster();
        let before = roster.orders().to_vec();

        // 세 번째 주문, Away 선택
        let mut random = ScriptedRandom::new([2, 2]);
        let change = roster.simulate_presence_tick(&mut random).unwrap();

        assert_eq!(change.order_id, "3");
        assert_eq!(change.previous, Presence::Online);
        assert_eq!(change.current, Presence::Away);
        assert_eq!(roster.len(), before.len());

        for (old, new) in before.iter().zip(roster.orders()) {
            if old.id == "3" {
                let mut expected = old.clone();
                expected.booster.presence = Presence::Away;
                expected.updated_at = new.updated_at;
                assert_eq!(&expected, new);
                assert!(new.updated_at >= old.updated_at);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_presence_tick_refreshes_visible_snapshot() {
        let mut roster = create_test_roster();
        roster.set_search_query("ORD-1234");
        let mut random = ScriptedRandom::new([0, 1]);
        roster.simulate_presence_tick(&mut random);

        assert_eq!(roster.visible()[0].booster.presence, Presence::Offline);
    }

    #[test]
    fn test_presence_tick_on_empty_roster() {
        let mut roster = Roster::new(Vec::new());
        let mut random = ScriptedRandom::new([0, 0]);
        assert!(roster.simulate_presence_tick(&mut random).is_none());
        assert_eq!(random.draws(), 0);
    }

    #[test]
    fn test_apply_intents() {
        let mut roster = create_test_roster();

        let outcome = roster.apply_intent(&OrderIntent::ChangeStatus {
            order_id: "4".to_string(),
            status: OrderStatus::InProgress,
        });
        assert_eq!(outcome, IntentOutcome::Applied);

        let outcome = roster.apply_intent(&OrderIntent::NavigateToChat {
            order_id: "4".to_string(),
        });
        assert_eq!(outcome, IntentOutcome::Navigate("/owner/chat/4".to_string()));

        let outcome = roster.apply_intent(&OrderIntent::Delete {
            order_id: "4".to_string(),
        });
        assert_eq!(outcome, IntentOutcome::Applied);

        let outcome = roster.apply_intent(&OrderIntent::Delete {
            order_id: "4".to_string(),
        });
        assert_eq!(outcome, IntentOutcome::Ignored);
    }

    #[test]
    fn test_status_counts() {
        let roster = create_test_roster();
        let counts = roster.status_counts();
        assert_eq!(counts.len(), OrderStatus::ALL.len());
        assert_eq!(counts[&OrderStatus::Pending], 1);
        assert_eq!(counts[&OrderStatus::Completed], 1);
        assert_eq!(counts.values().sum::<usize>(), 5);
    }
}
