//! 데이터 제공자 인터페이스
//!
//! 로스터/캐러셀 로직은 이 트레이트만 보고 데이터를 가져옵니다.
//! 실제 백엔드 대신 메모리 기반 `MockDataProvider`가 데모 데이터로 동작합니다.

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};
use tokio::sync::RwLock;

use crate::activity::{Activity, ActivityEvent, Actor};
use crate::carousel::Testimonial;
use crate::data::FakeDataset;
use crate::error::BoardResult;
use crate::roster::{Order, OrderStatus};

/// 주문/활동/후기 데이터 제공자
#[async_trait::async_trait]
pub trait DataProvider: Send + Sync {
    async fn list_orders(&self) -> BoardResult<Vec<Order>>;
    /// 상태 변경 후 갱신된 주문 반환, 없는 주문이면 `None`
    async fn update_order_status(&self, order_id: &str, status: OrderStatus) -> BoardResult<Option<Order>>;
    /// 없는 주문 삭제는 아무 일도 하지 않음
    async fn delete_order(&self, order_id: &str) -> BoardResult<()>;
    /// 시간순으로 정렬된 활동 기록
    async fn list_activities(&self, order_id: &str) -> BoardResult<Vec<Activity>>;
    async fn list_testimonials(&self) -> BoardResult<Vec<Testimonial>>;
}

/// 메모리 기반 데이터 제공자
#[derive(Clone)]
pub struct MockDataProvider {
    dataset: Arc<RwLock<FakeDataset>>,
}

impl MockDataProvider {
    pub fn new(dataset: FakeDataset) -> Self {
        Self {
            dataset: Arc::new(RwLock::new(dataset)),
        }
    }
}

impl Default for MockDataProvider {
    fn default() -> Self {
        Self::new(FakeDataset::default())
    }
}

#[async_trait::async_trait]
impl DataProvider for MockDataProvider {
    async fn list_orders(&self) -> BoardResult<Vec<Order>> {
        Ok(self.dataset.read().await.orders.clone())
    }

    async fn update_order_status(&self, order_id: &str, status: OrderStatus) -> BoardResult<Option<Order>> {
        let mut dataset = self.dataset.write().await;

        let Some(order) = dataset.orders.iter_mut().find(|order| order.id == order_id) else {
            debug!("상태 변경 대상 주문 없음: {}", order_id);
            return Ok(None);
        };

        let previous = order.status;
        order.status = status;
        order.touch();
        let updated = order.clone();

        // 상태 변경은 활동 기록에도 남김
        let activity = Activity::new(
            order_id,
            Utc::now(),
            Actor::system(),
            ActivityEvent::StatusChange {
                from: previous.to_string(),
                to: status.to_string(),
            },
        );
        dataset
            .activities
            .entry(order_id.to_string())
            .or_default()
            .push(activity);

        info!("주문 상태 저장: {} {} -> {}", order_id, previous, status);
        Ok(Some(updated))
    }

    async fn delete_order(&self, order_id: &str) -> BoardResult<()> {
        let mut dataset = self.dataset.write().await;

        let before = dataset.orders.len();
        dataset.orders.retain(|order| order.id != order_id);
        if dataset.orders.len() == before {
            debug!("삭제 대상 주문 없음: {}", order_id);
            return Ok(());
        }
        dataset.activities.remove(order_id);

        info!("주문 삭제 저장: {}", order_id);
        Ok(())
    }

    async fn list_activities(&self, order_id: &str) -> BoardResult<Vec<Activity>> {
        let dataset = self.dataset.read().await;
        let mut activities = dataset.activities_for(order_id).to_vec();
        activities.sort_by_key(|activity| activity.timestamp);
        debug!("활동 기록 조회: {} ({}건)", order_id, activities.len());
        Ok(activities)
    }

    async fn list_testimonials(&self) -> BoardResult<Vec<Testimonial>> {
        Ok(self.dataset.read().await.testimonials.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityKind;

    #[tokio::test]
    async fn test_update_status_records_activity() {
        let provider = MockDataProvider::default();
        let before = provider.list_activities("2").await.unwrap().len();

        let order = provider.update_order_status("2", OrderStatus::InProgress).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::InProgress);

        let activities = provider.list_activities("2").await.unwrap();
        assert_eq!(activities.len(), before + 1);
        let latest = activities.last().unwrap();
        assert_eq!(latest.kind(), ActivityKind::StatusChange);
        assert_eq!(latest.event.describe(), "Status changed from pending to in_progress");
    }

    #[tokio::test]
    async fn test_unknown_order_is_silent_noop() {
        let provider = MockDataProvider::default();
        let before = provider.list_orders().await.unwrap();

        assert_eq!(provider.update_order_status("missing", OrderStatus::Paused).await.unwrap(), None);
        assert!(provider.delete_order("missing").await.is_ok());
        // 두 번 삭제해도 결과는 같음
        provider.delete_order("3").await.unwrap();
        provider.delete_order("3").await.unwrap();

        let after = provider.list_orders().await.unwrap();
        assert_eq!(after.len(), before.len() - 1);
        assert!(provider.list_activities("missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_order_and_history() {
        let provider = MockDataProvider::default();
        provider.delete_order("1").await.unwrap();

        let orders = provider.list_orders().await.unwrap();
        assert_eq!(orders.len(), 4);
        assert!(orders.iter().all(|order| order.id != "1"));
        assert!(provider.list_activities("1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_activities_are_chronological() {
        let provider = MockDataProvider::default();
        let activities = provider.list_activities("1").await.unwrap();
        assert!(activities.windows(2).all(|pair| pair[0].timestamp <= pair[1].timestamp));
        assert_eq!(provider.list_testimonials().await.unwrap().len(), 15);
    }
}
