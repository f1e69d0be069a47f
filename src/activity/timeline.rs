//! 주문 활동 로그
//!
//! 추가만 가능한 로그입니다. 항목은 항상 시각 오름차순으로 유지되며,
//! 같은 시각의 항목은 추가된 순서를 따릅니다.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::activity::model::{Activity, ActivityKind};

/// 활동 유형 필터
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityFilter {
    #[default]
    All,
    Only(ActivityKind),
}

impl ActivityFilter {
    pub fn matches(&self, activity: &Activity) -> bool {
        match self {
            ActivityFilter::All => true,
            ActivityFilter::Only(kind) => activity.kind() == *kind,
        }
    }
}

/// 주문 하나의 활동 로그
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    order_id: String,
    entries: Vec<Activity>,
}

impl ActivityLog {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            entries: Vec::new(),
        }
    }

    /// 기존 항목으로 로그 구성 (다른 주문 항목은 버림)
    pub fn from_entries(order_id: impl Into<String>, entries: impl IntoIterator<Item = Activity>) -> Self {
        let mut log = Self::new(order_id);
        for entry in entries {
            log.append(entry);
        }
        log
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// 항목 추가
    ///
    /// 다른 주문의 항목이면 무시하고 `false`를 반환합니다.
    pub fn append(&mut self, activity: Activity) -> bool {
        if activity.order_id != self.order_id {
            debug!(
                "다른 주문의 활동 무시: {} (로그: {})",
                activity.order_id, self.order_id
            );
            return false;
        }

        let position = self
            .entries
            .partition_point(|existing| existing.timestamp <= activity.timestamp);
        self.entries.insert(position, activity);
        true
    }

    pub fn entries(&self) -> &[Activity] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&Activity> {
        self.entries.last()
    }

    pub fn filtered(&self, filter: ActivityFilter) -> Vec<&Activity> {
        self.entries.iter().filter(|a| filter.matches(a)).collect()
    }
}
