//! 주문 필터
//!
//! 검색어, 상태, 채팅 활동 세 가지 조건을 독립적으로 보관하고
//! 세 조건의 논리곱으로 주문을 거릅니다. 각 조건은 "필터 없음" 값일 때
//! 건너뜁니다 (빈 검색어, `All`, `None`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::roster::model::{Order, OrderStatus};

/// 상태 필터
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }
}

impl From<OrderStatus> for StatusFilter {
    fn from(status: OrderStatus) -> Self {
        StatusFilter::Only(status)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse::<OrderStatus>().map(StatusFilter::Only)
    }
}

/// 주문 필터 상태
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFilter {
    search_query: String,
    status: StatusFilter,
    chat_activity: Option<bool>,
}

impl OrderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn status(&self) -> StatusFilter {
        self.status
    }

    pub fn chat_activity(&self) -> Option<bool> {
        self.chat_activity
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
    }

    pub fn set_chat_activity(&mut self, chat_activity: Option<bool>) {
        self.chat_activity = chat_activity;
    }

    /// 하나 이상의 조건이 걸려 있는지
    pub fn is_active(&self) -> bool {
        !self.search_query.is_empty() || self.status != StatusFilter::All || self.chat_activity.is_some()
    }

    /// 단일 주문 검사
    pub fn matches(&self, order: &Order) -> bool {
        self.matches_with(order, &self.search_query.to_lowercase())
    }

    /// 주문 목록에 필터 적용 (원래 순서 유지)
    pub fn apply(&self, orders: &[Order]) -> Vec<Order> {
        let lowered = self.search_query.to_lowercase();
        orders
            .iter()
            .filter(|order| self.matches_with(order, &lowered))
            .cloned()
            .collect()
    }

    fn matches_with(&self, order: &Order, lowered_query: &str) -> bool {
        if !lowered_query.is_empty() && !order.contains_lowered(lowered_query) {
            return false;
        }
        if !self.status.matches(order.status) {
            return false;
        }
        match self.chat_activity {
            Some(expected) => order.chat_activity == expected,
            None => true,
        }
    }
}
