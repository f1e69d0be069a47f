//! 주문 활동 로그 모듈
//!
//! 주문별 감사 기록(상태 변경, 진행률, 채팅, 부스터 변경, 메모)을 다룹니다.

pub mod model;
pub mod timeline;

pub use model::{Activity, ActivityEvent, ActivityKind, Actor, ActorRole};
pub use timeline::{ActivityFilter, ActivityLog};
