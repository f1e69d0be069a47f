/**
* filename : mod
* author : HAMA
* date: 2025. 6. 2.
* description: 주문 로스터 (필터/실시간 모니터링/상세 화면)
**/

pub mod model;
pub mod filter;
pub mod roster;
pub mod detail;
pub mod monitor;

pub use model::{
  Order,
  OrderStatus,
  Presence,
  Tier,
  Rank,
  Client,
  Booster,
};

pub use filter::{OrderFilter, StatusFilter};
pub use roster::{Roster, PresenceChange, IntentOutcome};
pub use detail::{OrderDetailView, OrderAction, OrderIntent, DetailSection, DetailTab};
pub use monitor::{RosterMonitor, MonitorConfig};
