//! boostboard: 부스팅 마켓플레이스 화면 제어 로직
//!
//! - `roster`: 주문 로스터 필터, 접속 상태 시뮬레이션, 상세 화면
//! - `activity`: 주문별 활동 기록
//! - `carousel`: 고객 후기 캐러셀

pub mod activity;
pub mod carousel;
pub mod config;
pub mod data;
pub mod error;
pub mod random;
pub mod roster;
pub mod timer;

pub use config::BoardConfig;
pub use error::{BoardError, BoardResult};
