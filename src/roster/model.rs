//! 주문 로스터의 기본 모델
//!
//! 이 모듈은 부스팅 주문, 의뢰인, 부스터, 랭크, 주문 상태 등
//! 주문 관리 대시보드의 핵심 데이터 모델을 정의합니다.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::BoardError;

/// 주문 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
  /// 접수 대기
  Pending,
  /// 진행 중
  InProgress,
  /// 완료
  Completed,
  /// 취소됨
  Cancelled,
  /// 일시 중지
  Paused,
}

impl OrderStatus {
  /// 전체 상태 목록
  pub const ALL: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::InProgress,
    OrderStatus::Completed,
    OrderStatus::Cancelled,
    OrderStatus::Paused,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      OrderStatus::Pending => "pending",
      OrderStatus::InProgress => "in_progress",
      OrderStatus::Completed => "completed",
      OrderStatus::Cancelled => "cancelled",
      OrderStatus::Paused => "paused",
    }
  }

  /// 아직 종료되지 않은 상태인지 (대기/진행/중지)
  pub fn is_open(&self) -> bool {
    matches!(
      self,
      OrderStatus::Pending | OrderStatus::InProgress | OrderStatus::Paused
    )
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for OrderStatus {
  type Err = BoardError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    OrderStatus::ALL
      .iter()
      .copied()
      .find(|status| status.as_str() == s)
      .ok_or_else(|| BoardError::UnknownStatus(s.to_string()))
  }
}

/// 부스터 접속 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
  Online,
  Offline,
  Away,
}

impl Presence {
  /// 시뮬레이션이 고르는 후보 (균등 분포)
  pub const ALL: [Presence; 3] = [Presence::Online, Presence::Offline, Presence::Away];

  pub fn as_str(&self) -> &'static str {
    match self {
      Presence::Online => "online",
      Presence::Offline => "offline",
      Presence::Away => "away",
    }
  }
}

impl fmt::Display for Presence {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Presence {
  type Err = BoardError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Presence::ALL
      .iter()
      .copied()
      .find(|presence| presence.as_str() == s)
      .ok_or_else(|| BoardError::UnknownPresence(s.to_string()))
  }
}

/// 랭크 티어
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
  Unranked,
  Iron,
  Bronze,
  Silver,
  Gold,
  Platinum,
  Diamond,
  Master,
  Grandmaster,
  Challenger,
}

impl Tier {
  pub const ALL: [Tier; 10] = [
    Tier::Unranked,
    Tier::Iron,
    Tier::Bronze,
    Tier::Silver,
    Tier::Gold,
    Tier::Platinum,
    Tier::Diamond,
    Tier::Master,
    Tier::Grandmaster,
    Tier::Challenger,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Tier::Unranked => "unranked",
      Tier::Iron => "iron",
      Tier::Bronze => "bronze",
      Tier::Silver => "silver",
      Tier::Gold => "gold",
      Tier::Platinum => "platinum",
      Tier::Diamond => "diamond",
      Tier::Master => "master",
      Tier::Grandmaster => "grandmaster",
      Tier::Challenger => "challenger",
    }
  }
}

impl fmt::Display for Tier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Tier {
  type Err = BoardError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let lowered = s.to_ascii_lowercase();
    Tier::ALL
      .iter()
      .copied()
      .find(|tier| tier.as_str() == lowered)
      .ok_or_else(|| BoardError::UnknownTier(s.to_string()))
  }
}

/// 랭크 (티어 × 디비전)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
  pub tier: Tier,
  /// 디비전 (언랭크/마스터 이상은 0)
  pub division: u8,
}

impl Rank {
  pub fn new(tier: Tier, division: u8) -> Self {
    Self { tier, division }
  }
}

impl fmt::Display for Rank {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.division == 0 {
      write!(f, "{}", self.tier)
    } else {
      write!(f, "{} {}", self.tier, self.division)
    }
  }
}

/// 의뢰인
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
  pub id: String,
  pub name: String,
  /// 아바타 이미지 참조 (URL)
  pub avatar: String,
}

impl Client {
  pub fn new(id: impl Into<String>, name: impl Into<String>, avatar: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
      avatar: avatar.into(),
    }
  }
}

/// 담당 부스터
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booster {
  pub id: String,
  pub name: String,
  pub avatar: String,
  /// 접속 상태
  pub presence: Presence,
}

impl Booster {
  pub fn new(
    id: impl Into<String>,
    name: impl Into<String>,
    avatar: impl Into<String>,
    presence: Presence,
  ) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
      avatar: avatar.into(),
      presence,
    }
  }
}

/// 부스팅 주문
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
  /// 내부 고유 ID
  pub id: String,
  /// 화면 표시용 주문 코드 (예: "ORD-1234")
  pub order_code: String,
  pub client: Client,
  pub booster: Booster,
  /// 서비스 이름 (예: "Rank Boost")
  pub service: String,
  pub current_rank: Rank,
  pub desired_rank: Rank,
  pub status: OrderStatus,
  /// 진행률 (0~100)
  pub progress: u8,
  /// 예상 소요 시간 (예: "2 days")
  pub estimated_time: String,
  pub price: f64,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  /// 읽지 않은 채팅 여부
  pub chat_activity: bool,
  pub description: String,
  pub client_notes: String,
  pub requirements: Vec<String>,
}

impl Order {
  /// 새 주문 생성 (대기 상태, 진행률 0)
  pub fn new(
    order_code: impl Into<String>,
    client: Client,
    booster: Booster,
    service: impl Into<String>,
    current_rank: Rank,
    desired_rank: Rank,
  ) -> Self {
    let now = Utc::now();

    Self {
      id: Uuid::new_v4().to_string(),
      order_code: order_code.into(),
      client,
      booster,
      service: service.into(),
      current_rank,
      desired_rank,
      status: OrderStatus::Pending,
      progress: 0,
      estimated_time: String::new(),
      price: 0.0,
      created_at: now,
      updated_at: now,
      chat_activity: false,
      description: String::new(),
      client_notes: String::new(),
      requirements: Vec::new(),
    }
  }

  pub fn with_id(mut self, id: impl Into<String>) -> Self {
    self.id = id.into();
    self
  }

  pub fn with_status(mut self, status: OrderStatus) -> Self {
    self.status = status;
    self
  }

  /// 진행률 설정 (100 초과는 100으로 고정)
  pub fn with_progress(mut self, progress: u8) -> Self {
    self.progress = progress.min(100);
    self
  }

  pub fn with_price(mut self, price: f64, estimated_time: impl Into<String>) -> Self {
    self.price = price;
    self.estimated_time = estimated_time.into();
    self
  }

  pub fn with_chat_activity(mut self, chat_activity: bool) -> Self {
    self.chat_activity = chat_activity;
    self
  }

  pub fn with_notes(mut self, description: impl Into<String>, client_notes: impl Into<String>) -> Self {
    self.description = description.into();
    self.client_notes = client_notes.into();
    self
  }

  pub fn with_requirements<I, S>(mut self, requirements: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.requirements = requirements.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
    self.created_at = created_at;
    self.updated_at = updated_at;
    self
  }

  /// 수정 시각 갱신
  pub fn touch(&mut self) {
    self.updated_at = Utc::now();
  }

  /// 소문자로 정규화된 검색어가 주문 코드/의뢰인/부스터 이름에 포함되는지
  pub(crate) fn contains_lowered(&self, lowered_query: &str) -> bool {
    self.order_code.to_lowercase().contains(lowered_query)
      || self.client.name.to_lowercase().contains(lowered_query)
      || self.booster.name.to_lowercase().contains(lowered_query)
  }
}
