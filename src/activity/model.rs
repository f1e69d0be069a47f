//! 주문 활동 기록 모델
//!
//! 주문에 붙는 감사 로그 항목을 정의합니다. 유형마다 담는 내용이 달라서
//! 유형과 내용을 하나의 열거형(`ActivityEvent`)으로 묶었습니다.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::BoardError;

/// 활동 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    StatusChange,
    ProgressUpdate,
    ChatMessage,
    BoosterChange,
    NoteAdded,
    ClientUpdate,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 6] = [
        ActivityKind::StatusChange,
        ActivityKind::ProgressUpdate,
        ActivityKind::ChatMessage,
        ActivityKind::BoosterChange,
        ActivityKind::NoteAdded,
        ActivityKind::ClientUpdate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::StatusChange => "status_change",
            ActivityKind::ProgressUpdate => "progress_update",
            ActivityKind::ChatMessage => "chat_message",
            ActivityKind::BoosterChange => "booster_change",
            ActivityKind::NoteAdded => "note_added",
            ActivityKind::ClientUpdate => "client_update",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| BoardError::UnknownActivityKind(s.to_string()))
    }
}

/// 행위자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    Admin,
    Booster,
    Client,
    System,
}

/// 활동 행위자
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub role: ActorRole,
}

impl Actor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, avatar: impl Into<String>, role: ActorRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: avatar.into(),
            role,
        }
    }

    /// 시스템 행위자
    pub fn system() -> Self {
        Self::new("system", "System", "", ActorRole::System)
    }
}

/// 유형별 활동 내용
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ActivityEvent {
    StatusChange { from: String, to: String },
    ProgressUpdate { previous: u8, new: u8 },
    ChatMessage { message: String },
    BoosterChange { from: String, to: String },
    NoteAdded { note: String },
    ClientUpdate { message: String },
}

impl ActivityEvent {
    pub fn kind(&self) -> ActivityKind {
        match self {
            ActivityEvent::StatusChange { .. } => ActivityKind::StatusChange,
            ActivityEvent::ProgressUpdate { .. } => ActivityKind::ProgressUpdate,
            ActivityEvent::ChatMessage { .. } => ActivityKind::ChatMessage,
            ActivityEvent::BoosterChange { .. } => ActivityKind::BoosterChange,
            ActivityEvent::NoteAdded { .. } => ActivityKind::NoteAdded,
            ActivityEvent::ClientUpdate { .. } => ActivityKind::ClientUpdate,
        }
    }

    /// 한 줄 설명
    pub fn describe(&self) -> String {
        match self {
            ActivityEvent::StatusChange { from, to } => format!("Status changed from {} to {}", from, to),
            ActivityEvent::ProgressUpdate { previous, new } => {
                format!("Progress updated from {}% to {}%", previous, new)
            }
            ActivityEvent::ChatMessage { message } => message.clone(),
            ActivityEvent::BoosterChange { from, to } => format!("Booster changed from {} to {}", from, to),
            ActivityEvent::NoteAdded { note } => format!("Note: {}", note),
            ActivityEvent::ClientUpdate { message } => format!("Client update: {}", message),
        }
    }
}

/// 주문 활동 기록 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    /// 상위 주문 ID
    pub order_id: String,
    pub timestamp: DateTime<Utc>,
    pub actor: Actor,
    pub event: ActivityEvent,
}

impl Activity {
    pub fn new(order_id: impl Into<String>, timestamp: DateTime<Utc>, actor: Actor, event: ActivityEvent) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            order_id: order_id.into(),
            timestamp,
            actor,
            event,
        }
    }

    pub fn kind(&self) -> ActivityKind {
        self.event.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_event() {
        let event = ActivityEvent::ProgressUpdate { previous: 0, new: 15 };
        assert_eq!(event.kind(), ActivityKind::ProgressUpdate);
        assert_eq!(event.describe(), "Progress updated from 0% to 15%");
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = ActivityEvent::StatusChange {
            from: "pending".to_string(),
            to: "in_progress".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "status_change");
        assert_eq!(json["data"]["to"], "in_progress");
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("note_added".parse::<ActivityKind>().unwrap(), ActivityKind::NoteAdded);
        assert!(matches!(
            "deleted".parse::<ActivityKind>(),
            Err(BoardError::UnknownActivityKind(_))
        ));
    }
}
