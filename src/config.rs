//! 환경 변수 기반 설정
//!
//! 바이너리는 시작 시 `dotenv`로 `.env`를 읽은 뒤 `BoardConfig::from_env`를 호출합니다.

use std::env;
use std::str::FromStr;

use crate::error::{BoardError, BoardResult};

pub const PRESENCE_INTERVAL_KEY: &str = "BOOSTBOARD_PRESENCE_INTERVAL_MS";
pub const LIVE_MONITORING_KEY: &str = "BOOSTBOARD_LIVE_MONITORING";
pub const CAROUSEL_INTERVAL_KEY: &str = "BOOSTBOARD_CAROUSEL_INTERVAL_MS";
pub const SETTLE_DELAY_KEY: &str = "BOOSTBOARD_SETTLE_DELAY_MS";
pub const VIEWPORT_WIDTH_KEY: &str = "BOOSTBOARD_VIEWPORT_WIDTH";
pub const DEMO_SECONDS_KEY: &str = "BOOSTBOARD_DEMO_SECONDS";
pub const DATASET_PATH_KEY: &str = "BOOSTBOARD_DATASET_PATH";

/// 보드 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// 접속 상태 시뮬레이션 주기 (ms)
    pub presence_interval_ms: u64,
    /// 시작 시 실시간 모니터링 여부
    pub live_monitoring: bool,
    /// 캐러셀 자동 넘김 주기 (ms)
    pub carousel_interval_ms: u64,
    /// 캐러셀 정착 지연 (ms)
    pub settle_delay_ms: u64,
    /// 화면 폭 (px)
    pub viewport_width: u32,
    /// 데모 실행 시간 (초)
    pub demo_seconds: u64,
    /// 데이터셋 JSON 경로 (없으면 내장 데이터)
    pub dataset_path: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            presence_interval_ms: 15_000,
            live_monitoring: true,
            carousel_interval_ms: 5_000,
            settle_delay_ms: 500,
            viewport_width: 1280,
            demo_seconds: 20,
            dataset_path: None,
        }
    }
}

impl BoardConfig {
    /// 프로세스 환경 변수에서 로드
    pub fn from_env() -> BoardResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 조회 함수로 로드 (없는 키는 기본값)
    pub fn from_lookup<F>(lookup: F) -> BoardResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            presence_interval_ms: positive(&lookup, PRESENCE_INTERVAL_KEY, defaults.presence_interval_ms)?,
            live_monitoring: flag(&lookup, LIVE_MONITORING_KEY, defaults.live_monitoring)?,
            carousel_interval_ms: positive(&lookup, CAROUSEL_INTERVAL_KEY, defaults.carousel_interval_ms)?,
            settle_delay_ms: positive(&lookup, SETTLE_DELAY_KEY, defaults.settle_delay_ms)?,
            viewport_width: parsed(&lookup, VIEWPORT_WIDTH_KEY, defaults.viewport_width)?,
            demo_seconds: parsed(&lookup, DEMO_SECONDS_KEY, defaults.demo_seconds)?,
            dataset_path: lookup(DATASET_PATH_KEY).filter(|path| !path.trim().is_empty()),
        })
    }
}

fn invalid(key: &str, value: &str, reason: impl Into<String>) -> BoardError {
    BoardError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn parsed<F, T>(lookup: &F, key: &str, default: T) -> BoardResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| invalid(key, &raw, e.to_string())),
    }
}

/// 0은 타이머 주기로 쓸 수 없음
fn positive<F>(lookup: &F, key: &str, default: u64) -> BoardResult<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let value = parsed(lookup, key, default)?;
    if value == 0 {
        return Err(invalid(key, "0", "0보다 커야 함"));
    }
    Ok(value)
}

fn flag<F>(lookup: &F, key: &str, default: bool) -> BoardResult<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, &raw, "true/false 값이어야 함")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> BoardResult<BoardConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        BoardConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(load(&[]).unwrap(), BoardConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            (PRESENCE_INTERVAL_KEY, "1000"),
            (LIVE_MONITORING_KEY, "off"),
            (VIEWPORT_WIDTH_KEY, " 800 "),
            (DATASET_PATH_KEY, "data/demo.json"),
        ])
        .unwrap();

        assert_eq!(config.presence_interval_ms, 1000);
        assert!(!config.live_monitoring);
        assert_eq!(config.viewport_width, 800);
        assert_eq!(config.dataset_path.as_deref(), Some("data/demo.json"));
        assert_eq!(config.carousel_interval_ms, 5_000);
    }

    #[test]
    fn test_malformed_values_are_errors() {
        let err = load(&[(CAROUSEL_INTERVAL_KEY, "soon")]).unwrap_err();
        match err {
            BoardError::InvalidConfig { key, value, .. } => {
                assert_eq!(key, CAROUSEL_INTERVAL_KEY);
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(load(&[(LIVE_MONITORING_KEY, "maybe")]).is_err());
        assert!(load(&[(SETTLE_DELAY_KEY, "0")]).is_err());
        assert!(load(&[(VIEWPORT_WIDTH_KEY, "-5")]).is_err());
    }
}
