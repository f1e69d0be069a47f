//! 난수 소스
//!
//! 접속 상태 시뮬레이션은 난수에 의존하므로 테스트에서 결정적으로
//! 검증할 수 있도록 난수 소스를 주입 가능한 트레이트로 분리합니다.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 균등 분포 인덱스를 뽑는 난수 소스
pub trait RandomSource: Send {
    /// `[0, upper)` 범위의 인덱스 반환 (`upper`가 0이면 0)
    fn next_index(&mut self, upper: usize) -> usize;
}

/// `rand` 기반 기본 난수 소스
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// OS 엔트로피로 초기화
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// 고정 시드로 초기화 (재현 가능한 데모용)
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for StdRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.rng.gen_range(0..upper)
    }
}

/// 미리 정한 값을 순서대로 돌려주는 난수 소스
///
/// 값은 `upper`로 나눈 나머지로 사용되고, 소진되면 0을 반환합니다.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<usize>,
    draws: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
            draws: 0,
        }
    }

    /// 지금까지 뽑은 횟수
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        self.draws += 1;
        if upper == 0 {
            return 0;
        }
        self.values.pop_front().map(|v| v % upper).unwrap_or(0)
    }
}
