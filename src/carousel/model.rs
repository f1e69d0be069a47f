//! 고객 후기 모델

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};

/// 고객 후기
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    /// 작성자 이름
    pub name: String,
    /// 이용한 서비스
    pub service: String,
    pub text: String,
    /// 별점 (1~5)
    pub rating: u8,
    pub region: Option<String>,
    pub from_rank: Option<String>,
    pub to_rank: Option<String>,
}

impl Testimonial {
    /// 새 후기 생성 (별점 검증)
    pub fn new(
        id: u32,
        name: impl Into<String>,
        service: impl Into<String>,
        text: impl Into<String>,
        rating: u8,
    ) -> BoardResult<Self> {
        if !(1..=5).contains(&rating) {
            return Err(BoardError::InvalidRating(rating));
        }

        Ok(Self {
            id,
            name: name.into(),
            service: service.into(),
            text: text.into(),
            rating,
            region: None,
            from_rank: None,
            to_rank: None,
        })
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_rank_transition(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from_rank = Some(from.into());
        self.to_rank = Some(to.into());
        self
    }

    /// 양쪽 랭크가 모두 있을 때만 반환
    pub fn rank_transition(&self) -> Option<(&str, &str)> {
        match (&self.from_rank, &self.to_rank) {
            (Some(from), Some(to)) => Some((from.as_str(), to.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_is_validated() {
        assert!(Testimonial::new(1, "A", "B", "C", 5).is_ok());
        assert!(matches!(
            Testimonial::new(1, "A", "B", "C", 0),
            Err(BoardError::InvalidRating(0))
        ));
        assert!(Testimonial::new(1, "A", "B", "C", 6).is_err());
    }

    #[test]
    fn test_rank_transition_needs_both_ends() {
        let mut testimonial = Testimonial::new(1, "A", "B", "C", 4).unwrap();
        assert_eq!(testimonial.rank_transition(), None);

        testimonial.from_rank = Some("Gold I".to_string());
        assert_eq!(testimonial.rank_transition(), None);

        let testimonial = testimonial.with_rank_transition("Gold I", "Diamond V");
        assert_eq!(testimonial.rank_transition(), Some(("Gold I", "Diamond V")));
    }
}
