use std::fs;
use std::path::Path;

use log::{error, info, warn};

use crate::data::FakeDataset;
use crate::error::BoardResult;

/// 데이터 로더
pub struct DataLoader;

impl DataLoader {
    /// 데이터셋 로드 (파일이 없으면 기본값을 만들어 저장)
    pub fn load_dataset(data_path: &str) -> BoardResult<FakeDataset> {
        if Path::new(data_path).exists() {
            info!("📂 데이터셋 파일 발견: {}", data_path);
            Self::load_from_json(data_path)
        } else {
            warn!("📂 데이터셋 파일이 없음: {}, 기본값 생성", data_path);
            Self::create_default_dataset(data_path)
        }
    }

    /// JSON 파일에서 데이터셋 로드
    ///
    /// 별점이 1~5를 벗어난 후기는 경고 후 제외하고, 100을 넘는 진행률은
    /// 100으로 고정합니다.
    fn load_from_json(data_path: &str) -> BoardResult<FakeDataset> {
        let mut dataset = FakeDataset::load_from_file(data_path)?;

        for order in dataset.orders.iter_mut().filter(|order| order.progress > 100) {
            warn!("⚠️ 진행률 범위 초과 보정: {} {}% -> 100%", order.order_code, order.progress);
            order.progress = 100;
        }

        let before = dataset.testimonials.len();
        dataset.testimonials.retain(|testimonial| {
            let valid = (1..=5).contains(&testimonial.rating);
            if !valid {
                warn!("⚠️ 잘못된 별점 후기 제외: id={} rating={}", testimonial.id, testimonial.rating);
            }
            valid
        });

        info!(
            "✅ 데이터셋 로드 완료: 주문 {}개, 활동 기록 {}건, 후기 {}/{}개",
            dataset.orders.len(),
            dataset.activities.values().map(Vec::len).sum::<usize>(),
            dataset.testimonials.len(),
            before
        );
        Ok(dataset)
    }

    /// 기본 데이터셋 생성 및 저장
    fn create_default_dataset(data_path: &str) -> BoardResult<FakeDataset> {
        let dataset = FakeDataset::default();

        // 디렉토리 생성
        if let Some(parent) = Path::new(data_path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    error!("📁 디렉토리 생성 실패: {}", e);
                    e
                })?;
            }
        }

        // 저장 실패는 치명적이지 않음
        match dataset.save_to_file(data_path) {
            Ok(_) => info!("✅ 기본 데이터셋 생성 완료: {}", data_path),
            Err(e) => warn!("⚠️ 데이터셋 저장 실패: {}", e),
        }

        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("boostboard-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[test]
    fn test_missing_file_creates_default() {
        let path = temp_path("dataset.json");
        let path_str = path.to_string_lossy().to_string();

        let dataset = DataLoader::load_dataset(&path_str).unwrap();
        assert_eq!(dataset.orders.len(), 5);
        assert!(path.exists());

        // 두 번째 로드는 저장된 파일을 읽음
        let reloaded = DataLoader::load_dataset(&path_str).unwrap();
        assert_eq!(reloaded.orders, dataset.orders);

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_invalid_ratings_are_dropped() {
        let path = temp_path("dataset.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let path_str = path.to_string_lossy().to_string();

        let mut dataset = FakeDataset::default();
        dataset.testimonials[0].rating = 9;
        dataset.save_to_file(&path_str).unwrap();

        let loaded = DataLoader::load_dataset(&path_str).unwrap();
        assert_eq!(loaded.testimonials.len(), 14);
        assert!(loaded.testimonials.iter().all(|t| t.id != 1));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        let path = temp_path("dataset.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let path_str = path.to_string_lossy().to_string();

        let mut dataset = FakeDataset::default();
        dataset.orders[0].progress = 250;
        dataset.save_to_file(&path_str).unwrap();

        let loaded = DataLoader::load_dataset(&path_str).unwrap();
        assert_eq!(loaded.orders[0].progress, 100);
        // 범위 안의 값은 그대로
        assert_eq!(loaded.orders[3].progress, 35);
        assert!(loaded.orders.iter().all(|order| order.progress <= 100));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = temp_path("broken.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let result = DataLoader::load_dataset(&path.to_string_lossy());
        assert!(matches!(result, Err(crate::error::BoardError::Serialization(_))));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
