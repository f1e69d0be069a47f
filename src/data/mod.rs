/**
* filename : mod
* author : HAMA
* date: 2025. 6. 2.
* description: 데모 데이터셋, 로더, 데이터 제공자
**/

pub mod fake_data;
pub mod loader;
pub mod provider;

pub use fake_data::FakeDataset;
pub use loader::DataLoader;
pub use provider::{DataProvider, MockDataProvider};
