//! 고객 후기 캐러셀
//!
//! 화면 폭에 따라 1~3개씩 원형으로 보여주고, 5초마다 자동으로 넘기며,
//! 포인터가 올라가 있는 동안은 멈춥니다.

pub mod model;
pub mod viewport;
pub mod state;
pub mod carousel;

pub use model::Testimonial;
pub use viewport::items_per_page;
pub use state::CarouselState;
pub use carousel::{Carousel, CarouselSnapshot, CarouselTiming};
