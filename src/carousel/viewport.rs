//! 화면 폭에 따른 페이지 크기

/// 3개 표시 기준 폭 (px)
pub const WIDE_BREAKPOINT: u32 = 1200;
/// 2개 표시 기준 폭 (px)
pub const MEDIUM_BREAKPOINT: u32 = 768;

/// 화면 폭으로 한 페이지에 보일 항목 수 계산
pub fn items_per_page(viewport_width: u32) -> usize {
    if viewport_width >= WIDE_BREAKPOINT {
        3
    } else if viewport_width >= MEDIUM_BREAKPOINT {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        assert_eq!(items_per_page(1920), 3);
        assert_eq!(items_per_page(1200), 3);
        assert_eq!(items_per_page(1199), 2);
        assert_eq!(items_per_page(768), 2);
        assert_eq!(items_per_page(767), 1);
        assert_eq!(items_per_page(0), 1);
    }
}
