//! Shared driver checks run against every front-end

use deskcalc::driver::{
    verify_basic_arithmetic, verify_clear_semantics,
    verify_divide_by_zero, verify_left_to_right_chaining, verify_memory, verify_negative_entry,
    verify_replace_after_result, verify_single_decimal_point, CalculatorDriver, HeadlessDriver,
};

#[test]
fn test_headless_basic_arithmetic() {
    verify_basic_arithmetic(&mut HeadlessDriver::new());
}

#[test]
fn test_headless_chaining() {
    verify_left_to_right_chaining(&mut HeadlessDriver::new());
}

#[test]
fn test_headless_replace_after_result() {
    verify_replace_after_result(&mut HeadlessDriver::new());
}

#[test]
fn test_headless_decimal() {
    verify_single_decimal_point(&mut HeadlessDriver::new());
}

#[test]
fn test_headless_divide_by_zero() {
    verify_divide_by_zero(&mut HeadlessDriver::new());
}

#[test]
fn test_headless_memory() {
    verify_memory(&mut HeadlessDriver::new());
}

#[test]
fn test_headless_clear() {
    verify_clear_semantics(&mut HeadlessDriver::new());
}

#[test]
fn test_headless_negative_entry() {
    verify_negative_entry(&mut HeadlessDriver::new());
}

#[test]
fn test_memory_clear_then_recall_leaves_display() {
    let mut driver = HeadlessDriver::new();
    driver.enter("6 MS MC 1 2").unwrap();
    driver.enter("MR").unwrap();
    assert_eq!(driver.display(), "612");
}

#[cfg(feature = "tui")]
mod tui {
    use super::*;
    use deskcalc::config::UiConfig;
    use deskcalc::driver::{verify_all, TuiDriver};
    use deskcalc::tui::CalculatorApp;
    use ratatui::layout::Rect;

    #[test]
    fn test_tui_verify_all() {
        verify_all(&mut TuiDriver::new());
    }

    #[test]
    fn test_tui_without_help_sidebar() {
        let ui = UiConfig {
            show_help: false,
            ..UiConfig::default()
        };
        let app = CalculatorApp::with_config(ui);
        verify_all(&mut TuiDriver::with_app(app, Rect::new(0, 0, 40, 24)));
    }

    #[test]
    fn test_tui_and_headless_agree() {
        let sequences = [
            "1 . 5 + 2 . 2 5 =",
            "9 - 1 2 =",
            "7 MS * MR =",
            "8 / 0 = 4 + 4 =",
            "0 0 0 5 * 3 =",
        ];
        for sequence in sequences {
            let mut headless = HeadlessDriver::new();
            let mut tui = TuiDriver::new();
            headless.enter(sequence).unwrap();
            tui.enter(sequence).unwrap();
            assert_eq!(tui.display(), headless.display(), "{sequence}");
        }
    }
}
