use super::*;

const THRESHOLD: f64 = 100.0;

#[test]
fn threshold_is_exclusive() {
    assert!(!is_scrolled(100.0, THRESHOLD));
    assert!(is_scrolled(100.5, THRESHOLD));
    assert!(!is_scrolled(0.0, THRESHOLD));
}

#[test]
fn scroll_down_then_up_adds_then_removes() {
    let mut header = HeaderState::default();
    assert_eq!(header.on_scroll(150.0, THRESHOLD), Some(true));
    assert!(header.scrolled);
    assert_eq!(header.on_scroll(0.0, THRESHOLD), Some(false));
    assert!(!header.scrolled);
}

#[test]
fn repeated_positions_change_nothing() {
    let mut header = HeaderState::default();
    header.on_scroll(150.0, THRESHOLD);
    assert_eq!(header.on_scroll(150.0, THRESHOLD), None);
    assert_eq!(header.on_scroll(400.0, THRESHOLD), None);
    assert!(header.scrolled);
}

#[test]
fn staying_below_threshold_never_renders() {
    let mut header = HeaderState::default();
    for offset in [0.0, 20.0, 99.0, 100.0] {
        assert_eq!(header.on_scroll(offset, THRESHOLD), None);
    }
}
