use super::*;

#[test]
fn starts_closed() {
    let state = FaqState::default();
    assert_eq!(state.open, None);
    assert!(!state.is_open(0));
}

#[test]
fn toggle_opens_then_closes_same_item() {
    let mut state = FaqState::default();
    state.toggle(2);
    assert!(state.is_open(2));
    state.toggle(2);
    assert_eq!(state.open, None);
}

#[test]
fn opening_another_item_closes_previous() {
    let mut state = FaqState::default();
    state.toggle(0);
    state.toggle(3);
    assert!(!state.is_open(0));
    assert!(state.is_open(3));
}
