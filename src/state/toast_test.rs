use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    let b = state.push(ToastKind::Success, "b");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].message, "b");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    let b = state.push(ToastKind::Error, "b");
    assert!(state.dismiss(a));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_false() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "a");
    assert!(!state.dismiss(42));
    assert_eq!(state.items.len(), 1);
}

#[test]
fn overflow_drops_oldest() {
    let mut state = ToastState::default();
    for i in 0..5 {
        state.push(ToastKind::Info, format!("t{i}"));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE_TOASTS);
    let messages: Vec<_> = state.items.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["t2", "t3", "t4"]);
}

#[test]
fn ids_do_not_repeat_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    state.dismiss(a);
    let b = state.push(ToastKind::Info, "b");
    assert_ne!(a, b);
}

#[test]
fn kind_maps_to_modifier_class() {
    assert_eq!(ToastKind::Error.class(), "toast toast--error");
    assert_eq!(ToastKind::Success.class(), "toast toast--success");
}

#[test]
fn retain_live_drops_handles_of_gone_toasts() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    let b = state.push(ToastKind::Info, "b");
    let mut handles = vec![(a, "timer-a"), (b, "timer-b")];
    state.dismiss(a);
    state.retain_live(&mut handles);
    assert_eq!(handles, vec![(b, "timer-b")]);
    assert!(!state.contains(a));
    assert!(state.contains(b));
}

#[test]
fn retain_live_drops_handles_of_overflowed_toasts() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "0");
    let mut handles = vec![(first, ())];
    for n in 1..=MAX_VISIBLE_TOASTS {
        let id = state.push(ToastKind::Info, n.to_string());
        handles.push((id, ()));
    }
    state.retain_live(&mut handles);
    assert_eq!(handles.len(), MAX_VISIBLE_TOASTS);
    assert!(handles.iter().all(|(id, ())| *id != first));
}
