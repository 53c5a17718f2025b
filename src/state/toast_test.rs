use super::*;

#[test]
fn push_assigns_monotonic_ids() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "saved");
    let second = state.push(ToastKind::Error, "failed");
    assert!(second > first);
    assert_eq!(state.toasts().len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "one");
    let second = state.push(ToastKind::Success, "two");

    state.dismiss(first);
    let remaining: Vec<u64> = state.toasts().iter().map(|t| t.id).collect();
    assert_eq!(remaining, vec![second]);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(ToastKind::Error, "kept");
    state.dismiss(999);
    assert_eq!(state.toasts().len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "one");
    state.dismiss(first);
    let second = state.push(ToastKind::Success, "two");
    assert!(second > first);
}
