use super::*;

#[test]
fn toasts_get_sequential_ids() {
    let mut state = ToastState::default();
    let a = state.success("first");
    let b = state.error("second");
    let c = state.success("third");
    assert_eq!((a, b, c), (0, 1, 2));
}

#[test]
fn success_and_error_set_the_kind() {
    let mut state = ToastState::default();
    state.success("saved");
    state.error("failed");
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
    assert_eq!(state.toasts[0].message, "saved");
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let a = state.success("one");
    let b = state.success("two");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.success("one");
    state.dismiss(99);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = ToastState::default();
    let a = state.success("one");
    state.dismiss(a);
    let b = state.success("two");
    assert_ne!(a, b);
}
