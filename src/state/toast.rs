//! Transient notification queue.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Stable identity for dismissal.
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a success toast, returning its id.
    pub fn success(&mut self, message: &str) -> u64 {
        self.push(ToastKind::Success, message)
    }

    /// Queue an error toast, returning its id.
    pub fn error(&mut self, message: &str) -> u64 {
        self.push(ToastKind::Error, message)
    }

    fn push(&mut self, kind: ToastKind, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message: message.to_owned() });
        id
    }

    /// Remove one toast; unknown ids are a no-op so a timed dismissal
    /// cannot race a manual close.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
