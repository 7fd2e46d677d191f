//! Transient toast queue surfaced by the toast host component.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

pub static TOASTS: GlobalSignal<Vec<Toast>> = Signal::global(Vec::new);

static NEXT_TOAST_ID: GlobalSignal<u64> = Signal::global(|| 0);

fn push(level: ToastLevel, message: impl Into<String>) {
    let id = {
        let mut next = NEXT_TOAST_ID.write();
        *next += 1;
        *next
    };
    TOASTS.write().push(Toast {
        id,
        level,
        message: message.into(),
    });
}

pub fn push_success(message: impl Into<String>) {
    push(ToastLevel::Success, message);
}

pub fn push_error(message: impl Into<String>) {
    push(ToastLevel::Error, message);
}

pub fn dismiss_toast(id: u64) {
    TOASTS.write().retain(|toast| toast.id != id);
}

pub fn clear() {
    TOASTS.write().clear();
}
