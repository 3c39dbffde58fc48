use jiff::{SignedDuration, Timestamp};
use uuid::Uuid;

const DEFAULT_DURATION: SignedDuration = SignedDuration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Error,
    Success,
    Info,
}

/// A transient message shown to staff after a remote operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub created_at: Timestamp,
    /// None for no auto-dismiss
    pub duration: Option<SignedDuration>,
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            toast_type,
            created_at: Timestamp::now(),
            duration: Some(DEFAULT_DURATION),
        }
    }

    pub fn error(message: String) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn success(message: String) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn info(message: String) -> Self {
        Self::new(message, ToastType::Info)
    }

    pub fn duration(mut self, duration: SignedDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn no_auto_dismiss(mut self) -> Self {
        self.duration = None;
        self
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.duration
            .is_some_and(|d| now.duration_since(self.created_at) >= d)
    }
}

/// Pending notifications, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    toasts: Vec<Toast>,
}

impl Notifications {
    pub fn add(&mut self, toast: Toast) -> Uuid {
        let id = toast.id;
        match toast.toast_type {
            ToastType::Error => tracing::warn!(message = %toast.message, "error notification"),
            _ => tracing::debug!(message = %toast.message, "notification"),
        }
        self.toasts.push(toast);
        id
    }

    pub fn error(&mut self, message: impl Into<String>) -> Uuid {
        self.add(Toast::error(message.into()))
    }

    pub fn success(&mut self, message: impl Into<String>) -> Uuid {
        self.add(Toast::success(message.into()))
    }

    pub fn info(&mut self, message: impl Into<String>) -> Uuid {
        self.add(Toast::info(message.into()))
    }

    /// Dismiss a single notification.
    pub fn remove(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn dismiss_expired(&mut self, now: Timestamp) {
        self.toasts.retain(|t| !t.is_expired(now));
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
