use chrono::{DateTime, Duration, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Blank,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created: DateTime<Local>,
}

impl Toast {
    fn lifetime(&self) -> Duration {
        match self.kind {
            ToastKind::Success => Duration::milliseconds(2000),
            ToastKind::Error => Duration::milliseconds(4000),
            ToastKind::Blank => Duration::milliseconds(4000),
        }
    }

    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        now - self.created >= self.lifetime()
    }
}

/// Transient messages shown bottom-center
#[derive(Debug, Default)]
pub struct Notifications {
    toasts: Vec<Toast>,
}

impl Notifications {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(?kind, %message, "toast");
        self.toasts.push(Toast {
            kind,
            message,
            created: Local::now(),
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn blank(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Blank, message);
    }

    pub fn prune(&mut self, now: DateTime<Local>) {
        self.toasts.retain(|toast| !toast.is_expired(now));
    }

    /// Newest last
    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    #[cfg(test)]
    pub fn count(&self, kind: ToastKind, message: &str) -> usize {
        self.toasts
            .iter()
            .filter(|toast| toast.kind == kind && toast.message == message)
            .count()
    }
}
