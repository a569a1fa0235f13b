//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! A notification goes `visible -> leaving -> removed`. Removal always passes
//! through `leaving` so the slide-out animation plays before detachment.
//! Both the auto-dismiss timer and the close button call the same guarded
//! transitions, so whichever fires second finds nothing to do.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Visual category of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Class list for the notification element.
    #[must_use]
    pub fn css_class(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

/// Request to show a notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NoticeKind::Info }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NoticeKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NoticeKind::Error }
    }
}

/// A notification currently attached to the page.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NoticeKind,
    /// Creation time in epoch milliseconds.
    pub created_at: f64,
    /// Exit animation in progress.
    pub leaving: bool,
}

impl Notification {
    #[must_use]
    pub fn class(&self) -> String {
        let base = self.kind.css_class();
        if self.leaving { format!("{base} notification--leaving") } else { base }
    }
}

/// Stack of live notifications, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub next_id: u64,
}

impl NotificationsState {
    /// Attach a notification and return its id.
    pub fn push(&mut self, notice: Notice, now: f64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        log::debug!("notify #{id} [{}] {}", notice.kind.as_str(), notice.message);
        self.items.push(Notification { id, message: notice.message, kind: notice.kind, created_at: now, leaving: false });
        id
    }

    /// Start the exit animation. Returns `false` when the notification is
    /// already leaving or gone.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.leaving => {
                n.leaving = true;
                true
            }
            _ => false,
        }
    }

    /// Detach a notification. Returns `false` when it is already gone.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}
