use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
}

/// A message for the user, shown outside the view that raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub description: String,
}

impl Notification {
    pub fn error(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            description: description.into(),
        }
    }
}

/// The notification collaborator. Views hand failures to it and keep going.
pub trait Notifier: Send + Sync {
    fn open(&self, notification: Notification);
}

/// Keeps every notification in memory, in the order they were opened.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    opened: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.opened.lock().map(|n| n.clone()).unwrap_or_default()
    }

    /// Removes and returns everything opened so far.
    pub fn drain(&self) -> Vec<Notification> {
        self.opened
            .lock()
            .map(|mut n| std::mem::take(&mut *n))
            .unwrap_or_default()
    }
}

impl Notifier for MemoryNotifier {
    fn open(&self, notification: Notification) {
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(notification);
        }
    }
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn open(&self, notification: Notification) {
        (**self).open(notification)
    }
}
