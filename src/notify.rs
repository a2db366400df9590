use views::{Notification, NotificationKind, Notifier};

/// Prints notifications to stderr, next to the rendered view.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn open(&self, notification: Notification) {
        let prefix = match notification.kind {
            NotificationKind::Error => "error",
        };
        eprintln!("{prefix}: {} ({})", notification.message, notification.description);
        tracing::debug!(message = %notification.message, "Notification shown.");
    }
}
