//! Generation diagnostics.
//!
//! Non-fatal issues encountered while assembling a drawing are collected as
//! `Notification` items rather than being silently dropped or causing hard
//! errors. After a generation call the caller can inspect
//! [`CadDocument::notifications`](crate::document::CadDocument) to see what
//! was encountered.

use std::fmt;

/// Severity level of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// Non-fatal warning (e.g., a group with no boreholes).
    Warning,
    /// Error that was recovered from.
    Error,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A single notification produced during generation.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The severity / category.
    pub notification_type: NotificationType,
    /// A human-readable description of the issue.
    pub message: String,
}

impl Notification {
    /// Create a new notification.
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type, self.message)
    }
}

/// Ordered collection of notifications attached to a document.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn add(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.items
            .push(Notification::new(notification_type, message));
    }

    /// Record a warning.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.add(NotificationType::Warning, message);
    }

    /// Iterate over collected notifications.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Number of collected notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether anything was collected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop all collected notifications.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_records_in_order() {
        let mut notifications = NotificationCollection::new();
        assert!(notifications.is_empty());

        notifications.add(NotificationType::Warning, "group SPT has no boreholes");
        notifications.add(NotificationType::Error, "recovered");

        assert_eq!(notifications.len(), 2);
        let first = notifications.iter().next().unwrap();
        assert_eq!(first.notification_type, NotificationType::Warning);
        assert!(first.to_string().contains("SPT"));
    }
}
