//! Decode diagnostics.
//!
//! Non-fatal events met while reading an archive (skipped sections, detached
//! panes, sections dropped by the failsafe reader) are collected as
//! `Notification` items instead of being dropped or turned into hard errors.
//!
//! After a read the caller can inspect
//! [`LayoutDocument::notifications`](crate::document::LayoutDocument) to see
//! what was encountered.

use std::fmt;

/// Severity level of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// A section type this library does not decode.
    NotSupported,
    /// Non-fatal oddity (detached pane, orphan user data).
    Warning,
    /// A section whose decoding failed and was skipped.
    Error,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupported => write!(f, "NotSupported"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A single notification produced during reading.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The severity / category.
    pub notification_type: NotificationType,
    /// Stream offset of the section that triggered it, if known.
    pub offset: Option<u64>,
    /// A human-readable description of the issue.
    pub message: String,
}

impl Notification {
    /// Create a new notification.
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            offset: None,
            message: message.into(),
        }
    }

    /// Attach the stream offset the notification refers to.
    pub fn at(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(
                f,
                "[{}] {:#X}: {}",
                self.notification_type, offset, self.message
            ),
            None => write!(f, "[{}] {}", self.notification_type, self.message),
        }
    }
}

/// Collects notifications during a read operation.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification that is not tied to a stream position.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.push(Notification::new(notification_type, message));
    }

    /// Record a notification for the section starting at `offset`.
    pub fn notify_at(
        &mut self,
        notification_type: NotificationType,
        offset: u64,
        message: impl Into<String>,
    ) {
        self.push(Notification::new(notification_type, message).at(offset));
    }

    /// Record a prepared notification, mirroring it to the log.
    pub fn push(&mut self, notification: Notification) {
        tracing::warn!("{}", notification);
        self.items.push(notification);
    }

    /// Check if there are any notifications.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all notifications.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Get all notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Move every notification of `other` into this collection.
    pub fn extend(&mut self, other: NotificationCollection) {
        self.items.extend(other.items);
    }

    /// Consume the collection into a `Vec`.
    pub fn into_vec(self) -> Vec<Notification> {
        self.items
    }
}

impl IntoIterator for NotificationCollection {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
