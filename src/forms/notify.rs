//! Toast notifications shown after a form submission attempt.

use std::collections::VecDeque;

/// Visual emphasis of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Default,
    /// Rendered as an error.
    Destructive,
}

/// A toast: a title and an optional description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub variant: Variant,
}

impl Notification {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: Variant::Default,
        }
    }

    /// Set the description (builder).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the variant (builder).
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}

/// Anything that can show a notification to the visitor.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// In-memory toast stack. Keeps at most `limit` toasts, newest first,
/// dropping the oldest when full.
#[derive(Debug, Clone)]
pub struct Toaster {
    toasts: VecDeque<Notification>,
    limit: usize,
}

impl Toaster {
    /// A toaster holding a single toast, as the site shows them.
    pub fn new() -> Self {
        Self::with_limit(1)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// The most recent toast.
    pub fn latest(&self) -> Option<&Notification> {
        self.toasts.front()
    }

    /// Toasts currently shown, newest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Dismiss every toast.
    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify(&mut self, notification: Notification) {
        self.toasts.push_front(notification);
        self.toasts.truncate(self.limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let n = Notification::new("Saved")
            .with_description("All good")
            .with_variant(Variant::Destructive);
        assert_eq!(n.title, "Saved");
        assert_eq!(n.description.as_deref(), Some("All good"));
        assert_eq!(n.variant, Variant::Destructive);
    }

    #[test]
    fn toaster_keeps_newest_within_limit() {
        let mut toaster = Toaster::with_limit(2);
        toaster.notify(Notification::new("a"));
        toaster.notify(Notification::new("b"));
        toaster.notify(Notification::new("c"));
        let titles: Vec<_> = toaster.toasts().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "b"]);
    }

    #[test]
    fn default_toaster_shows_one() {
        let mut toaster = Toaster::default();
        toaster.notify(Notification::new("first"));
        toaster.notify(Notification::new("second"));
        assert_eq!(toaster.len(), 1);
        assert_eq!(toaster.latest().map(|n| n.title.as_str()), Some("second"));
        toaster.dismiss_all();
        assert!(toaster.is_empty());
    }
}
