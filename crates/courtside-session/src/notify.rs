//! User notification sink: fire-and-forget messages for the app to show.

/// How prominently the app should surface a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational, no action needed.
    Info,
    /// Something degraded but the app keeps working.
    Warning,
    /// Something the user should see (failed action, lost data).
    Error,
}

/// A one-shot, user-visible message.
///
/// The publisher emits one when a profile fetch fails; apps can reuse
/// the same sink for their own messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Short heading (toast title).
    pub title: String,
    /// Longer explanation shown under the title.
    pub description: String,
    /// Display prominence.
    pub severity: Severity,
}

impl Notice {
    /// Creates an info-level notice.
    pub fn info(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    /// Creates a warning-level notice.
    pub fn warning(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Warning,
        }
    }

    /// Creates an error-level notice.
    pub fn error(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }
}

/// Delivers notices to the user.
///
/// Fire-and-forget: no return value, no backpressure. A UI adapter
/// typically forwards notices into its toast system; headless apps can
/// use [`LogNotifier`].
pub trait Notifier: Send + Sync + 'static {
    /// Delivers one notice. Must not block.
    fn notify(&self, notice: Notice);
}

/// A [`Notifier`] that routes notices to the process log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Info => {
                tracing::info!(title = %notice.title, "{}", notice.description);
            }
            Severity::Warning => {
                tracing::warn!(title = %notice.title, "{}", notice.description);
            }
            Severity::Error => {
                tracing::error!(title = %notice.title, "{}", notice.description);
            }
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
