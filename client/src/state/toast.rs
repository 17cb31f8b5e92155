//! Transient toast message shared by every page and dialog.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastSeverity {
    #[default]
    Success,
    Error,
}

impl ToastSeverity {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

/// The current toast. `seq` increments on every show so the auto-dismiss
/// timer of an older toast does not hide a newer one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub message: Option<String>,
    pub severity: ToastSeverity,
    pub seq: u64,
}

impl ToastState {
    pub fn show_success(&mut self, message: impl Into<String>) {
        self.show(message.into(), ToastSeverity::Success);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.show(message.into(), ToastSeverity::Error);
    }

    fn show(&mut self, message: String, severity: ToastSeverity) {
        self.message = Some(message);
        self.severity = severity;
        self.seq += 1;
    }

    /// Hide the toast only if it is still the one numbered `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.seq == seq {
            self.message = None;
        }
    }
}
