//! Discrete states a HUD can display.

/// The status shown by the HUD. `Idle` means nothing is shown.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading {
        message: Option<String>,
    },
    /// Determinate progress; `value` is in `0.0..=1.0`
    Progress {
        message: Option<String>,
        value: f32,
    },
    Success {
        message: Option<String>,
    },
    Failure {
        message: Option<String>,
    },
    /// Application-defined status rendered by name
    Custom {
        name: String,
        message: Option<String>,
    },
}

impl Status {
    pub fn loading(message: impl Into<Option<String>>) -> Self {
        Status::Loading {
            message: message.into(),
        }
    }

    /// Progress status. The value is clamped to `0.0..=1.0`; NaN becomes 0.
    pub fn progress(message: impl Into<Option<String>>, value: f32) -> Self {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
        Status::Progress {
            message: message.into(),
            value,
        }
    }

    pub fn success(message: impl Into<Option<String>>) -> Self {
        Status::Success {
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<Option<String>>) -> Self {
        Status::Failure {
            message: message.into(),
        }
    }

    pub fn custom(name: impl Into<String>, message: impl Into<Option<String>>) -> Self {
        Status::Custom {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Status::Idle)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Status::Idle => None,
            Status::Loading { message }
            | Status::Progress { message, .. }
            | Status::Success { message }
            | Status::Failure { message }
            | Status::Custom { message, .. } => message.as_deref(),
        }
    }

    /// Short name of the variant, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Loading { .. } => "loading",
            Status::Progress { .. } => "progress",
            Status::Success { .. } => "success",
            Status::Failure { .. } => "failure",
            Status::Custom { .. } => "custom",
        }
    }
}

/// How a status change affects the HUD's visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// idle -> non-idle
    Showing,
    /// non-idle -> idle
    Hiding,
    /// Both ends non-idle (or both idle); only content changes
    Updating,
}

impl TransitionKind {
    pub fn between(from: &Status, to: &Status) -> Self {
        match (from.is_idle(), to.is_idle()) {
            (true, false) => TransitionKind::Showing,
            (false, true) => TransitionKind::Hiding,
            _ => TransitionKind::Updating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(
            Status::progress(None, 1.5),
            Status::Progress {
                message: None,
                value: 1.0
            }
        );
        assert_eq!(
            Status::progress(None, f32::NAN),
            Status::Progress {
                message: None,
                value: 0.0
            }
        );
    }

    #[test]
    fn test_message() {
        assert_eq!(Status::Idle.message(), None);
        assert_eq!(
            Status::success(Some("Saved".to_string())).message(),
            Some("Saved")
        );
        assert_eq!(Status::custom("upload", None).message(), None);
    }

    #[test]
    fn test_transition_kind() {
        let loading = Status::loading(None);
        let done = Status::success(None);
        assert_eq!(
            TransitionKind::between(&Status::Idle, &loading),
            TransitionKind::Showing
        );
        assert_eq!(
            TransitionKind::between(&loading, &Status::Idle),
            TransitionKind::Hiding
        );
        assert_eq!(
            TransitionKind::between(&loading, &done),
            TransitionKind::Updating
        );
        assert_eq!(
            TransitionKind::between(&Status::Idle, &Status::Idle),
            TransitionKind::Updating
        );
    }
}
