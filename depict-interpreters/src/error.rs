//! Error types for interpreter construction.

use depict_core::UsageMode;
use thiserror::Error;

/// Raised while building an interpreter setup. Errors from fitting are the
/// implementer's own and never pass through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpreterError {
    #[error("Missing required argument `{argument}` for {mode} interpreter")]
    MissingArgument {
        mode: UsageMode,
        argument: &'static str,
    },

    #[error("Usage mode not provided")]
    MissingUsageMode,

    #[error("Capability mismatch: model is not a `{expected}`, wrap it into a BaseModel")]
    CapabilityMismatch { expected: &'static str },
}

impl InterpreterError {
    pub fn missing(mode: UsageMode, argument: &'static str) -> Self {
        Self::MissingArgument { mode, argument }
    }

    /// True for both kinds of absent input.
    pub fn is_missing_argument(&self) -> bool {
        matches!(self, Self::MissingArgument { .. } | Self::MissingUsageMode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InterpreterError::missing(UsageMode::AnteHoc, "task").to_string(),
            "Missing required argument `task` for ANTE_HOC interpreter"
        );
        assert!(
            InterpreterError::CapabilityMismatch { expected: "Dummy" }
                .to_string()
                .contains("Dummy")
        );
    }

    #[test]
    fn test_is_missing_argument() {
        assert!(InterpreterError::MissingUsageMode.is_missing_argument());
        assert!(InterpreterError::missing(UsageMode::PostHoc, "model").is_missing_argument());
        assert!(!InterpreterError::CapabilityMismatch { expected: "M" }.is_missing_argument());
    }
}
