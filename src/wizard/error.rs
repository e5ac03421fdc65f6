//! Error type for gated step transitions.

use thiserror::Error;

/// Raised by `advance()` when the active step's completion check fails.
///
/// Recoverable: the caller shows `requirement` inline and lets the user fix
/// the input. Controller state is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{step_title}: {requirement}")]
pub struct ValidationError {
    /// 1-based id of the step that blocked
    pub step_id: u32,
    /// Title of the step that blocked
    pub step_title: &'static str,
    /// Human-readable unmet condition
    pub requirement: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError {
            step_id: 1,
            step_title: "Vision Input",
            requirement: "Minimum 50 characters required",
        };
        assert_eq!(
            err.to_string(),
            "Vision Input: Minimum 50 characters required"
        );
    }

    #[test]
    fn test_validation_error_into_anyhow() {
        let err = ValidationError {
            step_id: 4,
            step_title: "Logo Design",
            requirement: "Select a logo concept",
        };
        let wrapped: anyhow::Error = err.clone().into();
        assert_eq!(wrapped.downcast_ref::<ValidationError>(), Some(&err));
    }
}
