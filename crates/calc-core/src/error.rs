use thiserror::Error;

pub type ControlResult<T> = Result<T, ControlError>;

/// Rejected writes to the parameter slider.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControlError {
    #[error("slider value {0:?} is not a number")]
    Unparsable(String),

    #[error("slider value {0} is not finite")]
    NotFinite(f64),

    #[error("slider is locked while the animation is running")]
    Locked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_stable() {
        assert!(ControlError::Unparsable("abc".into())
            .to_string()
            .contains("\"abc\""));
        assert!(ControlError::Locked.to_string().contains("locked"));
        assert!(ControlError::NotFinite(f64::INFINITY)
            .to_string()
            .contains("inf"));
    }
}
