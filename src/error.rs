use thiserror::Error;

/// Top-level error type for the azimuth crate.
#[derive(Debug, Error, PartialEq)]
pub enum AzimuthError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),
}

/// Errors raised for caller-supplied arguments that can never produce a result.
#[derive(Debug, Error, PartialEq)]
pub enum ArgumentError {
    #[error("required reference `{0}` is absent")]
    MissingReference(&'static str),

    #[error("field of view {value} deg is out of range (0, 360]")]
    FieldOfViewOutOfRange { value: f64 },
}

/// Convenience type alias for results using [`AzimuthError`].
pub type Result<T> = std::result::Result<T, AzimuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_error_converts_transparently() {
        let err: AzimuthError = ArgumentError::MissingReference("observer").into();
        assert_eq!(err.to_string(), "required reference `observer` is absent");
        assert_eq!(
            err,
            AzimuthError::Argument(ArgumentError::MissingReference("observer"))
        );
    }

    #[test]
    fn fov_error_message_names_value() {
        let err: AzimuthError = ArgumentError::FieldOfViewOutOfRange { value: 400.0 }.into();
        assert_eq!(
            err.to_string(),
            "field of view 400 deg is out of range (0, 360]"
        );
    }
}
