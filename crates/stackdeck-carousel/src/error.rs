use thiserror::Error;

pub type Result<T> = std::result::Result<T, CarouselError>;

/// Errors raised while building a carousel.
///
/// Navigation never fails: running off either end or calling while a step is
/// in flight is reported through [`crate::NavOutcome`] instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    #[error("invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("card index {index} out of range for {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
}

impl CarouselError {
    #[must_use]
    pub fn invalid(field: &'static str, value: impl ToString, reason: &'static str) -> Self {
        Self::InvalidConfig {
            field,
            value: value.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CarouselError;

    #[test]
    fn invalid_config_message_names_field_and_reason() {
        let error = CarouselError::invalid("scale_step", 1.5, "must be in (0, 1]");
        assert_eq!(
            error.to_string(),
            "invalid config: scale_step = 1.5 (must be in (0, 1])"
        );
    }

    #[test]
    fn index_out_of_range_message() {
        let error = CarouselError::IndexOutOfRange { index: 7, len: 5 };
        assert_eq!(error.to_string(), "card index 7 out of range for 5 cards");
    }
}
