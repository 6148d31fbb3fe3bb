use thiserror::Error;

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("invalid count target: {raw:?}")]
    InvalidCountTarget { raw: String },

    #[error("required element not found: {selector}")]
    MissingElement { selector: String },

    #[error("JavaScript error: {message}")]
    Js { message: String },

    #[error("subscription failed: {message}")]
    Subscription { message: String },

    #[error("site is already booted")]
    AlreadyBooted,
}

impl SiteError {
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }

    #[must_use]
    pub fn js(message: impl Into<String>) -> Self {
        Self::Js {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_its_selector() {
        let err = SiteError::missing(".newsletter-form");
        assert!(
            matches!(&err, SiteError::MissingElement { selector } if selector == ".newsletter-form")
        );
        assert_eq!(err.to_string(), "required element not found: .newsletter-form");
    }

    #[test]
    fn config_errors_carry_the_message() {
        let err = SiteError::config("reveal.stagger_ms must be positive");
        assert_eq!(
            err.to_string(),
            "invalid configuration: reveal.stagger_ms must be positive"
        );
    }
}
