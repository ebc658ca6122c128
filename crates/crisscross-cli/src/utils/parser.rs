use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid override '{0}'. Expected KEY=VALUE (e.g., 'search.max-attempts=5000').")]
    MissingSeparator(String),

    #[error("Key cannot be empty in override '{0}'.")]
    EmptyKey(String),

    #[error("Invalid value '{value}' for '{key}': expected {expected}.")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

/// Splits a `KEY=VALUE` override at the first `=`, trimming whitespace around both parts.
pub fn parse_key_value(s: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(s.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(s.to_string()));
    }
    Ok((key, value.trim()))
}

pub fn parse_value<T: FromStr>(
    key: &str,
    value: &str,
    expected: &'static str,
) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_the_first_separator() {
        assert_eq!(
            parse_key_value("search.seed=42"),
            Ok(("search.seed", "42"))
        );
        assert_eq!(
            parse_key_value(" words.count = 7 "),
            Ok(("words.count", "7"))
        );
        assert_eq!(parse_key_value("a=b=c"), Ok(("a", "b=c")));
    }

    #[test]
    fn rejects_malformed_overrides() {
        assert_eq!(
            parse_key_value("search.seed"),
            Err(ParseError::MissingSeparator("search.seed".to_string()))
        );
        assert_eq!(
            parse_key_value("=5"),
            Err(ParseError::EmptyKey("=5".to_string()))
        );
    }

    #[test]
    fn parses_typed_values() {
        assert_eq!(parse_value::<usize>("k", "12", "an integer"), Ok(12));
        assert!(matches!(
            parse_value::<usize>("k", "-3", "an integer"),
            Err(ParseError::InvalidValue { expected: "an integer", .. })
        ));
    }
}
