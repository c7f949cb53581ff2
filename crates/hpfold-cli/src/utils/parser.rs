use hpfold::core::models::residue::{Sequence, SequenceParseError};
use hpfold::core::scoring::ContactPolicy;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),

    #[error("Invalid contact policy '{0}'. Expected 'non-consecutive' or 'inclusive'.")]
    InvalidContactPolicy(String),

    #[error("Invalid {kind} value for '{key}': '{value}'")]
    InvalidValue {
        key: String,
        kind: &'static str,
        value: String,
    },

    #[error(transparent)]
    Sequence(#[from] SequenceParseError),
}

/// Splits `KEY=VALUE` at the first `=`; both sides are trimmed and the key must be non-empty.
pub fn parse_key_value(pair: &str) -> Result<(&str, &str), ParseError> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(ParseError::InvalidKeyValue(pair.to_string())),
    }
}

pub fn parse_contact_policy(value: &str) -> Result<ContactPolicy, ParseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "non-consecutive" | "nonconsecutive" => Ok(ContactPolicy::NonConsecutive),
        "inclusive" => Ok(ContactPolicy::Inclusive),
        _ => Err(ParseError::InvalidContactPolicy(value.to_string())),
    }
}

pub fn parse_typed<T: std::str::FromStr>(
    key: &str,
    kind: &'static str,
    value: &str,
) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue {
        key: key.to_string(),
        kind,
        value: value.to_string(),
    })
}

/// Concatenates the positional sequence arguments and parses the result.
pub fn parse_sequence_args(parts: &[String]) -> Result<Sequence, ParseError> {
    Ok(parts.concat().to_ascii_uppercase().parse()?)
}
