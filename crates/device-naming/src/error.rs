//! Device naming errors

use thiserror::Error;

/// Errors that can occur while decoding a device hostname
#[derive(Debug, Error)]
pub enum NamingError {
    /// A positional numeric field matched the pattern but could not be parsed
    #[error("{hostname}: invalid {field} '{value}': {source}")]
    InvalidNumber {
        hostname: String,
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
