//! Display implementations for cache errors

use super::types::{CacheError, RecoveryHint};
use std::fmt;

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoaderMissing { key, .. } => {
                write!(f, "no loader registered for key {key}")
            }
            Self::Loader { key, source, .. } => {
                write!(f, "loader for key {key} failed: {source}")
            }
            Self::Configuration { message, .. } => {
                write!(f, "configuration error: {message}")
            }
        }
    }
}

impl std::error::Error for CacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Loader { source, .. } => Some(source.as_ref()),
            Self::LoaderMissing { .. } | Self::Configuration { .. } => None,
        }
    }
}

impl fmt::Display for RecoveryHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Retry => write!(f, "retry the operation"),
            Self::UseDefault { value } => write!(f, "use the default value: {value}"),
            Self::Manual { instructions } => write!(f, "{instructions}"),
        }
    }
}
