use thiserror::Error;

use crate::values::ParamKind;

/// Rejected by-name access to the parameter store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("parameter {name} expects a {expected} value, got {found}")]
    KindMismatch {
        name: String,
        expected: ParamKind,
        found: ParamKind,
    },

    #[error("parameter {0} is read-only")]
    ReadOnly(String),

    #[error("parameter {0} rejects non-finite values")]
    NotFinite(String),
}
