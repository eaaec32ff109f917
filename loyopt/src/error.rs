use std::io;

use crate::value::ValueKind;

#[derive(Debug, thiserror::Error)]
pub enum LoyoptError {
    #[error("bad format string {spec:?}: {reason}")]
    BadFormat { spec: String, reason: String },

    #[error("format string {spec:?} does not apply to {kind} values")]
    FormatMismatch { spec: String, kind: ValueKind },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, LoyoptError>;

impl LoyoptError {
    pub(crate) fn bad_format(spec: &str, reason: &str) -> Self {
        LoyoptError::BadFormat {
            spec: spec.to_string(),
            reason: reason.to_string(),
        }
    }
}
