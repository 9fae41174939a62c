//! Error types for agentwalk.

use std::io;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Crate error type.
///
/// Every variant is fatal to the run, except that the establishment loop
/// absorbs probe failures into its retry budget before escalating to
/// [`Error::Exhausted`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// OID string did not parse as a dotted numeric path.
    #[error("invalid OID '{input}': {reason}")]
    InvalidOid { input: Box<str>, reason: String },

    /// Collaborator (SNMP client) failure.
    #[error(transparent)]
    Snmp(#[from] async_snmp::Error),

    /// I/O failure writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Connection retry budget exhausted.
    #[error("agent never became available after {attempts} attempt(s)")]
    Exhausted {
        attempts: u32,
        #[source]
        last: Box<Error>,
    },

    /// The walk stream failed after some entries were already printed.
    ///
    /// Output emitted before the failure is not retracted.
    #[error("walk failed after {entries} entry(ies)")]
    Walk {
        entries: u64,
        #[source]
        source: Box<Error>,
    },
}
