//! Error types for splicebench core parsing and formatting

use crate::readid::Strand;
use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the identifier decoder, the CIGAR scan and the SAM
/// formatter. All of them abort the run; callers decide whether to add
/// file/line context on the way up.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Read identifier does not follow the `<pairID>:<mate1>;<mate2>` layout
    #[error("malformed read identifier '{id}': {reason}")]
    MalformedIdentifier { id: String, reason: String },

    /// CIGAR string is not a sequence of `<length><operation>` tokens
    #[error("malformed CIGAR string '{cigar}': {reason}")]
    MalformedCigar { cigar: String, reason: String },

    /// CIGAR operation outside the supported M/I/D/N/S/X/= set
    #[error("unrecognized CIGAR operation '{op}' in token '{token}'")]
    UnrecognizedCigarOperation { op: char, token: String },

    /// A properly paired mate pair must map to opposite strands
    #[error("invalid strand combination {mate1}/{mate2} for a mate pair")]
    InvalidStrandCombination { mate1: Strand, mate2: Strand },

    /// Log line has fewer tab-separated columns than the selected one
    #[error("log line has no tab-separated column {column}: '{line}'")]
    MissingIdentifierColumn { column: usize, line: String },
}
