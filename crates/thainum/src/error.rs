use thiserror::Error;

/// The input was non-empty, non-whitespace, and not a decimal literal.
///
/// This is the only error the crate produces. Variants name the first rule
/// the literal broke; all of them map to the same fixed message at the lossy
/// boundary ([`INVALID_FORMAT_MESSAGE`]).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidFormatError {
    /// A character outside `-? digit+ ('.' digit+)?` was found.
    #[error("invalid character '{0}' in numeric literal")]
    InvalidCharacter(char),
    /// No digit before the decimal point (e.g. `"-"` or `".5"`).
    #[error("expected at least one digit before the decimal point")]
    MissingIntegerDigits,
    /// A decimal point with no digit after it (e.g. `"1."`).
    #[error("expected at least one digit after the decimal point")]
    MissingFractionDigits,
}

/// Fixed message returned by [`read_number_lossy`](crate::read_number_lossy)
/// in place of an [`InvalidFormatError`].
pub const INVALID_FORMAT_MESSAGE: &str = "❌ รูปแบบตัวเลขไม่ถูกต้อง";
