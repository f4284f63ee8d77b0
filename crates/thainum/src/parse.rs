use alloc::string::String;

use crate::error::InvalidFormatError;

/// Fraction digits kept after the decimal point. Longer fractions are
/// truncated (never rounded) before trailing zeros are stripped.
pub(crate) const FRACTION_DIGIT_LIMIT: usize = 16;

/// A validated decimal literal, split into sign and digit sequences.
///
/// Invariants: the integer part is a non-empty ASCII digit string with no
/// leading zeros beyond a single `"0"`; the fraction part carries no trailing
/// zeros and at most 16 significant digits; zero is canonical: integer
/// `"0"`, empty fraction, never negative.
///
/// ```rust
/// use thainum::ParsedNumber;
///
/// let n = ParsedNumber::parse("-007.250")?;
/// assert!(n.is_negative());
/// assert_eq!(n.integer_digits(), "7");
/// assert_eq!(n.fraction_digits(), "25");
/// # Ok::<(), thainum::InvalidFormatError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    is_negative: bool,
    integer: String,
    fraction: String,
}

impl ParsedNumber {
    /// Parses and normalizes a decimal literal.
    ///
    /// Surrounding whitespace is ignored, and empty or whitespace-only input
    /// parses as zero. The accepted grammar is `-? digit+ ('.' digit+)?`
    /// with ASCII digits; anything else is an [`InvalidFormatError`].
    ///
    /// # Errors
    ///
    /// Returns the variant describing the first grammar rule the literal
    /// broke.
    pub fn parse(input: &str) -> Result<Self, InvalidFormatError> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(Self::zero());
        }

        let mut chars = text.chars().peekable();
        let is_negative = chars.next_if_eq(&'-').is_some();

        let mut integer = String::new();
        while let Some(digit) = chars.next_if(char::is_ascii_digit) {
            integer.push(digit);
        }
        if integer.is_empty() {
            return Err(match chars.peek() {
                None | Some('.') => InvalidFormatError::MissingIntegerDigits,
                Some(&other) => InvalidFormatError::InvalidCharacter(other),
            });
        }

        let mut fraction = String::new();
        if chars.next_if_eq(&'.').is_some() {
            while let Some(digit) = chars.next_if(char::is_ascii_digit) {
                fraction.push(digit);
            }
            if fraction.is_empty() {
                return Err(match chars.peek() {
                    None => InvalidFormatError::MissingFractionDigits,
                    Some(&other) => InvalidFormatError::InvalidCharacter(other),
                });
            }
        }

        if let Some(trailing) = chars.next() {
            return Err(InvalidFormatError::InvalidCharacter(trailing));
        }

        Ok(Self::normalized(is_negative, &integer, fraction))
    }

    /// Strips leading integer zeros, caps and right-trims the fraction, and
    /// canonicalizes zero. Pure digit-string work, so integer parts of any
    /// length survive unchanged.
    fn normalized(is_negative: bool, integer: &str, mut fraction: String) -> Self {
        let significant = integer.trim_start_matches('0');
        let integer = if significant.is_empty() {
            String::from("0")
        } else {
            String::from(significant)
        };

        fraction.truncate(FRACTION_DIGIT_LIMIT);
        let fraction = String::from(fraction.trim_end_matches('0'));

        if integer == "0" && fraction.is_empty() {
            return Self::zero();
        }
        Self {
            is_negative,
            integer,
            fraction,
        }
    }

    fn zero() -> Self {
        Self {
            is_negative: false,
            integer: String::from("0"),
            fraction: String::new(),
        }
    }

    /// Whether the literal carried a minus sign (always `false` for zero).
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.is_negative
    }

    /// Integer digits, most significant first, `"0"` at minimum.
    #[must_use]
    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    /// Fraction digits in written order; empty when none survive trimming.
    #[must_use]
    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }

    /// Whether the value is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.integer == "0" && self.fraction.is_empty()
    }
}
