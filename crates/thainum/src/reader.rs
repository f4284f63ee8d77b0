use alloc::string::String;

use crate::{
    error::{INVALID_FORMAT_MESSAGE, InvalidFormatError},
    lexicon,
    parse::ParsedNumber,
};

/// Reads a decimal literal aloud in Thai.
///
/// Empty or whitespace-only input reads as ศูนย์.
///
/// ```rust
/// assert_eq!(thainum::read_number("1000001")?, "หนึ่งล้านเอ็ด");
/// # Ok::<(), thainum::InvalidFormatError>(())
/// ```
///
/// # Errors
///
/// Returns [`InvalidFormatError`] when the input is not a decimal literal.
pub fn read_number(input: &str) -> Result<String, InvalidFormatError> {
    Ok(read_parsed(&ParsedNumber::parse(input)?))
}

/// Reads a decimal literal aloud in Thai, mapping malformed input to the
/// fixed message [`INVALID_FORMAT_MESSAGE`] instead of failing.
///
/// ```rust
/// assert_eq!(thainum::read_number_lossy("12.5"), "สิบสองจุดห้า");
/// assert_eq!(thainum::read_number_lossy("12..5"), "❌ รูปแบบตัวเลขไม่ถูกต้อง");
/// ```
#[must_use]
pub fn read_number_lossy(input: &str) -> String {
    read_number(input).unwrap_or_else(|_| String::from(INVALID_FORMAT_MESSAGE))
}

/// Reads an already-parsed number aloud.
#[must_use]
pub fn read_parsed(number: &ParsedNumber) -> String {
    if number.is_zero() {
        return String::from(lexicon::DIGITS[0]);
    }

    let mut text = String::new();
    if number.is_negative() {
        text.push_str(lexicon::MINUS);
    }

    if number.integer_digits() == "0" {
        text.push_str(lexicon::DIGITS[0]);
    } else {
        read_integer(number.integer_digits(), &mut text);
    }

    // Fraction digits are read one by one, never grouped into places.
    if !number.fraction_digits().is_empty() {
        text.push_str(lexicon::POINT);
        for digit in number.fraction_digits().bytes() {
            text.push_str(lexicon::DIGITS[usize::from(digit - b'0')]);
        }
    }

    text
}

/// Reads a non-zero integer digit string by walking its base-10⁶ chunks from
/// the most significant end. A chunk's text is followed by ล้าน when any
/// chunk comes after it, and an all-zero chunk contributes neither text nor
/// joiner, so e.g. 10¹² reads identically to 10⁶.
fn read_integer(digits: &str, out: &mut String) {
    let mut rest = digits;
    while !rest.is_empty() {
        let head_len = match rest.len() % 6 {
            0 => 6,
            partial => partial,
        };
        let (chunk, tail) = rest.split_at(head_len);
        let before = out.len();
        read_chunk(chunk, out);
        if out.len() > before && !tail.is_empty() {
            out.push_str(lexicon::MILLION);
        }
        rest = tail;
    }
}

/// Reads one chunk of 1–6 digits, most significant first, by positional rule.
///
/// A 2 in the tens place reads ยี่สิบ, a 1 in the tens place reads bare สิบ,
/// and a 1 in the units place of a multi-digit chunk reads เอ็ด. The เอ็ด
/// rule keys on chunk *length*, so the low chunk of 1000001 ("000001") reads
/// เอ็ด even though its higher digits are all zero; that is the established
/// reading and must not be "corrected" to หนึ่ง. Zero digits contribute
/// nothing, and an all-zero chunk appends nothing at all.
fn read_chunk(chunk: &str, out: &mut String) {
    let len = chunk.len();
    debug_assert!((1..=6).contains(&len));

    for (i, byte) in chunk.bytes().enumerate() {
        let digit = usize::from(byte - b'0');
        let position = len - i - 1;
        if digit == 0 {
            continue;
        }
        match (position, digit) {
            (0, 1) if len > 1 => out.push_str(lexicon::ET),
            (0, _) => out.push_str(lexicon::DIGITS[digit]),
            (1, 1) => out.push_str(lexicon::PLACES[1]),
            (1, 2) => out.push_str(lexicon::YI_SIP),
            _ => {
                out.push_str(lexicon::DIGITS[digit]);
                out.push_str(lexicon::PLACES[position]);
            }
        }
    }
}
