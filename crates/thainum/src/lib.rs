//! Reads decimal numbers aloud in Thai.
//!
//! The conversion is a pure text transformation: a decimal literal such as
//! `"123"` or `"-4.5"` goes in, its spoken Thai form comes out. Digits are
//! grouped into base-10⁶ chunks joined by ล้าน, each chunk is read by
//! positional rule (สิบ, ร้อย, พัน, หมื่น, แสน), and the two irregular words
//! of Thai numeral reading are applied: ยี่สิบ for a 2 in the tens place and
//! เอ็ด for a trailing 1 in a multi-digit chunk.
//!
//! ```rust
//! use thainum::read_number_lossy;
//!
//! assert_eq!(read_number_lossy("123"), "หนึ่งร้อยยี่สิบสาม");
//! assert_eq!(read_number_lossy("-21.05"), "ลบยี่สิบเอ็ดจุดศูนย์ห้า");
//! assert_eq!(read_number_lossy("not a number"), "❌ รูปแบบตัวเลขไม่ถูกต้อง");
//! ```
//!
//! [`read_number`] is the strict form returning `Result`; [`read_number_lossy`]
//! maps the single error kind to a fixed Thai error message instead, matching
//! console usage where malformed input must never abort the caller.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod lexicon;
mod parse;
mod reader;


pub use error::{INVALID_FORMAT_MESSAGE, InvalidFormatError};
pub use parse::ParsedNumber;
pub use reader::{read_number, read_number_lossy, read_parsed};
