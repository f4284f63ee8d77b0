//! Fixed Thai numeral word tables.

/// Digit words, indexed by digit value 0–9.
pub(crate) const DIGITS: [&str; 10] = [
    "ศูนย์",
    "หนึ่ง",
    "สอง",
    "สาม",
    "สี่",
    "ห้า",
    "หก",
    "เจ็ด",
    "แปด",
    "เก้า",
];

/// Place words, indexed by position within a chunk (0 = units, empty).
pub(crate) const PLACES: [&str; 7] = ["", "สิบ", "ร้อย", "พัน", "หมื่น", "แสน", "ล้าน"];

/// Irregular units-one word, used when the chunk has more than one digit.
pub(crate) const ET: &str = "เอ็ด";

/// Irregular tens-two word, replacing สอง + สิบ.
pub(crate) const YI_SIP: &str = "ยี่สิบ";

/// Joiner between two non-empty base-10⁶ chunks.
pub(crate) const MILLION: &str = PLACES[6];

/// Sign word prepended to negative readings.
pub(crate) const MINUS: &str = "ลบ";

/// Decimal-point word separating integer and fraction readings.
pub(crate) const POINT: &str = "จุด";
