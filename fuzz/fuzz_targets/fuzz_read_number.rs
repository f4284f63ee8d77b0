#![no_main]
use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use thainum::{read_number, read_number_lossy};

/// A decimal literal that is well formed by construction.
#[derive(Arbitrary, Debug)]
struct Literal {
    negative: bool,
    integer: Vec<u8>,
    fraction: Option<Vec<u8>>,
}

impl Literal {
    fn render(&self) -> String {
        let mut text = String::new();
        if self.negative {
            text.push('-');
        }
        push_digits(&mut text, &self.integer);
        if let Some(fraction) = &self.fraction {
            text.push('.');
            push_digits(&mut text, fraction);
        }
        text
    }
}

fn push_digits(text: &mut String, digits: &[u8]) {
    if digits.is_empty() {
        text.push('0');
        return;
    }
    for digit in digits {
        text.push(char::from(b'0' + digit % 10));
    }
}

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must never panic, and the lossy reading is never empty:
    // it is either a Thai reading or the fixed error message.
    if let Ok(text) = core::str::from_utf8(data) {
        assert!(!read_number_lossy(text).is_empty());
    }

    // Well-formed literals must always read successfully.
    let mut unstructured = Unstructured::new(data);
    if let Ok(literal) = Literal::arbitrary(&mut unstructured) {
        let reading = read_number(&literal.render()).expect("well-formed literal must read");
        assert!(!reading.is_empty());
    }
});
