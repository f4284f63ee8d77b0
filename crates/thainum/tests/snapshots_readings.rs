#![expect(missing_docs)]

use core::fmt::Write;

use thainum::read_number_lossy;

fn render_readings(inputs: &[&str]) -> String {
    let mut out = String::new();
    for input in inputs {
        writeln!(out, "{input:?} → {}", read_number_lossy(input)).unwrap();
    }
    out
}

#[test]
fn snapshot_integer_readings() {
    let inputs = [
        "0", "1", "10", "11", "20", "21", "100", "101", "123456", "1000000", "1000001",
        "1000000000000",
    ];

    insta::assert_snapshot!(render_readings(&inputs), @r#"
    "0" → ศูนย์
    "1" → หนึ่ง
    "10" → สิบ
    "11" → สิบเอ็ด
    "20" → ยี่สิบ
    "21" → ยี่สิบเอ็ด
    "100" → หนึ่งร้อย
    "101" → หนึ่งร้อยเอ็ด
    "123456" → หนึ่งแสนสองหมื่นสามพันสี่ร้อยห้าสิบหก
    "1000000" → หนึ่งล้าน
    "1000001" → หนึ่งล้านเอ็ด
    "1000000000000" → หนึ่งล้าน
    "#);
}

#[test]
fn snapshot_sign_fraction_and_errors() {
    let inputs = ["", "   ", "-123.45", "123.0", "0.5", "-0", "garbage", "1.2.3"];

    insta::assert_snapshot!(render_readings(&inputs), @r#"
    "" → ศูนย์
    "   " → ศูนย์
    "-123.45" → ลบหนึ่งร้อยยี่สิบสามจุดสี่ห้า
    "123.0" → หนึ่งร้อยยี่สิบสาม
    "0.5" → ศูนย์จุดห้า
    "-0" → ศูนย์
    "garbage" → ❌ รูปแบบตัวเลขไม่ถูกต้อง
    "1.2.3" → ❌ รูปแบบตัวเลขไม่ถูกต้อง
    "#);
}
