const ROMAN_NUMERALS: [(&str, u32); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Spreadsheet-style column letters for a zero-based index: 0 is `A`, 26 is `AA`.
pub fn to_column_name(index: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = Some(index);
    while let Some(value) = remaining {
        letters.push(b'A' + (value % 26) as u8);
        remaining = (value / 26).checked_sub(1);
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Roman numerals in subtractive notation. Zero has no numeral and yields an empty string.
pub fn to_roman_numerals(num: u32) -> String {
    let mut remaining = num;
    let mut out = String::new();
    for (symbol, value) in ROMAN_NUMERALS {
        let count = remaining / value;
        remaining -= count * value;
        out.push_str(&symbol.repeat(count as usize));
    }
    out
}
