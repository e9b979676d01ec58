//! Sort key normalisation for Indian statute section numbers.
//!
//! Section numbers are not plain integers: amendments insert lettered
//! sections ("304A", "304B", "376AB") and the BNS cites sub-sections inline
//! ("3(5)"). Comparing them as strings puts "120B" before "34"; comparing the
//! normalised key recovers document order.
//!
//! # Numbering conventions
//!
//! - Plain numeric: s.1, s.2, ..., s.511
//! - Letter suffix (amendment insertion): s.304A between s.304 and s.305
//! - Double letter: s.376AB after s.376A, before s.376B
//! - Sub-section: s.3(5) after s.3, before s.4

/// Normalise a section number into a lexicographically-sortable string.
///
/// Input: bare number like "34", "304A", "376AB", "3(5)"
/// Output: "0034.00.00.000", "0304.01.00.000", "0376.01.02.000", "0003.00.00.005"
///
/// # Algorithm
///
/// 1. Extract leading ASCII digits → base number (zero-padded to 4 digits)
/// 2. Up to 2 uppercase letters → A=01 ... Z=26 each
/// 3. An optional `(n)` sub-section → n (zero-padded to 3 digits)
/// 4. Missing parts are zero, so "304" sorts before "304A"
pub fn normalize_section(s: &str) -> String {
    let upper = s.trim().to_ascii_uppercase();
    let bytes = upper.as_bytes();

    let digit_end = bytes
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(bytes.len());
    let base: u32 = upper[..digit_end].parse().unwrap_or(0);

    let mut rest = &bytes[digit_end..];
    let mut letters = [0u32; 2];
    for slot in letters.iter_mut() {
        match rest.first() {
            Some(b) if b.is_ascii_uppercase() => {
                *slot = (b - b'A') as u32 + 1;
                rest = &rest[1..];
            }
            _ => break,
        }
    }

    let sub_section = parse_sub_section(rest).unwrap_or(0);

    format!(
        "{:04}.{:02}.{:02}.{:03}",
        base, letters[0], letters[1], sub_section
    )
}

/// Parse a leading "(n)" group.
fn parse_sub_section(rest: &[u8]) -> Option<u32> {
    let inner = rest.strip_prefix(b"(")?;
    let close = inner.iter().position(|&b| b == b')')?;
    std::str::from_utf8(&inner[..close]).ok()?.parse().ok()
}
