//! `rotate(<radians>rad)` serialization
//!
//! Rotation lives as a number on the engine. The CSS string is written at
//! render time and read back only once, to pick up an inline rotation the
//! page author may already have put on the element.

const PREFIX: &str = "rotate(";
const SUFFIX: &str = "rad)";

/// CSS transform value for a rotation in radians
pub fn to_css(radians: f64) -> String {
    format!("{PREFIX}{radians}{SUFFIX}")
}

/// First `rotate(<decimal>rad)` in a transform list, if any
///
/// Only plain signed decimals are accepted (`-1`, `0.25`), matching what
/// `to_css` emits for finite values.
pub fn parse_rotation(transform: &str) -> Option<f64> {
    transform.match_indices(PREFIX).find_map(|(start, _)| {
        let rest = &transform[start + PREFIX.len()..];
        let value = &rest[..rest.find(SUFFIX)?];
        if is_decimal(value) { value.parse().ok() } else { None }
    })
}

/// Parsed rotation, treating an absent or malformed transform as 0
pub fn rotation_or_zero(transform: Option<&str>) -> f64 {
    transform.and_then(parse_rotation).unwrap_or(0.0)
}

fn is_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match unsigned.split_once('.') {
        Some((int, frac)) => all_digits(int) && all_digits(frac),
        None => all_digits(unsigned),
    }
}
