use std::collections::HashSet;
use std::fmt;

// 33 characters: space plus every printable non-alphanumeric ASCII symbol.
const ADVANCED_SYMBOLS: &str = " !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Scores a password by composition heuristics and buckets the result.
///
/// Points accumulate independently: three cumulative length thresholds
/// (8, 12, 16), one per character class present (lowercase, uppercase,
/// digit, anything outside `[A-Za-z0-9]`), one for a distinct-character
/// ratio of at least 0.7, and one for containing a character from the
/// advanced symbol set. Up to 4 points is weak, 5 to 7 medium, 8 and
/// above strong.
pub fn score_password(password: &str) -> Strength {
    let mut score = 0u32;

    let length = password.chars().count();
    if length >= 8 {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    if length >= 16 {
        score += 1;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    let unique: HashSet<char> = password.chars().collect();
    if unique.len() as f64 >= length as f64 * 0.7 {
        score += 1;
    }
    if password.chars().any(|c| ADVANCED_SYMBOLS.contains(c)) {
        score += 1;
    }

    match score {
        0..=4 => Strength::Weak,
        5..=7 => Strength::Medium,
        _ => Strength::Strong,
    }
}
