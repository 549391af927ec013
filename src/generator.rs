use crate::hash::fold_hash;
use crate::rng::SeededRng;
use thiserror::Error;
use zeroize::Zeroizing;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 32;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
const PRINTABLE: &[u8] =
    b" !\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

#[derive(Debug, Clone)]
pub struct SecurityAnswer {
    pub question_id: String,
    pub answer: Zeroizing<String>,
}

impl SecurityAnswer {
    pub fn new(question_id: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            answer: Zeroizing::new(answer.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PasswordConfig {
    pub security_answers: Vec<SecurityAnswer>,
    /// Opaque period label, e.g. "2025", "2025H1", "2025Q3". Never parsed.
    pub time_period: String,
    pub length: usize,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeriveError {
    #[error("at least one security question required")]
    EmptyAnswerSet,
    #[error("length must be between 8 and 32")]
    InvalidLength,
    #[error("all security questions must have an answer")]
    BlankAnswer,
}

/// Canonical seed string: one `id:answer` entry per answer with the answer
/// lowercased and trimmed, entries sorted by UTF-16 code units (the same
/// convention the hasher folds over), joined with `|`, then the period
/// label and length appended. Sorting is what makes entry order irrelevant.
fn build_seed(config: &PasswordConfig) -> Zeroizing<String> {
    let mut entries: Vec<Zeroizing<String>> = config
        .security_answers
        .iter()
        .map(|a| {
            Zeroizing::new(format!(
                "{}:{}",
                a.question_id,
                a.answer.trim().to_lowercase()
            ))
        })
        .collect();
    entries.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));

    let mut seed = Zeroizing::new(String::new());
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            seed.push('|');
        }
        seed.push_str(entry);
    }
    seed.push('|');
    seed.push_str(&config.time_period);
    seed.push('|');
    seed.push_str(&config.length.to_string());
    seed
}

pub fn derive_password(config: &PasswordConfig) -> Result<Zeroizing<String>, DeriveError> {
    if config.security_answers.is_empty() {
        return Err(DeriveError::EmptyAnswerSet);
    }
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&config.length) {
        return Err(DeriveError::InvalidLength);
    }
    for answer in &config.security_answers {
        if answer.answer.trim().is_empty() {
            return Err(DeriveError::BlankAnswer);
        }
    }

    let seed = build_seed(config);
    let mut rng = SeededRng::new(fold_hash(&seed));

    // One draw per mandatory class, in fixed order. The shuffle below
    // permutes positions but never removes characters, so the coverage
    // guarantee survives it.
    let mut password_bytes = Zeroizing::new(Vec::with_capacity(config.length));
    password_bytes.push(LOWERCASE[rng.next_index(LOWERCASE.len())]);
    password_bytes.push(UPPERCASE[rng.next_index(UPPERCASE.len())]);
    password_bytes.push(DIGITS[rng.next_index(DIGITS.len())]);
    if config.length > 4 {
        password_bytes.push(SYMBOLS[rng.next_index(SYMBOLS.len())]);
    }

    while password_bytes.len() < config.length {
        password_bytes.push(PRINTABLE[rng.next_index(PRINTABLE.len())]);
    }

    // Fisher–Yates over the same generator stream, last index down to 1.
    for i in (1..password_bytes.len()).rev() {
        let j = rng.next_index(i + 1);
        password_bytes.swap(i, j);
    }

    Ok(Zeroizing::new(
        password_bytes.iter().map(|&b| char::from(b)).collect(),
    ))
}
