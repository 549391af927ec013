use crate::catalog;
use crate::generator::{MAX_LENGTH, MIN_LENGTH, SecurityAnswer};
use crate::strength::Strength;
use anyhow::{Context, Result};
use console::{Style, Term};
use rpassword::read_password;
use std::io::{self, Write};
use std::time::Duration;
use unicode_normalization::UnicodeNormalization;

pub const MIN_ANSWER_CHARS: usize = 2;
pub const RECOMMENDED_ANSWER_COUNT: usize = 2;
pub const RECOMMENDED_LENGTH: usize = 12;

pub const MAX_ANSWER_BYTES: usize = 1024;
pub const MAX_ANSWER_COUNT: usize = 20;

pub struct InputInfo {
    pub answers: Vec<AnswerInfo>,
    pub period: String,
    pub length: usize,
}

pub struct AnswerInfo {
    pub index: usize,
    pub question_id: String,
    pub char_count: usize,
}

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn validate_control_characters(s: &str, input_name: &str) -> Result<String> {
    let control_chars: Vec<(usize, char)> = s
        .chars()
        .enumerate()
        .filter(|(_, c)| c.is_control())
        .collect();

    if !control_chars.is_empty() {
        let term = Term::stderr();

        let warning_msg = format!(
            "WARNING: {} contains {} control character(s) at position(s): {}",
            input_name,
            control_chars.len(),
            control_chars
                .iter()
                .map(|(pos, _)| pos.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        term.write_line(&warning_msg)?;
        term.write_str("Continue anyway? [y/N]: ")?;
        term.flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;
        let response = response.trim().to_lowercase();

        term.clear_last_lines(2)?;

        if response != "y" && response != "yes" {
            eprintln!("Aborted.");
            std::process::exit(1);
        }
    }

    Ok(s.to_string())
}

fn normalize_and_validate(s: &str, input_name: &str) -> Result<String> {
    let trimmed = s.trim();
    let normalized: String = trimmed.nfc().collect();
    validate_control_characters(&normalized, input_name)
}

pub fn print_catalog() {
    for category in catalog::CATEGORIES {
        println!("{}:", category);
        for question in catalog::questions_in_category(category) {
            println!("  {:<22} {} ({})", question.id, question.text, question.placeholder);
        }
        println!();
    }
    println!("Any other token is accepted as a custom question id.");
}

pub fn prompt_answers() -> Result<(Vec<SecurityAnswer>, Vec<AnswerInfo>)> {
    let mut answers = Vec::new();
    let mut infos = Vec::new();
    let mut index = 1;

    loop {
        if index > MAX_ANSWER_COUNT {
            anyhow::bail!("Too many answers ({} maximum allowed)", MAX_ANSWER_COUNT);
        }

        print!("In [{}]: ", index);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let trimmed = input.trim();
        if trimmed.is_empty() {
            break;
        }

        let question_id = normalize_and_validate(trimmed, &format!("Question id {}", index))?;

        match catalog::question_by_id(&question_id) {
            Some(question) => println!("        {} ({})", question.text, question.placeholder),
            None => println!("        Custom question"),
        }

        print!("Answer: ");
        io::stdout().flush()?;

        let raw = read_password().context("Failed to read answer")?;
        let normalized = normalize_and_validate(&raw, &format!("Answer {}", index))?;

        if normalized.is_empty() {
            anyhow::bail!("Answer {} cannot be empty", index);
        }
        if normalized.len() > MAX_ANSWER_BYTES {
            anyhow::bail!(
                "Answer {} too long ({} bytes, maximum is {})",
                index,
                normalized.len(),
                MAX_ANSWER_BYTES
            );
        }

        let char_count = normalized.chars().count();
        infos.push(AnswerInfo {
            index,
            question_id: question_id.clone(),
            char_count,
        });
        answers.push(SecurityAnswer::new(question_id, normalized));
        index += 1;
    }

    Ok((answers, infos))
}

pub fn display_output(
    password: &str,
    input_info: &InputInfo,
    strength: Strength,
    elapsed: Duration,
    options: &DisplayOptions,
) {
    if options.quiet {
        println!("Out[0]:\n{}", password);
    } else {
        println!("Out[0]:\n{}\n", password);

        display_settings(input_info, options);
        display_stats(password, strength, elapsed, options);
    }
}

fn status_style(secure: bool, options: &DisplayOptions) -> Style {
    if options.color_support {
        if secure {
            Style::new().green()
        } else {
            Style::new().yellow()
        }
    } else {
        Style::new()
    }
}

fn display_settings(input_info: &InputInfo, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    let answers_secure = input_info.answers.len() >= RECOMMENDED_ANSWER_COUNT;
    let length_secure = input_info.length >= RECOMMENDED_LENGTH;

    let answers_style = status_style(answers_secure, options);
    let length_style = status_style(length_secure, options);

    let answers_status = if answers_secure { check_ok } else { check_warn };
    let length_status = if length_secure { check_ok } else { check_warn };

    println!("Settings:");

    println!("  ├─ Derivation Lehmer LCG (mod 2^31-1), seeded from answers");

    println!(
        "  ├─ Answers    {} {} {}",
        answers_style.apply_to(format!("[{}]", answers_status)),
        answers_style.apply_to(input_info.answers.len()),
        if input_info.answers.len() == 1 {
            "answer"
        } else {
            "answers"
        }
    );

    for (i, answer) in input_info.answers.iter().enumerate() {
        let is_last = i == input_info.answers.len() - 1;
        let prefix = if is_last { "│  └─" } else { "│  ├─" };
        let answer_secure = answer.char_count >= MIN_ANSWER_CHARS;
        let answer_style = status_style(answer_secure, options);
        let answer_status = if answer_secure { check_ok } else { check_warn };

        println!(
            "  {} {} In [{}]: {} ({} {})",
            prefix,
            answer_style.apply_to(format!("[{}]", answer_status)),
            answer.index,
            answer.question_id,
            answer_style.apply_to(answer.char_count),
            if answer.char_count == 1 { "char" } else { "chars" }
        );
    }

    println!("  ├─ Period     {}", input_info.period);

    println!(
        "  └─ Length     {} {} {} ({}-{} allowed)",
        length_style.apply_to(format!("[{}]", length_status)),
        length_style.apply_to(input_info.length),
        if input_info.length == 1 { "char" } else { "chars" },
        MIN_LENGTH,
        MAX_LENGTH
    );

    println!();
}

fn display_stats(password: &str, strength: Strength, elapsed: Duration, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    let (status_icon, strength_style) = match strength {
        Strength::Strong => (
            check_ok,
            if options.color_support {
                Style::new().green()
            } else {
                Style::new()
            },
        ),
        Strength::Medium => (
            check_warn,
            if options.color_support {
                Style::new().yellow()
            } else {
                Style::new()
            },
        ),
        Strength::Weak => (
            check_warn,
            if options.color_support {
                Style::new().red()
            } else {
                Style::new()
            },
        ),
    };

    let unique_count = {
        use std::collections::HashSet;
        password.chars().collect::<HashSet<_>>().len()
    };
    let total = password.chars().count();

    println!("Stats:");

    println!(
        "  ├─ Strength   {} {}",
        strength_style.apply_to(format!("[{}]", status_icon)),
        strength_style.apply_to(strength)
    );

    println!(
        "  ├─ Unique     {} of {} {}",
        unique_count,
        total,
        if total == 1 { "char" } else { "chars" }
    );

    println!("  ├─ Charset    95 printable ASCII chars");

    println!("  └─ Time       {:.1}s", elapsed.as_secs_f64());

    println!(
        "\n{} Strength: {}",
        strength_style.apply_to(format!("[{}]", status_icon)),
        strength_style.apply_to(strength)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_status_symbols_unicode() {
        let (ok, warn) = get_status_symbols(true);
        assert_eq!(ok, "✓");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_get_status_symbols_ascii() {
        let (ok, warn) = get_status_symbols(false);
        assert_eq!(ok, "+");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_normalize_nfc() {
        let nfc = "café";
        let nfd = "cafe\u{0301}";

        assert_ne!(nfc.as_bytes(), nfd.as_bytes());

        let normalized_nfc = normalize_and_validate(nfc, "test").unwrap();
        let normalized_nfd = normalize_and_validate(nfd, "test").unwrap();

        assert_eq!(normalized_nfc, normalized_nfd);
        assert_eq!(normalized_nfc.as_bytes(), normalized_nfd.as_bytes());
    }

    #[test]
    fn test_trim_whitespace() {
        let cases = vec![
            ("  小白  ", "小白"),
            ("\tanswer\t", "answer"),
            ("\nanswer\n", "answer"),
            ("  two words  ", "two words"),
            (" café ", "café"),
        ];

        for (input, expected) in cases {
            let normalized = normalize_and_validate(input, "test").unwrap();
            assert_eq!(normalized, expected);
        }
    }

    #[test]
    fn test_trim_and_normalize_combined() {
        let input = "  café  ";
        let nfd_input = "  cafe\u{0301}  ";

        let normalized1 = normalize_and_validate(input, "test").unwrap();
        let normalized2 = normalize_and_validate(nfd_input, "test").unwrap();

        assert_eq!(normalized1, "café");
        assert_eq!(normalized2, "café");
        assert_eq!(normalized1, normalized2);
    }

    #[test]
    fn test_unicode_multibyte_preservation() {
        let inputs = vec![
            "小白".to_string(),
            "北京".to_string(),
            "жизнь".to_string(),
            "생활".to_string(),
            "🌍🌎🌏".to_string(),
        ];

        for input in inputs {
            let normalized = normalize_and_validate(&input, "test").unwrap();
            assert!(!normalized.is_empty());
            assert_eq!(normalized.chars().count(), input.chars().count());
        }
    }

    #[test]
    fn test_normalization_idempotent() {
        let input = "café\u{0301}";

        let first = normalize_and_validate(input, "test").unwrap();
        let second = normalize_and_validate(&first, "test").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_after_trim() {
        let inputs = vec!["   ", "\t\t", "\n\n", ""];

        for input in inputs {
            let normalized = normalize_and_validate(input, "test").unwrap();
            assert_eq!(normalized, "");
        }
    }
}
