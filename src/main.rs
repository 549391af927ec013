mod catalog;
mod generator;
mod hash;
mod rng;
mod strength;
mod ui;

use anyhow::Result;
use clap::Parser;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "mnemos",
    version,
    about = "Deterministic periodic password derivation from personal security answers"
)]
struct Cli {
    /// Period label mixed into the derivation, e.g. 2025, 2025H1, 2025Q3
    #[arg(short, long, required_unless_present = "list_questions")]
    period: Option<String>,

    /// Password length
    #[arg(short, long, default_value_t = 16)]
    length: usize,

    /// Print the password and nothing else
    #[arg(short, long)]
    quiet: bool,

    /// List the built-in question catalog and exit
    #[arg(long)]
    list_questions: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_questions {
        ui::print_catalog();
        return Ok(());
    }

    let Some(period) = cli.period else {
        anyhow::bail!("A period label is required");
    };

    let (security_answers, answer_infos) = ui::prompt_answers()?;

    let config = generator::PasswordConfig {
        security_answers,
        time_period: period.clone(),
        length: cli.length,
    };

    let input_info = ui::InputInfo {
        answers: answer_infos,
        period,
        length: cli.length,
    };

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    let start = Instant::now();
    let password = generator::derive_password(&config)?;
    let elapsed = start.elapsed();

    let strength = strength::score_password(&password);

    println!();
    ui::display_output(&password, &input_info, strength, elapsed, &options);

    Ok(())
}
