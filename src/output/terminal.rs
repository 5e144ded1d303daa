// Colored terminal output for match reports and validation summaries.
//
// This module handles all terminal-specific formatting: colors, tables,
// summaries. The main.rs display paths delegate here.

use colored::Colorize;

use crate::engine::MatchRecord;
use crate::language::Language;
use crate::output::truncate_chars;
use crate::validation::Discrepancies;

/// Display scan results as a table. Expects records in positional order —
/// the caller sorts, since the engine does not.
pub fn display_matches(text: &str, records: &[MatchRecord], language: Option<Language>) {
    let code = language.map(|l| l.code()).unwrap_or("?");

    if records.is_empty() {
        println!(
            "{} no profanity found [{}] in: {}",
            "OK".green().bold(),
            code,
            truncate_chars(text, 60)
        );
        return;
    }

    println!(
        "\n{}",
        format!("=== {} match(es) [{}] ===", records.len(), code).bold()
    );
    println!();
    println!(
        "  {:>5}  {:<24} {:>6}  {:>6}",
        "Word#".dimmed(),
        "Word".dimmed(),
        "Start".dimmed(),
        "End".dimmed(),
    );
    println!("  {}", "-".repeat(48).dimmed());

    for record in records {
        println!(
            "  {:>5}  {:<24} {:>6}  {:>6}",
            record.word_index,
            record.word.red().bold(),
            record.start,
            record.end,
        );
    }
    println!();
}

/// Display the unique matched words, one per line.
pub fn display_bad_words(words: &[String]) {
    if words.is_empty() {
        println!("{} no profanity found", "OK".green().bold());
        return;
    }
    for word in words {
        println!("{}", word.red());
    }
}

/// Display the supported language table.
pub fn display_languages() {
    println!("\n{}", "=== Supported languages ===".bold());
    for language in Language::ALL {
        println!("  {}  {}", language.code().bold(), language.name());
    }
    println!();
}

/// Display a detection result.
pub fn display_detected(language: Language) {
    println!("{}  {}", language.code().bold(), language.name().dimmed());
}

/// Display a validation discrepancy report.
pub fn display_discrepancies(discrepancies: &Discrepancies) {
    if discrepancies.is_empty() {
        println!(
            "{} local results agree with the reference checker",
            "OK".green().bold()
        );
        return;
    }

    if !discrepancies.missing.is_empty() {
        println!(
            "{} {} word(s) the reference checker found but the local scan missed:",
            "!!".red().bold(),
            discrepancies.missing.len()
        );
        for word in &discrepancies.missing {
            println!("     {word}");
        }
    }

    if !discrepancies.false_positives.is_empty() {
        println!(
            "{} {} word(s) flagged locally but not by the reference checker:",
            "~".yellow(),
            discrepancies.false_positives.len()
        );
        for word in &discrepancies.false_positives {
            println!("     {word}");
        }
    }
}
