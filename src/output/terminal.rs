// Colored terminal output for analysis results, history, and the rule table.
//
// main.rs decides what to show; this module decides how it looks.

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::history::AnalysisHistory;
use crate::models::{AnalysisResult, RiskLevel, TriggeredRule};
use crate::scoring::engine::RULES;
use crate::scoring::username::PATTERNS;

/// Display a single analysis: score, tier, account echo, and triggered rules.
pub fn display_result(result: &AnalysisResult) {
    println!(
        "\n{}",
        format!("=== Analysis for @{} ===", result.username).bold()
    );

    println!("  Risk score: {}/100", result.risk_score);
    println!(
        "  Risk level: {}",
        colorize_level(result.risk_level, &format!("{} Risk", result.risk_level))
    );

    let data = &result.account_data;
    println!();
    println!("  {:<18} {} days", "Account age:".dimmed(), data.account_age);
    println!("  {:<18} {}", "Followers:".dimmed(), data.followers);
    println!("  {:<18} {}", "Following:".dimmed(), data.following);
    println!("  {:<18} {} chars", "Bio length:".dimmed(), data.bio_length);
    println!(
        "  {:<18} {}",
        "Profile photo:".dimmed(),
        if data.has_profile_photo { "yes" } else { "no" }
    );

    display_triggered_rules(&result.triggered_rules);
}

/// Display the rules that fired, with their points and a total.
pub fn display_triggered_rules(rules: &[TriggeredRule]) {
    println!();
    if rules.is_empty() {
        println!("  {} {}", "✓".green(), "No risk indicators detected".green());
        println!("    {}", "This account passed all security checks".dimmed());
        return;
    }

    println!(
        "  {}",
        format!("Triggered rules ({})", rules.len()).bold()
    );
    for rule in rules {
        println!(
            "    {} {:<20} {:>4}",
            "!".yellow(),
            rule.rule,
            format!("+{}", rule.points).red()
        );
        println!("      {}", rule.description.dimmed());
    }

    let total: u32 = rules.iter().map(|r| r.points).sum();
    println!("  {}", "-".repeat(40).dimmed());
    println!("  Total Points Added: {} pts", total.to_string().bold());
}

/// Display recent analyses, newest first.
pub fn display_history(history: &AnalysisHistory, now: DateTime<Utc>) {
    if history.is_empty() {
        println!("No analysis history yet");
        println!("  {}", "Analyzed accounts will appear here".dimmed());
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Recent Analyses ({} of last {}) ===",
            history.len(),
            history.capacity()
        )
        .bold()
    );
    println!();
    println!(
        "  {:<14} {:<28} {:<24} {:<8} {:>5}",
        "Id".dimmed(),
        "Account".dimmed(),
        "When".dimmed(),
        "Level".dimmed(),
        "Score".dimmed(),
    );
    println!("  {}", "-".repeat(83).dimmed());

    for result in history.iter() {
        let when = super::format_relative(&result.timestamp, now);
        println!(
            "  {:<14} @{:<27} {:<24} {:<8} {:>5}",
            result.id.as_deref().unwrap_or("-"),
            result.username,
            when,
            colorize_level(result.risk_level, result.risk_level.as_str()),
            result.risk_score,
        );
    }

    let high = history
        .iter()
        .filter(|r| r.risk_level == RiskLevel::High)
        .count();
    let medium = history
        .iter()
        .filter(|r| r.risk_level == RiskLevel::Medium)
        .count();

    println!();
    if high > 0 {
        println!("  {} {} high risk accounts", "!!".red().bold(), high);
    }
    if medium > 0 {
        println!("  {} {} medium risk accounts", "!".yellow(), medium);
    }
}

/// Display the scoring rules and the username patterns they rely on.
pub fn display_rules() {
    println!("\n{}", "=== Scoring Rules ===".bold());
    println!();
    for (i, rule) in RULES.iter().enumerate() {
        println!(
            "  {}. {:<20} {:>4}  {}",
            i + 1,
            rule.name,
            format!("+{}", rule.points).red(),
            rule.condition.dimmed()
        );
    }

    println!("\n  {}", "Suspicious username patterns:".bold());
    for pattern in PATTERNS.iter() {
        println!("    - {}", pattern.summary);
    }

    println!();
    println!(
        "  Score is capped at 100. {} < 30, {} 30-59, {} 60+",
        colorize_level(RiskLevel::Low, "Low"),
        colorize_level(RiskLevel::Medium, "Medium"),
        colorize_level(RiskLevel::High, "High"),
    );
}

/// Colorize text according to a risk level.
fn colorize_level(level: RiskLevel, text: &str) -> colored::ColoredString {
    match level {
        RiskLevel::High => text.red().bold(),
        RiskLevel::Medium => text.yellow(),
        RiskLevel::Low => text.green(),
    }
}
