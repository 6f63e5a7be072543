//! Présentation terminal: bannières de section, messages, progression

use indicatif::{ProgressBar, ProgressStyle};
use yansi::Paint;

/// Bannière de section numérotée
pub fn section(number: usize, title: &str) {
    let border = "=".repeat(50);
    println!("\n{}", border.blue().bold());
    println!("{}", format!("{number}- {title}").blue().bold());
    println!("{}", border.blue().bold());
}

/// Message d'étape en cours
pub fn step(message: &str) {
    println!("{}", message.yellow());
}

/// Message de succès
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Avertissement visible (ex: format d'export non supporté)
pub fn notice(message: &str) {
    println!("{} {}", "!".red().bold(), message.red());
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("   {msg} {bar:40.cyan/blue} {pos:>6}/{len:6} ({percent}%)")
        .unwrap()
        .progress_chars("##-")
}

/// Barre de progression par feature
pub fn progress(len: u64, message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(progress_style());
    pb.set_message(message);
    pb
}
