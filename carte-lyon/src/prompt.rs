//! Sélecteurs interactifs de préférences (thème et format d'export)
//!
//! Deux choix numérotés, le choix 1 est le défaut sur entrée vide, une
//! entrée invalide redemande sans jamais faire échouer la commande.

use std::io::{BufRead, Write};

use anyhow::Result;
use voirie::Theme;
use yansi::Paint;

use crate::render::ExportFormat;

/// Demande le thème de la carte sur le terminal
pub fn ask_theme() -> Result<Theme> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    select_theme(&mut stdin.lock(), &mut stdout.lock())
}

/// Demande le format d'export sur le terminal
pub fn ask_format() -> Result<ExportFormat> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    select_format(&mut stdin.lock(), &mut stdout.lock())
}

/// Sélecteur de thème sur un couple lecture/écriture quelconque
pub fn select_theme<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Theme> {
    let choice = select(
        input,
        output,
        "Thème de la carte",
        &["light (fond clair)", "dark (fond sombre)"],
    )?;

    Ok(match choice {
        2 => Theme::Dark,
        _ => Theme::Light,
    })
}

/// Sélecteur de format d'export sur un couple lecture/écriture quelconque
pub fn select_format<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<ExportFormat> {
    let choice = select(
        input,
        output,
        "Format d'export",
        &["HTML", "HTML + PNG (non implémenté)"],
    )?;

    Ok(match choice {
        2 => ExportFormat::HtmlPng,
        _ => ExportFormat::Html,
    })
}

/// Boucle de sélection numérotée: retourne l'indice 1-based du choix.
///
/// Entrée vide ou fin de flux: choix 1. Entrée non numérique ou hors
/// bornes: message d'erreur puis nouvelle demande.
fn select<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    title: &str,
    options: &[&str],
) -> Result<usize> {
    writeln!(output, "\n{}", title.bold())?;
    for (i, option) in options.iter().enumerate() {
        let default_marker = if i == 0 { " (défaut)" } else { "" };
        writeln!(output, "  {}. {}{}", i + 1, option, default_marker)?;
    }

    loop {
        write!(output, "Votre choix [1-{}]: ", options.len())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // Fin de flux: défaut
            return Ok(1);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(1);
        }

        match trimmed.parse::<usize>() {
            Ok(choice) if (1..=options.len()).contains(&choice) => return Ok(choice),
            _ => writeln!(output, "{}", "Choix invalide, réessayez.".red())?,
        }
    }
}
