//! Roster and script summaries
//!
//! Each command reads a document from disk and writes a plain-text summary to
//! the given writer. Diagnostics go through `tracing`, never to the writer.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clocktower_domain::{Night, NightEntry, Roster, Script};

/// Options for the `script` command
#[derive(Debug, Clone, Default)]
pub struct ScriptOptions {
    pub path: PathBuf,
    /// Roster used to resolve original character ids
    pub roster: Option<PathBuf>,
    /// Also print the compressed share link
    pub share_url: bool,
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn load_roster(path: &Path) -> Result<Roster> {
    let data = read(path)?;
    let context = || format!("failed to decode roster {}", path.display());
    Roster::from_json(&data).with_context(context)
}

pub fn load_script(path: &Path) -> Result<Script> {
    let data = read(path)?;
    let context = || format!("failed to decode script {}", path.display());
    Script::from_json(&data).with_context(context)
}

/// `clocktower roster <path>`
pub fn run_roster(path: &Path, out: &mut impl Write) -> Result<()> {
    let roster = load_roster(path)?;
    tracing::info!(path = %path.display(), characters = roster.len(), "loaded roster");
    write_roster(&roster, out).context("failed to write roster summary")
}

/// `clocktower script <path> [--roster <path>] [--share-url]`
pub fn run_script(options: &ScriptOptions, out: &mut impl Write) -> Result<()> {
    let mut script = load_script(&options.path)?;
    tracing::info!(
        path = %options.path.display(),
        originals = script.original_character_ids().len(),
        customs = script.custom_characters().len(),
        "loaded script"
    );

    write_script(&script, out).context("failed to write script summary")?;

    if let Some(roster_path) = &options.roster {
        let roster = load_roster(roster_path)?;
        let missing = script.populate_index(&roster);
        write_resolution(&script, &missing, out).context("failed to write night order")?;
    }

    if options.share_url {
        let link = script.share_url().context("failed to build share link")?;
        writeln!(out, "Share: {link}")?;
    }
    Ok(())
}

pub fn write_roster(roster: &Roster, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Name: {}", roster.name())?;
    writeln!(out, "Author: {}", roster.author())?;
    writeln!(out, "Almanac: {}", roster.almanac())?;
    for role in roster.characters() {
        writeln!(out, "{}: {}", role.name, role.ability)?;
    }
    Ok(())
}

pub fn write_script(script: &Script, out: &mut impl Write) -> std::io::Result<()> {
    let meta = script.meta();
    writeln!(out, "Script: {} by {}", script.name(), script.author())?;
    if !meta.almanac.is_empty() {
        writeln!(out, "Learn more at {}", meta.almanac)?;
    }

    writeln!(out, "First Night Order:")?;
    write_numbered(&meta.first_night, out)?;
    writeln!(out, "Other Night Order:")?;
    write_numbered(&meta.other_night, out)?;

    let customs: Vec<&str> = script
        .custom_characters()
        .iter()
        .map(|role| role.name.as_str())
        .collect();
    writeln!(out, "Characters")?;
    let originals = script.original_character_ids().join(", ");
    writeln!(out, "Original: {originals}")?;
    writeln!(out, "Custom: {}", customs.join(", "))
}

/// Merged night sequences of a resolved script, plus anything the roster lacked
pub fn write_resolution(
    script: &Script,
    missing: &[String],
    out: &mut impl Write,
) -> std::io::Result<()> {
    for night in [Night::First, Night::Other] {
        writeln!(out, "{night}:")?;
        write_entries(&script.night_order(night), out)?;
    }
    if !missing.is_empty() {
        writeln!(out, "Missing: {}", missing.join(", "))?;
    }
    Ok(())
}

fn write_numbered(labels: &[String], out: &mut impl Write) -> std::io::Result<()> {
    for (i, label) in labels.iter().enumerate() {
        writeln!(out, "{:02}. {}", i + 1, label)?;
    }
    Ok(())
}

fn write_entries(entries: &[NightEntry<'_>], out: &mut impl Write) -> std::io::Result<()> {
    for entry in entries {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}
