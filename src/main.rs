mod cli;
mod manifest;
mod settings;

use std::fs;
use std::io;
use std::path::Path;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, bail};
use dungeon_json::JsonStyle;
use dungeon_rules::Severity;
use dungeon_types::Dungeon;
use log::{error, info, warn};

use crate::cli::Cli;
use crate::manifest::Manifest;
use crate::settings::Settings;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let mut settings = Settings::load(cli.config.as_deref()).wrap_err("loading settings")?;
    settings.apply_cli(&cli);

    let dungeon = Manifest::load(&cli.manifest)?.into_dungeon()?;
    info!(
        "dungeon '{}': {} floors, {} rooms",
        dungeon.name,
        dungeon.floors.len(),
        dungeon.rooms().count()
    );

    if !settings.skip_rules {
        let report = dungeon_rules::check(&dungeon);
        for d in &report.diagnostics {
            match d.severity {
                Severity::Error => error!("{}: {d}", d.subject),
                Severity::Warning => warn!("{}: {d}", d.subject),
            }
        }
        if let Some(path) = &cli.report {
            let json = serde_json::to_string_pretty(&report)?;
            fs::write(path, json).wrap_err_with(|| format!("writing {}", path.display()))?;
            info!(
                "wrote {} design rule finding(s) to {}",
                report.diagnostics.len(),
                path.display()
            );
        }
        if settings.strict && report.has_errors() {
            bail!(
                "{} design rule error(s) in '{}'",
                report.errors().count(),
                dungeon.name
            );
        }
    } else if cli.report.is_some() {
        warn!("design rules are skipped, no report written");
    }

    write_output(&dungeon, settings.style(), settings.output.as_deref())
}

fn write_output(dungeon: &Dungeon, style: JsonStyle, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            // Rendered before the file is opened so an invalid dungeon
            // leaves any existing file untouched.
            let doc = dungeon_json::to_json_with(dungeon, style)?;
            fs::write(path, doc).wrap_err_with(|| format!("writing {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => dungeon_json::write_json(dungeon, style, io::stdout().lock())?,
    }
    Ok(())
}
