use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Turn a dungeon manifest into a JSON document.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Dungeon manifest (TOML)
    pub manifest: PathBuf,

    /// Settings file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the document here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Indent the document
    #[arg(long)]
    pub pretty: bool,

    /// Spaces per level when pretty printing
    #[arg(long, value_name = "N")]
    pub indent: Option<u8>,

    /// Refuse to emit a dungeon that breaks a design rule
    #[arg(long, conflicts_with = "skip_rules")]
    pub strict: bool,

    /// Also write the design rule findings as JSON
    #[arg(long, value_name = "PATH", conflicts_with = "skip_rules")]
    pub report: Option<PathBuf>,

    /// Do not run the design rules at all
    #[arg(long)]
    pub skip_rules: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags() {
        let cli = Cli::parse_from(["dungeon-gen", "-vv", "--pretty", "-o", "out.json", "cave.toml"]);
        assert_eq!(cli.manifest, PathBuf::from("cave.toml"));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert!(cli.pretty);
        assert_eq!(cli.log_filter(), "trace");
        assert_eq!(cli.report, None);
    }

    #[test]
    fn report_needs_rules() {
        let cli = Cli::parse_from(["dungeon-gen", "--report", "rules.json", "cave.toml"]);
        assert_eq!(cli.report, Some(PathBuf::from("rules.json")));
        let result =
            Cli::try_parse_from(["dungeon-gen", "--report", "r.json", "--skip-rules", "cave.toml"]);
        assert!(result.is_err());
    }

    #[test]
    fn strict_and_skip_conflict() {
        let result = Cli::try_parse_from(["dungeon-gen", "--strict", "--skip-rules", "cave.toml"]);
        assert!(result.is_err());
    }
}
