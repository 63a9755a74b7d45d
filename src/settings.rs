use std::path::{Path, PathBuf};

use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState};
use dungeon_json::JsonStyle;
use serde::Deserialize;

use crate::cli::Cli;

/// Prefix for environment overrides, e.g. `DUNGEON_GEN_PRETTY=true`.
const ENV_PREFIX: &str = "DUNGEON_GEN";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output file; stdout when unset.
    pub output: Option<PathBuf>,
    pub pretty: bool,
    pub indent: u8,
    /// Treat design-rule errors as fatal.
    pub strict: bool,
    pub skip_rules: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: None,
            pretty: false,
            indent: JsonStyle::DEFAULT_INDENT,
            strict: false,
            skip_rules: false,
        }
    }
}

impl Settings {
    /// Settings file (if any), then environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        Self::finish(builder)
    }

    #[cfg(test)]
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        Self::finish(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Command-line flags win over files and environment.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if cli.output.is_some() {
            self.output = cli.output.clone();
        }
        if let Some(indent) = cli.indent {
            self.indent = indent;
            self.pretty = true;
        }
        self.pretty |= cli.pretty;
        self.strict |= cli.strict;
        self.skip_rules |= cli.skip_rules;
        if self.strict {
            self.skip_rules = false;
        }
    }

    pub fn style(&self) -> JsonStyle {
        if self.pretty {
            JsonStyle::Pretty {
                indent: self.indent,
            }
        } else {
            JsonStyle::Compact
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults() {
        let s = Settings::parse("").expect("empty settings");
        assert_eq!(s, Settings::default());
        assert_eq!(s.style(), JsonStyle::Compact);
    }

    #[test]
    fn from_toml() {
        let s = Settings::parse(
            r#"
            output = "build/dungeon.json"
            pretty = true
            indent = 4
            strict = true
            "#,
        )
        .expect("settings");
        assert_eq!(s.output, Some(PathBuf::from("build/dungeon.json")));
        assert_eq!(s.style(), JsonStyle::Pretty { indent: 4 });
        assert!(s.strict);
        assert!(!s.skip_rules);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Settings::load(Some(Path::new("/nonexistent/dungeon-gen.toml"))).is_err());
    }

    #[test]
    fn cli_overrides() {
        let mut s = Settings::parse("skip_rules = true\noutput = \"a.json\"").expect("settings");
        let cli = Cli::parse_from(["dungeon-gen", "--strict", "--indent", "3", "-o", "b.json", "x.toml"]);
        s.apply_cli(&cli);
        assert_eq!(s.output, Some(PathBuf::from("b.json")));
        assert_eq!(s.style(), JsonStyle::Pretty { indent: 3 });
        assert!(s.strict);
        assert!(!s.skip_rules);
    }
}
