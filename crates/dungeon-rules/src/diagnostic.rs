use serde::Serialize;
use strum::{AsRefStr, Display, EnumCount, EnumIter, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// Stable identifier for each design rule.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumIter,
    EnumCount,
    IntoStaticStr,
    AsRefStr,
    Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RuleCode {
    DuplicateRoomName,
    InvalidConnection,
    SelfConnection,
    AsymmetricConnection,
    InvalidProbability,
    TrapInPuzzle,
    MissingCombatRoom,
    InvalidShopSize,
    BossRoomSize,
    BossRoomConnections,
    TooManyTreasureRooms,
    IsolatedRoom,
    NegativeHealth,
}

impl RuleCode {
    pub fn severity(self) -> Severity {
        match self {
            Self::MissingCombatRoom | Self::BossRoomConnections | Self::TooManyTreasureRooms => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }
}

/// One finding from [`crate::check`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub code: RuleCode,
    pub severity: Severity,
    /// Name of the floor, room, trap or NPC the finding is about.
    pub subject: String,
    pub message: String,
}

impl Diagnostic {
    pub(crate) fn new(code: RuleCode, subject: &str, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: code.severity(),
            subject: subject.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)
    }
}

/// All findings for one dungeon, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    pub fn codes(&self) -> Vec<RuleCode> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }
}
