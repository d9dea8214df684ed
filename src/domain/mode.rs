use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a differing line pair is turned into spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Opcode based; matched runs are tagged equal.
    #[default]
    LcsEqualPlain,
    /// Opcode based; matched runs are tagged as changed too, so a differing
    /// line is rendered fully colored.
    LcsAllColored,
    /// Character-by-character comparison at identical offsets.
    Positional,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LcsEqualPlain => write!(f, "lcs_equal_plain"),
            Self::LcsAllColored => write!(f, "lcs_all_colored"),
            Self::Positional => write!(f, "positional"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "lcs_equal_plain" | "lcs" | "plain" => Ok(Self::LcsEqualPlain),
            "lcs_all_colored" | "colored" | "all_colored" => Ok(Self::LcsAllColored),
            "positional" | "position" | "naive" => Ok(Self::Positional),
            other => Err(format!("invalid diff mode: {other}")),
        }
    }
}

/// Matcher used to compute opcodes for the LCS based modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Gestalt pattern matching (longest matching block, recursively).
    #[default]
    RatcliffObershelp,
    Myers,
    Patience,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RatcliffObershelp => write!(f, "ratcliff_obershelp"),
            Self::Myers => write!(f, "myers"),
            Self::Patience => write!(f, "patience"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "ratcliff_obershelp" | "ratcliff" | "gestalt" => Ok(Self::RatcliffObershelp),
            "myers" => Ok(Self::Myers),
            "patience" => Ok(Self::Patience),
            other => Err(format!("invalid diff algorithm: {other}")),
        }
    }
}

/// Engine parameters for one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffOptions {
    pub mode: Mode,
    pub algorithm: Algorithm,
}

impl DiffOptions {
    pub fn new(mode: Mode, algorithm: Algorithm) -> Self {
        Self { mode, algorithm }
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}
