use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure while loading layout inputs (rules, pins, trees) from disk.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    InvalidRules(RulesError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
            Self::InvalidRules(err) => write!(f, "invalid layout rules: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::InvalidRules(err) => Some(err),
        }
    }
}

impl From<RulesError> for ConfigError {
    fn from(err: RulesError) -> Self {
        Self::InvalidRules(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    ZeroValue { field: &'static str },
    FootprintRangeInverted { min: u32, max: u32 },
    HeightRangeInverted { min: u32, max: u32 },
    PitchOverflow { pitch: u64 },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroValue { field } => write!(f, "{field} must be positive"),
            Self::FootprintRangeInverted { min, max } => write!(
                f,
                "min_block_footprint {min} exceeds max_block_footprint {max}"
            ),
            Self::HeightRangeInverted { min, max } => write!(
                f,
                "min_building_height {min} exceeds max_building_height {max}"
            ),
            Self::PitchOverflow { pitch } => write!(
                f,
                "max_block_footprint + road_width = {pitch} does not fit world coordinates"
            ),
        }
    }
}

impl std::error::Error for RulesError {}
