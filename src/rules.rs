use crate::error::{ConfigError, RulesError};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_ROAD_WIDTH: u32 = 4;
const DEFAULT_BLOCK_PADDING: u32 = 1;
const DEFAULT_MIN_BLOCK_FOOTPRINT: u32 = 2;
const DEFAULT_MAX_BLOCK_FOOTPRINT: u32 = 12;
const DEFAULT_MIN_BUILDING_HEIGHT: u32 = 1;
const DEFAULT_MAX_BUILDING_HEIGHT: u32 = 64;
const DEFAULT_MAX_NODES: u32 = 4096;
const DEFAULT_LOD_DISTANCE: f32 = 400.0;

/// Layout configuration. Immutable for the duration of one layout pass;
/// callers may reload it between passes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutRules {
    pub road_width: u32,
    /// Facade inset consumed by the renderer. Not used by the layout itself.
    pub block_padding: u32,
    pub min_block_footprint: u32,
    pub max_block_footprint: u32,
    pub min_building_height: u32,
    pub max_building_height: u32,
    /// Upper bound on siblings placed in one grid.
    pub max_nodes: u32,
    /// Level-of-detail switch distance, passed through to the renderer.
    pub lod_distance: f32,
    pub stacking: StackingRules,
}

impl Default for LayoutRules {
    fn default() -> Self {
        Self {
            road_width: DEFAULT_ROAD_WIDTH,
            block_padding: DEFAULT_BLOCK_PADDING,
            min_block_footprint: DEFAULT_MIN_BLOCK_FOOTPRINT,
            max_block_footprint: DEFAULT_MAX_BLOCK_FOOTPRINT,
            min_building_height: DEFAULT_MIN_BUILDING_HEIGHT,
            max_building_height: DEFAULT_MAX_BUILDING_HEIGHT,
            max_nodes: DEFAULT_MAX_NODES,
            lod_distance: DEFAULT_LOD_DISTANCE,
            stacking: StackingRules::default(),
        }
    }
}

/// Tuned skyscraper thresholds. The defaults define the city's look; change
/// them only together with accepting that existing cities re-stack.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StackingRules {
    pub min_height: u32,
    pub min_footprint: u32,
    /// A folder stacks when `seed % trigger_modulus == 0`.
    pub trigger_modulus: u32,
    pub four_tier_height: u32,
    pub three_tier_height: u32,
    /// Per-axis footprint reduction from one tier to the next.
    pub footprint_step: u32,
}

impl Default for StackingRules {
    fn default() -> Self {
        Self {
            min_height: 14,
            min_footprint: 6,
            trigger_modulus: 3,
            four_tier_height: 40,
            three_tier_height: 24,
            footprint_step: 2,
        }
    }
}

impl LayoutRules {
    /// Distance between neighbouring grid cell centres.
    pub fn cell_pitch(&self) -> u32 {
        self.max_block_footprint.saturating_add(self.road_width)
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        let positive = [
            ("max_block_footprint", self.max_block_footprint),
            ("min_block_footprint", self.min_block_footprint),
            ("max_building_height", self.max_building_height),
            ("min_building_height", self.min_building_height),
            ("max_nodes", self.max_nodes),
            ("stacking.trigger_modulus", self.stacking.trigger_modulus),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(RulesError::ZeroValue { field });
            }
        }
        if self.min_block_footprint > self.max_block_footprint {
            return Err(RulesError::FootprintRangeInverted {
                min: self.min_block_footprint,
                max: self.max_block_footprint,
            });
        }
        let pitch = u64::from(self.max_block_footprint) + u64::from(self.road_width);
        if pitch > i32::MAX as u64 {
            return Err(RulesError::PitchOverflow { pitch });
        }
        if self.min_building_height > self.max_building_height {
            return Err(RulesError::HeightRangeInverted {
                min: self.min_building_height,
                max: self.max_building_height,
            });
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load and validate rules from a JSON file. Missing fields take their
    /// defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rules = Self::from_json_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        rules.validate()?;
        log::debug!("loaded layout rules from {}", path.display());
        Ok(rules)
    }
}
