use crate::node::Node;
use crate::rules::LayoutRules;
use serde::{Deserialize, Serialize};

/// Horizontal extent of a building in grid units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    pub width: u32,
    pub depth: u32,
}

impl Footprint {
    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            depth: side,
        }
    }

    pub fn max_side(self) -> u32 {
        self.width.max(self.depth)
    }

    /// True when neither axis is larger than `other`'s.
    pub fn fits_within(self, other: Footprint) -> bool {
        self.width <= other.width && self.depth <= other.depth
    }
}

/// Files and symlinks sit at the configured minimum; folders scale with
/// `8 * log10(size)` so orders of magnitude stay distinguishable.
pub fn building_height(node: &Node, rules: &LayoutRules) -> u32 {
    let floor = rules.min_building_height.max(1);
    let ceiling = rules.max_building_height.max(floor);
    if !node.kind.is_folder() {
        return floor;
    }
    // log10 is exact on powers of ten, so no rounding slack is needed.
    let raw = (8.0 * (node.size.max(1) as f64).log10()).floor() as u32;
    raw.clamp(floor, ceiling)
}

/// Folders take half the maximum footprint to leave room for detail at the
/// level above; files take the full maximum.
pub fn building_footprint(node: &Node, rules: &LayoutRules) -> Footprint {
    let max = rules.max_block_footprint.max(1);
    let min = rules.min_block_footprint.clamp(1, max);
    let side = if node.kind.is_folder() { max / 2 } else { max };
    Footprint::square(side.clamp(min, max))
}
