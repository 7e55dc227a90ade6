//! Skyscraper decomposition.
//!
//! A qualifying folder is split into 2–4 tiers stacked along +y. Tier
//! heights always sum to the building's derived height and footprints never
//! grow going up.

use crate::dimensions::Footprint;
use crate::node::NodeKind;
use crate::rules::{LayoutRules, StackingRules};
use crate::shape::BuildingShape;
use crate::style_hash::StyleSeed;

const CROWN_SHAPES: [BuildingShape; 4] = [
    BuildingShape::Taper,
    BuildingShape::Pyramid,
    BuildingShape::WedgeX,
    BuildingShape::WedgeZ,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TierRole {
    Base,
    Mid,
    Upper,
    Crown,
}

impl TierRole {
    /// Smallest footprint side this role shrinks to.
    pub fn min_footprint(self) -> u32 {
        match self {
            TierRole::Base => 1,
            TierRole::Mid => 4,
            TierRole::Upper => 3,
            TierRole::Crown => 2,
        }
    }
}

/// Nominal share of the total height and the floor for one tier.
/// `percent == None` marks the crown, which takes the remainder.
#[derive(Clone, Copy, Debug)]
struct TierTemplate {
    role: TierRole,
    percent: Option<u32>,
    min_height: u32,
}

const TWO_TIERS: [TierTemplate; 2] = [
    TierTemplate { role: TierRole::Base, percent: Some(65), min_height: 6 },
    TierTemplate { role: TierRole::Crown, percent: None, min_height: 3 },
];

const THREE_TIERS: [TierTemplate; 3] = [
    TierTemplate { role: TierRole::Base, percent: Some(50), min_height: 7 },
    TierTemplate { role: TierRole::Mid, percent: Some(30), min_height: 5 },
    TierTemplate { role: TierRole::Crown, percent: None, min_height: 3 },
];

const FOUR_TIERS: [TierTemplate; 4] = [
    TierTemplate { role: TierRole::Base, percent: Some(45), min_height: 8 },
    TierTemplate { role: TierRole::Mid, percent: Some(25), min_height: 6 },
    TierTemplate { role: TierRole::Upper, percent: Some(18), min_height: 5 },
    TierTemplate { role: TierRole::Crown, percent: None, min_height: 3 },
];

fn templates(count: usize) -> &'static [TierTemplate] {
    match count {
        4 => &FOUR_TIERS,
        3 => &THREE_TIERS,
        _ => &TWO_TIERS,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tier {
    pub role: TierRole,
    /// Base elevation relative to the ground of the stack.
    pub y: u32,
    pub height: u32,
    pub footprint: Footprint,
    pub shape: BuildingShape,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackPlan {
    pub tiers: Vec<Tier>,
}

impl StackPlan {
    pub fn total_height(&self) -> u32 {
        self.tiers.iter().map(|tier| tier.height).sum()
    }
}

pub fn qualifies_for_stacking(
    kind: NodeKind,
    height: u32,
    footprint: Footprint,
    seed: StyleSeed,
    stacking: &StackingRules,
) -> bool {
    kind.is_folder()
        && height >= stacking.min_height
        && footprint.max_side() >= stacking.min_footprint
        && seed.draw(stacking.trigger_modulus) == 0
}

pub fn tier_count(height: u32, seed: StyleSeed, stacking: &StackingRules) -> usize {
    let even = seed.draw(2) == 0;
    if height >= stacking.four_tier_height {
        if even { 4 } else { 3 }
    } else if height >= stacking.three_tier_height {
        if even { 3 } else { 2 }
    } else {
        2
    }
}

pub fn crown_shape(seed: StyleSeed) -> BuildingShape {
    if seed.draw(5) == 0 {
        return BuildingShape::Standard;
    }
    CROWN_SHAPES[seed.draw(4) as usize]
}

/// Nominal tier heights before normalisation.
fn nominal_heights(total: u32, templates: &[TierTemplate]) -> Vec<u32> {
    let mut heights = Vec::with_capacity(templates.len());
    let mut assigned = 0u32;
    for template in templates {
        let height = match template.percent {
            Some(percent) => (u64::from(total) * u64::from(percent) / 100) as u32,
            None => total.saturating_sub(assigned),
        };
        let height = height.max(template.min_height);
        assigned += height;
        heights.push(height);
    }
    heights
}

/// Force `heights` to sum to exactly `target`.
///
/// A deficit goes entirely to tier 0. An excess is taken from tiers in
/// order, each down to its minimum; anything left after that comes out of
/// the last tier (then the ones below it), never below 1. The sum is exact
/// whenever `target >= heights.len()`.
pub fn normalize_heights(heights: &mut [u32], minimums: &[u32], target: u32) {
    debug_assert_eq!(heights.len(), minimums.len());
    if heights.is_empty() {
        return;
    }
    let sum: u32 = heights.iter().sum();
    if sum < target {
        heights[0] += target - sum;
        return;
    }
    let mut excess = sum - target;
    for (height, &min) in heights.iter_mut().zip(minimums) {
        if excess == 0 {
            return;
        }
        let take = height.saturating_sub(min).min(excess);
        *height -= take;
        excess -= take;
    }
    // Minimums alone exceed the target: the top tiers give way first, down
    // to one unit each, starting with the last.
    for height in heights.iter_mut().rev() {
        if excess == 0 {
            return;
        }
        let take = height.saturating_sub(1).min(excess);
        *height -= take;
        excess -= take;
    }
}

fn shrink(previous: Footprint, role: TierRole, step: u32) -> Footprint {
    let axis = |side: u32| side.saturating_sub(step).max(role.min_footprint()).min(side);
    Footprint {
        width: axis(previous.width),
        depth: axis(previous.depth),
    }
}

/// Split a building of `height` into tiers. The tier count is reduced when
/// the height cannot give every tier at least one unit.
pub fn plan_stack(
    height: u32,
    footprint: Footprint,
    seed: StyleSeed,
    rules: &LayoutRules,
) -> StackPlan {
    let stacking = &rules.stacking;
    let mut count = tier_count(height, seed, stacking);
    while count > 2 && (height as usize) < count {
        count -= 1;
    }
    let templates = templates(count);
    if (height as usize) < templates.len() {
        return StackPlan {
            tiers: vec![Tier {
                role: TierRole::Base,
                y: 0,
                height,
                footprint,
                shape: BuildingShape::Standard,
            }],
        };
    }

    let minimums: Vec<u32> = templates.iter().map(|t| t.min_height).collect();
    let mut heights = nominal_heights(height, templates);
    normalize_heights(&mut heights, &minimums, height);

    let crown = crown_shape(seed);
    let mut tiers = Vec::with_capacity(templates.len());
    let mut y = 0;
    let mut current = footprint;
    for (index, (template, tier_height)) in templates.iter().zip(heights).enumerate() {
        if index > 0 {
            current = shrink(current, template.role, stacking.footprint_step);
        }
        let is_crown = index + 1 == templates.len();
        tiers.push(Tier {
            role: template.role,
            y,
            height: tier_height,
            footprint: current,
            shape: if is_crown { crown } else { BuildingShape::Standard },
        });
        y += tier_height;
    }
    StackPlan { tiers }
}
