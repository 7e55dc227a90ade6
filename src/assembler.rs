//! Turns a folder's children into the city's building primitives.

use crate::appearance::{material_index, texture_index};
use crate::dimensions::{building_footprint, building_height, Footprint};
use crate::grid::{cell_origin, grid_cell, grid_size, sort_siblings};
use crate::node::Node;
use crate::pins::{pin_key, PinLookup};
use crate::primitive::{BlockId, BuildingPrimitive, CityLayout};
use crate::rules::LayoutRules;
use crate::shape::BuildingShape;
use crate::style_hash::StyleSeed;
use crate::tiers::{plan_stack, qualifies_for_stacking};

const SHAPE_PICK_MODULUS: u32 = 12;
const SHAPED_MIN_HEIGHT: u32 = 5;
const SHAPED_MAX_FOOTPRINT: u32 = 10;

/// Lay out the contents of `root` as one city grid.
pub fn layout(root: &Node, rules: &LayoutRules, pins: &impl PinLookup) -> CityLayout {
    layout_nodes(&root.children, rules, pins)
}

/// Lay out an explicit sibling list.
pub fn layout_nodes(siblings: &[Node], rules: &LayoutRules, pins: &impl PinLookup) -> CityLayout {
    if let Err(err) = rules.validate() {
        log::warn!("laying out with invalid rules: {err}");
    }
    let mut sorted = sort_siblings(siblings);
    let cap = rules.max_nodes as usize;
    if sorted.len() > cap {
        log::warn!(
            "truncating {} siblings to max_nodes={}",
            sorted.len(),
            cap
        );
        sorted.truncate(cap);
    }

    let size = grid_size(sorted.len());
    let mut city = CityLayout::new();
    let mut stacked = 0usize;
    for (index, node) in sorted.into_iter().enumerate() {
        let origin = cell_origin(grid_cell(index, size), rules);
        let tiers = building_blocks(node, origin, rules, pins, city.next_block_id().0);
        if tiers.len() > 1 {
            stacked += 1;
        }
        city.push_stack(node.id, tiers);
    }
    log::debug!(
        "laid out {} nodes as {} blocks on a {size}x{size} grid ({stacked} stacked)",
        city.node_count(),
        city.len()
    );
    city
}

/// Shape for a building that is not split into tiers.
pub fn single_block_shape(node: &Node, height: u32, footprint: Footprint, seed: StyleSeed) -> BuildingShape {
    if !node.kind.is_folder() || height <= SHAPED_MIN_HEIGHT || footprint.max_side() >= SHAPED_MAX_FOOTPRINT {
        return BuildingShape::Standard;
    }
    match seed.draw(SHAPE_PICK_MODULUS) {
        7 => BuildingShape::WedgeX,
        8 => BuildingShape::WedgeZ,
        9 => BuildingShape::Pyramid,
        10 | 11 => BuildingShape::Taper,
        _ => BuildingShape::Standard,
    }
}

fn building_blocks(
    node: &Node,
    origin: [i32; 3],
    rules: &LayoutRules,
    pins: &impl PinLookup,
    first_id: u32,
) -> Vec<BuildingPrimitive> {
    let seed = StyleSeed::from_key(&node.path);
    let height = building_height(node, rules);
    let footprint = building_footprint(node, rules);

    let template = BuildingPrimitive {
        id: BlockId(first_id),
        node: node.id,
        position: origin,
        footprint,
        height,
        material: material_index(node),
        texture: texture_index(node),
        shape: BuildingShape::Standard.id(),
        yaw: 0.0,
        pinned: pins.is_pinned(pin_key(&node.path)),
        is_git_repo: node.is_git_repo,
        is_clean: true,
    };

    if !qualifies_for_stacking(node.kind, height, footprint, seed, &rules.stacking) {
        let shape = single_block_shape(node, height, footprint, seed);
        return vec![BuildingPrimitive {
            shape: shape.id(),
            ..template
        }];
    }

    let plan = plan_stack(height, footprint, seed, rules);
    log::trace!(
        "{} stacks into {} tiers (height {height})",
        node.path,
        plan.tiers.len()
    );
    plan.tiers
        .iter()
        .enumerate()
        .map(|(offset, tier)| BuildingPrimitive {
            id: BlockId(first_id + offset as u32),
            position: [origin[0], origin[1] + tier.y as i32, origin[2]],
            footprint: tier.footprint,
            height: tier.height,
            shape: tier.shape.id(),
            ..template.clone()
        })
        .collect()
}
