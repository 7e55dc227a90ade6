use crate::dimensions::Footprint;
use crate::node::NodeId;
use crate::shape::{BuildingShape, ShapeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub u32);

/// One renderable box-like unit. A building is one primitive or a stack of
/// them sharing a node id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildingPrimitive {
    pub id: BlockId,
    pub node: NodeId,
    /// Footprint centre in x/z; `y` is the base elevation within the stack.
    pub position: [i32; 3],
    pub footprint: Footprint,
    pub height: u32,
    pub material: u16,
    /// Texture array slot, `-1` when untextured.
    pub texture: i32,
    pub shape: ShapeId,
    /// Rotation about +y in radians. Layout output is always 0.
    #[serde(default)]
    pub yaw: f32,
    pub pinned: bool,
    pub is_git_repo: bool,
    pub is_clean: bool,
}

impl BuildingPrimitive {
    pub fn shape_kind(&self) -> BuildingShape {
        self.shape.resolve()
    }

    pub fn base_y(&self) -> i32 {
        self.position[1]
    }

    pub fn box_top(&self) -> i32 {
        self.position[1] + self.height as i32
    }

    /// Inclusive footprint test, so buildings touching along an edge both
    /// cover the shared line.
    pub fn covers(&self, x: f32, z: f32) -> bool {
        let half_w = self.footprint.width as f32 * 0.5;
        let half_d = self.footprint.depth as f32 * 0.5;
        let cx = self.position[0] as f32;
        let cz = self.position[2] as f32;
        (x - cx).abs() <= half_w && (z - cz).abs() <= half_d
    }
}

/// Output of one layout pass: primitives in emission order plus an index of
/// the contiguous run each node owns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CityLayout {
    blocks: Vec<BuildingPrimitive>,
    stacks: HashMap<NodeId, Range<usize>>,
}

impl CityLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the node index over a flat primitive list, e.g. one read back
    /// from JSON. Blocks are regrouped so each node's tiers are contiguous:
    /// nodes keep their first-appearance order and tiers are sorted by base y.
    pub fn from_blocks(blocks: Vec<BuildingPrimitive>) -> Self {
        let mut order: Vec<NodeId> = Vec::new();
        let mut groups: HashMap<NodeId, Vec<BuildingPrimitive>> = HashMap::new();
        for block in blocks {
            let node = block.node;
            groups
                .entry(node)
                .or_insert_with(|| {
                    order.push(node);
                    Vec::new()
                })
                .push(block);
        }
        let mut layout = Self::new();
        for node in order {
            let mut tiers = groups.remove(&node).unwrap_or_default();
            tiers.sort_by_key(BuildingPrimitive::base_y);
            layout.push_stack(node, tiers);
        }
        layout
    }

    pub(crate) fn push_stack(&mut self, node: NodeId, tiers: impl IntoIterator<Item = BuildingPrimitive>) {
        let start = self.blocks.len();
        self.blocks.extend(tiers);
        let end = self.blocks.len();
        if end > start {
            self.stacks.insert(node, start..end);
        }
    }

    pub fn next_block_id(&self) -> BlockId {
        BlockId(self.blocks.len() as u32)
    }

    pub fn blocks(&self) -> &[BuildingPrimitive] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<BuildingPrimitive> {
        self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.stacks.len()
    }

    /// All tiers of `node`, base first.
    pub fn stack(&self, node: NodeId) -> &[BuildingPrimitive] {
        self.stacks
            .get(&node)
            .map(|range| &self.blocks[range.clone()])
            .unwrap_or(&[])
    }

    pub fn stacks(&self) -> impl Iterator<Item = &[BuildingPrimitive]> + '_ {
        let mut ranges: Vec<&Range<usize>> = self.stacks.values().collect();
        ranges.sort_by_key(|range| range.start);
        ranges.into_iter().map(move |range| &self.blocks[range.clone()])
    }

    /// Late status update from the version-control collaborator. Touches
    /// only the clean flag; returns false for unknown nodes.
    pub fn set_clean(&mut self, node: NodeId, clean: bool) -> bool {
        let Some(range) = self.stacks.get(&node).cloned() else {
            return false;
        };
        for block in &mut self.blocks[range] {
            block.is_clean = clean;
        }
        true
    }
}
