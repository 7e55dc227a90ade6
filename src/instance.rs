use crate::primitive::BuildingPrimitive;
use bytemuck::{Pod, Zeroable};

pub const FLAG_PINNED: u32 = 1 << 0;
pub const FLAG_GIT_REPO: u32 = 1 << 1;
pub const FLAG_CLEAN: u32 = 1 << 2;

/// Per-instance record for an instanced draw of one block.
#[repr(C)]
#[derive(Default, Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BlockInstance {
    /// Footprint centre x, base y, centre z, then yaw.
    pub position_yaw: [f32; 4],
    /// Width, height, depth, visual top.
    pub size_top: [f32; 4],
    pub material: u32,
    pub texture: i32,
    pub shape: u32,
    pub flags: u32,
}

impl From<&BuildingPrimitive> for BlockInstance {
    fn from(block: &BuildingPrimitive) -> Self {
        let mut flags = 0;
        if block.pinned {
            flags |= FLAG_PINNED;
        }
        if block.is_git_repo {
            flags |= FLAG_GIT_REPO;
        }
        if block.is_clean {
            flags |= FLAG_CLEAN;
        }
        Self {
            position_yaw: [
                block.position[0] as f32,
                block.position[1] as f32,
                block.position[2] as f32,
                block.yaw,
            ],
            size_top: [
                block.footprint.width as f32,
                block.height as f32,
                block.footprint.depth as f32,
                crate::oracle::visual_top(block),
            ],
            material: u32::from(block.material),
            texture: block.texture,
            shape: u32::from(block.shape.resolve().id().0),
            flags,
        }
    }
}

pub fn pack_instances(blocks: &[BuildingPrimitive]) -> Vec<BlockInstance> {
    blocks.iter().map(BlockInstance::from).collect()
}

/// Raw bytes ready for a GPU vertex/instance buffer upload.
pub fn instance_bytes(instances: &[BlockInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
