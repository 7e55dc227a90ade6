//! Deterministic layout and geometry engine for a file-system city.
//!
//! A scanned file tree goes in, a flat list of building primitives comes
//! out. Every size, shape and style decision is a pure function of the
//! tree, the [`LayoutRules`] and the node paths, so the same folder always
//! produces the same skyline. The [`oracle`] module answers geometric
//! questions about the result for picking, effects and collision.

pub mod appearance;
pub mod assembler;
pub mod dimensions;
pub mod error;
pub mod grid;
pub mod instance;
pub mod node;
pub mod oracle;
pub mod pins;
pub mod primitive;
pub mod rules;
pub mod shape;
pub mod style_hash;
pub mod tiers;

#[cfg(test)]
pub(crate) mod testkit;

pub use assembler::{layout, layout_nodes};
pub use dimensions::Footprint;
pub use error::{ConfigError, RulesError};
pub use node::{Node, NodeId, NodeKind};
pub use oracle::{max_height_at, stack_visual_top, visual_top, VisualTop};
pub use pins::{pin_key, NoPins, PinLookup, PinSet};
pub use primitive::{BlockId, BuildingPrimitive, CityLayout};
pub use rules::{LayoutRules, StackingRules};
pub use shape::{BuildingShape, ShapeId};
pub use style_hash::StyleSeed;

/// Read a scanned tree from a JSON file.
pub fn load_tree(path: &std::path::Path) -> Result<Node, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tree: Node = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "loaded tree {} with {} nodes",
        tree.path,
        tree.node_count()
    );
    Ok(tree)
}
