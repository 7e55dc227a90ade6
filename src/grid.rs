//! Square grid placement of sibling nodes.
//!
//! Placement is a pure function of the sorted sibling index and the rules,
//! so an unchanged sibling set always lands in the same cells.

use crate::node::Node;
use crate::rules::LayoutRules;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    pub col: u32,
    pub row: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridPlacement {
    pub index: usize,
    pub cell: GridCell,
    /// World position of the cell centre; `y` is always 0.
    pub origin: [i32; 3],
}

/// Folder < file < symlink, then shallower first, larger first, and finally
/// path order so the result is total.
pub fn sibling_order(a: &Node, b: &Node) -> Ordering {
    a.kind
        .sort_rank()
        .cmp(&b.kind.sort_rank())
        .then_with(|| a.depth.cmp(&b.depth))
        .then_with(|| b.size.cmp(&a.size))
        .then_with(|| a.path.cmp(&b.path))
}

pub fn sort_siblings(siblings: &[Node]) -> Vec<&Node> {
    let mut sorted: Vec<&Node> = siblings.iter().collect();
    sorted.sort_by(|a, b| sibling_order(a, b));
    sorted
}

/// `ceil(sqrt(n))`, computed in integers. Zero for an empty sibling list.
pub fn grid_size(count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    let mut side = (count as f64).sqrt() as u64;
    while side * side < count as u64 {
        side += 1;
    }
    while side > 1 && (side - 1) * (side - 1) >= count as u64 {
        side -= 1;
    }
    side as u32
}

pub fn grid_cell(index: usize, grid_size: u32) -> GridCell {
    let size = grid_size.max(1) as usize;
    GridCell {
        col: (index % size) as u32,
        row: (index / size) as u32,
    }
}

pub fn cell_origin(cell: GridCell, rules: &LayoutRules) -> [i32; 3] {
    let pitch = i32::try_from(rules.cell_pitch()).unwrap_or(i32::MAX);
    let axis = |index: u32| i32::try_from(index).unwrap_or(i32::MAX).saturating_mul(pitch);
    [axis(cell.col), 0, axis(cell.row)]
}

pub fn place(count: usize, rules: &LayoutRules) -> Vec<GridPlacement> {
    let size = grid_size(count);
    (0..count)
        .map(|index| {
            let cell = grid_cell(index, size);
            GridPlacement {
                index,
                cell,
                origin: cell_origin(cell, rules),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use crate::testkit::node;
    use std::collections::HashSet;

    #[test]
    fn grid_size_is_ceil_sqrt() {
        let expected = [(0, 0), (1, 1), (2, 2), (4, 2), (5, 3), (9, 3), (10, 4), (17, 5)];
        for (count, size) in expected {
            assert_eq!(grid_size(count), size, "count {count}");
        }
    }

    #[test]
    fn placement_is_a_bijection_onto_leading_cells() {
        let rules = LayoutRules::default();
        for count in 0..60 {
            let size = grid_size(count);
            let placements = place(count, &rules);
            let cells: HashSet<GridCell> = placements.iter().map(|p| p.cell).collect();
            assert_eq!(cells.len(), count, "collision at count {count}");
            for (index, placement) in placements.iter().enumerate() {
                assert!(placement.cell.col < size);
                assert!(placement.cell.row < size);
                let linear = placement.cell.row as usize * size as usize + placement.cell.col as usize;
                assert_eq!(linear, index, "gap at count {count}");
            }
        }
    }

    #[test]
    fn origins_step_by_footprint_plus_road() {
        let rules = LayoutRules::default();
        let placements = place(5, &rules);
        assert_eq!(placements[0].origin, [0, 0, 0]);
        assert_eq!(placements[1].origin, [16, 0, 0]);
        assert_eq!(placements[3].origin, [0, 0, 16]);
        assert_eq!(placements[4].origin, [16, 0, 16]);
    }

    #[test]
    fn huge_pitch_saturates_instead_of_wrapping() {
        let rules = LayoutRules {
            road_width: u32::MAX,
            ..LayoutRules::default()
        };
        let origin = cell_origin(GridCell { col: 3, row: 0 }, &rules);
        assert_eq!(origin, [i32::MAX, 0, 0]);
    }

    #[test]
    fn siblings_sort_by_kind_depth_size_then_path() {
        let siblings = vec![
            node(1, "/r/link", NodeKind::Symlink, 10),
            node(2, "/r/small.txt", NodeKind::File, 1),
            node(3, "/r/big.txt", NodeKind::File, 100),
            node(4, "/r/b", NodeKind::Folder, 5),
            node(5, "/r/a", NodeKind::Folder, 5),
            node(6, "/r/x/deep", NodeKind::Folder, 1_000),
        ];
        let order: Vec<u64> = sort_siblings(&siblings).iter().map(|n| n.id.0).collect();
        assert_eq!(order, vec![5, 4, 6, 3, 2, 1]);
    }
}
