//! Tree fixtures shared by the unit tests.

use crate::node::{Node, NodeId, NodeKind};
use crate::style_hash::StyleSeed;

pub(crate) fn node(id: u64, path: &str, kind: NodeKind, size: u64) -> Node {
    Node {
        id: NodeId(id),
        path: path.to_string(),
        name: String::new(),
        kind,
        size,
        depth: path.matches('/').count() as u32,
        children: Vec::new(),
        is_git_repo: false,
    }
}

pub(crate) fn folder_with(id: u64, path: &str, children: Vec<Node>) -> Node {
    let size = children.iter().map(|child| child.size).sum();
    Node {
        children,
        ..node(id, path, NodeKind::Folder, size)
    }
}

/// First path under `prefix` whose seed satisfies `accept`.
pub(crate) fn path_with_seed(prefix: &str, accept: impl Fn(StyleSeed) -> bool) -> String {
    (0..100_000)
        .map(|i| format!("{prefix}/candidate-{i}"))
        .find(|path| accept(StyleSeed::from_key(path)))
        .expect("some candidate path satisfies the seed predicate")
}

/// A small project-like tree with a mix of kinds and sizes.
pub(crate) fn sample_project() -> Node {
    folder_with(
        1,
        "/work/project",
        vec![
            folder_with(
                2,
                "/work/project/src",
                vec![
                    node(3, "/work/project/src/main.rs", NodeKind::File, 4_200),
                    node(4, "/work/project/src/lib.rs", NodeKind::File, 12_000),
                ],
            ),
            node(5, "/work/project/target", NodeKind::Folder, 900_000_000),
            node(6, "/work/project/docs", NodeKind::Folder, 250_000),
            node(7, "/work/project/Cargo.toml", NodeKind::File, 800),
            node(8, "/work/project/README.md", NodeKind::File, 3_000),
            node(9, "/work/project/latest", NodeKind::Symlink, 0),
            node(10, "/work/project/assets", NodeKind::Folder, 40_000_000),
        ],
    )
}
