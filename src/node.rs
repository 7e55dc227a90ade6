use serde::{Deserialize, Serialize};

/// Stable identity assigned by the scanner that produced the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Folder,
    File,
    Symlink,
}

impl NodeKind {
    /// Position in the sibling sort order: folders, then files, then symlinks.
    pub fn sort_rank(self) -> u8 {
        match self {
            NodeKind::Folder => 0,
            NodeKind::File => 1,
            NodeKind::Symlink => 2,
        }
    }

    pub fn is_folder(self) -> bool {
        matches!(self, NodeKind::Folder)
    }
}

/// One entry of the scanned file tree. Read-only to the layout engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub path: String,
    #[serde(default)]
    pub name: String,
    pub kind: NodeKind,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default)]
    pub is_git_repo: bool,
}

impl Node {
    /// Name used for keyword and extension matching. Falls back to the last
    /// path component when the scanner left `name` empty.
    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            return &self.name;
        }
        self.path
            .trim_end_matches(['/', '\\'])
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.path)
    }

    /// Lowercased extension without the dot, if the name has one.
    /// Dotfiles such as `.gitignore` have no extension.
    pub fn extension(&self) -> Option<String> {
        let name = self.display_name();
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, name: &str) -> Node {
        Node {
            id: NodeId(1),
            path: path.to_string(),
            name: name.to_string(),
            kind: NodeKind::File,
            size: 0,
            depth: 1,
            children: Vec::new(),
            is_git_repo: false,
        }
    }

    #[test]
    fn display_name_falls_back_to_last_path_component() {
        assert_eq!(file("/a/b/main.rs", "").display_name(), "main.rs");
        assert_eq!(file("/a/b/dir/", "").display_name(), "dir");
        assert_eq!(file("C:\\code\\lib.rs", "").display_name(), "lib.rs");
        assert_eq!(file("/a/b/x", "given").display_name(), "given");
    }

    #[test]
    fn extension_is_lowercased_and_skips_dotfiles() {
        assert_eq!(file("/a/README.MD", "").extension().as_deref(), Some("md"));
        assert_eq!(file("/a/.gitignore", "").extension(), None);
        assert_eq!(file("/a/Makefile", "").extension(), None);
        assert_eq!(file("/a/archive.tar.gz", "").extension().as_deref(), Some("gz"));
    }

    #[test]
    fn tree_deserializes_with_defaults() {
        let json = r#"{
            "id": 1, "path": "/p", "kind": "folder",
            "children": [{ "id": 2, "path": "/p/a.rs", "kind": "file", "size": 10 }]
        }"#;
        let node: Node = serde_json::from_str(json).expect("tree json parses");
        assert_eq!(node.node_count(), 2);
        assert_eq!(node.children[0].kind, NodeKind::File);
        assert_eq!(node.children[0].size, 10);
        assert!(!node.is_git_repo);
    }
}
