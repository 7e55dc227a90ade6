//! Material and texture selection.
//!
//! Texture indices address slots in the renderer's texture array. Slots
//! `0..12` are project keywords, `12..24` known file extensions and
//! `24..32` hashed folder facades. Files with nothing recognisable stay
//! untextured.

use crate::node::Node;
use crate::style_hash::{StyleSeed, MATERIAL_SALT, TEXTURE_SALT};

pub const MATERIAL_PALETTE_SIZE: u32 = 8;
pub const UNTEXTURED: i32 = -1;
pub const FOLDER_TEXTURE_BASE: i32 = 24;
pub const FOLDER_TEXTURE_BUCKETS: u32 = 8;

/// Keywords matched at the start of a name token, checked in order. A
/// keyword must come before any shorter keyword that is its prefix.
const KEYWORD_TEXTURES: &[(&str, i32)] = &[
    ("node_modules", 0),
    (".git", 1),
    ("test", 2),
    ("docker", 9),
    ("doc", 3),
    ("src", 4),
    ("build", 5),
    ("target", 5),
    ("dist", 5),
    ("asset", 6),
    ("image", 6),
    ("config", 7),
    ("script", 8),
    ("cargo", 10),
    ("package", 10),
    ("vendor", 11),
    ("lib", 11),
];

const TOKEN_SEPARATORS: [char; 4] = ['.', '_', '-', ' '];

const EXTENSION_TEXTURES: &[(&[&str], i32)] = &[
    (&["rs"], 12),
    (&["py", "pyi"], 13),
    (&["js", "mjs", "jsx", "ts", "tsx"], 14),
    (&["c", "h", "cc", "cpp", "hpp"], 15),
    (&["go"], 16),
    (&["java", "kt", "scala"], 17),
    (&["md", "txt", "rst"], 18),
    (&["json", "toml", "yaml", "yml", "ini"], 19),
    (&["html", "css", "scss"], 20),
    (&["png", "jpg", "jpeg", "gif", "svg", "webp"], 21),
    (&["sh", "bash", "zsh", "ps1"], 22),
    (&["zip", "tar", "gz", "xz", "7z"], 23),
];

/// Palette bucket from the lowercased path (folders) or lowercased
/// extension (files and symlinks), so every `.rs` file shares a material.
pub fn material_index(node: &Node) -> u16 {
    let key = if node.kind.is_folder() {
        node.path.to_lowercase()
    } else {
        node.extension()
            .unwrap_or_else(|| node.display_name().to_lowercase())
    };
    StyleSeed::salted(&key, MATERIAL_SALT).draw(MATERIAL_PALETTE_SIZE) as u16
}

/// True when `keyword` occurs in `name` starting at a token boundary, so
/// `tests` and `test_parser` match `test` but `latest` does not.
fn matches_token_start(name: &str, keyword: &str) -> bool {
    name.match_indices(keyword)
        .any(|(at, _)| at == 0 || name[..at].ends_with(TOKEN_SEPARATORS))
}

pub fn keyword_texture(lower_name: &str) -> Option<i32> {
    KEYWORD_TEXTURES
        .iter()
        .find(|(keyword, _)| matches_token_start(lower_name, keyword))
        .map(|&(_, slot)| slot)
}

pub fn extension_texture(extension: &str) -> Option<i32> {
    EXTENSION_TEXTURES
        .iter()
        .find(|(extensions, _)| extensions.contains(&extension))
        .map(|&(_, slot)| slot)
}

pub fn texture_index(node: &Node) -> i32 {
    let lower_name = node.display_name().to_lowercase();
    if let Some(slot) = keyword_texture(&lower_name) {
        return slot;
    }
    if node.kind.is_folder() {
        let bucket = StyleSeed::salted(&node.path.to_lowercase(), TEXTURE_SALT)
            .draw(FOLDER_TEXTURE_BUCKETS);
        return FOLDER_TEXTURE_BASE + bucket as i32;
    }
    node.extension()
        .and_then(|ext| extension_texture(&ext))
        .unwrap_or(UNTEXTURED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use crate::testkit::node;

    #[test]
    fn keywords_win_over_extensions() {
        let file = node(1, "/p/tests/test_parser.py", NodeKind::File, 10);
        assert_eq!(texture_index(&file), 2);
        let manifest = node(2, "/p/Cargo.toml", NodeKind::File, 10);
        assert_eq!(texture_index(&manifest), 10);
    }

    #[test]
    fn keywords_match_whole_tokens_longest_first() {
        assert_eq!(keyword_texture("docker"), Some(9));
        assert_eq!(keyword_texture("dockerfile"), Some(9));
        assert_eq!(keyword_texture("docs"), Some(3));
        assert_eq!(keyword_texture("integration-tests"), Some(2));
        assert_eq!(keyword_texture("latest"), None);
        assert_eq!(keyword_texture("calibration.py"), None);

        let latest = node(1, "/p/latest", NodeKind::Folder, 10);
        assert!(texture_index(&latest) >= FOLDER_TEXTURE_BASE);
        let dockerfile = node(2, "/p/Dockerfile", NodeKind::File, 10);
        assert_eq!(texture_index(&dockerfile), 9);
        let script = node(3, "/p/calibration.py", NodeKind::File, 10);
        assert_eq!(texture_index(&script), 13);
    }

    #[test]
    fn no_keyword_is_shadowed_by_an_earlier_prefix() {
        for (later, (keyword, _)) in KEYWORD_TEXTURES.iter().enumerate() {
            for (earlier, _) in &KEYWORD_TEXTURES[..later] {
                assert!(!keyword.starts_with(earlier), "{earlier} shadows {keyword}");
            }
        }
    }

    #[test]
    fn files_fall_back_to_extension_then_untextured() {
        let source = node(1, "/p/main.RS", NodeKind::File, 10);
        assert_eq!(texture_index(&source), 12);
        let unknown = node(2, "/p/blob.xyz", NodeKind::File, 10);
        assert_eq!(texture_index(&unknown), UNTEXTURED);
        let bare = node(3, "/p/Makefile", NodeKind::File, 10);
        assert_eq!(texture_index(&bare), UNTEXTURED);
    }

    #[test]
    fn unmatched_folders_hash_into_reserved_range() {
        for name in ["alpha", "beta", "gamma", "photos", "music"] {
            let folder = node(1, &format!("/home/{name}"), NodeKind::Folder, 10);
            let slot = texture_index(&folder);
            assert!(
                (FOLDER_TEXTURE_BASE..FOLDER_TEXTURE_BASE + FOLDER_TEXTURE_BUCKETS as i32)
                    .contains(&slot),
                "{name} -> {slot}"
            );
        }
    }

    #[test]
    fn folder_texture_ignores_path_case() {
        let lower = node(1, "/home/photos", NodeKind::Folder, 10);
        let upper = node(2, "/HOME/Photos", NodeKind::Folder, 10);
        assert_eq!(texture_index(&lower), texture_index(&upper));
        assert_eq!(material_index(&lower), material_index(&upper));
    }

    #[test]
    fn files_with_same_extension_share_material() {
        let a = node(1, "/x/a.rs", NodeKind::File, 10);
        let b = node(2, "/y/z/B.RS", NodeKind::File, 99);
        assert_eq!(material_index(&a), material_index(&b));
        assert!(u32::from(material_index(&a)) < MATERIAL_PALETTE_SIZE);
    }
}
