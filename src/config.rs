//! Menu configuration loading
//!
//! Menu trees ship as TOML supplied by the host application at startup;
//! changing one requires a reload. Unknown keys are surfaced as warnings
//! with a "did you mean" suggestion instead of being silently dropped.
//!
//! ```toml
//! [[item]]
//! key = "sub1"
//! label = "Hiring"
//! access = [2]
//!
//! [[item.children]]
//! key = "6"
//! label = "CV pool"
//! to = "/hiring-cv-pool"
//! access = [2]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{NavError, NavResult};
use crate::models::{MenuNode, MenuTree};

#[derive(Deserialize)]
struct MenuFile {
    #[serde(default)]
    item: Vec<MenuNode>,
}

/// Non-fatal menu configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load a menu tree and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> NavResult<(MenuTree, Vec<MenuWarning>)> {
    if !path.exists() {
        return Err(NavError::MenuNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let menu: MenuFile = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| NavError::InvalidMenu {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            MenuWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    let tree = MenuTree::new(menu.item)?;
    Ok((tree, warnings))
}

/// Load a menu tree, discarding warnings
pub fn load(path: &Path) -> NavResult<MenuTree> {
    load_with_warnings(path).map(|(tree, _)| tree)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["item", "key", "label", "to", "access", "children"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
