//! Source scanning: find component classes and their reactive properties.
//!
//! Two declaration styles are harvested, matching what component libraries
//! actually ship: decorator-annotated fields (`@property({...}) name`) and
//! `static properties = {...}` tables (including the getter form). Matching
//! is regex-based over raw source text, good enough for metadata harvesting,
//! with a small brace-balancing pass for the nested property tables that
//! regexes alone cannot delimit.

#[cfg(test)]
#[path = "scan_test.rs"]
mod scan_test;

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Serialize;
use walkdir::WalkDir;

/// Source extensions worth scanning.
const SOURCE_EXTENSIONS: [&str; 3] = ["js", "mjs", "ts"];

/// Errors fatal to a harvest invocation.
#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    /// The library directory could not be walked.
    #[error("cannot walk library directory: {0}")]
    Walk(#[from] walkdir::Error),
    /// One source file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// The unreadable file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The output file could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        /// The unwritable output path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// A scanner pattern failed to compile.
    #[error("invalid scanner pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// The property table could not be encoded as JSON.
    #[error("cannot encode property table: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One harvested class and its reactive property names, sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassProps {
    /// Declared class name.
    #[serde(rename = "className")]
    pub class_name: String,
    /// Property names, deduplicated and sorted.
    pub properties: Vec<String>,
}

/// Compiled patterns for one harvest run.
pub struct Scanner {
    class_re: Regex,
    decorator_re: Regex,
    static_props_re: Regex,
    key_re: Regex,
}

impl Scanner {
    /// Compile the scanner patterns.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::Pattern`] if a pattern fails to compile.
    pub fn new() -> Result<Self, HarvestError> {
        Ok(Self {
            class_re: Regex::new(
                r"(?m)^[ \t]*(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\s+([A-Za-z_$][A-Za-z0-9_$]*)",
            )?,
            decorator_re: Regex::new(
                r"@property\s*\((?:[^()]|\([^()]*\))*\)\s*(?:accessor\s+)?(?:declare\s+)?(?:readonly\s+)?(?:public\s+|private\s+|protected\s+)?([A-Za-z_$][A-Za-z0-9_$]*)",
            )?,
            static_props_re: Regex::new(
                r"static\s+(?:get\s+)?properties\s*(?:=|\(\s*\)\s*\{[^{]*return)\s*\{",
            )?,
            key_re: Regex::new(r"([A-Za-z_$][A-Za-z0-9_$]*)\s*:")?,
        })
    }

    /// Walk the library source tree and harvest every class found.
    ///
    /// Classes declared across multiple files are merged by name.
    ///
    /// # Errors
    ///
    /// Any unreadable entry or file fails the whole run.
    pub fn scan_library(&self, dir: &Path) -> Result<Vec<ClassProps>, HarvestError> {
        let mut merged: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for entry in WalkDir::new(dir) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_source = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext));
            if !is_source {
                continue;
            }
            let source = fs::read_to_string(entry.path()).map_err(|source| {
                HarvestError::Read { path: entry.path().to_path_buf(), source }
            })?;
            for class in self.extract(&source) {
                merged.entry(class.class_name).or_default().extend(class.properties);
            }
        }
        Ok(merged
            .into_iter()
            .map(|(class_name, properties)| ClassProps {
                class_name,
                properties: properties.into_iter().collect(),
            })
            .collect())
    }

    /// Extract every class declared in one source text, with the reactive
    /// properties found in its body. Classes without properties are kept;
    /// the lookup table records their existence.
    #[must_use]
    pub fn extract(&self, source: &str) -> Vec<ClassProps> {
        let declarations: Vec<(String, usize)> = self
            .class_re
            .captures_iter(source)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some((caps[1].to_owned(), whole.start()))
            })
            .collect();

        declarations
            .iter()
            .enumerate()
            .map(|(index, (name, start))| {
                let end = declarations
                    .get(index + 1)
                    .map_or(source.len(), |(_, next_start)| *next_start);
                let body = &source[*start..end];
                ClassProps { class_name: name.clone(), properties: self.class_properties(body) }
            })
            .collect()
    }

    fn class_properties(&self, body: &str) -> Vec<String> {
        let mut names: BTreeSet<String> = self
            .decorator_re
            .captures_iter(body)
            .map(|caps| caps[1].to_owned())
            .collect();

        if let Some(found) = self.static_props_re.find(body) {
            // The pattern ends on the opening brace of the table.
            if let Some(block) = balanced_block(body, found.end() - 1) {
                names.extend(top_level_keys(block, &self.key_re));
            }
        }

        names.into_iter().collect()
    }
}

/// The content between the `{` at byte index `open` and its matching `}`.
/// Returns `None` when the braces never balance (truncated source).
fn balanced_block(source: &str, open: usize) -> Option<&str> {
    let mut depth = 0usize;
    for (idx, &byte) in source.as_bytes().iter().enumerate().skip(open) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&source[open + 1..idx]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Keys declared at the top level of a property-table block. Nested values
/// (`{...}`, `[...]`, calls) and string literals are blanked out first so a
/// colon inside them cannot fake a key.
fn top_level_keys(block: &str, key_re: &Regex) -> Vec<String> {
    let mut flat = String::with_capacity(block.len());
    let mut depth = 0usize;
    let mut string_delim: Option<char> = None;
    for ch in block.chars() {
        if let Some(delim) = string_delim {
            if ch == delim {
                string_delim = None;
            }
            flat.push(' ');
            continue;
        }
        match ch {
            '\'' | '"' | '`' => {
                string_delim = Some(ch);
                flat.push(' ');
            }
            '{' | '[' | '(' => {
                depth += 1;
                flat.push(' ');
            }
            '}' | ']' | ')' => {
                depth = depth.saturating_sub(1);
                flat.push(' ');
            }
            _ if depth > 0 => flat.push(' '),
            _ => flat.push(ch),
        }
    }
    key_re.captures_iter(&flat).map(|caps| caps[1].to_owned()).collect()
}
