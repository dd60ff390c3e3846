//! Header-field extraction from specialist documents.
//!
//! Documents are plain markdown with optional `name:` and `description:`
//! header lines anywhere in the file; no strict frontmatter schema is
//! enforced. Missing fields fall back to the file stem and a fixed default
//! description, so extraction distinguishes "field absent" (fallback applied)
//! from "document unreadable" (no record at all).

use std::path::Path;

/// Description used when a document declares none or cannot be read.
pub const DEFAULT_DESCRIPTION: &str = "Specialist agent";

/// Descriptions longer than this are truncated to 97 chars plus `...`.
const MAX_DESCRIPTION_CHARS: usize = 100;

/// Metadata extracted from one specialist document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentMetadata {
    /// Declared `name:` value, or the extension-stripped filename.
    pub name: String,
    /// Declared `description:` value (truncated), or [`DEFAULT_DESCRIPTION`].
    pub description: String,
    /// Extension-stripped basename, independent of the declared name.
    pub filename: String,
}

/// Outcome of a metadata extraction attempt.
///
/// `Unreadable` means the file itself could not be read; absent header
/// fields are not an error and surface as fallback values inside
/// `Extracted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataOutcome {
    Extracted(AgentMetadata),
    Unreadable,
}

impl MetadataOutcome {
    pub fn extracted(self) -> Option<AgentMetadata> {
        match self {
            Self::Extracted(meta) => Some(meta),
            Self::Unreadable => None,
        }
    }
}

/// Extract `name:` / `description:` metadata from a document.
///
/// Never returns an error: a read failure logs a warning and yields
/// [`MetadataOutcome::Unreadable`].
pub fn extract_metadata(path: &Path) -> MetadataOutcome {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!("could not read agent metadata from {}: {err}", path.display());
            return MetadataOutcome::Unreadable;
        }
    };

    let filename = file_stem(path);
    let name = header_value(&content, "name").unwrap_or_else(|| filename.clone());
    let description = header_value(&content, "description")
        .map(truncate_description)
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    MetadataOutcome::Extracted(AgentMetadata {
        name,
        description,
        filename,
    })
}

/// Extension-stripped basename, `"unknown"` if the path has no file name.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// First `<key>: <value>` line in the document (case-sensitive key, value to
/// end of line, surrounding quotes stripped). Empty values count as absent.
fn header_value(content: &str, key: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let rest = line.strip_prefix(key)?.strip_prefix(':')?;
        let value = strip_quotes(rest.trim());
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    })
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn truncate_description(description: String) -> String {
    if description.chars().count() <= MAX_DESCRIPTION_CHARS {
        return description;
    }
    let mut truncated: String = description.chars().take(MAX_DESCRIPTION_CHARS - 3).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_doc(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn declared_fields_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(
            &dir,
            "reviewer.md",
            "---\nname: code-reviewer\ndescription: Reviews diffs for defects\n---\n# Body\n",
        );
        let meta = extract_metadata(&path).extracted().unwrap();
        assert_eq!(meta.name, "code-reviewer");
        assert_eq!(meta.description, "Reviews diffs for defects");
        assert_eq!(meta.filename, "reviewer");
    }

    #[test]
    fn surrounding_quotes_are_stripped() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(
            &dir,
            "quoted.md",
            "name: \"quoted-agent\"\ndescription: 'Does quoted things'\n",
        );
        let meta = extract_metadata(&path).extracted().unwrap();
        assert_eq!(meta.name, "quoted-agent");
        assert_eq!(meta.description, "Does quoted things");
    }

    #[test]
    fn missing_fields_fall_back() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "bare-agent.md", "# Just a body, no headers\n");
        let meta = extract_metadata(&path).extracted().unwrap();
        assert_eq!(meta.name, "bare-agent");
        assert_eq!(meta.description, DEFAULT_DESCRIPTION);
        assert_eq!(meta.filename, "bare-agent");
    }

    #[test]
    fn filename_is_independent_of_declared_name() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "on-disk.md", "name: declared\n");
        let meta = extract_metadata(&path).extracted().unwrap();
        assert_eq!(meta.name, "declared");
        assert_eq!(meta.filename, "on-disk");
    }

    #[test]
    fn first_match_wins() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "dup.md", "name: first\nname: second\n");
        let meta = extract_metadata(&path).extracted().unwrap();
        assert_eq!(meta.name, "first");
    }

    #[test]
    fn long_descriptions_truncate_to_97_plus_ellipsis() {
        let dir = TempDir::new().unwrap();
        let long = "x".repeat(150);
        let path = write_doc(&dir, "long.md", &format!("description: {long}\n"));
        let meta = extract_metadata(&path).extracted().unwrap();
        assert_eq!(meta.description.chars().count(), 100);
        assert!(meta.description.ends_with("..."));
        assert!(meta.description.starts_with("xxx"));
    }

    #[test]
    fn exactly_100_chars_is_kept_verbatim() {
        let dir = TempDir::new().unwrap();
        let exact = "y".repeat(100);
        let path = write_doc(&dir, "exact.md", &format!("description: {exact}\n"));
        let meta = extract_metadata(&path).extracted().unwrap();
        assert_eq!(meta.description, exact);
    }

    #[test]
    fn unreadable_file_yields_unreadable() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.md");
        assert_eq!(extract_metadata(&missing), MetadataOutcome::Unreadable);
        assert!(extract_metadata(&missing).extracted().is_none());
    }

    #[test]
    fn key_match_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "caps.md", "Name: shouty\nDescription: loud\n");
        let meta = extract_metadata(&path).extracted().unwrap();
        assert_eq!(meta.name, "caps");
        assert_eq!(meta.description, DEFAULT_DESCRIPTION);
    }
}
