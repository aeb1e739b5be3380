//! Read-only knowledge base store
//!
//! Entries keep their load order. Positions (`by_index`) are what the
//! similarity index reports back; ids are what callers see.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use super::builtin;
use super::types::KnowledgeEntry;
use crate::error::{AdvisorError, Result};

/// TOML datasets wrap the list in an `[[entries]]` table
#[derive(Debug, Deserialize)]
struct TomlDataset {
    entries: Vec<KnowledgeEntry>,
}

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    positions: HashMap<u64, usize>,
}

impl KnowledgeBase {
    /// Build a store from entries, rejecting duplicate ids
    pub fn new(entries: Vec<KnowledgeEntry>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if positions.insert(entry.id, pos).is_some() {
                return Err(AdvisorError::InvalidKnowledge(format!(
                    "duplicate entry id {}",
                    entry.id
                )));
            }
        }
        Ok(Self { entries, positions })
    }

    /// The built-in agricultural dataset
    pub fn builtin() -> Self {
        let entries = builtin::default_entries();
        let positions = entries
            .iter()
            .enumerate()
            .map(|(pos, e)| (e.id, pos))
            .collect();
        Self { entries, positions }
    }

    /// Load from a `.json` (array of entries) or `.toml` (`[[entries]]`) file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let entries = read_entries(path)
            .map_err(|e| AdvisorError::InvalidKnowledge(format!("{:#}", e)))?;
        let kb = Self::new(entries)?;
        tracing::info!(path = %path.display(), entries = kb.len(), "Loaded knowledge base");
        Ok(kb)
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn by_index(&self, index: usize) -> Result<&KnowledgeEntry> {
        self.entries.get(index).ok_or(AdvisorError::OutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    pub fn by_id(&self, id: u64) -> Option<&KnowledgeEntry> {
        self.positions.get(&id).map(|&pos| &self.entries[pos])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn read_entries(path: &Path) -> anyhow::Result<Vec<KnowledgeEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read knowledge file: {:?}", path))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => {
            let dataset: TomlDataset =
                toml::from_str(&content).context("Failed to parse knowledge TOML")?;
            Ok(dataset.entries)
        }
        Some("json") => serde_json::from_str(&content).context("Failed to parse knowledge JSON"),
        other => anyhow::bail!("Unsupported knowledge file extension: {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_dataset() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.len(), 15);
        assert_eq!(kb.by_index(0).unwrap().id, 1);
        assert_eq!(kb.by_id(5).unwrap().recommendations[0].name, "Neem Oil");
    }

    #[test]
    fn test_by_index_out_of_range() {
        let kb = KnowledgeBase::new(vec![KnowledgeEntry::new(7, "q", "a")]).unwrap();
        match kb.by_index(1) {
            Err(AdvisorError::OutOfRange { index, len }) => {
                assert_eq!(index, 1);
                assert_eq!(len, 1);
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = KnowledgeBase::new(vec![
            KnowledgeEntry::new(1, "a", "b"),
            KnowledgeEntry::new(1, "c", "d"),
        ]);
        assert!(matches!(result, Err(AdvisorError::InvalidKnowledge(_))));
    }

    #[test]
    fn test_load_json() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(
            file,
            r#"[
                {{"id": 3, "question": "Why is my soil dry?", "answer": "Add mulch."}},
                {{"id": 9, "question": "Best pesticide?", "answer": "Neem oil.",
                  "recommendations": [{{"name": "Neem Oil", "location": "Co-op", "price": "₹150"}}]}}
            ]"#
        )
        .unwrap();

        let kb = KnowledgeBase::load(file.path()).unwrap();
        assert_eq!(kb.len(), 2);
        assert!(kb.by_id(3).unwrap().recommendations.is_empty());
        assert_eq!(kb.by_index(1).unwrap().recommendations.len(), 1);
    }

    #[test]
    fn test_load_toml() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        write!(
            file,
            r#"
[[entries]]
id = 1
question = "When to sow wheat?"
answer = "Sow in November."

[[entries]]
id = 2
question = "When to sow rice?"
answer = "Sow with the monsoon."
"#
        )
        .unwrap();

        let kb = KnowledgeBase::load(file.path()).unwrap();
        assert_eq!(kb.entries()[1].answer, "Sow with the monsoon.");
    }

    #[test]
    fn test_load_unknown_extension() {
        let file = NamedTempFile::with_suffix(".csv").unwrap();
        assert!(matches!(
            KnowledgeBase::load(file.path()),
            Err(AdvisorError::InvalidKnowledge(_))
        ));
    }
}
