use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Strength assigned to legacy entries that predate per-flavor strengths.
pub const DEFAULT_STRENGTH: u8 = 3;

/// A flavor tag reference with per-review strength (1-5).
///
/// Collections exported before strengths existed store flavor lists as
/// plain id strings. Deserialization accepts both shapes and normalizes
/// legacy strings to `{ id, strength: 3 }`, so every consumer downstream
/// of the storage boundary only ever sees the current shape.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlavorEntry {
    pub id: String,
    pub strength: u8,
}

impl FlavorEntry {
    pub fn new(id: impl Into<String>, strength: u8) -> Self {
        Self { id: id.into(), strength }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlavorEntryRepr {
    Current { id: String, strength: u8 },
    Legacy(String),
}

impl<'de> Deserialize<'de> for FlavorEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match FlavorEntryRepr::deserialize(deserializer)? {
            FlavorEntryRepr::Current { id, strength } => FlavorEntry { id, strength },
            FlavorEntryRepr::Legacy(id) => FlavorEntry { id, strength: DEFAULT_STRENGTH },
        })
    }
}

/// Per-category flavor lists. Within one list each tag id appears at most
/// once; the same tag may legitimately show up in several categories
/// (honey on both nose and palate).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FlavorSet {
    #[serde(default)]
    pub nose: Vec<FlavorEntry>,
    #[serde(default)]
    pub palate: Vec<FlavorEntry>,
    #[serde(default)]
    pub finish: Vec<FlavorEntry>,
}

impl FlavorSet {
    pub fn dedupe(&mut self) {
        dedupe_entries(&mut self.nose);
        dedupe_entries(&mut self.palate);
        dedupe_entries(&mut self.finish);
    }

    pub fn is_empty(&self) -> bool {
        self.nose.is_empty() && self.palate.is_empty() && self.finish.is_empty()
    }
}

/// Drops repeated tag ids, keeping the first occurrence (and with it the
/// earliest strength value seen).
pub fn dedupe_entries(entries: &mut Vec<FlavorEntry>) {
    let mut seen = HashSet::new();
    entries.retain(|entry| seen.insert(entry.id.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_strings_normalize_to_default_strength() {
        let entries: Vec<FlavorEntry> = serde_json::from_str(r#"["honey","oak"]"#).unwrap();
        assert_eq!(
            entries,
            vec![FlavorEntry::new("honey", 3), FlavorEntry::new("oak", 3)]
        );
    }

    #[test]
    fn test_current_shape_passes_through() {
        let entries: Vec<FlavorEntry> =
            serde_json::from_str(r#"[{"id":"peat_smoke","strength":5}]"#).unwrap();
        assert_eq!(entries, vec![FlavorEntry::new("peat_smoke", 5)]);
    }

    #[test]
    fn test_mixed_shapes_in_one_list() {
        let entries: Vec<FlavorEntry> =
            serde_json::from_str(r#"["honey",{"id":"oak","strength":1}]"#).unwrap();
        assert_eq!(
            entries,
            vec![FlavorEntry::new("honey", 3), FlavorEntry::new("oak", 1)]
        );
    }

    #[test]
    fn test_serializes_as_current_shape() {
        let json = serde_json::to_string(&FlavorEntry::new("honey", 4)).unwrap();
        assert_eq!(json, r#"{"id":"honey","strength":4}"#);
    }

    #[test]
    fn test_dedupe_keeps_earliest_strength() {
        let mut entries = vec![
            FlavorEntry::new("honey", 2),
            FlavorEntry::new("oak", 4),
            FlavorEntry::new("honey", 5),
        ];
        dedupe_entries(&mut entries);
        assert_eq!(
            entries,
            vec![FlavorEntry::new("honey", 2), FlavorEntry::new("oak", 4)]
        );
    }

    #[test]
    fn test_dedupe_is_per_category() {
        let mut set = FlavorSet {
            nose: vec![FlavorEntry::new("honey", 3), FlavorEntry::new("honey", 1)],
            palate: vec![FlavorEntry::new("honey", 5)],
            finish: vec![],
        };
        set.dedupe();
        assert_eq!(set.nose, vec![FlavorEntry::new("honey", 3)]);
        // duplicates across categories stay
        assert_eq!(set.palate, vec![FlavorEntry::new("honey", 5)]);
    }
}
