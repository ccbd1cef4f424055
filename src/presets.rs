//! Named example sequences.
//!
//! A store starts with four built-in presets. User presets can be added,
//! overwritten and deleted; built-ins can be overwritten but never deleted.
//! Entries keep their insertion order, and overwriting an entry keeps its
//! place.

use serde::{Deserialize, Serialize};

use crate::error::{LisError, Result};

/// Built-in presets, in display order.
pub const BUILTIN_PRESETS: &[(&str, &[i64])] = &[
    ("Simple Ascending", &[1, 2, 3, 4, 5]),
    ("Mixed Sequence", &[5, 2, 8, 6, 3, 6, 9, 7]),
    ("Complex Pattern", &[10, 22, 9, 33, 21, 50, 41, 60, 80]),
    ("Repeated Numbers", &[3, 3, 3, 4, 4, 5, 5, 6]),
];

/// Name of the preset a fresh session starts from.
pub const DEFAULT_PRESET: &str = "Mixed Sequence";

/// A named sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub values: Vec<i64>,
    #[serde(skip)]
    builtin: bool,
}

impl Preset {
    pub fn new(name: impl Into<String>, values: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            values,
            builtin: false,
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.builtin
    }
}

/// Ordered collection of presets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleStore {
    presets: Vec<Preset>,
}

impl Default for ExampleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExampleStore {
    /// Store holding the built-in presets.
    pub fn new() -> Self {
        let presets = BUILTIN_PRESETS
            .iter()
            .map(|&(name, values)| Preset {
                name: name.to_string(),
                values: values.to_vec(),
                builtin: true,
            })
            .collect();
        Self { presets }
    }

    /// Built-ins followed by the presets in `json` (see [`merge_json`](Self::merge_json)).
    pub fn from_json(json: &str) -> Result<Self> {
        let mut store = Self::new();
        store.merge_json(json)?;
        Ok(store)
    }

    /// Save every preset from a JSON array of `{"name": .., "values": [..]}`
    /// objects. Returns how many were read. Nothing is saved if any entry is
    /// invalid.
    pub fn merge_json(&mut self, json: &str) -> Result<usize> {
        let incoming: Vec<Preset> = serde_json::from_str(json)?;
        if incoming.iter().any(|p| normalize(&p.name).is_empty()) {
            return Err(LisError::EmptyExampleName);
        }
        for preset in &incoming {
            self.save(&preset.name, &preset.values)?;
        }
        Ok(incoming.len())
    }

    /// Serialize the user-defined presets (built-ins are implied).
    pub fn to_json(&self) -> Result<String> {
        let user: Vec<&Preset> = self.presets.iter().filter(|p| !p.builtin).collect();
        Ok(serde_json::to_string_pretty(&user)?)
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        let name = normalize(name);
        self.presets.iter().find(|p| p.name == name)
    }

    /// Copy of the named preset's values. Surrounding whitespace in `name`
    /// is ignored, as in [`save`](Self::save).
    pub fn load(&self, name: &str) -> Result<Vec<i64>> {
        self.get(name)
            .map(|p| p.values.clone())
            .ok_or_else(|| LisError::UnknownExample(name.to_string()))
    }

    /// Insert or overwrite a preset. The name is trimmed and must not be
    /// empty.
    pub fn save(&mut self, name: &str, values: &[i64]) -> Result<()> {
        let name = normalize(name);
        if name.is_empty() {
            return Err(LisError::EmptyExampleName);
        }
        match self.presets.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.values = values.to_vec(),
            None => self.presets.push(Preset::new(name, values.to_vec())),
        }
        Ok(())
    }

    /// Remove a user preset.
    pub fn delete(&mut self, name: &str) -> Result<Preset> {
        let name = normalize(name);
        let idx = self
            .presets
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| LisError::UnknownExample(name.to_string()))?;
        if self.presets[idx].builtin {
            return Err(LisError::BuiltinExample(name.to_string()));
        }
        Ok(self.presets.remove(idx))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

/// Preset names are keyed without surrounding whitespace.
fn normalize(name: &str) -> &str {
    name.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_in_order() {
        let store = ExampleStore::new();
        let names: Vec<&str> = store.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Simple Ascending",
                "Mixed Sequence",
                "Complex Pattern",
                "Repeated Numbers"
            ]
        );
        assert!(store.iter().all(Preset::is_builtin));
        assert_eq!(store.load(DEFAULT_PRESET).unwrap(), vec![5, 2, 8, 6, 3, 6, 9, 7]);
    }

    #[test]
    fn save_trims_and_appends() {
        let mut store = ExampleStore::new();
        store.save("  Mine ", &[4, 1]).unwrap();
        assert_eq!(store.len(), 5);
        let mine = store.get("Mine").unwrap();
        assert_eq!(mine.values, vec![4, 1]);
        assert!(!mine.is_builtin());
    }

    #[test]
    fn lookups_ignore_surrounding_whitespace() {
        let mut store = ExampleStore::new();
        store.save("Mine ", &[2, 7]).unwrap();
        assert!(store.contains("Mine "));
        assert!(store.contains(" Mine"));
        assert_eq!(store.load("Mine ").unwrap(), vec![2, 7]);

        store.save(" Mine", &[3]).unwrap();
        assert_eq!(store.len(), 5);

        let removed = store.delete("Mine ").unwrap();
        assert_eq!(removed.name, "Mine");
        assert_eq!(removed.values, vec![3]);
        assert!(!store.contains("Mine"));
        assert!(matches!(
            store.delete(" Simple Ascending "),
            Err(LisError::BuiltinExample(_))
        ));
    }

    #[test]
    fn save_rejects_blank_names() {
        let mut store = ExampleStore::new();
        assert!(matches!(store.save("   ", &[1]), Err(LisError::EmptyExampleName)));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn overwrite_keeps_position_and_flag() {
        let mut store = ExampleStore::new();
        store.save("Mixed Sequence", &[1]).unwrap();
        let preset = store.iter().nth(1).unwrap();
        assert_eq!(preset.name, "Mixed Sequence");
        assert_eq!(preset.values, vec![1]);
        assert!(preset.is_builtin());
    }

    #[test]
    fn delete_user_preset_only() {
        let mut store = ExampleStore::new();
        store.save("Mine", &[2, 3]).unwrap();
        assert_eq!(store.delete("Mine").unwrap().values, vec![2, 3]);
        assert!(!store.contains("Mine"));

        assert!(matches!(
            store.delete("Simple Ascending"),
            Err(LisError::BuiltinExample(_))
        ));
        assert!(matches!(store.delete("Mine"), Err(LisError::UnknownExample(_))));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn json_round_trip_of_user_presets() {
        let mut store = ExampleStore::new();
        store.save("Zigzag", &[1, 9, 2, 8]).unwrap();
        let json = store.to_json().unwrap();
        assert!(!json.contains("Simple Ascending"));

        let restored = ExampleStore::from_json(&json).unwrap();
        assert_eq!(restored, store);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let mut store = ExampleStore::new();
        assert!(matches!(store.merge_json("{"), Err(LisError::Presets(_))));
        assert!(matches!(
            store.merge_json(r#"[{"name": "ok", "values": [1]}, {"name": " ", "values": []}]"#),
            Err(LisError::EmptyExampleName)
        ));
        assert_eq!(store.len(), 4);
    }
}
