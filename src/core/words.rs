//! Purpose: In-memory word collections built from the source dictionary.
//! Exports: `SourceDictionary`, `WordList`, `WordSet`.
//! Role: Pure filtering/transform stage between decode and persist.
//! Invariants: Source key order is preserved end to end; a repeated key keeps its first slot.
//! Invariants: Word length is counted in chars, never bytes.
//! Invariants: `WordSet` keys are exactly the `WordList` entries; each serializes to `1`.
use std::cell::OnceCell;
use std::collections::HashSet;
use std::fmt;

use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Keys of the remote word dictionary, in document order. Values are skipped.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SourceDictionary {
    words: Vec<String>,
}

impl SourceDictionary {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'de> Deserialize<'de> for SourceDictionary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SourceDictionaryVisitor)
    }
}

struct SourceDictionaryVisitor;

impl<'de> Visitor<'de> for SourceDictionaryVisitor {
    type Value = SourceDictionary;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object keyed by word")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut seen = HashSet::new();
        let mut words = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((word, IgnoredAny)) = map.next_entry::<String, IgnoredAny>()? {
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }
        Ok(SourceDictionary { words })
    }
}

/// Words of exactly one length, in source order. Serializes as a JSON array.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn from_source(source: &SourceDictionary, word_length: usize) -> Self {
        let words = source
            .words()
            .iter()
            .filter(|word| word.chars().count() == word_length)
            .cloned()
            .collect();
        Self { words }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Serialize for WordList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.words.serialize(serializer)
    }
}

/// Membership view over a `WordList`.
///
/// Downstream consumers only check for key presence, so this serializes as an
/// object mapping every word to `1` rather than as an array. The hash index
/// behind `contains` is built on first lookup; serializing never builds it.
#[derive(Clone, Debug)]
pub struct WordSet<'a> {
    list: &'a WordList,
    members: OnceCell<HashSet<&'a str>>,
}

impl<'a> WordSet<'a> {
    pub fn from_list(list: &'a WordList) -> Self {
        Self {
            list,
            members: OnceCell::new(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.members
            .get_or_init(|| self.list.as_slice().iter().map(String::as_str).collect())
            .contains(word)
    }

    // List entries are unique (source keys are de-duplicated on decode).
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Serialize for WordSet<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.list.len()))?;
        for word in self.list.as_slice() {
            map.serialize_entry(word, &1u8)?;
        }
        map.end()
    }
}
