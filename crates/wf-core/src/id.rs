//! Interned element identifiers.
//!
//! Ids are plain strings on the wire (`node_12`, `edge_4`, or whatever an
//! imported document happens to carry). Internally each string is interned
//! once, so the per-batch id matching in the canvas binding compares
//! 4-byte keys instead of strings.

use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

static IDS: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Sequence numbers for generated ids, one lane per element kind so node
/// and edge ids read as independent series.
static NODE_SEQ: AtomicU64 = AtomicU64::new(1);
static EDGE_SEQ: AtomicU64 = AtomicU64::new(1);

/// An identifier for a node or edge. Immutable once assigned; compares and
/// hashes in O(1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(Spur);

impl ElementId {
    /// Intern an id string, returning the existing key if it was seen
    /// before (imports re-intern the same ids on every load).
    pub fn intern(s: &str) -> Self {
        ElementId(IDS.get_or_intern(s))
    }

    /// The wire representation.
    pub fn as_str(&self) -> &str {
        IDS.resolve(&self.0)
    }

    /// Next generated node id: `node_1`, `node_2`, ... Never repeats
    /// within a session; callers that mix in imported ids must still
    /// check the collection and skip taken ids.
    pub fn next_node() -> Self {
        Self::intern(&format!("node_{}", NODE_SEQ.fetch_add(1, Ordering::Relaxed)))
    }

    /// Next generated edge id: `edge_1`, `edge_2`, ...
    pub fn next_edge() -> Self {
        Self::intern(&format!("edge_{}", EDGE_SEQ.fetch_add(1, Ordering::Relaxed)))
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ElementId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ElementId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ElementId::intern(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn same_string_interns_to_same_id() {
        let a = ElementId::intern("node_welcome");
        let b = ElementId::intern("node_welcome");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "node_welcome");
        assert_ne!(a, ElementId::intern("edge_welcome"));
    }

    #[test]
    fn node_and_edge_sequences_are_independent() {
        let mut seen = HashSet::new();
        for _ in 0..8 {
            assert!(seen.insert(ElementId::next_node()));
            assert!(seen.insert(ElementId::next_edge()));
        }

        let node = ElementId::next_node();
        let edge = ElementId::next_edge();
        assert!(node.as_str().starts_with("node_"));
        assert!(edge.as_str().starts_with("edge_"));
    }

    #[test]
    fn ids_roundtrip_through_json() {
        let id = ElementId::intern("edge_9");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"edge_9\"");
        let back: ElementId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        // Imported documents may carry ids needing JSON escaping.
        let odd: ElementId = serde_json::from_str(r#""screen \"two\"""#).unwrap();
        assert_eq!(odd.as_str(), "screen \"two\"");
    }
}
