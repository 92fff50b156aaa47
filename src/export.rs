//! Harness graph interchange: the adjacency literal as JSON.
//!
//! ```text
//! { "-18,7,48": ["-7,5,20"], "-7,5,20": ["-3,5,-3", "-3,16,-3"], ... }
//! ```
//!
//! Node order in the output follows declaration order, and import keeps the
//! order of the document, so export → import reproduces the same graph.

use std::io::Write;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::model::PointKey;
use crate::topology::HarnessGraph;
use crate::Result;

/// Write `graph` as a pretty-printed JSON adjacency literal.
pub fn export_graph_json(graph: &HarnessGraph, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &Literal(graph))?;
    writeln!(writer)?;
    Ok(())
}

/// Parse a JSON adjacency literal. Keys and neighbors must be `"x,y,z"` strings.
pub fn import_graph_json(json: &str) -> Result<HarnessGraph> {
    let OwnedLiteral(graph) = serde_json::from_str(json)?;
    Ok(graph)
}

struct Literal<'a>(&'a HarnessGraph);

impl Serialize for Literal<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (node, neighbors) in self.0.iter() {
            map.serialize_entry(node, neighbors)?;
        }
        map.end()
    }
}

struct OwnedLiteral(HarnessGraph);

impl<'de> Deserialize<'de> for OwnedLiteral {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct LiteralVisitor;

        impl<'de> Visitor<'de> for LiteralVisitor {
            type Value = OwnedLiteral;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of \"x,y,z\" keys to neighbor key lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<OwnedLiteral, A::Error> {
                let mut graph = HarnessGraph::new();
                while let Some((node, neighbors)) = access.next_entry::<PointKey, Vec<PointKey>>()? {
                    graph.insert_node(node, neighbors);
                }
                Ok(OwnedLiteral(graph))
            }
        }

        deserializer.deserialize_map(LiteralVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::builtin::harness_graph;
    use crate::topology::Topology;
    use crate::Error;

    #[test]
    fn test_export_preserves_declaration_order() {
        let mut out = Vec::new();
        export_graph_json(&harness_graph(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let fin1 = text.find("\"-18,7,48\"").unwrap();
        let core = text.find("\"-2,7,15\":").unwrap();
        assert!(fin1 < core);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_import_reproduces_graph() {
        let mut out = Vec::new();
        export_graph_json(&harness_graph(), &mut out).unwrap();
        let back = import_graph_json(std::str::from_utf8(&out).unwrap()).unwrap();
        assert_eq!(back, harness_graph());
        assert_eq!(back.node_keys(), harness_graph().node_keys());
    }

    #[test]
    fn test_import_rejects_bad_key() {
        let err = import_graph_json(r#"{"1,2": []}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)), "got {err:?}");
        assert!(err.to_string().contains("1,2"));
    }

    #[test]
    fn test_import_rejects_non_map() {
        assert!(matches!(import_graph_json("[1, 2, 3]"), Err(Error::Json(_))));
    }
}
