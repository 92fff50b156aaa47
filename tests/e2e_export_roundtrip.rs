//! Export round-trip: harness graph -> JSON literal -> harness graph -> route.

use harness_locator::export::{export_graph_json, import_graph_json};
use harness_locator::topology::builtin;
use harness_locator::{find_shortest_path, AccessNode, Error, HarnessGraph, Point3, Topology};
use pretty_assertions::assert_eq;

#[test]
fn test_round_trip_routes_identically() {
    let graph = builtin::harness_graph();
    let mut dump = Vec::new();
    export_graph_json(&graph, &mut dump).unwrap();
    let restored = import_graph_json(std::str::from_utf8(&dump).unwrap()).unwrap();

    let target = Point3::new(-2.0, 7.0, 15.0);
    for fin in AccessNode::ALL {
        assert_eq!(
            find_shortest_path(fin.position(), target, &restored),
            find_shortest_path(fin.position(), target, &graph),
        );
    }
}

#[test]
fn test_hand_written_literal() {
    let literal = r#"{
        "-18,7,48": ["-7,5,20"],
        "-7,5,20": ["-3,16,-3", "0,0,0"],
        "-3,16,-3": []
    }"#;
    let graph = import_graph_json(literal).unwrap();
    assert_eq!(graph.node_count(), 3);
    // "0,0,0" is kept as written but never becomes a node.
    assert_eq!(graph.dangling_neighbors().len(), 1);

    let route = find_shortest_path(AccessNode::Fin1.position(), Point3::new(-3.0, 16.0, -3.0), &graph);
    assert_eq!(route.hops(), 2);
}

#[test]
fn test_dump_of_empty_graph() {
    let mut dump = Vec::new();
    export_graph_json(&HarnessGraph::new(), &mut dump).unwrap();
    assert_eq!(String::from_utf8(dump).unwrap(), "{}\n");
}

#[test]
fn test_malformed_literal() {
    assert!(matches!(import_graph_json(r#"{"a,b,c": []}"#), Err(Error::Json(_))));
    assert!(matches!(import_graph_json(r#"{"1,2,3": "4,5,6"}"#), Err(Error::Json(_))));
}
