// tests/unit_graph_build.rs
//! Tests for edge aggregation and the graph model.

use mailrank_core::graph::builder::build_graph;
use mailrank_core::graph::{aggregate, DirectedEdge, EdgeAggregator, MailGraph};
use mailrank_core::identity::{AliasTable, IdentityResolver, PersonTable};

fn records() -> Vec<(&'static str, &'static str)> {
    vec![("A", "B"), ("A", "B"), ("B", "A")]
}

#[test]
fn test_duplicate_pairs_accumulate() {
    let resolver = IdentityResolver::passthrough();
    let edges = aggregate(&resolver, records());
    assert_eq!(
        edges,
        vec![DirectedEdge::new("a", "b", 2), DirectedEdge::new("b", "a", 1)]
    );
}

#[test]
fn test_total_weight_equals_record_count() {
    let resolver = IdentityResolver::passthrough();
    let input = vec![
        ("x@a.com", "y@b.com"),
        ("X", "Y"),
        ("y", "x"),
        ("z", "z"),
        ("", "x"),
        ("z", "z"),
    ];
    let edges = aggregate(&resolver, input.clone());
    let total: u64 = edges.iter().map(|e| e.weight).sum();
    assert_eq!(total, input.len() as u64);
}

#[test]
fn test_aliases_merge_edges() {
    let mut persons = PersonTable::new();
    persons.insert(7, "Jake Sullivan");
    let mut aliases = AliasTable::new();
    aliases.insert("sullivanjj", 7);
    aliases.insert("jake.sullivan", 7);
    let resolver = IdentityResolver::new(&aliases, &persons);

    let edges = aggregate(
        &resolver,
        [
            ("SullivanJJ@state.gov", "H"),
            ("jake.sullivan@gmail.com", "H"),
        ],
    );
    assert_eq!(edges, vec![DirectedEdge::new("Jake Sullivan", "h", 2)]);
}

#[test]
fn test_order_does_not_change_weights() {
    let resolver = IdentityResolver::passthrough();
    let mut forward = records();
    forward.push(("c", "a"));
    let mut backward = forward.clone();
    backward.reverse();
    assert_eq!(aggregate(&resolver, forward), aggregate(&resolver, backward));
}

#[test]
fn test_empty_records() {
    let resolver = IdentityResolver::passthrough();
    let edges = aggregate(&resolver, Vec::<(String, String)>::new());
    assert!(edges.is_empty());
    let graph = MailGraph::from_edges(edges);
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_incremental_aggregator() {
    let resolver = IdentityResolver::passthrough();
    let mut agg = EdgeAggregator::new(&resolver);
    agg.push("a", "b");
    agg.push("A", "b@x.org");
    agg.push("b", "b");
    assert_eq!(agg.record_count(), 3);
    let edges = agg.finish();
    assert_eq!(
        edges,
        vec![DirectedEdge::new("a", "b", 2), DirectedEdge::new("b", "b", 1)]
    );
}

#[test]
fn test_nodes_come_from_edge_endpoints() {
    let resolver = IdentityResolver::passthrough();
    let graph = build_graph(&resolver, [("a", "b"), ("b", "c"), ("c", "c")]);
    let ids: Vec<&str> = graph.nodes().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert!(graph.nodes().all(|(_, score)| score.is_none()));
    for (source, target, _) in graph.edges() {
        assert!(graph.contains(source) && graph.contains(target));
    }
}

#[test]
fn test_self_loop_is_kept() {
    let mut graph = MailGraph::new();
    graph.add_edge("a", "a", 5);
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_weight("a", "a"), Some(5));
    assert_eq!(graph.out_weight("a"), 5);
    assert_eq!(graph.in_weight("a"), 5);
    assert!(graph.edge_list()[0].is_self_loop());
}

#[test]
fn test_add_edge_is_additive_and_add_node_idempotent() {
    let mut graph = MailGraph::new();
    graph.add_edge("a", "b", 2);
    graph.add_edge("a", "b", 3);
    graph.add_node("a");
    graph.add_node("z");
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight("a", "b"), Some(5));
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_remove_node_drops_incident_edges() {
    let mut graph = MailGraph::new();
    graph.add_edge("a", "b", 1);
    graph.add_edge("b", "c", 1);
    graph.add_edge("c", "b", 4);
    graph.add_edge("b", "b", 2);

    assert!(graph.remove_node("b"));
    assert!(!graph.remove_node("b"));
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.out_weight("a"), 0);
    assert_eq!(graph.in_weight("c"), 0);
    assert!(graph.successors("c").is_empty());
}

#[test]
fn test_copy_is_independent() {
    let mut graph = MailGraph::new();
    graph.add_edge("a", "b", 1);
    let mut copy = graph.clone();
    copy.remove_node("a");
    assert!(graph.contains("a"));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(copy.edge_count(), 0);
}

#[test]
fn test_successors_and_predecessors() {
    let mut graph = MailGraph::new();
    graph.add_edge("a", "b", 1);
    graph.add_edge("c", "a", 1);
    graph.add_edge("a", "c", 1);
    graph.add_edge("a", "a", 1);
    assert_eq!(graph.successors("a"), vec!["a", "b", "c"]);
    assert_eq!(graph.predecessors("a"), vec!["a", "c"]);
    assert!(graph.successors("missing").is_empty());
}
