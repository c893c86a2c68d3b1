//! Topology and roster data structures for the city map.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Identifier of a topology node. Unique and stable across redraws.
pub type NodeId = u32;

/// A single node of the topology, positioned in data space.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct CityNode {
	/// Position in data space, `[x, y]`.
	pub pos: [f64; 2],
}

/// An edge between two topology nodes.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct CityEdge {
	/// First endpoint node id.
	pub u: NodeId,
	/// Second endpoint node id.
	pub v: NodeId,
}

/// Complete topology document: node map plus edge list.
///
/// Node ids arrive as JSON object keys ("0", "1", ...) and deserialize into
/// integer map keys. `BTreeMap` keeps iteration deterministic for rendering
/// order and tests.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Topology {
	/// All nodes, keyed by id.
	pub nodes: BTreeMap<NodeId, CityNode>,
	/// Edges in stacking order. Every endpoint must exist in `nodes`.
	pub edges: Vec<CityEdge>,
}

impl Topology {
	/// Edges whose endpoints are missing from the node map.
	///
	/// A well-formed document has none; the loader rejects topologies where
	/// this is non-empty.
	pub fn dangling_edges(&self) -> Vec<CityEdge> {
		self.edges
			.iter()
			.filter(|e| !self.nodes.contains_key(&e.u) || !self.nodes.contains_key(&e.v))
			.copied()
			.collect()
	}
}

/// One employee record from the roster document.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Employee {
	/// Employee id.
	pub id: u32,
	/// Display name.
	pub name: String,
	/// Team label.
	pub team: String,
	/// Node this employee is assigned to. May dangle; a dangling reference
	/// simply matches nothing on hover.
	pub node: NodeId,
}

/// Roster document: the highlighted office node plus all employee records.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Roster {
	/// The node drawn with the office highlight. Purely a style flag, not a
	/// structural property of the graph.
	pub office: NodeId,
	/// All employees.
	pub employees: Vec<Employee>,
}

/// Message delivered to the presentation sink on every interaction update.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
	/// The active role changed.
	Role(String),
	/// A node is hovered; carries every employee assigned to it.
	Node {
		/// The hovered node.
		id: NodeId,
		/// Employees assigned to the hovered node, possibly empty.
		employees: Vec<Employee>,
	},
	/// Nothing is hovered.
	Cleared,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn topology_parses_integer_node_keys() {
		let doc = r#"{
			"nodes": { "0": { "pos": [0.0, 0.0] }, "1": { "pos": [10.0, 0.0] } },
			"edges": [{ "u": 0, "v": 1 }]
		}"#;
		let topology: Topology = serde_json::from_str(doc).unwrap();
		assert_eq!(topology.nodes.len(), 2);
		assert_eq!(topology.nodes[&1].pos, [10.0, 0.0]);
		assert_eq!(topology.edges, vec![CityEdge { u: 0, v: 1 }]);
		assert!(topology.dangling_edges().is_empty());
	}

	#[test]
	fn dangling_edges_are_detected() {
		let doc = r#"{
			"nodes": { "0": { "pos": [0.0, 0.0] } },
			"edges": [{ "u": 0, "v": 7 }]
		}"#;
		let topology: Topology = serde_json::from_str(doc).unwrap();
		assert_eq!(topology.dangling_edges(), vec![CityEdge { u: 0, v: 7 }]);
	}

	#[test]
	fn roster_parses() {
		let doc = r#"{
			"office": 0,
			"employees": [{ "id": 1, "name": "A", "team": "X", "node": 0 }]
		}"#;
		let roster: Roster = serde_json::from_str(doc).unwrap();
		assert_eq!(roster.office, 0);
		assert_eq!(roster.employees.len(), 1);
		assert_eq!(roster.employees[0].node, 0);
	}
}
