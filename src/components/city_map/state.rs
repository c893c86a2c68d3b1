//! Loaded application state shared by rendering and hit testing.
//!
//! Replaces the original module-level globals with one owned struct:
//! constructed after a successful load, replaced wholesale on reload, and
//! read-only from the hover callback's perspective.

use super::hit;
use super::transform::FitTransform;
use super::types::{Employee, NodeId, Roster, Selection, Topology};

/// The topology/roster pair plus the current fit transform.
///
/// `refit` is the single place the transform is derived. The renderer and
/// the hit tester both read [`MapState::transform`], so painted positions
/// and hover coordinates can never desync within a draw cycle.
pub struct MapState {
	/// The loaded topology document.
	pub topology: Topology,
	/// The loaded roster document.
	pub roster: Roster,
	transform: Option<FitTransform>,
	/// Canvas pixel width at the latest refit.
	pub width: f64,
	/// Canvas pixel height at the latest refit.
	pub height: f64,
}

impl MapState {
	/// Wrap freshly loaded documents. No transform exists until the first
	/// [`MapState::refit`].
	pub fn new(topology: Topology, roster: Roster, width: f64, height: f64) -> Self {
		Self {
			topology,
			roster,
			transform: None,
			width,
			height,
		}
	}

	/// Recompute the shared transform for the current canvas size.
	///
	/// Called once per draw cycle (mount, resize, reload). The new transform
	/// replaces the old one atomically; there is no in-place mutation a
	/// concurrent hover callback could observe halfway.
	pub fn refit(&mut self, width: f64, height: f64, padding: f64) {
		self.width = width;
		self.height = height;
		self.transform = FitTransform::fit(&self.topology.nodes, width, height, padding);
	}

	/// Transform derived by the latest `refit`, absent while the node set is
	/// empty.
	pub fn transform(&self) -> Option<&FitTransform> {
		self.transform.as_ref()
	}

	/// All employees assigned to `node`. A dangling roster reference simply
	/// matches nothing.
	pub fn employees_at(&self, node: NodeId) -> Vec<Employee> {
		self.roster
			.employees
			.iter()
			.filter(|e| e.node == node)
			.cloned()
			.collect()
	}

	/// Hit-test a canvas-local point and build the sink message for it.
	pub fn selection_at(&self, x: f64, y: f64, hit_radius: f64) -> Selection {
		let Some(transform) = self.transform.as_ref() else {
			return Selection::Cleared;
		};
		match hit::node_at(x, y, &self.topology, transform, hit_radius) {
			Some(id) => Selection::Node {
				id,
				employees: self.employees_at(id),
			},
			None => Selection::Cleared,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::city_map::types::CityNode;

	fn reference_state() -> MapState {
		let topology = Topology {
			nodes: [
				(0, CityNode { pos: [0.0, 0.0] }),
				(1, CityNode { pos: [10.0, 0.0] }),
				(2, CityNode { pos: [0.0, 10.0] }),
			]
			.into_iter()
			.collect(),
			edges: Vec::new(),
		};
		let roster = Roster {
			office: 0,
			employees: vec![
				Employee {
					id: 1,
					name: "A".into(),
					team: "X".into(),
					node: 0,
				},
				Employee {
					id: 2,
					name: "B".into(),
					team: "Y".into(),
					node: 99, // dangling on purpose
				},
			],
		};
		let mut state = MapState::new(topology, roster, 100.0, 100.0);
		state.refit(100.0, 100.0, 10.0);
		state
	}

	#[test]
	fn hovering_a_node_lists_its_employees() {
		let state = reference_state();
		let (x, y) = state.transform().unwrap().apply(0.0, 0.0);
		let selection = state.selection_at(x, y, 6.0);
		match selection {
			Selection::Node { id, employees } => {
				assert_eq!(id, 0);
				assert_eq!(employees.len(), 1);
				assert_eq!(employees[0].name, "A");
			}
			other => panic!("expected node selection, got {other:?}"),
		}
	}

	#[test]
	fn hovering_far_from_any_node_clears() {
		let state = reference_state();
		assert_eq!(state.selection_at(50.0, 50.0, 6.0), Selection::Cleared);
	}

	#[test]
	fn node_without_employees_yields_empty_list() {
		let state = reference_state();
		let (x, y) = state.transform().unwrap().apply(10.0, 0.0);
		assert_eq!(
			state.selection_at(x, y, 6.0),
			Selection::Node {
				id: 1,
				employees: Vec::new()
			}
		);
	}

	#[test]
	fn dangling_employee_reference_matches_nothing() {
		let state = reference_state();
		assert_eq!(state.employees_at(99).len(), 1);
		// The dangling employee never shows up under a real node.
		for id in [0, 1, 2] {
			assert!(state.employees_at(id).iter().all(|e| e.id != 2));
		}
	}

	#[test]
	fn selection_without_transform_clears() {
		let state = MapState::new(Topology::default(), Roster::default(), 100.0, 100.0);
		assert_eq!(state.selection_at(10.0, 10.0, 6.0), Selection::Cleared);
	}
}
