//! Transform-aware nearest-node hit testing.

use super::transform::FitTransform;
use super::types::{NodeId, Topology};

/// Find the node nearest to a canvas-space point, within `hit_radius`.
///
/// Every node is projected through the same transform the renderer used, so
/// hover coordinates always agree with painted positions. Among all nodes
/// inside the threshold the minimum-distance one wins; taking the first
/// match instead would depend on map iteration order whenever two hit
/// circles overlap.
pub fn node_at(
	x: f64,
	y: f64,
	topology: &Topology,
	transform: &FitTransform,
	hit_radius: f64,
) -> Option<NodeId> {
	let mut best: Option<(NodeId, f64)> = None;
	for (&id, node) in &topology.nodes {
		let (nx, ny) = transform.apply(node.pos[0], node.pos[1]);
		let (dx, dy) = (x - nx, y - ny);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < hit_radius && best.map_or(true, |(_, d)| dist < d) {
			best = Some((id, dist));
		}
	}
	best.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use super::*;
	use crate::components::city_map::types::CityNode;

	const HIT_RADIUS: f64 = 6.0;

	fn topology(points: &[(NodeId, f64, f64)]) -> Topology {
		Topology {
			nodes: points
				.iter()
				.map(|&(id, x, y)| (id, CityNode { pos: [x, y] }))
				.collect(),
			edges: Vec::new(),
		}
	}

	fn fit(topology: &Topology) -> FitTransform {
		FitTransform::fit(&topology.nodes, 100.0, 100.0, 10.0).unwrap()
	}

	#[test]
	fn exact_node_position_hits() {
		let topo = topology(&[(0, 0.0, 0.0), (1, 10.0, 0.0), (2, 0.0, 10.0)]);
		let t = fit(&topo);
		let (x, y) = t.apply(10.0, 0.0);
		assert_eq!(node_at(x, y, &topo, &t, HIT_RADIUS), Some(1));
	}

	#[test]
	fn far_point_misses_every_node() {
		let topo = topology(&[(0, 0.0, 0.0), (1, 10.0, 0.0)]);
		let t = fit(&topo);
		assert_eq!(node_at(50.0, 50.0, &topo, &t, HIT_RADIUS), None);
	}

	#[test]
	fn nearest_node_wins_when_hit_circles_overlap() {
		// Transformed positions land 8px apart, so a pointer between the two
		// nodes is inside both hit circles.
		let topo = topology(&[(0, 0.0, 0.0), (1, 1.0, 0.0), (2, 0.0, 10.0)]);
		let t = fit(&topo);
		let (ax, ay) = t.apply(0.0, 0.0);
		let (bx, _) = t.apply(1.0, 0.0);
		assert!((bx - ax) < 2.0 * HIT_RADIUS);

		// Closer to node 0.
		assert_eq!(node_at(ax + 3.0, ay, &topo, &t, HIT_RADIUS), Some(0));
		// Closer to node 1, which map order visits after node 0.
		assert_eq!(node_at(bx - 3.0, ay, &topo, &t, HIT_RADIUS), Some(1));
	}

	#[test]
	fn nearest_match_is_order_independent() {
		// Same geometry with the ids swapped: the low id is now the
		// rightmost node, so "first under threshold" and "nearest" disagree.
		let topo = topology(&[(1, 0.0, 0.0), (0, 1.0, 0.0), (2, 0.0, 10.0)]);
		let t = fit(&topo);
		let (ax, ay) = t.apply(0.0, 0.0);
		assert_eq!(node_at(ax + 3.0, ay, &topo, &t, HIT_RADIUS), Some(1));
	}

	#[test]
	fn empty_topology_never_hits() {
		let topo = topology(&[]);
		let nodes: BTreeMap<NodeId, CityNode> =
			[(0, CityNode { pos: [0.0, 0.0] })].into_iter().collect();
		let t = FitTransform::fit(&nodes, 100.0, 100.0, 10.0).unwrap();
		assert_eq!(node_at(10.0, 10.0, &topo, &t, HIT_RADIUS), None);
	}
}
