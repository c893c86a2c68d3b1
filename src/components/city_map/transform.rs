//! Fit-to-viewport transform from data space to canvas space.
//!
//! # Coordinate Spaces
//!
//! - **Data space**: raw node positions as given in the topology document.
//! - **Canvas space**: pixel coordinates of the rendering surface.
//!
//! The mapping is a uniform scale plus translation, chosen so the bounding
//! box of the node set fits inside the canvas with `padding` pixels to
//! spare on each side. Scaling is uniform (the smaller of the two per-axis
//! factors), so aspect ratio is preserved and shapes are never stretched.

use std::collections::BTreeMap;

use log::warn;

use super::types::{CityNode, NodeId};

/// Uniform scale-and-translate mapping from data space to canvas space.
///
/// Derived once per draw cycle from the full node set and the current canvas
/// size, then shared by the renderer and the hit tester. The value is
/// immutable; a resize or data reload replaces it wholesale, so the two
/// consumers can never observe different mappings within a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitTransform {
	scale: f64,
	min_x: f64,
	min_y: f64,
	padding: f64,
}

impl FitTransform {
	/// Derive the transform for `nodes` on a `width` x `height` canvas.
	///
	/// Returns `None` for an empty node set. A degenerate axis (every node
	/// sharing one coordinate) contributes no scale constraint; when both
	/// axes are degenerate the scale falls back to 1.0. A canvas smaller
	/// than `2 * padding` clamps the usable extent to zero rather than
	/// mirroring the graph with a negative scale. Either way the result is
	/// finite, never NaN.
	pub fn fit(
		nodes: &BTreeMap<NodeId, CityNode>,
		width: f64,
		height: f64,
		padding: f64,
	) -> Option<Self> {
		let mut positions = nodes.values().map(|n| n.pos);
		let [first_x, first_y] = positions.next()?;
		let (mut min_x, mut max_x) = (first_x, first_x);
		let (mut min_y, mut max_y) = (first_y, first_y);
		for [x, y] in positions {
			min_x = min_x.min(x);
			max_x = max_x.max(x);
			min_y = min_y.min(y);
			max_y = max_y.max(y);
		}

		let span_x = max_x - min_x;
		let span_y = max_y - min_y;
		let inner_width = (width - 2.0 * padding).max(0.0);
		let inner_height = (height - 2.0 * padding).max(0.0);
		let scale_x = (span_x > 0.0).then(|| inner_width / span_x);
		let scale_y = (span_y > 0.0).then(|| inner_height / span_y);

		let scale = match (scale_x, scale_y) {
			(Some(sx), Some(sy)) => sx.min(sy),
			(Some(sx), None) => sx,
			(None, Some(sy)) => sy,
			(None, None) => {
				warn!("city-map: degenerate layout (single distinct position), using unit scale");
				1.0
			}
		};

		Some(Self {
			scale,
			min_x,
			min_y,
			padding,
		})
	}

	/// Map a data-space point into canvas space.
	pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
		(
			(x - self.min_x) * self.scale + self.padding,
			(y - self.min_y) * self.scale + self.padding,
		)
	}

	/// The uniform scale factor.
	pub fn scale(&self) -> f64 {
		self.scale
	}
}
