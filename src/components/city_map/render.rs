//! Canvas rendering for the city map.
//!
//! Drawing runs in two passes for correct stacking: edges first, then nodes,
//! with the office highlight painted over its node. All positions go through
//! the shared [`FitTransform`], the same instance the hit tester queries.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::theme::Theme;
use super::transform::FitTransform;
use super::types::{NodeId, Topology};

/// Paints the full frame: background, edges, nodes, office highlight.
///
/// The caller has already sized the canvas pixel buffer to its layout box;
/// `width` and `height` are those pixel dimensions.
pub fn render(
	topology: &Topology,
	office: NodeId,
	transform: &FitTransform,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	width: f64,
	height: f64,
) {
	draw_background(ctx, theme, width, height);
	draw_edges(topology, transform, ctx, theme);
	draw_nodes(topology, office, transform, ctx, theme);
}

fn draw_background(ctx: &CanvasRenderingContext2d, theme: &Theme, width: f64, height: f64) {
	if theme.background.use_gradient {
		let gradient = ctx
			.create_radial_gradient(
				width / 2.0,
				height / 2.0,
				0.0,
				width / 2.0,
				height / 2.0,
				width.max(height) * 0.8,
			)
			.unwrap();

		gradient
			.add_color_stop(0.0, &theme.background.color_secondary.to_css())
			.unwrap();
		gradient
			.add_color_stop(1.0, &theme.background.color.to_css())
			.unwrap();

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&theme.background.color.to_css());
	}

	ctx.fill_rect(0.0, 0.0, width, height);
}

fn draw_edges(
	topology: &Topology,
	transform: &FitTransform,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
) {
	ctx.set_stroke_style_str(&theme.edge.color.to_css());
	ctx.set_line_width(theme.edge.line_width);

	for edge in &topology.edges {
		// The loader rejects dangling endpoints; skip rather than panic if
		// one slips through anyway.
		let (Some(u), Some(v)) = (topology.nodes.get(&edge.u), topology.nodes.get(&edge.v)) else {
			continue;
		};
		let (ux, uy) = transform.apply(u.pos[0], u.pos[1]);
		let (vx, vy) = transform.apply(v.pos[0], v.pos[1]);

		ctx.begin_path();
		ctx.move_to(ux, uy);
		ctx.line_to(vx, vy);
		ctx.stroke();
	}
}

fn draw_nodes(
	topology: &Topology,
	office: NodeId,
	transform: &FitTransform,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
) {
	for (&id, node) in &topology.nodes {
		let (x, y) = transform.apply(node.pos[0], node.pos[1]);
		draw_disc(ctx, theme, x, y, theme.node.radius);

		if id == office {
			// Highlight overlay, not a separate entity: a larger disc in the
			// office color on top of the regular node disc.
			ctx.begin_path();
			let _ = ctx.arc(x, y, theme.office.radius, 0.0, 2.0 * PI);
			ctx.set_fill_style_str(&theme.office.color.to_css());
			ctx.fill();
		}
	}
}

fn draw_disc(ctx: &CanvasRenderingContext2d, theme: &Theme, x: f64, y: f64, radius: f64) {
	if theme.node.use_gradient {
		let gradient = ctx
			.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius)
			.unwrap();

		let base = theme.node.color;
		gradient
			.add_color_stop(0.0, &base.lighten(0.4).to_css())
			.unwrap();
		gradient.add_color_stop(0.7, &base.to_css()).unwrap();
		gradient
			.add_color_stop(1.0, &base.darken(0.2).to_css())
			.unwrap();

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();
	} else {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&theme.node.color.to_css());
		ctx.fill();
	}
}
