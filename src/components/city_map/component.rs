//! Leptos component wrapping the city map canvas.
//!
//! The component creates an HTML canvas element, sizes its pixel buffer to
//! the layout box, derives the fit transform once, and paints the frame. The
//! same state (and therefore the same transform) backs the mousemove hit
//! tests, so hover lookups always agree with what is on screen. Resize and
//! data reload replace the state wholesale and repaint.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::MapState;
use super::theme::Theme;
use super::types::{Roster, Selection, Topology};

/// Bundles map state with the visual theme driving radii and colors.
struct MapContext {
	state: MapState,
	theme: Theme,
	width: Option<f64>,
	height: Option<f64>,
}

/// Canvas size for a draw cycle: explicit overrides win, the layout box is
/// the fallback.
fn resolve_size(
	width: Option<f64>,
	height: Option<f64>,
	client_width: f64,
	client_height: f64,
) -> (f64, f64) {
	(
		width.unwrap_or(client_width),
		height.unwrap_or(client_height),
	)
}

impl MapContext {
	/// Resize the pixel buffer, re-derive the transform, and repaint.
	///
	/// The single draw-cycle entry point: every path that changes canvas
	/// size or data funnels through here, so the renderer and the hit
	/// tester always see the transform derived for the current frame.
	fn redraw(&mut self, canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) {
		let (w, h) = resolve_size(
			self.width,
			self.height,
			canvas.client_width() as f64,
			canvas.client_height() as f64,
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		self.state.refit(w, h, self.theme.fit_padding);
		match self.state.transform() {
			Some(transform) => render::render(
				&self.state.topology,
				self.state.roster.office,
				transform,
				ctx,
				&self.theme,
				w,
				h,
			),
			None => warn!("city-map: nothing to draw, topology is empty"),
		}
	}
}

/// Renders the city/office topology on a canvas element.
///
/// Pass the loaded documents via the reactive `topology` and `roster`
/// signals; the component repaints whenever either changes. Hover results
/// are forwarded to `on_select` as [`Selection`] messages: `Node` with the
/// employees assigned there, or `Cleared` when no node is under the pointer.
/// The component sizes itself to its layout box by default; set
/// `fullscreen = true` to fill the viewport and track window resizes, or
/// pass explicit `width`/`height` to pin the pixel buffer.
#[component]
pub fn CityMapCanvas(
	#[prop(into)] topology: Signal<Topology>,
	#[prop(into)] roster: Signal<Roster>,
	#[prop(into)] on_select: Callback<Selection>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(default = Theme::default())] theme: Theme,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<MapContext>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, resize_cb_init) = (context.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		// Reading the signals here makes the effect re-run on reload; the
		// whole MapState is replaced, never patched in place.
		let mut map = MapContext {
			state: MapState::new(topology.get(), roster.get(), 0.0, 0.0),
			theme: theme.clone(),
			width,
			height,
		};
		map.redraw(&canvas, &ctx);
		*context_init.borrow_mut() = Some(map);

		if fullscreen && resize_cb_init.borrow().is_none() {
			let (context_resize, canvas_resize, ctx_resize) =
				(context_init.clone(), canvas.clone(), ctx.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.redraw(&canvas_resize, &ctx_resize);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	});

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref c) = *context_mm.borrow() {
			on_select.run(c.state.selection_at(x, y, c.theme.hit_radius));
		}
	};

	let on_mouseleave = move |_: MouseEvent| {
		on_select.run(Selection::Cleared);
	};

	let style = if fullscreen {
		"display: block; width: 100vw; height: 100vh;"
	} else if width.is_some() || height.is_some() {
		"display: block;"
	} else {
		"display: block; width: 100%; height: 100%;"
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="city-map-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style=style
		/>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn explicit_size_overrides_layout_box() {
		assert_eq!(resolve_size(Some(320.0), Some(240.0), 800.0, 600.0), (320.0, 240.0));
		// Either axis can be pinned on its own.
		assert_eq!(resolve_size(Some(320.0), None, 800.0, 600.0), (320.0, 600.0));
		assert_eq!(resolve_size(None, Some(240.0), 800.0, 600.0), (800.0, 240.0));
	}

	#[test]
	fn layout_box_is_the_default_size() {
		assert_eq!(resolve_size(None, None, 800.0, 600.0), (800.0, 600.0));
	}
}
