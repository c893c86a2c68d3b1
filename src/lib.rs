//! city-map: interactive city/office topology viewer.
//!
//! This crate provides a WASM-based map component that renders a small
//! precomputed-layout graph on a canvas, scaled to fit the viewport, and
//! shows which employees are assigned to a node when it is hovered.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use log::{Level, error, info};

pub mod components;
pub mod loader;

pub use components::city_map::{CityMapCanvas, Employee, FitTransform, Roster, Selection, Topology};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("city-map: logging initialized");
}

/// Main application component.
///
/// Runs the startup load sequence (topology, then roster), then mounts the
/// map canvas wired to the info panel that displays hover details. A load
/// failure is logged and leaves the view unrendered; no partial graph is
/// drawn from incomplete data.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let (data, set_data) = signal::<Option<(Topology, Roster)>>(None);
	let (role, set_role) = signal("user".to_string());
	let (selection, set_selection) = signal(Selection::Cleared);

	spawn_local(async move {
		match loader::load_city_data().await {
			Ok(loaded) => set_data.set(Some(loaded)),
			Err(e) => error!("city-map: error loading data: {e}"),
		}
	});

	let topology = Signal::derive(move || data.get().map(|(t, _)| t).unwrap_or_default());
	let roster = Signal::derive(move || data.get().map(|(_, r)| r).unwrap_or_default());
	let on_select = Callback::new(move |sel| set_selection.set(sel));
	let switch_role = move |name: &'static str| {
		set_role.set(name.to_string());
		set_selection.set(Selection::Role(name.to_string()));
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="City Office Map" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="map-page">
			<Show
				when=move || data.with(Option::is_some)
				fallback=|| view! { <p class="map-loading">"Loading city data..."</p> }
			>
				<CityMapCanvas topology=topology roster=roster on_select=on_select fullscreen=true />
			</Show>
			<div class="map-overlay">
				<h1>"City Office Map"</h1>
				<p class="subtitle">{move || format!("Role: {}", role.get())}</p>
				<div class="role-switch">
					<button on:click=move |_| switch_role("user")>"User"</button>
					<button on:click=move |_| switch_role("admin")>"Admin"</button>
				</div>
				<InfoPanel selection />
			</div>
		</div>
	}
}

/// Presentation sink: renders the current [`Selection`] as the info panel.
#[component]
fn InfoPanel(selection: ReadSignal<Selection>) -> impl IntoView {
	view! {
		<div class="node-info">
			{move || match selection.get() {
				Selection::Role(role) => {
					view! { <p>{format!("Current role: {role}")}</p> }.into_any()
				}
				Selection::Node { id, employees } => {
					let detail = if employees.is_empty() {
						view! { <p>"No employees on this node."</p> }.into_any()
					} else {
						view! {
							<ul>
								{employees
									.into_iter()
									.map(|e| {
										view! {
											<li>{format!("{} (ID: {}, Team: {})", e.name, e.id, e.team)}</li>
										}
									})
									.collect_view()}
							</ul>
						}
						.into_any()
					};
					view! {
						<strong>{format!("Node {id}")}</strong>
						{detail}
					}
					.into_any()
				}
				Selection::Cleared => view! { <p>"Hover a node to see details"</p> }.into_any(),
			}}
		</div>
	}
}
