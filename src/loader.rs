//! Startup fetching of the topology and roster documents.
//!
//! Two sequential fetches: the city topology first, then the employee
//! roster. A failure at either step aborts initialization; the caller logs
//! the error and leaves the view unrendered instead of drawing a partial
//! graph.

use log::info;
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::components::city_map::{Roster, Topology};

/// Location of the topology document.
pub const TOPOLOGY_URL: &str = "data/city.json";
/// Location of the roster document.
pub const ROSTER_URL: &str = "data/employees.json";

/// Failure while fetching or decoding one of the startup documents.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The request never produced a response.
	#[error("request for {url} failed: {reason}")]
	Request {
		/// Requested URL.
		url: String,
		/// Browser-side failure description.
		reason: String,
	},
	/// The server answered with a non-success status.
	#[error("GET {url} returned HTTP {status}")]
	Status {
		/// Requested URL.
		url: String,
		/// HTTP status code.
		status: u16,
	},
	/// The response body was not valid JSON for the expected shape.
	#[error("could not parse {url}: {source}")]
	Parse {
		/// Requested URL.
		url: String,
		/// Underlying JSON error.
		source: serde_json::Error,
	},
	/// The topology references nodes that do not exist.
	#[error("topology has {count} edge(s) with missing endpoints")]
	DanglingEdges {
		/// Number of offending edges.
		count: usize,
	},
}

fn request_error(url: &str, detail: impl std::fmt::Debug) -> LoadError {
	LoadError::Request {
		url: url.to_string(),
		reason: format!("{detail:?}"),
	}
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, LoadError> {
	let opts = RequestInit::new();
	opts.set_method("GET");
	let request =
		Request::new_with_str_and_init(url, &opts).map_err(|e| request_error(url, e))?;

	let window = web_sys::window().ok_or_else(|| request_error(url, "no window"))?;
	let resp_value = JsFuture::from(window.fetch_with_request(&request))
		.await
		.map_err(|e| request_error(url, e))?;
	let resp: Response = resp_value
		.dyn_into()
		.map_err(|_| request_error(url, "response is not a Response"))?;

	if !resp.ok() {
		return Err(LoadError::Status {
			url: url.to_string(),
			status: resp.status(),
		});
	}

	let body = JsFuture::from(resp.text().map_err(|e| request_error(url, e))?)
		.await
		.map_err(|e| request_error(url, e))?;
	let body = body
		.as_string()
		.ok_or_else(|| request_error(url, "body is not a string"))?;

	serde_json::from_str(&body).map_err(|source| LoadError::Parse {
		url: url.to_string(),
		source,
	})
}

/// Fetch both startup documents, topology first.
///
/// The topology is validated before the roster fetch starts: an edge whose
/// endpoint is missing from the node map fails the whole load. Dangling
/// employee-to-node references are deliberately tolerated; they just never
/// match on hover.
pub async fn load_city_data() -> Result<(Topology, Roster), LoadError> {
	let topology: Topology = fetch_json(TOPOLOGY_URL).await?;
	let dangling = topology.dangling_edges();
	if !dangling.is_empty() {
		return Err(LoadError::DanglingEdges {
			count: dangling.len(),
		});
	}

	let roster: Roster = fetch_json(ROSTER_URL).await?;
	info!(
		"city-map: loaded {} nodes, {} edges, {} employees",
		topology.nodes.len(),
		topology.edges.len(),
		roster.employees.len()
	);
	Ok((topology, roster))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn load_errors_render_with_context() {
		let err = LoadError::Status {
			url: TOPOLOGY_URL.to_string(),
			status: 404,
		};
		assert_eq!(err.to_string(), "GET data/city.json returned HTTP 404");

		let err = LoadError::DanglingEdges { count: 2 };
		assert_eq!(err.to_string(), "topology has 2 edge(s) with missing endpoints");
	}
}
