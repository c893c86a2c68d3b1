//! City/office topology map component.
//!
//! Renders a small precomputed-layout graph on an HTML canvas with:
//! - A fit-to-viewport transform derived from the node bounding box
//! - Edge and node rendering plus an office highlight overlay
//! - Transform-aware nearest-node hover hit testing
//! - Employee lookup forwarded to a presentation sink
//!
//! # Example
//!
//! ```ignore
//! use city_map::{CityMapCanvas, Selection};
//!
//! let on_select = Callback::new(|sel: Selection| { /* update info panel */ });
//!
//! view! {
//!     <CityMapCanvas topology=topology roster=roster on_select=on_select fullscreen=true />
//! }
//! ```

mod component;
mod hit;
mod render;
mod state;
pub mod theme;
mod transform;
mod types;

pub use component::CityMapCanvas;
pub use state::MapState;
pub use theme::Theme;
pub use transform::FitTransform;
pub use types::{CityEdge, CityNode, Employee, NodeId, Roster, Selection, Topology};
