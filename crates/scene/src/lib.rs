//! Scene-side state for the dental visit chart.
//!
//! Three pieces sit between normalized clinical findings and the 3D
//! renderer:
//!
//! - [`identity`] -- the exact-match table mapping the fixed dentition
//!   asset's mesh names onto canonical tooth numbers.
//! - [`session`] -- per-view mutable state: the annotation index,
//!   selection, hover, and captured original colors, with the display
//!   color precedence rules.
//! - [`binding`] -- the contract the external renderer implements and the
//!   driver functions that move colors and pointer events across it.
//!
//! Everything here is synchronous and single-threaded; each mutation
//! happens in response to one discrete external event.

pub mod binding;
pub mod identity;
pub mod session;

pub use binding::{attach, handle_pointer_event, sync_colors, PointerEvent, RenderTarget};
pub use identity::{mesh_name, resolve};
pub use session::SceneSession;
