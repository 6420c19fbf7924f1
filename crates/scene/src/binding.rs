//! Renderer contract and event dispatch.
//!
//! The external renderer stays a black box behind [`RenderTarget`]: it
//! enumerates named nodes and reads or writes node material colors. The
//! driver functions here resolve node names through the identity table
//! on every crossing, so unresolved geometry is left untouched and its
//! pointer events are discarded at this boundary, never reaching the
//! session.

use serde::{Deserialize, Serialize};

use dentition_core::Color;

use crate::identity;
use crate::session::SceneSession;

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

/// Scene access implemented by the external renderer.
pub trait RenderTarget {
    /// Names of every exposed mesh node.
    fn node_names(&self) -> Vec<String>;

    /// Current material color of a node, if the node exists and its
    /// material carries one.
    fn node_color(&self, name: &str) -> Option<Color>;

    /// Set a node's material color.
    fn set_node_color(&mut self, name: &str, color: Color);
}

/// A pointer interaction on a scene node, carrying the raw mesh name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Primary click on a mesh.
    Clicked { mesh: String },
    /// Pointer moved onto a mesh.
    Entered { mesh: String },
    /// Pointer left the previously hovered mesh.
    Left,
}

// ---------------------------------------------------------------------------
// Drivers
// ---------------------------------------------------------------------------

/// One-time capture of pristine material colors after asset load.
///
/// Resolves every node name; for each tooth node, records its current
/// color into the session's original-color index. Call before the chart
/// tints anything, so captured colors are the material defaults.
pub fn attach(target: &impl RenderTarget, session: &mut SceneSession) {
    let mut captured = 0usize;
    for name in target.node_names() {
        let Some(tooth) = identity::resolve(&name) else {
            continue;
        };
        if let Some(color) = target.node_color(&name) {
            session.capture_original(tooth, color);
            captured += 1;
        }
    }
    tracing::debug!(session_id = %session.id(), captured, "Captured original tooth colors");
}

/// Push the session's display colors into the renderer.
///
/// Tooth nodes take their computed display color; nodes that resolve to
/// no tooth, and teeth with no color to show, are left untouched.
pub fn sync_colors(target: &mut impl RenderTarget, session: &SceneSession) {
    for name in target.node_names() {
        let Some(tooth) = identity::resolve(&name) else {
            continue;
        };
        if let Some(color) = session.display_color(tooth) {
            target.set_node_color(&name, color);
        }
    }
}

/// Forward one pointer event into the session.
///
/// Click and enter events on unresolved geometry are dropped here; only
/// resolved teeth ever mutate selection or hover.
pub fn handle_pointer_event(session: &mut SceneSession, event: PointerEvent) {
    match event {
        PointerEvent::Clicked { mesh } => match identity::resolve(&mesh) {
            Some(tooth) => session.toggle_select(tooth),
            None => tracing::trace!(mesh = %mesh, "Discarded click on non-tooth geometry"),
        },
        PointerEvent::Entered { mesh } => match identity::resolve(&mesh) {
            Some(tooth) => session.set_hover(Some(tooth)),
            None => tracing::trace!(mesh = %mesh, "Discarded hover on non-tooth geometry"),
        },
        PointerEvent::Left => session.set_hover(None),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
