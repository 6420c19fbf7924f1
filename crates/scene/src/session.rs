//! Per-view chart state.
//!
//! [`SceneSession`] owns everything mutable about one open chart view:
//! the clinical annotation index, the selection set, the hover scalar,
//! and the captured original material colors. All of it is keyed by
//! [`ToothId`] in session-owned maps -- nothing is ever attached to the
//! render graph, so nodes can be reused across views and two sessions
//! over the same asset never interfere.
//!
//! Display color precedence is the one rule the renderer relies on:
//! annotation color beats selection beats hover beats the captured
//! original. An annotated tooth keeps its clinical color no matter how
//! it is hovered or selected.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use dentition_core::color::palette;
use dentition_core::{Color, ToothAnnotation, ToothId};

/// Mutable state for one visualization session.
///
/// Created when the chart view opens and dropped when it closes. Every
/// operation is synchronous and total: calls with teeth that carry no
/// state are no-ops or `None`, never errors.
#[derive(Debug)]
pub struct SceneSession {
    /// Distinguishes simultaneous views of the same model in logs.
    id: Uuid,
    /// At most one annotation per tooth; replaced wholesale per analysis.
    annotations: HashMap<ToothId, ToothAnnotation>,
    selected: HashSet<ToothId>,
    hovered: Option<ToothId>,
    /// Pristine material colors captured once per tooth at attach time.
    originals: HashMap<ToothId, Color>,
}

impl SceneSession {
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session_id = %id, "Created scene session");
        Self {
            id,
            annotations: HashMap::new(),
            selected: HashSet::new(),
            hovered: None,
            originals: HashMap::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    // -----------------------------------------------------------------------
    // Annotations
    // -----------------------------------------------------------------------

    /// Replace the whole annotation set with the outcome of one analysis.
    ///
    /// The new index is built first and swapped in whole, so a render
    /// pass never observes a half-updated set. Duplicate teeth in the
    /// list collapse to the later entry. Selection, hover, and captured
    /// colors are untouched.
    pub fn load_annotations(&mut self, annotations: Vec<ToothAnnotation>) {
        let mut index = HashMap::with_capacity(annotations.len());
        for annotation in annotations {
            index.insert(annotation.tooth, annotation);
        }
        let replaced = std::mem::replace(&mut self.annotations, index);
        tracing::debug!(
            session_id = %self.id,
            annotations = self.annotations.len(),
            replaced = replaced.len(),
            "Loaded annotation set"
        );
    }

    /// The current annotation for a tooth, if any.
    pub fn annotation(&self, tooth: ToothId) -> Option<&ToothAnnotation> {
        self.annotations.get(&tooth)
    }

    /// Number of teeth currently annotated.
    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }

    // -----------------------------------------------------------------------
    // Interaction state
    // -----------------------------------------------------------------------

    /// Flip a tooth's selection membership.
    ///
    /// A second call with the same tooth restores the prior set.
    pub fn toggle_select(&mut self, tooth: ToothId) {
        let selected = if self.selected.remove(&tooth) {
            false
        } else {
            self.selected.insert(tooth);
            true
        };
        tracing::debug!(session_id = %self.id, tooth = %tooth, selected, "Toggled selection");
    }

    pub fn is_selected(&self, tooth: ToothId) -> bool {
        self.selected.contains(&tooth)
    }

    pub fn selected(&self) -> &HashSet<ToothId> {
        &self.selected
    }

    /// Move or clear the hover scalar. Last write wins; repeated calls
    /// with the same value are free, so pointer-move storms accumulate
    /// nothing.
    pub fn set_hover(&mut self, tooth: Option<ToothId>) {
        if self.hovered != tooth {
            tracing::trace!(session_id = %self.id, tooth = ?tooth, "Hover moved");
        }
        self.hovered = tooth;
    }

    pub fn hovered(&self) -> Option<ToothId> {
        self.hovered
    }

    // -----------------------------------------------------------------------
    // Colors
    // -----------------------------------------------------------------------

    /// Record a tooth node's pristine material color.
    ///
    /// The first capture wins; later calls see materials the chart may
    /// already have tinted and are ignored.
    pub fn capture_original(&mut self, tooth: ToothId, color: Color) {
        self.originals.entry(tooth).or_insert(color);
    }

    /// The captured original color for a tooth, if one was recorded.
    pub fn original_color(&self, tooth: ToothId) -> Option<Color> {
        self.originals.get(&tooth).copied()
    }

    /// The color the renderer should show for a tooth right now.
    ///
    /// Precedence, strict:
    /// 1. annotation present -> its procedure color;
    /// 2. selected -> selection highlight;
    /// 3. hovered -> hover color;
    /// 4. otherwise the captured original, or `None` when none was ever
    ///    captured (the renderer then leaves the node untouched).
    pub fn display_color(&self, tooth: ToothId) -> Option<Color> {
        if let Some(annotation) = self.annotations.get(&tooth) {
            return Some(annotation.procedure.display_color());
        }
        if self.selected.contains(&tooth) {
            return Some(palette::SELECTION);
        }
        if self.hovered == Some(tooth) {
            return Some(palette::HOVER);
        }
        self.originals.get(&tooth).copied()
    }
}

impl Default for SceneSession {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    use dentition_core::{Procedure, Surface};

    fn tooth(n: u8) -> ToothId {
        ToothId::new(n).unwrap()
    }

    fn annotated_session() -> SceneSession {
        let mut session = SceneSession::new();
        session.load_annotations(vec![
            ToothAnnotation::new(tooth(26), Procedure::Cavity).with_surface(Surface::Occlusal),
            ToothAnnotation::new(tooth(14), Procedure::Filling),
            ToothAnnotation::new(tooth(3), Procedure::Extraction),
        ]);
        session
    }

    // -- annotations --------------------------------------------------------

    #[test]
    fn test_load_annotations_indexes_by_tooth() {
        let session = annotated_session();
        assert_eq!(session.annotation_count(), 3);
        let annotation = session.annotation(tooth(26)).unwrap();
        assert_eq!(annotation.procedure, Procedure::Cavity);
        assert_eq!(annotation.surface, Some(Surface::Occlusal));
        assert_eq!(session.annotation(tooth(7)), None);
    }

    #[test]
    fn test_later_duplicate_entry_wins() {
        let mut session = SceneSession::new();
        session.load_annotations(vec![
            ToothAnnotation::new(tooth(14), Procedure::Cavity),
            ToothAnnotation::new(tooth(14), Procedure::Filling),
        ]);
        assert_eq!(session.annotation_count(), 1);
        assert_eq!(
            session.annotation(tooth(14)).unwrap().procedure,
            Procedure::Filling
        );
    }

    #[test]
    fn test_reload_replaces_whole_set() {
        let mut session = annotated_session();
        session.load_annotations(vec![ToothAnnotation::new(tooth(8), Procedure::Crown)]);
        assert_eq!(session.annotation_count(), 1);
        assert_eq!(session.annotation(tooth(26)), None);
        assert!(session.annotation(tooth(8)).is_some());
    }

    #[test]
    fn test_reload_keeps_interaction_state() {
        let mut session = annotated_session();
        session.toggle_select(tooth(5));
        session.set_hover(Some(tooth(9)));
        session.load_annotations(Vec::new());
        assert!(session.is_selected(tooth(5)));
        assert_eq!(session.hovered(), Some(tooth(9)));
    }

    // -- selection and hover ------------------------------------------------

    #[test]
    fn test_toggle_select_twice_restores_empty_set() {
        let mut session = SceneSession::new();
        session.toggle_select(tooth(14));
        assert!(session.is_selected(tooth(14)));
        session.toggle_select(tooth(14));
        assert!(session.selected().is_empty());
    }

    #[test]
    fn test_selection_holds_multiple_teeth() {
        let mut session = SceneSession::new();
        session.toggle_select(tooth(1));
        session.toggle_select(tooth(32));
        assert!(session.is_selected(tooth(1)));
        assert!(session.is_selected(tooth(32)));
        assert_eq!(session.selected().len(), 2);
    }

    #[test]
    fn test_hover_is_last_write_wins() {
        let mut session = SceneSession::new();
        session.set_hover(Some(tooth(2)));
        session.set_hover(Some(tooth(2)));
        session.set_hover(Some(tooth(18)));
        assert_eq!(session.hovered(), Some(tooth(18)));
        session.set_hover(None);
        assert_eq!(session.hovered(), None);
    }

    #[test]
    fn test_selection_and_hover_may_overlap() {
        let mut session = SceneSession::new();
        session.toggle_select(tooth(14));
        session.set_hover(Some(tooth(14)));
        assert!(session.is_selected(tooth(14)));
        assert_eq!(session.hovered(), Some(tooth(14)));
    }

    // -- display color precedence -------------------------------------------

    #[test]
    fn annotation_color_beats_every_interaction_state() {
        let mut session = annotated_session();
        let cavity_tooth = tooth(26);

        for select in [false, true] {
            for hover in [false, true] {
                if select != session.is_selected(cavity_tooth) {
                    session.toggle_select(cavity_tooth);
                }
                session.set_hover(hover.then_some(cavity_tooth));
                assert_matches!(
                    session.display_color(cavity_tooth),
                    Some(color) if color == palette::CAVITY,
                    "selected={select} hovered={hover}"
                );
            }
        }
    }

    #[test]
    fn selection_color_beats_hover() {
        let mut session = SceneSession::new();
        session.toggle_select(tooth(14));
        session.set_hover(Some(tooth(14)));
        assert_eq!(session.display_color(tooth(14)), Some(palette::SELECTION));
    }

    #[test]
    fn hover_color_shows_without_annotation_or_selection() {
        let mut session = SceneSession::new();
        session.set_hover(Some(tooth(14)));
        assert_eq!(session.display_color(tooth(14)), Some(palette::HOVER));
    }

    #[test]
    fn original_color_shows_when_idle() {
        let mut session = SceneSession::new();
        let ivory = Color::rgb(0xF5, 0xF0, 0xE1);
        session.capture_original(tooth(14), ivory);
        assert_eq!(session.display_color(tooth(14)), Some(ivory));
    }

    #[test]
    fn uncaptured_idle_tooth_has_no_color() {
        let session = SceneSession::new();
        assert_eq!(session.display_color(tooth(14)), None);
    }

    #[test]
    fn deselection_falls_back_to_original() {
        let mut session = SceneSession::new();
        let ivory = Color::rgb(0xF5, 0xF0, 0xE1);
        session.capture_original(tooth(9), ivory);
        session.toggle_select(tooth(9));
        assert_eq!(session.display_color(tooth(9)), Some(palette::SELECTION));
        session.toggle_select(tooth(9));
        assert_eq!(session.display_color(tooth(9)), Some(ivory));
    }

    // -- original capture ---------------------------------------------------

    #[test]
    fn first_capture_wins() {
        let mut session = SceneSession::new();
        let pristine = Color::rgb(0xF5, 0xF0, 0xE1);
        session.capture_original(tooth(4), pristine);
        session.capture_original(tooth(4), palette::SELECTION);
        assert_eq!(session.original_color(tooth(4)), Some(pristine));
    }

    #[test]
    fn sessions_have_distinct_ids() {
        assert_ne!(SceneSession::new().id(), SceneSession::new().id());
    }
}
