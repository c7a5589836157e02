//! Selection state: the single selected object and the active video register.
//!
//! `selected_id` is the one cross-kind selection driving transform handles
//! and z-order moves. `active_video_id` is a second, narrower register: the
//! target of transport controls. They are deliberately decoupled so a video
//! can keep playing while an image or text is selected for editing.

use crate::objects::ObjectId;
use serde::{Deserialize, Serialize};

/// Tracks the selected object and the active (transport-targeted) video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected_id: Option<ObjectId>,
    active_video_id: Option<ObjectId>,
}

impl SelectionState {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The globally selected object, if any.
    pub fn selected(&self) -> Option<ObjectId> {
        self.selected_id
    }

    /// The video currently targeted by transport controls, if any.
    pub fn active_video(&self) -> Option<ObjectId> {
        self.active_video_id
    }

    /// Whether the given object is selected.
    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selected_id == Some(id)
    }

    /// Select an object, replacing any previous selection.
    pub fn select(&mut self, id: ObjectId) {
        self.selected_id = Some(id);
    }

    /// Clear the selection. Leaves the active video untouched.
    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    /// Make a video the transport target.
    pub fn mark_video_active(&mut self, id: ObjectId) {
        self.active_video_id = Some(id);
    }

    /// Drop the transport target.
    pub fn clear_active_video(&mut self) {
        self.active_video_id = None;
    }
}
