//! Snapshot-based undo/redo history.
//!
//! Every mutating operation on the scene store records the state *before*
//! the mutation; undo and redo exchange the live store contents with the
//! top of the respective stack. The stacks therefore never hold the
//! currently displayed state. Selection is deliberately not part of a
//! snapshot: undoing a move does not restore what was selected.

use crate::objects::{ImageObject, TextObject, VideoObject};
use crate::store::SceneStore;
use serde::{Deserialize, Serialize};

/// Maximum number of undo states to keep.
pub const MAX_UNDO_HISTORY: usize = 50;

/// An immutable copy of all three scene collections at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    /// Images at capture time.
    pub images: Vec<ImageObject>,
    /// Texts at capture time.
    pub texts: Vec<TextObject>,
    /// Videos at capture time.
    pub videos: Vec<VideoObject>,
}

impl SceneSnapshot {
    /// Capture the current store contents.
    pub fn capture(store: &SceneStore) -> Self {
        Self {
            images: store.images.clone(),
            texts: store.texts.clone(),
            videos: store.videos.clone(),
        }
    }

    /// Replace the store contents with this snapshot.
    pub fn restore(self, store: &mut SceneStore) {
        store.images = self.images;
        store.texts = self.texts;
        store.videos = self.videos;
    }
}

/// Undo and redo stacks of whole-scene snapshots.
///
/// The stacks are private: nothing outside this manager pushes or pops
/// them directly.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<SceneSnapshot>,
    redo_stack: Vec<SceneSnapshot>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pre-mutation snapshot. Clears the redo stack (a fresh
    /// action invalidates any pending redo history) and evicts the oldest
    /// entry once the depth cap is reached.
    pub fn record(&mut self, snapshot: SceneSnapshot) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();

        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Step back: move the live state onto the redo stack and restore the
    /// most recent undo snapshot. Returns `false` when there is nothing
    /// to undo.
    pub fn undo(&mut self, store: &mut SceneStore) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(SceneSnapshot::capture(store));
        snapshot.restore(store);
        log::debug!("undo applied, {} undo states left", self.undo_stack.len());
        true
    }

    /// Step forward: move the live state back onto the undo stack and
    /// restore the most recently undone snapshot. Returns `false` when
    /// there is nothing to redo.
    pub fn redo(&mut self, store: &mut SceneStore) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(SceneSnapshot::capture(store));
        snapshot.restore(store);
        log::debug!("redo applied, {} redo states left", self.redo_stack.len());
        true
    }

    /// Whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
