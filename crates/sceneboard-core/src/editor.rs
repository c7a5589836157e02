//! Editor façade wiring the store, history, selection, and playback together.
//!
//! Renderer-originated events enter here: click/tap via [`SceneEditor::select`],
//! completed drag/transform gestures via [`SceneEditor::apply_change`] (the
//! renderer clamps reported width/height to a minimum of 5 units before
//! calling in). Upload widgets enter through the add operations; the button
//! chrome through move/nudge/undo/redo and the transport controls.
//!
//! Every operation that mutates the scene captures a pre-mutation snapshot,
//! so undo and redo always step whole scenes. Selection and playback state
//! are not part of snapshots.

use crate::history::{History, SceneSnapshot};
use crate::objects::{BitmapHandle, MediaSource, ObjectId, ObjectKind, ObjectPatch, ObjectRef};
use crate::playback::{MediaTransport, PlaybackController};
use crate::selection::SelectionState;
use crate::store::{Direction, SceneStore};

/// Fixed step for arrow-button text nudging, in scene units.
pub const NUDGE_STEP: f64 = 20.0;

/// Direction for nudging the selected text object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Up,
    Down,
    Left,
    Right,
}

/// One-shot draw-stack directive for the renderer, issued alongside a
/// structural reorder.
///
/// Transient by design: it jumps the node within the renderer's current
/// draw stack immediately, while the next full re-render reflects the
/// structural group order instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackDirective {
    /// Move the node to the top of the draw stack.
    RaiseToTop(ObjectId),
    /// Move the node to the bottom of the draw stack.
    LowerToBottom(ObjectId),
}

/// The scene editor: one mutable scene state and the operations on it.
#[derive(Default)]
pub struct SceneEditor {
    store: SceneStore,
    history: History,
    selection: SelectionState,
    playback: PlaybackController,
}

impl SceneEditor {
    /// Create an editor with an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the scene collections, for rendering.
    pub fn store(&self) -> &SceneStore {
        &self.store
    }

    /// The globally selected object, if any.
    pub fn selected_id(&self) -> Option<ObjectId> {
        self.selection.selected()
    }

    /// Whether the given object is the current selection: the per-node
    /// flag the renderer uses to show transform handles.
    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selection.is_selected(id)
    }

    /// The video currently targeted by transport controls, if any.
    pub fn active_video_id(&self) -> Option<ObjectId> {
        self.selection.active_video()
    }

    /// Whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- Add operations (upload widgets, text entry) ---

    /// Add an image from a decoded-bitmap handle. Returns the new id.
    pub fn add_image(&mut self, source: BitmapHandle) -> ObjectId {
        let before = SceneSnapshot::capture(&self.store);
        let id = self.store.add_image(source);
        self.history.record(before);
        id
    }

    /// Add a video from a raw media resource. Returns the new id.
    pub fn add_video(&mut self, media: MediaSource) -> ObjectId {
        let before = SceneSnapshot::capture(&self.store);
        let id = self.store.add_video(media);
        self.history.record(before);
        id
    }

    /// Add a text block and select it. Returns `None` (no mutation, no
    /// history entry) when the content is empty or whitespace.
    pub fn add_text(&mut self, content: &str) -> Option<ObjectId> {
        let before = SceneSnapshot::capture(&self.store);
        let id = self.store.add_text(content)?;
        self.history.record(before);
        self.selection.select(id);
        Some(id)
    }

    // --- Renderer-reported changes ---

    /// Merge a gesture-reported update into an object. Unknown ids and
    /// empty patches are silent no-ops and leave history untouched.
    pub fn apply_change(&mut self, id: ObjectId, patch: &ObjectPatch) {
        if patch.is_empty() {
            return;
        }
        let before = SceneSnapshot::capture(&self.store);
        if self.store.update(id, patch) {
            self.history.record(before);
        }
    }

    // --- Z-order ---

    /// Move the selected object to the front of its group's render order.
    /// Returns the directive for the renderer to mirror immediately, or
    /// `None` when nothing is selected.
    pub fn move_forward(&mut self) -> Option<StackDirective> {
        self.reorder_selected(Direction::Forward)
    }

    /// Move the selected object to the back of its group's render order.
    /// Returns the directive for the renderer to mirror immediately, or
    /// `None` when nothing is selected.
    pub fn move_backward(&mut self) -> Option<StackDirective> {
        self.reorder_selected(Direction::Backward)
    }

    fn reorder_selected(&mut self, direction: Direction) -> Option<StackDirective> {
        let id = self.selection.selected()?;
        let before = SceneSnapshot::capture(&self.store);
        if !self.store.shift(id, direction) {
            return None;
        }
        self.history.record(before);
        Some(match direction {
            Direction::Forward => StackDirective::RaiseToTop(id),
            Direction::Backward => StackDirective::LowerToBottom(id),
        })
    }

    // --- Text nudging ---

    /// Move the selected text object by [`NUDGE_STEP`] in the given
    /// direction. No-op when the selection is unset or not a text object.
    pub fn nudge_selected_text(&mut self, direction: NudgeDirection) {
        let Some(id) = self.selection.selected() else {
            return;
        };
        let mut position = match self.store.get(id) {
            Some(ObjectRef::Text(text)) => text.position,
            _ => return,
        };
        match direction {
            NudgeDirection::Up => position.y -= NUDGE_STEP,
            NudgeDirection::Down => position.y += NUDGE_STEP,
            NudgeDirection::Left => position.x -= NUDGE_STEP,
            NudgeDirection::Right => position.x += NUDGE_STEP,
        }
        let before = SceneSnapshot::capture(&self.store);
        self.store.update(id, &ObjectPatch::move_to(position.x, position.y));
        self.history.record(before);
    }

    // --- History ---

    /// Undo the last scene mutation. Returns `false` when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.store);
        if undone {
            self.prune_dangling_refs();
        }
        undone
    }

    /// Redo the last undone scene mutation. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.store);
        if redone {
            self.prune_dangling_refs();
        }
        redone
    }

    /// Selection is not snapshotted, so a restore can leave it pointing at
    /// an object the restored scene does not contain. Drop such references.
    fn prune_dangling_refs(&mut self) {
        if let Some(id) = self.selection.selected() {
            if !self.store.contains(id) {
                self.selection.clear();
            }
        }
        if let Some(id) = self.selection.active_video() {
            if !self.store.contains(id) {
                self.selection.clear_active_video();
            }
        }
    }

    // --- Selection ---

    /// Select an object by id (click/tap). Selecting a video also makes it
    /// the transport target; selecting anything else leaves the transport
    /// target alone. Unknown ids are a silent no-op.
    pub fn select(&mut self, id: ObjectId) {
        let Some(kind) = self.store.kind_of(id) else {
            return;
        };
        self.selection.select(id);
        if kind == ObjectKind::Video {
            self.selection.mark_video_active(id);
        }
    }

    /// Clear the selection. The active video keeps playing.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // --- Transport controls ---

    /// Play a video. If a different video is the current transport target,
    /// its transport is paused first, strictly before the new play; a
    /// failed play leaves it paused (no rollback). No-op when `id` is not
    /// a video currently in the scene or has no registered transport.
    pub fn play(&mut self, id: ObjectId) {
        if self.store.kind_of(id) != Some(ObjectKind::Video) {
            log::debug!("play requested for id {id} that is not a live video");
            return;
        }
        if !self.playback.is_registered(id) {
            log::debug!("play requested for video {id} with no registered transport");
            return;
        }
        if let Some(previous) = self.selection.active_video() {
            if previous != id {
                self.playback.pause(previous);
            }
        }
        if let Err(err) = self.playback.play(id) {
            log::warn!("best-effort play failed for video {id}: {err}");
        }
        self.selection.mark_video_active(id);
    }

    /// Pause the active video. It stays the transport target.
    pub fn pause(&mut self) {
        if let Some(id) = self.selection.active_video() {
            self.playback.pause(id);
        }
    }

    /// Stop the active video: pause, rewind to the start, and drop the
    /// transport target. No-op when the active video has no registered
    /// transport.
    pub fn stop(&mut self) {
        let Some(id) = self.selection.active_video() else {
            return;
        };
        if !self.playback.is_registered(id) {
            return;
        }
        self.playback.pause(id);
        self.playback.rewind(id);
        self.selection.clear_active_video();
    }

    // --- Renderer media binding ---

    /// Register the live media transport for a video object. Ignored for
    /// ids that are not videos in the store.
    pub fn register_media(&mut self, id: ObjectId, transport: Box<dyn MediaTransport>) {
        if self.store.kind_of(id) != Some(ObjectKind::Video) {
            log::debug!("media transport registration for non-video id {id} ignored");
            return;
        }
        self.playback.register(id, transport);
    }

    /// Record the natural media dimensions the renderer reported for a
    /// video. Kept for renderer-local sizing; the stored frame is not
    /// touched.
    pub fn set_natural_size(&mut self, id: ObjectId, width: f64, height: f64) {
        self.playback.set_natural_size(id, width, height);
    }

    /// The renderer-reported natural dimensions for a video, if known.
    pub fn natural_size(&self, id: ObjectId) -> Option<(f64, f64)> {
        self.playback.natural_size(id)
    }
}
