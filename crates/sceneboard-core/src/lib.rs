//! Sceneboard Core Library
//!
//! Scene state model for the Sceneboard canvas editor: the object registry
//! (images, texts, videos), the single-selection model with its decoupled
//! active-video register, within-group z-order control, and snapshot-based
//! undo/redo. The retained-mode renderer, upload widgets, and button chrome
//! live in the host application and talk to this crate through
//! [`editor::SceneEditor`].

pub mod editor;
pub mod history;
pub mod objects;
pub mod playback;
pub mod selection;
pub mod store;

pub use editor::{NUDGE_STEP, NudgeDirection, SceneEditor, StackDirective};
pub use history::{History, MAX_UNDO_HISTORY, SceneSnapshot};
pub use objects::{
    BitmapHandle, ImageObject, MediaSource, ObjectId, ObjectKind, ObjectPatch, ObjectRef,
    TextObject, VideoObject,
};
pub use playback::{MediaTransport, PlaybackController, PlaybackError};
pub use selection::SelectionState;
pub use store::{Direction, SceneStore};
