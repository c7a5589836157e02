//! Scene object definitions for the canvas editor.

mod image;
mod text;
mod video;

pub use image::{BitmapHandle, ImageObject};
pub use text::TextObject;
pub use video::{MediaSource, VideoObject};

use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for scene objects, shared across all kinds.
pub type ObjectId = Uuid;

/// The kind of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Raster image placed from an upload.
    Image,
    /// Styled text block.
    Text,
    /// Video playback surface.
    Video,
}

/// Borrowed view over a scene object of any kind.
///
/// The store keeps one collection per kind; this enum is how callers walk
/// them uniformly (render-order flattening, lookups by id).
#[derive(Debug, Clone, Copy)]
pub enum ObjectRef<'a> {
    Image(&'a ImageObject),
    Text(&'a TextObject),
    Video(&'a VideoObject),
}

impl ObjectRef<'_> {
    /// The object's unique identifier.
    pub fn id(&self) -> ObjectId {
        match self {
            ObjectRef::Image(obj) => obj.id(),
            ObjectRef::Text(obj) => obj.id(),
            ObjectRef::Video(obj) => obj.id(),
        }
    }

    /// The object's kind tag.
    pub fn kind(&self) -> ObjectKind {
        match self {
            ObjectRef::Image(_) => ObjectKind::Image,
            ObjectRef::Text(_) => ObjectKind::Text,
            ObjectRef::Video(_) => ObjectKind::Video,
        }
    }

    /// Top-left position in scene coordinates.
    pub fn position(&self) -> Point {
        match self {
            ObjectRef::Image(obj) => obj.position,
            ObjectRef::Text(obj) => obj.position,
            ObjectRef::Video(obj) => obj.position,
        }
    }
}

/// Sparse update for a scene object. Only present fields are applied;
/// fields the target kind does not carry are ignored.
///
/// This is what the renderer reports after a completed drag (`x`, `y`) or
/// transform (`x`, `y`, `width`, `height`, `rotation`) gesture, and what the
/// text controls report for content edits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectPatch {
    /// New x position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New y position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New width, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// New height, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// New rotation in degrees, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// New text content, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New font size, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

impl ObjectPatch {
    /// Patch carrying only a new position (the drag-end payload).
    pub fn move_to(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.x.is_none()
            && self.y.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.rotation.is_none()
            && self.content.is_none()
            && self.font_size.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_to_patch() {
        let patch = ObjectPatch::move_to(10.0, 20.0);
        assert_eq!(patch.x, Some(10.0));
        assert_eq!(patch.y, Some(20.0));
        assert!(patch.width.is_none());
        assert!(patch.rotation.is_none());
    }

    #[test]
    fn test_empty_patch() {
        assert!(ObjectPatch::default().is_empty());
        assert!(!ObjectPatch::move_to(0.0, 0.0).is_empty());
    }

    #[test]
    fn test_object_ref_kind() {
        let image = ImageObject::new(BitmapHandle::new("blob:img"));
        let text = TextObject::new("hello");
        let video = VideoObject::new(MediaSource::new("blob:vid"));

        assert_eq!(ObjectRef::Image(&image).kind(), ObjectKind::Image);
        assert_eq!(ObjectRef::Text(&text).kind(), ObjectKind::Text);
        assert_eq!(ObjectRef::Video(&video).kind(), ObjectKind::Video);
        assert_eq!(ObjectRef::Image(&image).id(), image.id());
    }
}
