//! Styled text objects.

use super::{ObjectId, ObjectPatch};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A styled text block on the canvas.
///
/// Text has no stored height; the renderer derives it from the content,
/// font size, and wrap width. Horizontal resize gestures report back a new
/// `width` and a proportionally scaled `font_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextObject {
    pub(crate) id: ObjectId,
    /// Top-left corner position in scene coordinates.
    pub position: Point,
    /// The text content.
    pub content: String,
    /// Font size in scene units.
    pub font_size: f64,
    /// Wrap/scale width.
    pub width: f64,
    /// Rotation in degrees.
    pub rotation: f64,
}

impl TextObject {
    /// Default frame position for newly added text.
    pub const DEFAULT_POSITION: Point = Point::new(100.0, 100.0);
    /// Default font size for newly added text.
    pub const DEFAULT_FONT_SIZE: f64 = 24.0;
    /// Default wrap width for newly added text.
    pub const DEFAULT_WIDTH: f64 = 200.0;

    /// Create a text object with the fixed default frame.
    ///
    /// Content validation (rejecting blank strings) happens in the store;
    /// the constructor stores whatever it is given.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            position: Self::DEFAULT_POSITION,
            content: content.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
            width: Self::DEFAULT_WIDTH,
            rotation: 0.0,
        }
    }

    /// The object's unique identifier.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Merge a sparse update into this text. `height` does not apply to
    /// text and is ignored.
    pub fn apply_patch(&mut self, patch: &ObjectPatch) {
        if let Some(x) = patch.x {
            self.position.x = x;
        }
        if let Some(y) = patch.y {
            self.position.y = y;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(content) = &patch.content {
            self.content = content.clone();
        }
        if let Some(font_size) = patch.font_size {
            self.font_size = font_size;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame() {
        let text = TextObject::new("hello");
        assert_eq!(text.position, Point::new(100.0, 100.0));
        assert_eq!(text.font_size, 24.0);
        assert_eq!(text.width, 200.0);
        assert_eq!(text.rotation, 0.0);
        assert_eq!(text.content, "hello");
    }

    #[test]
    fn test_resize_patch_scales_font() {
        let mut text = TextObject::new("hello");
        text.apply_patch(&ObjectPatch {
            width: Some(400.0),
            font_size: Some(48.0),
            rotation: Some(15.0),
            ..ObjectPatch::default()
        });
        assert_eq!(text.width, 400.0);
        assert_eq!(text.font_size, 48.0);
        assert_eq!(text.rotation, 15.0);
    }

    #[test]
    fn test_height_ignored() {
        let mut text = TextObject::new("hello");
        let before = text.clone();
        text.apply_patch(&ObjectPatch {
            height: Some(999.0),
            ..ObjectPatch::default()
        });
        assert_eq!(text, before);
    }
}
