//! Raster image objects.

use super::{ObjectId, ObjectPatch};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle to decoded bitmap data, supplied by the upload widget.
///
/// The core stores the handle for the object's lifetime and hands it back to
/// the renderer unchanged; it never interprets the contents. Releasing the
/// underlying resource is the renderer binding's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitmapHandle(String);

impl BitmapHandle {
    /// Wrap a renderer-supplied resource key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw resource key, for the renderer to resolve.
    pub fn key(&self) -> &str {
        &self.0
    }
}

/// A raster image placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageObject {
    pub(crate) id: ObjectId,
    /// Top-left corner position in scene coordinates.
    pub position: Point,
    /// Display width.
    pub width: f64,
    /// Display height.
    pub height: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Decoded bitmap handle captured at upload time.
    pub source: BitmapHandle,
}

impl ImageObject {
    /// Default frame position for newly uploaded images.
    pub const DEFAULT_POSITION: Point = Point::new(50.0, 50.0);
    /// Default display width and height for newly uploaded images.
    pub const DEFAULT_SIZE: f64 = 200.0;

    /// Create an image with the fixed default frame.
    pub fn new(source: BitmapHandle) -> Self {
        Self {
            id: Uuid::new_v4(),
            position: Self::DEFAULT_POSITION,
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
            rotation: 0.0,
            source,
        }
    }

    /// The object's unique identifier.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Merge a sparse update into this image. `content` and `font_size`
    /// do not apply to images and are ignored.
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
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
    }
}
