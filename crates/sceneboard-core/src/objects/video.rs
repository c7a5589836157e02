//! Video playback surface objects.

use super::{ObjectId, ObjectPatch};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle to a playable media resource bound to a video object.
///
/// Identifies the raw upload; the live, renderer-side transport for the
/// same resource is registered separately through the playback controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSource(String);

impl MediaSource {
    /// Wrap a renderer-supplied resource key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw resource key, for the renderer to resolve.
    pub fn key(&self) -> &str {
        &self.0
    }
}

/// A video playback surface on the canvas.
///
/// Videos carry no rotation. The stored width/height are fixed defaults;
/// the media's natural dimensions are tracked renderer-side only and never
/// reconciled into the frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoObject {
    pub(crate) id: ObjectId,
    /// Top-left corner position in scene coordinates.
    pub position: Point,
    /// Display width.
    pub width: f64,
    /// Display height.
    pub height: f64,
    /// Media resource bound at upload time.
    pub media: MediaSource,
}

impl VideoObject {
    /// Default frame position for newly uploaded videos.
    pub const DEFAULT_POSITION: Point = Point::new(50.0, 50.0);
    /// Default display width and height for newly uploaded videos.
    pub const DEFAULT_SIZE: f64 = 400.0;

    /// Create a video with the fixed default frame.
    pub fn new(media: MediaSource) -> Self {
        Self {
            id: Uuid::new_v4(),
            position: Self::DEFAULT_POSITION,
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
            media,
        }
    }

    /// The object's unique identifier.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Merge a sparse update into this video. `rotation`, `content`, and
    /// `font_size` do not apply to videos and are ignored.
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
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame() {
        let video = VideoObject::new(MediaSource::new("blob:v"));
        assert_eq!(video.position, Point::new(50.0, 50.0));
        assert_eq!(video.width, 400.0);
        assert_eq!(video.height, 400.0);
        assert_eq!(video.media.key(), "blob:v");
    }

    #[test]
    fn test_rotation_ignored() {
        let mut video = VideoObject::new(MediaSource::new("blob:v"));
        let before = video.clone();
        video.apply_patch(&ObjectPatch {
            rotation: Some(90.0),
            ..ObjectPatch::default()
        });
        assert_eq!(video, before);
    }

    #[test]
    fn test_resize_patch() {
        let mut video = VideoObject::new(MediaSource::new("blob:v"));
        video.apply_patch(&ObjectPatch {
            x: Some(0.0),
            y: Some(0.0),
            width: Some(640.0),
            height: Some(360.0),
            ..ObjectPatch::default()
        });
        assert_eq!(video.position, Point::ZERO);
        assert_eq!(video.width, 640.0);
        assert_eq!(video.height, 360.0);
    }
}
