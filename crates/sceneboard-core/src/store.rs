//! Scene store: the three ordered object collections.

use crate::objects::{
    BitmapHandle, ImageObject, MediaSource, ObjectId, ObjectKind, ObjectPatch, ObjectRef,
    TextObject, VideoObject,
};
use serde::{Deserialize, Serialize};

/// Direction for reordering an object inside its owning collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Towards the front of the group's render order (tail of the sequence).
    Forward,
    /// Towards the back of the group's render order (head of the sequence).
    Backward,
}

/// The single source of truth for what is drawn.
///
/// Each collection is ordered back-to-front within its own kind; the full
/// render order is `images ++ texts ++ videos` (fixed group precedence).
/// New objects append at the tail, so they render on top within their group.
/// Objects are never removed; they are only appended and mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneStore {
    /// Raster images, back to front.
    pub images: Vec<ImageObject>,
    /// Text blocks, back to front.
    pub texts: Vec<TextObject>,
    /// Video surfaces, back to front.
    pub videos: Vec<VideoObject>,
}

impl SceneStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new image with the default frame. Returns its id.
    pub fn add_image(&mut self, source: BitmapHandle) -> ObjectId {
        let image = ImageObject::new(source);
        let id = image.id();
        self.images.push(image);
        log::debug!("added image {id}");
        id
    }

    /// Append a new video with the default frame. Returns its id.
    ///
    /// The stored frame ignores the media's natural size; that is tracked
    /// renderer-side through the playback controller.
    pub fn add_video(&mut self, media: MediaSource) -> ObjectId {
        let video = VideoObject::new(media);
        let id = video.id();
        self.videos.push(video);
        log::debug!("added video {id}");
        id
    }

    /// Append a new text block with the default frame. Returns `None`
    /// without mutating anything when the content is empty or whitespace.
    pub fn add_text(&mut self, content: &str) -> Option<ObjectId> {
        if content.trim().is_empty() {
            return None;
        }
        let text = TextObject::new(content);
        let id = text.id();
        self.texts.push(text);
        log::debug!("added text {id}");
        Some(id)
    }

    /// Merge a sparse update into the object with the given id, wherever it
    /// lives. Returns `false` (leaving every collection untouched) when the
    /// id is unknown.
    pub fn update(&mut self, id: ObjectId, patch: &ObjectPatch) -> bool {
        if let Some(image) = self.images.iter_mut().find(|obj| obj.id() == id) {
            image.apply_patch(patch);
            return true;
        }
        if let Some(text) = self.texts.iter_mut().find(|obj| obj.id() == id) {
            text.apply_patch(patch);
            return true;
        }
        if let Some(video) = self.videos.iter_mut().find(|obj| obj.id() == id) {
            video.apply_patch(patch);
            return true;
        }
        false
    }

    /// Reorder an object within its owning collection: forward re-appends it
    /// at the tail, backward prepends it at the head. Returns `false` when
    /// the id is unknown.
    pub fn shift(&mut self, id: ObjectId, direction: Direction) -> bool {
        if let Some(index) = self.images.iter().position(|obj| obj.id() == id) {
            let image = self.images.remove(index);
            match direction {
                Direction::Forward => self.images.push(image),
                Direction::Backward => self.images.insert(0, image),
            }
            return true;
        }
        if let Some(index) = self.texts.iter().position(|obj| obj.id() == id) {
            let text = self.texts.remove(index);
            match direction {
                Direction::Forward => self.texts.push(text),
                Direction::Backward => self.texts.insert(0, text),
            }
            return true;
        }
        if let Some(index) = self.videos.iter().position(|obj| obj.id() == id) {
            let video = self.videos.remove(index);
            match direction {
                Direction::Forward => self.videos.push(video),
                Direction::Backward => self.videos.insert(0, video),
            }
            return true;
        }
        false
    }

    /// Look up an object by id across all three collections.
    pub fn get(&self, id: ObjectId) -> Option<ObjectRef<'_>> {
        self.render_order().find(|obj| obj.id() == id)
    }

    /// The kind of the object with the given id, if present.
    pub fn kind_of(&self, id: ObjectId) -> Option<ObjectKind> {
        self.get(id).map(|obj| obj.kind())
    }

    /// Whether an object with the given id exists in any collection.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// All objects in render order: images, then texts, then videos, each
    /// group back to front.
    pub fn render_order(&self) -> impl Iterator<Item = ObjectRef<'_>> {
        self.images
            .iter()
            .map(ObjectRef::Image)
            .chain(self.texts.iter().map(ObjectRef::Text))
            .chain(self.videos.iter().map(ObjectRef::Video))
    }

    /// Total number of objects across all collections.
    pub fn len(&self) -> usize {
        self.images.len() + self.texts.len() + self.videos.len()
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.texts.is_empty() && self.videos.is_empty()
    }

    /// Serialize the store to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a store from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_add_defaults() {
        let mut store = SceneStore::new();
        let image_id = store.add_image(BitmapHandle::new("blob:a"));
        let text_id = store.add_text("hi").unwrap();
        let video_id = store.add_video(MediaSource::new("blob:v"));

        assert_eq!(store.kind_of(image_id), Some(ObjectKind::Image));
        assert_eq!(store.kind_of(text_id), Some(ObjectKind::Text));
        assert_eq!(store.kind_of(video_id), Some(ObjectKind::Video));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_blank_text_rejected() {
        let mut store = SceneStore::new();
        assert!(store.add_text("").is_none());
        assert!(store.add_text("   \t\n").is_none());
        assert!(store.texts.is_empty());
    }

    #[test]
    fn test_ids_unique_across_collections() {
        let mut store = SceneStore::new();
        let mut ids = HashSet::new();
        for i in 0..10 {
            ids.insert(store.add_image(BitmapHandle::new(format!("blob:i{i}"))));
            ids.insert(store.add_text(&format!("t{i}")).unwrap());
            ids.insert(store.add_video(MediaSource::new(format!("blob:v{i}"))));
        }
        assert_eq!(ids.len(), 30);
    }

    #[test]
    fn test_update_merges_partial_fields() {
        let mut store = SceneStore::new();
        let id = store.add_image(BitmapHandle::new("blob:a"));

        assert!(store.update(id, &ObjectPatch::move_to(1.0, 2.0)));
        let image = &store.images[0];
        assert_eq!(image.position.x, 1.0);
        assert_eq!(image.position.y, 2.0);
        assert_eq!(image.width, ImageObject::DEFAULT_SIZE);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = SceneStore::new();
        store.add_image(BitmapHandle::new("blob:a"));
        let before = store.clone();

        assert!(!store.update(uuid::Uuid::new_v4(), &ObjectPatch::move_to(9.0, 9.0)));
        assert_eq!(store, before);
    }

    #[test]
    fn test_shift_forward_and_backward() {
        let mut store = SceneStore::new();
        let a = store.add_text("a").unwrap();
        let b = store.add_text("b").unwrap();
        let c = store.add_text("c").unwrap();

        assert!(store.shift(a, Direction::Forward));
        let order: Vec<_> = store.texts.iter().map(TextObject::id).collect();
        assert_eq!(order, vec![b, c, a]);

        assert!(store.shift(c, Direction::Backward));
        let order: Vec<_> = store.texts.iter().map(TextObject::id).collect();
        assert_eq!(order, vec![c, b, a]);
    }

    #[test]
    fn test_shift_singleton_is_idempotent() {
        let mut store = SceneStore::new();
        let id = store.add_image(BitmapHandle::new("blob:a"));
        let before = store.clone();

        assert!(store.shift(id, Direction::Forward));
        assert_eq!(store, before);
        assert!(store.shift(id, Direction::Backward));
        assert_eq!(store, before);
    }

    #[test]
    fn test_shift_unknown_id_is_noop() {
        let mut store = SceneStore::new();
        store.add_text("a").unwrap();
        assert!(!store.shift(uuid::Uuid::new_v4(), Direction::Forward));
    }

    #[test]
    fn test_render_order_group_precedence() {
        let mut store = SceneStore::new();
        let video_id = store.add_video(MediaSource::new("blob:v"));
        let image_id = store.add_image(BitmapHandle::new("blob:a"));
        let text_id = store.add_text("t").unwrap();

        // Insertion order does not matter across groups: images draw under
        // texts, which draw under videos.
        let order: Vec<_> = store.render_order().map(|obj| obj.id()).collect();
        assert_eq!(order, vec![image_id, text_id, video_id]);
    }

    #[test]
    fn test_json_round_trip() {
        let mut store = SceneStore::new();
        store.add_image(BitmapHandle::new("blob:a"));
        store.add_text("hello").unwrap();
        store.add_video(MediaSource::new("blob:v"));

        let json = store.to_json().unwrap();
        let restored = SceneStore::from_json(&json).unwrap();
        assert_eq!(store, restored);
    }
}
