//! Video transport control and the renderer media registry.
//!
//! The renderer owns the live media resources it is displaying. For each
//! video object it registers a [`MediaTransport`] here, so play/pause/stop
//! issued through the editor address the same resource the canvas shows.
//! It may also report the media's natural dimensions once known; those are
//! kept for renderer-local fit logic only and are never reconciled into the
//! scene store's frame.

use crate::objects::ObjectId;
use std::collections::HashMap;
use thiserror::Error;

/// Failure reported by a renderer-side media transport.
///
/// Transport failures are best-effort territory: the core logs them and
/// moves on, it never surfaces them across the editor boundary.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The underlying media resource has not finished initializing.
    #[error("media resource is not ready")]
    MediaUnavailable,
    /// Any other renderer-side playback failure.
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Live handle to the media resource the renderer displays for one video.
pub trait MediaTransport {
    /// Begin or resume playback.
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Pause at the current position.
    fn pause(&mut self);

    /// Seek back to the start of the media.
    fn rewind(&mut self);
}

struct MediaBinding {
    transport: Box<dyn MediaTransport>,
    natural_size: Option<(f64, f64)>,
}

/// Registry of renderer-registered transports, keyed by video object id.
#[derive(Default)]
pub struct PlaybackController {
    bindings: HashMap<ObjectId, MediaBinding>,
}

impl PlaybackController {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the live transport for a video. Replacing an
    /// entry drops the previous transport; releasing its underlying
    /// resource is the renderer binding's job.
    pub fn register(&mut self, id: ObjectId, transport: Box<dyn MediaTransport>) {
        let previous = self.bindings.insert(
            id,
            MediaBinding {
                transport,
                natural_size: None,
            },
        );
        if previous.is_some() {
            log::debug!("replaced media transport for video {id}");
        }
    }

    /// Whether a transport is registered for the given video.
    pub fn is_registered(&self, id: ObjectId) -> bool {
        self.bindings.contains_key(&id)
    }

    /// Record the media's natural dimensions, reported by the renderer
    /// once metadata is loaded. Dropped when no transport is registered.
    pub fn set_natural_size(&mut self, id: ObjectId, width: f64, height: f64) {
        match self.bindings.get_mut(&id) {
            Some(binding) => binding.natural_size = Some((width, height)),
            None => log::debug!("natural size reported for unregistered video {id}"),
        }
    }

    /// The renderer-reported natural dimensions, if known.
    pub fn natural_size(&self, id: ObjectId) -> Option<(f64, f64)> {
        self.bindings.get(&id).and_then(|binding| binding.natural_size)
    }

    /// Play the transport for the given video.
    pub fn play(&mut self, id: ObjectId) -> Result<(), PlaybackError> {
        let binding = self
            .bindings
            .get_mut(&id)
            .ok_or(PlaybackError::MediaUnavailable)?;
        binding.transport.play()
    }

    /// Pause the transport for the given video, if registered.
    pub fn pause(&mut self, id: ObjectId) {
        match self.bindings.get_mut(&id) {
            Some(binding) => binding.transport.pause(),
            None => log::debug!("pause requested for unregistered video {id}"),
        }
    }

    /// Rewind the transport for the given video to the start, if registered.
    pub fn rewind(&mut self, id: ObjectId) {
        match self.bindings.get_mut(&id) {
            Some(binding) => binding.transport.rewind(),
            None => log::debug!("rewind requested for unregistered video {id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use uuid::Uuid;

    struct FakeTransport {
        label: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl MediaTransport for FakeTransport {
        fn play(&mut self) -> Result<(), PlaybackError> {
            self.log.borrow_mut().push(format!("play {}", self.label));
            Ok(())
        }

        fn pause(&mut self) {
            self.log.borrow_mut().push(format!("pause {}", self.label));
        }

        fn rewind(&mut self) {
            self.log.borrow_mut().push(format!("rewind {}", self.label));
        }
    }

    #[test]
    fn test_play_without_registration_fails() {
        let mut playback = PlaybackController::new();
        let result = playback.play(Uuid::new_v4());
        assert!(matches!(result, Err(PlaybackError::MediaUnavailable)));
    }

    #[test]
    fn test_transport_commands_reach_registered_handle() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut playback = PlaybackController::new();
        let id = Uuid::new_v4();

        playback.register(
            id,
            Box::new(FakeTransport {
                label: "a",
                log: Rc::clone(&log),
            }),
        );

        playback.play(id).unwrap();
        playback.pause(id);
        playback.rewind(id);

        assert_eq!(*log.borrow(), vec!["play a", "pause a", "rewind a"]);
    }

    #[test]
    fn test_natural_size_requires_registration() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut playback = PlaybackController::new();
        let registered = Uuid::new_v4();
        let unregistered = Uuid::new_v4();

        playback.register(
            registered,
            Box::new(FakeTransport {
                label: "a",
                log: Rc::clone(&log),
            }),
        );

        playback.set_natural_size(registered, 1920.0, 1080.0);
        playback.set_natural_size(unregistered, 640.0, 480.0);

        assert_eq!(playback.natural_size(registered), Some((1920.0, 1080.0)));
        assert_eq!(playback.natural_size(unregistered), None);
    }
}
