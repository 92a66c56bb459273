//! Pointer-driven image resizing.
//!
//! The controller is a two-state machine, idle or resizing. It is generic
//! over the image handle so the browser layer can hold an element while
//! tests use plain values.

use crate::config::DEFAULT_MIN_IMAGE_SIZE;

/// Rendered image size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: i32,
    pub height: i32,
}

impl ImageSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// One drag of a resize handle.
#[derive(Debug, Clone)]
pub struct ResizeSession<I> {
    image: I,
    start_x: i32,
    start_y: i32,
    start: ImageSize,
    current: ImageSize,
}

impl<I> ResizeSession<I> {
    pub fn image(&self) -> &I {
        &self.image
    }

    /// Last size applied to the image.
    pub fn current_size(&self) -> ImageSize {
        self.current
    }
}

/// Result of releasing the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeOutcome<I> {
    pub image: I,
    pub size: ImageSize,
    /// False if the image ended at its starting size.
    pub changed: bool,
}

#[derive(Debug, Clone)]
pub struct ImageResizeController<I> {
    session: Option<ResizeSession<I>>,
    min_size: i32,
}

impl<I> Default for ImageResizeController<I> {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_IMAGE_SIZE)
    }
}

impl<I> ImageResizeController<I> {
    /// `min_size` is an exclusive floor: both dimensions must stay above it.
    pub fn new(min_size: i32) -> Self {
        Self {
            session: None,
            min_size,
        }
    }

    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&ResizeSession<I>> {
        self.session.as_ref()
    }

    /// Image being resized, if any.
    pub fn image(&self) -> Option<&I> {
        self.session.as_ref().map(|s| &s.image)
    }

    /// Start resizing `image`, currently `width` x `height`, from pointer
    /// position (`x`, `y`).
    ///
    /// Ignored while another resize is in progress.
    pub fn pointer_down(&mut self, image: I, x: i32, y: i32, width: i32, height: i32) -> bool {
        if self.session.is_some() {
            tracing::debug!("pointer down while resizing, ignored");
            return false;
        }
        let start = ImageSize::new(width, height);
        self.session = Some(ResizeSession {
            image,
            start_x: x,
            start_y: y,
            start,
            current: start,
        });
        true
    }

    /// Track the pointer. Returns the size to apply, or `None` when idle or
    /// when the candidate size would reach the floor.
    pub fn pointer_move(&mut self, x: i32, y: i32) -> Option<ImageSize> {
        let min_size = self.min_size;
        let session = self.session.as_mut()?;

        let candidate = ImageSize::new(
            session.start.width.saturating_add(x.saturating_sub(session.start_x)),
            session.start.height.saturating_add(y.saturating_sub(session.start_y)),
        );
        if candidate.width <= min_size || candidate.height <= min_size {
            return None;
        }

        session.current = candidate;
        Some(candidate)
    }

    /// Finish resizing. Returns the image and its final size exactly once.
    pub fn pointer_up(&mut self) -> Option<ResizeOutcome<I>> {
        let session = self.session.take()?;
        Some(ResizeOutcome {
            changed: session.current != session.start,
            size: session.current,
            image: session.image,
        })
    }

    /// Drop any session without producing an outcome.
    pub fn cancel(&mut self) {
        self.session = None;
    }
}
