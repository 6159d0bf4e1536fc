//! Image carousel state for a product.

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};

/// Navigation step through a product's images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn delta(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Ordered, non-empty list of image references plus the one on display.
///
/// `current` is always a valid index: navigation wraps around both ends.
/// Deserialized galleries are checked the same way as constructed ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GalleryState")]
pub struct ImageGallery {
    images: Vec<String>,
    current: usize,
}

/// Unchecked wire shape of an `ImageGallery`.
#[derive(Deserialize)]
struct GalleryState {
    images: Vec<String>,
    #[serde(default)]
    current: usize,
}

impl TryFrom<GalleryState> for ImageGallery {
    type Error = DomainError;

    fn try_from(state: GalleryState) -> Result<Self, Self::Error> {
        let mut gallery = Self::new(state.images)?;
        if state.current >= gallery.len() {
            return Err(DomainError::validation(format!(
                "image index {} out of range for {} image(s)",
                state.current,
                gallery.len()
            )));
        }
        gallery.current = state.current;
        Ok(gallery)
    }
}

impl ImageGallery {
    pub fn new(images: Vec<String>) -> DomainResult<Self> {
        if images.is_empty() {
            return Err(DomainError::validation("a product needs at least one image"));
        }
        Ok(Self { images, current: 0 })
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false; kept for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn has_multiple(&self) -> bool {
        self.images.len() > 1
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &str {
        &self.images[self.current]
    }

    /// Step one image in `direction`, wrapping at both ends, and return the
    /// image now on display. A single-image gallery never moves.
    pub fn advance(&mut self, direction: Direction) -> &str {
        let count = self.images.len();
        if count > 1 {
            let step = direction.delta().rem_euclid(count as isize) as usize;
            self.current = (self.current + step) % count;
        }
        self.current()
    }

    /// Back to the first image.
    pub fn reset(&mut self) {
        self.current = 0;
    }
}
