use thiserror::Error;

/// Reasons a carousel cannot be brought up.
///
/// Once a [`crate::Carousel`] exists none of its operations fail; these only
/// surface during initialization.
#[derive(Debug, Error)]
pub enum CoverflowError {
    #[error("carousel has no items")]
    Empty,
    #[error("slide data has {slides} entries but the page renders {items} items")]
    SlideCountMismatch { slides: usize, items: usize },
    #[error("invalid slide data: {0}")]
    InvalidSlides(#[source] serde_json::Error),
    #[error("invalid carousel parameters: {0}")]
    InvalidParams(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoverflowError>;
