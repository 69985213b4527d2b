use crate::error::{CoverflowError, Result};
use serde::{Deserialize, Serialize};

/// Caption shown while an item is selected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub description: String,
}

impl Slide {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Ordered captions, one per rendered item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

const DEFAULT_SLIDES: [(&str, &str); 7] = [
    (
        "Mountain Landscape",
        "Majestic peaks covered in snow during golden hour",
    ),
    ("Forest Path", "A winding trail through ancient woodland"),
    ("Ocean Sunset", "Golden hour at the beach with waves crashing"),
    ("Rolling Sand Dunes", "Wind-swept dunes under a clear blue sky"),
    ("Serene Water", "Calm lake reflecting the surrounding mountains"),
    ("Starry Night", "A breathtaking view of the Milky Way"),
    ("Waterfall", "Cascading water through lush green forest"),
];

impl Default for SlideDeck {
    fn default() -> Self {
        Self {
            slides: DEFAULT_SLIDES
                .iter()
                .map(|(t, d)| Slide::new(*t, *d))
                .collect(),
        }
    }
}

impl SlideDeck {
    /// Parse a JSON array of `{ "title", "description" }` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let slides: Vec<Slide> =
            serde_json::from_str(json).map_err(CoverflowError::InvalidSlides)?;
        Ok(Self { slides })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// The deck must pair 1:1 with the rendered items.
    pub fn check_matches(&self, items: usize) -> Result<()> {
        if items == 0 {
            return Err(CoverflowError::Empty);
        }
        if self.slides.len() != items {
            return Err(CoverflowError::SlideCountMismatch {
                slides: self.slides.len(),
                items,
            });
        }
        Ok(())
    }
}
