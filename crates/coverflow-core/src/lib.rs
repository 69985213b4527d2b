pub mod carousel;
pub mod chrome;
pub mod constants;
pub mod error;
pub mod intent;
pub mod layout;
pub mod params;
pub mod slides;
pub mod swipe;
pub mod timeline;

pub use carousel::*;
pub use error::{CoverflowError, Result};
pub use intent::*;
pub use layout::*;
pub use params::*;
pub use slides::*;
pub use swipe::*;
