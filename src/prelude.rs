// std
pub use std::num::NonZeroUsize;
pub use std::path::PathBuf;

// external crates
pub use image::{DynamicImage, GenericImageView};
pub use log::{debug, info, warn};
pub use lru::LruCache;
pub use photo_feed::prelude::*;

// crate modules
pub use crate::{
    config::*,
    error::AppError,
    grid::{GridLayout, PhotoGrid},
};
