//! Headless photo grid: busy flag, displayed images, and cached cell thumbnails.

use crate::prelude::*;

/// Column count and cell size for a given grid width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub cell_size: u32,
}

impl GridLayout {
    pub fn for_width(available_width: f32) -> Self {
        let columns = GRID_COLUMNS;
        let cell_size = ((available_width
            - (columns as f32 + 1.0) * CELL_BORDER
            - 2.0 * EDGE_MARGIN)
            / columns as f32)
            .floor()
            .max(1.0) as u32;
        Self { columns, cell_size }
    }
}

pub struct PhotoGrid {
    images: Vec<RenderableImage>,
    busy: bool,
    thumbnails: LruCache<(usize, u32), DynamicImage>,
}

impl PhotoGrid {
    pub fn new(cache_size: usize) -> Self {
        Self {
            images: Vec::new(),
            busy: false,
            thumbnails: LruCache::new(NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN)),
        }
    }

    pub fn images(&self) -> &[RenderableImage] {
        &self.images
    }

    /// Number of cells in the grid.
    pub fn item_count(&self) -> usize {
        self.images.len()
    }

    /// Rendered thumbnail for the cell at `index`, scaled to fit `size`.
    pub fn cell(&mut self, index: usize, size: u32) -> Option<&DynamicImage> {
        let photo = self.images.get(index)?;
        let key = (index, size);
        if !self.thumbnails.contains(&key) {
            let thumb = photo.thumbnail(size);
            debug!("Rendered thumbnail for cell {} at {}px", index, size);
            self.thumbnails.put(key, thumb);
        }
        self.thumbnails.get(&key)
    }
}

impl Presenter for PhotoGrid {
    fn start_busy(&mut self) {
        info!("Loading photos...");
        self.busy = true;
    }

    fn stop_busy(&mut self) {
        info!("Loading finished");
        self.busy = false;
    }

    fn present(&mut self, images: Vec<RenderableImage>) {
        self.images = images;
        self.thumbnails.clear();
    }

    fn failed(&mut self, _error: &PipelineError) {
        if self.busy {
            warn!("Busy indicator left running after a failed run");
        }
    }
}
