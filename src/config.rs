//! Application-wide configuration constants.

pub const NAME: &str = concat!("Photo Grid ", env!("CARGO_PKG_VERSION"));
/// Config file looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "photo_grid.toml";
/// Width the grid is laid out for.
pub const GRID_WIDTH: f32 = 720.0;
/// Number of columns in the grid.
pub const GRID_COLUMNS: usize = 5;
/// Space between cells.
pub const CELL_BORDER: f32 = 8.0;
/// Space between the outer cells and the grid edge.
pub const EDGE_MARGIN: f32 = 24.0;
/// Number of rendered thumbnails to keep.
pub const THUMBNAIL_CACHE_SIZE: usize = 64;
