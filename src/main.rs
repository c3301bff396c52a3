mod config;
mod error;
mod grid;
mod prelude;

use crate::prelude::*;

/// Config from the path given on the command line, else `photo_grid.toml`
/// in the working directory if there is one, else the built-in defaults.
fn load_config(arg: Option<PathBuf>) -> Result<PipelineConfig, AppError> {
    let path = arg.or_else(|| {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        local.is_file().then_some(local)
    });

    match path {
        Some(path) => {
            info!("Using config {}", path.display());
            Ok(PipelineConfig::load(&path)?)
        }
        None => {
            debug!("No config file, using defaults");
            Ok(PipelineConfig::default())
        }
    }
}

fn print_grid(grid: &mut PhotoGrid, layout: GridLayout) {
    let count = grid.item_count();
    for (row_idx, start) in (0..count).step_by(layout.columns).enumerate() {
        let end = (start + layout.columns).min(count);
        let cells: Vec<String> = (start..end)
            .filter_map(|idx| {
                let id = grid.images()[idx].photo_id;
                grid.cell(idx, layout.cell_size)
                    .map(|thumb| format!("#{} {}x{}", id, thumb.width(), thumb.height()))
            })
            .collect();
        info!("row {}: {}", row_idx, cells.join(" | "));
    }
}

fn run() -> Result<(), AppError> {
    let config = load_config(std::env::args().nth(1).map(PathBuf::from))?;
    info!(
        "Showing the first {} photos from {}",
        config.prefix_limit, config.endpoint
    );

    let pipeline = Pipeline::new(config)?;
    let mut grid = PhotoGrid::new(THUMBNAIL_CACHE_SIZE);
    let report = pipeline.run(&mut grid);
    let count = report.result?;

    let layout = GridLayout::for_width(GRID_WIDTH);
    info!(
        "{} photos in {} columns of {}px cells",
        count, layout.columns, layout.cell_size
    );
    print_grid(&mut grid, layout);
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .init();

    info!("Initialising {}...", NAME);

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
