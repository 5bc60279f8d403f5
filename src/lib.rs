//! Turns plain images into 9-patch images: the image gets a 1 pixel transparent border, with black
//! markers on the top and left edges showing which part of it may be stretched, and markers on
//! the right and bottom edges showing where content placed on top of it should go.

pub mod area;
pub mod cli;
pub mod error;
pub mod patch;

use area::AreaKind;
use cli::Config;
use patch::NinePatch;

pub use error::{Error, Result};

/// Reads `config.input`, adds the 9-patch border and writes the result to `config.output`.
pub fn convert(config: &Config) -> Result<NinePatch> {
    let size = image::image_dimensions(&config.input)?;
    log::info!("{} is {}x{}", config.input.display(), size.0, size.1);

    let stretch = config.stretch.to_rect(AreaKind::Stretch, size)?;
    let content = config.content.to_rect(AreaKind::Content, size)?;
    log::info!("stretchable area: {stretch}");
    log::info!("content area: {content}");

    let patch = NinePatch::new(size, stretch, content);
    let source = image::open(&config.input)?.to_rgba8();
    let output = patch.compose(&source);

    patch::save_png(&output, &config.output)?;
    log::info!(
        "wrote {}x{} image to {}",
        output.width(),
        output.height(),
        config.output.display()
    );

    Ok(patch)
}
