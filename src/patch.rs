//! Building the 9-patch image: the source image surrounded by a 1 pixel transparent border, with
//! black markers along the border showing where the image stretches and where its content goes.

use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{imageops, GenericImageView, Rgba, RgbaImage};
use imageproc::drawing::draw_line_segment_mut;

use crate::area::Rectangle;
use crate::error::Result;

pub const MARKER_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Left,
    Right,
    Bottom,
}

/// A straight run of marker pixels along one edge of the canvas, from `start` to `end`
/// inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub edge: Edge,
    pub start: (u32, u32),
    pub end: (u32, u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NinePatch {
    /// Size of the source image.
    pub size: (u32, u32),
    pub stretch: Rectangle,
    pub content: Rectangle,
}

fn horizontal_marker(edge: Edge, y: u32, area: Rectangle) -> Marker {
    Marker {
        edge,
        start: (area.x + 1, y),
        end: (area.x + area.width, y),
    }
}

fn vertical_marker(edge: Edge, x: u32, area: Rectangle) -> Marker {
    Marker {
        edge,
        start: (x, area.y + 1),
        end: (x, area.y + area.height),
    }
}

impl NinePatch {
    pub fn new(size: (u32, u32), stretch: Rectangle, content: Rectangle) -> Self {
        NinePatch {
            size,
            stretch,
            content,
        }
    }

    /// The source plus a pixel of border on every side.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.size.0 + 2, self.size.1 + 2)
    }

    /// The top and left markers cover the stretchable area, the right and bottom markers the
    /// content area; all in canvas coordinates.
    pub fn markers(&self) -> [Marker; 4] {
        let (width, height) = self.canvas_size();
        [
            horizontal_marker(Edge::Top, 0, self.stretch),
            vertical_marker(Edge::Left, 0, self.stretch),
            vertical_marker(Edge::Right, width - 1, self.content),
            horizontal_marker(Edge::Bottom, height - 1, self.content),
        ]
    }

    pub fn compose(&self, source: &impl GenericImageView<Pixel = Rgba<u8>>) -> RgbaImage {
        let (width, height) = self.canvas_size();
        // `new` zeroes everything, so the border starts out fully transparent.
        let mut canvas = RgbaImage::new(width, height);
        imageops::replace(&mut canvas, source, 1, 1);

        for marker in self.markers() {
            log::debug!("drawing {:?}", marker);
            draw_line_segment_mut(
                &mut canvas,
                (marker.start.0 as f32, marker.start.1 as f32),
                (marker.end.0 as f32, marker.end.1 as f32),
                MARKER_COLOR,
            );
        }

        canvas
    }
}

/// Writes `image` as a PNG to `path`.
///
/// The data goes to a temporary file next to `path` first, which is renamed into place once it's
/// complete. If anything fails the temporary file is deleted, so `path` is never left half written.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut builder = tempfile::Builder::new();
    // tempfile defaults to 0600; ask for what a plain create would give, the umask still applies.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut file = builder.tempfile_in(dir)?;

    {
        let mut writer = BufWriter::new(file.as_file_mut());
        image.write_with_encoder(PngEncoder::new(&mut writer))?;
        writer.flush()?;
    }

    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}
