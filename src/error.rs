use std::path::PathBuf;

use crate::area::{AreaKind, Insets, Rectangle};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error("input file {} does not exist", .0.display())]
    FileNotFound(PathBuf),

    #[error("{kind} insets {insets} leave no room inside the {width}x{height} image")]
    InsetsTooLarge {
        kind: AreaKind,
        insets: Insets,
        width: u32,
        height: u32,
    },

    #[error("{kind} area {rect} does not fit inside the {width}x{height} image")]
    InvalidArea {
        kind: AreaKind,
        rect: Rectangle,
        width: u32,
        height: u32,
    },

    #[error("image library error: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the usage text should be printed after the message.
    pub fn wants_usage(&self) -> bool {
        matches!(self, Error::Usage(_))
    }
}
