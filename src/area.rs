//! Area specifications as given on the command line, and their conversion into rectangles in
//! the coordinate space of the source image.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Which of the two 9-patch areas a specification describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaKind {
    Stretch,
    Content,
}

impl fmt::Display for AreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaKind::Stretch => f.write_str("stretchable"),
            AreaKind::Content => f.write_str("content"),
        }
    }
}

/// Distances inward from each edge of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    // u64 so that huge user supplied values can't overflow.
    fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }
}

impl fmt::Display for Insets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}-{}", self.top, self.right, self.bottom, self.left)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.width, self.height, self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseAreaError {
    #[error("expected four numbers separated by '-', got {0} part(s)")]
    WrongCount(usize),
    #[error("'{0}' is not a non-negative integer")]
    NotANumber(String),
}

/// Parses `a-b-c-d` into four integers, in order.
fn parse_quad(s: &str) -> std::result::Result<[u32; 4], ParseAreaError> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 4 {
        return Err(ParseAreaError::WrongCount(parts.len()));
    }

    let mut values = [0; 4];
    for (value, part) in values.iter_mut().zip(parts) {
        *value = part
            .trim()
            .parse()
            .map_err(|_| ParseAreaError::NotANumber(part.to_owned()))?;
    }

    Ok(values)
}

impl FromStr for Insets {
    type Err = ParseAreaError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let [top, right, bottom, left] = parse_quad(s)?;
        Ok(Insets {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl FromStr for Rectangle {
    type Err = ParseAreaError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let [x, y, width, height] = parse_quad(s)?;
        Ok(Rectangle {
            x,
            y,
            width,
            height,
        })
    }
}

/// How the user described one of the areas: either implicitly by insets, or as an explicit
/// rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaSpec {
    Insets(Insets),
    Rect(Rectangle),
}

impl AreaSpec {
    /// Turns the specification into an absolute rectangle within an image of the given size.
    ///
    /// Insets `(top, right, bottom, left)` become `(left, top, width - right - left, height -
    /// top - bottom)`; rectangles are taken verbatim. Either way the result has to be non-empty
    /// and lie entirely within the image.
    pub fn to_rect(&self, kind: AreaKind, (width, height): (u32, u32)) -> Result<Rectangle> {
        let rect = match *self {
            AreaSpec::Rect(rect) => rect,
            AreaSpec::Insets(insets) => {
                let too_large = || Error::InsetsTooLarge {
                    kind,
                    insets,
                    width,
                    height,
                };
                Rectangle {
                    x: insets.left,
                    y: insets.top,
                    width: width
                        .checked_sub(insets.right)
                        .and_then(|w| w.checked_sub(insets.left))
                        .ok_or_else(too_large)?,
                    height: height
                        .checked_sub(insets.top)
                        .and_then(|h| h.checked_sub(insets.bottom))
                        .ok_or_else(too_large)?,
                }
            }
        };

        // An empty area would make the marker run backwards.
        if rect.width == 0
            || rect.height == 0
            || rect.right() > width as u64
            || rect.bottom() > height as u64
        {
            return Err(Error::InvalidArea {
                kind,
                rect,
                width,
                height,
            });
        }

        Ok(rect)
    }
}
