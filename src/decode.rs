//! Texture decoding — turns the `.xpm` paths named by a level descriptor's
//! `NO`/`SO`/`WE`/`EA` directives into decoded [`Texture`]s. No crate in
//! this corpus covers image decoding, so this follows the same
//! hand-rolled, line-oriented parsing idiom as [`crate::level::raw`]
//! rather than reaching for an unrelated dependency.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::world::{Texture, TextureError};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read texture file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: missing XPM header")]
    MissingHeader { path: String },

    #[error("{path}: malformed XPM values line {line:?}")]
    MalformedValues { path: String, line: String },

    #[error("{path}: color key {key:?} used in pixel data has no color table entry")]
    UndefinedColorKey { path: String, key: String },

    #[error("{path}: pixel row has wrong width (expected {expected}, got {got})")]
    RowWidth {
        path: String,
        expected: usize,
        got: usize,
    },

    #[error(transparent)]
    Texture(#[from] TextureError),
}

/// A source of decoded textures, keyed by the path a level descriptor
/// names. Abstracted so tests can supply in-memory textures without
/// touching the filesystem.
pub trait ImageDecoder {
    fn decode(&self, path: &str) -> Result<Texture, DecodeError>;
}

/// Decodes the classic X PixMap text format: a `static char * name[] = {`
/// header, a `"width height ncolors chars_per_pixel"` values line, one
/// line per color-table entry (`"<key> c #RRGGBB"`), then `height` pixel
/// rows of `width * chars_per_pixel` characters.
#[derive(Default)]
pub struct XpmDecoder;

impl ImageDecoder for XpmDecoder {
    fn decode(&self, path: &str) -> Result<Texture, DecodeError> {
        let text = fs::read_to_string(path).map_err(|source| DecodeError::Io {
            path: path.to_string(),
            source,
        })?;
        parse_xpm(&text, path)
    }
}

fn quoted_strings(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter_map(|line| {
        let start = line.find('"')?;
        let rest = &line[start + 1..];
        let end = rest.find('"')?;
        Some(&rest[..end])
    })
}

fn parse_xpm(text: &str, path: &str) -> Result<Texture, DecodeError> {
    let mut strings = quoted_strings(text);

    let values = strings.next().ok_or_else(|| DecodeError::MissingHeader {
        path: path.to_string(),
    })?;
    let mut fields = values.split_whitespace();
    let (width, height, ncolors, chars_per_pixel) = (|| {
        Some((
            fields.next()?.parse::<usize>().ok()?,
            fields.next()?.parse::<usize>().ok()?,
            fields.next()?.parse::<usize>().ok()?,
            fields.next()?.parse::<usize>().ok()?,
        ))
    })()
    .ok_or_else(|| DecodeError::MalformedValues {
        path: path.to_string(),
        line: values.to_string(),
    })?;

    let mut palette: HashMap<String, u32> = HashMap::with_capacity(ncolors);
    for _ in 0..ncolors {
        let line = strings.next().ok_or_else(|| DecodeError::MalformedValues {
            path: path.to_string(),
            line: String::new(),
        })?;
        let key = &line[..chars_per_pixel.min(line.len())];
        let rgb_part = line
            .rsplit('#')
            .next()
            .ok_or_else(|| DecodeError::MalformedValues {
                path: path.to_string(),
                line: line.to_string(),
            })?;
        let hex = &rgb_part[..6.min(rgb_part.len())];
        let rgb = u32::from_str_radix(hex, 16).map_err(|_| DecodeError::MalformedValues {
            path: path.to_string(),
            line: line.to_string(),
        })?;
        palette.insert(key.to_string(), rgb);
    }

    let mut pixels = Vec::with_capacity(width * height);
    for _ in 0..height {
        let row = strings.next().ok_or_else(|| DecodeError::MalformedValues {
            path: path.to_string(),
            line: String::new(),
        })?;
        if row.len() != width * chars_per_pixel {
            return Err(DecodeError::RowWidth {
                path: path.to_string(),
                expected: width * chars_per_pixel,
                got: row.len() / chars_per_pixel.max(1),
            });
        }
        for chunk in row.as_bytes().chunks(chars_per_pixel) {
            let key = std::str::from_utf8(chunk).unwrap_or_default();
            let color = *palette
                .get(key)
                .ok_or_else(|| DecodeError::UndefinedColorKey {
                    path: path.to_string(),
                    key: key.to_string(),
                })?;
            pixels.push(color);
        }
    }

    let side = width.max(height);
    Ok(Texture::new(side, pad_to_square(pixels, width, height, side))?)
}

/// Nearest-power-of-two textures from hand-authored `.cub` assets
/// occasionally arrive non-square; pad with the last column/row repeated
/// rather than rejecting them outright.
fn pad_to_square(pixels: Vec<u32>, width: usize, height: usize, side: usize) -> Vec<u32> {
    if width == side && height == side {
        return pixels;
    }
    let mut out = vec![0u32; side * side];
    for y in 0..side {
        let src_y = y.min(height.saturating_sub(1));
        for x in 0..side {
            let src_x = x.min(width.saturating_sub(1));
            out[y * side + x] = pixels[src_y * width + src_x];
        }
    }
    out
}

/// In-memory decoder backing tests and any future non-filesystem asset
/// source (e.g. bundled test fixtures).
#[derive(Default)]
pub struct FixedDecoder {
    textures: HashMap<String, Texture>,
}

impl FixedDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, texture: Texture) -> &mut Self {
        self.textures.insert(path.into(), texture);
        self
    }
}

impl ImageDecoder for FixedDecoder {
    fn decode(&self, path: &str) -> Result<Texture, DecodeError> {
        self.textures
            .get(path)
            .cloned()
            .ok_or_else(|| DecodeError::MissingHeader {
                path: path.to_string(),
            })
    }
}

/// Resolves a path relative to the directory containing the `.cub` file
/// that named it, matching the original parser's path handling.
pub fn resolve_relative(cub_path: &Path, texture_path: &str) -> std::path::PathBuf {
    match cub_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(texture_path),
        _ => std::path::PathBuf::from(texture_path),
    }
}
