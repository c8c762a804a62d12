//! Image loading for the window icon and the in-window logo.
//!
//! Any failure (missing file, unreadable file, undecodable bytes) is logged
//! and turned into `None`; the window simply shows no image.

use std::fs;
use std::path::Path;

use eframe::egui::{self, ColorImage, IconData, TextureHandle, TextureOptions, Vec2, vec2};

use crate::error::{AppError, Result};

/// An RGBA8 image decoded from disk.
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn into_icon(self) -> IconData {
        IconData {
            rgba: self.rgba,
            width: self.width,
            height: self.height,
        }
    }

    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.width as usize, self.height as usize],
            &self.rgba,
        )
    }
}

pub fn decode_image(path: &Path) -> Result<DecodedImage> {
    let bytes = fs::read(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image::load_from_memory(&bytes)
        .map_err(|source| AppError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    Ok(DecodedImage {
        width: image.width(),
        height: image.height(),
        rgba: image.into_raw(),
    })
}

fn decode_optional(path: Option<&Path>) -> Option<DecodedImage> {
    let path = path?;
    match decode_image(path) {
        Ok(image) => Some(image),
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}

/// Window / taskbar icon.
pub fn load_icon(path: Option<&Path>) -> Option<IconData> {
    decode_optional(path).map(DecodedImage::into_icon)
}

/// Upload the logo as a texture shared by the title bar and identity column.
pub fn load_logo(ctx: &egui::Context, path: Option<&Path>) -> Option<TextureHandle> {
    let image = decode_optional(path)?;
    Some(ctx.load_texture("logo", image.to_color_image(), TextureOptions::LINEAR))
}

/// Largest size with `size`'s aspect ratio that fits inside `bound`.
pub fn fit_within(size: Vec2, bound: Vec2) -> Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (bound.x / size.x).min(bound.y / size.y);
    size * scale
}

/// Scale `size` to exactly `height`, keeping the aspect ratio.
pub fn fit_height(size: Vec2, height: f32) -> Vec2 {
    if size.y <= 0.0 {
        return Vec2::ZERO;
    }
    vec2(size.x * height / size.y, height)
}
