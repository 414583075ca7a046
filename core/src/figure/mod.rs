//! Multi-panel comparison figure
//!
//! One row of grayscale panels under a figure title, written as PNG. Each
//! panel is windowed to `[0, 4 * mean]` of its own frame so that isolated
//! bright spikes saturate while low-level spurious noise stays visible.

mod text;

use crate::error::{Result, SpurNoiseError};
use crate::types::PixelFrame;
use image::imageops::{self, FilterType};
use image::{GrayImage, ImageFormat, Luma};
use std::path::Path;

pub use text::{draw_text, draw_text_centered, fit_text, text_width};

/// Canvas size: 10 x 3 inches at 300 dpi
pub const FIGURE_WIDTH: u32 = 3000;
pub const FIGURE_HEIGHT: u32 = 900;

/// Upper display bound as a multiple of the frame mean
pub const WINDOW_MEAN_FACTOR: f64 = 4.0;

const MARGIN: u32 = 30;
const GAP: u32 = 15;
const TITLE_SCALE: u32 = 4;
const PANEL_TITLE_SCALE: u32 = 3;

const BACKGROUND: Luma<u8> = Luma([255]);
const INK: Luma<u8> = Luma([0]);

/// One image with its caption
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub frame: PixelFrame,
}

/// Row of `slots` panels under a common title
#[derive(Debug, Clone)]
pub struct SpurNoiseFigure {
    title: String,
    slots: usize,
    panels: Vec<Panel>,
}

impl SpurNoiseFigure {
    pub fn new(title: impl Into<String>, slots: usize) -> Self {
        Self {
            title: title.into(),
            slots,
            panels: Vec::new(),
        }
    }

    pub fn add_panel(&mut self, title: impl Into<String>, frame: PixelFrame) {
        self.panels.push(Panel {
            title: title.into(),
            frame,
        });
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Renders the figure
    ///
    /// Slots without a panel stay blank.
    ///
    /// # Errors
    ///
    /// Fails when there are no slots or more panels than slots.
    pub fn render(&self) -> Result<GrayImage> {
        if self.panels.len() > self.slots {
            return Err(SpurNoiseError::Render(format!(
                "{} images do not fit in {} panels",
                self.panels.len(),
                self.slots
            )));
        }

        let mut canvas = GrayImage::from_pixel(FIGURE_WIDTH, FIGURE_HEIGHT, BACKGROUND);
        draw_text_centered(
            &mut canvas,
            &self.title,
            FIGURE_WIDTH as i64 / 2,
            MARGIN as i64,
            FIGURE_WIDTH - 2 * MARGIN,
            TITLE_SCALE,
            INK,
        );

        let panel_width = panel_width(self.slots)?;
        let panel_top = MARGIN + text::GLYPH_SIZE * TITLE_SCALE + MARGIN;
        let image_top = panel_top + text::GLYPH_SIZE * PANEL_TITLE_SCALE + GAP;
        let image_height = FIGURE_HEIGHT.saturating_sub(image_top + MARGIN);

        for (idx, panel) in self.panels.iter().enumerate() {
            let left = MARGIN + idx as u32 * (panel_width + MARGIN);
            let center_x = (left + panel_width / 2) as i64;
            draw_text_centered(
                &mut canvas,
                &panel.title,
                center_x,
                panel_top as i64,
                panel_width,
                PANEL_TITLE_SCALE,
                INK,
            );

            if let Some(image) = fit_to_box(&window_frame(&panel.frame), panel_width, image_height) {
                let x = center_x - image.width() as i64 / 2;
                imageops::overlay(&mut canvas, &image, x, image_top as i64);
            }
        }

        Ok(canvas)
    }

    /// Renders the figure and writes it as PNG
    pub fn save(&self, path: &Path) -> Result<()> {
        self.render()?.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

/// Width of one of `slots` panels laid out side by side
///
/// # Errors
///
/// Fails when there are no slots or a panel would be narrower than one pixel.
fn panel_width(slots: usize) -> Result<u32> {
    let too_many = || {
        SpurNoiseError::Render(format!(
            "{} panels do not fit in a {} pixel wide figure",
            slots, FIGURE_WIDTH
        ))
    };
    if slots == 0 {
        return Err(SpurNoiseError::Render(
            "figure needs at least one panel slot".to_string(),
        ));
    }
    let count = u32::try_from(slots).map_err(|_| too_many())?;
    let margins = count
        .checked_add(1)
        .and_then(|gaps| gaps.checked_mul(MARGIN))
        .ok_or_else(too_many)?;
    let width = FIGURE_WIDTH.checked_sub(margins).ok_or_else(too_many)? / count;
    if width == 0 {
        return Err(too_many());
    }
    Ok(width)
}

/// Maps a sample to 8 bits within the display window `[0, vmax]`
///
/// A non-positive `vmax` maps everything to black.
pub fn window_intensity(value: f64, vmax: f64) -> u8 {
    if vmax <= 0.0 || !vmax.is_finite() {
        return 0;
    }
    ((value / vmax).clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Converts a frame to 8 bits using its own `[0, 4 * mean]` window
pub fn window_frame(frame: &PixelFrame) -> GrayImage {
    let vmax = WINDOW_MEAN_FACTOR * frame.mean();
    GrayImage::from_fn(frame.columns, frame.rows, |x, y| {
        let value = frame.get(y, x).unwrap_or(0.0) as f64;
        Luma([window_intensity(value, vmax)])
    })
}

/// Scales `image` to fit inside `width` x `height`, keeping its aspect ratio
fn fit_to_box(image: &GrayImage, width: u32, height: u32) -> Option<GrayImage> {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 || width == 0 || height == 0 {
        return None;
    }
    let scale = (width as f64 / w as f64).min(height as f64 / h as f64);
    let new_w = ((w as f64 * scale).floor() as u32).max(1);
    let new_h = ((h as f64 * scale).floor() as u32).max(1);
    Some(imageops::resize(image, new_w, new_h, FilterType::Triangle))
}
