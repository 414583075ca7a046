use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{GrayImage, Luma};

/// Glyph cell size of the bitmap font, in pixels
pub const GLYPH_SIZE: u32 = 8;

const ELLIPSIS: &str = "...";

/// Width of `text` drawn at `scale`
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_SIZE * scale
}

/// Shortens `text` so it fits in `max_width`, ending it with `...`
pub fn fit_text(text: &str, max_width: u32, scale: u32) -> String {
    let max_chars = (max_width / (GLYPH_SIZE * scale)) as usize;
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_string();
    }
    if max_chars <= ELLIPSIS.len() {
        return text.chars().take(max_chars).collect();
    }
    let mut fitted: String = text.chars().take(max_chars - ELLIPSIS.len()).collect();
    fitted.push_str(ELLIPSIS);
    fitted
}

/// Draws `text` with its top-left corner at (`x`, `y`)
///
/// Characters outside printable ASCII are drawn as `?`. Pixels falling
/// outside the canvas are dropped.
pub fn draw_text(canvas: &mut GrayImage, text: &str, x: i64, y: i64, scale: u32, color: Luma<u8>) {
    let scale = scale.max(1) as i64;
    for (idx, c) in text.chars().enumerate() {
        let c = if c.is_ascii() && !c.is_ascii_control() { c } else { '?' };
        let Some(glyph) = BASIC_FONTS.get(c) else {
            continue;
        };
        let origin_x = x + idx as i64 * GLYPH_SIZE as i64 * scale;
        for (row, &bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                if (bits >> col) & 1 == 0 {
                    continue;
                }
                let px = origin_x + col as i64 * scale;
                let py = y + row as i64 * scale;
                fill_block(canvas, px, py, scale, color);
            }
        }
    }
}

/// Draws `text` horizontally centred on `center_x`, shortened to `max_width`
pub fn draw_text_centered(
    canvas: &mut GrayImage,
    text: &str,
    center_x: i64,
    y: i64,
    max_width: u32,
    scale: u32,
    color: Luma<u8>,
) {
    let fitted = fit_text(text, max_width, scale);
    let x = center_x - text_width(&fitted, scale) as i64 / 2;
    draw_text(canvas, &fitted, x, y, scale, color);
}

fn fill_block(canvas: &mut GrayImage, x: i64, y: i64, size: i64, color: Luma<u8>) {
    let (width, height) = canvas.dimensions();
    for dy in 0..size {
        for dx in 0..size {
            let (px, py) = (x + dx, y + dy);
            if px >= 0 && py >= 0 && px < width as i64 && py < height as i64 {
                canvas.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}
