//! Swatch-strip image export.
//!
//! A palette renders as a horizontal strip of fixed-size square swatches
//! on a white background, each labeled with its uppercase hex value. The
//! layout is first built as a vector description (also emittable as
//! SVG), then rasterized to PNG. Labels use an embedded 5×7 glyph set
//! covering the hex charset, scaled up to the label font size.

use std::io::Cursor;

use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::PaletteError;
use crate::models::{Palette, RgbColor};

/// Edge length of one square swatch, in pixels.
pub const SWATCH_SIZE: u32 = 150;

/// Padding around and between swatches.
pub const SWATCH_PADDING: u32 = 20;

/// Vertical space reserved below the swatches for labels.
pub const LABEL_BAND: u32 = 40;

/// Swatch corner radius in the vector description.
const CORNER_RADIUS: u32 = 8;

/// Label glyphs are 5×7 pixels drawn at this scale.
const GLYPH_SCALE: u32 = 2;
const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character, including spacing.
const GLYPH_ADVANCE: u32 = (GLYPH_WIDTH + 1) * GLYPH_SCALE;

/// Label ink color (dark gray, as on the reference card).
const LABEL_COLOR: Rgba<u8> = Rgba([0x33, 0x33, 0x33, 0xFF]);
const BACKGROUND: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);

/// One positioned swatch in the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    /// Left edge of the square
    pub x: u32,
    /// Fill color
    pub color: RgbColor,
    /// Uppercase hex label drawn beneath the square
    pub label: String,
}

/// The laid-out strip: a pure description of geometry and colors,
/// independent of any raster or vector backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchStrip {
    /// Canvas width: `n * size + (n + 1) * padding`
    pub width: u32,
    /// Canvas height: `size + 2 * padding + label band`
    pub height: u32,
    swatches: Vec<Swatch>,
}

impl SwatchStrip {
    /// Lays out the flattened colors of a palette.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPaletteExport`] when the palette
    /// contains zero colors; a zero-width canvas is not a useful export.
    pub fn from_palette(palette: &Palette) -> Result<Self, PaletteError> {
        let colors: Vec<RgbColor> = palette.flattened_colors().map(|c| c.hex).collect();
        if colors.is_empty() {
            return Err(PaletteError::EmptyPaletteExport);
        }

        let count = colors.len() as u32;
        let width = count * SWATCH_SIZE + (count + 1) * SWATCH_PADDING;
        let height = SWATCH_SIZE + 2 * SWATCH_PADDING + LABEL_BAND;

        let swatches = colors
            .into_iter()
            .enumerate()
            .map(|(i, color)| Swatch {
                x: SWATCH_PADDING + i as u32 * (SWATCH_SIZE + SWATCH_PADDING),
                label: color.to_hex(),
                color,
            })
            .collect();

        Ok(Self {
            width,
            height,
            swatches,
        })
    }

    /// The laid-out swatches, left to right.
    #[must_use]
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Renders the strip as an SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\" \
             style=\"background-color: #ffffff; font-family: sans-serif;\">",
            self.width, self.height
        );
        for swatch in &self.swatches {
            svg.push_str(&format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{SWATCH_SIZE}\" height=\"{SWATCH_SIZE}\" \
                 fill=\"{}\" rx=\"{CORNER_RADIUS}\"/>",
                swatch.x, SWATCH_PADDING, swatch.color
            ));
            svg.push_str(&format!(
                "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"14\" \
                 fill=\"#333\">{}</text>",
                swatch.x + SWATCH_SIZE / 2,
                self.height - SWATCH_PADDING,
                swatch.label
            ));
        }
        svg.push_str("</svg>");
        svg
    }

    /// Rasterizes the strip to an RGBA image.
    #[must_use]
    pub fn rasterize(&self) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(self.width, self.height, BACKGROUND);

        for swatch in &self.swatches {
            fill_rounded_square(
                &mut img,
                swatch.x,
                SWATCH_PADDING,
                SWATCH_SIZE,
                CORNER_RADIUS,
                Rgba([swatch.color.r, swatch.color.g, swatch.color.b, 0xFF]),
            );

            let text_width = swatch.label.len() as u32 * GLYPH_ADVANCE - GLYPH_SCALE;
            let text_x = swatch.x + SWATCH_SIZE / 2 - text_width / 2;
            let text_y = self.height - SWATCH_PADDING - GLYPH_HEIGHT * GLYPH_SCALE;
            draw_label(&mut img, text_x, text_y, &swatch.label);
        }

        img
    }

    /// Rasterizes and encodes the strip as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let img = self.rasterize();
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, ImageFormat::Png)
            .context("Failed to encode swatch strip as PNG")?;
        Ok(bytes.into_inner())
    }
}

/// Fills an axis-aligned square with rounded corners.
fn fill_rounded_square(
    img: &mut RgbaImage,
    left: u32,
    top: u32,
    size: u32,
    radius: u32,
    fill: Rgba<u8>,
) {
    let r = radius as i64;
    for dy in 0..size {
        for dx in 0..size {
            let x = dx as i64;
            let y = dy as i64;
            let edge = size as i64 - 1;

            // Distance to the nearest corner circle center, if inside a corner box
            let cx = if x < r {
                Some(r)
            } else if x > edge - r {
                Some(edge - r)
            } else {
                None
            };
            let cy = if y < r {
                Some(r)
            } else if y > edge - r {
                Some(edge - r)
            } else {
                None
            };
            if let (Some(cx), Some(cy)) = (cx, cy) {
                let dx2 = (x - cx) * (x - cx);
                let dy2 = (y - cy) * (y - cy);
                if dx2 + dy2 > r * r {
                    continue;
                }
            }

            img.put_pixel(left + dx, top + dy, fill);
        }
    }
}

/// Draws an uppercase hex label at the given top-left position.
fn draw_label(img: &mut RgbaImage, x: u32, y: u32, text: &str) {
    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = glyph(ch) else { continue };
        let origin_x = x + i as u32 * GLYPH_ADVANCE;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0b10000 >> col) == 0 {
                    continue;
                }
                for sy in 0..GLYPH_SCALE {
                    for sx in 0..GLYPH_SCALE {
                        let px = origin_x + col * GLYPH_SCALE + sx;
                        let py = y + row as u32 * GLYPH_SCALE + sy;
                        if px < img.width() && py < img.height() {
                            img.put_pixel(px, py, LABEL_COLOR);
                        }
                    }
                }
            }
        }
    }
}

/// 5×7 bitmap rows for the hex-label charset (row bits left to right).
const fn glyph(ch: char) -> Option<[u8; 7]> {
    Some(match ch {
        '#' => [0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(hex: &str) -> RgbColor {
        RgbColor::from_hex(hex).unwrap()
    }

    fn three_color_palette() -> Palette {
        Palette::single_group(
            "Strip",
            "Main",
            [rgb("#112233"), rgb("#445566"), rgb("#AABBCC")],
        )
    }

    #[test]
    fn test_layout_dimensions() {
        let strip = SwatchStrip::from_palette(&three_color_palette()).unwrap();
        // 3 * 150 + 4 * 20
        assert_eq!(strip.width, 530);
        // 150 + 2 * 20 + 40
        assert_eq!(strip.height, 230);
        assert_eq!(strip.swatches().len(), 3);
    }

    #[test]
    fn test_swatch_positions_and_labels() {
        let strip = SwatchStrip::from_palette(&three_color_palette()).unwrap();
        let xs: Vec<u32> = strip.swatches().iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![20, 190, 360]);
        assert_eq!(strip.swatches()[2].label, "#AABBCC");
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        assert!(matches!(
            SwatchStrip::from_palette(&Palette::new()),
            Err(PaletteError::EmptyPaletteExport)
        ));

        // Groups alone are not enough; the strip needs colors
        let mut palette = Palette::new();
        palette.groups.push(crate::models::Group::new("Empty"));
        assert!(SwatchStrip::from_palette(&palette).is_err());
    }

    #[test]
    fn test_svg_contains_all_swatches() {
        let strip = SwatchStrip::from_palette(&three_color_palette()).unwrap();
        let svg = strip.to_svg();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<rect").count(), 3);
        assert_eq!(svg.matches("<text").count(), 3);
        assert!(svg.contains("#112233"));
        assert!(svg.contains("text-anchor=\"middle\""));
    }

    #[test]
    fn test_raster_fills_swatch_centers() {
        let strip = SwatchStrip::from_palette(&three_color_palette()).unwrap();
        let img = strip.rasterize();
        assert_eq!(img.dimensions(), (530, 230));

        // Center of the first swatch carries its fill color
        let center = img.get_pixel(20 + 75, SWATCH_PADDING + 75);
        assert_eq!(center.0, [0x11, 0x22, 0x33, 0xFF]);

        // Padding area stays white
        assert_eq!(img.get_pixel(5, 5).0, [0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_raster_corners_are_rounded() {
        let strip = SwatchStrip::from_palette(&three_color_palette()).unwrap();
        let img = strip.rasterize();
        // The very corner pixel of the first swatch square is outside the
        // rounded outline, so it keeps the background color
        assert_eq!(
            img.get_pixel(20, SWATCH_PADDING).0,
            [0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn test_label_band_has_ink() {
        let strip = SwatchStrip::from_palette(&three_color_palette()).unwrap();
        let img = strip.rasterize();
        let band_top = SWATCH_SIZE + 2 * SWATCH_PADDING;
        let ink = img
            .enumerate_pixels()
            .filter(|(_, y, p)| *y >= band_top && p.0 == [0x33, 0x33, 0x33, 0xFF])
            .count();
        assert!(ink > 0, "no label pixels drawn");
    }

    #[test]
    fn test_png_encoding_produces_png_magic() {
        let strip = SwatchStrip::from_palette(&three_color_palette()).unwrap();
        let png = strip.to_png().unwrap();
        assert_eq!(&png[0..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_every_hex_char_has_a_glyph() {
        for ch in "#0123456789ABCDEF".chars() {
            assert!(glyph(ch).is_some(), "missing glyph for {ch}");
        }
        assert!(glyph('Z').is_none());
    }
}
