//! The palette step that turns escape counts into pixels.  Each
//! scheme is a pure map from a normalized escape value in [0, 1] to
//! an RGB color; the set of schemes is closed and known at build
//! time, so a view state selects one by index.  `render_field` is the
//! whole of the crate's output surface: it hands back raw RGB bytes
//! for the presentation layer to write wherever it likes.

use field::IterationGrid;
use num::clamp;

/// An 8-bit RGB color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// The fixed list of palettes, in index order.
pub const SCHEMES: [ColorScheme; 7] = [
    ColorScheme::Grayscale,
    ColorScheme::BlueTint,
    ColorScheme::DeepBlue,
    ColorScheme::Orchid,
    ColorScheme::Sulfur,
    ColorScheme::Fire,
    ColorScheme::Terrain,
];

/// One of the built-in palettes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColorScheme {
    /// Plain luminance ramp from black to white.
    Grayscale,
    /// Luminance ramp over a blue base.
    BlueTint,
    /// Luminance ramp over a darker blue base.
    DeepBlue,
    /// Square-root red against squared green over blue; purples in
    /// the midtones.
    Orchid,
    /// Black through yellow to white.
    Sulfur,
    /// Black through red and orange to white.
    Fire,
    /// Deep blue shoreline through sand to green highlands.
    Terrain,
}

/// Scales a unit channel value into [0, 255].
fn level(x: f64) -> f64 {
    x * 255.0
}

/// Converts a channel value to a byte, saturating rather than
/// wrapping; a few of the offset ramps run to 256 at full value.
fn channel(x: f64) -> u8 {
    clamp(x, 0.0, 255.0) as u8
}

impl ColorScheme {
    /// Looks a palette up by index, wrapping around the list so any
    /// persisted index is usable.
    pub fn from_index(index: u32) -> ColorScheme {
        SCHEMES[(index as usize) % SCHEMES.len()]
    }

    /// Maps a normalized escape value in [0, 1] to a color.
    pub fn apply(&self, value: f64) -> Rgb {
        match *self {
            ColorScheme::Grayscale => {
                let c = channel(level(value));
                Rgb { r: c, g: c, b: c }
            }
            ColorScheme::BlueTint => Rgb {
                r: channel(level(value)),
                g: channel(level(value)),
                b: channel(128.0 + value * 128.0),
            },
            ColorScheme::DeepBlue => Rgb {
                r: channel(level(value)),
                g: channel(level(value)),
                b: channel(64.0 + value * 192.0),
            },
            ColorScheme::Orchid => Rgb {
                r: channel(level(value.sqrt())),
                g: channel(level(value * value)),
                b: channel(128.0 + value * 128.0),
            },
            ColorScheme::Sulfur => {
                if value <= 0.5 {
                    Rgb {
                        r: channel(level(value * 2.0)),
                        g: channel(level(value * 2.0)),
                        b: 0,
                    }
                } else {
                    Rgb {
                        r: 255,
                        g: 255,
                        b: channel(level((value - 0.5) * 2.0)),
                    }
                }
            }
            ColorScheme::Fire => {
                if value <= 0.25 {
                    Rgb {
                        r: channel(level(value * 4.0)),
                        g: 0,
                        b: 0,
                    }
                } else if value <= 0.75 {
                    Rgb {
                        r: 255,
                        g: channel(level((value - 0.25) * 2.0)),
                        b: 0,
                    }
                } else {
                    Rgb {
                        r: 255,
                        g: 255,
                        b: channel(level((value - 0.75) * 4.0)),
                    }
                }
            }
            ColorScheme::Terrain => {
                if value <= 0.25 {
                    Rgb {
                        r: 0,
                        g: 0,
                        b: channel(64.0 + value * 4.0 * 192.0),
                    }
                } else if value <= 0.5 {
                    let x = (value - 0.25) * 4.0;
                    Rgb {
                        r: channel(x * 192.0),
                        g: channel(x * 192.0),
                        b: channel(255.0 - x * 255.0),
                    }
                } else {
                    let x = (value - 0.5) * 2.0;
                    Rgb {
                        r: channel(192.0 - x * 192.0),
                        g: 192,
                        b: 0,
                    }
                }
            }
        }
    }
}

/// Colors an iteration grid: each count is normalized against the
/// iteration budget and run through the palette, producing a packed
/// row-major RGB byte buffer, three bytes per pixel.
pub fn render_field(grid: &IterationGrid, max_iterations: u32, scheme: ColorScheme) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(grid.len() * 3);
    for &count in grid.values() {
        let value = f64::from(count) / f64::from(max_iterations);
        let color = scheme.apply(value);
        pixels.push(color.r);
        pixels.push(color.g);
        pixels.push(color.b);
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use field::compute_field;
    use num::Complex;
    use viewport::{ScreenRect, ViewState};

    #[test]
    fn grayscale_spans_black_to_white() {
        assert_eq!(
            ColorScheme::Grayscale.apply(0.0),
            Rgb { r: 0, g: 0, b: 0 }
        );
        assert_eq!(
            ColorScheme::Grayscale.apply(1.0),
            Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        );
    }

    #[test]
    fn offset_ramps_saturate_instead_of_wrapping() {
        // 128 + 128 and 64 + 192 both run to 256 at full value.
        assert_eq!(ColorScheme::BlueTint.apply(1.0).b, 255);
        assert_eq!(ColorScheme::DeepBlue.apply(1.0).b, 255);
        assert_eq!(ColorScheme::Terrain.apply(0.25).b, 255);
    }

    #[test]
    fn piecewise_ramps_meet_at_their_seams() {
        assert_eq!(ColorScheme::Sulfur.apply(0.5), Rgb { r: 255, g: 255, b: 0 });
        assert_eq!(ColorScheme::Fire.apply(0.25), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(ColorScheme::Fire.apply(1.0), Rgb { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn index_lookup_wraps_around() {
        assert_eq!(ColorScheme::from_index(0), ColorScheme::Grayscale);
        assert_eq!(ColorScheme::from_index(6), ColorScheme::Terrain);
        assert_eq!(ColorScheme::from_index(7), ColorScheme::Grayscale);
        assert_eq!(ColorScheme::from_index(13), ColorScheme::Terrain);
    }

    #[test]
    fn rendering_packs_three_bytes_per_pixel() {
        let view = ViewState::new(Complex::new(-0.5, 0.0), 4.0, 50, 0).unwrap();
        let grid = compute_field(&view, ScreenRect::new(16, 12)).unwrap();
        let pixels = render_field(&grid, view.max_iterations, ColorScheme::Grayscale);
        assert_eq!(pixels.len(), 16 * 12 * 3);
    }

    #[test]
    fn interior_pixels_render_at_full_value() {
        let view = ViewState::new(Complex::new(-0.5, 0.0), 4.0, 50, 0).unwrap();
        let grid = compute_field(&view, ScreenRect::new(8, 8)).unwrap();
        // The grid center sits on the view position, inside the main
        // cardioid, so its normalized value is exactly 1.
        let center = 4 + 4 * 8;
        let pixels = render_field(&grid, view.max_iterations, ColorScheme::Grayscale);
        assert_eq!(pixels[center * 3], 255);
    }
}
