//! Contains the Viewport struct, which describes the relationship
//! between a rectangle of screen pixels with an origin at 0,0 and a
//! rectangle on the complex plane centered on a view position.  Both
//! the render sweep and the zoom commit go through it: pixels map
//! forward to complex points, and a committed selection maps back to
//! a new view.

use bounds::{Bounds, Point};
use num::Complex;

/// A configuration problem detected at a construction boundary.  The
/// per-pixel loops assume validated inputs and never raise; anything
/// wrong with a view or a screen rect is caught here instead.
#[derive(Debug, Fail, PartialEq)]
pub enum ConfigError {
    /// The view's world-space width was zero, negative, or not a
    /// number.
    #[fail(display = "view scale must be positive, got {}", _0)]
    InvalidScale(f64),
    /// The iteration budget was zero.
    #[fail(display = "iteration budget must be at least 1")]
    ZeroIterationBudget,
    /// The target raster had no pixels.
    #[fail(display = "screen rect must have nonzero area, got {}x{}", _0, _1)]
    EmptyScreen(usize, usize),
}

/// What the user is looking at: a center position on the complex
/// plane, the world-space width of the visible region, the per-pixel
/// iteration budget, and which palette to color with.  Never mutated
/// in place; zooming derives a fresh value via `with_pos_and_scale`.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// World-space center of the visible region.
    pub position: Complex<f64>,
    /// World-space width of the visible region.  The visible height
    /// follows from the screen's aspect ratio.
    pub scale: f64,
    /// Iteration budget handed to the escape-time loop.
    pub max_iterations: u32,
    /// Index into the palette list, already reduced modulo the number
    /// of palettes.
    pub color_scheme: u32,
}

impl ViewState {
    /// Constructor.  Rejects non-positive (or NaN) scale and a zero
    /// iteration budget, so the numeric core downstream can assume
    /// both hold.
    pub fn new(
        position: Complex<f64>,
        scale: f64,
        max_iterations: u32,
        color_scheme: u32,
    ) -> Result<ViewState, ConfigError> {
        if !(scale > 0.0) {
            return Err(ConfigError::InvalidScale(scale));
        }
        if max_iterations == 0 {
            return Err(ConfigError::ZeroIterationBudget);
        }
        Ok(ViewState {
            position,
            scale,
            max_iterations,
            color_scheme,
        })
    }

    /// A new view at a different position and scale, keeping the
    /// iteration budget and palette of this one.  This is how a zoom
    /// commit produces its result.
    pub fn with_pos_and_scale(
        &self,
        position: Complex<f64>,
        scale: f64,
    ) -> Result<ViewState, ConfigError> {
        ViewState::new(position, scale, self.max_iterations, self.color_scheme)
    }
}

/// The width and height, in pixels, of the target raster.  Read from
/// the rendering surface at render time; never persisted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScreenRect {
    /// Raster width in pixels.
    pub width: usize,
    /// Raster height in pixels.
    pub height: usize,
}

impl ScreenRect {
    /// Constructor.
    pub fn new(width: usize, height: usize) -> ScreenRect {
        ScreenRect { width, height }
    }

    /// The total number of pixels.  Used to size the iteration grid.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// True when the rect contains no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Height over width.  The visible world rectangle is scaled by
    /// this on the y-axis so pixels stay square.
    pub fn aspect_ratio(&self) -> f64 {
        (self.height as f64) / (self.width as f64)
    }
}

/// Linear interpolation between `lo` and `hi`, holding the endpoint
/// value for parameters outside [0, 1].  In-bounds pixels always land
/// inside the unit range; the endpoint hold is a safety net for
/// out-of-rect inputs, not a clamp of `t` itself.
pub fn lerp(lo: f64, hi: f64, t: f64) -> f64 {
    if t < 0.0 {
        lo
    } else if t > 1.0 {
        hi
    } else {
        lo + t * (hi - lo)
    }
}

/// A view state bound to a concrete screen rect, with the visible
/// world rectangle worked out once up front.
#[derive(Clone, Debug)]
pub struct Viewport {
    view: ViewState,
    screen: ScreenRect,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    /// Constructor.  The visible world rectangle spans `scale` around
    /// the view position horizontally and `scale * aspect` vertically.
    pub fn new(view: &ViewState, screen: ScreenRect) -> Result<Viewport, ConfigError> {
        if screen.is_empty() {
            return Err(ConfigError::EmptyScreen(screen.width, screen.height));
        }
        if !(view.scale > 0.0) {
            return Err(ConfigError::InvalidScale(view.scale));
        }
        let aspect = screen.aspect_ratio();
        let half = view.scale / 2.0;
        Ok(Viewport {
            view: view.clone(),
            screen,
            x_min: view.position.re - half,
            x_max: view.position.re + half,
            y_min: view.position.im - half * aspect,
            y_max: view.position.im + half * aspect,
        })
    }

    /// The screen rect this viewport was built for.
    pub fn screen(&self) -> ScreenRect {
        self.screen
    }

    /// The visible world interval on the x-axis, as (min, max).
    pub fn x_range(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    /// The visible world interval on the y-axis, as (min, max).
    pub fn y_range(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    /// Maps a screen-space point, possibly fractional, to the complex
    /// point it covers.  The point's fraction of the rect interpolates
    /// across the visible world rectangle.
    pub fn point_to_world(&self, p: Point) -> Complex<f64> {
        let tx = p.x / (self.screen.width as f64);
        let ty = p.y / (self.screen.height as f64);
        Complex::new(lerp(self.x_min, self.x_max, tx), lerp(self.y_min, self.y_max, ty))
    }

    /// Maps an integral pixel to the complex point it covers.
    pub fn pixel_to_world(&self, x: usize, y: usize) -> Complex<f64> {
        self.point_to_world(Point::new(x as f64, y as f64))
    }

    /// Derives the view that a drag-selected screen rectangle zooms
    /// into.  The selection's corners map to world space under this
    /// viewport; the new position is their midpoint and the new scale
    /// is the selected world width, widened to the selected height
    /// when the selection is taller than the screen's proportions so
    /// that the whole selection stays visible.  The aspect correction
    /// applied here mirrors the forward mapping exactly, which is
    /// what keeps a zoom from stretching the image.
    pub fn zoom_to(&self, selection: &Bounds) -> Result<ViewState, ConfigError> {
        let selection = selection.as_normalized();
        let top_left = self.point_to_world(selection.start);
        let bottom_right = self.point_to_world(selection.end);

        let world_width = bottom_right.re - top_left.re;
        let world_height = bottom_right.im - top_left.im;
        let position = Complex::new(
            (top_left.re + bottom_right.re) / 2.0,
            (top_left.im + bottom_right.im) / 2.0,
        );
        let scale = if world_height > world_width {
            world_height / self.screen.aspect_ratio()
        } else {
            world_width
        };
        self.view.with_pos_and_scale(position, scale)
    }
}
