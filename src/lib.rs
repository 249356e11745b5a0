#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot field renderer
//!
//! The Mandelbrot set is drawn by taking each pixel of an image,
//! mapping it to a point on the complex plane, and repeatedly
//! squaring-and-adding that point to itself, counting how many steps
//! it takes for the running value to fly off toward infinity.  Points
//! that escape quickly are "far" from the set, points that never
//! escape within the iteration budget are presumed to belong to it,
//! and the per-pixel escape counts are what a palette turns into an
//! image.
//!
//! This crate is the numeric half of an interactive visualizer.  It
//! computes the grid of escape counts for a rectangular view of the
//! complex plane, maps between screen pixels and world coordinates in
//! both directions, and tracks the drag-select rectangle a user draws
//! to zoom in.  Committing a selection yields a new view whose world
//! rectangle tightly bounds the selected pixels; the surrounding
//! application persists that view as a flat query string and renders
//! again.  Pixel presentation itself stays outside: the crate hands
//! back raw RGB bytes and never touches a surface.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate itertools;
extern crate num;
extern crate num_cpus;

pub mod bounds;
pub mod color;
pub mod escape;
pub mod field;
pub mod params;
pub mod viewport;
pub mod zoom;

pub use bounds::{Bounds, Point};
pub use color::{render_field, ColorScheme, Rgb};
pub use escape::escape_time;
pub use field::{compute_field, compute_field_threaded, IterationGrid};
pub use params::{view_from_query, view_to_query};
pub use viewport::{ConfigError, ScreenRect, ViewState, Viewport};
pub use zoom::{PointerButton, ZoomGesture};
