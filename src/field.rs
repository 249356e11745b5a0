// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sweeps the escape-time iteration over every pixel of a viewport
//! and collects the counts into a grid.  One render is one grid; the
//! palette step consumes it and it is never written again.  The
//! per-pixel work is embarrassingly parallel, so the threaded variant
//! bands the rows across scoped worker threads, each owning a
//! disjoint slice of the output.

use escape::escape_time;
use itertools::iproduct;
use std::sync::atomic::{AtomicBool, Ordering};
use viewport::{ConfigError, ScreenRect, ViewState, Viewport};

/// A dense, row-major grid of escape counts, one per pixel, each in
/// [0, max_iterations].  Produced fresh on every render.
#[derive(Clone, Debug, PartialEq)]
pub struct IterationGrid {
    width: usize,
    height: usize,
    values: Vec<u32>,
}

impl IterationGrid {
    /// Grid width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The escape count at pixel (x, y).
    pub fn value(&self, x: usize, y: usize) -> u32 {
        self.values[x + y * self.width]
    }

    /// The raw row-major counts, for the palette step.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// The total number of pixels in the grid.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the grid holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Computes the escape count of every pixel in the screen rect under
/// the given view, on the calling thread.  Covers each pixel exactly
/// once; always terminates because the iteration itself is bounded by
/// the view's budget.
pub fn compute_field(view: &ViewState, screen: ScreenRect) -> Result<IterationGrid, ConfigError> {
    let viewport = Viewport::new(view, screen)?;
    let mut values = vec![0 as u32; screen.len()];
    for (y, x) in iproduct!(0..screen.height, 0..screen.width) {
        values[x + y * screen.width] = escape_time(viewport.pixel_to_world(x, y), view.max_iterations);
    }
    Ok(IterationGrid {
        width: screen.width,
        height: screen.height,
        values,
    })
}

/// The threaded variant.  Rows are banded into contiguous chunks of
/// the output buffer, one band per worker, so no cell is written by
/// more than one thread and the assembled grid is identical to the
/// single-threaded one.  A thread count of zero means one worker per
/// logical CPU.
///
/// Workers poll `cancel` between rows; setting it abandons the render
/// and yields `Ok(None)`, which is how a stale in-flight frame gets
/// dropped when the user zooms again mid-compute.
pub fn compute_field_threaded(
    view: &ViewState,
    screen: ScreenRect,
    threads: usize,
    cancel: &AtomicBool,
) -> Result<Option<IterationGrid>, ConfigError> {
    let viewport = Viewport::new(view, screen)?;
    let threads = if threads == 0 { num_cpus::get() } else { threads };
    let rows_per_band = (screen.height / threads) + 1;

    let mut values = vec![0 as u32; screen.len()];
    crossbeam::scope(|spawner| {
        let bands: Vec<&mut [u32]> = values.chunks_mut(rows_per_band * screen.width).collect();
        for (band_index, band) in bands.into_iter().enumerate() {
            let viewport = &viewport;
            spawner.spawn(move |_| {
                let first_row = band_index * rows_per_band;
                for (offset, row) in band.chunks_mut(screen.width).enumerate() {
                    if cancel.load(Ordering::Relaxed) {
                        return;
                    }
                    let y = first_row + offset;
                    for (x, cell) in row.iter_mut().enumerate() {
                        *cell = escape_time(viewport.pixel_to_world(x, y), view.max_iterations);
                    }
                }
            });
        }
    })
    .unwrap();

    if cancel.load(Ordering::Relaxed) {
        return Ok(None);
    }
    Ok(Some(IterationGrid {
        width: screen.width,
        height: screen.height,
        values,
    }))
}
