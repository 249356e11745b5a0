// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time iteration at the heart of the renderer.  For a
//! point C on the complex plane, repeatedly compute Z = Z^2 + C
//! starting from zero, and report how many steps it takes for the
//! orbit's magnitude to pass 2.  Most exterior points escape within a
//! handful of steps, so the early return here is what makes the
//! per-pixel sweep affordable.

use num::Complex;

/// Counts the iterations before the orbit of `c` escapes, starting
/// from Z = 0.  Returns the 0-indexed step at which the squared
/// magnitude first reaches 4, or `limit` if the orbit stayed bounded
/// for the whole budget ("presumed interior").  The squared-magnitude
/// test avoids a square root per step; an orbit that blows up to
/// Infinity still satisfies it and terminates the loop.
pub fn escape_time(c: Complex<f64>, limit: u32) -> u32 {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    for i in 0..limit {
        z = z * z + c;
        if z.norm_sqr() >= 4.0 {
            return i;
        }
    }
    limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 1), 1);
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 50), 50);
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 1000), 1000);
    }

    #[test]
    fn far_points_escape_immediately() {
        // |C| = 2 sits exactly on the threshold after the first step.
        assert_eq!(escape_time(Complex::new(2.0, 0.0), 50), 0);
        assert_eq!(escape_time(Complex::new(-2.5, 0.0), 50), 0);
        assert_eq!(escape_time(Complex::new(0.0, 100.0), 50), 0);
    }

    #[test]
    fn near_points_escape_quickly() {
        // 1+i: step one lands on (1, 3), squared magnitude 10.
        assert_eq!(escape_time(Complex::new(1.0, 1.0), 50), 1);
    }

    #[test]
    fn result_is_bounded_by_the_budget() {
        let samples = [
            Complex::new(0.0, 0.0),
            Complex::new(-0.5, 0.0),
            Complex::new(0.3, 0.6),
            Complex::new(-1.75, 0.0),
            Complex::new(2.0, 2.0),
            Complex::new(std::f64::INFINITY, 0.0),
        ];
        for c in &samples {
            for &limit in &[1, 7, 50] {
                assert!(escape_time(*c, limit) <= limit);
            }
        }
    }

    #[test]
    fn escape_count_is_stable_across_budgets() {
        // Once a point escapes within some budget, a larger budget
        // reports the same step.
        let samples = [
            Complex::new(0.5, 0.5),
            Complex::new(-1.0, 0.4),
            Complex::new(0.26, 0.0),
            Complex::new(1.0, 1.0),
        ];
        for c in &samples {
            let n1 = escape_time(*c, 50);
            if n1 < 50 {
                assert_eq!(escape_time(*c, 100), n1);
                assert_eq!(escape_time(*c, 5000), n1);
            }
        }
    }
}
