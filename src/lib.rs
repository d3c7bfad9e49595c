//! Warped colormaps.
//!
//! A colormap is warped so that the color in the middle of the base
//! map (the one at 0.5) lands on a chosen position `z` ∈ (0, 1), with
//! `beta` setting how fast colors change around `z`.  The warp is the
//! regularized incomplete beta function `y ↦ I_y(alpha, beta)` whose
//! `alpha` is solved so that `I_z(alpha, beta) = 0.5`.
//!
//! - [`warp()`] and [`Warp`]: build a warped [`ColorTable`].
//! - [`ColorRange`]: anything mapping \[0, 1\] to a color.
//! - [`cmaps`]: named base colormaps, see [`Basemap`].
//! - [`WarpParams`]: derive `z` from a data range.
//!
//! # Example
//!
//! ```
//! use warpcmap::{warp, Basemap, ColorRange};
//! // Emphasise the values around 0.8.
//! let table = warp(Basemap::Named("jet"), 0.8, 3., 256).unwrap();
//! assert_eq!(table.len(), 256);
//! let green = table.rgb(0.8);
//! ```

use rgb::RGBA;

pub mod cmaps;
mod error;
mod norm;
pub mod solve;
pub mod special;
mod table;
mod warp;

pub use cmaps::Basemap;
pub use error::{Error, Result};
pub use norm::{WarpParams, WarpedNorm, DEFAULT_CMAP};
pub use solve::Solver;
pub use table::ColorTable;
pub use warp::{solve_alpha, solve_alpha_with, warp, warp_with, Warp};

/// Colors handled by this crate: red, green, blue and alpha
/// components in \[0, 1\].
pub type Rgba = RGBA<f64>;

/// Transparent black, returned when a colormap is sampled at NaN.
pub const TRANSPARENT: Rgba = RGBA { r: 0., g: 0., b: 0., a: 0. };

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Rgba;

    /// Sample the colormap at `n` evenly spaced points of \[0, 1\]
    /// (both bounds included).
    fn sample(&self, n: usize) -> Vec<Rgba> {
        Linspace::new(0., 1., n).map(|t| self.rgb(t)).collect()
    }
}

impl<R: ColorRange + ?Sized> ColorRange for &R {
    #[inline]
    fn rgb(&self, t: f64) -> Rgba { R::rgb(self, t) }
}

impl<R: ColorRange + ?Sized> ColorRange for Box<R> {
    #[inline]
    fn rgb(&self, t: f64) -> Rgba { R::rgb(self, t) }
}

/// A colormap given by a function.  Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

/// Use the function `f` : \[0, 1\] → [`Rgba`] as a colormap.
///
/// # Example
///
/// ```
/// use warpcmap::{from_fn, ColorRange, Rgba};
/// let gray = from_fn(|x| Rgba { r: x, g: x, b: x, a: 1. });
/// assert_eq!(gray.rgb(0.25).g, 0.25);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where F: Fn(f64) -> Rgba {
    FromFn(f)
}

impl<F> ColorRange for FromFn<F>
where F: Fn(f64) -> Rgba {
    #[inline]
    fn rgb(&self, t: f64) -> Rgba { (self.0)(t) }
}

/// A colormap read backwards.
#[derive(Clone, Copy, Debug)]
pub struct Reversed<R>(R);

impl<R: ColorRange> Reversed<R> {
    pub fn new(map: R) -> Self { Reversed(map) }

    /// The colormap read backwards.
    pub fn inner(&self) -> &R { &self.0 }
}

impl<R: ColorRange> ColorRange for Reversed<R> {
    #[inline]
    fn rgb(&self, t: f64) -> Rgba { self.0.rgb(1. - t) }
}

/// An iterator yielding `n` evenly spaced values between `a` and `b`
/// (both included, exactly).  It is not required that `a <= b`.
#[derive(Clone, Debug)]
pub struct Linspace {
    a: f64,
    b: f64,
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl Linspace {
    pub fn new(a: f64, b: f64, n: usize) -> Self {
        if n == 0 {
            Linspace { a, b, flast: 0., last: 0, i: 1, j: 0 } // Empty
        } else {
            Linspace { a, b, flast: (n - 1) as f64, last: n - 1,
                       i: 0, j: n - 1 }
        }
    }

    /// Value at position `k` (assumed in `0 ..= self.last`).
    fn value(&self, k: usize) -> f64 {
        if k == 0 {
            self.a
        } else if k == self.last {
            self.b
        } else {
            let w0 = (self.last - k) as f64;
            let w1 = k as f64;
            (w0 * self.a + w1 * self.b) / self.flast
        }
    }
}

impl Iterator for Linspace {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.i > self.j { return None }
        let x = self.value(self.i);
        self.i += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.j + 1).saturating_sub(self.i);
        (len, Some(len))
    }
}

impl ExactSizeIterator for Linspace {}

impl DoubleEndedIterator for Linspace {
    fn next_back(&mut self) -> Option<f64> {
        if self.i > self.j { return None }
        let x = self.value(self.j);
        if self.j == 0 { self.i = 1 } else { self.j -= 1 }
        Some(x)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints() {
        let v: Vec<_> = Linspace::new(0., 1., 11).collect();
        assert_eq!(v.len(), 11);
        assert_eq!(v[0], 0.);
        assert_eq!(v[10], 1.);
        for (i, x) in v.iter().enumerate() {
            assert!((x - 0.1 * i as f64).abs() <= 1e-15,
                    "{} ≉ {}", x, 0.1 * i as f64);
        }
    }

    #[test]
    fn linspace_small() {
        assert_eq!(Linspace::new(0., 1., 0).count(), 0);
        assert_eq!(Linspace::new(3., 1., 1).collect::<Vec<_>>(), vec![3.]);
        assert_eq!(Linspace::new(2., -2., 3).rev().collect::<Vec<_>>(),
                   vec![-2., 0., 2.]);
        assert_eq!(Linspace::new(0., 1., 5).len(), 5);
    }

    #[test]
    fn reversed_fn() {
        let ramp = from_fn(|x| RGBA { r: x, g: 0., b: 1. - x, a: 1. });
        let rev = Reversed::new(ramp);
        assert_eq!(rev.rgb(0.), RGBA { r: 1., g: 0., b: 0., a: 1. });
        assert_eq!(rev.rgb(1.), RGBA { r: 0., g: 0., b: 1., a: 1. });
        assert_eq!(rev.sample(3).len(), 3);
    }
}
