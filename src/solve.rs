//! Bracketed scalar root finding.

use log::trace;
use crate::error::{Error, Result};

/// Settings of the bracketed root finder.
///
/// The default bracket `[1e-10, 1e2]` covers the usual warps
/// (`beta` between 0.2 and 10 with `z` not too close to 0 or 1).  For
/// extreme targets the root may lie outside of it; widen `bracket`
/// then.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solver {
    /// Interval `(lo, hi)` that must contain a sign change.
    pub bracket: (f64, f64),
    /// Absolute tolerance on the root.
    pub xtol: f64,
    /// Maximum number of iterations before giving up.
    pub max_iter: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Solver { bracket: (1e-10, 1e2), xtol: 2e-12, max_iter: 100 }
    }
}

/// A root found by [`Solver::find_root`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Root {
    pub x: f64,
    /// Number of iterations used (0 if an endpoint was a root).
    pub iterations: usize,
}

impl Solver {
    /// Set the bracket.
    pub fn bracket(mut self, lo: f64, hi: f64) -> Self {
        self.bracket = (lo, hi);
        self
    }

    /// Set the absolute tolerance on the root.
    pub fn xtol(mut self, xtol: f64) -> Self {
        self.xtol = xtol;
        self
    }

    /// Set the maximum number of iterations.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Find a zero of `f` inside [`Self::bracket`] with Brent's method
    /// (inverse quadratic interpolation and secant steps, falling back
    /// to bisection).
    ///
    /// Fails with [`Error::NumericalFailure`] if `f` has the same sign
    /// at both ends of the bracket or if the iteration cap is hit.
    /// Errors returned by `f` are passed through.
    pub fn find_root<F>(&self, mut f: F) -> Result<Root>
    where F: FnMut(f64) -> Result<f64> {
        let (mut a, mut b) = self.bracket;
        let mut fa = eval(&mut f, a)?;
        let mut fb = eval(&mut f, b)?;
        if fa == 0. { return Ok(Root { x: a, iterations: 0 }) }
        if fb == 0. { return Ok(Root { x: b, iterations: 0 }) }
        if fa.signum() == fb.signum() {
            return Err(Error::NumericalFailure(format!(
                "no sign change in [{a}, {b}]: f({a}) = {fa}, f({b}) = {fb}")));
        }
        // Invariant: the root lies between `b` and `c`, `b` being the
        // best estimate so far.
        let mut c = a;
        let mut fc = fa;
        let mut d = b - a;
        let mut e = d;
        for iter in 1 ..= self.max_iter {
            if fb.signum() == fc.signum() {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }
            if fc.abs() < fb.abs() {
                a = b;  b = c;  c = a;
                fa = fb;  fb = fc;  fc = fa;
            }
            let tol = 2. * f64::EPSILON * b.abs() + 0.5 * self.xtol;
            let m = 0.5 * (c - b);
            trace!("brent iteration {iter}: x = {b}, f(x) = {fb}");
            if m.abs() <= tol || fb == 0. {
                return Ok(Root { x: b, iterations: iter });
            }
            if e.abs() >= tol && fa.abs() > fb.abs() {
                let s = fb / fa;
                let (mut p, mut q) = if a == c {
                    (2. * m * s, 1. - s)
                } else {
                    let q = fa / fc;
                    let r = fb / fc;
                    (s * (2. * m * q * (q - r) - (b - a) * (r - 1.)),
                     (q - 1.) * (r - 1.) * (s - 1.))
                };
                if p > 0. { q = -q } else { p = -p }
                if 2. * p < (3. * m * q - (tol * q).abs()).min((e * q).abs()) {
                    e = d;
                    d = p / q;
                } else {
                    d = m;
                    e = m;
                }
            } else {
                d = m;
                e = m;
            }
            a = b;
            fa = fb;
            b += if d.abs() > tol { d } else { tol.copysign(m) };
            fb = eval(&mut f, b)?;
        }
        Err(Error::NumericalFailure(format!(
            "root finder did not converge in {} iterations (last x = {b})",
            self.max_iter)))
    }
}

fn eval<F>(f: &mut F, x: f64) -> Result<f64>
where F: FnMut(f64) -> Result<f64> {
    let y = f(x)?;
    if y.is_nan() {
        Err(Error::NumericalFailure(format!("objective is NaN at {x}")))
    } else {
        Ok(y)
    }
}
