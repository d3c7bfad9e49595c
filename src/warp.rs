//! Warping of a base colormap.

use log::debug;
use crate::cmaps::Basemap;
use crate::error::{Error, Result};
use crate::special::betainc;
use crate::{ColorRange, ColorTable, Linspace, Solver};

fn check_z(z: f64) -> Result<()> {
    if 0. < z && z < 1. { Ok(()) }
    else { Err(Error::invalid("z", z, "z must be between 0 and 1")) }
}

fn check_beta(beta: f64) -> Result<()> {
    if beta.is_finite() && beta > 0. { Ok(()) }
    else { Err(Error::invalid("beta", beta, "beta must be finite and > 0")) }
}

fn check_entries(n: usize) -> Result<()> {
    if n >= 2 { Ok(()) }
    else { Err(Error::invalid("N", n, "a table needs at least 2 entries")) }
}

/// Return `alpha > 0` such that I_z(alpha, `beta`) = 0.5, i.e. the
/// warp `y ↦ I_y(alpha, beta)` sends `z` to 0.5.
///
/// The root is searched with the default [`Solver`], on the bracket
/// `[1e-10, 1e2]`.  Targets `z` close to 1 with a large `beta` need
/// `alpha > 100` and fail with [`Error::NumericalFailure`]; use
/// [`solve_alpha_with`] and a wider bracket for those.
///
/// # Example
///
/// ```
/// // With beta = 1, I_z(alpha, 1) = z^alpha.
/// let alpha = warpcmap::solve_alpha(0.25, 1.).unwrap();
/// assert!((alpha - 0.5).abs() < 1e-9);
/// ```
pub fn solve_alpha(z: f64, beta: f64) -> Result<f64> {
    solve_alpha_with(z, beta, &Solver::default())
}

/// Same as [`solve_alpha`] with an explicit root finder
/// configuration.  The bracket must lie in (0, ∞).
pub fn solve_alpha_with(z: f64, beta: f64, solver: &Solver) -> Result<f64> {
    check_z(z)?;
    check_beta(beta)?;
    let (lo, hi) = solver.bracket;
    if !(lo > 0. && lo < hi && hi.is_finite()) {
        return Err(Error::invalid("bracket", format!("({lo}, {hi})"),
                                  "alpha must be searched in (0, ∞)"));
    }
    let root = solver.find_root(|alpha| Ok(betainc(alpha, beta, z)? - 0.5))?;
    debug!("solved alpha = {} for z = {z}, beta = {beta} in {} iterations",
           root.x, root.iterations);
    Ok(root.x)
}

/// A solved warp `y ↦ I_y(alpha, beta)` of \[0, 1\] onto itself.
///
/// It is strictly increasing, fixes 0 and 1 and sends `z` to 0.5.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Warp {
    z: f64,
    beta: f64,
    alpha: f64,
}

impl Warp {
    /// Solve the warp sending `z` to 0.5 with shape `beta`.
    pub fn new(z: f64, beta: f64) -> Result<Self> {
        Self::with_solver(z, beta, &Solver::default())
    }

    pub fn with_solver(z: f64, beta: f64, solver: &Solver) -> Result<Self> {
        let alpha = solve_alpha_with(z, beta, solver)?;
        Ok(Warp { z, beta, alpha })
    }

    /// The position sent to the middle of the base colormap.
    pub fn z(&self) -> f64 { self.z }

    pub fn beta(&self) -> f64 { self.beta }

    /// The solved first shape parameter.
    pub fn alpha(&self) -> f64 { self.alpha }

    /// Warped coordinate of `y` ∈ \[0, 1\].
    pub fn position(&self, y: f64) -> Result<f64> {
        betainc(self.alpha, self.beta, y)
    }

    /// Warped coordinates `x_n` of the `n` evenly spaced points
    /// `y_n = n/(n-1)` of \[0, 1\].  The first is exactly 0, the last
    /// exactly 1, and they never decrease.
    pub fn positions(&self, n: usize) -> Result<Vec<f64>> {
        check_entries(n)?;
        Linspace::new(0., 1., n).map(|y| self.position(y)).collect()
    }

    /// Sample `base` at the `n` warped coordinates.
    pub fn apply<R>(&self, base: &R, n: usize) -> Result<ColorTable>
    where R: ColorRange + ?Sized {
        let table = self.positions(n)?.into_iter()
            .map(|x| base.rgb(x))
            .collect();
        Ok(table)
    }
}

/// Construct a new colormap by warping `basemap` so that its middle
/// color (the one at 0.5) corresponds to the position `z` ∈ (0, 1).
///
/// `beta` > 0 controls the rate of change of colors close to `z`: it
/// is approximately the gradient of the mapping between the new and
/// the old colors.  Values between 1 and 5 give more resolution to
/// the data close to `z`, values below 1 compress the colors there.
/// The result has `entries` colors (256 is customary).
///
/// If the data range is not \[0, 1\], `z` is mapped linearly onto it:
/// for data in (100, 120) and `z = 0.8`, the emphasised values are
/// around 116.  [`crate::WarpParams`] does that computation.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `z` ∉ (0, 1), `entries < 2` or
///   `beta` is not a finite positive number;
/// - [`Error::LookupFailure`] if `basemap` names an unknown colormap;
/// - [`Error::NumericalFailure`] if `alpha` cannot be solved.
///
/// # Example
///
/// ```
/// use warpcmap::{warp, Error};
/// let table = warp("jet", 0.8, 3., 256).unwrap();
/// assert_eq!(table.len(), 256);
/// assert!(matches!(warp("jet", 1.5, 3., 256),
///                  Err(Error::InvalidArgument { .. })));
/// ```
pub fn warp<'a>(basemap: impl Into<Basemap<'a>>, z: f64, beta: f64,
                entries: usize) -> Result<ColorTable> {
    warp_with(basemap, z, beta, entries, &Solver::default())
}

/// Same as [`warp()`] with an explicit root finder configuration.
pub fn warp_with<'a>(basemap: impl Into<Basemap<'a>>, z: f64, beta: f64,
                     entries: usize, solver: &Solver) -> Result<ColorTable> {
    build(basemap.into(), z, beta, entries, solver).map(|(_, table)| table)
}

/// Validate `z` and `entries`, resolve `basemap`, then solve the warp
/// and sample it.  Errors are reported in that order.
pub(crate) fn build(basemap: Basemap<'_>, z: f64, beta: f64, entries: usize,
                    solver: &Solver) -> Result<(Warp, ColorTable)> {
    check_z(z)?;
    check_entries(entries)?;
    let base = basemap.resolve()?;
    let warp = Warp::with_solver(z, beta, solver)?;
    let table = warp.apply(&*base, entries)?;
    Ok((warp, table))
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::{from_fn, Rgba};

    fn gray(x: f64) -> Rgba { Rgba { r: x, g: x, b: x, a: 1. } }

    #[test]
    fn alpha_for_symmetric_targets() {
        assert_abs_diff_eq!(solve_alpha(0.5, 1.).unwrap(), 1., epsilon = 1e-9);
        assert_abs_diff_eq!(solve_alpha(0.5, 3.).unwrap(), 3., epsilon = 1e-9);
        assert_abs_diff_eq!(solve_alpha(0.5, 0.4).unwrap(), 0.4,
                            epsilon = 1e-9);
        assert_abs_diff_eq!(solve_alpha(0.25, 1.).unwrap(), 0.5,
                            epsilon = 1e-9);
    }

    #[test]
    fn alpha_residual() {
        for &z in &[0.05, 0.2, 0.5, 0.7, 0.9] {
            for &beta in &[0.3, 1., 2.5, 5.] {
                let alpha = solve_alpha(z, beta).unwrap();
                assert!(alpha > 0.);
                let r = betainc(alpha, beta, z).unwrap() - 0.5;
                assert!(r.abs() < 1e-6, "z = {z}, beta = {beta}: {r}");
            }
        }
    }

    #[test]
    fn grayscale_ramp_scenario() {
        let w = Warp::new(0.8, 3.).unwrap();
        assert_abs_diff_eq!(w.alpha(), 11.029_930_690_307_3, epsilon = 1e-8);
        let x = w.positions(5).unwrap();
        assert_eq!(x[0], 0.);
        assert_eq!(x[4], 1.);
        assert_abs_diff_eq!(x[1], 1.065_675_507_14e-5, epsilon = 1e-12);
        assert_abs_diff_eq!(x[2], 0.011_048_242_542_09, epsilon = 1e-10);
        assert_abs_diff_eq!(x[3], 0.330_965_411_791_08, epsilon = 1e-9);
        assert!(x[2] < 0.5);

        let table = warp(crate::Basemap::Direct(&from_fn(gray)), 0.8, 3., 5)
            .unwrap();
        assert_eq!(table.len(), 5);
        for (c, &x) in table.iter().zip(&x) {
            assert_eq!(*c, gray(x));
        }
    }

    #[test]
    fn identity_warp() {
        let ramp = from_fn(|x| Rgba { r: x, g: 1. - x, b: x * x, a: 1. });
        let table = warp(crate::Basemap::Direct(&ramp), 0.5, 1., 33).unwrap();
        for (c, d) in table.iter().zip(ramp.sample(33)) {
            assert_abs_diff_eq!(c.r, d.r, epsilon = 1e-9);
            assert_abs_diff_eq!(c.g, d.g, epsilon = 1e-9);
            assert_abs_diff_eq!(c.b, d.b, epsilon = 1e-9);
        }
    }

    #[test]
    fn middle_color_lands_on_z() {
        let gray = from_fn(gray);
        let table = Warp::new(0.8, 3.).unwrap().apply(&gray, 1001).unwrap();
        assert_abs_diff_eq!(table.rgb(0.8).r, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn invalid_arguments() {
        for z in [0., 1., 1.5, -0.2, f64::NAN] {
            assert!(matches!(warp("gray", z, 1., 10),
                             Err(Error::InvalidArgument { name: "z", .. })),
                    "z = {z}");
            assert!(matches!(solve_alpha(z, 1.),
                             Err(Error::InvalidArgument { name: "z", .. })));
        }
        for n in [0, 1] {
            assert!(matches!(warp("gray", 0.5, 1., n),
                             Err(Error::InvalidArgument { name: "N", .. })));
        }
        for beta in [0., -1., f64::NAN, f64::INFINITY] {
            assert!(matches!(warp("gray", 0.5, beta, 10),
                             Err(Error::InvalidArgument { name: "beta", .. })));
        }
        let s = Solver::default().bracket(0., 10.);
        assert!(matches!(solve_alpha_with(0.5, 1., &s),
                         Err(Error::InvalidArgument { name: "bracket", .. })));
    }

    #[test]
    fn z_is_checked_before_lookup() {
        assert!(matches!(warp("nonexistent_map_name", 2., 1., 10),
                         Err(Error::InvalidArgument { .. })));
        assert_eq!(warp("nonexistent_map_name", 0.5, 1., 10),
                   Err(Error::LookupFailure("nonexistent_map_name".into())));
    }

    #[test]
    fn bracket_limitation() {
        assert!(matches!(solve_alpha(0.99, 3.),
                         Err(Error::NumericalFailure(_))));
        let wide = Solver::default().bracket(1e-10, 1e3);
        let alpha = solve_alpha_with(0.99, 3., &wide).unwrap();
        assert_abs_diff_eq!(alpha, 265.068_851_959_063, epsilon = 1e-6);
        let table = warp_with("jet", 0.99, 3., 64, &wide).unwrap();
        assert_eq!(table.len(), 64);
    }

    #[test]
    fn special_function_failure_propagates() {
        let wide = Solver::default().bracket(1e-10, 1e7);
        let e = solve_alpha_with(0.5, 1e6, &wide).unwrap_err();
        assert!(matches!(e, Error::NumericalFailure(_)), "{e:?}");
        assert!(matches!(warp_with("gray", 0.5, 1e6, 16, &wide),
                         Err(Error::NumericalFailure(_))));
    }

    #[test]
    fn lookup_and_entries_are_checked_before_solving() {
        assert_eq!(warp("nope", 0.99, 3., 256),
                   Err(Error::LookupFailure("nope".into())));
        assert!(matches!(warp("gray", 0.99, 3., 1),
                         Err(Error::InvalidArgument { name: "N", .. })));
    }
}
