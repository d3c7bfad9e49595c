//! Data-range normalization for warped colormaps.
//!
//! Plotting a scalar field with a warped colormap requires the range
//! `[vmin, vmax]` covered by the colors and the value `vmid` that gets
//! the middle color.  [`WarpParams`] gathers these settings (each one
//! defaulting to something computed from the data) and
//! [`WarpParams::resolve`] turns them into a [`WarpedNorm`] that any
//! renderer can use to color values.

use crate::cmaps::Basemap;
use crate::error::{Error, Result};
use crate::{ColorRange, ColorTable, Rgba, Solver, Warp};

/// Colormap used when none is set.
pub const DEFAULT_CMAP: &str = "viridis";

/// Settings of a warped colormap over a data range.
///
/// Unset `vmin` and `vmax` default to the smallest and largest finite
/// data values, and `vmid` to `(vmin + vmax) / 2`.
///
/// # Example
///
/// ```
/// use warpcmap::WarpParams;
/// let data = [100., 104., 110., 116., 120.];
/// let norm = WarpParams::new().cmap("jet").vmid(116.).beta(3.)
///     .resolve(&data).unwrap();
/// assert!((norm.z() - 0.8).abs() < 1e-12);
/// let color = norm.rgb(116.);
/// ```
#[derive(Clone, Debug)]
pub struct WarpParams<'a> {
    cmap: Basemap<'a>,
    vmin: Option<f64>,
    vmax: Option<f64>,
    vmid: Option<f64>,
    beta: f64,
    entries: usize,
    solver: Solver,
}

impl Default for WarpParams<'_> {
    fn default() -> Self {
        WarpParams {
            cmap: Basemap::Named(DEFAULT_CMAP),
            vmin: None,
            vmax: None,
            vmid: None,
            beta: 1.,
            entries: 256,
            solver: Solver::default(),
        }
    }
}

/// Smallest and largest finite values of `data`, if any.
pub(crate) fn data_range(data: &[f64]) -> Option<(f64, f64)> {
    data.iter().copied().filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

impl<'a> WarpParams<'a> {
    pub fn new() -> Self { Self::default() }

    /// The colormap to warp (a registered name or a colormap).
    pub fn cmap(mut self, cmap: impl Into<Basemap<'a>>) -> Self {
        self.cmap = cmap.into();
        self
    }

    /// Lower end of the data range covered by the colormap.
    pub fn vmin(mut self, vmin: f64) -> Self {
        self.vmin = Some(vmin);
        self
    }

    /// Upper end of the data range covered by the colormap.
    pub fn vmax(mut self, vmax: f64) -> Self {
        self.vmax = Some(vmax);
        self
    }

    /// The data value receiving the middle color of the colormap.
    pub fn vmid(mut self, vmid: f64) -> Self {
        self.vmid = Some(vmid);
        self
    }

    /// Rate of change of colors around `vmid`.  Larger values give a
    /// more rapid change of color there; below 1 the colors close to
    /// `vmid` are compressed.
    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Number of entries of the warped table.
    pub fn entries(mut self, entries: usize) -> Self {
        self.entries = entries;
        self
    }

    pub fn solver(mut self, solver: Solver) -> Self {
        self.solver = solver;
        self
    }

    /// Fill the unset bounds from `data` and build the warped table.
    ///
    /// `data` is only scanned when `vmin` or `vmax` is unset; NaN and
    /// infinite values are ignored.
    pub fn resolve(self, data: &[f64]) -> Result<WarpedNorm> {
        let (vmin, vmax) = match (self.vmin, self.vmax) {
            (Some(lo), Some(hi)) => (lo, hi),
            (lo, hi) => {
                let (dmin, dmax) = data_range(data).ok_or_else(|| {
                    Error::invalid("data", format!("{} values", data.len()),
                                   "no finite value to derive vmin/vmax")
                })?;
                (lo.unwrap_or(dmin), hi.unwrap_or(dmax))
            }
        };
        if !(vmin.is_finite() && vmax.is_finite() && vmin < vmax) {
            return Err(Error::invalid("vmin, vmax", format!("{vmin}, {vmax}"),
                                      "need finite vmin < vmax"));
        }
        let vmid = self.vmid.unwrap_or((vmin + vmax) / 2.);
        let z = (vmid - vmin) / (vmax - vmin);
        let (warp, table) = crate::warp::build(self.cmap, z, self.beta,
                                               self.entries, &self.solver)?;
        Ok(WarpedNorm { vmin, vmax, vmid, warp, table })
    }
}

/// A warped color table together with the data range it covers.
#[derive(Clone, Debug, PartialEq)]
pub struct WarpedNorm {
    vmin: f64,
    vmax: f64,
    vmid: f64,
    warp: Warp,
    table: ColorTable,
}

impl WarpedNorm {
    pub fn vmin(&self) -> f64 { self.vmin }

    pub fn vmax(&self) -> f64 { self.vmax }

    pub fn vmid(&self) -> f64 { self.vmid }

    /// Position of `vmid` in \[0, 1\].
    pub fn z(&self) -> f64 { self.warp.z() }

    pub fn warp(&self) -> &Warp { &self.warp }

    pub fn table(&self) -> &ColorTable { &self.table }

    /// Map the data value `v` linearly, `vmin` to 0 and `vmax` to 1.
    pub fn normalize(&self, v: f64) -> f64 {
        (v - self.vmin) / (self.vmax - self.vmin)
    }

    /// The color of the data value `v`.  Values outside of
    /// `[vmin, vmax]` get the color of the closest bound and NaN is
    /// transparent.
    pub fn rgb(&self, v: f64) -> Rgba {
        self.table.rgb(self.normalize(v))
    }
}
