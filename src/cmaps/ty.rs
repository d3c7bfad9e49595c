use crate::{ColorRange, Rgba, TRANSPARENT};

/// Piecewise linear channel: `(x, value)` stops with `x` increasing
/// from 0 to 1.
pub(crate) type Stops = &'static [(f64, f64)];

/// A colormap interpolating each channel linearly between stops.
#[derive(Debug)]
pub struct Segmented {
    pub(crate) name: &'static str,
    pub(crate) red: Stops, // Invariant: first x = 0, last x = 1
    pub(crate) green: Stops,
    pub(crate) blue: Stops,
}

fn interpolate(stops: Stops, t: f64) -> f64 {
    match stops.iter().position(|&(x, _)| t <= x) {
        Some(0) => stops[0].1,
        Some(i) => {
            let (x0, y0) = stops[i - 1];
            let (x1, y1) = stops[i];
            y0 + (y1 - y0) * (t - x0) / (x1 - x0)
        }
        None => stops[stops.len() - 1].1,
    }
}

impl Segmented {
    /// Name under which the colormap is registered.
    pub fn name(&self) -> &'static str { self.name }
}

impl ColorRange for Segmented {
    fn rgb(&self, t: f64) -> Rgba {
        if t.is_nan() { return TRANSPARENT }
        let t = t.clamp(0., 1.);
        Rgba { r: interpolate(self.red, t),
               g: interpolate(self.green, t),
               b: interpolate(self.blue, t),
               a: 1. }
    }
}
