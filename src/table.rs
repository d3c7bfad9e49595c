//! Discrete color tables.

use std::ops::Index;
use rgb::{RGBA, RGBA8};
use crate::{ColorRange, Rgba, TRANSPARENT};

/// A finite, ordered list of colors (aka listed colormap).
///
/// A table is produced once (e.g. by [`crate::warp()`]) and never
/// modified afterwards.  It is itself a [`ColorRange`]: the position
/// `t` ∈ \[0, 1\] selects entry `⌊t·len⌋` (the last entry for `t = 1`).
///
/// Warped tables always have at least 2 entries.  Tables collected
/// from arbitrary colors (`From<Vec<Rgba>>`, `FromIterator`) may be
/// shorter: a single color is used for every `t` and an empty table
/// gives [`TRANSPARENT`] everywhere.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTable {
    colors: Vec<Rgba>,
}

impl ColorTable {
    /// Returns the number of colors in the table.
    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Returns the colors of the table.
    pub fn colors(&self) -> &[Rgba] { &self.colors }

    pub fn get(&self, i: usize) -> Option<Rgba> { self.colors.get(i).copied() }

    pub fn iter(&self) -> std::slice::Iter<'_, Rgba> { self.colors.iter() }

    pub fn into_vec(self) -> Vec<Rgba> { self.colors }

    /// Index of the entry used for the position `t` (clamped to
    /// \[0, 1\]), or `None` if `t` is NaN or the table is empty.
    pub fn index_of(&self, t: f64) -> Option<usize> {
        let n = self.colors.len();
        if t.is_nan() || n == 0 { return None }
        let i = (t.clamp(0., 1.) * n as f64).floor() as usize;
        Some(i.min(n - 1))
    }

    /// The same table in the opposite order.
    pub fn reversed(&self) -> ColorTable {
        ColorTable { colors: self.colors.iter().rev().copied().collect() }
    }

    /// Returns the colors with 8-bit components, as renderers expect.
    pub fn to_rgba8(&self) -> Vec<RGBA8> {
        let byte = |c: f64| (255. * c).round().clamp(0., 255.) as u8;
        self.colors.iter()
            .map(|c| RGBA { r: byte(c.r), g: byte(c.g), b: byte(c.b), a: byte(c.a) })
            .collect()
    }
}

impl ColorRange for ColorTable {
    fn rgb(&self, t: f64) -> Rgba {
        match self.index_of(t) {
            Some(i) => self.colors[i],
            None => TRANSPARENT,
        }
    }
}

impl From<Vec<Rgba>> for ColorTable {
    fn from(colors: Vec<Rgba>) -> Self { ColorTable { colors } }
}

impl FromIterator<Rgba> for ColorTable {
    fn from_iter<I: IntoIterator<Item = Rgba>>(iter: I) -> Self {
        ColorTable { colors: iter.into_iter().collect() }
    }
}

impl Index<usize> for ColorTable {
    type Output = Rgba;

    fn index(&self, i: usize) -> &Rgba { &self.colors[i] }
}

impl<'a> IntoIterator for &'a ColorTable {
    type Item = &'a Rgba;
    type IntoIter = std::slice::Iter<'a, Rgba>;

    fn into_iter(self) -> Self::IntoIter { self.colors.iter() }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn gray(x: f64) -> Rgba { RGBA { r: x, g: x, b: x, a: 1. } }

    fn table4() -> ColorTable {
        [0., 0.25, 0.5, 1.].into_iter().map(gray).collect()
    }

    #[test]
    fn lookup() {
        let t = table4();
        assert_eq!(t.len(), 4);
        assert_eq!(t.rgb(0.), gray(0.));
        assert_eq!(t.rgb(0.24), gray(0.));
        assert_eq!(t.rgb(0.25), gray(0.25));
        assert_eq!(t.rgb(0.74), gray(0.5));
        assert_eq!(t.rgb(1.), gray(1.));
        assert_eq!(t.rgb(-3.), gray(0.));
        assert_eq!(t.rgb(7.), gray(1.));
        assert_eq!(t.rgb(f64::NAN), TRANSPARENT);
    }

    #[test]
    fn short_tables() {
        let one: ColorTable = vec![gray(0.3)].into();
        assert_eq!(one.rgb(0.), gray(0.3));
        assert_eq!(one.rgb(1.), gray(0.3));
        let empty: ColorTable = std::iter::empty().collect();
        assert!(empty.is_empty());
        assert_eq!(empty.index_of(0.5), None);
        assert_eq!(empty.rgb(0.5), TRANSPARENT);
    }

    #[test]
    fn reverse_and_bytes() {
        let t = table4().reversed();
        assert_eq!(t[0], gray(1.));
        assert_eq!(t.get(3), Some(gray(0.)));
        assert_eq!(t.get(4), None);
        let bytes = t.to_rgba8();
        assert_eq!(bytes[0], RGBA8 { r: 255, g: 255, b: 255, a: 255 });
        assert_eq!(bytes[1], RGBA8 { r: 128, g: 128, b: 128, a: 255 });
        assert_eq!(bytes[3], RGBA8 { r: 0, g: 0, b: 0, a: 255 });
    }
}
