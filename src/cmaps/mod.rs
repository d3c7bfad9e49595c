//! Named base colormaps.
//!
//! The registry holds piecewise linear colormaps under the names
//! `gray` (alias `grey`), `binary`, `jet`, `hot`, `cool`, `spring`,
//! `summer`, `autumn`, `winter`, `bwr`, `seismic` and `viridis`.
//! Appending `_r` to a name gives the reversed colormap.

use std::collections::HashMap;
use std::fmt;
use lazy_static::lazy_static;
use log::debug;
use crate::error::{Error, Result};
use crate::{ColorRange, Reversed, Rgba};

mod data;
mod ty;
pub use ty::Segmented;

lazy_static! {
    static ref REGISTRY: HashMap<&'static str, &'static Segmented> = {
        let mut m: HashMap<_, _> = data::ALL.iter().map(|c| (c.name, c))
            .collect();
        if let Some(&gray) = m.get("gray") {
            m.insert("grey", gray);
        }
        m
    };
}

/// A colormap of the registry, possibly reversed.
#[derive(Clone, Copy, Debug)]
pub enum Builtin {
    Plain(&'static Segmented),
    Reversed(Reversed<&'static Segmented>),
}

impl Builtin {
    /// Registered name of the underlying colormap (without `_r`).
    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Plain(map) => map.name,
            Builtin::Reversed(rev) => rev.inner().name,
        }
    }

    pub fn is_reversed(&self) -> bool { matches!(self, Builtin::Reversed(_)) }
}

impl ColorRange for Builtin {
    #[inline]
    fn rgb(&self, t: f64) -> Rgba {
        match self {
            Builtin::Plain(map) => map.rgb(t),
            Builtin::Reversed(rev) => rev.rgb(t),
        }
    }
}

/// Look up the colormap registered as `name`.
///
/// # Example
///
/// ```
/// use warpcmap::{cmaps, ColorRange};
/// let jet_r = cmaps::get("jet_r").unwrap();
/// assert_eq!(jet_r.rgb(1.), cmaps::get("jet").unwrap().rgb(0.));
/// assert!(cmaps::get("nonexistent").is_err());
/// ```
pub fn get(name: &str) -> Result<Builtin> {
    if let Some(&map) = REGISTRY.get(name) {
        return Ok(Builtin::Plain(map))
    }
    match name.strip_suffix("_r").and_then(|base| REGISTRY.get(base)) {
        Some(&map) => Ok(Builtin::Reversed(Reversed::new(map))),
        None => Err(Error::LookupFailure(name.to_string())),
    }
}

/// Names of the registered colormaps, in alphabetical order (aliases
/// and reversed variants excluded).
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = data::ALL.iter().map(|c| c.name).collect();
    names.sort_unstable();
    names
}

/// The colormap to warp: either the name of a registered colormap or
/// a colormap value.
#[derive(Clone, Copy)]
pub enum Basemap<'a> {
    Named(&'a str),
    Direct(&'a dyn ColorRange),
}

impl<'a> Basemap<'a> {
    /// Resolve a name through the registry; a direct colormap is
    /// returned as is.
    pub fn resolve(self) -> Result<Box<dyn ColorRange + 'a>> {
        match self {
            Basemap::Named(name) => {
                let map = get(name)?;
                debug!("resolved colormap {name:?}");
                Ok(Box::new(map))
            }
            Basemap::Direct(map) => Ok(Box::new(map)),
        }
    }
}

impl<'a> From<&'a str> for Basemap<'a> {
    fn from(name: &'a str) -> Self { Basemap::Named(name) }
}

impl fmt::Debug for Basemap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Basemap::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Basemap::Direct(_) => f.write_str("Direct(..)"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn all_maps_are_well_formed() {
        for c in data::ALL {
            for stops in [c.red, c.green, c.blue] {
                assert_eq!(stops[0].0, 0., "{}", c.name);
                assert_eq!(stops[stops.len() - 1].0, 1., "{}", c.name);
                assert!(stops.windows(2).all(|w| w[0].0 < w[1].0),
                        "{}: stops not increasing", c.name);
                assert!(stops.iter().all(|&(_, y)| (0. ..= 1.).contains(&y)));
            }
        }
        assert_eq!(names().len(), data::ALL.len());
        assert!(names().windows(2).all(|w| w[0] < w[1]), "{:?}", names());
    }

    #[test]
    fn gray_is_identity() {
        let gray = get("gray").unwrap();
        for i in 0 ..= 10 {
            let x = i as f64 / 10.;
            assert_eq!(gray.rgb(x), Rgba { r: x, g: x, b: x, a: 1. });
        }
        assert_eq!(get("grey").unwrap().name(), "gray");
    }

    #[test]
    fn jet_midpoint_is_green() {
        let c = get("jet").unwrap().rgb(0.5);
        assert_abs_diff_eq!(c.g, 1.);
        assert_abs_diff_eq!(c.r, 0.15 / 0.31, epsilon = 1e-12);
        assert_abs_diff_eq!(c.b, 0.15 / 0.31, epsilon = 1e-12);
    }

    #[test]
    fn reversed_names() {
        let hot = get("hot").unwrap();
        let hot_r = get("hot_r").unwrap();
        assert!(hot_r.is_reversed() && !hot.is_reversed());
        assert_eq!(hot_r.name(), "hot");
        for i in 0 ..= 8 {
            let t = i as f64 / 8.;
            assert_eq!(hot_r.rgb(t), hot.rgb(1. - t));
        }
        assert!(matches!(get("hot_r_r"), Err(Error::LookupFailure(_))));
    }

    #[test]
    fn clamping_and_nan() {
        let jet = get("jet").unwrap();
        assert_eq!(jet.rgb(-1.), jet.rgb(0.));
        assert_eq!(jet.rgb(2.), jet.rgb(1.));
        assert_eq!(jet.rgb(f64::NAN), crate::TRANSPARENT);
    }

    #[test]
    fn resolve_basemap() {
        assert_eq!(Basemap::from("nonexistent_map_name").resolve().err(),
                   Some(Error::LookupFailure("nonexistent_map_name".into())));
        let bwr = get("bwr").unwrap();
        let direct = Basemap::Direct(&bwr).resolve().unwrap();
        assert_eq!(direct.rgb(0.5), Rgba { r: 1., g: 1., b: 1., a: 1. });
        assert_eq!(format!("{:?}", Basemap::Named("jet")), "Named(\"jet\")");
    }
}
