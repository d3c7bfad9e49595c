//! Linear segment data of the builtin colormaps.

use super::ty::Segmented;

const RAMP_UP: &[(f64, f64)] = &[(0., 0.), (1., 1.)];
const RAMP_DOWN: &[(f64, f64)] = &[(0., 1.), (1., 0.)];
const ZERO: &[(f64, f64)] = &[(0., 0.), (1., 0.)];
const ONE: &[(f64, f64)] = &[(0., 1.), (1., 1.)];

pub(crate) const ALL: &[Segmented] = &[
    Segmented { name: "gray", red: RAMP_UP, green: RAMP_UP, blue: RAMP_UP },
    Segmented { name: "binary",
                red: RAMP_DOWN, green: RAMP_DOWN, blue: RAMP_DOWN },
    Segmented {
        name: "jet",
        red: &[(0., 0.), (0.35, 0.), (0.66, 1.), (0.89, 1.), (1., 0.5)],
        green: &[(0., 0.), (0.125, 0.), (0.375, 1.), (0.64, 1.), (0.91, 0.),
                 (1., 0.)],
        blue: &[(0., 0.5), (0.11, 1.), (0.34, 1.), (0.65, 0.), (1., 0.)],
    },
    Segmented {
        name: "hot",
        red: &[(0., 0.0416), (0.365079, 1.), (1., 1.)],
        green: &[(0., 0.), (0.365079, 0.), (0.746032, 1.), (1., 1.)],
        blue: &[(0., 0.), (0.746032, 0.), (1., 1.)],
    },
    Segmented { name: "cool", red: RAMP_UP, green: RAMP_DOWN, blue: ONE },
    Segmented { name: "spring", red: ONE, green: RAMP_UP, blue: RAMP_DOWN },
    Segmented { name: "summer", red: RAMP_UP, green: &[(0., 0.5), (1., 1.)],
                blue: &[(0., 0.4), (1., 0.4)] },
    Segmented { name: "autumn", red: ONE, green: RAMP_UP, blue: ZERO },
    Segmented { name: "winter", red: ZERO, green: RAMP_UP,
                blue: &[(0., 1.), (1., 0.5)] },
    Segmented {
        name: "bwr",
        red: &[(0., 0.), (0.5, 1.), (1., 1.)],
        green: &[(0., 0.), (0.5, 1.), (1., 0.)],
        blue: &[(0., 1.), (0.5, 1.), (1., 0.)],
    },
    Segmented {
        name: "seismic",
        red: &[(0., 0.), (0.25, 0.), (0.5, 1.), (0.75, 1.), (1., 0.5)],
        green: &[(0., 0.), (0.25, 0.), (0.5, 1.), (0.75, 0.), (1., 0.)],
        blue: &[(0., 0.3), (0.25, 1.), (0.5, 1.), (0.75, 0.), (1., 0.)],
    },
    // 11 samples of Matplotlib viridis, linearly interpolated.
    Segmented {
        name: "viridis",
        red: &[(0., 0.267004), (0.1, 0.282623), (0.2, 0.253935),
               (0.3, 0.206756), (0.4, 0.163625), (0.5, 0.127568),
               (0.6, 0.134692), (0.7, 0.266941), (0.8, 0.477504),
               (0.9, 0.741388), (1., 0.993248)],
        green: &[(0., 0.004874), (0.1, 0.140926), (0.2, 0.265254),
                 (0.3, 0.371758), (0.4, 0.471133), (0.5, 0.566949),
                 (0.6, 0.658636), (0.7, 0.748751), (0.8, 0.821444),
                 (0.9, 0.873449), (1., 0.906157)],
        blue: &[(0., 0.329415), (0.1, 0.457517), (0.2, 0.529983),
                (0.3, 0.553117), (0.4, 0.558148), (0.5, 0.550556),
                (0.6, 0.517649), (0.7, 0.440573), (0.8, 0.318195),
                (0.9, 0.149561), (1., 0.143936)],
    },
];
