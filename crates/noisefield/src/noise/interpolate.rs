//! Interpolation kernels.
//!
//! Easing reshapes a blend weight in `[0, 1]`; [`lerp`] and [`bilinear`] then
//! blend linearly with the eased weight. All kernels accept `mu = 0` and
//! `mu = 1` without special cases.

use std::f64::consts::PI;

/// Linear interpolation, exact at both endpoints and when `a == b`.
#[inline]
pub fn lerp(a: f64, b: f64, mu: f64) -> f64 {
    if mu < 0.5 {
        a + (b - a) * mu
    } else {
        b - (b - a) * (1.0 - mu)
    }
}

/// Cosine easing: `(1 - cos(mu * pi)) / 2`.
///
/// Evaluated as `(1 + sin(pi * (mu - 0.5))) / 2`, which is the same curve but
/// hits 0, 0.5 and 1 exactly at `mu` = 0, 0.5 and 1.
#[inline]
pub fn ease_cosine(mu: f64) -> f64 {
    (1.0 + (PI * (mu - 0.5)).sin()) * 0.5
}

/// Smoothstep: `t * t * (3 - 2t)`.
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Quintic fade: `6t^5 - 15t^4 + 10t^3`.
#[inline]
pub fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Interpolate a->b along x on row 0, c->d along x on row 1, then the rows
/// along y.
///
/// Corners: `a = (x0, y0)`, `b = (x1, y0)`, `c = (x0, y1)`, `d = (x1, y1)`.
#[inline]
pub fn bilinear(a: f64, b: f64, c: f64, d: f64, x_mu: f64, y_mu: f64) -> f64 {
    let row0 = lerp(a, b, x_mu);
    let row1 = lerp(c, d, x_mu);
    lerp(row0, row1, y_mu)
}

/// Easing kernel applied to blend weights before interpolating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    /// No easing; C0 at cell boundaries.
    Linear,
    /// [`ease_cosine`].
    #[default]
    Cosine,
    /// [`smoothstep`].
    Smoothstep,
    /// [`quintic`].
    Quintic,
}

impl Easing {
    /// Apply the easing to a blend weight.
    #[inline]
    pub fn apply(self, mu: f64) -> f64 {
        match self {
            Easing::Linear => mu,
            Easing::Cosine => ease_cosine(mu),
            Easing::Smoothstep => smoothstep(mu),
            Easing::Quintic => quintic(mu),
        }
    }

    /// Eased 1D interpolation.
    #[inline]
    pub fn interpolate(self, a: f64, b: f64, mu: f64) -> f64 {
        lerp(a, b, self.apply(mu))
    }

    /// Eased bilinear interpolation.
    #[inline]
    pub fn interpolate_2d(self, a: f64, b: f64, c: f64, d: f64, x_mu: f64, y_mu: f64) -> f64 {
        bilinear(a, b, c, d, self.apply(x_mu), self.apply(y_mu))
    }
}
