//! Closed-form hydrogen orbitals in atomic units.
//!
//! Every function takes `(r, theta, phi)` so that all of them share one signature and
//! can sit in the same dispatch table. The spherically symmetric `s` orbitals ignore
//! both angles.

use std::f64::consts::PI;

#[inline]
pub fn psi_1s(r: f64, _theta: f64, _phi: f64) -> f64 {
    (1.0 / PI.sqrt()) * (-r).exp()
}

#[inline]
pub fn psi_2s(r: f64, _theta: f64, _phi: f64) -> f64 {
    (1.0 / 4.0) * (1.0 / (2.0 * PI).sqrt()) * (2.0 - r) * (-r).exp()
}

#[inline]
pub fn psi_2pz(r: f64, theta: f64, _phi: f64) -> f64 {
    (1.0 / (4.0 * (2.0 * PI).sqrt())) * r * (-r / 2.0).exp() * theta.cos()
}

#[inline]
pub fn psi_2px(r: f64, theta: f64, phi: f64) -> f64 {
    1.0 / (4.0 * (2.0 * PI).sqrt()) * r * (-r / 2.0).exp() * theta.sin() * phi.cos()
}

#[inline]
pub fn psi_2py(r: f64, theta: f64, phi: f64) -> f64 {
    1.0 / (4.0 * (2.0 * PI).sqrt()) * r * (-r / 2.0).exp() * theta.sin() * phi.sin()
}

#[inline]
pub fn psi_3s(r: f64, _theta: f64, _phi: f64) -> f64 {
    1.0 / (81.0 * (3.0 * PI).sqrt()) * (27.0 - (18.0 * r) + 2.0 * r.powi(2)) * (-r / 3.0).exp()
}

#[inline]
pub fn psi_3pz(r: f64, theta: f64, _phi: f64) -> f64 {
    (1.0 / 81.0) * (2.0 / PI).sqrt() * (6.0 * r - r.powi(2)) * (-r / 3.0).exp() * theta.cos()
}

#[inline]
pub fn psi_3px(r: f64, theta: f64, phi: f64) -> f64 {
    2.0_f64.sqrt() / (81.0 * PI.sqrt())
        * (6.0 * r - r.powi(2))
        * (-r / 3.0).exp()
        * theta.sin()
        * phi.cos()
}

#[inline]
pub fn psi_3py(r: f64, theta: f64, phi: f64) -> f64 {
    2.0_f64.sqrt() / (81.0 * PI.sqrt())
        * (6.0 * r - r.powi(2))
        * (-r / 3.0).exp()
        * theta.sin()
        * phi.sin()
}

#[inline]
pub fn psi_3dz2(r: f64, theta: f64, _phi: f64) -> f64 {
    1.0 / (81.0 * (6.0 * PI).sqrt())
        * r.powi(2)
        * (-r / 3.0).exp()
        * (3.0 * theta.cos().powi(2) - 1.0)
}
