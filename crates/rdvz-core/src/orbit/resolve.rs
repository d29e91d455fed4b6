// crates/rdvz-core/src/orbit/resolve.rs
//
// Circular-orbit relation between target altitude h and mean motion w:
//   w^2 = mu / (h + R)^3
//
// Exactly one of (h, w) is treated as the independent input. h == 0 means
// "derive h from w"; otherwise w is derived from h.

use crate::scenario::scenario::PhysicalConstants;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalParameters {
    /// m above `earth_radius`
    pub altitude: f64,
    /// rad/s
    pub angular_rate: f64,
}

pub fn resolve(altitude: f64, angular_rate: f64, c: &PhysicalConstants) -> OrbitalParameters {
    if altitude == 0.0 {
        let altitude = altitude_from_rate(angular_rate, c);
        if angular_rate == 0.0 {
            log::warn!("altitude and angular rate both zero; derived altitude {altitude} m");
        } else {
            log::info!("derived altitude {altitude:.3} m from angular rate {angular_rate:e} rad/s");
        }
        OrbitalParameters {
            altitude,
            angular_rate,
        }
    } else {
        let derived = rate_from_altitude(altitude, c);
        if angular_rate != 0.0 {
            log::warn!(
                "angular rate {angular_rate:e} rad/s overridden by {derived:e} rad/s \
                 (altitude {altitude} m)"
            );
        } else {
            log::info!("derived angular rate {derived:e} rad/s from altitude {altitude} m");
        }
        OrbitalParameters {
            altitude,
            angular_rate: derived,
        }
    }
}

/// sqrt(mu / (h + R)^3)
pub fn rate_from_altitude(altitude: f64, c: &PhysicalConstants) -> f64 {
    (c.mu / (altitude + c.earth_radius).powi(3)).sqrt()
}

/// cbrt(mu / w^2) - R; infinite for w == 0.
pub fn altitude_from_rate(angular_rate: f64, c: &PhysicalConstants) -> f64 {
    (c.mu / (angular_rate * angular_rate)).cbrt() - c.earth_radius
}
