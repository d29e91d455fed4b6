// crates/rdvz-core/src/scenario/scenario.rs

use crate::error::{RdvzError, Result};
use crate::linalg::vec3::Vec3;
use crate::scenario::defaults::{default_constants, default_scenario, SCENARIO_ARITY};

/// Positional argument names, in command-line order.
pub const SCENARIO_FIELDS: [&str; SCENARIO_ARITY] =
    ["T", "time_step", "altitude_target", "w", "x0", "y0", "z0"];

/// The seven user scalars of one rendezvous run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scenario {
    /// Time of impact T, s.
    pub transfer_time: f64,
    /// Spacing of exported samples, s.
    pub time_step: f64,
    /// Target altitude above the Earth radius, m. 0 = derive from `angular_rate`.
    pub altitude: f64,
    /// Target orbital rate, rad/s. 0 = derive from `altitude`.
    pub angular_rate: f64,
    /// Chaser position relative to the target at t=0, m.
    pub initial_position: Vec3,
}

impl Default for Scenario {
    fn default() -> Self {
        default_scenario()
    }
}

impl Scenario {
    /// Build from the raw positional arguments: none (defaults) or exactly seven.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        if args.is_empty() {
            return Ok(default_scenario());
        }
        if args.len() != SCENARIO_ARITY {
            return Err(RdvzError::ArgumentCount {
                expected: SCENARIO_ARITY,
                got: args.len(),
            });
        }

        let mut v = [0.0f64; SCENARIO_ARITY];
        for (i, raw) in args.iter().enumerate() {
            v[i] = parse_scalar(SCENARIO_FIELDS[i], raw.as_ref())?;
        }
        Ok(Self::from_values(v))
    }

    pub fn from_values(v: [f64; SCENARIO_ARITY]) -> Self {
        Scenario {
            transfer_time: v[0],
            time_step: v[1],
            altitude: v[2],
            angular_rate: v[3],
            initial_position: Vec3::new(v[4], v[5], v[6]),
        }
    }

    /// floor(T / step), saturating at 0 for degenerate ratios.
    pub fn num_samples(&self) -> usize {
        let n = (self.transfer_time / self.time_step).floor();
        if n.is_finite() && n > 0.0 {
            n as usize
        } else {
            0
        }
    }
}

fn parse_scalar(name: &'static str, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| RdvzError::InvalidNumber {
            name,
            text: text.to_string(),
        })
}

/// Physical constants of the central body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalConstants {
    /// m
    pub earth_radius: f64,
    /// m^3 s^-2
    pub mu: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        default_constants()
    }
}
