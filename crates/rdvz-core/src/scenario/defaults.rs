// crates/rdvz-core/src/scenario/defaults.rs

use crate::linalg::vec3::Vec3;
use crate::scenario::scenario::{PhysicalConstants, Scenario};

/// Mean Earth radius, m.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Earth gravitational parameter, m^3 s^-2.
pub const MU_EARTH: f64 = 3.986e14;

/// Below this |det(B)| the transfer has no usable solution.
pub const SINGULAR_DET_THRESHOLD: f64 = 1e-6;

/// Upper bound on floor(T / step); every sample is held in memory.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Number of positional scalars accepted on the command line.
pub const SCENARIO_ARITY: usize = 7;

pub const DEFAULT_TRANSFER_TIME: f64 = 3600.0;
pub const DEFAULT_TIME_STEP: f64 = 60.0;
pub const DEFAULT_ALTITUDE: f64 = 400_000.0;
// 0 means "derive from altitude".
pub const DEFAULT_ANGULAR_RATE: f64 = 0.0;
pub const DEFAULT_INITIAL_POSITION: Vec3 = Vec3::new(100_000.0, 100_000.0, 100_000.0);

pub fn default_scenario() -> Scenario {
    Scenario {
        transfer_time: DEFAULT_TRANSFER_TIME,
        time_step: DEFAULT_TIME_STEP,
        altitude: DEFAULT_ALTITUDE,
        angular_rate: DEFAULT_ANGULAR_RATE,
        initial_position: DEFAULT_INITIAL_POSITION,
    }
}

pub fn default_constants() -> PhysicalConstants {
    PhysicalConstants {
        earth_radius: EARTH_RADIUS,
        mu: MU_EARTH,
    }
}
