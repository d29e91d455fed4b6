// crates/rdvz-core/src/planner.rs
//
// Single pass: resolve orbit -> A,B at T -> v0 -> sample trajectory.

use crate::cw::{propagate_state, solve::solve_rendezvous};
use crate::error::Result;
use crate::orbit::resolve::{resolve, OrbitalParameters};
use crate::scenario::scenario::{PhysicalConstants, Scenario};
use crate::trajectory::state::RelativeState;
use crate::trajectory::Trajectory;
use crate::validate::{validate_constants, validate_scenario};

/// Relative miss at T above which the literal origin tuple in the
/// exported views no longer matches the computed curve.
const TERMINAL_MISS_TOLERANCE: f64 = 1e-6;

#[derive(Clone, Debug, PartialEq)]
pub struct RendezvousPlan {
    pub scenario: Scenario,
    pub orbit: OrbitalParameters,
    /// p0 given, v0 solved.
    pub initial_state: RelativeState,
    /// Computed state at exactly t = T.
    pub arrival_state: RelativeState,
    pub trajectory: Trajectory,
}

impl RendezvousPlan {
    pub fn num_samples(&self) -> usize {
        self.trajectory.num_samples
    }

    /// |position(T)|, m. Zero up to rounding for a well-conditioned solve.
    pub fn terminal_miss(&self) -> f64 {
        self.arrival_state.position.norm()
    }
}

pub fn plan_rendezvous(
    scenario: &Scenario,
    constants: &PhysicalConstants,
) -> Result<RendezvousPlan> {
    validate_scenario(scenario)?;
    validate_constants(constants)?;

    let orbit = resolve(scenario.altitude, scenario.angular_rate, constants);
    let w = orbit.angular_rate;
    let p0 = scenario.initial_position;

    let v0 = solve_rendezvous(w, scenario.transfer_time, p0)?;
    let arrival_state = propagate_state(w, scenario.transfer_time, p0, v0)?;

    let miss = arrival_state.position.norm();
    if miss > TERMINAL_MISS_TOLERANCE * p0.norm().max(1.0) {
        log::warn!(
            "position at T misses the target by {miss:e} m; views still end at the origin"
        );
    }

    let num_samples = scenario.num_samples();
    let trajectory = Trajectory::sample(
        w,
        scenario.transfer_time,
        scenario.time_step,
        num_samples,
        p0,
        v0,
    )?;
    log::info!(
        "planned rendezvous: w={w:e} rad/s, |v0|={:.6} m/s, {} interior samples",
        v0.norm(),
        trajectory.len()
    );

    Ok(RendezvousPlan {
        scenario: *scenario,
        orbit,
        initial_state: RelativeState::new(p0, v0),
        arrival_state,
        trajectory,
    })
}
