// crates/rdvz-cli/src/cmd/plan.rs

use std::path::PathBuf;

use clap::Args;
use rdvz_core::export::number::NumberFormat;
use rdvz_core::scenario::defaults::{EARTH_RADIUS, MU_EARTH};
use rdvz_core::{plan_rendezvous, PhysicalConstants, Scenario};

use crate::io::tikz::write_views;

#[derive(Args)]
pub struct PlanArgs {
    /// T time_step altitude_target w x0 y0 z0 (all seven, or none for defaults)
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Directory receiving the five output_tikz_*.txt files
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Significant digits per exported number
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=17))]
    pub digits: u8,

    /// Shortest round-trip numbers instead of --digits
    #[arg(long)]
    pub exact: bool,

    /// Gravitational parameter, m^3/s^2
    #[arg(long, default_value_t = MU_EARTH)]
    pub mu: f64,

    /// Central body radius, m
    #[arg(long, default_value_t = EARTH_RADIUS)]
    pub earth_radius: f64,
}

pub fn run(args: PlanArgs) -> anyhow::Result<()> {
    let scenario = Scenario::from_args(&args.values)?;
    let constants = PhysicalConstants {
        earth_radius: args.earth_radius,
        mu: args.mu,
    };

    let plan = plan_rendezvous(&scenario, &constants)?;
    println!("The number of samples is {}", plan.num_samples());

    let v0 = plan.initial_state.velocity;
    let v_t = plan.arrival_state.velocity;
    log::info!(
        "altitude={} m w={:e} rad/s v0=({}, {}, {}) m/s",
        plan.orbit.altitude,
        plan.orbit.angular_rate,
        v0.x,
        v0.y,
        v0.z
    );
    log::info!(
        "arrival velocity=({}, {}, {}) m/s, miss={:e} m",
        v_t.x,
        v_t.y,
        v_t.z,
        plan.terminal_miss()
    );

    let fmt = if args.exact {
        NumberFormat::Shortest
    } else {
        NumberFormat::Significant(args.digits as usize)
    };
    write_views(&args.out_dir, &plan.trajectory, &fmt)?;
    Ok(())
}
