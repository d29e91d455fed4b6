pub mod error;
pub mod validate;

pub mod linalg;
pub mod scenario;
pub mod orbit;
pub mod cw;
pub mod trajectory;
pub mod export;
pub mod planner;

pub use crate::error::{RdvzError, Result};
pub use crate::linalg::{mat3::Mat3, vec3::Vec3};
pub use crate::planner::{plan_rendezvous, RendezvousPlan};
pub use crate::scenario::scenario::{PhysicalConstants, Scenario};
