use crate::linalg::vec3::Vec3;

/// Chaser state relative to the target, m and m/s.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RelativeState {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl RelativeState {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }
}

/// One interior trajectory point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// i in 1..num_samples
    pub index: usize,
    /// i * time_step, s
    pub time: f64,
    pub state: RelativeState,
}
