pub mod sampler;
pub mod state;

use crate::error::Result;
use crate::linalg::vec3::Vec3;
use crate::trajectory::sampler::Sampler;
use crate::trajectory::state::Sample;

/// Collected interior samples plus the data needed to frame them.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    pub initial_position: Vec3,
    pub transfer_time: f64,
    pub time_step: f64,
    /// floor(T / dt)
    pub num_samples: usize,
    /// Time-ordered, indices 1..num_samples.
    pub samples: Vec<Sample>,
}

impl Trajectory {
    pub fn sample(
        angular_rate: f64,
        transfer_time: f64,
        time_step: f64,
        num_samples: usize,
        p0: Vec3,
        v0: Vec3,
    ) -> Result<Self> {
        let samples = Sampler::new(angular_rate, time_step, num_samples, p0, v0)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            initial_position: p0,
            transfer_time,
            time_step,
            num_samples,
            samples,
        })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
