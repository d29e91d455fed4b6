// crates/rdvz-core/src/trajectory/sampler.rs
//
// Interior samples i = 1 .. num_samples-1 with num_samples = floor(T / dt).
// t = 0 (which is just p0) and i = num_samples are not produced; exported
// views carry literal boundary tuples in those slots instead.

use crate::cw::propagate_state;
use crate::error::Result;
use crate::linalg::vec3::Vec3;
use crate::trajectory::state::Sample;

/// Lazy CW propagation over the interior sample grid.
///
/// Every item is computed from (p0, v0) directly, so a clone restarts the
/// sequence and no error accumulates between samples.
#[derive(Clone, Debug)]
pub struct Sampler {
    angular_rate: f64,
    time_step: f64,
    p0: Vec3,
    v0: Vec3,
    next: usize,
    num_samples: usize,
}

impl Sampler {
    pub fn new(angular_rate: f64, time_step: f64, num_samples: usize, p0: Vec3, v0: Vec3) -> Self {
        Self {
            angular_rate,
            time_step,
            p0,
            v0,
            next: 1,
            num_samples,
        }
    }

    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    pub fn sample_at(&self, index: usize) -> Result<Sample> {
        let time = self.time_step * index as f64;
        let state = propagate_state(self.angular_rate, time, self.p0, self.v0)?;
        log::trace!(
            "sample {index} t={time} pos=({}, {}, {})",
            state.position.x,
            state.position.y,
            state.position.z
        );
        Ok(Sample { index, time, state })
    }
}

impl Iterator for Sampler {
    type Item = Result<Sample>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.num_samples {
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some(self.sample_at(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.num_samples.saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Sampler {}
