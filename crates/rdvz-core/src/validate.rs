use crate::error::{RdvzError, Result};
use crate::scenario::defaults::MAX_SAMPLES;
use crate::scenario::scenario::{PhysicalConstants, Scenario};

pub fn validate_scenario(s: &Scenario) -> Result<()> {
    // Negated comparisons so NaN is rejected too.
    if !(s.transfer_time > 0.0)
        || !s.transfer_time.is_finite()
        || !(s.angular_rate >= 0.0)
        || !s.angular_rate.is_finite()
        || !(s.altitude >= 0.0)
        || !s.altitude.is_finite()
    {
        return Err(RdvzError::InvalidParameter(
            "w, T or altitude_target".into(),
        ));
    }
    // A zero step would make floor(T / step) unbounded.
    if !(s.time_step > 0.0) || !s.time_step.is_finite() {
        return Err(RdvzError::InvalidParameter("time_step".into()));
    }
    if s.transfer_time / s.time_step > MAX_SAMPLES as f64 {
        return Err(RdvzError::InvalidParameter(format!(
            "time_step (T / time_step exceeds {MAX_SAMPLES} samples)"
        )));
    }
    if !s.initial_position.is_finite() {
        return Err(RdvzError::InvalidParameter("x0, y0 or z0".into()));
    }
    Ok(())
}

pub fn validate_constants(c: &PhysicalConstants) -> Result<()> {
    if !(c.mu > 0.0) || !c.mu.is_finite() {
        return Err(RdvzError::InvalidParameter("mu".into()));
    }
    if !(c.earth_radius >= 0.0) || !c.earth_radius.is_finite() {
        return Err(RdvzError::InvalidParameter("earth_radius".into()));
    }
    Ok(())
}
