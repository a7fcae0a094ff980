//! Bounded named gauges.
//!
//! Every update is clamped into the gauge's `[min, max]` range; values
//! beyond the bounds are absorbed rather than rejected.

use std::collections::BTreeMap;

use log::{debug, info};

use crate::error::{Error, Result};

/// Gauge tracking how happy the cat is (0-100 by default).
pub const HAPPINESS: &str = "happiness";
/// Gauge counting likes.  Never decreases.
pub const LIKE_COUNT: &str = "likeCount";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Gauge {
    value: i64,
    min: i64,
    max: i64,
}

/// Named gauges with enforced bounds.
#[derive(Debug, Default)]
pub struct MetricStore {
    gauges: BTreeMap<String, Gauge>,
}

impl MetricStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a gauge.  Each name may be defined once.
    pub fn define(&mut self, name: &str, initial: i64, min: i64, max: i64) -> Result<()> {
        if self.gauges.contains_key(name) {
            return Err(Error::DuplicateGauge);
        }
        if min > max {
            return Err(Error::InvalidConfiguration("gauge min exceeds max"));
        }
        if !(min..=max).contains(&initial) {
            return Err(Error::InvalidConfiguration("gauge initial value out of bounds"));
        }
        self.gauges.insert(
            name.to_owned(),
            Gauge {
                value: initial,
                min,
                max,
            },
        );
        info!("Metrics: defined '{}' = {} [{}, {}]", name, initial, min, max);
        Ok(())
    }

    /// Apply `delta` and clamp.  Returns the stored value.
    pub fn adjust(&mut self, name: &str, delta: i64) -> Result<i64> {
        let gauge = self.gauges.get_mut(name).ok_or(Error::UnknownGauge)?;
        let next = gauge.value.saturating_add(delta).clamp(gauge.min, gauge.max);
        if next != gauge.value {
            debug!("Metrics: '{}' {} -> {}", name, gauge.value, next);
        }
        gauge.value = next;
        Ok(next)
    }

    pub fn get(&self, name: &str) -> Result<i64> {
        self.gauges
            .get(name)
            .map(|g| g.value)
            .ok_or(Error::UnknownGauge)
    }

    /// `(min, max)` for a defined gauge.
    pub fn bounds(&self, name: &str) -> Result<(i64, i64)> {
        self.gauges
            .get(name)
            .map(|g| (g.min, g.max))
            .ok_or(Error::UnknownGauge)
    }
}
