//! Caption rotation timer.
//!
//! Cycles an index over a fixed-length sequence (the fact list) once per
//! period.  The timer owns only its task handle; ticks arrive through the
//! [`Scheduler`] and are applied by the controller via [`RotationTimer::tick`].

use log::info;

use crate::error::{Error, Result};
use crate::scheduler::{Scheduler, TaskId};

/// Circular index advanced on a fixed period.
#[derive(Debug)]
pub struct RotationTimer {
    sequence_len: usize,
    period_ms: u64,
    current_index: usize,
    /// Armed repeating task, `None` while stopped.
    task: Option<TaskId>,
}

impl RotationTimer {
    /// Both `sequence_len` and `period_ms` must be non-zero.
    pub fn new(sequence_len: usize, period_ms: u64) -> Result<Self> {
        if sequence_len == 0 {
            return Err(Error::InvalidConfiguration("rotation sequence must not be empty"));
        }
        if period_ms == 0 {
            return Err(Error::InvalidConfiguration("rotation period must be > 0"));
        }
        Ok(Self {
            sequence_len,
            period_ms,
            current_index: 0,
            task: None,
        })
    }

    /// Arm the repeating tick.  A no-op while already running; after a
    /// `stop()` rotation resumes from the current index.
    pub fn start<T: Clone>(&mut self, sched: &mut Scheduler<T>, task: T) -> Result<()> {
        if self.task.is_some() {
            return Ok(());
        }
        self.task = Some(sched.schedule_repeating(self.period_ms, task)?);
        info!(
            "Rotation: started at index {} (period {}ms)",
            self.current_index, self.period_ms
        );
        Ok(())
    }

    /// Cancel the pending tick.  Returns `true` only on the call that
    /// actually stopped a running timer.
    pub fn stop<T: Clone>(&mut self, sched: &mut Scheduler<T>) -> bool {
        match self.task.take() {
            Some(id) => {
                sched.cancel(id);
                info!("Rotation: stopped at index {}", self.current_index);
                true
            }
            None => false,
        }
    }

    /// Advance to the next index, wrapping at the sequence length.
    pub fn tick(&mut self) -> usize {
        self.current_index = (self.current_index + 1) % self.sequence_len;
        self.current_index
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }
}
