//! Discrete time domain
use hifitime::{Duration, Epoch, Unit};

use crate::Error;

/// [TimeDomain] is a finite, restartable sequence of [Epoch]s, ranging
/// from `start` to `end` (included) with a constant `step`.
/// It behaves as a forward-only [Iterator] until [TimeDomain::reset].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeDomain {
    start: Epoch,
    end: Epoch,
    step: Duration,
    current: Epoch,
}

impl TimeDomain {
    /// Builds a new [TimeDomain]. When `end` is omitted,
    /// the domain spans one day from `start`.
    pub fn new(start: Epoch, end: Option<Epoch>, step: Duration) -> Result<Self, Error> {
        if step <= Duration::ZERO {
            return Err(Error::InvalidTimeStep);
        }
        Ok(Self {
            start,
            end: end.unwrap_or(start + 1.0 * Unit::Day),
            step,
            current: start,
        })
    }

    /// First [Epoch] of this domain
    pub fn start(&self) -> Epoch {
        self.start
    }

    /// Upper bound (included) of this domain
    pub fn end(&self) -> Epoch {
        self.end
    }

    /// Constant step between successive [Epoch]s
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Rewinds to the first [Epoch]
    pub fn reset(&mut self) {
        self.current = self.start;
    }

    /// Total number of [Epoch]s, regardless of the iteration state.
    pub fn len(&self) -> usize {
        Self::count_between(self.start, self.end, self.step)
    }

    /// True if `end` precedes `start`
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn count_between(from: Epoch, to: Epoch, step: Duration) -> usize {
        if to < from {
            0
        } else {
            let span = (to - from).total_nanoseconds();
            (span / step.total_nanoseconds()) as usize + 1
        }
    }
}

impl Iterator for TimeDomain {
    type Item = Epoch;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current > self.end {
            return None;
        }
        let epoch = self.current;
        self.current += self.step;
        Some(epoch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = Self::count_between(self.current, self.end, self.step);
        (remaining, Some(remaining))
    }
}
