//! Snapshot windows
//!
//! A daily time window during which the platform may take an automatic
//! backup, rendered as `HH:MM-HH:MM`.

use crate::error::TemplateError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A daily snapshot window
///
/// The end time is derived from start and duration; windows may wrap
/// past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotWindow {
    start_hour: u32,
    start_minute: u32,
    duration_minutes: u32,
}

impl SnapshotWindow {
    /// Window starting at `start_hour:start_minute` for `duration_minutes`
    ///
    /// The start hour must be 0–23, the minute 0–59 and the duration
    /// between 60 minutes and one week.
    pub fn new(
        start_hour: u32,
        start_minute: u32,
        duration_minutes: u32,
    ) -> Result<Self, TemplateError> {
        if start_hour > 23 {
            return Err(TemplateError::StartHourOutOfRange(start_hour));
        }
        if start_minute > 59 {
            return Err(TemplateError::StartMinuteOutOfRange(start_minute));
        }
        if !(60..=10_080).contains(&duration_minutes) {
            return Err(TemplateError::DurationOutOfRange(duration_minutes));
        }
        Ok(Self {
            start_hour,
            start_minute,
            duration_minutes,
        })
    }

    /// Window duration in minutes
    #[inline]
    #[must_use]
    pub const fn duration_minutes(self) -> u32 {
        self.duration_minutes
    }
}

impl Default for SnapshotWindow {
    /// Two hours starting at 03:00
    fn default() -> Self {
        Self {
            start_hour: 3,
            start_minute: 0,
            duration_minutes: 120,
        }
    }
}

impl Display for SnapshotWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let start = self.start_hour * 60 + self.start_minute;
        let end = (start + self.duration_minutes) % MINUTES_PER_DAY;
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            start / 60,
            start % 60,
            end / 60,
            end % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_start_and_end() {
        let window = SnapshotWindow::new(16, 0, 60).unwrap();
        assert_eq!(window.to_string(), "16:00-17:00");

        let window = SnapshotWindow::new(5, 30, 90).unwrap();
        assert_eq!(window.to_string(), "05:30-07:00");
    }

    #[test]
    fn wraps_past_midnight() {
        let window = SnapshotWindow::new(23, 30, 120).unwrap();
        assert_eq!(window.to_string(), "23:30-01:30");
    }

    #[test]
    fn default_window() {
        assert_eq!(SnapshotWindow::default().to_string(), "03:00-05:00");
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert_eq!(
            SnapshotWindow::new(24, 0, 120),
            Err(TemplateError::StartHourOutOfRange(24))
        );
        assert_eq!(
            SnapshotWindow::new(3, 60, 120),
            Err(TemplateError::StartMinuteOutOfRange(60))
        );
        assert_eq!(
            SnapshotWindow::new(3, 0, 30),
            Err(TemplateError::DurationOutOfRange(30))
        );
        assert_eq!(
            SnapshotWindow::new(3, 0, 20_000),
            Err(TemplateError::DurationOutOfRange(20_000))
        );
    }
}
