use alloc::format;
use alloc::string::String;
use core::num::Saturating;
use serde::{Deserialize, Serialize};

/// Whole-second count-up clock, advanced by externally driven ticks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    elapsed: Saturating<u32>,
    running: bool,
}

impl Timer {
    /// A clock at zero that is already counting.
    pub fn started() -> Self {
        Self {
            elapsed: Saturating(0),
            running: true,
        }
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed.0
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances one second, returns whether the clock moved.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.elapsed += 1;
        }
        self.running
    }

    /// Returns `true` only for the call that actually stopped the clock.
    pub fn stop(&mut self) -> bool {
        core::mem::replace(&mut self.running, false)
    }

    pub fn display(&self) -> String {
        format_clock(self.elapsed_secs())
    }
}

/// `MM:SS`, minutes keep growing past an hour.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_pads_and_does_not_roll_over_hours() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(3600), "60:00");
        assert_eq!(format_clock(6001), "100:01");
    }

    #[test]
    fn ticks_only_count_while_running() {
        let mut timer = Timer::started();
        assert!(timer.tick());
        assert!(timer.tick());
        assert_eq!(timer.elapsed_secs(), 2);

        assert!(timer.stop());
        assert!(!timer.stop());
        assert!(!timer.tick());
        assert_eq!(timer.display(), "00:02");
    }

    #[test]
    fn default_timer_is_idle() {
        let mut timer = Timer::default();
        assert!(!timer.is_running());
        assert!(!timer.tick());
        assert_eq!(timer.elapsed_secs(), 0);
    }
}
