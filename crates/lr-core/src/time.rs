//! Resolution of a wall-clock hour to its two-hour time branch (时辰).

use chrono::Timelike;

use crate::branch::Branch;
use crate::error::{LiurenError, LiurenResult};

/// A two-hour window of the day and the branch that rules it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourWindow {
    /// First hour of the window (inclusive).
    pub start: u32,
    /// Hour the window ends (exclusive).
    pub end: u32,
    /// The ruling branch.
    pub branch: Branch,
}

impl HourWindow {
    /// Whether the window spans midnight.
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    /// Whether `hour` falls inside this window.
    pub fn contains(&self, hour: u32) -> bool {
        if self.wraps() {
            hour >= self.start || hour < self.end
        } else {
            (self.start..self.end).contains(&hour)
        }
    }
}

const fn window(start: u32, end: u32, branch: Branch) -> HourWindow {
    HourWindow { start, end, branch }
}

/// The twelve hour windows, 子 first. Only 子 (23:00-01:00) wraps midnight.
pub const HOUR_WINDOWS: [HourWindow; 12] = [
    window(23, 1, Branch::Zi),
    window(1, 3, Branch::Chou),
    window(3, 5, Branch::Yin),
    window(5, 7, Branch::Mao),
    window(7, 9, Branch::Chen),
    window(9, 11, Branch::Si),
    window(11, 13, Branch::Wu),
    window(13, 15, Branch::Wei),
    window(15, 17, Branch::Shen),
    window(17, 19, Branch::You),
    window(19, 21, Branch::Xu),
    window(21, 23, Branch::Hai),
];

/// Resolve an hour of the day (0-23) to its time branch.
pub fn resolve_hour(hour: u32) -> LiurenResult<Branch> {
    if hour > 23 {
        return Err(LiurenError::HourOutOfRange(hour));
    }
    let branch = HOUR_WINDOWS
        .iter()
        .find(|w| w.contains(hour))
        .map_or(Branch::Zi, |w| w.branch);
    tracing::debug!(hour, branch = %branch, "resolved time branch");
    Ok(branch)
}

/// Resolve the time branch of any clock value.
pub fn resolve_time<T: Timelike>(time: &T) -> Branch {
    // Timelike::hour is always 0-23.
    resolve_hour(time.hour()).unwrap_or(Branch::Zi)
}

/// The window ruled by a branch.
pub fn window_of(branch: Branch) -> HourWindow {
    HOUR_WINDOWS[branch.index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn midnight_window_wraps() {
        assert_eq!(resolve_hour(23).unwrap(), Branch::Zi);
        assert_eq!(resolve_hour(0).unwrap(), Branch::Zi);
        assert_eq!(resolve_hour(1).unwrap(), Branch::Chou);
    }

    #[test]
    fn every_hour_matches_exactly_one_window() {
        for hour in 0..24 {
            let n = HOUR_WINDOWS.iter().filter(|w| w.contains(hour)).count();
            assert_eq!(n, 1, "hour {hour}");
        }
    }

    #[test]
    fn window_boundaries() {
        assert_eq!(resolve_hour(9).unwrap(), Branch::Si);
        assert_eq!(resolve_hour(10).unwrap(), Branch::Si);
        assert_eq!(resolve_hour(11).unwrap(), Branch::Wu);
        assert_eq!(resolve_hour(22).unwrap(), Branch::Hai);
    }

    #[test]
    fn each_branch_rules_two_hours() {
        for b in Branch::all() {
            let n = (0..24).filter(|h| resolve_hour(*h).unwrap() == *b).count();
            assert_eq!(n, 2, "{b:?}");
        }
    }

    #[test]
    fn out_of_range_hour_rejected() {
        assert!(matches!(
            resolve_hour(24),
            Err(LiurenError::HourOutOfRange(24))
        ));
    }

    #[test]
    fn resolve_from_clock_value() {
        let t = NaiveTime::from_hms_opt(23, 45, 0).unwrap();
        assert_eq!(resolve_time(&t), Branch::Zi);
        let t = NaiveTime::from_hms_opt(14, 5, 0).unwrap();
        assert_eq!(resolve_time(&t), Branch::Wei);
    }

    #[test]
    fn window_of_matches_table() {
        assert_eq!(window_of(Branch::Zi).start, 23);
        assert!(window_of(Branch::Zi).wraps());
        assert_eq!(window_of(Branch::Shen).start, 15);
        assert!(!window_of(Branch::Shen).wraps());
    }
}
