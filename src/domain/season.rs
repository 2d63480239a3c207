//! Seasonal context derived from the calendar month
//!
//! Southern-hemisphere beekeeping calendar: overwintering runs March-July,
//! swarming starts with spring in August, harvest spans the nectar flow
//! from November into March. The flags overlap; they are not a partition.
//!
//! The context is a pure function of the instant passed in by the caller.
//! It is computed fresh on every evaluation cycle and never cached, and no
//! rule body reads the system clock.

use crate::error::DomainError;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Calendar-derived gating flags for rule evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalContext {
    /// Colony is overwintering (months 3-7)
    pub overwintering: bool,
    /// Active season, complement of overwintering
    pub spring_summer: bool,
    /// Swarming is likely (months 8-12 or 1)
    pub swarm_season: bool,
    /// Honey harvest window (months 11-3, wrapping)
    pub harvest_season: bool,
}

impl SeasonalContext {
    /// Derive the context from a calendar month (1-12)
    pub fn from_month(month: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidMonth(month));
        }

        let overwintering = (3..=7).contains(&month);
        let swarm_season = month >= 8 || month == 1;
        let harvest_season = month >= 11 || month <= 3;

        Ok(Self {
            overwintering,
            spring_summer: !overwintering,
            swarm_season,
            harvest_season,
        })
    }

    /// Derive the context for an instant
    ///
    /// The month of a valid `DateTime` is always 1-12, so this cannot fail.
    pub fn for_instant(now: DateTime<Utc>) -> Self {
        Self::from_month(now.month()).unwrap_or(Self {
            overwintering: false,
            spring_summer: true,
            swarm_season: false,
            harvest_season: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_overwintering_months() {
        for month in 3..=7 {
            let ctx = SeasonalContext::from_month(month).unwrap();
            assert!(ctx.overwintering, "month {} should overwinter", month);
            assert!(!ctx.spring_summer);
        }
        for month in [1, 2, 8, 9, 10, 11, 12] {
            let ctx = SeasonalContext::from_month(month).unwrap();
            assert!(!ctx.overwintering, "month {} should not overwinter", month);
            assert!(ctx.spring_summer);
        }
    }

    #[test]
    fn test_swarm_season_months() {
        for month in [8, 9, 10, 11, 12, 1] {
            let ctx = SeasonalContext::from_month(month).unwrap();
            assert!(ctx.swarm_season, "month {} should be swarm season", month);
        }
        for month in 2..=7 {
            let ctx = SeasonalContext::from_month(month).unwrap();
            assert!(!ctx.swarm_season, "month {} should not be swarm season", month);
        }
    }

    #[test]
    fn test_harvest_season_wraps_year_end() {
        for month in [11, 12, 1, 2, 3] {
            let ctx = SeasonalContext::from_month(month).unwrap();
            assert!(ctx.harvest_season, "month {} should be harvest", month);
        }
        for month in 4..=10 {
            let ctx = SeasonalContext::from_month(month).unwrap();
            assert!(!ctx.harvest_season, "month {} should not be harvest", month);
        }
    }

    #[test]
    fn test_contexts_overlap() {
        // December: swarm and harvest at once
        let ctx = SeasonalContext::from_month(12).unwrap();
        assert!(ctx.swarm_season);
        assert!(ctx.harvest_season);
        assert!(ctx.spring_summer);

        // March: overwintering and harvest at once
        let ctx = SeasonalContext::from_month(3).unwrap();
        assert!(ctx.overwintering);
        assert!(ctx.harvest_season);
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert_eq!(
            SeasonalContext::from_month(0),
            Err(DomainError::InvalidMonth(0))
        );
        assert_eq!(
            SeasonalContext::from_month(13),
            Err(DomainError::InvalidMonth(13))
        );
    }

    #[test]
    fn test_for_instant_uses_month() {
        let june = Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap();
        let ctx = SeasonalContext::for_instant(june);
        assert!(ctx.overwintering);
        assert!(!ctx.swarm_season);

        let september = Utc.with_ymd_and_hms(2025, 9, 15, 10, 0, 0).unwrap();
        let ctx = SeasonalContext::for_instant(september);
        assert!(!ctx.overwintering);
        assert!(ctx.swarm_season);
    }
}
