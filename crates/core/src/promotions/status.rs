//! Promotion temporal status
//!
//! Status is never stored; it is recomputed from the manual switch and the
//! validity window on every read, so there are no transition races to guard
//! beyond normal read consistency.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Derived lifecycle state of a promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionStatus {
    /// Manually switched off; overrides the date window.
    Paused,

    /// Not yet reached its start date.
    Scheduled,

    /// Inside its validity window and switched on.
    Active,

    /// Past its end date.
    Expired,
}

impl fmt::Display for PromotionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PromotionStatus::Paused => "paused",
            PromotionStatus::Scheduled => "scheduled",
            PromotionStatus::Active => "active",
            PromotionStatus::Expired => "expired",
        };

        f.write_str(label)
    }
}

/// Derives a promotion's status from its switch and validity window.
///
/// The window is inclusive at both ends: a promotion is live from exactly
/// `starts_at` through exactly `ends_at`. The manual switch takes precedence
/// over the dates.
#[must_use]
pub fn status(
    active: bool,
    starts_at: Timestamp,
    ends_at: Timestamp,
    now: Timestamp,
) -> PromotionStatus {
    if !active {
        return PromotionStatus::Paused;
    }

    if now < starts_at {
        PromotionStatus::Scheduled
    } else if now > ends_at {
        PromotionStatus::Expired
    } else {
        PromotionStatus::Active
    }
}

/// Share of the usage cap consumed, rounded to whole percent.
///
/// `None` exactly when the promotion is uncapped. May exceed 100 when a
/// concurrent race pushed usage past the cap.
#[must_use]
pub fn usage_percentage(current_uses: u32, max_uses: Option<u32>) -> Option<u32> {
    let max = max_uses?;

    if max == 0 {
        return Some(100);
    }

    let percent = (u64::from(current_uses) * 100 + u64::from(max) / 2) / u64::from(max);

    Some(u32::try_from(percent).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn window() -> Result<(Timestamp, Timestamp), jiff::Error> {
        let starts_at = "2026-06-01T00:00:00Z".parse()?;
        let ends_at = "2026-06-30T23:59:59Z".parse()?;

        Ok((starts_at, ends_at))
    }

    #[test]
    fn inactive_is_paused_regardless_of_dates() -> TestResult {
        let (starts_at, ends_at) = window()?;
        let inside = "2026-06-15T12:00:00Z".parse()?;

        assert_eq!(
            status(false, starts_at, ends_at, inside),
            PromotionStatus::Paused
        );

        Ok(())
    }

    #[test]
    fn before_start_is_scheduled() -> TestResult {
        let (starts_at, ends_at) = window()?;
        let before = "2026-05-31T23:59:59Z".parse()?;

        assert_eq!(
            status(true, starts_at, ends_at, before),
            PromotionStatus::Scheduled
        );

        Ok(())
    }

    #[test]
    fn bounds_are_inclusive() -> TestResult {
        let (starts_at, ends_at) = window()?;

        assert_eq!(
            status(true, starts_at, ends_at, starts_at),
            PromotionStatus::Active
        );
        assert_eq!(
            status(true, starts_at, ends_at, ends_at),
            PromotionStatus::Active
        );

        Ok(())
    }

    #[test]
    fn one_tick_past_end_is_expired() -> TestResult {
        let (starts_at, ends_at) = window()?;
        let just_after = Timestamp::from_nanosecond(ends_at.as_nanosecond() + 1)?;

        assert_eq!(
            status(true, starts_at, ends_at, just_after),
            PromotionStatus::Expired
        );

        Ok(())
    }

    #[test]
    fn status_is_total_over_all_input_combinations() -> TestResult {
        let (starts_at, ends_at) = window()?;

        let instants: [Timestamp; 3] = [
            "2026-05-01T00:00:00Z".parse()?,
            "2026-06-15T00:00:00Z".parse()?,
            "2026-07-15T00:00:00Z".parse()?,
        ];

        for active in [true, false] {
            for now in instants {
                let derived = status(active, starts_at, ends_at, now);

                assert!(
                    matches!(
                        derived,
                        PromotionStatus::Paused
                            | PromotionStatus::Scheduled
                            | PromotionStatus::Active
                            | PromotionStatus::Expired
                    ),
                    "status must be one of the four variants"
                );
            }
        }

        Ok(())
    }

    #[test]
    fn usage_percentage_none_iff_uncapped() {
        assert_eq!(usage_percentage(5, None), None);
        assert_eq!(usage_percentage(0, Some(10)), Some(0));
    }

    #[test]
    fn usage_percentage_rounds_to_nearest() {
        assert_eq!(usage_percentage(1, Some(3)), Some(33));
        assert_eq!(usage_percentage(2, Some(3)), Some(67));
        assert_eq!(usage_percentage(1, Some(8)), Some(13));
        assert_eq!(usage_percentage(10, Some(10)), Some(100));
    }

    #[test]
    fn usage_percentage_can_exceed_one_hundred() {
        assert_eq!(usage_percentage(12, Some(10)), Some(120));
    }

    #[test]
    fn zero_cap_counts_as_fully_used() {
        assert_eq!(usage_percentage(0, Some(0)), Some(100));
    }
}
