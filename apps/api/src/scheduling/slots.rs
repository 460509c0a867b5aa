//! Slot expiry arithmetic and status transitions. Pure functions — the
//! current time is always passed in, never read here.

use chrono::{DateTime, Duration, Utc};

use crate::errors::AppError;
use crate::models::interview::{InterviewSlotRow, SlotStatus};

/// Offers expire a fixed 24 hours after they are made.
pub const SLOT_TTL_HOURS: i64 = 24;

/// Expiry instant for an offer made at `offered_at`.
pub fn slot_expiry(offered_at: DateTime<Utc>) -> DateTime<Utc> {
    offered_at + Duration::hours(SLOT_TTL_HOURS)
}

/// True when an offered slot has outlived its expiry without a response.
/// Terminal states never re-expire.
pub fn is_expired(slot: &InterviewSlotRow, now: DateTime<Utc>) -> bool {
    slot.status == SlotStatus::Offered && now > slot.expires_at
}

/// Validates the offered -> confirmed transition.
pub fn try_confirm(slot: &InterviewSlotRow, now: DateTime<Utc>) -> Result<SlotStatus, AppError> {
    if slot.status != SlotStatus::Offered {
        return Err(AppError::Validation(format!(
            "slot is {} and cannot be confirmed",
            slot.status
        )));
    }
    if now > slot.expires_at {
        return Err(AppError::Validation("slot offer has expired".to_string()));
    }
    Ok(SlotStatus::Confirmed)
}

/// Validates the offered -> declined transition.
pub fn try_decline(slot: &InterviewSlotRow) -> Result<SlotStatus, AppError> {
    if slot.status != SlotStatus::Offered {
        return Err(AppError::Validation(format!(
            "slot is {} and cannot be declined",
            slot.status
        )));
    }
    Ok(SlotStatus::Declined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn slot(status: SlotStatus, offered_at: DateTime<Utc>) -> InterviewSlotRow {
        InterviewSlotRow {
            id: Uuid::new_v4(),
            application_id: Uuid::new_v4(),
            starts_at: offered_at + Duration::days(3),
            offered_at,
            expires_at: slot_expiry(offered_at),
            status,
            created_at: offered_at,
        }
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_expiry_is_24_hours_after_offer() {
        let offered = at(9);
        assert_eq!(slot_expiry(offered), offered + Duration::hours(24));
    }

    #[test]
    fn test_offered_slot_within_window_is_not_expired() {
        let s = slot(SlotStatus::Offered, at(9));
        assert!(!is_expired(&s, at(10)));
        // boundary: exactly at expiry is still valid
        assert!(!is_expired(&s, s.expires_at));
    }

    #[test]
    fn test_offered_slot_past_window_is_expired() {
        let s = slot(SlotStatus::Offered, at(9));
        assert!(is_expired(&s, s.expires_at + Duration::seconds(1)));
    }

    #[test]
    fn test_terminal_states_never_expire() {
        let old = at(9) - Duration::days(30);
        for status in [
            SlotStatus::Confirmed,
            SlotStatus::Declined,
            SlotStatus::Expired,
        ] {
            assert!(!is_expired(&slot(status, old), at(9)));
        }
    }

    #[test]
    fn test_confirm_within_window_succeeds() {
        let s = slot(SlotStatus::Offered, at(9));
        assert_eq!(try_confirm(&s, at(10)).unwrap(), SlotStatus::Confirmed);
    }

    #[test]
    fn test_confirm_after_expiry_fails() {
        let s = slot(SlotStatus::Offered, at(9));
        let err = try_confirm(&s, s.expires_at + Duration::hours(1)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_confirm_non_offered_slot_fails() {
        let s = slot(SlotStatus::Declined, at(9));
        assert!(try_confirm(&s, at(10)).is_err());
    }

    #[test]
    fn test_decline_offered_slot_succeeds() {
        let s = slot(SlotStatus::Offered, at(9));
        assert_eq!(try_decline(&s).unwrap(), SlotStatus::Declined);
    }

    #[test]
    fn test_decline_confirmed_slot_fails() {
        let s = slot(SlotStatus::Confirmed, at(9));
        assert!(try_decline(&s).is_err());
    }
}
