#![allow(dead_code)]

//! Slot storage behind a trait so scheduling can be exercised without a
//! database. `AppState` carries an `Arc<dyn SlotRepository>`; production
//! wires `PgSlotRepository`, tests wire `InMemorySlotRepository`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::interview::{InterviewSlotRow, SlotStatus};
use crate::scheduling::slots::is_expired;

#[async_trait]
pub trait SlotRepository: Send + Sync {
    async fn insert(&self, slot: InterviewSlotRow) -> Result<InterviewSlotRow, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<InterviewSlotRow>, AppError>;

    /// Persists a status transition and returns the updated row.
    async fn set_status(
        &self,
        id: Uuid,
        status: SlotStatus,
    ) -> Result<InterviewSlotRow, AppError>;

    /// Slots for an application, oldest offer first.
    async fn list_for_application(
        &self,
        application_id: Uuid,
    ) -> Result<Vec<InterviewSlotRow>, AppError>;

    /// Flips offered slots whose expiry has passed to expired.
    /// Returns how many rows changed.
    async fn expire_overdue(&self, now: DateTime<Utc>) -> Result<u64, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres backend
// ────────────────────────────────────────────────────────────────────────────

pub struct PgSlotRepository {
    pool: PgPool,
}

impl PgSlotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotRepository for PgSlotRepository {
    async fn insert(&self, slot: InterviewSlotRow) -> Result<InterviewSlotRow, AppError> {
        let row = sqlx::query_as(
            r#"
            INSERT INTO interview_slots
                (id, application_id, starts_at, offered_at, expires_at, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(slot.id)
        .bind(slot.application_id)
        .bind(slot.starts_at)
        .bind(slot.offered_at)
        .bind(slot.expires_at)
        .bind(slot.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn get(&self, id: Uuid) -> Result<Option<InterviewSlotRow>, AppError> {
        let row = sqlx::query_as("SELECT * FROM interview_slots WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: SlotStatus,
    ) -> Result<InterviewSlotRow, AppError> {
        let row: Option<InterviewSlotRow> =
            sqlx::query_as("UPDATE interview_slots SET status = $2 WHERE id = $1 RETURNING *")
                .bind(id)
                .bind(status)
                .fetch_optional(&self.pool)
                .await?;
        row.ok_or_else(|| AppError::NotFound(format!("Interview slot {id} not found")))
    }

    async fn list_for_application(
        &self,
        application_id: Uuid,
    ) -> Result<Vec<InterviewSlotRow>, AppError> {
        let rows = sqlx::query_as(
            "SELECT * FROM interview_slots WHERE application_id = $1 ORDER BY offered_at ASC",
        )
        .bind(application_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn expire_overdue(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE interview_slots SET status = 'expired' WHERE status = 'offered' AND expires_at < $1",
        )
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory backend
// ────────────────────────────────────────────────────────────────────────────

/// Mutex-guarded vector; insertion order doubles as offer order in tests.
#[derive(Default)]
pub struct InMemorySlotRepository {
    slots: Mutex<Vec<InterviewSlotRow>>,
}

#[async_trait]
impl SlotRepository for InMemorySlotRepository {
    async fn insert(&self, slot: InterviewSlotRow) -> Result<InterviewSlotRow, AppError> {
        let mut slots = self.slots.lock().await;
        slots.push(slot.clone());
        Ok(slot)
    }

    async fn get(&self, id: Uuid) -> Result<Option<InterviewSlotRow>, AppError> {
        let slots = self.slots.lock().await;
        Ok(slots.iter().find(|s| s.id == id).cloned())
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: SlotStatus,
    ) -> Result<InterviewSlotRow, AppError> {
        let mut slots = self.slots.lock().await;
        let slot = slots
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Interview slot {id} not found")))?;
        slot.status = status;
        Ok(slot.clone())
    }

    async fn list_for_application(
        &self,
        application_id: Uuid,
    ) -> Result<Vec<InterviewSlotRow>, AppError> {
        let slots = self.slots.lock().await;
        Ok(slots
            .iter()
            .filter(|s| s.application_id == application_id)
            .cloned()
            .collect())
    }

    async fn expire_overdue(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let mut slots = self.slots.lock().await;
        let mut flipped = 0;
        for slot in slots.iter_mut() {
            if is_expired(slot, now) {
                slot.status = SlotStatus::Expired;
                flipped += 1;
            }
        }
        Ok(flipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    use crate::scheduling::slots::slot_expiry;

    fn make_slot(application_id: Uuid, offered_at: DateTime<Utc>) -> InterviewSlotRow {
        InterviewSlotRow {
            id: Uuid::new_v4(),
            application_id,
            starts_at: offered_at + Duration::days(2),
            offered_at,
            expires_at: slot_expiry(offered_at),
            status: SlotStatus::Offered,
            created_at: offered_at,
        }
    }

    #[tokio::test]
    async fn test_insert_then_get_roundtrip() {
        let repo = InMemorySlotRepository::default();
        let slot = make_slot(Uuid::new_v4(), Utc::now());

        repo.insert(slot.clone()).await.unwrap();
        let fetched = repo.get(slot.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, slot.id);
        assert_eq!(fetched.status, SlotStatus::Offered);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let repo = InMemorySlotRepository::default();
        assert!(repo.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_status_persists_transition() {
        let repo = InMemorySlotRepository::default();
        let slot = make_slot(Uuid::new_v4(), Utc::now());
        repo.insert(slot.clone()).await.unwrap();

        let updated = repo.set_status(slot.id, SlotStatus::Confirmed).await.unwrap();
        assert_eq!(updated.status, SlotStatus::Confirmed);
        let fetched = repo.get(slot.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, SlotStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_set_status_unknown_id_is_not_found() {
        let repo = InMemorySlotRepository::default();
        let err = repo
            .set_status(Uuid::new_v4(), SlotStatus::Confirmed)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_filters_by_application() {
        let repo = InMemorySlotRepository::default();
        let app_a = Uuid::new_v4();
        let app_b = Uuid::new_v4();
        repo.insert(make_slot(app_a, Utc::now())).await.unwrap();
        repo.insert(make_slot(app_b, Utc::now())).await.unwrap();
        repo.insert(make_slot(app_a, Utc::now())).await.unwrap();

        let for_a = repo.list_for_application(app_a).await.unwrap();
        assert_eq!(for_a.len(), 2);
        assert!(for_a.iter().all(|s| s.application_id == app_a));
    }

    #[tokio::test]
    async fn test_expire_overdue_flips_only_overdue_offers() {
        let repo = InMemorySlotRepository::default();
        let now = Utc::now();

        let overdue = make_slot(Uuid::new_v4(), now - Duration::hours(30));
        let fresh = make_slot(Uuid::new_v4(), now - Duration::hours(1));
        let mut confirmed = make_slot(Uuid::new_v4(), now - Duration::hours(30));
        confirmed.status = SlotStatus::Confirmed;

        repo.insert(overdue.clone()).await.unwrap();
        repo.insert(fresh.clone()).await.unwrap();
        repo.insert(confirmed.clone()).await.unwrap();

        let flipped = repo.expire_overdue(now).await.unwrap();
        assert_eq!(flipped, 1);
        assert_eq!(
            repo.get(overdue.id).await.unwrap().unwrap().status,
            SlotStatus::Expired
        );
        assert_eq!(
            repo.get(fresh.id).await.unwrap().unwrap().status,
            SlotStatus::Offered
        );
        assert_eq!(
            repo.get(confirmed.id).await.unwrap().unwrap().status,
            SlotStatus::Confirmed
        );
    }
}
