use super::*;
use pke_auth::Account;
use pke_core::ID;
use pke_core::Season;
use pke_core::Unique;
use pke_core::Week;
use pke_pg::*;
use std::sync::Arc;
use tokio_postgres::Client;

/// Repository trait for the pick ledger.
/// `submit` is the critical operation: the uniqueness check and the insert
/// are one statement, so there is no read-then-write window for a second
/// submission to slip through.
#[allow(async_fn_in_trait)]
pub trait PickRepository {
    /// Pure existence check for (owner, season, week).
    async fn exists(
        &self,
        owner: ID<Account>,
        season: Season,
        week: Week,
    ) -> Result<bool, PickError>;
    /// Record a pick. Zero rows inserted means the period is already
    /// taken, regardless of which process inserted first.
    async fn submit(&self, pick: &Pick) -> Result<(), PickError>;
    /// All picks for an owner in insertion order.
    async fn list(&self, owner: ID<Account>) -> Result<Vec<Pick>, PickError>;
}

impl PickRepository for Arc<Client> {
    async fn exists(
        &self,
        owner: ID<Account>,
        season: Season,
        week: Week,
    ) -> Result<bool, PickError> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT 1 FROM ",
                PICKS,
                " WHERE user_id = $1 AND season = $2 AND week = $3"
            ),
            &[&owner.inner(), &season, &week],
        )
        .await
        .map(|opt| opt.is_some())
        .map_err(PickError::from)
    }

    async fn submit(&self, pick: &Pick) -> Result<(), PickError> {
        let rows = self
            .execute(
                const_format::concatcp!(
                    "INSERT INTO ",
                    PICKS,
                    " (id, user_id, season, week, event_id, selection, line, created_at)
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                     ON CONFLICT (user_id, season, week) DO NOTHING"
                ),
                &[
                    &pick.id().inner(),
                    &pick.owner().inner(),
                    &pick.season(),
                    &pick.week(),
                    &pick.event_id(),
                    &pick.selection(),
                    &pick.line(),
                    &pick.created_at(),
                ],
            )
            .await?;
        match rows {
            0 => Err(PickError::AlreadyPicked),
            _ => Ok(()),
        }
    }

    async fn list(&self, owner: ID<Account>) -> Result<Vec<Pick>, PickError> {
        self.query(
            const_format::concatcp!(
                "SELECT id, user_id, season, week, event_id, selection, line, created_at FROM ",
                PICKS,
                " WHERE user_id = $1 ORDER BY created_at"
            ),
            &[&owner.inner()],
        )
        .await
        .map(|rows| {
            rows.into_iter()
                .map(|row| {
                    Pick::stored(
                        ID::from(row.get::<_, uuid::Uuid>(0)),
                        ID::from(row.get::<_, uuid::Uuid>(1)),
                        row.get(2),
                        row.get(3),
                        row.get(4),
                        row.get(5),
                        row.get(6),
                        row.get(7),
                    )
                })
                .collect()
        })
        .map_err(PickError::from)
    }
}
