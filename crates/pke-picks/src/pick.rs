use pke_auth::Account;
use pke_core::ID;
use pke_core::Line;
use pke_core::Season;
use pke_core::Unique;
use pke_core::Week;
use std::time::SystemTime;

/// A recorded selection for one scoring period.
/// Immutable once created; the line is frozen at submission time for
/// settlement.
#[derive(Debug, Clone, PartialEq)]
pub struct Pick {
    id: ID<Self>,
    owner: ID<Account>,
    season: Season,
    week: Week,
    event_id: String,
    selection: String,
    line: Line,
    created_at: SystemTime,
}

impl Pick {
    pub fn new(
        owner: ID<Account>,
        season: Season,
        week: Week,
        event_id: String,
        selection: String,
        line: Line,
    ) -> Self {
        Self {
            id: ID::default(),
            owner,
            season,
            week,
            event_id,
            selection,
            line,
            created_at: SystemTime::now(),
        }
    }
    /// Rehydrate a pick from stored fields.
    pub fn stored(
        id: ID<Self>,
        owner: ID<Account>,
        season: Season,
        week: Week,
        event_id: String,
        selection: String,
        line: Line,
        created_at: SystemTime,
    ) -> Self {
        Self {
            id,
            owner,
            season,
            week,
            event_id,
            selection,
            line,
            created_at,
        }
    }
    pub fn owner(&self) -> ID<Account> {
        self.owner
    }
    pub fn season(&self) -> Season {
        self.season
    }
    pub fn week(&self) -> Week {
        self.week
    }
    pub fn event_id(&self) -> &str {
        &self.event_id
    }
    pub fn selection(&self) -> &str {
        &self.selection
    }
    pub fn line(&self) -> Line {
        self.line
    }
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }
}

impl Unique for Pick {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

mod schema {
    use super::*;
    use pke_pg::*;

    /// Schema implementation for Pick (picks table).
    /// UNIQUE (user_id, season, week) is the one-pick-per-period invariant;
    /// concurrent submits race on this constraint rather than on any
    /// in-process check.
    impl Schema for Pick {
        fn name() -> &'static str {
            PICKS
        }
        fn columns() -> &'static [tokio_postgres::types::Type] {
            &[
                tokio_postgres::types::Type::UUID,
                tokio_postgres::types::Type::UUID,
                tokio_postgres::types::Type::INT4,
                tokio_postgres::types::Type::INT4,
                tokio_postgres::types::Type::VARCHAR,
                tokio_postgres::types::Type::VARCHAR,
                tokio_postgres::types::Type::FLOAT8,
                tokio_postgres::types::Type::TIMESTAMPTZ,
            ]
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                PICKS,
                " (
                    id         UUID PRIMARY KEY,
                    user_id    UUID NOT NULL REFERENCES ",
                USERS,
                "(id) ON DELETE CASCADE,
                    season     INT NOT NULL,
                    week       INT NOT NULL,
                    event_id   VARCHAR(64) NOT NULL,
                    selection  VARCHAR(64) NOT NULL,
                    line       DOUBLE PRECISION NOT NULL,
                    created_at TIMESTAMPTZ NOT NULL,
                    UNIQUE (user_id, season, week)
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_picks_owner ON ",
                PICKS,
                " (user_id);"
            )
        }
    }
}
