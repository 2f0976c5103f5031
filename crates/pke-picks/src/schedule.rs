//! Schedule collaborator: which (season, week) are we in right now.
//!
//! The league calendar is external to this kernel; all the ledger needs is
//! the current scoring period, derived from the configured kickoff instant.
use pke_core::SEASON_WEEKS;
use pke_core::Season;
use pke_core::WEEK_SECONDS;
use pke_core::Week;
use std::time::SystemTime;

/// Resolves the current scoring period.
pub trait Schedule: Send + Sync {
    fn current(&self) -> (Season, Week);
}

/// Calendar anchored at the week-1 kickoff instant.
/// Weeks advance every seven days and clamp to the regular season bounds.
#[derive(Debug, Clone)]
pub struct Calendar {
    season: Season,
    kickoff: SystemTime,
}

impl Calendar {
    pub fn new(season: Season, kickoff: SystemTime) -> Self {
        Self { season, kickoff }
    }
    /// Build from `SEASON` and `SEASON_KICKOFF` (unix seconds).
    ///
    /// # Panics
    ///
    /// Panics if either variable is unset or unparseable.
    pub fn from_env() -> Self {
        let season = std::env::var("SEASON")
            .expect("SEASON must be set")
            .parse::<Season>()
            .expect("SEASON must be an integer year");
        let kickoff = std::env::var("SEASON_KICKOFF")
            .expect("SEASON_KICKOFF must be set")
            .parse::<u64>()
            .expect("SEASON_KICKOFF must be unix seconds");
        let kickoff = SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(kickoff);
        Self::new(season, kickoff)
    }
}

impl Schedule for Calendar {
    fn current(&self) -> (Season, Week) {
        let elapsed = SystemTime::now()
            .duration_since(self.kickoff)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let week = (elapsed / WEEK_SECONDS) as Week + 1;
        (self.season, week.clamp(1, SEASON_WEEKS))
    }
}
