use super::*;
use pke_auth::Claims;
use pke_core::Season;
use pke_core::Week;

/// Record the caller's pick for the current scoring period.
/// The period comes from the schedule collaborator, never from the client,
/// so a stale form cannot write into a past week.
pub async fn submit<R: PickRepository>(
    repo: &R,
    schedule: &dyn Schedule,
    claims: &Claims,
    event_id: String,
    selection: String,
    line: pke_core::Line,
) -> Result<Pick, PickError> {
    let (season, week) = schedule.current();
    let pick = Pick::new(claims.user(), season, week, event_id, selection, line);
    repo.submit(&pick).await?;
    log::info!(
        "pick recorded for {} in {}w{}",
        claims.email(),
        season,
        week
    );
    Ok(pick)
}

/// Report `{loggedIn, hasPick}` for the caller.
/// Anonymous callers get a well-formed negative answer even when the query
/// parameters are absent; authenticated callers must supply both.
pub async fn status<R: PickRepository>(
    repo: &R,
    claims: Option<&Claims>,
    season: Option<Season>,
    week: Option<Week>,
) -> Result<Status, PickError> {
    let Some(claims) = claims else {
        return Ok(Status {
            logged_in: false,
            has_pick: false,
        });
    };
    let (Some(season), Some(week)) = (season, week) else {
        return Err(PickError::MissingParameters);
    };
    let has_pick = repo.exists(claims.user(), season, week).await?;
    Ok(Status {
        logged_in: true,
        has_pick,
    })
}

/// All of the caller's picks in insertion order, for the summary view.
pub async fn summary<R: PickRepository>(repo: &R, claims: &Claims) -> Result<Vec<Pick>, PickError> {
    repo.list(claims.user()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pke_auth::Account;
    use pke_core::ID;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::Mutex;

    /// In-memory ledger mirroring the database's atomic compare-and-insert:
    /// the existence check and the insert share one critical section.
    #[derive(Default)]
    struct MemoryLedger {
        rows: Mutex<(HashMap<(uuid::Uuid, Season, Week), usize>, Vec<Pick>)>,
    }

    impl PickRepository for MemoryLedger {
        async fn exists(
            &self,
            owner: ID<Account>,
            season: Season,
            week: Week,
        ) -> Result<bool, PickError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .0
                .contains_key(&(owner.inner(), season, week)))
        }
        async fn submit(&self, pick: &Pick) -> Result<(), PickError> {
            let mut rows = self.rows.lock().unwrap();
            let key = (pick.owner().inner(), pick.season(), pick.week());
            if rows.0.contains_key(&key) {
                return Err(PickError::AlreadyPicked);
            }
            let seq = rows.1.len();
            rows.0.insert(key, seq);
            rows.1.push(pick.clone());
            Ok(())
        }
        async fn list(&self, owner: ID<Account>) -> Result<Vec<Pick>, PickError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .1
                .iter()
                .filter(|pick| pick.owner() == owner)
                .cloned()
                .collect())
        }
    }

    /// Pinned period so tests do not depend on the wall clock.
    struct FixedSchedule(Season, Week);

    impl Schedule for FixedSchedule {
        fn current(&self) -> (Season, Week) {
            (self.0, self.1)
        }
    }

    fn claims() -> Claims {
        Claims::new(ID::default(), "a@x.com".into())
    }

    #[tokio::test]
    async fn submit_once_then_rejected() {
        let repo = MemoryLedger::default();
        let schedule = FixedSchedule(2024, 3);
        let claims = claims();
        submit(&repo, &schedule, &claims, "evt-1".into(), "DAL".into(), -3.5)
            .await
            .unwrap();
        let replay = submit(&repo, &schedule, &claims, "evt-2".into(), "PHI".into(), 2.5).await;
        assert!(matches!(replay, Err(PickError::AlreadyPicked)));
    }

    #[tokio::test]
    async fn next_week_is_a_fresh_period() {
        let repo = MemoryLedger::default();
        let claims = claims();
        submit(&repo, &FixedSchedule(2024, 3), &claims, "evt-1".into(), "DAL".into(), -3.5)
            .await
            .unwrap();
        let next = submit(&repo, &FixedSchedule(2024, 4), &claims, "evt-9".into(), "KC".into(), -7.0).await;
        assert!(next.is_ok());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_submits_resolve_to_one_pick() {
        let repo = Arc::new(MemoryLedger::default());
        let claims = Arc::new(claims());
        let mut handles = Vec::new();
        for n in 0..16 {
            let repo = repo.clone();
            let claims = claims.clone();
            handles.push(tokio::spawn(async move {
                submit(
                    repo.as_ref(),
                    &FixedSchedule(2024, 3),
                    &claims,
                    format!("evt-{}", n),
                    "DAL".into(),
                    -3.5,
                )
                .await
            }));
        }
        let mut wins = 0;
        let mut rejections = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => wins += 1,
                Err(PickError::AlreadyPicked) => rejections += 1,
                Err(e) => panic!("unexpected failure: {}", e),
            }
        }
        assert_eq!(wins, 1);
        assert_eq!(rejections, 15);
    }

    #[tokio::test]
    async fn status_is_anonymous_without_claims() {
        let repo = MemoryLedger::default();
        let report = status(&repo, None, None, None).await.unwrap();
        assert_eq!(
            report,
            Status {
                logged_in: false,
                has_pick: false,
            }
        );
    }

    #[tokio::test]
    async fn status_requires_both_parameters_when_authenticated() {
        let repo = MemoryLedger::default();
        let claims = claims();
        let missing = status(&repo, Some(&claims), Some(2024), None).await;
        assert!(matches!(missing, Err(PickError::MissingParameters)));
    }

    #[tokio::test]
    async fn status_reflects_the_ledger() {
        let repo = MemoryLedger::default();
        let claims = claims();
        let before = status(&repo, Some(&claims), Some(2024), Some(3)).await.unwrap();
        assert!(!before.has_pick);
        submit(&repo, &FixedSchedule(2024, 3), &claims, "evt-1".into(), "DAL".into(), -3.5)
            .await
            .unwrap();
        let after = status(&repo, Some(&claims), Some(2024), Some(3)).await.unwrap();
        assert!(after.logged_in);
        assert!(after.has_pick);
    }

    #[tokio::test]
    async fn summary_lists_in_insertion_order() {
        let repo = MemoryLedger::default();
        let claims = claims();
        submit(&repo, &FixedSchedule(2024, 1), &claims, "evt-1".into(), "DAL".into(), -3.5)
            .await
            .unwrap();
        submit(&repo, &FixedSchedule(2024, 2), &claims, "evt-2".into(), "PHI".into(), 2.5)
            .await
            .unwrap();
        let picks = summary(&repo, &claims).await.unwrap();
        assert_eq!(picks.len(), 2);
        assert_eq!(picks[0].week(), 1);
        assert_eq!(picks[1].week(), 2);
    }
}
