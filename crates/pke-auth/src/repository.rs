use super::*;
use pke_core::ID;
use pke_core::Unique;
use pke_pg::*;
use std::sync::Arc;
use std::time::SystemTime;
use tokio_postgres::Client;

/// Repository trait for the credential store.
/// Abstracts SQL from domain modules; every mutation is a single atomic
/// statement so concurrent callers race in the database, not in process.
#[allow(async_fn_in_trait)]
pub trait AuthRepository {
    /// Insert a new account. Exactly one of any set of concurrent creates
    /// for the same email succeeds; the rest see `DuplicateIdentity`.
    async fn create(&self, account: &Account, hashword: &str) -> Result<(), AuthError>;
    /// Fetch an account and its stored credential by normalized email.
    async fn lookup(&self, email: &str) -> Result<Option<(Account, String)>, AuthError>;
    /// Update the display name, returning the refreshed account.
    async fn rename(&self, id: ID<Account>, display_name: &str) -> Result<Account, AuthError>;
    /// Stage a reset token. Silently a no-op when the email is unknown, so
    /// callers learn nothing about account existence.
    async fn begin_reset(
        &self,
        email: &str,
        token: &str,
        expires: SystemTime,
    ) -> Result<bool, AuthError>;
    /// Replace the credential if and only if the presented token matches a
    /// pending, unexpired reset; clears both reset fields in the same
    /// statement. Token match, expiry check, credential swap, and field
    /// clearing are one atomic operation.
    async fn complete_reset(
        &self,
        email: &str,
        token: &str,
        hashword: &str,
    ) -> Result<(), AuthError>;
}

impl AuthRepository for Arc<Client> {
    async fn create(&self, account: &Account, hashword: &str) -> Result<(), AuthError> {
        let rows = self
            .execute(
                const_format::concatcp!(
                    "INSERT INTO ",
                    USERS,
                    " (id, email, display_name, hashword) VALUES ($1, $2, $3, $4)
                     ON CONFLICT (email) DO NOTHING"
                ),
                &[
                    &account.id().inner(),
                    &account.email(),
                    &account.display_name(),
                    &hashword,
                ],
            )
            .await?;
        match rows {
            0 => Err(AuthError::DuplicateIdentity),
            _ => Ok(()),
        }
    }

    async fn lookup(&self, email: &str) -> Result<Option<(Account, String)>, AuthError> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT id, email, display_name, hashword FROM ",
                USERS,
                " WHERE email = $1"
            ),
            &[&email],
        )
        .await
        .map(|opt| {
            opt.map(|row| {
                (
                    Account::new(
                        ID::from(row.get::<_, uuid::Uuid>(0)),
                        row.get::<_, String>(1),
                        row.get::<_, Option<String>>(2),
                    ),
                    row.get::<_, String>(3),
                )
            })
        })
        .map_err(AuthError::from)
    }

    async fn rename(&self, id: ID<Account>, display_name: &str) -> Result<Account, AuthError> {
        self.query_opt(
            const_format::concatcp!(
                "UPDATE ",
                USERS,
                " SET display_name = $2 WHERE id = $1 RETURNING id, email, display_name"
            ),
            &[&id.inner(), &display_name],
        )
        .await?
        .map(|row| {
            Account::new(
                ID::from(row.get::<_, uuid::Uuid>(0)),
                row.get::<_, String>(1),
                row.get::<_, Option<String>>(2),
            )
        })
        .ok_or(AuthError::NotFound)
    }

    async fn begin_reset(
        &self,
        email: &str,
        token: &str,
        expires: SystemTime,
    ) -> Result<bool, AuthError> {
        let rows = self
            .execute(
                const_format::concatcp!(
                    "UPDATE ",
                    USERS,
                    " SET reset_token = $2, reset_expires = $3 WHERE email = $1"
                ),
                &[&email, &token, &expires],
            )
            .await?;
        Ok(rows == 1)
    }

    async fn complete_reset(
        &self,
        email: &str,
        token: &str,
        hashword: &str,
    ) -> Result<(), AuthError> {
        let rows = self
            .execute(
                const_format::concatcp!(
                    "UPDATE ",
                    USERS,
                    " SET hashword = $3, reset_token = NULL, reset_expires = NULL
                     WHERE email = $1 AND reset_token = $2 AND reset_expires > now()"
                ),
                &[&email, &token, &hashword],
            )
            .await?;
        match rows {
            0 => Err(AuthError::InvalidOrExpiredToken),
            _ => Ok(()),
        }
    }
}
