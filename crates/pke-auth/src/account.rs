use pke_core::ID;
use pke_core::Unique;

/// Registered user with a verified identity.
/// The stored credential (hashword) and any pending reset token are
/// database-only fields, not part of the domain type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Account {
    id: ID<Self>,
    email: String,
    display_name: Option<String>,
}

impl Account {
    pub fn new(id: ID<Self>, email: String, display_name: Option<String>) -> Self {
        Self {
            id,
            email,
            display_name,
        }
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

impl Unique for Account {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

/// Canonical form of an identity: trimmed and lowercased.
/// Applied before every store or lookup so that case variants of the same
/// address resolve to one account.
pub fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

mod schema {
    use super::*;
    use pke_pg::*;

    /// Schema implementation for Account (users table).
    /// The UNIQUE constraint on email is the mechanism that makes
    /// concurrent signups resolve to exactly one winner.
    impl Schema for Account {
        fn name() -> &'static str {
            USERS
        }
        fn columns() -> &'static [tokio_postgres::types::Type] {
            &[
                tokio_postgres::types::Type::UUID,
                tokio_postgres::types::Type::VARCHAR,
                tokio_postgres::types::Type::VARCHAR,
                tokio_postgres::types::Type::TEXT,
                tokio_postgres::types::Type::TEXT,
                tokio_postgres::types::Type::TIMESTAMPTZ,
            ]
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                USERS,
                " (
                    id            UUID PRIMARY KEY,
                    email         VARCHAR(255) UNIQUE NOT NULL,
                    display_name  VARCHAR(64),
                    hashword      TEXT NOT NULL,
                    reset_token   TEXT,
                    reset_expires TIMESTAMPTZ
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_users_email ON ",
                USERS,
                " (email);"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize("  A@X.Com "), "a@x.com");
        assert_eq!(normalize("a@x.com"), "a@x.com");
    }
    #[test]
    fn account_exposes_fields() {
        let account = Account::new(ID::default(), "a@x.com".into(), Some("Ada".into()));
        assert_eq!(account.email(), "a@x.com");
        assert_eq!(account.display_name(), Some("Ada"));
    }
}
