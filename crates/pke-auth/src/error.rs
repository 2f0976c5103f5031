use actix_web::HttpResponse;

/// Failures of the credential lifecycle.
/// Everything except `Database` and `Corrupt` is recoverable by the caller.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("email already in use")]
    DuplicateIdentity,
    /// Deliberately covers both "no such account" and "wrong password" so
    /// that login cannot be used to enumerate identities.
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid or expired reset token")]
    InvalidOrExpiredToken,
    #[error("account not found")]
    NotFound,
    /// Stored credential failed to parse: storage corruption, not user error.
    #[error("stored credential is corrupt")]
    Corrupt,
    #[error("password hashing failed: {0}")]
    Hash(argon2::password_hash::Error),
    #[error("database error: {0}")]
    Database(#[from] pke_pg::PgErr),
    #[error("token encoding failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl AuthError {
    /// Map to an HTTP response with a uniform `{"message": ...}` body.
    pub fn response(&self) -> HttpResponse {
        match self {
            Self::DuplicateIdentity => HttpResponse::Conflict(),
            Self::InvalidCredentials => HttpResponse::Unauthorized(),
            Self::InvalidOrExpiredToken => HttpResponse::Unauthorized(),
            Self::NotFound => HttpResponse::NotFound(),
            Self::Corrupt | Self::Hash(_) | Self::Database(_) | Self::Token(_) => {
                HttpResponse::InternalServerError()
            }
        }
        .json(serde_json::json!({ "message": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    #[test]
    fn duplicate_identity_is_conflict() {
        assert_eq!(
            AuthError::DuplicateIdentity.response().status(),
            StatusCode::CONFLICT
        );
    }
    #[test]
    fn credential_failures_are_unauthorized() {
        assert_eq!(
            AuthError::InvalidCredentials.response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::InvalidOrExpiredToken.response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
    #[test]
    fn corruption_is_a_server_fault() {
        assert_eq!(
            AuthError::Corrupt.response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
