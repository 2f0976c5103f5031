use actix_web::HttpResponse;

/// Failures of pick submission and status lookup.
/// `AlreadyPicked` renders a stable message: the calling layer branches on
/// the substring "already made a pick" to distinguish it from every other
/// failure.
#[derive(Debug, thiserror::Error)]
pub enum PickError {
    #[error("you have already made a pick for this week")]
    AlreadyPicked,
    #[error("authentication required")]
    Unauthenticated,
    #[error("season and week are required")]
    MissingParameters,
    #[error("pick not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] pke_pg::PgErr),
}

impl PickError {
    pub fn response(&self) -> HttpResponse {
        match self {
            Self::AlreadyPicked => HttpResponse::Conflict(),
            Self::Unauthenticated => HttpResponse::Unauthorized(),
            Self::MissingParameters => HttpResponse::BadRequest(),
            Self::NotFound => HttpResponse::NotFound(),
            Self::Database(_) => HttpResponse::InternalServerError(),
        }
        .json(serde_json::json!({ "message": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    #[test]
    fn already_picked_message_is_stable() {
        assert!(PickError::AlreadyPicked
            .to_string()
            .contains("already made a pick"));
    }
    #[test]
    fn already_picked_is_conflict() {
        assert_eq!(
            PickError::AlreadyPicked.response().status(),
            StatusCode::CONFLICT
        );
    }
    #[test]
    fn missing_parameters_is_bad_request() {
        assert_eq!(
            PickError::MissingParameters.response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
