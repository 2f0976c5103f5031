use super::*;
use pke_core::ID;

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid,
    pub eml: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user: ID<Account>, email: String) -> Self {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_secs() as i64;
        Self {
            sub: user.inner(),
            eml: email,
            iat: now,
            exp: now + Crypto::duration().as_secs() as i64,
        }
    }
    pub fn expired(&self) -> bool {
        self.exp
            < std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time")
                .as_secs() as i64
    }
    pub fn user(&self) -> ID<Account> {
        ID::from(self.sub)
    }
    pub fn email(&self) -> &str {
        &self.eml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn claims_carry_identity() {
        let id = ID::<Account>::default();
        let claims = Claims::new(id, "a@x.com".into());
        assert_eq!(claims.user(), id);
        assert_eq!(claims.email(), "a@x.com");
        assert!(!claims.expired());
    }
    #[test]
    fn stale_claims_report_expired() {
        let claims = Claims {
            sub: uuid::Uuid::now_v7(),
            eml: "a@x.com".into(),
            iat: 0,
            exp: 1,
        };
        assert!(claims.expired());
    }
}
