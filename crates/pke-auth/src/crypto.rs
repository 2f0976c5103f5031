use super::*;

const ACCESS_TOKEN_DURATION: std::time::Duration = std::time::Duration::from_secs(24 * 60 * 60);

/// JWT signing and verification bound to a process-wide secret.
/// The secret is injected at startup and read-only thereafter.
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
}

impl Crypto {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
        }
    }
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| String::default())
                .as_bytes(),
        )
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding)
    }
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &jsonwebtoken::Validation::default())
            .map(|data| data.claims)
    }
    pub const fn duration() -> std::time::Duration {
        ACCESS_TOKEN_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pke_core::ID;
    #[test]
    fn encode_decode_roundtrips() {
        let crypto = Crypto::new(b"secret");
        let claims = Claims::new(ID::default(), "a@x.com".into());
        let token = crypto.encode(&claims).unwrap();
        let decoded = crypto.decode(&token).unwrap();
        assert_eq!(decoded.sub, claims.sub);
        assert_eq!(decoded.eml, claims.eml);
    }
    #[test]
    fn decode_rejects_wrong_secret() {
        let crypto = Crypto::new(b"secret");
        let other = Crypto::new(b"different");
        let token = crypto
            .encode(&Claims::new(ID::default(), "a@x.com".into()))
            .unwrap();
        assert!(other.decode(&token).is_err());
    }
    #[test]
    fn decode_rejects_expired_token() {
        let crypto = Crypto::new(b"secret");
        let claims = Claims {
            sub: uuid::Uuid::now_v7(),
            eml: "a@x.com".into(),
            iat: 0,
            exp: 1,
        };
        let token = crypto.encode(&claims).unwrap();
        assert!(crypto.decode(&token).is_err());
    }
    #[test]
    fn decode_rejects_garbage() {
        let crypto = Crypto::new(b"secret");
        assert!(crypto.decode("not.a.jwt").is_err());
    }
}
