use super::*;
use pke_core::ID;
use pke_core::Unique;

/// Create an account from a plaintext password.
/// Identity is normalized before storage; `DuplicateIdentity` propagates
/// from the store's unique constraint untouched.
pub async fn signup<R: AuthRepository>(
    repo: &R,
    email: &str,
    password: &str,
    display_name: Option<String>,
) -> Result<Account, AuthError> {
    let email = normalize(email);
    let hashword = password::hash(password).map_err(AuthError::Hash)?;
    let account = Account::new(ID::default(), email, display_name);
    repo.create(&account, &hashword).await?;
    Ok(account)
}

/// Authenticate and issue a signed session token.
/// An unknown identity and a wrong password produce the same
/// `InvalidCredentials`, so login cannot confirm whether an email exists.
pub async fn login<R: AuthRepository>(
    repo: &R,
    crypto: &Crypto,
    email: &str,
    password: &str,
) -> Result<(Account, String), AuthError> {
    let email = normalize(email);
    let (account, hashword) = repo
        .lookup(&email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;
    match password::verify(password, &hashword) {
        Ok(true) => {}
        Ok(false) => return Err(AuthError::InvalidCredentials),
        Err(e) => {
            log::error!("corrupt credential for {}: {}", email, e);
            return Err(AuthError::Corrupt);
        }
    }
    let claims = Claims::new(account.id(), account.email().to_string());
    let token = crypto.encode(&claims)?;
    Ok((account, token))
}

/// Stage a password reset and deliver the token out of band.
/// Success-shaped regardless of whether the identity exists; delivery
/// failure is logged and swallowed because the staged token remains
/// authoritative either way.
pub async fn request_reset<R: AuthRepository>(
    repo: &R,
    mailer: &dyn Mailer,
    email: &str,
) -> Result<(), AuthError> {
    let email = normalize(email);
    let (token, expires) = reset::generate();
    if repo.begin_reset(&email, &token, expires).await? {
        if let Err(e) = mailer.reset(&email, &token).await {
            log::warn!("reset mail delivery failed for {}: {}", email, e);
        }
    }
    Ok(())
}

/// Replace the credential using a pending reset token.
/// `InvalidOrExpiredToken` propagates from the store untouched.
pub async fn complete_reset<R: AuthRepository>(
    repo: &R,
    email: &str,
    token: &str,
    password: &str,
) -> Result<(), AuthError> {
    let email = normalize(email);
    let hashword = password::hash(password).map_err(AuthError::Hash)?;
    repo.complete_reset(&email, token, &hashword).await
}

/// Change the human-readable label on an account.
pub async fn rename<R: AuthRepository>(
    repo: &R,
    id: ID<Account>,
    display_name: &str,
) -> Result<Account, AuthError> {
    repo.rename(id, display_name).await
}
