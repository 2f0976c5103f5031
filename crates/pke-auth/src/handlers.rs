use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;

pub async fn register(
    db: web::Data<Arc<Client>>,
    req: web::Json<RegisterRequest>,
) -> impl Responder {
    if !req.email.contains('@') {
        return HttpResponse::BadRequest().body("email must be a valid address");
    }
    if req.password.len() < 8 {
        return HttpResponse::BadRequest().body("password must be at least 8 characters");
    }
    match service::signup(
        db.get_ref(),
        &req.email,
        &req.password,
        req.display_name.clone(),
    )
    .await
    {
        Ok(account) => HttpResponse::Ok().json(UserInfo::from(&account)),
        Err(e) => e.response(),
    }
}

pub async fn login(
    db: web::Data<Arc<Client>>,
    tokens: web::Data<Crypto>,
    req: web::Json<LoginRequest>,
) -> impl Responder {
    match service::login(db.get_ref(), &tokens, &req.email, &req.password).await {
        Ok((account, token)) => HttpResponse::Ok().json(AuthResponse {
            token,
            user: UserInfo::from(&account),
        }),
        Err(e) => e.response(),
    }
}

/// Success-shaped no matter what, so the endpoint cannot confirm whether
/// an email is registered.
pub async fn reset_request(
    db: web::Data<Arc<Client>>,
    mailer: web::Data<Arc<dyn Mailer>>,
    req: web::Json<ResetRequest>,
) -> impl Responder {
    match service::request_reset(db.get_ref(), mailer.get_ref().as_ref(), &req.email).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })),
        Err(e) => e.response(),
    }
}

pub async fn reset_complete(
    db: web::Data<Arc<Client>>,
    req: web::Json<ResetCompleteRequest>,
) -> impl Responder {
    if req.password.len() < 8 {
        return HttpResponse::BadRequest().body("password must be at least 8 characters");
    }
    match service::complete_reset(db.get_ref(), &req.email, &req.token, &req.password).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "status": "reset" })),
        Err(e) => e.response(),
    }
}

pub async fn me(auth: Auth) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "id": auth.user().to_string(),
        "email": auth.claims().email(),
    }))
}

pub async fn display_name(
    db: web::Data<Arc<Client>>,
    auth: Auth,
    req: web::Json<RenameRequest>,
) -> impl Responder {
    match service::rename(db.get_ref(), auth.user(), &req.display_name).await {
        Ok(account) => HttpResponse::Ok().json(UserInfo::from(&account)),
        Err(e) => e.response(),
    }
}
