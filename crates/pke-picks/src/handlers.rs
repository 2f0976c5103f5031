use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use pke_auth::Auth;
use pke_auth::MaybeAuth;
use pke_core::Unique;
use std::sync::Arc;
use tokio_postgres::Client;

pub async fn submit(
    db: web::Data<Arc<Client>>,
    schedule: web::Data<Arc<dyn Schedule>>,
    auth: Auth,
    req: web::Json<SubmitRequest>,
) -> impl Responder {
    let req = req.into_inner();
    match service::submit(
        db.get_ref(),
        schedule.get_ref().as_ref(),
        auth.claims(),
        req.event_id,
        req.selection,
        req.line,
    )
    .await
    {
        Ok(pick) => HttpResponse::Ok().json(serde_json::json!({ "id": pick.id().to_string() })),
        Err(e) => e.response(),
    }
}

pub async fn status(
    db: web::Data<Arc<Client>>,
    auth: MaybeAuth,
    query: web::Query<StatusQuery>,
) -> impl Responder {
    match service::status(db.get_ref(), auth.claims(), query.season, query.week).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => e.response(),
    }
}

pub async fn summary(db: web::Data<Arc<Client>>, auth: Auth) -> impl Responder {
    match service::summary(db.get_ref(), auth.claims()).await {
        Ok(picks) => {
            HttpResponse::Ok().json(picks.iter().map(PickInfo::from).collect::<Vec<_>>())
        }
        Err(e) => e.response(),
    }
}
