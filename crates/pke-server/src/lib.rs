//! Unified Backend Server
//!
//! Wires the credential store and the pick ledger into a single actix-web
//! server. Route handlers live in their domain crates; this crate owns
//! startup: database connection, schema migration, shared state, and the
//! route table.

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use pke_auth::Account;
use pke_auth::Mailer;
use pke_auth::NullMailer;
use pke_auth::SmtpMailer;
use pke_picks::Calendar;
use pke_picks::Pick;
use pke_picks::Schedule;
use std::sync::Arc;
use tokio_postgres::Client;

async fn health(client: web::Data<Arc<Client>>) -> impl Responder {
    match client
        .execute("SELECT 1", &[])
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

/// SMTP when configured, otherwise log-only delivery.
fn mailer() -> Arc<dyn Mailer> {
    match SmtpMailer::from_env() {
        Ok(smtp) => Arc::new(smtp),
        Err(e) => {
            log::warn!("no smtp transport ({}), reset links will be logged", e);
            Arc::new(NullMailer)
        }
    }
}

#[rustfmt::skip]
pub async fn run() -> anyhow::Result<()> {
    let client = pke_pg::db().await;
    pke_pg::migrate::<Account>(&client).await?;
    pke_pg::migrate::<Pick>(&client).await?;
    let crypto = web::Data::new(pke_auth::Crypto::from_env());
    let mailer = web::Data::new(mailer());
    let schedule = web::Data::new(Arc::new(Calendar::from_env()) as Arc<dyn Schedule>);
    let client = web::Data::new(client);
    log::info!("starting pickem server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(client.clone())
            .app_data(crypto.clone())
            .app_data(mailer.clone())
            .app_data(schedule.clone())
            .route("/health", web::get().to(health))
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(pke_auth::handlers::register))
                    .route("/login", web::post().to(pke_auth::handlers::login))
                    .route("/reset-request", web::post().to(pke_auth::handlers::reset_request))
                    .route("/reset-complete", web::post().to(pke_auth::handlers::reset_complete))
                    .route("/me", web::get().to(pke_auth::handlers::me))
                    .route("/display-name", web::patch().to(pke_auth::handlers::display_name)),
            )
            .route("/picks", web::post().to(pke_picks::handlers::submit))
            .route("/picks", web::get().to(pke_picks::handlers::summary))
            .route("/status", web::get().to(pke_picks::handlers::status))
    })
    .workers(6)
    .bind(std::env::var("BIND_ADDR").expect("BIND_ADDR must be set"))?
    .run()
    .await?;
    Ok(())
}
