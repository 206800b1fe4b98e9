mod assets;
mod config;
mod error;
mod mail;
mod services;

use crate::config::RelayConfig;
use crate::mail::Delivery;
use crate::services::contact::Envelope;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = RelayConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let delivery = web::Data::new(Delivery::from_config(&config));
    let envelope = web::Data::new(Envelope::from(&config));

    let (host, port) = config.bind_addr();
    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(delivery.clone())
            .app_data(envelope.clone())
            .service(services::contact::configure_routes())
            .default_service(web::route().to(assets::serve))
    })
    .bind((host, port))?
    .run()
    .await
}
