use std::io;

use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use taskgate::{auth::AuthMiddleware, config::Config, routes, AppState};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let state = AppState::build(&config).await.map_err(|e| {
        log::error!("Failed to open database {}: {}", config.database_url, e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;

    log::info!("Starting taskgate server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(state.tasks.clone())
            .app_data(state.auth.clone())
            .wrap(AuthMiddleware::new(state.verifier.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
