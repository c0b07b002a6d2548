use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use app_api::handlers;
use app_api::middleware::auth_middleware::AuthMiddleware;
use app_api::result::{AppState, json_config, not_found, path_config, query_config};
use common::config::{AppConfig, DEFAULT_CONFIG_FILE};
use log::warn;

fn init_log(level: &str) {
    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // config file path, overridable for deployments
    let config_file = std::env::var("APP_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let app_cfg = AppConfig::new(&config_file)?;
    init_log(&app_cfg.get_sys().log_level);

    let state = web::Data::new(AppState::new(&app_cfg));
    if app_cfg.get_sys().seed_articles {
        state.services.article_service.seed_defaults().await?;
    }

    let server = app_cfg.get_server();
    let address_and_port = format!("{}:{}", server.host, server.port);
    warn!("Starting server on {}", address_and_port);

    let app_state = state.clone();
    let mut http = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(json_config())
            .app_data(query_config())
            .app_data(path_config())
            .wrap(AuthMiddleware { state: app_state.clone() })
            .wrap(Logger::default())
            .configure(handlers::configure)
            .default_service(web::route().to(not_found))
    })
    .keep_alive(actix_web::http::KeepAlive::Timeout(std::time::Duration::from_secs(600)));
    if server.workers > 0 {
        http = http.workers(server.workers);
    }
    http.bind(address_and_port)?.run().await?;
    Ok(())
}
