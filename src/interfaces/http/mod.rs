pub mod admin_gate;
pub mod pages;

use actix_web::dev::Server;
use actix_web::middleware::{from_fn, Logger};
use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::application::use_cases::analytics::SharedAnalyticsLog;
use crate::domain::site::SiteUrl;
use crate::infrastructure::config::AppConfig;

pub use admin_gate::admin_gate;

pub struct AppState {
    pub site: SiteUrl,
    pub analytics: SharedAnalyticsLog,
}

impl AppState {
    pub fn new(site: SiteUrl) -> Self {
        Self {
            site,
            analytics: SharedAnalyticsLog::default(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.site_url())
    }
}

/// Registers every route. The admin gate is applied by the caller with `wrap`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(pages::home)
        .service(pages::checklist)
        .service(pages::analyzing)
        .service(pages::processing)
        .service(pages::pre_result)
        .service(pages::components_check)
        .service(pages::health)
        .service(pages::theme_css)
        .service(pages::robots_txt)
        .service(pages::sitemap)
        .service(pages::admin_dashboard)
        .service(pages::admin_events);
}

pub fn start_server(config: &AppConfig, state: web::Data<AppState>) -> std::io::Result<Server> {
    let (host, port) = config.bind_address();
    info!(host = %host, port, site = %state.site.as_str(), "Starting HTTP server");

    let server = HttpServer::new(move || {
        App::new()
            .wrap(from_fn(admin_gate))
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run();

    Ok(server)
}
