use actix_web::{
    middleware::{Logger, NormalizePath},
    web, App, HttpServer,
};
use std::io;
use supafox_web::{
    configure, security_headers_middleware, CspConfig, LegalCollection, SiteConfig, SiteState,
};

const BUNDLED_LEGAL: &str = include_str!("../content/legal.json");

fn load_legal(config: &SiteConfig) -> supafox_web::Result<LegalCollection> {
    match config.legal_content() {
        Some(path) => {
            log::info!("Loading legal documents from {}", path.display());
            LegalCollection::from_path(path)
        }
        None => LegalCollection::from_json(BUNDLED_LEGAL),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = SiteConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let legal = load_legal(&config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let bind_addr = config.bind_addr().to_string();
    let environment = config.environment();
    log::info!(
        "Starting {} ({:?}) on {} as {}",
        config.name(),
        environment,
        bind_addr,
        config.public_url()
    );

    let state = web::Data::new(SiteState::new(config, legal));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(security_headers_middleware(CspConfig::new(environment)))
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .configure(configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
