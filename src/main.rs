use std::sync::Arc;

use actix_files::{Files, NamedFile};
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use primerelay::config::Config;
use primerelay::payments::{self, PrimeGateway, TapPayClient};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "primerelay=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; missing credentials are fatal
    let config = Config::load().expect("Failed to load configuration");

    tracing::info!("Starting payment relay");
    tracing::info!("Gateway endpoint: {}", config.gateway.base_url);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let gateway: Arc<dyn PrimeGateway> = Arc::new(
        TapPayClient::new(
            config.partner_key.clone(),
            Some(config.gateway.base_url.clone()),
            None,
        )
        .expect("Failed to build gateway client"),
    );

    let bind_address = config.server.bind_address();
    let config = web::Data::new(config);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(config.clone())
            .app_data(web::Data::from(gateway.clone()))
            .configure(payments::configure)
            .route("/", web::get().to(index))
            .service(Files::new("/assets", "static/assets"))
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn index() -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async("static/index.html").await?)
}
