use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use mongodb::bson::doc;
use mongodb::{Client, Database};
use recipe_service::db::RecipeRepo;
use recipe_service::openapi::ApiDoc;
use recipe_service::{handlers, seed, Config};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

async fn health(db: web::Data<Database>) -> HttpResponse {
    match db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "recipe-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("MongoDB ping failed: {}", e),
            "service": "recipe-service"
        })),
    }
}

fn build_cors(allowed_origins: &str) -> Cors {
    if allowed_origins.trim() == "*" {
        return Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();
    }

    let mut cors = Cors::default().allow_any_header().allowed_methods(["GET"]);
    for origin in allowed_origins.split(',') {
        let origin = origin.trim();
        if !origin.is_empty() {
            cors = cors.allowed_origin(origin);
        }
    }
    cors
}

/// Recipe Service
///
/// Seeds the `recipes` collection from the bundled fixture, then serves the
/// read-only query API. A failed seed is fatal: the process exits before
/// binding the HTTP listener rather than serving an empty collection.
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting recipe-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let client = Client::with_uri_str(&config.mongo.uri).await.map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to initialize MongoDB client: {e}"),
        )
    })?;
    let db = client.database(&config.mongo.database);

    // One-shot seed: replace the collection content before accepting traffic
    match seed::run(&db, &config.seed.fixture_path).await {
        Ok(count) => {
            tracing::info!(
                "Seeded {} recipes from {}",
                count,
                config.seed.fixture_path.display()
            );
        }
        Err(e) => {
            tracing::error!("Seed failed: {:#}", e);
            eprintln!("ERROR: Failed to seed recipe collection: {:#}", e);
            std::process::exit(1);
        }
    }

    let repo = RecipeRepo::new(&db);
    let allowed_origins = config.cors.allowed_origins.clone();
    let bind_address = format!("{}:{}", config.app.host, config.app.port);

    tracing::info!("Starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(build_cors(&allowed_origins))
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(repo.clone()))
            .route("/health", web::get().to(health))
            .service(
                SwaggerUi::new("/docs/{_:.*}").url("/openapi.json", ApiDoc::openapi()),
            )
            .configure(handlers::configure)
    })
    .bind(&bind_address)?
    .run()
    .await
}
