use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;

use docsift::application::services::ClassificationService;
use docsift::infrastructure::auth::StaticTokenVerifier;
use docsift::infrastructure::extraction::FormatExtractor;
use docsift::infrastructure::model::ModelStore;
use docsift::infrastructure::observability::{TracingConfig, init_tracing};
use docsift::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (settings, environment) = Settings::from_env()?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            json_format: settings.logging.enable_json,
        },
        settings.server.port,
    );

    // A service with no valid model is not servable; bail before binding.
    let model_store = ModelStore::load(Path::new(&settings.model.dir))?;

    let extractor = Arc::new(FormatExtractor::new());
    let classification_service = Arc::new(ClassificationService::new(
        extractor,
        model_store.handle(),
    ));
    let token_verifier = Arc::new(StaticTokenVerifier::new(settings.auth.api_token.clone()));

    let state = AppState {
        classification_service,
        token_verifier,
    };

    let router = create_router(state);

    let host: IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::from((host, settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
