use crate::{
    configuration::{CorsSettings, Service, Settings},
    routes::{health_check, hello, love, not_found, plus_hundred},
};
use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Request, header::InvalidHeaderValue},
    routing::{IntoMakeService, get},
    serve::Serve,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

type Server = Serve<TcpListener, IntoMakeService<Router>, Router>;

#[derive(thiserror::Error, Debug)]
pub enum StartupError {
    #[error("`{origin}` is not a valid CORS origin")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: InvalidHeaderValue,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, StartupError> {
        let listener = std::net::TcpListener::bind(configuration.application.address())?;
        listener.set_nonblocking(true)?;
        let port = listener.local_addr()?.port();

        let server = run(
            listener,
            configuration.application.service,
            &configuration.cors,
        )?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: std::net::TcpListener,
    service: Service,
    cors: &CorsSettings,
) -> Result<Server, StartupError> {
    let app = router(service, cors)?;

    let listener = TcpListener::from_std(listener)?;
    let address = listener.local_addr()?;
    tracing::info!(service = %service, "Listening on http://{}", address);

    Ok(axum::serve(listener, app.into_make_service()))
}

/// Routes for one greeting service.
///
/// Only `plus` is reachable cross-origin.
pub fn router(service: Service, cors: &CorsSettings) -> Result<Router, StartupError> {
    let app = match service {
        Service::Hello => Router::new().route("/", get(hello)),
        Service::Love => Router::new().route("/", get(love)),
        Service::Plus => Router::new()
            .route("/{x}", get(plus_hundred))
            .layer(cors_layer(cors)?),
    };

    Ok(app
        .route("/health_check", get(health_check))
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    request_id = %Uuid::new_v4(),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        ))
}

/// Credentials are allowed, so methods and headers are mirrored from the
/// request rather than answered with `*`.
pub fn cors_layer(cors: &CorsSettings) -> Result<CorsLayer, StartupError> {
    let origins = cors
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|source| StartupError::InvalidOrigin {
                origin: origin.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(cors.allow_credentials))
}
