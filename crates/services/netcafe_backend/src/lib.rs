// --- File: crates/services/netcafe_backend/src/lib.rs ---
pub mod app_state;
pub mod service_factory;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

pub use app_state::{AppState, AppStateBuilder};

pub const WELCOME_MESSAGE: &str = "Welcome to the netcafe booking API!";

/// The full application router: welcome route, booking routes, optional
/// API docs and an optional static file fallback for the booking form.
pub fn build_router(state: &AppState) -> Router {
    #[allow(unused_mut)] // only mutated with the openapi feature
    let mut app = Router::new()
        .route("/", get(|| async { WELCOME_MESSAGE }))
        .merge(netcafe_booking::routes(state.booking_state()));

    #[cfg(feature = "openapi")]
    {
        use netcafe_booking::doc::BookingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Netcafe API",
                version = "0.1.0",
                description = "Computer booking service"
            ),
            tags((name = "Netcafe", description = "Core service endpoints")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");
        app = app.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc));
    }

    let app = match &state.config.server.static_dir {
        Some(dir) => {
            info!("Serving static files from {}", dir);
            app.fallback_service(ServeDir::new(dir))
        }
        None => app,
    };

    app.layer(CorsLayer::permissive())
}
