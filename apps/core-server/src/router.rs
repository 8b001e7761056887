use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::response::IntoResponse;
use axum::routing::{get, patch};
use fra_core::FraCore;
use memory_data_provider::DataLayer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::ServerConfig;
use crate::dto::response::ErrorResponse;
use crate::endpoint::{self, claim, contact_message, misc};

pub(crate) struct InternalAppState {
    pub core: FraCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(listener: TcpListener, config: ServerConfig, data_layer: DataLayer) {
    listener.set_nonblocking(true).unwrap();

    let core = FraCore::new(Arc::new(data_layer));

    let config = Arc::new(config);
    let state: AppState = Arc::new(InternalAppState {
        core,
        config: config.to_owned(),
    });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    let router = router(state, config);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("failed to convert to tokio TcpListener"),
        router.into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn router(state: AppState, config: Arc<ServerConfig>) -> Router {
    let api = Router::new()
        .route(
            "/api/contact",
            get(contact_message::controller::get_contact_messages)
                .post(contact_message::controller::post_contact_message),
        )
        .route(
            "/api/claims",
            get(claim::controller::get_claims).post(claim::controller::post_claim),
        )
        .route("/api/claims/{id}", get(claim::controller::get_claim))
        .route(
            "/api/claims/{id}/status",
            patch(claim::controller::patch_claim_status),
        );

    let technical_endpoints = Router::new().route("/health", get(misc::health_check));

    let mut router = Router::new()
        .merge(api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    info_span!(
                        "http_request",
                        method = %request.method(),
                        path = request.uri().path(),
                        service = "fra-atlas",
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_response(|response: &Response<Body>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        )
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic));

    if config.enable_open_api {
        router = router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", gen_openapi_documentation()),
        );
    }

    router.with_state(state)
}

fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            endpoint::claim::controller::post_claim,
            endpoint::claim::controller::get_claims,
            endpoint::claim::controller::get_claim,
            endpoint::claim::controller::patch_claim_status,

            endpoint::contact_message::controller::post_contact_message,
            endpoint::contact_message::controller::get_contact_messages,

            endpoint::misc::health_check,
        ),
        components(
            schemas(
                endpoint::claim::dto::CreateClaimRequestRestDTO,
                endpoint::claim::dto::UpdateClaimStatusRequestRestDTO,
                endpoint::claim::dto::ClaimResponseRestDTO,
                endpoint::claim::dto::SubmitClaimResponseRestDTO,
                endpoint::claim::dto::ClaimListResponseRestDTO,
                endpoint::claim::dto::ClaimDetailResponseRestDTO,
                endpoint::claim::dto::ClaimTypeRestEnum,
                endpoint::claim::dto::ClaimStatusRestEnum,

                endpoint::contact_message::dto::CreateContactMessageRequestRestDTO,
                endpoint::contact_message::dto::ContactMessageResponseRestDTO,
                endpoint::contact_message::dto::ContactMessageCreatedResponseRestDTO,
                endpoint::contact_message::dto::ContactMessageListResponseRestDTO,

                crate::dto::error::ErrorResponseRestDTO,
                crate::dto::error::FieldErrorRestDTO,
                crate::dto::error::Cause,

                shared_types::ClaimId,
                shared_types::ContactMessageId,
            )
        ),
        tags(
            (name = "claim_management", description = "Claim submission and status tracking"),
            (name = "contact", description = "Contact form inbox"),
            (name = "other", description = "Other utility endpoints"),
        ),
    )]
    struct ApiDoc;

    ApiDoc::openapi()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    // the response stays generic; the detail only goes to the log
    ErrorResponse::for_panic().into_response()
}
