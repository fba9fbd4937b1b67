use actix_web::http::StatusCode;
use common::{ErrorMessage, ErrorResponse};

use crate::store::StoreError;

pub(crate) fn config_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            actix_web::web::resource("/")
                .route(actix_web::web::get().to(index))
                .default_service(actix_web::web::to(invalid_method)),
        )
        .service(
            actix_web::web::resource("/add_memo")
                .route(actix_web::web::post().to(add_memo))
                .default_service(actix_web::web::to(invalid_method)),
        )
        .service(
            actix_web::web::resource("/update_memo")
                .route(actix_web::web::put().to(update_memo))
                .default_service(actix_web::web::to(invalid_method)),
        )
        .service(
            actix_web::web::resource("/list_memos")
                .route(actix_web::web::get().to(list_memos))
                .default_service(actix_web::web::to(invalid_method)),
        )
        .service(
            actix_web::web::resource("/delete_memos")
                .route(actix_web::web::delete().to(delete_memos))
                .default_service(actix_web::web::to(invalid_method)),
        )
        .default_service(actix_web::web::to(unknown_path));
}

/// Body extraction failures are the caller's fault, so they never surface
/// as 500.
fn json_config() -> actix_web::web::JsonConfig {
    actix_web::web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("request body is rejected, error = {}", err);
        let (status, error) = match &err {
            actix_web::error::JsonPayloadError::ContentType => (
                StatusCode::BAD_REQUEST,
                ErrorMessage::invalid_content_type(),
            ),
            actix_web::error::JsonPayloadError::Overflow { .. }
            | actix_web::error::JsonPayloadError::OverflowKnownLength { .. } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorMessage::payload_too_large(),
            ),
            _ => (
                StatusCode::BAD_REQUEST,
                ErrorMessage::invalid_json(),
            ),
        };
        actix_web::error::InternalError::from_response(err, respond_error(status, vec![error]))
            .into()
    })
}

fn respond_error(status: StatusCode, errors: Vec<ErrorMessage>) -> actix_web::HttpResponse {
    actix_web::HttpResponse::build(status).json(ErrorResponse::new(errors))
}

fn respond_not_found() -> actix_web::HttpResponse {
    respond_error(StatusCode::NOT_FOUND, vec![ErrorMessage::not_found()])
}

fn respond_internal_server_error(reason: &str) -> actix_web::HttpResponse {
    log::error!("{}", reason);
    respond_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        vec![ErrorMessage::internal_server_error()],
    )
}

fn respond_store_result(result: Result<usize, StoreError>) -> actix_web::HttpResponse {
    match result {
        Ok(count) => actix_web::HttpResponse::Ok().json(count),
        Err(StoreError::Rejected(errors)) => respond_error(StatusCode::BAD_REQUEST, errors),
        Err(StoreError::NotFound(_)) => respond_not_found(),
    }
}

pub(crate) async fn index(
    app_state: actix_web::web::Data<crate::AppState>,
) -> actix_web::HttpResponse {
    let path = app_state.config.index_html_path.clone();
    let read_path = path.clone();
    match actix_web::web::block(move || std::fs::read_to_string(read_path)).await {
        Ok(Ok(html)) => actix_web::HttpResponse::Ok()
            .content_type(actix_web::http::header::ContentType::html())
            .body(html),
        Ok(Err(error)) => respond_internal_server_error(&format!(
            "could not read index page, path = {}, error = {}",
            path.display(),
            error
        )),
        Err(error) => respond_internal_server_error(&error.to_string()),
    }
}

pub(crate) async fn add_memo(
    app_state: actix_web::web::Data<crate::AppState>,
    payload: actix_web::web::Json<common::Memo>,
) -> actix_web::HttpResponse {
    let result = app_state.store.lock().add_memo(payload.into_inner());
    respond_store_result(result)
}

pub(crate) async fn update_memo(
    app_state: actix_web::web::Data<crate::AppState>,
    payload: actix_web::web::Json<common::Memo>,
) -> actix_web::HttpResponse {
    let result = app_state.store.lock().update_memo(payload.into_inner());
    respond_store_result(result)
}

pub(crate) async fn list_memos(
    app_state: actix_web::web::Data<crate::AppState>,
) -> actix_web::HttpResponse {
    let memos = app_state.store.lock().list_memos();
    match serde_json::to_string(&memos) {
        Ok(body) => actix_web::HttpResponse::Ok()
            .content_type(actix_web::http::header::ContentType::json())
            .body(body),
        Err(error) => respond_internal_server_error(&error.to_string()),
    }
}

pub(crate) async fn delete_memos(
    app_state: actix_web::web::Data<crate::AppState>,
    req: actix_web::HttpRequest,
) -> actix_web::HttpResponse {
    let mut store = app_state.store.lock();
    if store.is_empty() {
        log::warn!("memo is empty, length = {}", store.len());
        return respond_not_found();
    }

    let raw_id = first_query_value(req.query_string(), "id").unwrap_or_default();
    let id = match raw_id.parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            log::warn!("memo id format is invalid, id = {}", raw_id);
            return respond_error(
                StatusCode::BAD_REQUEST,
                vec![ErrorMessage::invalid_memo_id()],
            );
        }
    };

    match store.delete_memo_by_id(id) {
        Some(_) => {
            log::info!("memo is deleted, id = {}", id);
            actix_web::HttpResponse::Ok()
                .content_type(actix_web::http::header::ContentType::plaintext())
                .body(format!("memo_id = {} is deleted", id))
        }
        None => {
            log::warn!("memo to delete does not exist, id = {}", id);
            respond_not_found()
        }
    }
}

/// First value for `key`; repeated keys after it are ignored.
fn first_query_value(query: &str, key: &str) -> Option<String> {
    let pairs = actix_web::web::Query::<Vec<(String, String)>>::from_query(query).ok()?;
    pairs
        .into_inner()
        .into_iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value)
}

async fn invalid_method(req: actix_web::HttpRequest) -> actix_web::HttpResponse {
    log::warn!(
        "method is not allowed, method = {}, path = {}",
        req.method(),
        req.path()
    );
    respond_error(StatusCode::BAD_REQUEST, vec![ErrorMessage::invalid_method()])
}

async fn unknown_path(req: actix_web::HttpRequest) -> actix_web::HttpResponse {
    log::warn!("path does not exist, path = {}", req.path());
    respond_not_found()
}
