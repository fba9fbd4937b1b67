mod config;
mod logging;
mod memo;
mod store;

use actix_web::dev::Service;

struct AppState {
    store: parking_lot::Mutex<store::MemoStore>,
    config: config::Config,
}

impl AppState {
    fn new(config: config::Config) -> Self {
        Self {
            store: parking_lot::Mutex::new(store::MemoStore::new(config.limits)),
            config,
        }
    }
}

/// The full application: CORS, the access-log hook and every memo route.
fn app(
    app_state: actix_web::web::Data<AppState>,
) -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    actix_web::App::new()
        .app_data(app_state)
        .wrap(actix_cors::Cors::permissive())
        .wrap_fn(|req, srv| {
            logging::log_access(&req);
            srv.call(req)
        })
        .configure(memo::config_routes)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    logging::init();
    log::info!("start");

    let config = config::Config::from_env()
        .map_err(|error| std::io::Error::new(std::io::ErrorKind::InvalidInput, error))?;
    let bind_addr = (config.bind_addr.clone(), config.port);
    log::info!(
        "listening on {}:{}, body limit = {} characters",
        bind_addr.0,
        bind_addr.1,
        config.limits.body_max_chars
    );

    let app_state = actix_web::web::Data::new(AppState::new(config));

    actix_web::HttpServer::new(move || app(app_state.clone()))
    .bind(bind_addr)?
    .run()
    .await
}
