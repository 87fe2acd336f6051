use app_state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use axum_server::bind;
use std::{error::Error, future::Future, pin::Pin};
use tower_http::services::ServeDir;

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod migrations;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;
pub mod views;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/checkin_obreiro", post(routes::checkin_obreiro))
        .route("/login_lider", get(routes::login_lider))
        .route("/auth_lider", post(routes::auth_lider))
        .route("/painel_lider", get(routes::painel_lider))
        .route("/checkin_lider", post(routes::checkin_lider))
        .route("/cadastrar_obreiro", post(routes::cadastrar_obreiro))
        .route("/remover_obreiro/:id", post(routes::remover_obreiro))
        .route("/download_modelo_obreiro", get(routes::download_modelo_obreiro))
        .route("/upload_obreiros", post(routes::upload_obreiros))
        .route("/ata", get(routes::ata_form).post(routes::create_ata))
        .route("/gerar_ata_pdf/:id", get(routes::gerar_ata_pdf))
        .route("/arquivar_ata/:id", post(routes::arquivar_ata))
        .route(
            "/visualizar_atas_arquivadas",
            get(routes::visualizar_atas_arquivadas),
        )
        .route("/logout", get(routes::logout))
        .nest_service("/static", ServeDir::new("assets"))
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let http_future = bind(address.parse()?).serve(router.into_make_service());

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        log::info!("listening on {}", &self.address);
        self.http_future.await
    }
}
