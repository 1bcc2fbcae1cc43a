use actix_web::web;
use employee_directory_api::config::AppConfig;
use employee_directory_api::google::GoogleClient;
use employee_directory_api::model::{CategoryEntry, ErrorBody, MasterData, SubCategoryEntry};
use employee_directory_api::routes::{self, AppState};
use shuttle_actix_web::ShuttleActixWeb;
use shuttle_runtime::SecretStore;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(routes::list_employees, routes::master_data),
    components(schemas(MasterData, CategoryEntry, SubCategoryEntry, ErrorBody)),
    tags(
        (name = "directory", description = "Employee directory and master data API")
    )
)]
struct ApiDoc;

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: SecretStore,
) -> ShuttleActixWeb<impl FnOnce(&mut web::ServiceConfig) + Send + Clone + 'static> {
    let (config, service_account) = AppConfig::from_secrets(&secrets)?;
    let state = web::Data::new(AppState {
        google: GoogleClient::new(service_account),
        config,
    });

    let config = move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(state.clone())
            .service(routes::list_employees)
            .service(routes::master_data)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            );
    };

    Ok(config.into())
}
