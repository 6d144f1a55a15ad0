pub mod app_state_builder;
pub mod fixtures;
pub mod stubs;

/// Builds a test service from an `AppState`, wired exactly like the server.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($crate::shared::api::custom_json_config(65_536))
                .configure(|cfg| $crate::init_routes(cfg, &$state)),
        )
        .await
    };
}

pub(crate) use init_app;
