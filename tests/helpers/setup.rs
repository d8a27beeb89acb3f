use chrono::NaiveDateTime;
use pharmacy_directory_api::Application;
use pharmacy_directory_infra::{Config, PharmacyChangeFeed, PharmacyDirectoryContext, StaticTimeSys};
use pharmacy_directory_sdk::PharmacyDirectorySDK;
use std::sync::Arc;

pub struct TestApp {
    pub config: Config,
    pub changes: PharmacyChangeFeed,
    pub address: String,
}

// Launch the application as a background task with a frozen local time
pub async fn spawn_app(
    local_now: NaiveDateTime,
    demo_data: bool,
) -> (TestApp, PharmacyDirectorySDK, PharmacyDirectorySDK) {
    let mut ctx = PharmacyDirectoryContext::with_config(Config {
        port: 0, // Random port
        admin_api_key: "test-admin-key".into(),
        demo_data,
    });
    ctx.sys = Arc::new(StaticTimeSys { local_now });

    let config = ctx.config.clone();
    let changes = ctx.changes.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let public_sdk = PharmacyDirectorySDK::new(address.clone());
    let admin_sdk = PharmacyDirectorySDK::with_api_key(address.clone(), config.admin_api_key.clone());
    let app = TestApp {
        config,
        changes,
        address,
    };
    (app, public_sdk, admin_sdk)
}
