use client_options::{
    AnnouncementCharacterLimitOptions, ClientOptionsPayload, GridVisibilityOptions,
};
use common::{config::AppConfig, logger::init_logger};

fn main() {
    // Load configuration and initialize logging
    let config = AppConfig::global().clone();
    let _log_guard = init_logger(&config.log_file, config.log_to_stdout);

    println!(
        "{} page payload preview ({})",
        config.project_name, config.env
    );

    // Sample bags: grid shown, single-segment SMS limit
    let mut payload = ClientOptionsPayload::new();
    payload
        .register(&GridVisibilityOptions::new(true))
        .expect("Failed to register message list options");
    payload
        .register(&AnnouncementCharacterLimitOptions::new(160))
        .expect("Failed to register class announcement options");

    tracing::info!("Assembled page payload with {} block(s).", payload.len());

    println!(
        "{}",
        payload
            .to_json_string_pretty()
            .expect("Failed to render page payload")
    );
}
