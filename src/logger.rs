// Logging
// Installs env_logger behind the log facade, info level unless RUST_LOG says otherwise

use env_logger::Env;

pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}
