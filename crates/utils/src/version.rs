pub const APP_NAME: &str = "blsync";

pub const BLSYNC_VERSION: &str = env!("CARGO_PKG_VERSION");
