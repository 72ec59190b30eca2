pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_PREFIX: &str = "/api";
pub const DEFAULT_RUST_LOG: &str = "info,project_tracker=debug,tower_http=info,sqlx=warn";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://project_tracker.db?mode=rwc";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_DB_MIN_IDLE: u32 = 1;
