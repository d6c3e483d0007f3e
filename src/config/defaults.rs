pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://timetrack.db?mode=rwc";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_DB_MIN_IDLE: u32 = 2;
pub const DEFAULT_JWT_SECRET: &str = "dev-only-secret-change-me-now";
pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: u64 = 30 * 60;
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173";
pub const MIN_JWT_SECRET_BYTES: usize = 16;
