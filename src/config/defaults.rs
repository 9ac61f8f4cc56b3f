pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: i64 = 9000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info";

pub const DEFAULT_DB_HOST: &str = "127.0.0.1";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_DB_PASSWORD: &str = "postgres";
pub const DEFAULT_DB_NAME: &str = "todo";
pub const DEFAULT_DB_MAX_CONNECTIONS: i64 = 10;
pub const DEFAULT_DB_MIN_IDLE: i64 = 2;

pub const DEFAULT_QUOTES_HOST: &str = "quotes15.p.rapidapi.com";
pub const DEFAULT_QUOTES_BASE_URL: &str = "https://quotes15.p.rapidapi.com";
pub const DEFAULT_QUOTES_LANGUAGE: &str = "en";
pub const DEFAULT_QUOTES_TIMEOUT_SECS: u64 = 10;
