/// Server configuration, read from the environment (a `.env` file is honored
/// when present).
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn new() -> Self {
        dotenvy::dotenv().ok();
        let host = dotenvy::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = dotenvy::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8080);
        Self { host, port }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
