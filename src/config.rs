#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
}

impl Config {
    pub fn init() -> Config {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://rentwise.db".to_string());

        Config { database_url }
    }
}
