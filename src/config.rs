use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub admin_token: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "4000".to_string()).parse().expect("PORT must be a number"),
            admin_token: env::var("ADMIN_TOKEN").expect("ADMIN_TOKEN must be set"),
        }
    }
}
