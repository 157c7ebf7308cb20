use clap::Parser;
use tracing::Level;

use crate::database::DEFAULT_DATABASE_URL;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about)]
pub struct ServerArgs {
    #[clap(short, long, env = "WILDERS_LOG_LEVEL")]
    pub log_level: Option<String>,
    #[clap(short, long, env = "WILDERS_PORT", default_value = "4000")]
    pub port: u16,
    /// SQLite path or URL, or a mongodb:// connection string
    #[clap(short, long, env = "WILDERS_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database: String,
    #[clap(long, env = "WILDERS_CORS_ORIGIN")]
    pub cors_origin: Option<String>,
}

impl ServerArgs {
    pub fn log_level(&self) -> Level {
        match self
            .log_level
            .as_deref()
            .unwrap_or("info")
            .to_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    /// Filter directive for the subscriber; SQL driver chatter stays at warn
    pub fn log_filter(&self) -> String {
        format!("sqlx=warn,sea_orm=warn,{}", self.log_level())
    }
}
