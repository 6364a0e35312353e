use tracing::info;

/// Endpoint used when no override is configured. Returns the full record
/// set as a top-level JSON array; all filtering and pagination happen
/// client-side.
pub const DEFAULT_DIRECTORY_URL: &str = "https://jsonplaceholder.typicode.com/comments";

/// Application configuration
/// In debug builds: loads from .env file first
#[derive(Clone, Debug)]
pub struct Config {
    /// URL of the remote directory endpoint
    pub directory_url: String,
}

impl Config {
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: loaded .env file");
            }
        }

        let directory_url = std::env::var("ROSTER_DIRECTORY_URL")
            .unwrap_or_else(|_| DEFAULT_DIRECTORY_URL.to_string());

        info!("Config: directory endpoint is {}", directory_url);

        Self { directory_url }
    }
}
