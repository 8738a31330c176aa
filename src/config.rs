use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub mongo_uri: String,
    pub port: u16,
    pub pages_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mongo_uri = std::env::var("MONGO_URI")
            .expect("Failed to determine MONGO_URI from environment variables");

        let port = std::env::var("PORT")
            .ok()
            .and_then(|val| val.parse::<u16>().ok())
            .unwrap_or(3000);

        let pages_path =
            PathBuf::from(std::env::var("PAGES_DIR").unwrap_or_else(|_| "./pages".to_string()));

        Self {
            mongo_uri,
            port,
            pages_path,
        }
    }
}
