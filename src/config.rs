use std::path::PathBuf;

use tracing::info;

/// Application configuration.
/// In debug builds the `.env` file is loaded first, so `TMDB_API_TOKEN` and
/// `FLICK_DATA_DIR` can be supplied without touching the keychain or home dir.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Directory holding app state (the trending database).
    pub data_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        if dotenvy::dotenv().is_ok() {
            info!("Dev mode: loaded .env file");
        }

        let data_dir = std::env::var("FLICK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_data_dir());

        info!("Data directory: {}", data_dir.display());
        Self { data_dir }
    }

    fn default_data_dir() -> PathBuf {
        let home_dir = dirs::home_dir().expect("Failed to get home directory");
        home_dir.join(".flick")
    }

    /// Path of the trending-searches sqlite database.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("trending.db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_path_lives_in_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("/tmp/flick-test"),
        };
        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/flick-test/trending.db")
        );
    }
}
