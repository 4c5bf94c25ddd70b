use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "CareSense";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Port the API server binds to unless `PORT` overrides it.
pub const DEFAULT_PORT: u16 = 5000;

/// Get the application data directory
/// ~/CareSense/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("CareSense")
}

/// Get the models directory (classifier + label encoders)
pub fn models_dir() -> PathBuf {
    app_data_dir().join("models")
}

/// Path of the SQLite database file
pub fn database_path() -> PathBuf {
    app_data_dir().join("caresense.db")
}

/// Address the API server binds to, honoring the `PORT` env var.
pub fn bind_addr() -> SocketAddr {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    SocketAddr::from(([0, 0, 0, 0], port))
}

/// Default log filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("CareSense"));
    }

    #[test]
    fn models_dir_under_app_data() {
        let models = models_dir();
        assert!(models.starts_with(app_data_dir()));
        assert!(models.ends_with("models"));
    }

    #[test]
    fn database_path_under_app_data() {
        assert!(database_path().starts_with(app_data_dir()));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
