use lazy_static::lazy_static;
use std::env;
use std::path::PathBuf;

fn load_dotenv() {
    // Try to load .env from current directory first
    if dotenv::dotenv().is_ok() {
        return;
    }

    // Fall back to the executable's directory (for app bundles)
    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let env_path = exe_dir.join(".env");
            if env_path.exists() {
                dotenv::from_path(env_path).ok();
                return;
            }
        }
    }

    for path in [PathBuf::from("../.env"), PathBuf::from("../../.env")] {
        if path.exists() {
            dotenv::from_path(path).ok();
            break;
        }
    }
}

lazy_static! {
    pub static ref BACKEND_URL: String = {
        load_dotenv();
        env::var("LYRILINGUAL_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
    };
}

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

pub const NO_RESULTS_TEXT: &str = "No results found";
pub const VIEW_LYRICS_LABEL: &str = "View Lyrics";
pub const COLUMN_HEADERS: [&str; 4] = ["Title", "Artist", "Album", "Action"];
