//! Where podshelf keeps its files on each platform.

use std::path::PathBuf;

const APP_DIR: &str = "podshelf";

/// Configuration directory: `~/.config/podshelf/` on unix (XDG, also on
/// macOS rather than Application Support), the platform config dir joined
/// with `podshelf` on Windows.
pub fn config_dir() -> PathBuf {
    #[cfg(unix)]
    {
        home_or_dot().join(".config").join(APP_DIR)
    }

    #[cfg(windows)]
    {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }
}

/// Data directory, used for the log file: `~/.local/share/podshelf/` on
/// unix, the local data dir on Windows.
pub fn data_dir() -> PathBuf {
    #[cfg(unix)]
    {
        home_or_dot().join(".local").join("share").join(APP_DIR)
    }

    #[cfg(windows)]
    {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }
}

#[cfg(unix)]
fn home_or_dot() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}
