//! Debug logging
//!
//! Debug builds write to `{cache_dir}/pokedex/debug.log`; the terminal
//! belongs to the TUI. Release builds install no logger, so every `log`
//! macro is a no-op. Filter with `RUST_LOG` (default `debug`).

#[cfg(debug_assertions)]
use std::io::Write;
use std::path::PathBuf;

const LOG_DIR: &str = "pokedex";
const LOG_FILE: &str = "debug.log";

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(LOG_DIR).join(LOG_FILE))
}

/// Install the file logger; silently does nothing if the file can't be opened
#[cfg(debug_assertions)]
pub fn init() {
    let Some(path) = log_path() else {
        return;
    };
    if let Some(parent) = path.parent()
        && std::fs::create_dir_all(parent).is_err()
    {
        return;
    }
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

#[cfg(not(debug_assertions))]
pub fn init() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_location() {
        if let Some(path) = log_path() {
            assert!(path.ends_with("pokedex/debug.log"));
        }
    }
}
