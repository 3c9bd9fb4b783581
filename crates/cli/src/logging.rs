use env_logger::{Builder, Target};
use log::LevelFilter;

/// Default verbosity when neither RUST_LOG nor `--log-level` is given.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Install the global logger. Output goes to stderr so it never mixes with the menu.
///
/// Precedence, lowest to highest: `DEFAULT_LEVEL`, `RUST_LOG`, `--log-level`.
pub fn init(level: Option<LevelFilter>) {
    let mut builder = Builder::new();
    builder
        .filter_level(DEFAULT_LEVEL)
        .format_timestamp_secs()
        .target(Target::Stderr);
    builder.parse_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}
