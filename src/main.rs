use anyhow::Context;
use deskview::ViewerConfig;

/// Names an optional TOML configuration file
const CONFIG_ENV: &str = "DESKVIEW_CONFIG";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            log::info!("Loading configuration from {}", path.to_string_lossy());
            ViewerConfig::load(&path)
                .with_context(|| format!("failed to load {}", path.to_string_lossy()))?
        }
        None => ViewerConfig::default(),
    };

    deskview::run(config)?;
    Ok(())
}
