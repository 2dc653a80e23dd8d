use anyhow::Context;
use tasklog_config::TasklogConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (after `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TasklogConfig> {
    let mut config = TasklogConfig::load_with_dotenv().context("failed to load configuration")?;

    if let Some(api_url) = &flags.api_url {
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            anyhow::bail!("invalid --api-url '{api_url}': must start with http:// or https://");
        }
        tracing::debug!(%api_url, "api base url overridden from command line");
        config.api.base_url.clone_from(api_url);
    }

    Ok(config)
}
