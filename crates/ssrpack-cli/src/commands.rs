//! Command implementations.

use anyhow::Context;
use ssrpack_config::{BundleRequest, EnvironmentRegistry, ServerBundleConfig, build_config};
use tracing::{debug, info};

use crate::cli::RequestArgs;

/// `ssrpack show`: assemble and print the configuration as JSON.
pub fn show_execute(args: RequestArgs) -> anyhow::Result<()> {
    let config = assemble(&args)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&config)?
    } else {
        serde_json::to_string(&config)?
    };
    println!("{json}");
    Ok(())
}

/// `ssrpack check`: validate the request and environment lookup only.
pub fn check_execute(args: RequestArgs) -> anyhow::Result<()> {
    let config = assemble(&args)?;

    info!(
        public_path = %config.output.public_path,
        rules = config.rules.len(),
        plugins = config.plugins.len(),
        "configuration is valid"
    );
    println!(
        "ok: {} rules, {} plugins, public path {}",
        config.rules.len(),
        config.plugins.len(),
        config.output.public_path
    );
    Ok(())
}

fn assemble(args: &RequestArgs) -> anyhow::Result<ServerBundleConfig> {
    let registry = match &args.registry {
        Some(path) => {
            debug!(path = %path.display(), "loading environment registry");
            EnvironmentRegistry::from_toml_file(path)
                .with_context(|| format!("failed to load registry from {}", path.display()))?
        }
        None => EnvironmentRegistry::builtin(),
    };

    let request = BundleRequest {
        env: args.env.clone(),
        build: args.build,
        minify: args.minify,
    };

    let config = build_config(&request, &registry)?;
    Ok(config)
}
