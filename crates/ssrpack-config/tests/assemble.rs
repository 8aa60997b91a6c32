//! Tests for configuration assembly: structure, parameterization and
//! determinism of the record handed to the bundler.

use ssrpack_config::{
    BundleRequest, EnvironmentConfig, EnvironmentRegistry, LibraryTarget, NodeEnv,
    PluginDescriptor, ServerBundleConfig, build_config,
};

fn registry() -> EnvironmentRegistry {
    EnvironmentRegistry::builtin()
}

#[test]
fn dev_config_has_expected_shape() {
    let config = build_config(&BundleRequest::new(), &registry()).unwrap();

    assert_eq!(config.context, ".");
    assert_eq!(config.entry.len(), 1);
    assert_eq!(
        config.entry["server-renderer"],
        vec!["./src/server-renderer.js"]
    );
    assert_eq!(config.output.path, "web/build/");
    assert_eq!(config.output.filename, "[name].js");
    assert_eq!(config.output.library_target, LibraryTarget::This);
    assert_eq!(config.rules.len(), 8);
    assert!(!config.devtool);
}

#[test]
fn aliases_point_at_the_selected_environment() {
    let config = build_config(
        &BundleRequest::new().with_env("production"),
        &registry(),
    )
    .unwrap();

    let alias: Vec<(&str, &str)> = config
        .resolve
        .alias
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        alias,
        [
            ("config", "./config/config-production.js"),
            ("shared", "./src/shared"),
        ]
    );
}

#[test]
fn public_path_gets_exactly_one_trailing_slash() {
    let mut registry = EnvironmentRegistry::new();
    registry.register(
        "production",
        EnvironmentConfig {
            public_path: "https://cdn.example.com/assets///".to_string(),
        },
    );

    let config = build_config(
        &BundleRequest::new().with_env("production"),
        &registry,
    )
    .unwrap();
    assert_eq!(config.output.public_path, "https://cdn.example.com/assets/");
}

#[test]
fn root_public_path_stays_a_single_slash() {
    let config = build_config(&BundleRequest::new(), &registry()).unwrap();
    assert_eq!(config.output.public_path, "/");
}

#[test]
fn dev_plugins_include_stylesheet_extraction() {
    let config = build_config(&BundleRequest::new(), &registry()).unwrap();

    assert_eq!(config.plugins[0], PluginDescriptor::NoEmitOnErrors);
    assert_eq!(
        config.plugins[1],
        PluginDescriptor::LoaderOptions {
            minimize: false,
            debug: true,
        }
    );
    assert_eq!(
        config.plugins[2],
        PluginDescriptor::Define {
            node_env: NodeEnv::Development,
            client: false,
            server: true,
        }
    );
    assert!(matches!(
        config.plugins[5],
        PluginDescriptor::ExtractText { .. }
    ));
    assert_eq!(config.plugins[6], PluginDescriptor::SvgStore { emit: false });
}

#[test]
fn production_plugins_drop_extraction_and_enable_minimize() {
    let config = build_config(
        &BundleRequest::new().with_env("production"),
        &registry(),
    )
    .unwrap();

    assert_eq!(config.plugins.len(), 6);
    assert_eq!(
        config.plugins[1],
        PluginDescriptor::LoaderOptions {
            minimize: true,
            debug: false,
        }
    );
    assert!(matches!(
        config.plugins[2],
        PluginDescriptor::Define {
            node_env: NodeEnv::Production,
            ..
        }
    ));
    assert!(
        !config
            .plugins
            .iter()
            .any(|p| matches!(p, PluginDescriptor::ExtractText { .. }))
    );
}

#[test]
fn production_scripts_carry_optimization_transforms() {
    let config = build_config(
        &BundleRequest::new().with_env("production"),
        &registry(),
    )
    .unwrap();

    let script_plugins = &config.rules[0].handlers[0].options["plugins"];
    let names: Vec<&str> = script_plugins
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "transform-runtime",
            "dynamic-import-node",
            "transform-react-remove-prop-types",
            "transform-react-constant-elements",
            "transform-react-inline-elements",
        ]
    );
}

#[test]
fn dev_scripts_carry_only_the_baseline_transforms() {
    let config = build_config(&BundleRequest::new(), &registry()).unwrap();

    let script_plugins = &config.rules[0].handlers[0].options["plugins"];
    assert_eq!(script_plugins.as_array().unwrap().len(), 2);
}

#[test]
fn rule_order_is_stable() {
    let config = build_config(&BundleRequest::new(), &registry()).unwrap();

    let first_loaders: Vec<&str> = config
        .rules
        .iter()
        .map(|r| r.handlers[0].loader.as_str())
        .collect();
    assert_eq!(
        first_loaders,
        [
            "babel-loader",
            "style-loader",
            "external-svg-sprite-loader",
            "raw-loader",
            "file-loader",
            "file-loader",
            "file-loader",
            "skip-loader",
        ]
    );
}

#[test]
fn assembly_is_deterministic() {
    let request = BundleRequest::new()
        .with_env("staging")
        .with_build(true)
        .with_minify(false);

    let first = build_config(&request, &registry()).unwrap();
    let second = build_config(&request, &registry()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn invalid_request_yields_no_partial_config() {
    let request = BundleRequest::new().with_env("production").with_build(false);
    assert!(build_config(&request, &registry()).is_err());
}

#[test]
fn unknown_environment_fails_after_validation() {
    let request = BundleRequest::new().with_env("qa");
    let err = build_config(&request, &registry()).unwrap_err();
    assert!(err.to_string().contains("unknown environment"));
}

#[test]
fn serialized_config_uses_the_bundler_contract_names() {
    let config = build_config(&BundleRequest::new(), &registry()).unwrap();
    let value = serde_json::to_value(&config).unwrap();

    // handler chains serialize under "use", plugins as tagged records
    assert!(value["rules"][0]["use"][0]["loader"].is_string());
    assert_eq!(value["plugins"][0]["plugin"], "no-emit-on-errors");
    assert_eq!(value["output"]["library_target"], "this");
    assert_eq!(value["devtool"], false);
}

#[test]
fn assemble_round_trips_through_json() {
    let config = build_config(&BundleRequest::new(), &registry()).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    let back: ServerBundleConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}
