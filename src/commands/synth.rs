//! Implementation of the `changelog-notify synth` command.
//!
//! Composes the resource graph and renders it as JSON or YAML, either to
//! stdout or atomically to `--output`.

use super::load_config;
use crate::cli::{OutputFormat, SynthArgs};
use crate::config::NotificationConfig;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::wiring::NotifyWiring;
use tracing::info;

/// Execute the `synth` command.
pub fn cmd_synth(args: SynthArgs) -> Result<()> {
    let config = load_config(&args.config.config)?;
    let rendered = render_template(&config, args.format)?;

    match &args.output {
        Some(path) => {
            atomic_write_file(path, &rendered)?;
            info!(output = %path.display(), "wrote template");
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// Compose `config` and render the template in `format`.
pub(crate) fn render_template(config: &NotificationConfig, format: OutputFormat) -> Result<String> {
    let template = NotifyWiring::compose(config)?.into_template();
    match format {
        OutputFormat::Json => template.to_json_pretty(),
        OutputFormat::Yaml => template.to_yaml(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ConfigArgs;
    use crate::test_support::{EnvGuard, MINIMAL_YAML, config_dir, test_config};
    use serial_test::serial;

    #[test]
    fn test_render_json_is_valid_template() {
        let rendered = render_template(&test_config(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["AWSTemplateFormatVersion"], "2010-09-09");
        assert_eq!(value["Resources"].as_object().unwrap().len(), 6);
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_render_yaml_parses_back() {
        let rendered = render_template(&test_config(), OutputFormat::Yaml).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&rendered).unwrap();

        assert_eq!(
            value["AWSTemplateFormatVersion"],
            serde_yaml::Value::from("2010-09-09")
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = test_config().with_changelog_path("CHANGELOG.md");
        assert_eq!(
            render_template(&config, OutputFormat::Json).unwrap(),
            render_template(&config, OutputFormat::Json).unwrap()
        );
    }

    #[test]
    #[serial]
    fn test_cmd_synth_writes_output_file() {
        let _env = EnvGuard::clean();
        let (dir, config_path) = config_dir(MINIMAL_YAML);
        let output = dir.path().join("cdk.out").join("notify.template.json");

        cmd_synth(SynthArgs {
            config: ConfigArgs {
                config: config_path,
            },
            output: Some(output.clone()),
            format: OutputFormat::Json,
        })
        .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            render_template(&test_config(), OutputFormat::Json).unwrap()
        );
    }

    #[test]
    #[serial]
    fn test_cmd_synth_uses_env_account_for_existing_repository() {
        let env = EnvGuard::clean();
        env.set(crate::config::ACCOUNT_ENV_VAR, "123456789012");
        env.set(crate::config::REGION_ENV_VAR, "eu-central-1");

        let yaml = format!("{}from_exist_repository: true\n", MINIMAL_YAML);
        let (dir, config_path) = config_dir(&yaml);
        let output = dir.path().join("template.json");

        cmd_synth(SynthArgs {
            config: ConfigArgs {
                config: config_path,
            },
            output: Some(output.clone()),
            format: OutputFormat::Json,
        })
        .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains(":codecommit:eu-central-1:123456789012:test-repo"));
    }

    #[test]
    #[serial]
    fn test_cmd_synth_rejects_invalid_config_without_writing() {
        let (dir, config_path) = config_dir("repository_name: only-this\n");
        let output = dir.path().join("template.json");

        let err = cmd_synth(SynthArgs {
            config: ConfigArgs {
                config: config_path,
            },
            output: Some(output.clone()),
            format: OutputFormat::Json,
        })
        .unwrap_err();

        assert_eq!(err.exit_code(), crate::exit_codes::INVALID_CONFIG);
        assert!(!output.exists());
    }
}
