use anyhow::Context;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Loads settings from `./configuration` and the `APP_` environment.
pub fn config<Settings: DeserializeOwned>() -> anyhow::Result<Settings> {
    let base_path = std::env::current_dir().context("Failed to determine the current directory")?;
    config_from(&base_path.join("configuration"))
}

/// The yaml file is optional, settings types are expected to carry serde defaults.
/// Environment variables win over the file, e.g. `APP_HASHING__COST=4`.
pub fn config_from<Settings: DeserializeOwned>(
    configuration_directory: &Path,
) -> anyhow::Result<Settings> {
    let file = if cfg!(test) { "test.yaml" } else { "base.yaml" };
    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join(file)).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("Failed to build configuration")?;

    settings
        .try_deserialize::<Settings>()
        .context("Failed to deserialize settings")
}

#[cfg(test)]
mod tests {
    use super::config_from;
    use serde::Deserialize;
    use std::path::Path;

    #[derive(Deserialize, Debug, Default)]
    #[serde(default)]
    struct KernelSettings {
        greeting: GreetingSettings,
    }

    #[derive(Deserialize, Debug)]
    #[serde(default)]
    struct GreetingSettings {
        text: String,
        repeat: u32,
    }

    impl Default for GreetingSettings {
        fn default() -> Self {
            Self {
                text: "hello".to_string(),
                repeat: 1,
            }
        }
    }

    #[derive(Deserialize, Debug, Default)]
    #[serde(default)]
    struct OverriddenSettings {
        kernel_override: KernelOverride,
    }

    #[derive(Deserialize, Debug, Default)]
    #[serde(default)]
    struct KernelOverride {
        level: u32,
    }

    fn fixtures() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("configuration")
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings: KernelSettings =
            config_from(Path::new("/definitely/not/a/configuration/dir")).unwrap();

        assert_eq!(settings.greeting.text, "hello");
        assert_eq!(settings.greeting.repeat, 1);
    }

    #[test]
    fn test_values_are_read_from_the_test_file() {
        let settings: KernelSettings = config_from(&fixtures()).unwrap();

        assert_eq!(settings.greeting.text, "habari");
        assert_eq!(settings.greeting.repeat, 3);
    }

    #[test]
    fn test_environment_overrides_nested_keys() {
        std::env::set_var("APP_KERNEL_OVERRIDE__LEVEL", "7");
        let settings: OverriddenSettings = config_from(&fixtures()).unwrap();
        std::env::remove_var("APP_KERNEL_OVERRIDE__LEVEL");

        assert_eq!(settings.kernel_override.level, 7);
    }
}
