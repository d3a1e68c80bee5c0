use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub hashing: HashingSettings,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HashingSettings {
    pub cost: u32,
}

impl Default for HashingSettings {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl Settings {
    pub fn load() -> anyhow::Result<Self> {
        shared_kernel::configuration::config()
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use shared_kernel::configuration::config_from;
    use std::path::Path;

    // an override in the shell running the tests would win over the file
    fn without_environment_override() {
        std::env::remove_var("APP_HASHING__COST");
    }

    #[test]
    fn test_defaults_apply_without_a_configuration_file() {
        without_environment_override();
        let settings: Settings = config_from(Path::new("/no/configuration/here")).unwrap();

        assert_eq!(settings.hashing.cost, bcrypt::DEFAULT_COST);
    }

    #[test]
    fn test_workspace_configuration_is_read() {
        without_environment_override();
        // shared_kernel is built without cfg(test) as a dependency, so
        // `base.yaml` is the file it picks up
        let directory = Path::new(env!("CARGO_MANIFEST_DIR")).join("../configuration");

        let settings: Settings = config_from(&directory).unwrap();

        assert_eq!(settings.hashing.cost, 10);
    }
}
