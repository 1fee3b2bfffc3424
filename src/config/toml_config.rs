use crate::config::{AssistantSettings, ModelConfig, DEFAULT_SAMPLE_PATH};
use crate::utils::error::{AssistError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub model: Option<ModelSection>,
    pub assistant: Option<AssistantSection>,
    pub data: Option<DataSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSection {
    pub url: Option<String>,
    pub name: Option<String>,
    pub classify_timeout_secs: Option<u64>,
    pub generate_timeout_secs: Option<u64>,
    pub classify_temperature: Option<f64>,
    pub generate_temperature: Option<f64>,
    pub top_p: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantSection {
    pub use_model: Option<bool>,
    pub default_tone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSection {
    pub sample_path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AssistError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AssistError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OLLAMA_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AssistError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 合併預設值，產生執行期設定
    pub fn to_settings(&self) -> AssistantSettings {
        let defaults = ModelConfig::default();
        let model = self.model.clone().unwrap_or_default();
        let assistant = self.assistant.clone().unwrap_or_default();

        AssistantSettings {
            model: ModelConfig {
                url: model.url.unwrap_or(defaults.url),
                name: model.name.unwrap_or(defaults.name),
                classify_timeout: model
                    .classify_timeout_secs
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.classify_timeout),
                generate_timeout: model
                    .generate_timeout_secs
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.generate_timeout),
                classify_temperature: model
                    .classify_temperature
                    .unwrap_or(defaults.classify_temperature),
                generate_temperature: model
                    .generate_temperature
                    .unwrap_or(defaults.generate_temperature),
                top_p: model.top_p.unwrap_or(defaults.top_p),
            },
            use_model: assistant.use_model.unwrap_or(true),
            default_tone: assistant
                .default_tone
                .unwrap_or_else(|| "professional".to_string()),
            sample_path: self.sample_path().to_string(),
        }
    }

    pub fn sample_path(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|d| d.sample_path.as_deref())
            .unwrap_or(DEFAULT_SAMPLE_PATH)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_settings().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[model]
url = "http://gpu-box:11434"
name = "llama3.1:8b"
classify_timeout_secs = 10
generate_timeout_secs = 20
top_p = 0.8

[assistant]
use_model = false
default_tone = "friendly"

[data]
sample_path = "data/inbox.csv"
"#;

        let settings = TomlConfig::from_toml_str(toml_content).unwrap().to_settings();

        assert_eq!(settings.model.url, "http://gpu-box:11434");
        assert_eq!(settings.model.name, "llama3.1:8b");
        assert_eq!(settings.model.classify_timeout, Duration::from_secs(10));
        assert_eq!(settings.model.generate_timeout, Duration::from_secs(20));
        assert_eq!(settings.model.classify_temperature, 0.1);
        assert_eq!(settings.model.top_p, 0.8);
        assert!(!settings.use_model);
        assert_eq!(settings.default_tone, "friendly");
        assert_eq!(settings.sample_path, "data/inbox.csv");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = TomlConfig::from_toml_str("").unwrap().to_settings();
        assert_eq!(settings, AssistantSettings::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EMAIL_ASSIST_TEST_MODEL_URL", "http://10.0.0.5:11434");

        let toml_content = r#"
[model]
url = "${EMAIL_ASSIST_TEST_MODEL_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.to_settings().model.url, "http://10.0.0.5:11434");

        std::env::remove_var("EMAIL_ASSIST_TEST_MODEL_URL");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let toml_content = r#"
[model]
name = "${EMAIL_ASSIST_TEST_SURELY_UNSET}"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.to_settings().model.name,
            "${EMAIL_ASSIST_TEST_SURELY_UNSET}"
        );
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[model]
url = "invalid-url"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let toml_content = r#"
[model]
classify_timeout_secs = 0
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[model\nurl = 1").unwrap_err();
        assert!(matches!(err, AssistError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[model]\nname = \"mistral:7b\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.to_settings().model.name, "mistral:7b");
    }
}
