use crate::config::toml_config::TomlConfig;
use crate::config::AssistantSettings;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "email-assist")]
#[command(about = "Classify support emails and draft replies with a local model")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Model-serving endpoint (overrides the config file)
    #[arg(long, global = true)]
    pub model_url: Option<String>,

    /// Model identifier (overrides the config file)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Skip the model and use keyword rules and templates only
    #[arg(long, global = true)]
    pub no_model: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Classify a single email
    Classify {
        #[arg(long)]
        sender: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        body: String,
        /// Print the classification as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify an email and draft a reply
    Respond {
        #[arg(long)]
        sender: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        body: String,
        /// professional, friendly, formal or casual
        #[arg(long)]
        tone: Option<String>,
    },
    /// Classify every row of the sample CSV and print distributions
    Analyze {
        /// Sample CSV (sender,subject,body,sent_date)
        #[arg(long)]
        csv: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl CliConfig {
    /// Config file values, then command line overrides.
    pub fn resolve_settings(&self) -> Result<AssistantSettings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(Path::new(path))?.to_settings(),
            None => AssistantSettings::default(),
        };

        if let Some(url) = &self.model_url {
            settings.model.url = url.clone();
        }
        if let Some(model) = &self.model {
            settings.model.name = model.clone();
        }
        if self.no_model {
            settings.use_model = false;
        }
        if let Command::Analyze { csv: Some(path), .. } = &self.command {
            settings.sample_path = path.clone();
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classify_command() {
        let cli = CliConfig::try_parse_from([
            "email-assist",
            "classify",
            "--sender",
            "jane.doe@example.com",
            "--subject",
            "Help",
            "--body",
            "I cannot log in",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Command::Classify { sender, json, .. } => {
                assert_eq!(sender, "jane.doe@example.com");
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_overrides_apply_on_top_of_defaults() {
        let cli = CliConfig::try_parse_from([
            "email-assist",
            "--model-url",
            "http://gpu-box:11434",
            "--model",
            "llama3.1:8b",
            "--no-model",
            "analyze",
            "--csv",
            "inbox.csv",
        ])
        .unwrap();

        let settings = cli.resolve_settings().unwrap();
        assert_eq!(settings.model.url, "http://gpu-box:11434");
        assert_eq!(settings.model.name, "llama3.1:8b");
        assert!(!settings.use_model);
        assert_eq!(settings.sample_path, "inbox.csv");
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = CliConfig::try_parse_from([
            "email-assist",
            "--config",
            "/definitely/not/here.toml",
            "analyze",
        ])
        .unwrap();
        assert!(cli.resolve_settings().is_err());
    }
}
