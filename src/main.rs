use clap::Parser;
use email_assist::app::{analytics, samples};
use email_assist::config::cli::Command;
use email_assist::core::ConfigProvider;
use email_assist::utils::error::{AssistError, ErrorSeverity};
use email_assist::utils::{logger, validation::Validate};
use email_assist::{CliConfig, ConfiguredModel, Email, EmailAssistant};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting email-assist");
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve_settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    if settings.use_model() {
        tracing::info!(
            "Using model {} at {}",
            settings.model().name,
            settings.model().url
        );
    } else {
        tracing::info!("Model disabled, using keyword rules and templates only");
    }

    let assistant = EmailAssistant::new(ConfiguredModel::from_config(&settings));

    match cli.command {
        Command::Classify {
            sender,
            subject,
            body,
            json,
        } => {
            let email = Email::new(sender, subject, body);
            let classification = assistant.classify(&email).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&classification)?);
            } else {
                println!("Category:  {}", classification.category);
                println!("Priority:  {}", classification.priority);
                println!("Reasoning: {}", classification.reasoning);
            }
        }
        Command::Respond {
            sender,
            subject,
            body,
            tone,
        } => {
            let tone = tone.unwrap_or_else(|| settings.default_tone().to_string());
            let email = Email::new(sender, subject, body);
            let (classification, reply) = assistant.respond(&email, &tone).await;
            println!(
                "Category: {}  Priority: {}  Tone: {}",
                classification.category, classification.priority, tone
            );
            println!();
            println!("{}", reply);
        }
        Command::Analyze { json, .. } => {
            let rows = match samples::load_samples(settings.sample_path()) {
                Ok(rows) => rows,
                Err(e) => exit_with(&e),
            };
            if rows.is_empty() {
                eprintln!("No sample emails found for analysis");
                std::process::exit(1);
            }

            tracing::info!("Analyzing {} emails", rows.len());
            let report = analytics::analyze_samples(&assistant, &rows, |done, total| {
                tracing::info!("Classified {}/{}", done, total);
            })
            .await;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", analytics::render_report(&report));
            }
        }
    }

    Ok(())
}

fn exit_with(e: &AssistError) -> ! {
    tracing::error!("{} (Severity: {:?})", e, e.severity());
    tracing::error!("Suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
