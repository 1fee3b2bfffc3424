use anyhow::Result;
use email_assist::core::ModelBackend;
use email_assist::{
    Category, Email, EmailAssistant, ModelConfig, ModelError, OllamaClient, Priority,
};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

fn outage_email() -> Email {
    Email::new(
        "ops.lead@example.com",
        "Servers are down",
        "Our production servers are down, urgent please help",
    )
}

fn client_for(server: &MockServer) -> OllamaClient {
    OllamaClient::new(ModelConfig::with_endpoint(server.base_url(), "llama3.2:3b"))
}

#[tokio::test]
async fn test_model_classification_is_used() -> Result<()> {
    let server = MockServer::start();
    let model_reply = r#"Here is the classification:
{"category": "account", "priority": "medium", "reasoning": "User is locked out"}"#;

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/generate")
            .json_body_partial(
                r#"{"model": "llama3.2:3b", "stream": false, "options": {"temperature": 0.1, "top_p": 0.9}}"#,
            )
            .body_contains("Subject: Servers are down");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "response": model_reply, "done": true }));
    });

    let assistant = EmailAssistant::new(client_for(&server));
    let classification = assistant.classify(&outage_email()).await;

    api_mock.assert();
    assert_eq!(classification.category, Category::Account);
    assert_eq!(classification.priority, Priority::Medium);
    assert_eq!(classification.reasoning, "User is locked out");
    Ok(())
}

#[tokio::test]
async fn test_server_error_falls_back_to_rules() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/generate");
        then.status(500);
    });

    let client = client_for(&server);
    let err = client.classify_via_model(&outage_email()).await.unwrap_err();
    assert!(matches!(err, ModelError::ResponseInvalid(_)));

    let assistant = EmailAssistant::new(client);
    let classification = assistant.classify(&outage_email()).await;

    api_mock.assert_hits(2);
    assert_eq!(classification.category, Category::TechnicalSupport);
    assert_eq!(classification.priority, Priority::High);
    assert!(classification
        .reasoning
        .starts_with("Classified as technical_support with high priority."));
    Ok(())
}

#[tokio::test]
async fn test_incomplete_json_falls_back_to_rules() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/generate");
        then.status(200)
            .json_body(json!({ "response": "{\"category\": \"billing\", \"priority\": \"low\"}" }));
    });

    let client = client_for(&server);
    assert!(matches!(
        client.classify_via_model(&outage_email()).await,
        Err(ModelError::ResponseInvalid(_))
    ));

    let classification = EmailAssistant::new(client).classify(&outage_email()).await;
    assert_eq!(classification.category, Category::TechnicalSupport);
    Ok(())
}

#[tokio::test]
async fn test_out_of_vocabulary_label_falls_back_to_rules() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/generate");
        then.status(200).json_body(json!({
            "response": "{\"category\": \"outage\", \"priority\": \"p0\", \"reasoning\": \"down\"}"
        }));
    });

    let classification = EmailAssistant::new(client_for(&server))
        .classify(&outage_email())
        .await;
    assert_eq!(classification.category, Category::TechnicalSupport);
    assert_eq!(classification.priority, Priority::High);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_server_is_unavailable() -> Result<()> {
    // nothing listens on port 9 (discard) in the test environment
    let client = OllamaClient::new(ModelConfig::with_endpoint("http://127.0.0.1:9", "llama3.2:3b"));

    let err = client.classify_via_model(&outage_email()).await.unwrap_err();
    assert!(matches!(err, ModelError::Unavailable(_)));

    let reply = EmailAssistant::new(client)
        .generate_response(&outage_email(), "technical_support", "professional")
        .await;
    assert!(reply.starts_with("Dear Ops Lead,"));
    Ok(())
}

#[tokio::test]
async fn test_slow_model_times_out_and_falls_back() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/generate");
        then.status(200)
            .delay(Duration::from_secs(2))
            .json_body(json!({ "response": "{\"category\": \"billing\", \"priority\": \"low\", \"reasoning\": \"late\"}" }));
    });

    let config = ModelConfig {
        classify_timeout: Duration::from_millis(200),
        ..ModelConfig::with_endpoint(server.base_url(), "llama3.2:3b")
    };
    let client = OllamaClient::new(config);

    let err = client.classify_via_model(&outage_email()).await.unwrap_err();
    assert!(matches!(err, ModelError::Unavailable(_)));
    Ok(())
}

#[tokio::test]
async fn test_model_reply_is_trimmed() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/generate")
            .json_body_partial(r#"{"options": {"temperature": 0.7}}"#)
            .body_contains("Required Tone: friendly")
            .body_contains("Address the customer by name: Ops Lead");
        then.status(200)
            .json_body(json!({ "response": "\n  Hi Ops Lead, we're on it!  \n" }));
    });

    let reply = EmailAssistant::new(client_for(&server))
        .generate_response(&outage_email(), "technical_support", "friendly")
        .await;

    api_mock.assert();
    assert_eq!(reply, "Hi Ops Lead, we're on it!");
    Ok(())
}

#[tokio::test]
async fn test_blank_model_reply_falls_back_to_template() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/generate");
        then.status(200).json_body(json!({ "response": "   \n " }));
    });

    let client = client_for(&server);
    assert!(matches!(
        client
            .generate_via_model(&outage_email(), "billing", "formal")
            .await,
        Err(ModelError::ResponseInvalid(_))
    ));

    let reply = EmailAssistant::new(client)
        .generate_response(&outage_email(), "billing", "formal")
        .await;
    assert_eq!(
        reply,
        "Dear Ops Lead,\n\n\
We have received your billing inquiry and will conduct a comprehensive review of your account. Any necessary adjustments will be processed within 2 business hours.\n\n\
If you have any additional questions, please don't hesitate to reach out.\n\n\
Sincerely,\nCustomer Service Department"
    );
    Ok(())
}
