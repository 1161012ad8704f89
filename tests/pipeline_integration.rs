use httpmock::{Method::POST, MockServer};
use narrata::config::Config;
use narrata::processing::normalize::normalize;
use narrata::processing::summarize::summarize_extractive;
use narrata::processing::truncate::{ELLIPSIS, char_len};
use narrata::processing::{NarrationService, SummaryOptions};
use serde_json::json;
use std::collections::HashMap;

const DOCUMENT: &str = "Page 1\n\
    The river delta project began in spring. Engineers surveyed the chan-\n\
    nels and mapped sediment flows.\n\
    12\n\
    Farmers reported richer soil after the floods. The survey team published\n\
    its findings in autumn. Local councils approved new levees.";

fn config_for(entries: &[(&str, String)]) -> Config {
    let env: HashMap<String, String> = entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();
    Config::from_source(|key| env.get(key).cloned()).expect("config")
}

fn ollama_config(server: &MockServer) -> Config {
    config_for(&[
        ("SUMMARIZATION_PROVIDER", "ollama".into()),
        ("SUMMARIZATION_MODEL", "test-model".into()),
        ("OLLAMA_URL", server.base_url()),
        ("SUMMARIZATION_TIMEOUT_SECS", "10".into()),
    ])
}

#[tokio::test]
async fn model_summary_is_used_when_provider_responds() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/generate")
                .json_body_partial(r#"{"model": "test-model", "stream": false}"#);
            then.status(200).json_body(json!({
                "response": "The delta survey found richer soil and led to new levees.",
                "done": true
            }));
        })
        .await;

    let service = NarrationService::from_config(&ollama_config(&server)).expect("service");
    let summary = service
        .summarize_text(DOCUMENT, &SummaryOptions::default())
        .await
        .expect("summary");

    assert_eq!(
        summary,
        "The delta survey found richer soil and led to new levees."
    );
    mock.assert_async().await;
    let snapshot = service.metrics_snapshot();
    assert_eq!(snapshot.abstractive_summaries, 1);
    assert_eq!(snapshot.documents_summarized, 1);
}

#[tokio::test]
async fn provider_failure_falls_back_to_extractive() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/generate");
            then.status(500).body("model crashed");
        })
        .await;

    let service = NarrationService::from_config(&ollama_config(&server)).expect("service");
    let summary = service
        .summarize_text(DOCUMENT, &SummaryOptions::default())
        .await
        .expect("summary");

    let expected = summarize_extractive(&normalize(DOCUMENT), 2000).expect("extractive");
    assert_eq!(summary, expected);
    assert!(summary.contains("channels"));
    assert!(!summary.contains("Page 1"));
    assert_eq!(service.metrics_snapshot().extractive_summaries, 1);
}

#[tokio::test]
async fn unreachable_provider_falls_back_to_extractive() {
    // Nothing listens on the discard port.
    let config = config_for(&[
        ("SUMMARIZATION_PROVIDER", "ollama".into()),
        ("OLLAMA_URL", "http://127.0.0.1:9".into()),
    ]);
    let service = NarrationService::from_config(&config).expect("service");
    let summary = service
        .summarize_text(DOCUMENT, &SummaryOptions::default())
        .await
        .expect("summary");
    assert_eq!(
        summary,
        summarize_extractive(&normalize(DOCUMENT), 2000).expect("extractive")
    );
}

#[tokio::test]
async fn long_documents_are_bounded_with_a_verbose_model() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/generate");
            then.status(200).json_body(json!({
                "response": "The committee reviewed budgets and staffing in detail. ".repeat(6),
                "done": true
            }));
        })
        .await;

    let document = "The committee met to review the annual budget and staffing plans. "
        .repeat(760);
    assert!(char_len(&document) >= 50_000);

    let service = NarrationService::from_config(&ollama_config(&server)).expect("service");
    let summary = service
        .summarize_text(&document, &SummaryOptions::default())
        .await
        .expect("summary");
    assert!(!summary.is_empty());
    assert!(char_len(&summary) <= 2000 + ELLIPSIS.len());
    if char_len(&summary) > 2000 {
        assert!(summary.ends_with(ELLIPSIS), "truncated summary lacks marker: {summary}");
    }
}

#[tokio::test]
async fn long_documents_are_bounded_without_a_model() {
    let config = config_for(&[("SUMMARIZATION_PROVIDER", "none".into())]);
    let service = NarrationService::from_config(&config).expect("service");
    let sentence = "Budget lines for staffing, travel, and equipment were reviewed at length by the committee";
    let document = format!("{} ", sentence.repeat(20)).repeat(30) + ".";
    assert!(char_len(&document) >= 50_000);

    let summary = service
        .summarize_text(&document, &SummaryOptions::default())
        .await
        .expect("summary");
    assert!(summary.ends_with(ELLIPSIS));
    assert!(char_len(&summary) <= 2000 + ELLIPSIS.len());
}
