use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use review_text_service::services::generator::{GenerationConfig, GeneratorError, TextGenerator};
use review_text_service::services::inference::InferenceClient;

const MODEL: &str = "google/mt5-base";
const MODEL_PATH: &str = "/models/google/mt5-base";

fn create_client(server: &MockServer, token: Option<&str>) -> InferenceClient {
    InferenceClient::new(
        Client::new(),
        server.uri(),
        token.map(|t| t.to_string()),
        MODEL,
    )
}

fn two_sequences() -> GenerationConfig {
    GenerationConfig {
        num_return_sequences: 2,
        do_sample: true,
        ..GenerationConfig::default()
    }
}

#[tokio::test]
async fn test_generate_sends_inputs_parameters_and_options() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("authorization", "Bearer secret"))
        .and(body_partial_json(json!({
            "inputs": "Genera una reseña",
            "parameters": {
                "max_length": 150,
                "min_length": 40,
                "num_return_sequences": 2,
                "do_sample": true
            },
            "options": { "wait_for_model": true }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "generated_text": "primera" },
            { "generated_text": "segunda" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, Some("secret"));
    let texts = client
        .generate("Genera una reseña", &two_sequences())
        .await
        .unwrap();

    assert_eq!(texts, vec!["primera", "segunda"]);
}

#[tokio::test]
async fn test_generate_without_token_sends_no_authorization() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "summary_text": "resumen" }])),
        )
        .mount(&server)
        .await;

    let client = create_client(&server, None);
    let texts = client
        .generate("texto", &GenerationConfig::default())
        .await
        .unwrap();

    assert_eq!(texts, vec!["resumen"]);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_generate_service_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({ "error": "Model is loading" })),
        )
        .mount(&server)
        .await;

    let client = create_client(&server, None);
    let result = client.generate("texto", &GenerationConfig::default()).await;

    match result {
        Err(GeneratorError::Unavailable(message)) => assert_eq!(message, "Model is loading"),
        other => panic!("expected Unavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_error_status_extracts_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Invalid parameters" })),
        )
        .mount(&server)
        .await;

    let client = create_client(&server, None);
    let result = client.generate("texto", &GenerationConfig::default()).await;

    match result {
        Err(GeneratorError::ApiError(message)) => assert_eq!(message, "Invalid parameters"),
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_error_status_with_plain_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream crashed"))
        .mount(&server)
        .await;

    let client = create_client(&server, None);
    let result = client.generate("texto", &GenerationConfig::default()).await;

    match result {
        Err(GeneratorError::ApiError(message)) => assert_eq!(message, "upstream crashed"),
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_error_body_with_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "error": "CUDA out of memory" })),
        )
        .mount(&server)
        .await;

    let client = create_client(&server, None);
    let result = client.generate("texto", &GenerationConfig::default()).await;

    match result {
        Err(GeneratorError::ApiError(message)) => assert_eq!(message, "CUDA out of memory"),
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_empty_sequence_list() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = create_client(&server, None);
    let result = client.generate("texto", &GenerationConfig::default()).await;

    assert!(matches!(result, Err(GeneratorError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_generate_unparseable_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = create_client(&server, None);
    let result = client.generate("texto", &GenerationConfig::default()).await;

    assert!(matches!(result, Err(GeneratorError::InvalidResponse(_))));
}
