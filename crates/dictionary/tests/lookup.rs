use axum::{extract::Path, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use dictionary::{Dictionary, DictionaryError, PartOfSpeech, NOT_FOUND_MESSAGE};
use serde_json::json;
use tokio::net::TcpListener;

async fn entry(Path(word): Path<String>) -> axum::response::Response {
    match word.as_str() {
        "hello" => Json(json!([
            {
                "word": "hello",
                "phonetics": [{"text": "/həˈləʊ/", "audio": ""}],
                "meanings": [{
                    "partOfSpeech": "noun",
                    "definitions": [{"definition": "A greeting."}],
                    "synonyms": []
                }]
            },
            {
                "word": "hello",
                "phonetics": [],
                "meanings": [{
                    "partOfSpeech": "verb",
                    "definitions": [{"definition": "To greet."}],
                    "synonyms": []
                }]
            }
        ]))
        .into_response(),
        "ice cream" => Json(json!([
            {"word": "ice cream", "phonetics": [], "meanings": []}
        ]))
        .into_response(),
        "broken" => (StatusCode::OK, "this is not json").into_response(),
        "nothing" => Json(json!([])).into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"title": "No Definitions Found"})),
        )
            .into_response(),
    }
}

async fn stub_service() -> String {
    let router = Router::new().route("/entries/en/:word", get(entry));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/entries/en")
}

#[tokio::test]
async fn returns_first_homograph_entry() {
    let dict = Dictionary::with_base_url(stub_service().await);
    let word = dict.get_definition("hello").await.unwrap();
    assert_eq!(word.word, "hello");
    assert_eq!(word.meanings.len(), 1);
    assert_eq!(word.meanings[0].part_of_speech, PartOfSpeech::Noun);
    assert_eq!(word.meanings[0].definitions[0].definition, "A greeting.");
    assert_eq!(word.audio_url(), None);
}

#[tokio::test]
async fn non_success_status_is_not_found() {
    let dict = Dictionary::with_base_url(stub_service().await);
    let error = dict.get_definition("zzzzz").await.unwrap_err();
    assert!(error.is_not_found());
    assert_eq!(error.to_string(), NOT_FOUND_MESSAGE);
    assert_eq!(error.to_string(), "Word not Found!!!");
}

#[tokio::test]
async fn empty_word_is_passed_through_to_the_service() {
    let dict = Dictionary::with_base_url(stub_service().await);
    let error = dict.get_definition("").await.unwrap_err();
    assert!(error.is_not_found());
}

#[tokio::test]
async fn words_with_spaces_reach_the_service_intact() {
    let dict = Dictionary::with_base_url(stub_service().await);
    let word = dict.get_definition("ice cream").await.unwrap();
    assert_eq!(word.word, "ice cream");
    assert!(word.meanings.is_empty());
}

#[tokio::test]
async fn malformed_body_is_an_unexpected_failure() {
    let dict = Dictionary::with_base_url(stub_service().await);
    let error = dict.get_definition("broken").await.unwrap_err();
    assert!(matches!(error, DictionaryError::Deserialize(_)));
    assert!(!error.is_not_found());
    assert_ne!(error.to_string(), NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn empty_array_is_reported() {
    let dict = Dictionary::with_base_url(stub_service().await);
    let error = dict.get_definition("nothing").await.unwrap_err();
    assert!(matches!(error, DictionaryError::Empty));
}

#[tokio::test]
async fn unreachable_service_is_a_fetch_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let dict = Dictionary::with_base_url(format!("http://{addr}/entries/en"));
    let error = dict.get_definition("hello").await.unwrap_err();
    assert!(matches!(error, DictionaryError::Fetch(_)));
}
