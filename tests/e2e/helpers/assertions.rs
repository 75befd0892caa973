use bulk_tts_backend::domain::pairs::PairDraft;
use serde_json::Value;

/// Pull the `pairs` array out of a pair parsing response
pub fn pairs_from(body: &Value) -> Vec<PairDraft> {
    let pairs = body.get("pairs").expect("Missing pairs field");
    serde_json::from_value(pairs.clone()).expect("pairs is not a list of text pairs")
}

pub fn assert_pairs(body: &Value, expected: &[(&str, &str)]) {
    let actual: Vec<(String, String)> = pairs_from(body)
        .into_iter()
        .map(|pair| (pair.text1, pair.text2))
        .collect();
    let expected: Vec<(String, String)> = expected
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();

    pretty_assertions::assert_eq!(actual, expected);
}

pub fn assert_error_body(body: &Value) {
    assert!(
        body.get("message").and_then(|v| v.as_str()).is_some(),
        "Missing message field in error body: {}",
        body
    );
}
