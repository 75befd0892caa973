use crate::e2e::helpers;

use helpers::assertions::{assert_error_body, assert_pairs};
use helpers::{TestContext, TEST_MAX_UPLOAD_BYTES};
use hyper::StatusCode;
use test_context::test_context;

const UPLOAD_PATH: &str = "/api/upload-file";

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_parse_comma_separated_csv(ctx: &TestContext) {
    let response = ctx
        .client
        .post_file(UPLOAD_PATH, "file", "words.csv", b"cat,gato\ndog,perro\n")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_pairs(
        response.body.as_ref().unwrap(),
        &[("cat", "gato"), ("dog", "perro")],
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_parse_tab_separated_txt(ctx: &TestContext) {
    let response = ctx
        .client
        .post_file(UPLOAD_PATH, "file", "words.txt", b"Haus\thouse\nBaum\ttree\n")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_pairs(
        response.body.as_ref().unwrap(),
        &[("Haus", "house"), ("Baum", "tree")],
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_parse_semicolon_separated_csv(ctx: &TestContext) {
    let response = ctx
        .client
        .post_file(
            UPLOAD_PATH,
            "file",
            "words.csv",
            b"three;trois\n\"one, two\";\"un, deux\"\n",
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_pairs(
        response.body.as_ref().unwrap(),
        &[("three", "trois"), ("one, two", "un, deux")],
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_skip_short_and_blank_rows(ctx: &TestContext) {
    let response = ctx
        .client
        .post_file(
            UPLOAD_PATH,
            "file",
            "words.csv",
            b"lonely\n , empty\nsun,sol,extra\n",
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_pairs(response.body.as_ref().unwrap(), &[("sun", "sol")]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_decode_utf8_with_bom(ctx: &TestContext) {
    let mut content = vec![0xEF, 0xBB, 0xBF];
    content.extend_from_slice("ключ,key\n".as_bytes());

    let response = ctx
        .client
        .post_file(UPLOAD_PATH, "file", "words.csv", &content)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_pairs(response.body.as_ref().unwrap(), &[("ключ", "key")]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_decode_legacy_western_encoding(ctx: &TestContext) {
    // windows-1252 bytes for accented French words
    let content = b"caf\xe9,coffee\nth\xe9,tea\nb\xe9b\xe9,baby\n\xe9t\xe9,summer\n";

    let response = ctx
        .client
        .post_file(UPLOAD_PATH, "file", "words.csv", content)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_pairs(
        response.body.as_ref().unwrap(),
        &[
            ("café", "coffee"),
            ("thé", "tea"),
            ("bébé", "baby"),
            ("été", "summer"),
        ],
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_pass_json_pairs_through(ctx: &TestContext) {
    let response = ctx
        .client
        .post_file(
            UPLOAD_PATH,
            "file",
            "words.json",
            br#"[{"text1":"red","text2":"rojo"},{"text1":"blue","text2":"azul"}]"#,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_pairs(
        response.body.as_ref().unwrap(),
        &[("red", "rojo"), ("blue", "azul")],
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_json(ctx: &TestContext) {
    let response = ctx
        .client
        .post_file(UPLOAD_PATH, "file", "words.json", br#"{"text1":"red"}"#)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Malformed JSON");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unsupported_extension(ctx: &TestContext) {
    let response = ctx
        .client
        .post_file(UPLOAD_PATH, "file", "words.xlsx", b"cat,gato\n")
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Unsupported file type");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_request_without_file_field(ctx: &TestContext) {
    let response = ctx
        .client
        .post_file(UPLOAD_PATH, "attachment", "words.csv", b"cat,gato\n")
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("No file uploaded");
    assert_error_body(response.body.as_ref().unwrap());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_oversized_upload(ctx: &TestContext) {
    let content = "word,palabra\n".repeat(TEST_MAX_UPLOAD_BYTES / 10);

    let response = ctx
        .client
        .post_file(UPLOAD_PATH, "file", "words.csv", content.as_bytes())
        .await
        .unwrap();

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}
