//! Terminal loop driven with in-memory input

mod common;

use common::{translator, FakeService, Reply};
use nepsin_translator::console;

async fn run_console(service: std::sync::Arc<FakeService>, input: &str) -> (anyhow::Result<()>, String) {
    let t = translator(service);
    let mut out: Vec<u8> = Vec::new();
    let result = console::run(&t, input.as_bytes(), &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_translates_each_line_until_exit() {
    let service = FakeService::text(" Hello \n");
    let (result, out) = run_console(service.clone(), "नमस्ते\nආයුබෝවන්\n  EXIT \nignored\n").await;

    result.unwrap();
    assert!(out.starts_with(console::BANNER));
    assert!(out.contains("Detected Language: Nepali 🇳🇵\nEnglish: Hello\n"));
    assert!(out.contains("Detected Language: Sinhala 🇱🇰\nEnglish: Hello\n"));
    assert_eq!(service.call_count(), 2);
}

#[tokio::test]
async fn test_blank_line_warns() {
    let service = FakeService::text("unused");
    let (result, out) = run_console(service.clone(), "\n   \nexit\n").await;

    result.unwrap();
    assert_eq!(out.matches("Please enter some text.").count(), 2);
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn test_end_of_input_stops() {
    let service = FakeService::new(Reply::Text(None));
    let (result, out) = run_console(service, "hello").await;

    result.unwrap();
    assert!(out.contains("Detected Language: Unknown\n"));
    assert!(out.contains("English: No translation returned.\n"));
}

#[tokio::test]
async fn test_remote_failure_ends_loop() {
    let service = FakeService::new(Reply::Fail(503));
    let (result, _) = run_console(service.clone(), "नमस्ते\nनमस्ते\n").await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("503"));
    assert_eq!(service.call_count(), 1);
}
