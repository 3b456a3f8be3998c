//! End-to-end runs against a mock API.

use api2ts::prelude::*;
use api2ts::testing::ScriptedTerminal;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve(route: &str, response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

fn app(tmp: &Path, terminal: ScriptedTerminal) -> App<ScriptedTerminal> {
    let paths = SavePaths {
        desktop: tmp.join("Desktop"),
        current: tmp.to_path_buf(),
    };
    App::new(Settings::default(), paths, terminal, Fetcher::new().unwrap())
}

fn flags(url: String, name: &str, dir: &Path) -> Flags {
    Flags {
        url: Some(url),
        name: Some(name.to_string()),
        path: Some(dir.to_string_lossy().to_string()),
        no_open: true,
    }
}

#[tokio::test]
async fn test_user_endpoint_writes_sorted_interface() {
    let server = serve(
        "/user",
        ResponseTemplate::new(200).set_body_json(json!({"name": "Ann", "id": 1})),
    )
    .await;
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("types");
    let mut app = app(tmp.path(), ScriptedTerminal::new());

    let report = app
        .run(&flags(format!("{}/user", server.uri()), "User", &out))
        .await
        .unwrap();

    assert_eq!(report.file, out.join("User.ts"));
    assert_eq!(
        std::fs::read_to_string(&report.file).unwrap(),
        "export interface User {\n    id:   number;\n    name: string;\n}"
    );
    assert_eq!(app.stage(), Stage::Done);
    assert!(app.terminal().prompts().is_empty());
    assert!(
        app.terminal()
            .messages()
            .iter()
            .any(|m| m == &report.generated.source())
    );
}

#[tokio::test]
async fn test_not_found_fails_without_writing() {
    let server = serve("/user", ResponseTemplate::new(404)).await;
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("types");
    let mut app = app(tmp.path(), ScriptedTerminal::new());

    let err = app
        .run(&flags(format!("{}/user", server.uri()), "User", &out))
        .await
        .unwrap_err();

    assert!(matches!(err, Api2tsError::Fetch(_)));
    assert_eq!(app.stage(), Stage::Failed);
    assert!(!out.join("User.ts").exists());
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let server = serve(
        "/user",
        ResponseTemplate::new(200).set_body_string("{\"id\": 1,"),
    )
    .await;
    let tmp = tempfile::tempdir().unwrap();
    let mut app = app(tmp.path(), ScriptedTerminal::new());

    let err = app
        .run(&flags(format!("{}/user", server.uri()), "User", tmp.path()))
        .await
        .unwrap_err();

    assert!(matches!(err, Api2tsError::Parse(_)));
    assert!(!tmp.path().join("User.ts").exists());
}

#[tokio::test]
async fn test_empty_array_is_empty_result() {
    let server = serve("/users", ResponseTemplate::new(200).set_body_json(json!([]))).await;
    let tmp = tempfile::tempdir().unwrap();
    let mut app = app(tmp.path(), ScriptedTerminal::new());

    let err = app
        .run(&flags(format!("{}/users", server.uri()), "User", tmp.path()))
        .await
        .unwrap_err();

    assert!(matches!(err, Api2tsError::EmptyResult));
    assert!(!tmp.path().join("User.ts").exists());
}

#[tokio::test]
async fn test_array_response_uses_first_element() {
    let server = serve(
        "/users",
        ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "email": "ann@example.com"},
            {"id": 2, "phone": "555"}
        ])),
    )
    .await;
    let tmp = tempfile::tempdir().unwrap();
    let mut app = app(tmp.path(), ScriptedTerminal::new());

    let report = app
        .run(&flags(format!("{}/users", server.uri()), "User", tmp.path()))
        .await
        .unwrap();

    assert_eq!(
        report.generated.lines(),
        &["export interface User {", "    email: string;", "    id:    number;", "}"]
    );
}

#[tokio::test]
async fn test_same_configuration_twice_overwrites() {
    let server = serve(
        "/order",
        ResponseTemplate::new(200).set_body_json(json!({"total": 9.5, "items": [{"sku": "A1"}]})),
    )
    .await;
    let tmp = tempfile::tempdir().unwrap();
    let run_flags = flags(format!("{}/order", server.uri()), "Order", tmp.path());

    let first = app(tmp.path(), ScriptedTerminal::new())
        .run(&run_flags)
        .await
        .unwrap();
    let first_content = std::fs::read_to_string(&first.file).unwrap();
    let second = app(tmp.path(), ScriptedTerminal::new())
        .run(&run_flags)
        .await
        .unwrap();
    let second_content = std::fs::read_to_string(&second.file).unwrap();

    assert_eq!(first_content, second_content);
    assert_eq!(second_content, second.generated.source());
}

#[tokio::test]
async fn test_interactive_flow_reasks_until_valid() {
    let server = serve(
        "/user",
        ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "Ann"})),
    )
    .await;
    let tmp = tempfile::tempdir().unwrap();
    let custom = tmp.path().join("custom");
    std::fs::create_dir(&custom).unwrap();

    let terminal = ScriptedTerminal::new()
        .with_inputs([
            "api/user".to_string(),
            format!("{}/user", server.uri()),
            "123abc".to_string(),
            "User".to_string(),
            tmp.path().join("nowhere").to_string_lossy().to_string(),
            custom.to_string_lossy().to_string(),
        ])
        .with_selects([2]);
    let mut app = app(tmp.path(), terminal);

    let report = app.run(&Flags::default()).await.unwrap();

    assert_eq!(report.config.name, "User");
    assert_eq!(report.file, custom.join("User.ts"));
    assert!(report.file.exists());
    assert_eq!(app.terminal().prompts_for("🌐 API URL"), 2);
    assert_eq!(app.terminal().prompts_for("📝 Type name"), 2);
    assert_eq!(app.terminal().prompts_for("📁 Save path"), 2);
}

#[cfg(unix)]
#[tokio::test]
async fn test_editor_prompt_and_launch_failure_are_non_fatal() {
    let server = serve(
        "/user",
        ResponseTemplate::new(200).set_body_json(json!({"id": 1})),
    )
    .await;
    let tmp = tempfile::tempdir().unwrap();
    let mut run_flags = flags(format!("{}/user", server.uri()), "User", tmp.path());
    run_flags.no_open = false;

    let terminal = ScriptedTerminal::new().with_confirms([true]);
    let mut opened = app(tmp.path(), terminal).with_editor(Editor::detect("true"));
    opened.run(&run_flags).await.unwrap();
    assert!(
        opened
            .terminal()
            .messages()
            .iter()
            .any(|m| m.contains("Opened in true"))
    );

    let terminal = ScriptedTerminal::new().with_confirms([true]);
    let mut failing = app(tmp.path(), terminal).with_editor(Editor::detect("false"));
    failing.run(&run_flags).await.unwrap();
    assert_eq!(failing.stage(), Stage::Done);
    assert!(
        failing
            .terminal()
            .messages()
            .iter()
            .any(|m| m.contains("open it manually"))
    );

    // No scripted answer: the prompt error is swallowed.
    let mut unanswered = app(tmp.path(), ScriptedTerminal::new()).with_editor(Editor::detect("true"));
    unanswered.run(&run_flags).await.unwrap();
    assert_eq!(unanswered.stage(), Stage::Done);
}
