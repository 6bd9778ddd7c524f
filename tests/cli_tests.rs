//! `shiftreq` binary tests

mod common;

use assert_cmd::Command;
use common::fixtures::full_config;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const REQUEST: &str = r#"{
    "staff_name": "山田",
    "month": "2025-06",
    "days": [
        { "date": "2025-06-02", "desired_shops": ["上野"] },
        { "date": "2025-06-01", "desired_shops": ["渋谷", "新宿"] },
        { "date": "2025-06-03", "desired_shops": [] }
    ],
    "remarks": "よろしくお願いします"
}"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn config(&self, notion_base: &str, chatwork_base: &str) -> PathBuf {
        let config = full_config(notion_base, chatwork_base);
        self.write("config.json", &serde_json::to_string(&config).unwrap())
    }

    /// Command isolated from the caller's environment
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("shiftreq").unwrap();
        cmd.current_dir(self.dir.path())
            .env_remove("NOTION_API_KEY")
            .env_remove("NOTION_DATABASE_ID")
            .env_remove("CHATWORK_API_TOKEN")
            .env_remove("CHATWORK_ROOM_ID")
            .env_remove("SHIFTREQ_CONFIG")
            .env("NO_COLOR", "1");
        cmd
    }
}

#[test]
fn test_dry_run_lists_pages_and_message() {
    let ws = Workspace::new();
    let config = ws.config("http://127.0.0.1:9", "http://127.0.0.1:9");
    let request = ws.write("request.json", REQUEST);

    ws.cmd()
        .arg("--config")
        .arg(&config)
        .args(["submit", "--dry-run", "--request"])
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains("Would create Notion pages:"))
        .stdout(predicate::str::contains("  - 2025-06-01 渋谷 (山田)"))
        .stdout(predicate::str::contains("  - 2025-06-01 新宿 (山田)"))
        .stdout(predicate::str::contains("  - 2025-06-02 上野 (山田)"))
        .stdout(predicate::str::contains("2025-06-03").not())
        .stdout(predicate::str::contains("[info][title]山田 さんからシフト申請が届きました[/title]"))
        .stdout(predicate::str::contains("備考: よろしくお願いします[/info]"));
}

#[test]
fn test_submit_against_mock_apis() {
    let mut notion = mockito::Server::new();
    let mut chatwork = mockito::Server::new();
    let pages = notion
        .mock("POST", "/v1/pages")
        .with_status(200)
        .with_body(r#"{"id":"p","url":"https://www.notion.so/p"}"#)
        .expect(3)
        .create();
    let message = chatwork
        .mock("POST", "/v2/rooms/123456/messages")
        .with_status(200)
        .expect(1)
        .create();

    let ws = Workspace::new();
    let config = ws.config(&notion.url(), &chatwork.url());
    let request = ws.write("request.json", REQUEST);

    ws.cmd()
        .arg("--config")
        .arg(&config)
        .args(["submit", "--request"])
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains("すべてのシフト申請が正常に送信されました"));

    pages.assert();
    message.assert();
}

#[test]
fn test_notion_failure_exits_nonzero_without_chatwork() {
    let mut notion = mockito::Server::new();
    let mut chatwork = mockito::Server::new();
    let _pages = notion
        .mock("POST", "/v1/pages")
        .with_status(400)
        .with_body(r#"{"code":"validation_error"}"#)
        .create();
    let message = chatwork
        .mock("POST", "/v2/rooms/123456/messages")
        .expect(0)
        .create();

    let ws = Workspace::new();
    let config = ws.config(&notion.url(), &chatwork.url());
    let request = ws.write("request.json", REQUEST);

    ws.cmd()
        .arg("--config")
        .arg(&config)
        .args(["submit", "--request"])
        .arg(&request)
        .assert()
        .failure()
        .stderr(predicate::str::contains("2025-06-01 の 渋谷 への送信に失敗しました"))
        .stderr(predicate::str::contains("Chatwork was not notified"));

    message.assert();
}

#[test]
fn test_missing_chatwork_config_fails_fast() {
    let ws = Workspace::new();
    let config = ws.write(
        "config.json",
        r#"{ "notion": { "api_key": "k", "database_id": "0123456789abcdef0123456789abcdef" } }"#,
    );
    let request = ws.write("request.json", REQUEST);

    ws.cmd()
        .arg("--config")
        .arg(&config)
        .args(["submit", "--request"])
        .arg(&request)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing configuration"))
        .stderr(predicate::str::contains("CHATWORK_API_TOKEN"));
}

#[test]
fn test_request_with_foreign_date_is_rejected() {
    let ws = Workspace::new();
    let config = ws.config("http://127.0.0.1:9", "http://127.0.0.1:9");
    let request = ws.write(
        "request.json",
        r#"{ "staff_name": "山田", "month": "2025-06",
             "days": [{ "date": "2025-07-01", "desired_shops": ["渋谷"] }] }"#,
    );

    ws.cmd()
        .arg("--config")
        .arg(&config)
        .args(["submit", "--dry-run", "--request"])
        .arg(&request)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid request"));
}

#[test]
fn test_auth_setup_prints_instructions() {
    let ws = Workspace::new();
    let config = ws.write("config.json", "{}");

    ws.cmd()
        .arg("--config")
        .arg(&config)
        .args(["auth", "notion", "setup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NOTION_API_KEY"))
        .stdout(predicate::str::contains("スタッフ名 (select)"));
}

#[test]
fn test_auth_chatwork_setup_prints_instructions() {
    let ws = Workspace::new();
    let config = ws.write("config.json", "{}");

    ws.cmd()
        .arg("--config")
        .arg(&config)
        .args(["auth", "chatwork", "setup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CHATWORK_API_TOKEN"))
        .stdout(predicate::str::contains("Notion").not());
}

#[test]
fn test_unknown_auth_action_is_a_usage_error() {
    let ws = Workspace::new();
    let config = ws.write("config.json", "{}");

    ws.cmd()
        .arg("--config")
        .arg(&config)
        .args(["auth", "notion", "rotate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("rotate"));
}

#[test]
fn test_form_reports_missing_credentials_before_prompting() {
    let ws = Workspace::new();
    let config = ws.write(
        "config.json",
        r#"{ "staff": ["山田"], "shops": ["渋谷"],
             "notion": { "api_key": "k", "database_id": "0123456789abcdef0123456789abcdef" } }"#,
    );

    ws.cmd()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("シフト申請フォーム").not())
        .stderr(predicate::str::contains("CHATWORK_API_TOKEN"));
}
