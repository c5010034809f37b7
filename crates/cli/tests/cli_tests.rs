//! Run the CLI commands against temporary configuration directories.

use std::fs;

use similar_asserts::assert_eq;

use sigma_spl_cli::{run, Backend, Command};

const RULES_YAML: &str = r#"
- title: Whoami
  fields: [User]
  conditions:
    - search:
        type: list
        field: Image
        values: ['*\whoami.exe', '*\id.exe']
- title: Nested List
  conditions:
    - search:
        type: list
        field: Image
        values: [[nested]]
- title: Failed Logons
  conditions:
    - search:
        type: comparison
        field: EventID
        value:
          literal: 4625
      aggregation:
        function: count
        groupfield: host
        comparisonOp: ">"
        threshold: 3
"#;

async fn initialized(backend: Backend) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempfile::tempdir");
    let mut output = Vec::new();
    run(Command::Initialize { backend }, dir.path(), &mut output)
        .await
        .expect("initialize");
    fs::write(dir.path().join("rules.yml"), RULES_YAML).unwrap();
    dir
}

fn translate_command(dir: &tempfile::TempDir, continue_on_error: bool) -> Command {
    Command::Translate {
        continue_on_error,
        rule_files: vec![dir.path().join("rules.yml")],
    }
}

#[tokio::test]
async fn initialize_refuses_to_overwrite() {
    let dir = initialized(Backend::Splunk).await;
    let mut output = Vec::new();
    let result = run(
        Command::Initialize {
            backend: Backend::Splunk,
        },
        dir.path(),
        &mut output,
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn translate_stops_at_the_first_failure() {
    let dir = initialized(Backend::Splunk).await;
    let mut output = Vec::new();
    let error = run(translate_command(&dir, false), dir.path(), &mut output)
        .await
        .unwrap_err();

    assert!(format!("{error:#}").contains("Nested List"));
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "(Image=\"*\\\\whoami.exe\" OR Image=\"*\\\\id.exe\") | table User\n"
    );
}

#[tokio::test]
async fn translate_can_skip_failing_rules() {
    let dir = initialized(Backend::Splunk).await;
    let mut output = Vec::new();
    run(translate_command(&dir, true), dir.path(), &mut output)
        .await
        .expect("translate");

    let output = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "(Image=\"*\\\\whoami.exe\" OR Image=\"*\\\\id.exe\") | table User",
            "EventID=4625 | stats dc() as val by host | search val > 3",
        ]
    );
}

#[tokio::test]
async fn translate_into_a_dashboard() {
    let dir = initialized(Backend::SplunkDashboard).await;
    let mut output = Vec::new();
    run(translate_command(&dir, true), dir.path(), &mut output)
        .await
        .expect("translate");

    let output = String::from_utf8(output).unwrap();
    assert!(output.starts_with("<form>"));
    assert!(output.trim_end().ends_with("</form>"));
    assert_eq!(output.matches("<panel>").count(), 2);
    assert!(output.contains("<title>Whoami</title>"));
    assert!(!output.contains("<title>Nested List</title>"));
    assert!(output.contains("EventID=4625 | stats count() as val by host | search val &gt; 3"));
}
