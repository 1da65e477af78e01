use assert_cmd::Command;
use predicates::str::contains;
use serde_json::{Value, json};

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("filter-prompts").unwrap();
    cmd.env_remove("FILTER_PROMPTS_LOG").env_remove("FILTER_PROMPTS_PRETTY");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn prompt_prints_person_instructions() {
    cmd()
        .args(["prompt", "person"])
        .assert()
        .success()
        .stdout(contains("search through a database of people"))
        .stdout(contains("\"yearsAtCurrentCompany\":{\"min\":0,\"max\":0}"));
}

#[test]
fn prompt_output_is_exact_constant() {
    let out = cmd().args(["prompt", "company"]).assert().success().get_output().stdout.clone();
    assert_eq!(String::from_utf8(out).unwrap(), filter_prompts::company_prompt());
}

#[test]
fn template_lists_company_types_in_order() {
    let template = stdout_json(cmd().args(["template", "company"]));
    assert_eq!(
        template["companyType"],
        json!(["partnership", "public", "private", "nonprofit", "government", "self-employed"])
    );
    assert_eq!(template["excludedCompanyTypes"], json!(["string"]));
}

#[test]
fn validate_echoes_parsed_value() {
    let value = stdout_json(cmd().arg("validate").write_stdin(r#"{"skills": ["Go"]}"#));
    assert_eq!(value, json!({"skills": ["Go"]}));
}

#[test]
fn validate_prints_false_for_bad_input() {
    cmd()
        .arg("validate")
        .write_stdin("{invalid")
        .assert()
        .success()
        .stdout("false\n");
    cmd().arg("validate").write_stdin("").assert().success().stdout("false\n");
}

#[test]
fn strict_validate_separates_false_from_failure() {
    cmd()
        .args(["validate", "--strict"])
        .write_stdin("false")
        .assert()
        .success()
        .stdout("false\n");
    cmd()
        .args(["validate", "--strict"])
        .write_stdin("{invalid")
        .assert()
        .failure()
        .stderr(contains("InvalidJson"));
}

#[test]
fn validate_reads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reply.json");
    std::fs::write(&path, "42").unwrap();
    cmd().arg("validate").arg(&path).assert().success().stdout("42\n");
}

#[test]
fn decode_fills_missing_fields() {
    let filters = stdout_json(
        cmd()
            .args(["decode", "skills"])
            .write_stdin("```json\n{\"coreSkills\": [\"Negotiation\"]}\n```"),
    );
    assert_eq!(filters["coreSkills"], json!(["Negotiation"]));
    assert_eq!(filters["toolsAndPlatforms"], json!([]));
}

#[test]
fn decode_reads_json_out_of_chatty_reply() {
    let filters = stdout_json(
        cmd()
            .args(["decode", "person"])
            .write_stdin("Here is the JSON:\n```json\n{\"skills\": [\"Terraform\"]}\n```\nThanks!"),
    );
    assert_eq!(filters["skills"], json!(["Terraform"]));
    assert_eq!(filters["yearsInCurrentRole"], json!({"min": 0, "max": 0}));
}

#[test]
fn schema_describes_company_reply() {
    let schema = stdout_json(cmd().args(["schema", "company"]));
    assert_eq!(schema["type"], "object");
    assert!(schema["properties"].get("headcount").is_some());
}

#[test]
fn pretty_env_switches_layout() {
    cmd()
        .env("FILTER_PROMPTS_PRETTY", "true")
        .args(["template", "skills"])
        .assert()
        .success()
        .stdout(contains("\n  \"coreSkills\""));
}

#[test]
fn unknown_kind_is_rejected() {
    cmd().args(["prompt", "vendor"]).assert().failure();
}
