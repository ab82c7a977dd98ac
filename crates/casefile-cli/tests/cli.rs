use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmd(config_dir: &Path) -> Command {
    let config = config_dir.join("casefile.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }
    let mut cmd = Command::cargo_bin("casefile").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn extract_writes_website_content() {
    let tmp = TempDir::new().unwrap();
    let share = tmp.path().join("share");
    let out = tmp.path().join("out");
    fs::create_dir_all(&share).unwrap();
    fs::write(
        share.join("project-sow.txt"),
        "Acme Corp engaged us for SIEM and MFA deployment, contact jane@acme.com, $50,000 budget",
    )
    .unwrap();

    cmd(tmp.path())
        .arg("extract")
        .arg(&share)
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Case studies: 1"));

    let written = fs::read_to_string(out.join("case_studies.json")).unwrap();
    assert!(written.contains("SIEM"));
    assert!(!written.contains("jane@acme.com"));
    assert!(out.join("team_profiles.json").exists());
    assert!(out.join("website_stats.json").exists());
}

#[test]
fn extract_missing_share_fails() {
    let tmp = TempDir::new().unwrap();

    cmd(tmp.path())
        .arg("extract")
        .arg(tmp.path().join("nope"))
        .arg(tmp.path().join("out"))
        .assert()
        .failure()
        .stderr(contains("Directory not accessible"));

    assert!(!tmp.path().join("out").exists());
}

#[test]
fn scan_json_lists_categories() {
    let tmp = TempDir::new().unwrap();
    let share = tmp.path().join("share");
    fs::create_dir_all(&share).unwrap();
    fs::write(share.join("sow-summary-proposal.pdf"), "%PDF").unwrap();
    fs::write(share.join("morgan-resume.md"), "IAM").unwrap();

    let out = cmd(tmp.path())
        .args(["scan", "--json"])
        .arg(&share)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let files = value["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["category"], "resume");
    assert_eq!(files[1]["category"], "sow");
}

#[test]
fn anonymize_prints_redacted_text() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("notes.txt");
    fs::write(&file, "ping ops@example.com from 10.1.2.3").unwrap();

    cmd(tmp.path())
        .arg("anonymize")
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("ping [REDACTED_EMAIL] from [REDACTED_IP]"));
}
