use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use folio::{scaffold, Answers};
use folio_record::{Identity, ResumeRecord};
use folio_static::{BuildConfig, StaticBuilder};
use tempfile::TempDir;
use walkdir::WalkDir;

const ANSWERS: &str = "demo\nJane Doe\nSenior Engineer\nRust | Cloud\njane@example.com\nhttps://linkedin.com/in/jane\n\n\n";

fn templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates")
}

fn folio(dir: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(args)
        .current_dir(dir)
        .env("FOLIO_TEMPLATE_DIR", templates())
        .env_remove("PORT")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn folio");

    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).unwrap();
        }
    }

    child.wait_with_output().unwrap()
}

fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .map(Result::unwrap)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let contents = fs::read(entry.path()).unwrap();
            (entry.into_path(), contents)
        })
        .collect()
}

#[test]
fn scaffold_then_render() {
    let temp = TempDir::new().unwrap();
    let answers = Answers {
        project_name: "demo".to_string(),
        identity: Identity {
            name: "Jane Doe".to_string(),
            title: "Senior Engineer".to_string(),
            subtitle: "Rust | Cloud".to_string(),
            email: "jane@example.com".to_string(),
            ..Default::default()
        },
    };

    let project = scaffold(temp.path(), &answers, Some(&templates())).unwrap();
    assert!(project.skipped.is_empty(), "skipped {:?}", project.skipped);

    let data = project.root.join("resume-data.json");
    let record = ResumeRecord::load(&data).unwrap();
    assert_eq!(record.name, "Jane Doe");

    let output = project.root.join("public/index.html");
    StaticBuilder::new(BuildConfig {
        data_path: data,
        output_path: output.clone(),
    })
    .build()
    .unwrap();

    let html = fs::read_to_string(output).unwrap();
    assert!(html.matches("Jane Doe").count() >= 2);
    assert!(html.contains("<title>Jane Doe - Senior Engineer</title>"));
    assert!(html.contains(r#"<h1 class="hero-title">Jane Doe</h1>"#));
    assert!(project.root.join("public/styles.css").is_file());
    assert!(project.root.join("public/script.js").is_file());
}

#[test]
fn cli_new_then_render() {
    let temp = TempDir::new().unwrap();

    let out = folio(temp.path(), &["new"], Some(ANSWERS));
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(String::from_utf8_lossy(&out.stdout).contains("Next steps"));

    let project = temp.path().join("demo");
    let raw = fs::read_to_string(project.join("resume-data.json")).unwrap();
    assert!(raw.contains("\"name\": \"Jane Doe\""));
    assert!(raw.contains("\"linkedin\": \"https://linkedin.com/in/jane\""));

    // Paths come from the scaffolded folio.toml.
    let out = folio(&project, &["render"], None);
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(String::from_utf8_lossy(&out.stdout).contains("Resume generated successfully"));

    let html = fs::read_to_string(project.join("public/index.html")).unwrap();
    assert!(html.matches("Jane Doe").count() >= 2);
    assert!(html.contains(r#"aria-label="LinkedIn""#));
    assert!(!html.contains(r#"aria-label="GitHub""#));
}

#[test]
fn cli_new_refuses_existing_project() {
    let temp = TempDir::new().unwrap();

    let first = folio(temp.path(), &["new"], Some(ANSWERS));
    assert!(first.status.success());
    let before = snapshot(&temp.path().join("demo"));

    let second = folio(temp.path(), &["new"], Some(ANSWERS));

    assert!(!second.status.success());
    assert!(String::from_utf8_lossy(&second.stderr).contains("already exists"));
    assert_eq!(snapshot(&temp.path().join("demo")), before);
}

#[test]
fn cli_render_missing_data_fails() {
    let temp = TempDir::new().unwrap();

    let out = folio(temp.path(), &["render", "nope.json", "index.html"], None);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Resume data file not found"));
    assert!(!temp.path().join("index.html").exists());
}

#[test]
fn cli_render_malformed_data_keeps_output() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("resume-data.json"), "name: Jane Doe").unwrap();
    fs::write(temp.path().join("index.html"), "old page").unwrap();

    let out = folio(
        temp.path(),
        &["render", "resume-data.json", "index.html"],
        None,
    );

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Malformed resume data"));
    assert_eq!(
        fs::read_to_string(temp.path().join("index.html")).unwrap(),
        "old page"
    );
}
