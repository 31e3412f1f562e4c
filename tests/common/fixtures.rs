//! Template repository fixture.

use std::path::Path;
use std::process::Command;

pub const TEMPLATE_PACKAGE_JSON: &str = r#"{
  "name": "decentapp-template",
  "version": "0.1.0",
  "private": true
}
"#;

pub const TEMPLATE_README: &str = "# Decent App\n\nDecent App Example.\n";

pub const TEMPLATE_MANIFEST: &str = r#"{ "short_name": "Decent App", "name": "Decent App" }
"#;

pub const TEMPLATE_INDEX_HTML: &str = "<title>Decent App</title>\n";

pub const TEMPLATE_UTIL_TS: &str = "export const noop = () => {};\n";

pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .current_dir(dir)
        .args([
            "-c",
            "user.name=Fixture",
            "-c",
            "user.email=fixture@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .status()
        .expect("Failed to run git");
    assert!(status.success(), "git {:?} failed", args);
}

/// Build a committed template repository in `dir`.
pub fn create_template_repo(dir: &Path) {
    let files = [
        ("package.json", TEMPLATE_PACKAGE_JSON),
        ("README.md", TEMPLATE_README),
        ("public/manifest.json", TEMPLATE_MANIFEST),
        ("index.html", TEMPLATE_INDEX_HTML),
        ("src/util.ts", TEMPLATE_UTIL_TS),
    ];
    for (relative, content) in files {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write template file");
    }

    git(dir, &["init", "--quiet"]);
    git(dir, &["add", "."]);
    git(dir, &["commit", "--quiet", "-m", "template"]);
}
