//! End-to-end tests for the create command, run against the real binary.

mod common;

use common::*;

#[test]
fn test_help_lists_options() {
    let env = TestEnv::new();
    let result = env.run(&["--help"]);

    assert_eq!(result.exit_code, 0);
    for flag in ["--display-name", "--template", "--config", "--yes", "--json", "--color"] {
        assert!(result.stdout.contains(flag), "missing {} in:\n{}", flag, result.stdout);
    }
}

#[test]
fn test_version_flag() {
    let env = TestEnv::new();
    let result = env.run(&["--version"]);

    assert_eq!(result.exit_code, 0);
    assert!(result.stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_usage_error_exits_with_one() {
    let env = TestEnv::new();
    let result = env.run(&["--no-such-flag"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("--no-such-flag"), "stderr:\n{}", result.stderr);

    let result = env.run(&["demo", "--color", "sometimes"]);
    assert_eq!(result.exit_code, 1);
    assert!(!env.work_path("demo").exists());
}

#[test]
fn test_project_name_with_path_characters_is_rejected() {
    let env = TestEnv::new();
    let result = env.run(&["apps/demo", "--yes"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result
            .stderr
            .contains("Error: Project name cannot contain path characters."),
        "stderr:\n{}",
        result.stderr
    );
    assert!(!env.work_path("apps").exists());
}

#[test]
fn test_existing_folder_is_left_untouched() {
    let env = TestEnv::new();
    env.write_file("demo/notes.txt", "keep me");

    let result = env.run(&["demo", "--yes"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains(
        "Error: Folder named demo already exists. Please choose a different folder name or delete existing folder."
    ));
    let entries: Vec<_> = std::fs::read_dir(env.work_path("demo"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("notes.txt")]);
    assert_eq!(
        std::fs::read_to_string(env.work_path("demo/notes.txt")).unwrap(),
        "keep me"
    );
}

#[test]
fn test_display_name_with_markup_is_rejected() {
    let env = TestEnv::new();
    let result = env.run(&["demo", "--display-name", "<b>Demo</b>", "--yes"]);

    assert_eq!(result.exit_code, 1);
    assert!(result
        .stderr
        .contains("App display name seems like it might contain an injection attack."));
    assert!(!env.work_path("demo").exists());
}

#[test]
fn test_json_error_is_a_single_event() {
    let env = TestEnv::new();
    env.write_file("demo/.keep", "");

    let result = env.run(&["demo", "--json"]);

    assert_eq!(result.exit_code, 1);
    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout:\n{}", result.stdout);
    let event: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(event["event"], "error");
    assert_eq!(event["kind"], "expected");
    assert!(event["message"]
        .as_str()
        .unwrap()
        .starts_with("Folder named demo already exists."));
}

#[test]
fn test_malformed_config_is_reported() {
    let env = TestEnv::new();
    env.write_file("bad.toml", "[template\nrepo = ");

    let result = env.run(&["demo", "--config", "bad.toml", "--yes"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("Error: invalid configuration in bad.toml"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn test_unknown_config_key_warns_with_suggestion() {
    let env = TestEnv::new();
    env.write_file("c.toml", "[template]\nrepoo = \"https://example.com/t.git\"\n");
    // Stop right after config loading.
    env.write_file("demo/.keep", "");

    let result = env.run(&["demo", "--config", "c.toml", "--yes"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result
            .stderr
            .contains("Warning: Unknown config key 'repoo' in c.toml:2. Did you mean 'repo'?"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn test_creates_project_from_local_template() {
    if !git_available() {
        eprintln!("skipping: git is not installed");
        return;
    }
    let env = TestEnv::new();
    let template = env.home_dir.path().join("template");
    std::fs::create_dir_all(&template).unwrap();
    create_template_repo(&template);

    let result = env.run(&[
        "demo",
        "--display-name",
        "Demo App",
        "--template",
        template.to_str().unwrap(),
        "--yes",
    ]);

    assert!(result.success, "output:\n{}", result.combined_output());
    let project = env.work_path("demo");
    assert!(!project.join(".git").exists());

    let package = std::fs::read_to_string(project.join("package.json")).unwrap();
    assert!(package.contains("\"name\": \"demo\""));
    assert!(!package.contains("decentapp-template"));
    assert_eq!(
        std::fs::read_to_string(project.join("README.md")).unwrap(),
        "# Demo App\n\nDemo App Example.\n"
    );
    assert!(std::fs::read_to_string(project.join("public/manifest.json"))
        .unwrap()
        .contains("\"short_name\": \"Demo App\""));
    assert_eq!(
        std::fs::read_to_string(project.join("index.html")).unwrap(),
        "<title>Demo App</title>\n"
    );
    assert_eq!(
        std::fs::read_to_string(project.join("src/util.ts")).unwrap(),
        TEMPLATE_UTIL_TS
    );

    assert!(result.stdout.contains("Decent App Creator v"));
    assert!(result.stdout.contains("Success! Project created in demo."));
    assert!(result.stdout.contains("  cd demo\n  npm install\n  npm run dev\n"));
}

#[test]
fn test_json_run_streams_events() {
    if !git_available() {
        eprintln!("skipping: git is not installed");
        return;
    }
    let env = TestEnv::new();
    let template = env.home_dir.path().join("template");
    std::fs::create_dir_all(&template).unwrap();
    create_template_repo(&template);

    let result = env.run_with_env(&["demo", "--json"], &[(
        "DECENT_APP_TEMPLATE_REPO",
        template.to_str().unwrap(),
    )]);

    assert!(result.success, "output:\n{}", result.combined_output());
    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let names: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
    assert_eq!(names.first(), Some(&"clone_start"));
    assert_eq!(names.last(), Some(&"complete"));
    assert!(names.contains(&"item_updated"));
    assert_eq!(events.last().unwrap()["status"], "success");
}

#[test]
fn test_clone_failure_is_reported() {
    if !git_available() {
        eprintln!("skipping: git is not installed");
        return;
    }
    let env = TestEnv::new();
    let missing = env.home_dir.path().join("no-such-template");

    let result = env.run(&["demo", "--template", missing.to_str().unwrap(), "--yes"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("Error: Failed to clone repository."),
        "stderr:\n{}",
        result.stderr
    );
}
