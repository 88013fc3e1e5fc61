//! Integration tests for dockalias

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::Path;
    use tempfile::TempDir;

    /// Global config that points every built-in at `echo` instead of docker
    const ECHO_CONFIG: &str = r#"
[project]
compose = "echo compose"
service = "app"
"#;

    fn dockalias() -> Command {
        cargo_bin_cmd!("dockalias")
    }

    /// A command isolated from the user's global and local config
    fn isolated(dir: &Path, config: &str) -> Command {
        let path = dir.join("config.toml");
        std::fs::write(&path, config).unwrap();

        let mut cmd = dockalias();
        cmd.arg("--no-local").arg("--config").arg(path).arg("-C").arg(dir);
        cmd
    }

    #[test]
    fn clap_help_displays() {
        dockalias()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("aliases"));
    }

    #[test]
    fn version_displays() {
        dockalias()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("dockalias"));
    }

    #[test]
    fn help_lists_aliases() {
        let temp = TempDir::new().unwrap();
        isolated(temp.path(), "")
            .arg("help")
            .assert()
            .success()
            .stdout(predicate::str::contains("logs-all"))
            .stdout(predicate::str::contains("Apply schema migrations"))
            .stdout(predicate::str::contains("(default)"));
    }

    #[test]
    fn runs_builtin_alias() {
        let temp = TempDir::new().unwrap();
        isolated(temp.path(), ECHO_CONFIG)
            .arg("logs")
            .assert()
            .success()
            .stdout("compose logs -f app\n");
    }

    #[test]
    fn default_runs_down_then_up() {
        let temp = TempDir::new().unwrap();
        isolated(temp.path(), ECHO_CONFIG)
            .assert()
            .success()
            .stdout("compose down\ncompose up -d\n");
    }

    #[test]
    fn default_stops_after_failure() {
        let temp = TempDir::new().unwrap();
        let config = r#"
[[alias]]
name = "down"
command = "exit 4"

[[alias]]
name = "up"
command = "echo started"
"#;
        isolated(temp.path(), config)
            .assert()
            .code(4)
            .stdout(predicate::str::contains("started").not());
    }

    #[test]
    fn exit_code_passes_through() {
        let temp = TempDir::new().unwrap();
        let config = r#"
[[alias]]
name = "fail"
command = "exit 3"
"#;
        isolated(temp.path(), config).arg("fail").assert().code(3);
    }

    #[test]
    fn dry_run_prints_commands() {
        let temp = TempDir::new().unwrap();
        isolated(temp.path(), "")
            .args(["--dry-run", "migrate"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "docker compose exec web python manage.py migrate",
            ));
    }

    #[test]
    fn unknown_alias_fails_with_choices() {
        let temp = TempDir::new().unwrap();
        isolated(temp.path(), "")
            .arg("nonexistent")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown alias: nonexistent"))
            .stderr(predicate::str::contains("logs-all"));
    }

    #[test]
    fn invalid_config_is_reported() {
        let temp = TempDir::new().unwrap();
        isolated(temp.path(), "[[composite]]\nname = \"x\"\nsteps = [\"missing\"]\n")
            .arg("help")
            .assert()
            .failure()
            .stderr(predicate::str::contains("not a registered alias"));
    }

    #[test]
    fn local_config_is_discovered() {
        let temp = TempDir::new().unwrap();
        let global = temp.path().join("global.toml");
        std::fs::write(&global, ECHO_CONFIG).unwrap();
        std::fs::write(
            temp.path().join(".dockalias.toml"),
            "[project]\nservice = \"worker\"\n",
        )
        .unwrap();

        dockalias()
            .arg("--config")
            .arg(&global)
            .arg("-C")
            .arg(temp.path())
            .arg("reload")
            .assert()
            .success()
            .stdout("compose restart worker\n");
    }

    #[test]
    fn relative_directory_finds_parent_config() {
        let temp = TempDir::new().unwrap();
        let global = temp.path().join("global.toml");
        std::fs::write(&global, ECHO_CONFIG).unwrap();

        let project = temp.path().join("proj");
        let sub = project.join("sub");
        std::fs::create_dir_all(&sub).unwrap();
        std::fs::write(
            project.join(".dockalias.toml"),
            "[project]\nservice = \"worker\"\n",
        )
        .unwrap();

        dockalias()
            .current_dir(&sub)
            .arg("--config")
            .arg(&global)
            .args(["-C", ".", "reload"])
            .assert()
            .success()
            .stdout("compose restart worker\n");
    }

    #[test]
    fn list_plain_prints_names() {
        let temp = TempDir::new().unwrap();
        isolated(temp.path(), "")
            .args(["list", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("up\ndown\n"));
    }

    #[test]
    fn init_writes_local_config() {
        let temp = TempDir::new().unwrap();
        dockalias()
            .args(["init", "--path"])
            .arg(temp.path())
            .assert()
            .success();
        assert!(temp.path().join(".dockalias.toml").exists());

        dockalias()
            .args(["init", "--path"])
            .arg(temp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn completions_generate() {
        dockalias()
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("dockalias"));
    }
}
