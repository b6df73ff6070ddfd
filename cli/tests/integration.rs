//! End-to-end integration tests for the criteria-demo CLI

use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

/// Get the criteria-demo CLI binary, isolated from the caller's environment
fn criteria_cli(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("criteria-demo"));
    cmd.current_dir(dir.path())
        .env_remove("CRITERIA_DATABASE_URL")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn seeded_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    criteria_cli(&temp).arg("seed").assert().success();
    temp
}

mod init {
    use super::*;

    #[test]
    fn init_creates_config_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("criteria.config.toml");

        criteria_cli(&temp)
            .arg("init")
            .arg("--database=orders.db")
            .assert()
            .success()
            .stdout(predicate::str::contains("Created criteria.config.toml"));

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[database]"));
        assert!(content.contains("orders.db"));
    }

    #[test]
    fn init_fails_if_config_exists() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("criteria.config.toml"), "").unwrap();

        criteria_cli(&temp)
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }
}

mod seed {
    use super::*;

    #[test]
    fn seed_writes_default_database() {
        let temp = TempDir::new().unwrap();

        criteria_cli(&temp)
            .arg("seed")
            .assert()
            .success()
            .stdout(predicate::str::contains("Seeded 4 orders and 5 items"));

        assert!(temp.path().join("criteria-demo.db").exists());
    }

    #[test]
    fn env_overrides_config_and_flag_overrides_env() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("criteria.config.toml"),
            "[database]\nurl = \"from-config.db\"\n",
        )
        .unwrap();

        criteria_cli(&temp)
            .env("CRITERIA_DATABASE_URL", "from-env.db")
            .arg("seed")
            .assert()
            .success();
        assert!(temp.path().join("from-env.db").exists());
        assert!(!temp.path().join("from-config.db").exists());

        criteria_cli(&temp)
            .env("CRITERIA_DATABASE_URL", "from-env.db")
            .arg("seed")
            .arg("--database=from-flag.db")
            .assert()
            .success();
        assert!(temp.path().join("from-flag.db").exists());
    }

    #[test]
    fn invalid_config_fails() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("criteria.config.toml"), "[database\n").unwrap();

        criteria_cli(&temp)
            .arg("seed")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse"));
    }
}

mod get {
    use super::*;

    #[test]
    fn get_prints_json_body() {
        let temp = seeded_dir();

        criteria_cli(&temp)
            .args(["get", "/demo/with_specific_columns"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                r#"[[3,"my second order"],[1,"myOrder"]]"#,
            ));
    }

    #[test]
    fn get_join_keeps_only_matching_orders() {
        let temp = seeded_dir();

        criteria_cli(&temp)
            .args(["get", "/demo/join"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                r#"[[3,"my second order",13,"D"],[1,"myOrder",10,"A"],[1,"myOrder",11,"B"]]"#,
            ));
    }

    #[test]
    fn get_pretty_uses_original_field_names() {
        let temp = seeded_dir();

        criteria_cli(&temp)
            .args([
                "get",
                "/demo/simple_example_return_all_entity_columns",
                "--pretty",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"itemList\""))
            .stdout(predicate::str::contains("\"shoppingOrder\": null"));
    }

    #[test]
    fn get_respects_context_path() {
        let temp = seeded_dir();
        std::fs::write(
            temp.path().join("criteria.config.toml"),
            "[server]\ncontext_path = \"/orm-demo\"\n",
        )
        .unwrap();

        criteria_cli(&temp)
            .args(["get", "/orm-demo/demo/join"])
            .assert()
            .success();

        criteria_cli(&temp)
            .args(["get", "/demo/join"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("status 404"));
    }

    #[test]
    fn get_unknown_path_fails() {
        let temp = seeded_dir();

        criteria_cli(&temp)
            .args(["get", "/demo/nothing"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no route for /demo/nothing"));
    }

    #[test]
    fn get_without_database_fails() {
        let temp = TempDir::new().unwrap();

        criteria_cli(&temp)
            .args(["get", "/demo/join"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("does not exist"));
    }
}

mod routes {
    use super::*;

    #[test]
    fn routes_lists_endpoints() {
        let temp = TempDir::new().unwrap();

        criteria_cli(&temp)
            .arg("routes")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "/demo/simple_example_return_all_entity_columns",
            ))
            .stdout(predicate::str::contains("/demo/with_specific_columns"))
            .stdout(predicate::str::contains("/demo/join"));
    }
}
