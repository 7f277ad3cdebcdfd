//! Integration tests for cachedcarthage

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;

    fn cachedcarthage() -> Command {
        let mut cmd = cargo_bin_cmd!("cachedcarthage");
        cmd.env_remove("carthage_command")
            .env_remove("carthage_options")
            .env_remove("CACHEDCARTHAGE_CONFIG");
        cmd
    }

    #[test]
    fn help_displays() {
        cachedcarthage()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Carthage with a dependency cache"));
    }

    #[test]
    fn version_displays() {
        cachedcarthage()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("cachedcarthage"));
    }

    #[test]
    fn missing_command_fails() {
        cachedcarthage()
            .assert()
            .failure()
            .stderr(predicate::str::contains("no Carthage command specified"))
            .stderr(predicate::str::contains("Hint:"));
    }

    #[test]
    fn invalid_settings_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[retry\n").unwrap();

        cachedcarthage()
            .args(["--carthage-command", "bootstrap", "--config"])
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid settings"));
    }
}

#[cfg(unix)]
mod step_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const SWIFT_VERSION: &str = "Apple Swift version 5.0.2";
    const RESOLVED: &str = "github \"Alamofire/Alamofire\" \"5.8.1\"\n";

    /// Project directory plus fake carthage, swift and envman on PATH
    struct Sandbox {
        _dir: TempDir,
        project: PathBuf,
        bin: PathBuf,
        logs: PathBuf,
    }

    impl Sandbox {
        /// `bootstrap_body` is the shell run for `carthage bootstrap|update`
        fn new(bootstrap_body: &str) -> Self {
            let dir = TempDir::new().unwrap();
            let project = dir.path().join("project");
            let bin = dir.path().join("bin");
            let logs = dir.path().join("logs");
            for d in [&project, &bin, &logs] {
                fs::create_dir_all(d).unwrap();
            }

            write_script(
                &bin.join("carthage"),
                &format!(
                    r#"echo "$*" >> "$FAKE_LOGS/carthage.log"
case "$1" in
  version) echo "0.39.1" ;;
  bootstrap|update)
{bootstrap_body}
  ;;
esac
"#
                ),
            );
            write_script(&bin.join("swift"), &format!("echo '{SWIFT_VERSION}'\n"));
            write_script(
                &bin.join("envman"),
                r#"printf '%s\n' "$@" >> "$FAKE_LOGS/envman.log""#,
            );

            fs::write(project.join("Cartfile.resolved"), RESOLVED).unwrap();

            Self {
                _dir: dir,
                project,
                bin,
                logs,
            }
        }

        fn cmd(&self, carthage_command: &str) -> Command {
            let mut cmd = cargo_bin_cmd!("cachedcarthage");
            cmd.env_clear()
                .env("PATH", format!("{}:/usr/bin:/bin", self.bin.display()))
                .env("FAKE_LOGS", &self.logs)
                .env("carthage_command", carthage_command)
                .env("BITRISE_SOURCE_DIR", &self.project)
                .current_dir(&self.project);
            cmd
        }

        fn with_instant_retry(&self, cmd: &mut Command) {
            let settings = self.logs.join("settings.toml");
            fs::write(&settings, "[retry]\nwait_secs = 0\n").unwrap();
            cmd.env("CACHEDCARTHAGE_CONFIG", settings);
        }

        fn carthage_calls(&self) -> Vec<String> {
            read_lines(&self.logs.join("carthage.log"))
        }

        fn envman_args(&self) -> Vec<String> {
            read_lines(&self.logs.join("envman.log"))
        }

        fn cachefile(&self) -> PathBuf {
            self.project.join("Carthage").join("Cachefile")
        }

        fn expected_cachefile(&self) -> String {
            format!(
                "--Swift version: {SWIFT_VERSION} --Swift version \n --Cartfile.resolved: {RESOLVED} --Cartfile.resolved"
            )
        }
    }

    fn write_script(path: &Path, body: &str) {
        fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    const BUILD_DEPENDENCIES: &str =
        "mkdir -p Carthage/Build/iOS && touch Carthage/Build/iOS/Alamofire.framework";

    #[test]
    fn non_cache_command_leaves_cache_alone() {
        let sandbox = Sandbox::new(BUILD_DEPENDENCIES);

        sandbox.cmd("build").assert().success();

        assert_eq!(sandbox.carthage_calls(), ["version", "build"]);
        assert!(!sandbox.cachefile().exists());
        assert!(sandbox.envman_args().is_empty());
    }

    #[test]
    fn bootstrap_cache_miss_builds_and_creates_cache() {
        let sandbox = Sandbox::new(BUILD_DEPENDENCIES);

        sandbox
            .cmd("bootstrap")
            .env("carthage_options", "--platform iOS")
            .assert()
            .success()
            .stdout(predicate::str::contains("Cache not available"));

        assert_eq!(sandbox.carthage_calls(), ["version", "bootstrap --platform iOS"]);
        assert_eq!(
            fs::read_to_string(sandbox.cachefile()).unwrap(),
            sandbox.expected_cachefile()
        );

        let envman = sandbox.envman_args();
        assert_eq!(envman[..3], ["add", "--key", "BITRISE_CACHE_INCLUDE_PATHS"]);
        assert!(envman[4].ends_with("Carthage/Cachefile"));
        assert!(envman[4].contains("/Carthage -> /"));
    }

    #[test]
    fn bootstrap_cache_hit_skips_carthage() {
        let sandbox = Sandbox::new(BUILD_DEPENDENCIES);
        fs::create_dir_all(sandbox.project.join("Carthage/Build/iOS")).unwrap();
        fs::write(
            sandbox.project.join("Carthage/Build/iOS/Alamofire.framework"),
            "",
        )
        .unwrap();
        fs::write(sandbox.cachefile(), sandbox.expected_cachefile()).unwrap();

        sandbox
            .cmd("bootstrap")
            .assert()
            .success()
            .stdout(predicate::str::contains("Using cached dependencies"));

        assert_eq!(sandbox.carthage_calls(), ["version"]);
        assert!(!sandbox.envman_args().is_empty());
    }

    #[test]
    fn bootstrap_stale_cache_rebuilds() {
        let sandbox = Sandbox::new(BUILD_DEPENDENCIES);
        fs::create_dir_all(sandbox.project.join("Carthage/Build/iOS")).unwrap();
        fs::write(
            sandbox.project.join("Carthage/Build/iOS/Alamofire.framework"),
            "",
        )
        .unwrap();
        fs::write(sandbox.cachefile(), "built with another toolchain").unwrap();

        sandbox.cmd("bootstrap").assert().success();

        assert_eq!(sandbox.carthage_calls(), ["version", "bootstrap"]);
        assert_eq!(
            fs::read_to_string(sandbox.cachefile()).unwrap(),
            sandbox.expected_cachefile()
        );
    }

    #[test]
    fn bootstrap_undecodable_cachefile_rebuilds() {
        let sandbox = Sandbox::new(BUILD_DEPENDENCIES);
        fs::create_dir_all(sandbox.project.join("Carthage/Build/iOS")).unwrap();
        fs::write(
            sandbox.project.join("Carthage/Build/iOS/Alamofire.framework"),
            "",
        )
        .unwrap();
        fs::write(sandbox.cachefile(), [0xffu8, 0xfe, 0x00]).unwrap();

        sandbox.cmd("bootstrap").assert().success();

        assert_eq!(sandbox.carthage_calls(), ["version", "bootstrap"]);
        assert_eq!(
            fs::read_to_string(sandbox.cachefile()).unwrap(),
            sandbox.expected_cachefile()
        );

        // The rewritten indicator is picked up by the next run
        sandbox.cmd("bootstrap").assert().success();
        assert_eq!(sandbox.carthage_calls(), ["version", "bootstrap", "version"]);
    }

    #[test]
    fn transient_failure_is_retried() {
        let sandbox = Sandbox::new(
            r#"n=$(cat "$FAKE_LOGS/count" 2>/dev/null || echo 0)
n=$((n + 1))
echo "$n" > "$FAKE_LOGS/count"
if [ "$n" -eq 1 ]; then
  echo "fatal: unable to access 'https://github.com/': Operation timed out" >&2
  exit 1
fi
mkdir -p Carthage/Build/iOS && touch Carthage/Build/iOS/Alamofire.framework"#,
        );

        let mut cmd = sandbox.cmd("bootstrap");
        sandbox.with_instant_retry(&mut cmd);
        cmd.assert().success();

        assert_eq!(
            sandbox.carthage_calls(),
            ["version", "bootstrap", "bootstrap"]
        );
        assert!(sandbox.cachefile().exists());
    }

    #[test]
    fn permanent_failure_is_reported() {
        let sandbox = Sandbox::new(
            r#"echo "Parse error: unexpected token in Cartfile" >&2
exit 1"#,
        );

        let mut cmd = sandbox.cmd("update");
        sandbox.with_instant_retry(&mut cmd);
        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("Parse error"))
            .stderr(predicate::str::contains("Carthage command failed"));

        assert_eq!(sandbox.carthage_calls(), ["version", "update"]);
    }

    #[test]
    fn empty_manifest_is_fatal_only_when_creating_cache() {
        let sandbox = Sandbox::new(BUILD_DEPENDENCIES);
        fs::write(sandbox.project.join("Cartfile.resolved"), "").unwrap();

        sandbox
            .cmd("bootstrap")
            .assert()
            .failure()
            .stderr(predicate::str::contains("is empty"));

        // The availability check only warns; indicator creation aborts the run
        assert_eq!(sandbox.carthage_calls(), ["version", "bootstrap"]);
        assert!(!sandbox.cachefile().exists());
    }
}
