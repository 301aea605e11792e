#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, ChildStdout, Stdio};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub names: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let names = tmp.path().join("names.txt");
        fs::write(&names, "Ann\nBo\nCy\nDee\n").expect("write names fixture");

        Self {
            _tmp: tmp,
            home,
            names,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("luckydraw");
        cmd.env("HOME", &self.home)
            .env_remove("GEMINI_API_KEY")
            .env_remove("API_KEY")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn names_arg(&self) -> &str {
        self.names.to_str().expect("names path utf8")
    }

    pub fn write_names(&self, body: &str) {
        fs::write(&self.names, body).expect("write names");
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_names(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--names")
            .arg(self.names_arg())
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn state(&self) -> Value {
        let raw = fs::read_to_string(self.home.join(".config/luckydraw/state.json"))
            .expect("read state");
        serde_json::from_str(&raw).expect("state json")
    }

    /// Starts an animated spin and returns once its first frame is on
    /// screen, so the draw is known to be in progress.
    pub fn spawn_animated_spin(&self) -> (Child, ChildStdout) {
        let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_luckydraw"))
            .env("HOME", &self.home)
            .env_remove("GEMINI_API_KEY")
            .env_remove("API_KEY")
            .env_remove("RUST_LOG")
            .args(["--names", self.names_arg(), "spin", "--seed", "31", "--frame-ms", "50"])
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("spawn spin");
        let mut stdout = child.stdout.take().expect("piped stdout");
        let mut first = [0u8; 1];
        stdout.read_exact(&mut first).expect("first frame");
        (child, stdout)
    }
}
