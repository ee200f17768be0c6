#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn quire_cmd() -> Command {
    let mut cmd = Command::cargo_bin("quire").unwrap();
    cmd.env_remove("QUIRE_ROOT");
    cmd.env_remove("QUIRE_LOG");
    // Cheap argon2 cost keeps the suite fast
    cmd.env("QUIRE_HASH_MEMORY_KIB", "8");
    cmd.env("QUIRE_HASH_ITERATIONS", "1");
    cmd
}

/// `quire init` followed by an admin login
pub fn init_logged_in(root: &Path) {
    quire_cmd().arg("init").arg(root).assert().success();
    quire_cmd()
        .current_dir(root)
        .args(["login", "--username", "admin", "--password", "admin123"])
        .assert()
        .success();
}

/// Publish an article and return its id
pub fn add_article(root: &Path, title: &str, category: &str, content: &str) -> String {
    let output = quire_cmd()
        .current_dir(root)
        .args([
            "add",
            "--title",
            title,
            "--category",
            category,
            "--content",
            content,
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);

    String::from_utf8(output.stdout)
        .unwrap()
        .trim()
        .strip_prefix("Published ")
        .expect("add prints the new id")
        .to_string()
}
