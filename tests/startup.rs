//! Process-level startup behavior.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

#[test]
fn missing_secret_exits_before_serving() {
    // Run outside the checkout so a developer's .env cannot supply the secret.
    let workdir = tempfile::tempdir().expect("temp dir");
    let mut child = Command::new(env!("CARGO_BIN_EXE_socketdemo"))
        .current_dir(workdir.path())
        .env_remove("SECRET_KEY")
        .env("HOST", "127.0.0.1")
        .env("PORT", "0")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("binary should start");

    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = child.try_wait().expect("wait on child") {
            break status;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            panic!("server kept running without SECRET_KEY");
        }
        std::thread::sleep(Duration::from_millis(20));
    };

    assert!(!status.success());
}

#[test]
fn secret_from_dotenv_in_working_dir_is_used() {
    let workdir = tempfile::tempdir().expect("temp dir");
    std::fs::write(workdir.path().join(".env"), "SECRET_KEY=from-dotenv\n").expect("write .env");

    let mut child = Command::new(env!("CARGO_BIN_EXE_socketdemo"))
        .current_dir(workdir.path())
        .env_remove("SECRET_KEY")
        .env("HOST", "127.0.0.1")
        .env("PORT", "0")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("binary should start");

    std::thread::sleep(Duration::from_millis(500));
    let exited = child.try_wait().expect("wait on child");
    let _ = child.kill();
    let _ = child.wait();

    assert!(exited.is_none(), "server should keep serving with a .env secret, exited with {exited:?}");
}
