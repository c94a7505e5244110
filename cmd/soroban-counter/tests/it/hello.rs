use crate::util::TestEnv;

#[test]
fn hello_world() {
    TestEnv::new()
        .bare_cmd("hello")
        .args(["--to", "world"])
        .assert()
        .success()
        .stdout("[\"Hello\",\"world\"]\n");
}

#[test]
fn hello_requires_to() {
    TestEnv::new().bare_cmd("hello").assert().failure();
}
