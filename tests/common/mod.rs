use assert_cmd::Command;

pub fn tagalias_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagalias").unwrap();
    cmd.env_remove("TAGALIAS_ROOT");
    cmd
}
