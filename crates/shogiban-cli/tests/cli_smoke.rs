use predicates::prelude::*;
use std::fs;
use assert_cmd::Command;
use tempfile::TempDir;

const START: &str = "LKSGOGSKL/1R5B1/PPPPPPPPP/9/9/9/ppppppppp/1b5r1/lksgogskl s - - 0";

fn shogiban() -> Command {
    Command::cargo_bin("shogiban").expect("binary exists")
}

#[test]
fn show_prints_start_position() {
    shogiban()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("手番: 先手  手数: 0"))
        .stdout(predicate::str::contains(START));
}

#[test]
fn show_json_has_cells_and_turn() {
    let output = shogiban().args(["show", "--json"]).output().expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["turn"], "sente");
    assert_eq!(value["move_number"], 0);
    assert_eq!(value["cells"].as_array().map(Vec::len), Some(9));
    assert_eq!(value["position"], START);
}

#[test]
fn moves_lists_targets() {
    shogiban()
        .args(["moves", "6", "0"])
        .assert()
        .success()
        .stdout("5,0\n");

    // 初期局面の先手の飛車 (7,7) は横にしか動けない
    shogiban()
        .args(["moves", "--position", START, "7", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7,8"))
        .stdout(predicate::str::contains("7,2"))
        .stdout(predicate::str::contains("7,1").not());
}

#[test]
fn moves_rejects_off_board_square() {
    shogiban().args(["moves", "3", "9"]).assert().failure();
}

#[test]
fn invalid_position_fails() {
    shogiban()
        .args(["show", "--position", "9/9/9 s - - 0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid position"));
}

#[test]
fn drops_follow_pool_encoding() {
    let pos = "4O4/9/9/9/9/9/9/9/4o4 s 2p - 0";
    shogiban()
        .args(["--pool-encoding", "counted", "drops", "--position", pos])
        .assert()
        .success()
        .stdout(predicate::str::contains("p*0,0\n"))
        .stdout(predicate::str::contains("p*0,4").not());

    shogiban().args(["drops", "--position", pos]).assert().failure();
}

#[test]
fn config_file_sets_encoding() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("shogiban.toml");
    fs::write(&path, "pool_encoding = \"counted\"\n").unwrap();

    shogiban()
        .args(["--config", path.to_string_lossy().as_ref()])
        .args(["show", "--position", "4O4/9/9/9/9/9/9/9/4o4 s 3p - 0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4O4/9/9/9/9/9/9/9/4o4 s 3p - 0"));

    fs::write(&path, "pool_encoding = \"packed\"\n").unwrap();
    shogiban()
        .args(["--config", path.to_string_lossy().as_ref(), "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn play_session_applies_actions_in_order() {
    shogiban()
        .arg("play")
        .write_stdin("move 6 0 5 0\nmove 6 0 4 0\nmove 2 0 3 0\nquit\nmove 6 1 5 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "LKSGOGSKL/1R5B1/PPPPPPPPP/9/9/p8/1pppppppp/1b5r1/lksgogskl g - - 0",
        ))
        .stdout(predicate::str::contains(
            "LKSGOGSKL/1R5B1/1PPPPPPPP/P8/9/p8/1pppppppp/1b5r1/lksgogskl s - - 1",
        ))
        .stdout(predicate::str::contains("2ppppppp").not())
        .stderr(predicate::str::contains("error:"));
}
