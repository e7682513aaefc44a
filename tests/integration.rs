//! Integration tests for the riverview binary.
//!
//! Spawns the controller process, feeds it commands on stdin, and checks
//! the stdout responses.

use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the controller and collects stdout lines.
fn run_viewer(commands: &[String]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_riverview");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start riverview");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

fn cmds(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Writes `contents` to a file unique to this test and returns its path.
fn fixture(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("riverview-it-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

const TRIANGLE_MAP: &str = r#"{"sites":[{"id":0,"x":0,"y":0},{"id":1,"x":1,"y":0},{"id":2,"x":0,"y":1}],
    "rivers":[{"source":0,"target":1},{"source":1,"target":2},{"source":2,"target":0}],
    "mines":[0]}"#;

const TRIANGLE_MOVES: &str = r#"{"moves":[
    {"claim":{"punter":0,"source":0,"target":1}},
    {"pass":{"punter":1}},
    {"claim":{"punter":0,"source":1,"target":2}},
    {"option":{"punter":1,"source":0,"target":1}}]}"#;

#[test]
fn isready_response() {
    let lines = run_viewer(&cmds(&["isready", "quit"]));
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn unknown_and_empty_lines_are_ignored() {
    let lines = run_viewer(&cmds(&["", "  ", "foobar", "isready", "quit"]));
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn full_replay_session() {
    let map = fixture("full_map.json", TRIANGLE_MAP);
    let moves = fixture("full_moves.json", TRIANGLE_MOVES);
    let lines = run_viewer(&[
        format!("map {}", map.display()),
        format!("moves {}", moves.display()),
        "scores".to_string(),
        "next".to_string(),
        "scores".to_string(),
        "seek 3".to_string(),
        "scores".to_string(),
        "next".to_string(),
        "scores".to_string(),
        "edges".to_string(),
        "quit".to_string(),
    ]);
    assert_eq!(
        lines,
        vec![
            "mapok sites 3 rivers 3 mines 1",
            "movesok 4",
            r#"scores {"0":0,"1":0}"#,
            "step 1/4",
            r#"scores {"0":1,"1":0}"#,
            "step 3/4",
            r#"scores {"0":2,"1":0}"#,
            "step 4/4",
            r#"scores {"0":2,"1":1}"#,
            r#"edges {"0":[[0,1],[1,2]],"1":[[0,1]]}"#,
        ]
    );
}

#[test]
fn moves_before_map_is_an_error() {
    let moves = fixture("early_moves.json", TRIANGLE_MOVES);
    let lines = run_viewer(&[format!("moves {}", moves.display()), "quit".to_string()]);
    assert_eq!(lines, vec!["error no map loaded"]);
}

#[test]
fn bad_moves_file_keeps_previous_log() {
    let map = fixture("keep_map.json", TRIANGLE_MAP);
    let moves = fixture("keep_moves.json", TRIANGLE_MOVES);
    let bad = fixture(
        "keep_bad.json",
        r#"{"moves":[{"claim":{"punter":0,"source":0,"target":42}}]}"#,
    );
    let lines = run_viewer(&[
        format!("map {}", map.display()),
        format!("moves {}", moves.display()),
        "next".to_string(),
        format!("moves {}", bad.display()),
        "scores".to_string(),
        "quit".to_string(),
    ]);
    assert_eq!(lines[3], "error unknown site 42 referenced by move 0");
    assert_eq!(lines[4], r#"scores {"0":1,"1":0}"#);
}

#[test]
fn seek_out_of_range_is_reported() {
    let map = fixture("seek_map.json", TRIANGLE_MAP);
    let moves = fixture("seek_moves.json", TRIANGLE_MOVES);
    let lines = run_viewer(&[
        format!("map {}", map.display()),
        format!("moves {}", moves.display()),
        "seek 2".to_string(),
        "seek 9".to_string(),
        "controls".to_string(),
        "quit".to_string(),
    ]);
    assert_eq!(lines[2], "step 2/4");
    assert_eq!(lines[3], "error step 9 out of range 0..=4");
    assert_eq!(lines[4], "controls prev true next true play true moves true max 4");
}

#[test]
fn autoplay_runs_to_the_end() {
    let map = fixture("play_map.json", TRIANGLE_MAP);
    let moves = fixture("play_moves.json", TRIANGLE_MOVES);
    let mut commands = vec![
        format!("map {}", map.display()),
        format!("moves {}", moves.display()),
        "play".to_string(),
    ];
    commands.extend(std::iter::repeat("tick".to_string()).take(4));
    commands.push("quit".to_string());
    let lines = run_viewer(&commands);

    assert_eq!(lines[2], "step 0/4");
    assert_eq!(lines[3], "playing true");
    assert_eq!(lines[lines.len() - 2], "step 4/4");
    assert_eq!(lines[lines.len() - 1], "playing false");
}

#[test]
fn setoption_is_silent() {
    let lines = run_viewer(&cmds(&[
        "setoption name ParallelOffset value 5",
        "setoption name Bogus value 1",
        "isready",
        "quit",
    ]));
    assert_eq!(lines, vec!["readyok"]);
}
