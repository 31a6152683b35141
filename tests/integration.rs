//! Integration tests for the ricochet engine binary.
//!
//! Tests full driver sessions by spawning the engine process, sending
//! commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_ricochet");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start ricochet");

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

/// A 16x16 round: blue at (5,5) under a north-facing wall at (5,7), green
/// and yellow sharing column 3, red parked on its own target.
const ROUND: &str = r#"board {"robots": [{"id": "r", "color": "red", "x": 8, "y": 8}, {"id": "b", "color": "blue", "x": 5, "y": 5}, {"id": "g", "color": "green", "x": 3, "y": 3}, {"id": "y", "color": "yellow", "x": 3, "y": 6}], "targets": [{"color": "red", "x": 8, "y": 8}, {"color": "blue", "x": 5, "y": 6}, {"color": "green", "x": 16, "y": 5}], "walls": [{"x": 5, "y": 7, "direction": "north"}], "size": 16}"#;

#[test]
fn isready_response() {
    let lines = run_engine(&["isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn unknown_and_empty_lines_are_ignored() {
    let lines = run_engine(&["foobar", "", "  ", "nonsense 1 2", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn board_load_reports_counts() {
    let lines = run_engine(&[ROUND, "quit"]);
    assert_eq!(lines, vec!["boardok 4 3 1"]);
}

#[test]
fn malformed_board_is_rejected() {
    let lines = run_engine(&[
        r#"board {"robots": [{"id": "r", "color": "red", "x": 0, "y": 8}]}"#,
        "robots",
        "isready",
        "quit",
    ]);
    // No boardok, and `robots` has no board to list.
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn wall_stops_robot_and_wins() {
    let lines = run_engine(&[ROUND, "tick 12", "move b 5 10", "quit"]);
    assert_eq!(lines, vec!["boardok 4 3 1", "moved blue 5 5 5 6", "win 1 00:12"]);
}

#[test]
fn robot_stops_next_to_robot() {
    let lines = run_engine(&[ROUND, "move g 3 10", "robots", "quit"]);
    assert_eq!(
        lines,
        vec![
            "boardok 4 3 1",
            "moved green 3 3 3 5",
            "robot b blue 5 5",
            "robot g green 3 5",
            "robot r red 8 8",
            "robot y yellow 3 6",
        ]
    );
}

#[test]
fn robot_on_own_target_without_move_is_not_a_win() {
    let lines = run_engine(&[ROUND, "move r 8 8", "solution", "quit"]);
    assert_eq!(lines, vec!["boardok 4 3 1", "noop", "solution []"]);
}

#[test]
fn unknown_robot_produces_no_output() {
    let lines = run_engine(&[ROUND, "move silver 1 1", "isready", "quit"]);
    assert_eq!(lines, vec!["boardok 4 3 1", "readyok"]);
}

#[test]
fn solution_lists_moves_in_order() {
    let lines = run_engine(&[ROUND, "move g 3 1", "move g 16 1", "solution", "quit"]);
    assert_eq!(lines[1], "moved green 3 3 3 1");
    assert_eq!(lines[2], "moved green 3 1 16 1");
    assert_eq!(
        lines[3],
        r#"solution [{"color":"green","from_x":3,"from_y":3,"to_x":3,"to_y":1},{"color":"green","from_x":3,"from_y":1,"to_x":16,"to_y":1}]"#
    );
}

#[test]
fn reset_restores_board_and_clears_solution() {
    let lines = run_engine(&[
        ROUND,
        "move g 3 1",
        "move b 1 5",
        "reset",
        "robots",
        "solution",
        "quit",
    ]);
    assert_eq!(
        &lines[3..],
        &[
            "robot b blue 5 5",
            "robot g green 3 3",
            "robot r red 8 8",
            "robot y yellow 3 6",
            "solution []",
        ]
    );
}

#[test]
fn board_size_option_applies_to_sizeless_snapshot() {
    let lines = run_engine(&[
        "setoption name BoardSize value 4",
        r#"board {"robots": [{"id": "r", "color": "red", "x": 2, "y": 2}]}"#,
        "move r 2 4",
        "quit",
    ]);
    assert_eq!(lines, vec!["boardok 1 0 0", "moved red 2 2 2 4"]);
}

#[test]
fn replay_plays_stored_moves() {
    let lines = run_engine(&[
        ROUND,
        "move g 3 1",
        r#"replay [{"color":"blue","from_x":5,"from_y":5,"to_x":16,"to_y":5},{"color":"green","from_x":3,"from_y":3,"to_x":3,"to_y":5}]"#,
        "speed",
        "step",
        "step",
        "step",
        "quit",
    ]);
    assert_eq!(
        lines,
        vec![
            "boardok 4 3 1",
            "moved green 3 3 3 1",
            "replayok 2",
            "speed 2 500",
            "replay 1 blue 16 5",
            "replay 2 green 3 5",
            "replayend",
        ]
    );
}

#[test]
fn quit_stops_processing() {
    let lines = run_engine(&["quit", "isready"]);
    assert!(lines.is_empty());
}
