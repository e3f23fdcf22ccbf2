use std::process::Command;
use std::{env, fs, path::PathBuf};

fn combined_output(output: &std::process::Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn sign_replay_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_sign_replay").expect("sign_replay test binary not built")
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("signsense_{}_{name}", std::process::id()));
    fs::write(&path, contents).expect("write temp frames file");
    path
}

/// One L-shaped hand frame as the JSONL replay format expects it: index
/// extended along its knuckle ray, the other fingers curled, thumb up.
fn l_frame_json() -> String {
    let wrist = (0.5f32, 0.9f32);
    let mut points = vec![(0.0f32, 0.0f32); 21];
    points[0] = wrist;

    let bases: [(usize, (f32, f32), f32); 4] = [
        (5, (0.44, 0.60), 1.6),
        (9, (0.50, 0.60), 0.9),
        (13, (0.56, 0.60), 0.9),
        (17, (0.62, 0.62), 0.9),
    ];
    for (base_index, base, factor) in bases {
        points[base_index] = base;
        let dx = base.0 - wrist.0;
        let dy = base.1 - wrist.1;
        let joint = |f: f32| (wrist.0 + f * dx, wrist.1 + f * dy);
        points[base_index + 1] = joint(1.0 + (factor - 1.0) / 3.0);
        points[base_index + 2] = joint(1.0 + 2.0 * (factor - 1.0) / 3.0);
        points[base_index + 3] = joint(factor);
    }

    // Raised thumb.
    points[1] = (0.47, 0.87);
    points[2] = (0.44, 0.84);
    points[3] = (0.40, 0.80);
    points[4] = (0.20, 0.68);

    let triples: Vec<String> = points
        .iter()
        .map(|(x, y)| format!("[{x},{y},0.0]"))
        .collect();
    format!("[{}]", triples.join(","))
}

#[test]
fn help_mentions_name() {
    let output = Command::new(sign_replay_bin())
        .arg("--help")
        .output()
        .expect("run sign_replay --help");
    assert!(output.status.success());
    assert!(combined_output(&output).contains("SignSense"));
}

#[test]
fn replays_a_held_gesture_to_an_announcement() {
    let line = l_frame_json();
    let contents = vec![line; 12].join("\n");
    let path = temp_file("l_clip.jsonl", &contents);

    let output = Command::new(sign_replay_bin())
        .arg("--frames")
        .arg(&path)
        .arg("--fps")
        .arg("10")
        .output()
        .expect("run sign_replay");
    let _ = fs::remove_file(&path);

    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(stdout.contains("announce|"), "{stdout}");
    assert!(stdout.contains("label=L"), "{stdout}");
    assert!(stdout.contains("|announced=1|"), "{stdout}");
}

#[test]
fn empty_frames_produce_no_announcements() {
    let contents = vec!["[]"; 5].join("\n");
    let path = temp_file("empty_clip.jsonl", &contents);

    let output = Command::new(sign_replay_bin())
        .arg("--frames")
        .arg(&path)
        .output()
        .expect("run sign_replay");
    let _ = fs::remove_file(&path);

    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(!stdout.contains("announce|"), "{stdout}");
    assert!(stdout.contains("frames=5"), "{stdout}");
    assert!(stdout.contains("no_hand=5"), "{stdout}");
}

#[test]
fn malformed_frame_lines_are_reported() {
    let path = temp_file("bad_clip.jsonl", "not json\n");

    let output = Command::new(sign_replay_bin())
        .arg("--frames")
        .arg(&path)
        .output()
        .expect("run sign_replay");
    let _ = fs::remove_file(&path);

    assert!(!output.status.success());
    assert!(combined_output(&output).contains("invalid landmark frame on line 1"));
}

#[test]
fn rejects_out_of_range_fps() {
    let path = temp_file("fps_clip.jsonl", "[]\n");

    let output = Command::new(sign_replay_bin())
        .arg("--frames")
        .arg(&path)
        .arg("--fps")
        .arg("0")
        .output()
        .expect("run sign_replay");
    let _ = fs::remove_file(&path);

    assert!(!output.status.success());
    assert!(combined_output(&output).contains("--fps"));
}
