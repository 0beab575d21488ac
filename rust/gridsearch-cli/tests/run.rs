use std::fs;
use std::path::PathBuf;

use clap::Parser;
use gridsearch_cli::{run, Args, Config};
use gridsearch_core::Algorithm;
use tempfile::{tempdir, TempDir};

const TINY_MAZE: &str = "\
%%%%%%%
%    P%
% %%% %
%  %  %
%%   %%
%o %%%%
%%%%%%%
";

const TRAPPED: &str = "\
%%%%%%%
%P    %
% %%% %
% %o% %
% %%% %
%     %
%%%%%%%
";

fn setup() -> (TempDir, Config) {
    let dir = tempdir().expect("temp dir");
    let layouts = dir.path().join("layouts");
    fs::create_dir_all(&layouts).unwrap();
    fs::write(layouts.join("tinyMaze.lay"), TINY_MAZE).unwrap();
    fs::write(layouts.join("trapped.lay"), TRAPPED).unwrap();
    let cfg = Config { layout_dir: layouts, out_dir: dir.path().join("solutions"), max_expansions: None };
    (dir, cfg)
}

fn args(extra: &[&str]) -> Args {
    let mut argv = vec!["gridsearch"];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).expect("args")
}

#[test]
fn writes_one_annotated_map_per_algorithm() {
    let (_dir, cfg) = setup();
    let mut out = Vec::new();
    let summary = run(&args(&["-l", "tinyMaze"]), &cfg, &mut out).expect("run");

    let expected: Vec<PathBuf> = Algorithm::ALL
        .iter()
        .map(|a| cfg.out_dir.join(format!("tinyMaze_{}.lay", a.tag())))
        .collect();
    assert_eq!(summary.written, expected);
    for p in &expected {
        let text = fs::read_to_string(p).unwrap();
        assert_eq!(text.lines().count(), TINY_MAZE.lines().count());
        assert!(text.contains('P') && text.contains('o'));
    }

    let astar = fs::read_to_string(cfg.out_dir.join("tinyMaze_astar.lay")).unwrap();
    assert!(astar.contains('*'), "A* map should show the solution:\n{astar}");

    let stdout = String::from_utf8(out).unwrap();
    assert!(stdout.contains("Start: (2, 6)"));
    assert!(stdout.contains("Goal: (6, 2)"));
    assert!(stdout.contains("a-star:"));
    assert!(stdout.contains("Performance:"));
    assert_eq!(summary.report.rows.len(), 5);
}

#[test]
fn json_output_is_parseable() {
    let (_dir, cfg) = setup();
    let mut out = Vec::new();
    run(&args(&["-l", "tinyMaze", "-a", "astar", "-a", "bfs", "--json", "--no-output"]), &cfg, &mut out).expect("run");

    let v: serde_json::Value = serde_json::from_slice(&out).expect("json");
    assert_eq!(v["layout"], "tinyMaze");
    let results = v["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["algorithm"], "a-star");
    assert_eq!(results[0]["outcome"], "succeeded");
    // both find the 8-step shortest route
    assert_eq!(results[0]["states"].as_array().unwrap().len(), 9);
    assert_eq!(results[1]["states"].as_array().unwrap().len(), 9);
    assert_eq!(v["report"]["rows"].as_array().unwrap().len(), 2);
    assert!(!cfg.out_dir.exists());
}

#[test]
fn unreachable_goal_is_not_an_error() {
    let (_dir, cfg) = setup();
    let mut out = Vec::new();
    let summary = run(&args(&["-l", "trapped"]), &cfg, &mut out).expect("run");
    let stdout = String::from_utf8(out).unwrap();
    assert!(stdout.contains("Outcome: no-path"));
    assert!(stdout.contains("Outcome: halted"));
    assert!(summary.report.rows.iter().all(|r| !r.solved));

    let bfs = fs::read_to_string(cfg.out_dir.join("trapped_bfs.lay")).unwrap();
    assert!(bfs.contains('+'));
    assert!(!bfs.contains('*'));
}

#[test]
fn missing_layout_reports_path() {
    let (_dir, cfg) = setup();
    let mut out = Vec::new();
    let err = run(&args(&["-l", "nope"]), &cfg, &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("nope.lay"));
}

#[test]
fn expansion_cap_applies() {
    let (_dir, mut cfg) = setup();
    cfg.max_expansions = Some(1);
    let mut out = Vec::new();
    run(&args(&["-l", "tinyMaze", "-a", "bfs", "--no-output"]), &cfg, &mut out).expect("run");
    let stdout = String::from_utf8(out).unwrap();
    assert!(stdout.contains("Outcome: expansion-limit"));
}
