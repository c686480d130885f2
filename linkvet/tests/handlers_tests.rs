use linkvet::command_argument_builder;
use linkvet::handlers::{deliver_report, expand_path};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_check_defaults() {
    let matches = command_argument_builder().get_matches_from(["linkvet", "check"]);
    let (name, sub_matches) = matches.subcommand().unwrap();
    assert_eq!(name, "check");

    assert_eq!(
        sub_matches.get_one::<PathBuf>("input").unwrap(),
        &PathBuf::from("README.txt")
    );
    assert_eq!(
        sub_matches.get_one::<PathBuf>("output").unwrap(),
        &PathBuf::from("valid_repos.txt")
    );
    assert_eq!(*sub_matches.get_one::<usize>("threads").unwrap(), 20);
    assert_eq!(*sub_matches.get_one::<u64>("timeout").unwrap(), 5);
    assert_eq!(sub_matches.get_one::<String>("format").unwrap(), "text");
    assert!(sub_matches.get_one::<PathBuf>("report").is_none());
    assert!(!sub_matches.get_flag("no-progress"));
}

#[test]
fn test_check_overrides() {
    let matches = command_argument_builder().get_matches_from([
        "linkvet", "check", "-i", "in.txt", "-o", "out.txt", "-t", "5", "--timeout", "2",
        "--report", "-f", "json",
    ]);
    let (_, sub_matches) = matches.subcommand().unwrap();

    assert_eq!(
        sub_matches.get_one::<PathBuf>("input").unwrap(),
        &PathBuf::from("in.txt")
    );
    assert_eq!(
        sub_matches.get_one::<PathBuf>("output").unwrap(),
        &PathBuf::from("out.txt")
    );
    assert_eq!(*sub_matches.get_one::<usize>("threads").unwrap(), 5);
    assert_eq!(*sub_matches.get_one::<u64>("timeout").unwrap(), 2);
    assert_eq!(sub_matches.get_one::<String>("format").unwrap(), "json");
    // Bare --report falls back to the stdout sentinel.
    assert_eq!(
        sub_matches.get_one::<PathBuf>("report").unwrap(),
        &PathBuf::from("-")
    );
}

#[test]
fn test_check_report_destination() {
    let matches = command_argument_builder().get_matches_from([
        "linkvet", "check", "--report", "summary.json", "-f", "json",
    ]);
    let (_, sub_matches) = matches.subcommand().unwrap();

    assert_eq!(
        sub_matches.get_one::<PathBuf>("report").unwrap(),
        &PathBuf::from("summary.json")
    );
}

#[test]
fn test_deliver_report_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("summary.txt");

    deliver_report("checked: 3\nreachable: 2\n", &dest, true).unwrap();

    assert_eq!(
        fs::read_to_string(&dest).unwrap(),
        "checked: 3\nreachable: 2\n"
    );
}

#[test]
fn test_deliver_report_stdout_sentinel_writes_no_file() {
    deliver_report("checked: 0\n", Path::new("-"), true).unwrap();
    assert!(!Path::new("-").exists());
}

#[test]
fn test_deliver_report_unwritable_destination_fails() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("missing").join("summary.txt");

    assert!(deliver_report("checked: 0\n", &dest, true).is_err());
}

#[test]
fn test_check_rejects_unknown_format() {
    let result = command_argument_builder().try_get_matches_from([
        "linkvet", "check", "-f", "yaml",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_quiet_flag() {
    let matches = command_argument_builder().get_matches_from(["linkvet", "-q", "check"]);
    assert!(matches.get_flag("quiet"));
}

#[test]
fn test_expand_path_tilde() {
    let expanded = expand_path(Path::new("~/urls.txt"));
    assert!(!expanded.to_string_lossy().starts_with('~'));
    assert!(expanded.to_string_lossy().ends_with("urls.txt"));
}

#[test]
fn test_expand_path_absolute_unchanged() {
    let expanded = expand_path(Path::new("/tmp/urls.txt"));
    assert_eq!(expanded, PathBuf::from("/tmp/urls.txt"));
}
