use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn ubike(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ubike"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to spawn ubike")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn station(sno: &str, sna: &str, snaen: &str, sarea: &str, sareaen: &str) -> String {
    format!(
        r#"{{"sno":"{sno}","sna":"{sna}","snaen":"{snaen}","ar":"","aren":"","sarea":"{sarea}","sareaen":"{sareaen}","available_rent_bikes":2,"available_return_bikes":8}}"#
    )
}

fn write_sample(dir: &Path, items: &[String]) {
    fs::write(dir.join("sample_data.json"), format!("[{}]", items.join(","))).unwrap();
}

#[test]
fn no_arguments_prints_usage_and_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let out = ubike(dir.path(), &[]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("Usage:\n"));
    assert!(text.contains("Examples:\n"));
}

#[test]
fn search_reads_default_snapshot_from_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_sample(
        dir.path(),
        &[station(
            "500101001",
            "YouBike2.0_Tech Building",
            "YouBike2.0_Technology Building",
            "大安區",
            "Daan Dist.",
        )],
    );

    let out = ubike(dir.path(), &["TECH"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("Found 1 stations matching 'TECH':\n"));
    assert!(text.contains("  Name: Tech Building\n"));
}

#[test]
fn multi_word_query_is_joined() {
    let dir = tempfile::tempdir().unwrap();
    write_sample(
        dir.path(),
        &[station("1", "YouBike2.0_x", "YouBike2.0_Tech Building", "大安區", "Daan Dist.")],
    );
    let out = ubike(dir.path(), &["tech", "building"]);
    assert!(stdout(&out).starts_with("Found 1 stations matching 'tech building':"));
}

#[test]
fn no_matches_is_still_success() {
    let dir = tempfile::tempdir().unwrap();
    write_sample(dir.path(), &[station("1", "a", "a", "大安區", "Daan Dist.")]);
    let out = ubike(dir.path(), &["kaohsiung"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Found 0 stations matching 'kaohsiung':\n\n");
}

#[test]
fn areas_are_sorted_and_unique() {
    let dir = tempfile::tempdir().unwrap();
    write_sample(
        dir.path(),
        &[
            station("1", "a", "a", "大安區", "Daan Dist."),
            station("2", "b", "b", "信義區", "Xinyi Dist."),
            station("3", "c", "c", "大安區", "Daan Dist."),
        ],
    );
    let out = ubike(dir.path(), &["--areas"]);
    assert!(out.status.success());

    let text = stdout(&out);
    let mut expected = vec!["  信義區 (Xinyi Dist.)", "  大安區 (Daan Dist.)"];
    expected.sort_unstable();
    let lines: Vec<&str> = text.lines().skip(1).collect();
    assert_eq!(lines, expected);
}

#[test]
fn truncates_after_twenty() {
    let dir = tempfile::tempdir().unwrap();
    let items: Vec<String> = (0..25)
        .map(|i| station(&i.to_string(), "YouBike2.0_站", "YouBike2.0_Stop", "中山區", "Zhongshan Dist."))
        .collect();
    write_sample(dir.path(), &items);

    let text = stdout(&ubike(dir.path(), &["stop"]));
    assert_eq!(text.matches("  ID: ").count(), 20);
    assert!(text.ends_with("... and 5 more\n"));
}

#[test]
fn non_array_snapshot_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("sample_data.json"), r#"{"not":"an array"}"#).unwrap();

    let out = ubike(dir.path(), &["daan"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Expected a JSON array"));
}

#[test]
fn missing_snapshot_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = ubike(dir.path(), &["--areas"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("sample_data.json"));
}

#[test]
fn malformed_record_names_field() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("data.json"), r#"[{"sno":"1"}]"#).unwrap();
    let out = ubike(dir.path(), &["--data", "data.json", "x"]);
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr).into_owned();
    assert!(err.contains("index 0"), "{err}");
    assert!(err.contains("`sna`"), "{err}");
}

#[test]
fn areas_followed_by_words_searches_the_whole_line() {
    let dir = tempfile::tempdir().unwrap();
    write_sample(dir.path(), &[station("1", "a", "Lane 5", "大安區", "Daan Dist.")]);
    let out = ubike(dir.path(), &["--areas", "lane"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Found 0 stations matching '--areas lane':\n\n");
}

fn placed(sno: &str, snaen: &str, lat: f64, lng: f64) -> String {
    format!(
        r#"{{"sno":"{sno}","sna":"x","snaen":"{snaen}","ar":"","aren":"","sarea":"大安區","sareaen":"Daan Dist.","available_rent_bikes":2,"available_return_bikes":8,"latitude":{lat},"longitude":{lng}}}"#
    )
}

#[test]
fn favourite_is_not_repeated_in_nearest_list() {
    let dir = tempfile::tempdir().unwrap();
    write_sample(
        dir.path(),
        &[
            placed("1", "YouBike2.0_Home", 25.0300, 121.5358),
            placed("2", "YouBike2.0_Park", 25.0310, 121.5358),
            placed("3", "YouBike2.0_Far", 25.0500, 121.5358),
        ],
    );

    let out = ubike(dir.path(), &["--station", "1", "--near", "25.03,121.5358"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert_eq!(text.matches("  ID: 1\n").count(), 1);

    let (favourites, nearest) = text.split_once("Nearest 2 other stations").unwrap();
    assert!(favourites.contains("  English: Home\n"));
    assert!(favourites.contains("  Distance: 0 m"));
    assert!(nearest.contains("  English: Park\n"));
    assert!(nearest.contains("  English: Far\n"));
    assert!(!nearest.contains("  English: Home\n"));
}
