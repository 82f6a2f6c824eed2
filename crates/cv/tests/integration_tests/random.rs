use crate::common::CvTest;

#[test]
fn test_random_is_reproducible_with_seed() {
    let test = CvTest::new();
    let first = test.cv(&["random", "--seed", "7"]);
    let second = test.cv(&["random", "--seed", "7"]);
    first.assert_success();
    second.assert_success();
    assert_eq!(first.stdout(), second.stdout());
}

#[test]
fn test_random_equal() {
    let test = CvTest::new();
    let output = test.cv(&["random", "--equal"]);
    output.assert_success();

    let stdout = output.stdout();
    assert!(stdout.contains(" is equal to "), "{stdout}");
    assert!(stdout.trim_end().ends_with("The result was 0"), "{stdout}");
}

#[test]
fn test_random_json_equal() {
    let test = CvTest::new();
    let output = test.cv(&["--format", "json", "random", "--equal", "--segments", "3"]);
    output.assert_success();

    let value: serde_json::Value = serde_json::from_str(output.stdout().trim_end()).unwrap();
    assert_eq!(value["left"], value["right"]);
    assert_eq!(value["result"], 0);
    assert_eq!(value["left"].as_str().unwrap().split('.').count(), 3);
}

#[test]
fn test_random_segment_count_out_of_range() {
    let test = CvTest::new();
    test.cv(&["random", "--segments", "5"])
        .assert_failure()
        .assert_stderr_contains("Cannot create a version with 5 segments, it must be between 1 and 4");
}

#[test]
fn test_random_single_segment_warns() {
    let test = CvTest::new();
    let output = test.cv(&["random", "--segments", "1", "--seed", "1"]);
    output.assert_success();
    output.assert_stderr_contains("Versions with fewer than 2 segments cannot be parsed back by cv");
}
