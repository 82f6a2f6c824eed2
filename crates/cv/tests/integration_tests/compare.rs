use crate::common::CvTest;

#[test]
fn test_compare_greater() {
    let test = CvTest::new();
    let output = test.cv(&["compare", "2.5.1", "2.4.1.6"]);
    output.assert_success();
    insta::assert_snapshot!(output.stdout().trim_end(), @"2.5.1 is greater than 2.4.1.6: The result was 1");
}

#[test]
fn test_compare_trailing_zeros_are_equal() {
    let test = CvTest::new();
    let output = test.cv(&["compare", "2.0", "2.0.0.0"]);
    output.assert_success();
    insta::assert_snapshot!(output.stdout().trim_end(), @"2.0 is equal to 2.0.0.0: The result was 0");
}

#[test]
fn test_compare_less() {
    let test = CvTest::new();
    let output = test.cv(&["compare", "1.9.99", "1.10"]);
    output.assert_success();
    insta::assert_snapshot!(output.stdout().trim_end(), @"1.9.99 is less than 1.10: The result was -1");
}

#[test]
fn test_compare_json() {
    let test = CvTest::new();
    let output = test.cv(&["compare", "--format", "json", "2.5.1", "2.4.1.6"]);
    output.assert_success();
    insta::assert_snapshot!(output.stdout().trim_end(), @r#"{"left":"2.5.1","right":"2.4.1.6","result":1}"#);
}

#[test]
fn test_compare_format_from_env() {
    let test = CvTest::new().with_env("CV_FORMAT", "json");
    let output = test.cv(&["compare", "3.0", "3.0.1"]);
    output.assert_success();
    insta::assert_snapshot!(output.stdout().trim_end(), @r#"{"left":"3.0","right":"3.0.1","result":-1}"#);
}

#[test]
fn test_compare_custom_separator() {
    let test = CvTest::new();
    let output = test.cv(&["compare", "-s", "-", "1-2", "1-2-0"]);
    output.assert_success();
    insta::assert_snapshot!(output.stdout().trim_end(), @"1-2 is equal to 1-2-0: The result was 0");
}

#[test]
fn test_compare_separator_from_env() {
    let test = CvTest::new().with_env("CV_SEPARATOR", "_");
    let output = test.cv(&["compare", "4_1", "4_0_9"]);
    output.assert_success();
    insta::assert_snapshot!(output.stdout().trim_end(), @"4_1 is greater than 4_0_9: The result was 1");
}

#[test]
fn test_compare_invalid_segment() {
    let test = CvTest::new();
    test.cv(&["compare", "1.2", "1.x"])
        .assert_failure()
        .assert_stderr_contains("Invalid segment in version: x");
}

#[test]
fn test_compare_single_segment_fails() {
    let test = CvTest::new();
    test.cv(&["compare", "2", "2.0.0.0"])
        .assert_failure()
        .assert_stderr_contains("Malformed version number string 2");
}

#[test]
fn test_compare_too_many_segments() {
    let test = CvTest::new();
    test.cv(&["compare", "1.2.3.4.5", "1.2"])
        .assert_failure()
        .assert_stderr_contains("Version string can only have at most 4 segments: 1.2.3.4.5");
}

#[test]
fn test_compare_segment_out_of_range() {
    let test = CvTest::new();
    test.cv(&["compare", "1.100", "1.2"])
        .assert_failure()
        .assert_stderr_contains("Segment minor cannot be 100, it must be between 0 and 99");
}

#[test]
fn test_compare_huge_segment_is_out_of_range() {
    let test = CvTest::new();
    test.cv(&["compare", "1.99999999999", "1.2"])
        .assert_failure()
        .assert_stderr_contains("Segment minor cannot be 99999999999, it must be between 0 and 99");
}
