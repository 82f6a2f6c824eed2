use crate::common::CvTest;

#[test]
fn test_add_complete_versions() {
    let test = CvTest::new();
    let output = test.cv(&["add", "1.2.3.4", "1.1.1.1"]);
    output.assert_success();
    insta::assert_snapshot!(output.stdout().trim_end(), @"1.2.3.4 + 1.1.1.1 = 2.3.4.5");
}

#[test]
fn test_add_partial_versions() {
    let test = CvTest::new();
    let output = test.cv(&["add", "1.2", "3.4.5"]);
    output.assert_success();
    insta::assert_snapshot!(output.stdout().trim_end(), @"1.2 + 3.4.5 = 4.6");
}

#[test]
fn test_add_json() {
    let test = CvTest::new();
    let output = test.cv(&["--format", "json", "add", "10.20", "5.5"]);
    output.assert_success();
    insta::assert_snapshot!(output.stdout().trim_end(), @r#"{"left":"10.20","right":"5.5","sum":"15.25"}"#);
}

#[test]
fn test_add_overflow() {
    let test = CvTest::new();
    test.cv(&["add", "50.0", "50.0"])
        .assert_failure()
        .assert_stderr_contains("Segment major cannot be 100, it must be between 0 and 99");
}
