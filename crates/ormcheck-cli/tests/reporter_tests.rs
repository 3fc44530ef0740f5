use super::*;

fn sample() -> Vec<Diagnostic> {
    vec![
        Diagnostic::error("src/A.php", 12, "first problem", 9001),
        Diagnostic::error("", 3, "second problem", 9002),
    ]
}

#[test]
fn test_render_plain_text() {
    let reporter = Reporter::new(false);
    assert_eq!(
        reporter.render(&sample()),
        "src/A.php:12: first problem\n<unknown>:3: second problem"
    );
}

#[test]
fn test_summary() {
    let reporter = Reporter::new(false);
    assert_eq!(reporter.summary(0, 1), "No errors in 1 class.");
    assert_eq!(reporter.summary(1, 4), "Found 1 error in 4 classes.");
    assert_eq!(reporter.summary(3, 2), "Found 3 errors in 2 classes.");
}

#[test]
fn test_render_json() {
    let json = Reporter::render_json(&sample()).expect("serializable");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value[0]["file"], "src/A.php");
    assert_eq!(value[0]["line"], 12);
    assert_eq!(value[0]["message"], "first problem");
    assert_eq!(value[1]["identifier"], "doctrine.associationType");
}
