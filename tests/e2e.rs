use std::process::Command;

fn run(fixture: &str, args: &[&str]) -> (String, String, Option<i32>) {
    let path = format!("tests/fixtures/{fixture}");
    let output = Command::new(env!("CARGO_BIN_EXE_promo-strategy"))
        .arg(&path)
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run binary");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.code())
}

#[test]
fn no_promotion() {
    let (stdout, stderr, code) = run("cart.csv", &["John Doe", "0"]);

    assert_eq!(code, Some(0));
    assert!(stderr.is_empty());
    assert_eq!(stdout.trim_end(), "<Order total: 42.00 due: 42.00>");
}

#[test]
fn fidelity_promotion() {
    let (stdout, _, code) = run("cart.csv", &["Ann Smith", "1100", "fidelity:10"]);

    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim_end(), "<Order total: 42.00 due: 37.80>");
}

#[test]
fn bulk_item_promotion() {
    let (stdout, _, _) = run("banana_cart.csv", &["John Doe", "0", "bulk:10"]);
    assert_eq!(stdout.trim_end(), "<Order total: 30.00 due: 28.50>");
}

#[test]
fn best_of_several_promotions() {
    let (stdout, _, code) = run(
        "long_order.csv",
        &["John Doe", "0", "fidelity:10", "bulk:10", "large:7"],
    );

    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim_end(), "<Order total: 10.00 due: 9.30>");
}

#[test]
fn errors_warn_but_do_not_block() {
    let (stdout, stderr, code) = run("with_errors.csv", &["John Doe", "0"]);

    assert_eq!(code, Some(0));
    assert!(stderr.contains("line 3: failed to parse row"));
    assert!(stderr.contains("line 4: line item 'cherry' has zero quantity"));
    assert_eq!(stdout.trim_end(), "<Order total: 27.00 due: 27.00>");
}

#[test]
fn unrepresentable_prices_are_skipped() {
    let (stdout, stderr, code) = run("bad_prices.csv", &["John Doe", "0", "bulk:10"]);

    assert_eq!(code, Some(0));
    assert!(stderr.contains("line 3: amount inf is not a finite value within range"));
    assert!(stderr.contains("line 4: amount NaN is not a finite value within range"));
    assert!(stderr.contains("line 5: amount 1000000000"));
    assert!(stderr.contains("line 6: line item 'yacht' total exceeds"));
    assert_eq!(stdout.trim_end(), "<Order total: 27.00 due: 27.00>");
}

#[test]
fn unknown_promotion_fails() {
    let (stdout, stderr, code) = run("cart.csv", &["John Doe", "0", "coupon:10"]);

    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.contains("unknown promotion 'coupon'"));
}

#[test]
fn missing_arguments_print_usage() {
    let (_, stderr, code) = run("cart.csv", &[]);

    assert_eq!(code, Some(2));
    assert!(stderr.contains("usage: promo-strategy"));
}
