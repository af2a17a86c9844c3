use std::process::{Command, Output};

fn lcd(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lcd"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn lcd")
}

fn stdout(o: &Output) -> String {
    String::from_utf8(o.stdout.clone()).unwrap()
}

#[test]
fn default_size_is_two() {
    let out = lcd(&["0123"]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        concat!(
            " --        --   --  \n",
            "|  |    |    |    | \n",
            "|  |    |    |    | \n",
            "           --   --  \n",
            "|  |    | |       | \n",
            "|  |    | |       | \n",
            " --        --   --  \n",
        )
    );
}

#[test]
fn size_one() {
    let out = lcd(&["-s", "1", "6789"]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        concat!(
            " -   -   -   -  \n",
            "|     | | | | | \n",
            " -       -   -  \n",
            "| |   | | |   | \n",
            " -       -   -  \n",
        )
    );
}

#[test]
fn line_count_follows_size() {
    for size in ["1", "3", "7"] {
        let out = lcd(&["-s", size, "905"]);
        let h: usize = size.parse().unwrap();
        assert_eq!(stdout(&out).lines().count(), 3 + 2 * h);
    }
}

#[test]
fn letter_is_rejected_without_output() {
    let out = lcd(&["12a"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("invalid digit 'a'"), "{err}");
}

#[test]
fn dash_is_rejected() {
    let out = lcd(&["-"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid digit '-'"));
}

#[test]
fn zero_size_is_rejected() {
    let out = lcd(&["-s", "0", "8"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid size '0'"));
}

#[test]
fn negative_size_is_rejected() {
    let out = lcd(&["-s", "-2", "8"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid size '-2'"));
}

#[test]
fn huge_size_is_rejected_cleanly() {
    for size in ["1001", "100000000000", "18446744073709551615"] {
        let out = lcd(&["-s", size, "1"]);
        assert_eq!(out.status.code(), Some(1), "size {size}");
        assert!(out.stdout.is_empty());
        let err = String::from_utf8_lossy(&out.stderr);
        assert!(err.contains(&format!("invalid size '{size}'")), "{err}");
        assert!(!err.contains("panicked"), "{err}");
    }
}

#[test]
fn plus_signed_size_is_rejected() {
    let out = lcd(&["-s", "+2", "8"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_digits_fails() {
    assert!(!lcd(&[]).status.success());
}

#[test]
fn explicit_width_wraps() {
    let out = lcd(&["--width", "9", "-s", "1", "678"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert_eq!(text.split("\n\n").count(), 2);
    assert!(text.lines().all(|l| l.len() <= 9));
}

#[test]
fn color_output_is_escaped() {
    let out = lcd(&["--color", "green", "-s", "1", "8"]);
    assert!(out.status.success());
    assert!(stdout(&out).lines().all(|l| l.starts_with("\x1b[32m")));
}

#[test]
fn bad_color_fails() {
    let out = lcd(&["--color", "#zz", "8"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn colors_subcommand_lists_names() {
    let out = lcd(&["colors"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("amber"));
}
