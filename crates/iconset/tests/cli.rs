//! Runs the built `iconset` binary and checks its exit status and output.

use std::path::Path;
use std::process::{Command, Output};

/// Run the binary with a throwaway home so no user config is picked up.
fn iconset(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_iconset"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn missing_input_prints_usage_and_exits_1() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("out");
    let output = iconset(tmp.path(), &["-o", out.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("no input path provided"), "{stdout}");
    assert!(stdout.contains("-i"));
    assert!(stdout.contains("Usage:"), "{stdout}");
    assert!(!out.exists());
}

#[test]
fn missing_output_prints_usage_and_exits_1() {
    let tmp = tempfile::tempdir().unwrap();
    let output = iconset(tmp.path(), &["-i", "logo.png"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("no output path provided"), "{stdout}");
    assert!(stdout.contains("Usage:"), "{stdout}");
}

#[test]
fn unsupported_source_exits_nonzero() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("logo.gif");
    std::fs::write(&input, b"GIF89a").unwrap();
    let out = tmp.path().join("out");

    let output = iconset(
        tmp.path(),
        &["-i", input.to_str().unwrap(), "-o", out.to_str().unwrap()],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported format"), "{stderr}");
    assert!(!out.join("AppIcon.appiconset").exists());
}

#[test]
fn png_source_writes_icon_set() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("logo.png");
    image::RgbaImage::from_pixel(64, 64, image::Rgba([200, 30, 30, 255]))
        .save_with_format(&input, image::ImageFormat::Png)
        .unwrap();
    let out = tmp.path().join("out");

    let output = iconset(
        tmp.path(),
        &["-i", input.to_str().unwrap(), "-o", out.to_str().unwrap()],
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let set = out.join("AppIcon.appiconset");
    assert!(set.join("Contents.json").is_file());
    assert!(set.join("1024.png").is_file());
}
