//! Build script for motionplus-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates motionplus.toml and generates the embedded configuration

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use motionplus_core::config::{
    ConfigError, WatchConfig, MAX_DECIMAL_DIGITS, MAX_INTERVAL_MS, MIN_INTERVAL_MS,
};

/// Top-level tables understood by the firmware
const KNOWN_SECTIONS: &[&str] = &["display", "sampling", "clock"];

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    setup_linker(&out_dir);
    generate_config(&out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and validate motionplus.toml, then emit `watch_config()` into OUT_DIR
fn generate_config(out_dir: &Path) {
    println!("cargo:rerun-if-changed=motionplus.toml");

    let config_path = Path::new("motionplus.toml");

    if !config_path.exists() {
        fail(
            "motionplus.toml not found!",
            &[
                "The firmware requires a motionplus.toml configuration file.",
                "Please create one in the motionplus-firmware directory.",
            ],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read motionplus.toml", &[e.to_string().as_str()]),
    };

    // Syntax first, so the error points at the TOML rather than a field
    let raw: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail("Invalid TOML syntax in motionplus.toml", &lines(&e.to_string())),
    };
    warn_unknown_sections(&raw);

    let config: WatchConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail("Invalid setting in motionplus.toml", &lines(&e.to_string())),
    };

    if let Err(e) = config.validate() {
        fail("Value out of range in motionplus.toml", &[describe(e).as_str()]);
    }

    let generated = format!(
        "// Generated by build.rs from motionplus.toml\n\
         \n\
         /// Watch configuration embedded at build time\n\
         pub fn watch_config() -> WatchConfig {{\n\
         \x20   WatchConfig {{\n\
         \x20       display: DisplayConfig {{\n\
         \x20           decimal_digits: {digits},\n\
         \x20       }},\n\
         \x20       sampling: SamplingConfig {{\n\
         \x20           pedometer_interval_ms: {pedometer},\n\
         \x20           altimeter_interval_ms: {altimeter},\n\
         \x20       }},\n\
         \x20       // {start}\n\
         \x20       clock: ClockConfig::from_timestamp({timestamp}),\n\
         \x20   }}\n\
         }}\n",
        digits = config.display.decimal_digits,
        pedometer = config.sampling.pedometer_interval_ms,
        altimeter = config.sampling.altimeter_interval_ms,
        start = config.clock.start,
        timestamp = config.clock.timestamp(),
    );
    fs::write(out_dir.join("watch_config.rs"), generated).unwrap();

    println!("cargo:warning=motionplus.toml validated successfully");
}

fn warn_unknown_sections(raw: &toml::Value) {
    let Some(table) = raw.as_table() else {
        return;
    };
    for key in table.keys() {
        if !KNOWN_SECTIONS.contains(&key.as_str()) {
            println!("cargo:warning=motionplus.toml: ignoring unknown section [{key}]");
        }
    }
}

fn describe(error: ConfigError) -> String {
    match error {
        ConfigError::DecimalDigits(digits) => format!(
            "display.decimal_digits = {digits}, must be at most {MAX_DECIMAL_DIGITS}"
        ),
        ConfigError::PedometerInterval(ms) => format!(
            "sampling.pedometer_interval_ms = {ms}, must be {MIN_INTERVAL_MS}-{MAX_INTERVAL_MS}"
        ),
        ConfigError::AltimeterInterval(ms) => format!(
            "sampling.altimeter_interval_ms = {ms}, must be {MIN_INTERVAL_MS}-{MAX_INTERVAL_MS}"
        ),
    }
}

fn lines(msg: &str) -> Vec<&str> {
    msg.lines().collect()
}

/// Abort the build with a boxed error message
fn fail(title: &str, details: &[&str]) -> ! {
    let body = details
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<58} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
