// File: crates/heatmap-core/build.rs
// Summary: Links the extra system libraries Skia/ICU need on Windows targets.

fn main() {
    // Build scripts run on the host; inspect the target through cargo's env instead of cfg.
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os == "windows" {
        // RegOpenKeyExW, RegQueryInfoKeyW and friends live in advapi32.
        println!("cargo:rustc-link-lib=advapi32");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
