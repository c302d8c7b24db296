//! Build script for masslog
//!
//! Embeds the build timestamp used in the client's User-Agent.

fn main() {
    // Only rerun when src/ files change (not on every cargo build)
    println!("cargo:rerun-if-changed=src");

    let now = chrono::Utc::now();
    let timestamp = now.format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=MASSLOG_BUILD_TIMESTAMP={}", timestamp);
}
