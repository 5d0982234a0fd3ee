use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=RUSTC");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = match Command::new(&rustc).arg("--version").output() {
        // "rustc 1.80.0 (051478957 2024-07-21)"
        Ok(output) if output.status.success() => String::from_utf8_lossy(&output.stdout)
            .split_whitespace()
            .nth(1)
            .unwrap_or("unknown")
            .to_string(),
        Ok(output) => {
            println!("cargo:warning={rustc} --version exited with {}", output.status);
            "unknown".to_string()
        }
        Err(e) => {
            println!("cargo:warning=Failed to run {rustc} --version: {e}");
            "unknown".to_string()
        }
    };

    println!("cargo:rustc-env=RUSTC_VERSION={version}");
}
