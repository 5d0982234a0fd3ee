use axum::{extract::State, response::Json};
use serde::Serialize;
use std::sync::Arc;
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};

use crate::api::{manifest, server::AppState};

/// System info response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfoResponse {
    /// Application name
    pub name: String,
    /// Application version
    pub version: String,
    /// Seconds since the server started
    pub uptime: f64,
    /// Process memory
    pub memory: MemoryUsage,
    /// Compiler that built the binary
    pub rust_version: String,
    /// Operating system
    pub platform: String,
    /// Declared dependency names
    pub dependencies: Vec<String>,
}

/// Process memory, formatted as `"<MB> MB"`
#[derive(Debug, Serialize)]
pub struct MemoryUsage {
    pub rss: String,
    #[serde(rename = "virtual")]
    pub virtual_memory: String,
}

/// GET /info
pub async fn system_info(State(state): State<Arc<AppState>>) -> Json<SystemInfoResponse> {
    let (rss, virtual_memory) = process_memory();

    Json(SystemInfoResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        memory: MemoryUsage {
            rss: format_megabytes(rss),
            virtual_memory: format_megabytes(virtual_memory),
        },
        rust_version: rustc_version(),
        platform: std::env::consts::OS.to_string(),
        dependencies: manifest::dependency_names().to_vec(),
    })
}

/// Resident and virtual size of this process in bytes; zeros when the
/// platform does not expose them.
fn process_memory() -> (u64, u64) {
    let Ok(pid) = sysinfo::get_current_pid() else {
        return (0, 0);
    };

    let mut system = System::new();
    system.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        true,
        ProcessRefreshKind::nothing().with_memory(),
    );

    system
        .process(pid)
        .map(|process| (process.memory(), process.virtual_memory()))
        .unwrap_or((0, 0))
}

fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// Version of the compiler that built this binary, set by `build.rs`.
fn rustc_version() -> String {
    env!("RUSTC_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_megabytes(0), "0.00 MB");
        assert_eq!(format_megabytes(1024 * 1024), "1.00 MB");
        assert_eq!(format_megabytes(3 * 1024 * 1024 / 2), "1.50 MB");
    }

    #[tokio::test]
    async fn test_system_info() {
        let state = Arc::new(AppState::new("http://127.0.0.1:9/repo".to_string()).unwrap());

        let Json(info) = system_info(State(state)).await;

        assert_eq!(info.name, env!("CARGO_PKG_NAME"));
        assert!(info.uptime >= 0.0);
        assert!(info.memory.rss.ends_with(" MB"));
        assert_eq!(info.platform, std::env::consts::OS);
        assert!(!info.rust_version.is_empty());
        // the compiler version, not the manifest's minimum
        if info.rust_version != "unknown" {
            assert!(info.rust_version.starts_with("1."));
            assert!(info.rust_version.split('.').count() >= 3);
        }
        assert!(info.dependencies.iter().any(|d| d == "tokio"));

        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("rustVersion").is_some());
        assert!(json["memory"].get("virtual").is_some());
    }
}
