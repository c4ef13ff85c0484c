//! Records the versions of the Kubernetes client crates locked for this build.

use std::fs;
use std::path::Path;

/// Crates reported by `--show-modules`
const CLIENT_CRATES: &[&str] = &["kube", "kube-client", "kube-core", "k8s-openapi"];

fn main() {
    let lockfile = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.lock");
    println!("cargo:rerun-if-changed={}", lockfile.display());

    let modules = fs::read_to_string(&lockfile)
        .ok()
        .and_then(|content| content.parse::<toml::Table>().ok())
        .map(|lock| locked_versions(&lock))
        .unwrap_or_default();

    let encoded = modules
        .iter()
        .map(|(name, version)| format!("{name}={version}"))
        .collect::<Vec<_>>()
        .join(",");
    println!("cargo:rustc-env=KUBEPEEK_CLIENT_MODULES={encoded}");
}

fn locked_versions(lock: &toml::Table) -> Vec<(String, String)> {
    let Some(packages) = lock.get("package").and_then(|p| p.as_array()) else {
        return Vec::new();
    };

    CLIENT_CRATES
        .iter()
        .filter_map(|name| {
            let package = packages
                .iter()
                .find(|p| p.get("name").and_then(|n| n.as_str()) == Some(name))?;
            let version = package.get("version")?.as_str()?;
            Some((name.to_string(), version.to_string()))
        })
        .collect()
}
