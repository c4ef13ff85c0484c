//! Kubernetes client library versions compiled into this binary

use kubepeek_types::LinkedModule;

/// `name=version` pairs written by the build script, comma separated
const CLIENT_MODULES: &str = env!("KUBEPEEK_CLIENT_MODULES");

pub fn linked_modules() -> Vec<LinkedModule> {
    parse_modules(CLIENT_MODULES)
}

fn parse_modules(encoded: &'static str) -> Vec<LinkedModule> {
    encoded
        .split(',')
        .filter_map(|entry| entry.split_once('='))
        .filter(|(name, version)| !name.is_empty() && !version.is_empty())
        .map(|(name, version)| LinkedModule::new(name, version))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modules() {
        let modules = parse_modules("kube=0.98.0,k8s-openapi=0.24.0");
        assert_eq!(
            modules,
            vec![
                LinkedModule::new("kube", "0.98.0"),
                LinkedModule::new("k8s-openapi", "0.24.0"),
            ]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_modules("").is_empty());
        assert!(parse_modules("kube=,=1.0").is_empty());
    }

    #[test]
    fn test_build_recorded_kube() {
        // The workspace lockfile always pins kube
        assert!(linked_modules().iter().any(|m| m.name == "kube"));
    }
}
