//! Connection configuration resolution and client construction

use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use tracing::debug;

use crate::error::{Error, Result};
use kubepeek_types::ClusterSource;

/// Resolve the connection configuration for `source` without touching the network.
///
/// A file source reads only the given path; `$KUBECONFIG` and `~/.kube/config`
/// are never merged in. The context, when set, replaces `current-context`.
pub async fn resolve_config(source: &ClusterSource) -> Result<Config> {
    match source {
        ClusterSource::FilePath { path, context } => {
            let load_error = |source| Error::ConfigurationLoad {
                path: path.clone(),
                source,
            };

            let kubeconfig = Kubeconfig::read_from(path).map_err(load_error)?;
            let options = KubeConfigOptions {
                context: context.clone(),
                ..Default::default()
            };

            let config = Config::from_custom_kubeconfig(kubeconfig, &options)
                .await
                .map_err(load_error)?;

            debug!(
                path = %path.display(),
                context = context.as_deref().unwrap_or("<current>"),
                cluster_url = %config.cluster_url,
                "loaded kubeconfig"
            );
            Ok(config)
        }
        ClusterSource::Ambient => {
            let config = Config::incluster().map_err(Error::AmbientConfigurationUnavailable)?;
            debug!(cluster_url = %config.cluster_url, "loaded in-cluster config");
            Ok(config)
        }
    }
}

/// Build a client bound to an already resolved configuration
pub fn build_client(config: Config) -> Result<Client> {
    Client::try_from(config).map_err(Error::ClientConstruction)
}

/// Resolve the configuration for `source` and build a client from it
pub async fn connect(source: &ClusterSource) -> Result<Client> {
    let config = resolve_config(source).await?;
    build_client(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    const KUBECONFIG: &str = r#"
apiVersion: v1
kind: Config
current-context: alpha
clusters:
- name: alpha
  cluster:
    server: http://10.0.0.1:8080
- name: beta
  cluster:
    server: http://10.0.0.2:8081
users:
- name: admin
  user:
    token: not-a-real-token
contexts:
- name: alpha
  context:
    cluster: alpha
    user: admin
- name: beta
  context:
    cluster: beta
    user: admin
    namespace: observability
"#;

    fn write_kubeconfig(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn file_source(file: &tempfile::NamedTempFile, context: Option<&str>) -> ClusterSource {
        ClusterSource::FilePath {
            path: file.path().to_path_buf(),
            context: context.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_named_context_selects_its_endpoint() {
        let file = write_kubeconfig(KUBECONFIG);
        let config = resolve_config(&file_source(&file, Some("beta")))
            .await
            .unwrap();

        assert_eq!(config.cluster_url.host(), Some("10.0.0.2"));
        assert_eq!(config.cluster_url.port_u16(), Some(8081));
        assert_eq!(config.default_namespace, "observability");
    }

    #[tokio::test]
    async fn test_current_context_used_without_override() {
        let file = write_kubeconfig(KUBECONFIG);
        let config = resolve_config(&file_source(&file, None)).await.unwrap();

        assert_eq!(config.cluster_url.host(), Some("10.0.0.1"));
        assert_eq!(config.cluster_url.port_u16(), Some(8080));
        assert_eq!(config.default_namespace, "default");
    }

    #[tokio::test]
    async fn test_unknown_context_is_load_error() {
        let file = write_kubeconfig(KUBECONFIG);
        let err = resolve_config(&file_source(&file, Some("gamma")))
            .await
            .unwrap_err();

        match err {
            Error::ConfigurationLoad { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_load_error() {
        let source = ClusterSource::FilePath {
            path: PathBuf::from("/nonexistent/kubepeek/kubeconfig.yaml"),
            context: None,
        };
        let err = resolve_config(&source).await.unwrap_err();

        assert!(matches!(err, Error::ConfigurationLoad { .. }));
        assert!(
            err.to_string()
                .contains("/nonexistent/kubepeek/kubeconfig.yaml")
        );
    }

    #[tokio::test]
    async fn test_malformed_file_is_load_error() {
        let file = write_kubeconfig("clusters: [this is: not: valid");
        let err = resolve_config(&file_source(&file, None))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ConfigurationLoad { .. }));
    }

    #[tokio::test]
    async fn test_ambient_unavailable_outside_cluster() {
        // Running inside a pod would give us a real identity
        if std::env::var_os("KUBERNETES_SERVICE_HOST").is_some() {
            return;
        }

        let err = resolve_config(&ClusterSource::Ambient).await.unwrap_err();
        assert!(matches!(err, Error::AmbientConfigurationUnavailable(_)));
    }

    #[tokio::test]
    async fn test_connect_builds_client_for_context() {
        let file = write_kubeconfig(KUBECONFIG);
        let client = connect(&file_source(&file, Some("beta"))).await.unwrap();

        assert_eq!(client.default_namespace(), "observability");
    }
}
