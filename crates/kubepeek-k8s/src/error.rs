use std::path::PathBuf;
use std::time::Duration;

use kube::config::{InClusterError, KubeconfigError};

/// Errors raised while bootstrapping the client or querying the cluster
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Kubeconfig file missing, malformed, or the requested context is unknown
    #[error("unable to load kubeconfig from {}", .path.display())]
    ConfigurationLoad {
        path: PathBuf,
        #[source]
        source: KubeconfigError,
    },

    /// No kubeconfig given and not running inside a cluster
    #[error("unable to load in-cluster config")]
    AmbientConfigurationUnavailable(#[source] InClusterError),

    #[error("unable to create a client")]
    ClientConstruction(#[source] kube::Error),

    #[error("unable to determine Kubernetes version")]
    ServerVersion(#[source] kube::Error),

    #[error("unable to get nodes")]
    NodeList(#[source] kube::Error),

    #[error("unable to get namespaces")]
    NamespaceList(#[source] kube::Error),

    /// The shared request deadline passed before `operation` completed
    #[error("{operation} did not complete within {}ms", .timeout.as_millis())]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
