//! Shared types for kubepeek
//!
//! This crate contains data structures used across multiple kubepeek crates.

use std::fmt;
use std::path::PathBuf;

// ============================================================================
// Connection Types
// ============================================================================

/// Where the cluster connection configuration comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClusterSource {
    /// A kubeconfig file, optionally with a context overriding `current-context`
    FilePath {
        path: PathBuf,
        context: Option<String>,
    },
    /// The in-cluster service account identity
    Ambient,
}

impl ClusterSource {
    /// Pick the source from raw flag values.
    ///
    /// An empty path selects the ambient identity and drops the context;
    /// an empty context name counts as no context. Values are used verbatim.
    pub fn from_flags(kubeconfig: &str, context: &str) -> Self {
        if kubeconfig.is_empty() {
            return Self::Ambient;
        }

        Self::FilePath {
            path: PathBuf::from(kubeconfig),
            context: (!context.is_empty()).then(|| context.to_string()),
        }
    }
}

impl fmt::Display for ClusterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FilePath {
                path,
                context: Some(context),
            } => write!(f, "{} (context {})", path.display(), context),
            Self::FilePath {
                path,
                context: None,
            } => write!(f, "{}", path.display()),
            Self::Ambient => f.write_str("in-cluster"),
        }
    }
}

// ============================================================================
// Kubernetes Resource Types
// ============================================================================

/// Kubernetes API server version, as reported by `/version`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerVersion {
    pub git_version: String,
}

impl ServerVersion {
    pub fn new(git_version: String) -> Self {
        Self { git_version }
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.git_version)
    }
}

/// Node information
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeInfo {
    pub name: String,
    pub architecture: String,
    pub os_image: String,
}

impl NodeInfo {
    pub fn new(name: String, architecture: String, os_image: String) -> Self {
        Self {
            name,
            architecture,
            os_image,
        }
    }
}

impl fmt::Display for NodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) -> {}", self.name, self.architecture, self.os_image)
    }
}

/// Namespace information
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceInfo {
    pub name: String,
}

impl NamespaceInfo {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl fmt::Display for NamespaceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ============================================================================
// Build Info
// ============================================================================

/// A Kubernetes client library crate linked into the binary
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkedModule {
    pub name: &'static str,
    pub version: &'static str,
}

impl LinkedModule {
    pub const fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_is_ambient() {
        assert_eq!(ClusterSource::from_flags("", ""), ClusterSource::Ambient);
        assert_eq!(ClusterSource::from_flags("", "prod"), ClusterSource::Ambient);
    }

    #[test]
    fn test_path_used_verbatim() {
        let source = ClusterSource::from_flags(" ", "");
        assert_eq!(
            source,
            ClusterSource::FilePath {
                path: PathBuf::from(" "),
                context: None,
            }
        );

        let source = ClusterSource::from_flags("/tmp/kc.yaml ", " prod");
        assert_eq!(
            source,
            ClusterSource::FilePath {
                path: PathBuf::from("/tmp/kc.yaml "),
                context: Some(" prod".to_string()),
            }
        );
    }

    #[test]
    fn test_path_with_context() {
        let source = ClusterSource::from_flags("/tmp/kc.yaml", "staging");
        assert_eq!(
            source,
            ClusterSource::FilePath {
                path: PathBuf::from("/tmp/kc.yaml"),
                context: Some("staging".to_string()),
            }
        );
        assert_eq!(source.to_string(), "/tmp/kc.yaml (context staging)");
    }

    #[test]
    fn test_empty_context_is_none() {
        let source = ClusterSource::from_flags("/tmp/kc.yaml", "");
        assert_eq!(
            source,
            ClusterSource::FilePath {
                path: PathBuf::from("/tmp/kc.yaml"),
                context: None,
            }
        );
    }

    #[test]
    fn test_node_display() {
        let node = NodeInfo::new(
            "n1".to_string(),
            "amd64".to_string(),
            "Debian 12".to_string(),
        );
        assert_eq!(node.to_string(), "n1 (amd64) -> Debian 12");
    }

    #[test]
    fn test_version_display_uses_git_version() {
        let version = ServerVersion::new("v1.29.0".to_string());
        assert_eq!(version.to_string(), "v1.29.0");
    }
}
