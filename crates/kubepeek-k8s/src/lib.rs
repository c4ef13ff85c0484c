//! Kubernetes client for kubepeek
//!
//! This crate resolves the connection configuration (kubeconfig file or
//! in-cluster identity), builds the client, and runs the read-only cluster
//! queries under a shared deadline.

mod bootstrap;
mod client;
mod error;

pub use bootstrap::{build_client, connect, resolve_config};
pub use client::{ClusterClient, DEFAULT_TIMEOUT};
pub use error::{Error, Result};

// Re-export types that are used in our public API
pub use kubepeek_types::{ClusterSource, NamespaceInfo, NodeInfo, ServerVersion};
