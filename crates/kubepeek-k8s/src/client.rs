//! Kubernetes client for kubepeek

use std::future::Future;
use std::time::Duration;

use k8s_openapi::api::core::v1::{Namespace, Node};
use kube::api::ListParams;
use kube::{Api, Client};
use tokio::time::Instant;
use tracing::debug;

use crate::error::{Error, Result};
use kubepeek_types::{NamespaceInfo, NodeInfo, ServerVersion};

/// Default budget for all remote calls of one run combined
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(500);

/// Kubernetes client wrapper
///
/// Every query made through one `ClusterClient` shares a single deadline,
/// fixed when the wrapper is created.
pub struct ClusterClient {
    client: Client,
    timeout: Duration,
    deadline: Instant,
}

impl ClusterClient {
    /// Wrap `client`, starting the request budget now
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self {
            client,
            timeout,
            deadline: Instant::now() + timeout,
        }
    }

    /// Fetch the API server version
    pub async fn server_version(&self) -> Result<ServerVersion> {
        let info = self
            .within_deadline("server version query", async {
                self.client
                    .apiserver_version()
                    .await
                    .map_err(Error::ServerVersion)
            })
            .await?;

        debug!(
            git_version = %info.git_version,
            platform = %info.platform,
            "got server version"
        );
        Ok(ServerVersion::new(info.git_version))
    }

    /// Fetch all nodes in the cluster
    pub async fn get_nodes(&self) -> Result<Vec<NodeInfo>> {
        let nodes: Api<Node> = Api::all(self.client.clone());
        let list = self
            .within_deadline("node list", async {
                nodes
                    .list(&ListParams::default())
                    .await
                    .map_err(Error::NodeList)
            })
            .await?;

        debug!(count = list.items.len(), "listed nodes");
        Ok(list.items.into_iter().map(Self::node_to_info).collect())
    }

    /// Fetch all namespaces in the cluster
    pub async fn get_namespaces(&self) -> Result<Vec<NamespaceInfo>> {
        let namespaces: Api<Namespace> = Api::all(self.client.clone());
        let list = self
            .within_deadline("namespace list", async {
                namespaces
                    .list(&ListParams::default())
                    .await
                    .map_err(Error::NamespaceList)
            })
            .await?;

        debug!(count = list.items.len(), "listed namespaces");
        Ok(list
            .items
            .into_iter()
            .map(|ns| NamespaceInfo::new(ns.metadata.name.unwrap_or_default()))
            .collect())
    }

    async fn within_deadline<T, F>(&self, operation: &'static str, query: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match tokio::time::timeout_at(self.deadline, query).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout {
                operation,
                timeout: self.timeout,
            }),
        }
    }

    /// Convert a k8s Node to NodeInfo
    fn node_to_info(node: Node) -> NodeInfo {
        let name = node.metadata.name.unwrap_or_default();
        let (architecture, os_image) = node
            .status
            .and_then(|s| s.node_info)
            .map(|info| (info.architecture, info.os_image))
            .unwrap_or_default();

        NodeInfo::new(name, architecture, os_image)
    }
}
