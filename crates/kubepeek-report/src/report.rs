use std::fmt::Display;
use std::io::{self, Write};

use chrono::{DateTime, Local, SecondsFormat, TimeZone};
use tracing::debug;

use kubepeek_k8s::ClusterClient;
use kubepeek_types::{LinkedModule, NamespaceInfo, NodeInfo};

/// Which optional sections the report includes
#[derive(Clone, Debug, Default)]
pub struct ReportOptions {
    pub show_modules: bool,
    pub show_nodes: bool,
    pub show_namespaces: bool,

    /// Client library versions recorded at build time (empty = unknown)
    pub modules: Vec<LinkedModule>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Cluster(#[from] kubepeek_k8s::Error),

    #[error("unable to write report")]
    Output(#[from] io::Error),
}

/// Writes the cluster report line by line as each query answers
pub struct Report<W> {
    out: W,
    options: ReportOptions,
}

impl<W: Write> Report<W> {
    pub fn new(out: W, options: ReportOptions) -> Self {
        Self { out, options }
    }

    /// Run the query sequence: version, then nodes, then namespaces.
    ///
    /// The first failing query ends the run; later queries are never sent.
    pub async fn run(&mut self, client: &ClusterClient) -> Result<(), ReportError> {
        self.write_report_time(Local::now())?;

        if self.options.show_modules {
            self.write_modules()?;
        }

        let version = client.server_version().await?;
        writeln!(self.out, "Kubernetes version: {version}")?;

        if self.options.show_nodes {
            writeln!(self.out, "Cluster nodes:")?;
            let nodes = client.get_nodes().await?;
            self.write_nodes(&nodes)?;
        }

        if self.options.show_namespaces {
            writeln!(self.out, "Namespaces:")?;
            let namespaces = client.get_namespaces().await?;
            self.write_namespaces(&namespaces)?;
        }

        self.out.flush()?;
        Ok(())
    }

    pub fn write_report_time<Tz>(&mut self, time: DateTime<Tz>) -> io::Result<()>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        writeln!(
            self.out,
            "Report time: {}",
            time.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }

    pub fn write_modules(&mut self) -> io::Result<()> {
        if self.options.modules.is_empty() {
            debug!("no client library versions recorded at build time");
            return writeln!(self.out, "No build info");
        }

        writeln!(self.out, "Kubernetes client library versions:")?;
        for module in &self.options.modules {
            writeln!(self.out, "  {}: {}", module.name, module.version)?;
        }
        Ok(())
    }

    pub fn write_nodes(&mut self, nodes: &[NodeInfo]) -> io::Result<()> {
        for node in nodes {
            writeln!(self.out, "  {node}")?;
        }
        Ok(())
    }

    pub fn write_namespaces(&mut self, namespaces: &[NamespaceInfo]) -> io::Result<()> {
        for namespace in namespaces {
            writeln!(self.out, "  {namespace}")?;
        }
        Ok(())
    }

    /// Consume the report, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
