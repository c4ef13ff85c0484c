use std::ffi::OsString;
use std::time::Duration;

use clap::{ArgAction, Parser};
use tracing::debug;

use kubepeek_k8s::{ClusterSource, DEFAULT_TIMEOUT};
use kubepeek_report::ReportOptions;

use crate::modules;

/// Long flags that may also be spelled with a single dash (`-show-nodes`)
const SINGLE_DASH_FLAGS: &[&str] = &[
    "kubeconfig",
    "context",
    "show-modules",
    "show-nodes",
    "show-namespaces",
    "timeout-ms",
];

/// kubepeek - Print Kubernetes cluster metadata
#[derive(Parser, Debug)]
#[command(name = "kubepeek")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Absolute path to the kubeconfig file (empty = use in-cluster config)
    #[arg(long, value_name = "PATH", default_value = "")]
    pub kubeconfig: String,

    /// Context to use in the kubeconfig file
    #[arg(long, value_name = "NAME", default_value = "")]
    pub context: String,

    /// Display Kubernetes client library version information
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub show_modules: bool,

    /// Display cluster nodes
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub show_nodes: bool,

    /// Display namespaces
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub show_namespaces: bool,

    /// Time budget in milliseconds for all API calls combined
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Everything one run needs, resolved from the command line
#[derive(Debug)]
pub struct Settings {
    pub source: ClusterSource,
    pub timeout: Duration,
    pub report: ReportOptions,
}

impl Args {
    /// Parse the process arguments, accepting single-dash long flags
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_flags(std::env::args_os()))
    }

    pub fn into_settings(self) -> Settings {
        let source = ClusterSource::from_flags(&self.kubeconfig, &self.context);
        if source == ClusterSource::Ambient && !self.context.is_empty() {
            debug!(context = %self.context, "no kubeconfig given, ignoring context");
        }

        let modules = if self.show_modules {
            modules::linked_modules()
        } else {
            Vec::new()
        };

        Settings {
            source,
            timeout: Duration::from_millis(self.timeout_ms),
            report: ReportOptions {
                show_modules: self.show_modules,
                show_nodes: self.show_nodes,
                show_namespaces: self.show_namespaces,
                modules,
            },
        }
    }
}

/// Rewrite `-flag` / `-flag=value` to `--flag` for the known long flags
pub fn normalize_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = text.strip_prefix('-') else {
                return arg;
            };
            if rest.starts_with('-') {
                return arg;
            }

            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if SINGLE_DASH_FLAGS.contains(&name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}
