//! Resolution of operator deep-links for a running workspace.
//!
//! Given a workspace instance, the crate works out which cluster and
//! namespace currently back it and produces an ordered list of [`Link`]s into
//! the cluster console, the log search and the monitoring dashboards.
//!
//! Two strategies share the [`LinkResolver`] contract:
//!
//! - [`TopologyResolver`] classifies the workspace URL against the built-in
//!   [`Topology`] table and assembles the console URLs itself.
//! - [`AnnotationResolver`] looks up the [`ClusterRecord`] named after the
//!   workspace region and renders the URL templates it carries.
//!
//! Every operation is a pure function over in-memory values. Failures never
//! propagate to the caller; they degrade to an empty link list.

mod assembler;
mod cluster;
mod error;
mod link;
mod resolver;
mod template;
mod topology;
mod workspace;

pub use self::{
    assembler::{UNKNOWN_RESOURCE, assemble},
    cluster::{ClusterRecord, LinkTemplateSet, resolve_via_templates},
    error::Error,
    link::{Link, names},
    resolver::{AnnotationResolver, LinkResolver, Strategy, TopologyResolver},
    template::{PlaceholderValues, render},
    topology::{
        Classification, ClusterIdentity, DevelopmentCluster, Domain, Topology, TopologyEntry,
        classify, split_hostname,
    },
    workspace::{WorkspaceInstance, WorkspaceStatus},
};
