use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to parse workspace URL '{url}', error: {source}"))]
    MalformedUrl { url: String, source: url::ParseError },

    #[snafu(display("No cluster is known for domain '{base_domain}' in region '{region}'"))]
    ClusterNotFound { base_domain: String, region: String },

    #[snafu(display(
        "Unknown resolution strategy '{value}', expected one of: auto, topology, annotations"
    ))]
    UnknownStrategy { value: String },
}
