//! `${name}` placeholder rendering for link templates stored on clusters.

use serde::{Deserialize, Serialize};

const OPEN: &str = "${";
const CLOSE: char = '}';

/// Values substituted into link templates.
///
/// Every field defaults to the empty string when the workspace does not know
/// it yet, e.g. before the pod has been scheduled.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderValues {
    #[serde(default)]
    pub pod_name: String,

    #[serde(default)]
    pub node_name: String,

    #[serde(default)]
    pub namespace: String,
}

impl PlaceholderValues {
    pub const POD_NAME: &'static str = "podName";
    pub const NODE_NAME: &'static str = "nodeName";
    pub const NAMESPACE: &'static str = "namespace";

    /// Returns the value bound to the placeholder `name`, if it is one of the
    /// recognized placeholders.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            Self::POD_NAME => Some(&self.pod_name),
            Self::NODE_NAME => Some(&self.node_name),
            Self::NAMESPACE => Some(&self.namespace),
            _ => None,
        }
    }
}

/// Renders `template`, replacing every `${name}` placeholder in a single
/// left-to-right pass.
///
/// Recognized placeholders render their value. Any other well-formed
/// placeholder renders as the empty string, so no `${...}` token survives
/// into a link. A `${` that does not open a well-formed placeholder is kept
/// as literal text.
///
/// ```
/// use podlinks_core::{PlaceholderValues, render};
///
/// let values = PlaceholderValues {
///     pod_name: "ws-1".to_string(),
///     namespace: "ns-1".to_string(),
///     ..PlaceholderValues::default()
/// };
/// assert_eq!(render("https://k8s/${namespace}/${podName}", &values), "https://k8s/ns-1/ws-1");
/// ```
#[must_use]
pub fn render(template: &str, values: &PlaceholderValues) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        rendered.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        match after_open.find(CLOSE) {
            Some(end) if is_placeholder_name(&after_open[..end]) => {
                rendered.push_str(values.get(&after_open[..end]).unwrap_or_default());
                rest = &after_open[end + CLOSE.len_utf8()..];
            }
            _ => {
                rendered.push_str(OPEN);
                rest = after_open;
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> PlaceholderValues {
        PlaceholderValues {
            pod_name: "ws-1".to_string(),
            node_name: "node-a".to_string(),
            namespace: "ns-1".to_string(),
        }
    }

    #[test]
    fn test_render_all_placeholders() {
        assert_eq!(
            render("https://k8s/${namespace}/${podName}", &values()),
            "https://k8s/ns-1/ws-1"
        );
        assert_eq!(
            render("https://grafana/d/node?var-node=${nodeName}", &values()),
            "https://grafana/d/node?var-node=node-a"
        );
    }

    #[test]
    fn test_render_without_placeholders_is_identity() {
        let templates = ["", "https://example.com/a?b=c", "$ {podName}", "{podName}", "$$"];
        for template in templates {
            assert_eq!(render(template, &values()), template);
            assert_eq!(render(template, &PlaceholderValues::default()), template);
        }
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        let abc = PlaceholderValues { pod_name: "abc".to_string(), ..PlaceholderValues::default() };
        assert_eq!(render("${podName}/${podName}", &abc), "abc/abc");
        assert_eq!(
            render("${namespace}-${podName}-${namespace}-${podName}", &values()),
            "ns-1-ws-1-ns-1-ws-1"
        );
    }

    #[test]
    fn test_render_missing_values_as_empty() {
        assert_eq!(
            render("https://k8s/${namespace}/${podName}/${nodeName}", &PlaceholderValues::default()),
            "https://k8s///"
        );
    }

    #[test]
    fn test_render_unknown_placeholder_as_empty() {
        assert_eq!(render("https://k8s/${cluster}/${podName}", &values()), "https://k8s//ws-1");
    }

    #[test]
    fn test_render_keeps_malformed_placeholders() {
        assert_eq!(render("https://k8s/${podName", &values()), "https://k8s/${podName");
        assert_eq!(render("${}", &values()), "${}");
        assert_eq!(render("${pod name}", &values()), "${pod name}");
        assert_eq!(render("${a${podName}", &values()), "${aws-1");
    }

    #[test]
    fn test_render_value_is_not_rescanned() {
        let values = PlaceholderValues {
            pod_name: "${namespace}".to_string(),
            namespace: "ns-1".to_string(),
            ..PlaceholderValues::default()
        };
        assert_eq!(render("${podName}/${namespace}", &values), "${namespace}/ns-1");
    }
}
