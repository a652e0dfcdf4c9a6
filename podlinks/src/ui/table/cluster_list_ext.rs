use podlinks_core::ClusterRecord;

/// Number of link templates a cluster can carry.
const TEMPLATE_KEYS: usize = 5;

/// Renders cluster records together with how many link templates each one
/// carries.
pub trait ClusterListExt {
    fn render_table(&self) -> String;
}

impl ClusterListExt for [ClusterRecord] {
    fn render_table(&self) -> String {
        let rows = self.iter().map(cluster_row).collect::<Vec<_>>();
        super::new_table(["NAME", "URL", "TEMPLATES"], rows)
    }
}

fn cluster_row(cluster: &ClusterRecord) -> [String; 3] {
    [
        cluster.name.clone(),
        cluster.url.clone().unwrap_or_default(),
        cluster.annotations.as_ref().map_or_else(
            || "none".to_string(),
            |templates| format!("{}/{TEMPLATE_KEYS}", templates.len()),
        ),
    ]
}
