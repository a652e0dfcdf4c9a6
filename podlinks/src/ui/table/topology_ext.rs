use podlinks_core::TopologyEntry;

/// Renders the rows of a topology table.
///
/// Development domains, which accept any region code, show `*` as region.
pub trait TopologyExt {
    fn render_table(&self) -> String;
}

impl TopologyExt for [TopologyEntry] {
    fn render_table(&self) -> String {
        let rows = self.iter().map(topology_row).collect::<Vec<_>>();
        super::new_table(
            ["DOMAIN", "REGION", "CLUSTER", "NAMESPACE", "CLOUD REGION", "PROJECT"],
            rows,
        )
    }
}

fn topology_row(entry: &TopologyEntry) -> [String; 6] {
    [
        entry.base_domain.clone(),
        entry.region.clone().unwrap_or_else(|| "*".to_string()),
        entry.cluster_name.clone(),
        entry.namespace.clone(),
        entry.cloud_region.clone(),
        entry.project_name.clone(),
    ]
}
