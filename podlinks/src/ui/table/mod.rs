//! Table rendering for links, topology rows and cluster records.

mod cluster_list_ext;
mod link_list_ext;
mod topology_ext;

pub use self::{
    cluster_list_ext::ClusterListExt, link_list_ext::LinkListExt, topology_ext::TopologyExt,
};

fn new_table<H, R>(header: H, rows: R) -> String
where
    H: Into<comfy_table::Row>,
    R: IntoIterator,
    R::Item: Into<comfy_table::Row>,
{
    comfy_table::Table::new()
        .load_preset(comfy_table::presets::NOTHING)
        .set_content_arrangement(comfy_table::ContentArrangement::Disabled)
        .set_header(header)
        .add_rows(rows)
        .to_string()
}
