use podlinks_core::Link;

/// Renders resolved links as a table with the columns `NAME`, `TITLE` and
/// `URL`.
pub trait LinkListExt {
    fn render_table(&self) -> String;
}

impl LinkListExt for [Link] {
    fn render_table(&self) -> String {
        let rows = self
            .iter()
            .map(|Link { name, title, url }| [name.clone(), title.clone(), url.clone()])
            .collect::<Vec<_>>();
        super::new_table(["NAME", "TITLE", "URL"], rows)
    }
}
