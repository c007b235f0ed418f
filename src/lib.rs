//! Extracts entities and relations from football wiki infobox templates and
//! serializes them into a property-graph creation statement.
//!
//! Pipeline: raw page JSON → [`Template`] views → infobox mapper →
//! [`Entity`] list → [`GraphAssembler`] → `GRAPH.QUERY … "CREATE …"`.

pub mod error;
pub mod extract;
pub mod graph;
pub mod mapper;
pub mod model;
pub mod source;
pub mod template;

pub use error::Error;
pub use graph::{Edge, GraphAssembler, Node};
pub use model::{encode_name, node_name, Entity, Relation, Value};
pub use source::{parse_page, Page};
pub use template::{Template, TemplateKind};

use tracing::warn;

/// Run the full pipeline over a batch of raw pages: parse, map, assemble.
/// A page that fails to parse or map is skipped with a warning; no single
/// bad page halts the batch.
pub fn build_graph<I, S>(pages: I) -> GraphAssembler
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut graph = GraphAssembler::new();

    for content in pages {
        let page = match source::parse_page(content.as_ref()) {
            Ok(page) => page,
            Err(e) => {
                warn!("skipping page: {}", e);
                continue;
            }
        };

        match mapper::map_page(&page) {
            Ok(entities) => {
                for entity in entities {
                    graph.add(entity);
                }
            }
            Err(e) => warn!("skipping page {:?}: {}", page.title, e),
        }
    }

    graph
}
