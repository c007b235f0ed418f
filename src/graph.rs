use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use tracing::{error, info};

use crate::model::{Entity, Value};

// both identifier segments: charset [A-Za-z0-9_], first character a letter
static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*:[A-Za-z][A-Za-z0-9_]*$").unwrap());

/// A resolved graph node: canonical identifier plus its property bag.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub properties: IndexMap<String, Value>,
}

/// A resolved graph edge between two node identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub source: String,
    pub label: String,
    pub target: String,
    pub properties: IndexMap<String, Value>,
}

/// Collects mapped entities for one graph build and serializes them into a
/// single graph-creation statement.
#[derive(Debug, Default)]
pub struct GraphAssembler {
    entities: Vec<Entity>,
}

impl GraphAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entity. Single-writer: a host mapping pages in parallel
    /// must put one lock around this call.
    pub fn add(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Resolve the accumulated entities into nodes and edges. Node
    /// identifiers collide first-added-wins; a relation target with no
    /// backing entity gets a placeholder node, so the statement never
    /// references a node absent from itself. A relation whose target is not
    /// even a well-formed identifier is dropped and logged.
    pub fn build(&self) -> (Vec<Node>, Vec<Edge>) {
        let mut nodes: IndexMap<String, IndexMap<String, Value>> = IndexMap::new();
        for entity in &self.entities {
            nodes
                .entry(entity.node_name())
                .or_insert_with(|| entity.properties.clone());
        }

        let mut edges = Vec::new();
        for entity in &self.entities {
            let source = entity.node_name();
            for relation in &entity.relations {
                if !nodes.contains_key(&relation.target) {
                    if !IDENTIFIER_RE.is_match(&relation.target) {
                        error!(
                            "dropping relation {:?} from {}: no node for target {:?} and none can be synthesized",
                            relation.label, source, relation.target
                        );
                        continue;
                    }

                    // e.g. an English player whose club page was never indexed
                    info!("adding missing node: {}", relation.target);
                    let name_segment = relation.target.split(':').next().unwrap();
                    let mut properties = IndexMap::new();
                    properties.insert(
                        "name".to_string(),
                        Value::Str(name_segment.replace('_', " ")),
                    );
                    nodes.insert(relation.target.clone(), properties);
                }

                edges.push(Edge {
                    source: source.clone(),
                    label: relation.label.clone(),
                    target: relation.target.clone(),
                    properties: relation.properties.clone(),
                });
            }
        }

        let nodes = nodes
            .into_iter()
            .map(|(id, properties)| Node { id, properties })
            .collect();
        (nodes, edges)
    }

    /// Render the graph-creation statement: nodes first, then edges,
    /// comma-joined. A pure function of the entity list, so identical lists
    /// serialize byte-identically.
    pub fn serialize(&self, graph_name: &str) -> String {
        let (nodes, edges) = self.build();

        let mut parts = Vec::with_capacity(nodes.len() + edges.len());
        for node in &nodes {
            parts.push(format!("({}{})", node.id, render_properties(&node.properties)));
        }
        for edge in &edges {
            parts.push(format!(
                "({})-[:{}{}]->({})",
                edge.source,
                edge.label,
                render_properties(&edge.properties),
                edge.target
            ));
        }

        // the CREATE body sits inside double quotes, so every quote in it is
        // escaped once more (redis-cli convention)
        let body = parts.join(",").replace('"', "\\\"");
        format!("GRAPH.QUERY {} \"CREATE {}\"", graph_name, body)
    }
}

fn render_properties(properties: &IndexMap<String, Value>) -> String {
    if properties.is_empty() {
        return String::new();
    }

    let inner = properties
        .iter()
        .map(|(key, value)| format!("{}:{}", key, render_value(value)))
        .collect::<Vec<_>>()
        .join(",");
    format!("{{{}}}", inner)
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Str(s) => format!("\"{}\"", s.replace('"', "\\\"")),
        Value::Int(i) => i.to_string(),
        Value::Float(x) => x.to_string(),
    }
}

// ── Tests ──
