use std::fmt;

use indexmap::IndexMap;

use crate::error::Error;

/// A property value carried by a node or an edge.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{}", s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Encode a display name into the identifier charset `[A-Za-z0-9_]`:
/// non-printable-ASCII characters are dropped (lossy, no transliteration),
/// leading digits stripped, and every run of other characters collapsed to a
/// single underscore with no underscore at either end.
pub fn encode_name(label: &str) -> String {
    let ascii: String = label.chars().filter(|c| matches!(c, ' '..='~')).collect();
    let stripped = ascii.trim_start_matches(|c: char| c.is_ascii_digit());

    let mut encoded = String::with_capacity(stripped.len());
    let mut gap = false;
    for c in stripped.chars() {
        if c.is_ascii_alphanumeric() {
            if gap && !encoded.is_empty() {
                encoded.push('_');
            }
            gap = false;
            encoded.push(c);
        } else {
            gap = true;
        }
    }
    encoded
}

/// Canonical graph identifier for a (name, type) pair. A pure function of its
/// arguments: the entity owning a name and any entity referencing it arrive at
/// the same identifier with no shared registry.
pub fn node_name(name: &str, entity_type: &str) -> String {
    format!("{}:{}", encode_name(name), encode_name(entity_type))
}

/// A directed, labelled reference to another node by canonical identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub label: String,
    pub target: String,
    pub properties: IndexMap<String, Value>,
}

/// A typed, named node with ordered properties and ordered relations.
#[derive(Debug, Clone)]
pub struct Entity {
    entity_type: String,
    name: String,
    pub properties: IndexMap<String, Value>,
    pub relations: Vec<Relation>,
}

impl Entity {
    /// The name doubles as the node's display property and as the basis of
    /// its identifier, so it must not be empty.
    pub fn new(entity_type: &str, name: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::EmptyEntityName);
        }

        let mut properties = IndexMap::new();
        properties.insert("name".to_string(), Value::Str(name.clone()));

        Ok(Self {
            entity_type: entity_type.to_string(),
            name,
            properties,
            relations: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    pub fn node_name(&self) -> String {
        node_name(&self.name, &self.entity_type)
    }

    pub fn add_property(&mut self, key: &str, value: impl Into<Value>) {
        self.properties.insert(key.to_string(), value.into());
    }

    /// No-op on `None`, so optional extraction results pass straight through
    /// and absent fields never become null properties.
    pub fn maybe_property(&mut self, key: &str, value: Option<impl Into<Value>>) {
        if let Some(value) = value {
            self.add_property(key, value);
        }
    }

    pub fn add_relation(&mut self, label: &str, target: impl Into<String>) {
        self.add_relation_with(label, target, IndexMap::new());
    }

    /// Relations are kept in insertion order; repeated relations to the same
    /// target stay distinct entries.
    pub fn add_relation_with(
        &mut self,
        label: &str,
        target: impl Into<String>,
        properties: IndexMap<String, Value>,
    ) {
        self.relations.push(Relation {
            label: label.to_string(),
            target: target.into(),
            properties,
        });
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Entity {} {}>", self.entity_type, self.name)?;
        for (key, value) in &self.properties {
            write!(f, "\n\t{}: {}", key, value)?;
        }
        for relation in &self.relations {
            write!(f, "\n\t--> {} --> {}", relation.label, relation.target)?;
        }
        Ok(())
    }
}

// ── Tests ──
