use indexmap::IndexMap;

use crate::extract;
use crate::model::Value;

/// The template names the mapper understands, as a closed classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    PersonInfobox,
    ClubInfobox,
    RosterEntry,
    Unrecognized,
}

impl TemplateKind {
    pub fn classify(name: &str) -> Self {
        match name {
            "Infobox Biography" => Self::PersonInfobox,
            "Infobox Club" => Self::ClubInfobox,
            "Fs player" => Self::RosterEntry,
            _ => Self::Unrecognized,
        }
    }
}

/// Read-only accessor over one template's raw fields.
#[derive(Debug, Clone)]
pub struct Template {
    page_title: String,
    name: String,
    parameters: IndexMap<String, String>,
}

impl Template {
    pub fn new(
        page_title: impl Into<String>,
        name: impl Into<String>,
        parameters: IndexMap<String, String>,
    ) -> Self {
        Self {
            page_title: page_title.into(),
            name: name.into(),
            parameters,
        }
    }

    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TemplateKind {
        TemplateKind::classify(&self.name)
    }

    /// Trimmed field value; empty and whitespace-only values count as absent.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.parameters
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn year(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(extract::extract_year)
    }

    pub fn number(&self, field: &str) -> Option<Value> {
        self.get(field).and_then(extract::extract_number)
    }

    pub fn link(&self, field: &str) -> Option<String> {
        self.get(field).and_then(extract::extract_link)
    }

    pub fn links(&self, field: &str) -> Vec<String> {
        self.get(field).map(extract::extract_links).unwrap_or_default()
    }
}

// ── Tests ──
