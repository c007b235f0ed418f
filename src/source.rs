//! Raw page input: the JSON shape an external page-fetch collaborator hands
//! over, one document per wiki page.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::Error;
use crate::template::Template;

#[derive(Debug, Deserialize)]
struct RawPage {
    title: String,
    #[serde(default)]
    templates: Vec<RawTemplate>,
}

#[derive(Debug, Deserialize)]
struct RawTemplate {
    name: String,
    #[serde(default)]
    parameters: IndexMap<String, String>,
}

/// One wiki page: its title plus every template block found on it.
#[derive(Debug)]
pub struct Page {
    pub title: String,
    pub templates: Vec<Template>,
}

/// Parse the raw JSON for one page into template views.
pub fn parse_page(content: &str) -> Result<Page, Error> {
    let RawPage { title, templates } = serde_json::from_str(content)?;

    let templates = templates
        .into_iter()
        .map(|raw| Template::new(title.as_str(), raw.name, raw.parameters))
        .collect();

    Ok(Page { title, templates })
}

// ── Tests ──
