pub mod club;
pub mod person;
pub mod tenure;

use tracing::debug;

use crate::error::Error;
use crate::model::Entity;
use crate::source::Page;
use crate::template::TemplateKind;

/// Map one page's templates to entities. At most one primary infobox is
/// recognized per page; a page without one yields nothing.
pub fn map_page(page: &Page) -> Result<Vec<Entity>, Error> {
    for template in &page.templates {
        if template.name().is_empty() {
            return Err(Error::UnnamedTemplate {
                page: page.title.clone(),
            });
        }

        match template.kind() {
            TemplateKind::PersonInfobox => return Ok(vec![person::extract(template)?]),
            TemplateKind::ClubInfobox => return Ok(vec![club::extract(page, template)?]),
            TemplateKind::RosterEntry | TemplateKind::Unrecognized => {}
        }
    }

    debug!("no recognized infobox on page {:?}", page.title);
    Ok(Vec::new())
}

// ── Tests ──
