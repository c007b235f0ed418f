use indexmap::IndexMap;

use crate::error::Error;
use crate::model::{node_name, Entity, Value};
use crate::template::Template;

use super::tenure;

/// Map an `Infobox Biography` template to a person entity.
/// https://schema.org/Person
pub fn extract(template: &Template) -> Result<Entity, Error> {
    let name = template
        .get("fullname")
        .or_else(|| template.get("name"))
        .unwrap_or(template.page_title())
        .to_string();

    let mut person = Entity::new("Person", name)?;
    person.maybe_property("birthDate", template.year("dateofbirth"));
    person.maybe_property("birthPlace", template.get("cityofbirth"));
    person.maybe_property("nationality", template.link("countryofbirth"));
    person.maybe_property("height", template.number("height"));

    add_tenures(&mut person, template, "athlete", "clubs", "years")?;
    add_tenures(&mut person, template, "coach", "managerclubs", "manageryears")?;

    Ok(person)
}

/// Tenure relations for one (clubs, years) field pair. A biography carrying
/// neither field has no history of that kind; a half-present pair is the
/// aligner's hard failure.
fn add_tenures(
    person: &mut Entity,
    template: &Template,
    label: &str,
    clubs_field: &'static str,
    years_field: &'static str,
) -> Result<(), Error> {
    if template.get(clubs_field).is_none() && template.get(years_field).is_none() {
        return Ok(());
    }

    for t in tenure::extract_clubs_and_years(template, clubs_field, years_field)? {
        let mut properties = IndexMap::new();
        properties.insert("since".to_string(), Value::Int(t.since));
        if let Some(until) = t.until {
            properties.insert("until".to_string(), Value::Int(until));
        }
        // the club is referenced by identifier only; no team entity is built here
        person.add_relation_with(label, node_name(&t.club, "SportsTeam"), properties);
    }

    Ok(())
}

// ── Tests ──
