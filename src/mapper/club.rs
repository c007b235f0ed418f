use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::Error;
use crate::model::{node_name, Entity, Value};
use crate::source::Page;
use crate::template::{Template, TemplateKind};

/// Map an `Infobox Club` template to a team entity, sweeping the whole page
/// for `Fs player` roster entries.
/// https://schema.org/SportsTeam
pub fn extract(page: &Page, template: &Template) -> Result<Entity, Error> {
    // The page title, never the infobox's own name field: other pages link to
    // this one by title, and the identifiers must line up.
    let mut team = Entity::new("SportsTeam", template.page_title())?;
    team.add_property("sport", "Football");
    team.maybe_property("foundingDate", template.year("founded"));
    team.maybe_property("ground", template.link("ground"));
    team.maybe_property("memberOf", template.link("lastleague"));
    team.maybe_property("nationality", template.link("countryofbirth"));
    team.maybe_property("url", template.get("website"));

    let manager = template
        .link("manager")
        .or_else(|| template.get("manager").map(String::from));
    if let Some(manager) = manager {
        team.add_relation("coach", node_name(&manager, "Person"));
    }

    for player in page
        .templates
        .iter()
        .filter(|t| t.kind() == TemplateKind::RosterEntry)
    {
        add_roster_entry(&mut team, player);
    }

    Ok(team)
}

fn add_roster_entry(team: &mut Entity, player: &Template) {
    let name = player
        .link("name")
        .or_else(|| player.get("name").map(String::from));
    let Some(name) = name else {
        warn!(
            "roster entry without a player name on page {:?}, skipping",
            player.page_title()
        );
        return;
    };

    // position and number describe one squad slot and are stored as a pair
    let (Some(position), Some(number)) = (player.get("pos"), player.number("no")) else {
        debug!(
            "incomplete position/number for {:?} on page {:?}, skipping entry",
            name,
            player.page_title()
        );
        return;
    };

    let mut properties = IndexMap::new();
    properties.insert("position".to_string(), Value::from(position));
    properties.insert("number".to_string(), number);
    team.add_relation_with("athlete", node_name(&name, "Person"), properties);
}

// ── Tests ──
