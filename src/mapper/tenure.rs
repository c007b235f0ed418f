use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::error::Error;
use crate::template::Template;

// a 4-digit year, any single separator, and an optional closing year
static YEAR_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{4})\D(\d{4})?").unwrap());

/// One spell at a club: a playing stint or a management stint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenure {
    pub club: String,
    pub since: i64,
    pub until: Option<i64>,
}

/// Pair the club links of `clubs_field` with the year ranges of `years_field`
/// by ordinal position. The source markup carries no explicit correlation
/// between the two lists, so the i-th club gets the i-th range; an open-ended
/// trailing range (`2018-`) leaves `until` unset.
///
/// Both fields must be present. On a count mismatch the longer list is
/// truncated to the shorter one with a warning; a partial history is better
/// than none, silent misalignment is not.
pub fn extract_clubs_and_years(
    template: &Template,
    clubs_field: &'static str,
    years_field: &'static str,
) -> Result<Vec<Tenure>, Error> {
    let missing = |field: &'static str, other: &'static str| Error::MissingRequiredField {
        page: template.page_title().to_string(),
        template: template.name().to_string(),
        field,
        other,
    };

    if template.get(clubs_field).is_none() {
        return Err(missing(clubs_field, years_field));
    }
    let years_raw = template
        .get(years_field)
        .ok_or_else(|| missing(years_field, clubs_field))?;

    let clubs = template.links(clubs_field);
    let ranges: Vec<(i64, Option<i64>)> = YEAR_RANGE_RE
        .captures_iter(years_raw)
        .map(|caps| {
            // matched digits always parse
            let since = caps[1].parse().unwrap();
            let until = caps.get(2).map(|m| m.as_str().parse().unwrap());
            (since, until)
        })
        .collect();

    if clubs.len() != ranges.len() {
        warn!(
            "{}: {} clubs vs {} year ranges in {:?}/{:?}, truncating to the shorter list",
            template.page_title(),
            clubs.len(),
            ranges.len(),
            clubs_field,
            years_field,
        );
    }

    Ok(clubs
        .into_iter()
        .zip(ranges)
        .map(|(club, (since, until))| Tenure { club, since, until })
        .collect())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    fn template(clubs: &str, years: &str) -> Template {
        let mut parameters = IndexMap::new();
        parameters.insert("clubs".to_string(), clubs.to_string());
        parameters.insert("years".to_string(), years.to_string());
        Template::new("Foo", "Bar", parameters)
    }

    #[test]
    fn aligned_triples() {
        let t = template(
            " FlagiconNOR [[Clausenengen FK|Clausenengen]]<br>FlagiconNOR [[Molde FK|Molde]]<br>FlagiconENG [[Manchester United F.C.|Manchester United]] ",
            " 1990–1994<br>1994–1996<br>1996–2007<br>'''Total''' ",
        );

        let tenures = extract_clubs_and_years(&t, "clubs", "years").unwrap();
        assert_eq!(tenures.len(), 3);
        assert_eq!(
            tenures[0],
            Tenure { club: "Clausenengen FK".to_string(), since: 1990, until: Some(1994) }
        );
        assert_eq!(
            tenures[1],
            Tenure { club: "Molde FK".to_string(), since: 1994, until: Some(1996) }
        );
        assert_eq!(
            tenures[2],
            Tenure { club: "Manchester United F.C.".to_string(), since: 1996, until: Some(2007) }
        );
    }

    #[test]
    fn open_trailing_range() {
        let t = template(
            " flagiconITA [[A.C. Milan|Milan]]<br>flagiconFRA [[Paris Saint-Germain F.C.|Paris Saint-Germain]]<br>flagiconENG [[Manchester United]]<br>flagiconENG [[Manchester United]]<br>flagiconUSA [[LA Galaxy] ",
            " 2011-2012<br>2012-2016<br>2016–2018<br>2017–2018<br>2018- ",
        );

        let tenures = extract_clubs_and_years(&t, "clubs", "years").unwrap();
        assert_eq!(tenures.len(), 5);
        assert_eq!(tenures[0].club, "A.C. Milan");
        assert_eq!((tenures[0].since, tenures[0].until), (2011, Some(2012)));
        assert_eq!(tenures[3].club, "Manchester United");
        assert_eq!((tenures[3].since, tenures[3].until), (2017, Some(2018)));
        assert_eq!(tenures[4].club, "LA Galaxy");
        assert_eq!(
            (tenures[4].since, tenures[4].until),
            (2018, None),
            "open period has no until year"
        );
    }

    #[test]
    fn count_mismatch_truncates() {
        let t = template("[[A]]<br>[[B]]<br>[[C]]", "2001-2002<br>2002-2003");
        let tenures = extract_clubs_and_years(&t, "clubs", "years").unwrap();
        assert_eq!(tenures.len(), 2);
        assert_eq!(tenures[1].club, "B");
    }

    #[test]
    fn missing_field_is_hard_failure() {
        let mut parameters = IndexMap::new();
        parameters.insert("clubs".to_string(), "[[A]]".to_string());
        let t = Template::new("Foo", "Bar", parameters);

        assert!(matches!(
            extract_clubs_and_years(&t, "clubs", "years"),
            Err(Error::MissingRequiredField { field: "years", .. })
        ));
        assert!(matches!(
            extract_clubs_and_years(&t, "managerclubs", "manageryears"),
            Err(Error::MissingRequiredField { field: "managerclubs", .. })
        ));
    }
}
