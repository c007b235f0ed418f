use std::sync::LazyLock;

use regex::Regex;

use crate::model::Value;

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[([^\]|]+)").unwrap());
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").unwrap());
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9.,]+").unwrap());

/// First wiki-style link target: `[[Target|Label]]` or `[[Target]]`.
pub fn extract_link(text: &str) -> Option<String> {
    extract_links(text).into_iter().next()
}

/// All wiki-style link targets, in order of appearance. An unclosed
/// `[[Target` still yields its target.
pub fn extract_links(text: &str) -> Vec<String> {
    LINK_RE
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// First run of four consecutive digits; `19730226df=y` yields 1973.
/// No calendar plausibility check.
pub fn extract_year(text: &str) -> Option<i64> {
    // four matched digits always fit in an i64
    YEAR_RE.find(text).map(|m| m.as_str().parse().unwrap())
}

/// First numeric run. A comma counts as a decimal separator; integer when
/// there is no fractional part. Runs that do not form a number (`1.2.3`,
/// a lone comma) yield `None`.
pub fn extract_number(text: &str) -> Option<Value> {
    let run = NUMBER_RE.find(text)?.as_str().replace(',', ".");

    if run.contains('.') {
        run.parse::<f64>().ok().map(Value::Float)
    } else {
        run.parse::<i64>().ok().map(Value::Int)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_with_label() {
        assert_eq!(
            extract_link(" flagiconENG [[Manchester United F.C.|Manchester United]] (caretaker manager) "),
            Some("Manchester United F.C.".to_string())
        );
    }

    #[test]
    fn link_without_label() {
        assert_eq!(extract_link(" FlagiconNOR [[Norway]] "), Some("Norway".to_string()));
    }

    #[test]
    fn no_link() {
        assert_eq!(extract_link(" Kristiansund "), None);
    }

    #[test]
    fn links_in_order() {
        assert_eq!(
            extract_links(" FlagiconNOR [[Clausenengen FK|Clausenengen]]<br>FlagiconNOR [[Molde FK|Molde]]<br>FlagiconENG [[Manchester United F.C.|Manchester United]]\n"),
            vec!["Clausenengen FK", "Molde FK", "Manchester United F.C."]
        );
    }

    #[test]
    fn links_short_form() {
        assert_eq!(extract_links("[[A|B]]<br>[[C]]"), vec!["A", "C"]);
    }

    #[test]
    fn links_none() {
        assert!(extract_links("no links here").is_empty());
    }

    #[test]
    fn year_inside_longer_run() {
        assert_eq!(extract_year(" Birth date and age19730226df=y "), Some(1973));
    }

    #[test]
    fn year_plain() {
        assert_eq!(extract_year(" 19 May 1917 "), Some(1917));
        assert_eq!(extract_year(" 1984 "), Some(1984));
    }

    #[test]
    fn year_no_digit_run() {
        assert_eq!(extract_year(" 12 july "), None);
        assert_eq!(extract_year(" 12abcd34 "), None);
        assert_eq!(extract_year("no digits"), None);
    }

    #[test]
    fn number_with_unit() {
        assert_eq!(extract_number("42.5 m"), Some(Value::Float(42.5)));
    }

    #[test]
    fn number_integer() {
        assert_eq!(extract_number("1973"), Some(Value::Int(1973)));
    }

    #[test]
    fn number_comma_as_decimal() {
        assert_eq!(extract_number("1,78"), Some(Value::Float(1.78)));
    }

    #[test]
    fn number_none() {
        assert_eq!(extract_number("no digits"), None);
    }

    #[test]
    fn number_unparseable_run() {
        assert_eq!(extract_number("1.2.3"), None);
        assert_eq!(extract_number("a , b"), None);
    }
}
