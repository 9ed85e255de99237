use chrono::{DateTime, NaiveDate};

/// What an unanswered field prints as, so it can be filled in by hand
pub const DEFAULT_PLACEHOLDER: &str = "_____________";

/// A field ready to be drawn: either the declarant's answer or a placeholder rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    pub text: String,
    /// `true` when `text` is an actual answer; only answers get padded and underlined
    pub is_filled: bool,
}

impl FieldValue {
    /// Format an optional raw value, substituting `placeholder` when it is absent or empty
    pub fn format(raw: Option<&str>, placeholder: &str) -> FieldValue {
        match raw {
            Some(value) if !value.is_empty() => FieldValue {
                text: value.to_string(),
                is_filled: true,
            },
            _ => FieldValue {
                text: placeholder.to_string(),
                is_filled: false,
            },
        }
    }

    /// [`FieldValue::format`] with the [`DEFAULT_PLACEHOLDER`]
    pub fn new(raw: Option<&str>) -> FieldValue {
        FieldValue::format(raw, DEFAULT_PLACEHOLDER)
    }
}

/// Render a date the way the form prints it, `DD/MM/YYYY`.
///
/// Accepts `YYYY-MM-DD` (what date inputs produce) or a full RFC 3339 timestamp.
/// Absent or empty input gives [None]; anything else that doesn't parse is passed
/// through untouched since field content is never validated.
pub fn format_date(raw: Option<&str>) -> Option<String> {
    let raw = raw.filter(|raw| !raw.is_empty())?;
    let trimmed = raw.trim();

    let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()));

    match parsed {
        Some(date) => Some(date.format("%d/%m/%Y").to_string()),
        None => {
            log::warn!("could not parse date {raw:?}, printing it as entered");
            Some(raw.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_values_become_placeholders() {
        for raw in [None, Some("")] {
            assert_eq!(
                FieldValue::new(raw),
                FieldValue {
                    text: DEFAULT_PLACEHOLDER.to_string(),
                    is_filled: false,
                }
            );
        }
    }

    #[test]
    fn placeholders_can_be_overridden() {
        let field = FieldValue::format(None, "");
        assert_eq!(field.text, "");
        assert!(!field.is_filled);
    }

    #[test]
    fn present_values_are_kept_verbatim() {
        for raw in ["SBIN0001", "  spaced  ", "_"] {
            let field = FieldValue::new(Some(raw));
            assert_eq!(field.text, raw);
            assert!(field.is_filled);
        }
    }

    #[test]
    fn dates_are_printed_day_first() {
        assert_eq!(format_date(Some("2024-03-05")).as_deref(), Some("05/03/2024"));
        assert_eq!(
            format_date(Some("2022-08-22T10:00:00+05:30")).as_deref(),
            Some("22/08/2022")
        );
    }

    #[test]
    fn missing_dates_are_not_filled() {
        assert_eq!(format_date(None), None);
        assert_eq!(format_date(Some("")), None);
        assert!(!FieldValue::new(format_date(None).as_deref()).is_filled);
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_date(Some("next tuesday")).as_deref(), Some("next tuesday"));
    }
}
