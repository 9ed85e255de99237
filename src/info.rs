use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// The document information dictionary
#[derive(Default, Debug, Clone)]
pub struct Info {
    pub title: Option<String>,
    /// The declarant, when known
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Written space-separated
    pub keywords: Vec<String>,
    /// When the document was made; the moment it is written if unset
    pub created: Option<DateTime<FixedOffset>>,
}

impl Info {
    pub fn new() -> Info {
        Info::default()
    }

    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn keyword<S: ToString>(&mut self, keyword: S) -> &mut Self {
        self.keywords.push(keyword.to_string());
        self
    }

    pub fn created(&mut self, created: DateTime<FixedOffset>) -> &mut Self {
        self.created = Some(created);
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject));
        }
        let keywords = self.keywords.join(" ");
        if !keywords.is_empty() {
            info.keywords(TextStr(&keywords));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));

        let created = self
            .created
            .unwrap_or_else(|| Local::now().fixed_offset());
        info.creation_date(pdf_date(&created));
    }
}

/// Split a UTC offset in seconds into signed hours and unsigned minutes, the way PDF
/// dates record it
fn split_offset(seconds: i32) -> (i8, u8) {
    let hours = seconds / 3600;
    let minutes = ((seconds - hours * 3600) / 60).abs();
    (hours as i8, minutes as u8)
}

fn pdf_date(at: &DateTime<FixedOffset>) -> PDate {
    let (hours, minutes) = split_offset(at.offset().local_minus_utc());
    PDate::new(at.year() as u16)
        .month(at.month() as u8)
        .day(at.day() as u8)
        .hour(at.hour() as u8)
        .minute(at.minute() as u8)
        .second(at.second() as u8)
        .utc_offset_hour(hours)
        .utc_offset_minute(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_split_into_hours_and_minutes() {
        // IST
        assert_eq!(split_offset(5 * 3600 + 30 * 60), (5, 30));
        assert_eq!(split_offset(-(3 * 3600 + 30 * 60)), (-3, 30));
        assert_eq!(split_offset(0), (0, 0));
    }

    #[test]
    fn keywords_and_dates_are_written() {
        let created = DateTime::parse_from_rfc3339("2024-03-05T10:15:00+05:30").expect("valid date");
        let mut info = Info::new();
        info.title("Declaration").keyword("P0021").keyword("P0001").created(created);

        let mut refs = ObjectReferences::new();
        let mut writer = Pdf::new();
        info.write(&mut refs, &mut writer);
        let bytes = writer.finish();
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.contains("(P0021 P0001)"));
        assert!(text.contains("D:20240305101500+05'30"));
        assert!(refs.get(RefType::Info).is_some());
    }
}
