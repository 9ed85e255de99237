use crate::DeclarationError;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;
use std::io::Read;

/// Everything the declarant filled in on the form.
///
/// Every field is optional; absent answers print as blanks to fill in by hand. Keys
/// are camelCase in JSON, matching the form's input ids.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeclarationRecord {
    /// Date the declaration is made, `YYYY-MM-DD`
    pub today_date: Option<String>,
    pub account_number: Option<String>,
    pub branch_name: Option<String>,
    /// The declarant
    pub your_name: Option<String>,
    /// Foreign company whose ESOPs were sold
    pub foreign_company: Option<String>,
    /// Overseas broking account the funds come from
    pub fund_transfer: Option<String>,
    pub currency: Option<String>,
    pub amount: Option<String>,
    pub received_from: Option<String>,
    /// Date of sale of the shares, `YYYY-MM-DD`
    pub sale_date: Option<String>,
    pub amount_remitted: Option<String>,
    /// Date of the original outward remittance, `YYYY-MM-DD`
    pub remittance_date: Option<String>,
    pub bank_name: Option<String>,
    pub bank_branch: Option<String>,
    /// Indian company to be informed of buy-backs
    pub indian_company: Option<String>,
    /// Codes of the ticked remittance purposes
    #[serde(deserialize_with = "selection")]
    pub purposes: BTreeSet<String>,
    /// Values of the ticked investment origins
    #[serde(deserialize_with = "selection")]
    pub investments: BTreeSet<String>,
}

impl DeclarationRecord {
    /// Read a record from JSON
    pub fn from_reader<R: Read>(reader: R) -> Result<DeclarationRecord, DeclarationError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// The declarant's name, if one was given
    pub fn declarant(&self) -> Option<&str> {
        self.your_name.as_deref().filter(|name| !name.is_empty())
    }
}

impl std::str::FromStr for DeclarationRecord {
    type Err = DeclarationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Ticked options arrive either as bare codes or as the `{ value, label }` pairs
/// the form collects
#[derive(Deserialize)]
#[serde(untagged)]
enum Ticked {
    Code(String),
    Checkbox { value: String },
}

fn selection<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BTreeSet<String>, D::Error> {
    let ticked: Option<Vec<Ticked>> = Option::deserialize(deserializer)?;
    Ok(ticked
        .unwrap_or_default()
        .into_iter()
        .map(|ticked| match ticked {
            Ticked::Code(code) => code,
            Ticked::Checkbox { value } => value,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn everything_is_optional() {
        let record: DeclarationRecord = "{}".parse().expect("empty record parses");
        assert_eq!(record, DeclarationRecord::default());
        assert_eq!(record.declarant(), None);
    }

    #[test]
    fn reads_camel_case_fields_and_selections() {
        let record: DeclarationRecord = r#"{
            "yourName": "Jane Doe",
            "accountNumber": "12345678901",
            "saleDate": "2024-03-05",
            "purposes": ["P0021", "P0001", "P0021"],
            "investments": [{ "value": "rsu", "label": "Allotted to me as an RSU" }],
            "currency": null
        }"#
        .parse()
        .expect("record parses");

        assert_eq!(record.declarant(), Some("Jane Doe"));
        assert_eq!(record.account_number.as_deref(), Some("12345678901"));
        assert_eq!(record.sale_date.as_deref(), Some("2024-03-05"));
        assert_eq!(record.currency, None);
        assert_eq!(
            record.purposes.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["P0001", "P0021"]
        );
        assert!(record.investments.contains("rsu"));
    }

    #[test]
    fn empty_names_are_no_names() {
        let record = DeclarationRecord {
            your_name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(record.declarant(), None);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let result = "{ \"purposes\": 7 }".parse::<DeclarationRecord>();
        assert!(matches!(result, Err(DeclarationError::Json(_))));
    }
}
