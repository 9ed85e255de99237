use std::collections::BTreeSet;

/// One tickable option on the form
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SelectableOption {
    /// What the caller puts in the selection set to tick this option
    pub code: &'static str,
    pub label: &'static str,
}

impl SelectableOption {
    pub fn is_selected(&self, selection: &BTreeSet<String>) -> bool {
        selection.contains(self.code)
    }
}

/// Purpose codes for the inward remittance, in the order the form lists them
pub const PURPOSES: [SelectableOption; 5] = [
    SelectableOption {
        code: "P0001",
        label: "Repatriation of Indian Portfolio investment abroad in equity capital (shares)",
    },
    SelectableOption {
        code: "P0002",
        label: "Repatriation of Indian Portfolio investment abroad in debt instruments",
    },
    SelectableOption {
        code: "P0021",
        label: "Receipts on account of sale of share under Employee stock option",
    },
    SelectableOption {
        code: "P1411",
        label: "Inward remittance of interest income on account of Portfolio Investment made abroad",
    },
    SelectableOption {
        code: "P1412",
        label: "Inward remittance of dividends on account of Portfolio Investment made abroad on equity",
    },
];

/// How the underlying investments were acquired, in the order the form lists them
pub const INVESTMENTS: [SelectableOption; 7] = [
    SelectableOption {
        code: "cashless",
        label: "Issued to me by the above company under the 'Cashless Employees Stock Option Scheme'",
    },
    SelectableOption {
        code: "rsu",
        label: "Allotted to me as an RSU (Restricted Stock Unit)",
    },
    SelectableOption {
        code: "dspp",
        label: "Allotted to me under DSPP (Direct Stock Purchase Plan)",
    },
    SelectableOption {
        code: "gift",
        label: "Acquired by way of gift from any person resident outside India",
    },
    SelectableOption {
        code: "inheritance",
        label: "Acquired by way of inheritance from a person whether a resident in or outside India",
    },
    SelectableOption {
        code: "nri",
        label: "Acquired when I was an NRI",
    },
    SelectableOption {
        code: "lrs",
        label: "Purchased by me through an outward remittance under the extant Liberalised Remittance Scheme",
    },
];

/// The investment checklist runs over the page break after this many options
pub const INVESTMENTS_ON_FIRST_PAGE: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        let purposes: BTreeSet<&str> = PURPOSES.iter().map(|option| option.code).collect();
        let investments: BTreeSet<&str> = INVESTMENTS.iter().map(|option| option.code).collect();
        assert_eq!(purposes.len(), PURPOSES.len());
        assert_eq!(investments.len(), INVESTMENTS.len());
    }

    #[test]
    fn selection_is_by_code() {
        let selection: BTreeSet<String> = ["rsu".to_string()].into_iter().collect();
        let ticked: Vec<&str> = INVESTMENTS
            .iter()
            .filter(|option| option.is_selected(&selection))
            .map(|option| option.code)
            .collect();
        assert_eq!(ticked, vec!["rsu"]);
    }
}
