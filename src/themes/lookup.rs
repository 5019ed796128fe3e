use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Canonical names for the major theme codes.
pub static MAJOR_THEMES: Lazy<CodeNameTable> = Lazy::new(|| {
    CodeNameTable::new([
        ("1", "Economic management"),
        ("2", "Public sector governance"),
        ("3", "Rule of law"),
        ("4", "Financial and private sector development"),
        ("5", "Trade and integration"),
        ("6", "Social protection and risk management"),
        ("7", "Social dev/gender/inclusion"),
        ("8", "Human development"),
        ("9", "Urban development"),
        ("10", "Rural development"),
        ("11", "Environment and natural resources management"),
    ])
});

/// Immutable code → name mapping. Codes match by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeNameTable {
    names: HashMap<String, String>,
}

impl CodeNameTable {
    pub fn new<I, C, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(c, n)| (c.into(), n.into()))
                .collect(),
        }
    }

    pub fn name_for(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_themes_cover_codes_one_to_eleven() {
        assert_eq!(MAJOR_THEMES.len(), 11);
        for code in 1..=11 {
            assert!(MAJOR_THEMES.name_for(&code.to_string()).is_some());
        }
        assert_eq!(MAJOR_THEMES.name_for("1"), Some("Economic management"));
        assert_eq!(
            MAJOR_THEMES.name_for("11"),
            Some("Environment and natural resources management")
        );
    }

    #[test]
    fn test_codes_match_exactly() {
        assert_eq!(MAJOR_THEMES.name_for("01"), None);
        assert_eq!(MAJOR_THEMES.name_for(" 1"), None);
        assert_eq!(MAJOR_THEMES.name_for("12"), None);
        assert_eq!(MAJOR_THEMES.name_for(""), None);
    }
}
