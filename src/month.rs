// src/month.rs
//! Month name → two-digit month code used to filter `dateOfSale`.

pub const DEFAULT_MONTH: &str = "march";

const MONTHS: [(&str, &str); 12] = [
    ("january", "01"),
    ("february", "02"),
    ("march", "03"),
    ("april", "04"),
    ("may", "05"),
    ("june", "06"),
    ("july", "07"),
    ("august", "08"),
    ("september", "09"),
    ("october", "10"),
    ("november", "11"),
    ("december", "12"),
];

/// What to do with a month name that is not one of the twelve English names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownMonthPolicy {
    /// Treat it like an absent month and report March.
    #[default]
    Fallback,
    /// Keep the label but match no records.
    NoMatch,
}

impl std::str::FromStr for UnknownMonthPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fallback" => Ok(Self::Fallback),
            "no-match" | "nomatch" | "no_match" => Ok(Self::NoMatch),
            other => Err(format!("unknown month policy '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMonth {
    /// Lowercased name echoed back to the client as `selectedMonth`.
    pub label: String,
    /// `None` only under [`UnknownMonthPolicy::NoMatch`].
    pub code: Option<&'static str>,
}

pub fn month_code(name: &str) -> Option<&'static str> {
    MONTHS
        .iter()
        .find(|(month, _)| *month == name)
        .map(|(_, code)| *code)
}

pub fn resolve_month(input: Option<&str>, policy: UnknownMonthPolicy) -> ResolvedMonth {
    let label = input
        .map(|m| m.trim().to_lowercase())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_MONTH.to_string());

    match month_code(&label) {
        Some(code) => ResolvedMonth { label, code: Some(code) },
        None => match policy {
            UnknownMonthPolicy::Fallback => ResolvedMonth {
                label: DEFAULT_MONTH.to_string(),
                code: month_code(DEFAULT_MONTH),
            },
            UnknownMonthPolicy::NoMatch => ResolvedMonth { label, code: None },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_month_name_resolves_case_insensitively() {
        for (i, (name, _)) in MONTHS.iter().enumerate() {
            let expected = format!("{:02}", i + 1);
            let upper = name.to_uppercase();
            let resolved = resolve_month(Some(&upper), UnknownMonthPolicy::Fallback);
            assert_eq!(resolved.code, Some(expected.as_str()));
            assert_eq!(resolved.label, *name);
        }
    }

    #[test]
    fn absent_or_blank_month_is_march() {
        for input in [None, Some(""), Some("   ")] {
            for policy in [UnknownMonthPolicy::Fallback, UnknownMonthPolicy::NoMatch] {
                let resolved = resolve_month(input, policy);
                assert_eq!(resolved.code, Some("03"));
                assert_eq!(resolved.label, "march");
            }
        }
    }

    #[test]
    fn unknown_month_follows_policy() {
        let fallback = resolve_month(Some("Smarch"), UnknownMonthPolicy::Fallback);
        assert_eq!(fallback.code, Some("03"));
        assert_eq!(fallback.label, "march");

        let no_match = resolve_month(Some("Smarch"), UnknownMonthPolicy::NoMatch);
        assert_eq!(no_match.code, None);
        assert_eq!(no_match.label, "smarch");
    }

    #[test]
    fn policy_parses_from_config_strings() {
        assert_eq!("fallback".parse(), Ok(UnknownMonthPolicy::Fallback));
        assert_eq!("No-Match".parse(), Ok(UnknownMonthPolicy::NoMatch));
        assert!("strict".parse::<UnknownMonthPolicy>().is_err());
    }
}
