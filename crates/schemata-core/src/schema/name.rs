use crate::{Error, Result};
use std_util::str;

/// A schema identifier: the name as supplied plus its normalized form.
///
/// Models and properties both carry a `Name`. Lookups always go through the
/// normalized form, so `first_name`, `FirstName` and `firstName` all resolve
/// to the same entry.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    name: String,
    original_name: String,
}

impl Name {
    /// Validates and normalizes `src` in strict mode.
    pub fn new(src: impl Into<String>) -> Result<Self> {
        let original_name = src.into();

        if original_name.trim().is_empty() {
            return Err(Error::missing_name());
        }

        let name = normalize_strict(&original_name)?;

        Ok(Self {
            name,
            original_name,
        })
    }

    /// The normalized (ORM-facing) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name exactly as supplied.
    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    /// Underscore-separated segments of the normalized name.
    pub fn parts(&self) -> Vec<String> {
        str::snake_case(&self.name)
            .split('_')
            .map(String::from)
            .collect()
    }

    /// Plural, lower-camel-cased form. Only the last segment of a compound
    /// name is pluralized: `purchaseOrder` -> `purchaseOrders`.
    pub fn pluralized(&self) -> String {
        let mut parts = self.parts();

        if let Some(last) = parts.last_mut() {
            *last = str::pluralize(last);
        }

        str::camel_case(&parts.join("_"))
    }
}

/// Folds `src` into its canonical lower camel case form.
///
/// Non-strict: never fails, and the result may be empty.
pub fn normalize(src: &str) -> String {
    str::camel_case(src)
}

/// Like [`normalize`], but rejects names that do not fold into a usable
/// identifier: empty, starting with a digit, or not stable under a second
/// fold. Some case mappings expand (`ß` uppercases to `SS`), so a folded name
/// can fold differently again; such a name could never be looked up.
pub fn normalize_strict(src: &str) -> Result<String> {
    let name = normalize(src);

    match name.chars().next() {
        Some(ch) if !ch.is_numeric() && normalize(&name) == name => Ok(name),
        _ => Err(Error::invalid_identifier(src)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_case_and_separators() {
        assert_eq!(normalize("first_name"), "firstName");
        assert_eq!(normalize("FirstName"), "firstName");
        assert_eq!(normalize("first-name"), "firstName");
        assert_eq!(normalize("firstName"), "firstName");
        assert_eq!(normalize("ID"), "id");
    }

    #[test]
    fn normalize_is_idempotent() {
        for src in ["order_id", "PurchaseOrder", "user-email", "x"] {
            let once = normalize(src);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn normalize_strict_output_is_a_fixed_point() {
        for src in [
            "order_id",
            "größe_wert",
            "straße",
            "maß_ß",
            "aa_ß",
            "aaBİ",
            "ﬀ_x",
            "x_ﬀ",
            "Ωmega_Σigma",
        ] {
            if let Ok(name) = normalize_strict(src) {
                assert_eq!(normalize(&name), name, "src={src:?}");
            }
        }
    }

    #[test]
    fn normalize_strict_rejects_expanding_case_maps() {
        let err = normalize_strict("maß_ß").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "`maß_ß` does not normalize to a valid identifier"
        );

        assert!(normalize_strict("aa_ß").is_err());
        assert_eq!(normalize_strict("größe_wert").unwrap(), "größeWert");
    }

    #[test]
    fn normalize_non_strict_allows_empty() {
        assert_eq!(normalize("___"), "");
    }

    #[test]
    fn normalize_strict_rejects_unusable_names() {
        assert!(normalize_strict("___").unwrap_err().is_validation());
        assert!(normalize_strict("42nd_street").unwrap_err().is_validation());
        assert_eq!(normalize_strict("street_42").unwrap(), "street42");
    }

    #[test]
    fn name_keeps_original() {
        let name = Name::new("purchase_order").unwrap();
        assert_eq!(name.name(), "purchaseOrder");
        assert_eq!(name.original_name(), "purchase_order");
        assert_eq!(name.parts(), ["purchase", "order"]);
    }

    #[test]
    fn blank_name_is_missing() {
        let err = Name::new("  ").unwrap_err();
        assert_eq!(err.to_string(), "`name` is a required field");
    }

    #[test]
    fn pluralize_last_segment_only() {
        assert_eq!(Name::new("order").unwrap().pluralized(), "orders");
        assert_eq!(
            Name::new("purchaseOrder").unwrap().pluralized(),
            "purchaseOrders"
        );
        assert_eq!(
            Name::new("person_category").unwrap().pluralized(),
            "personCategories"
        );
    }
}
