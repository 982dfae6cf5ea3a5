use heck::{ToLowerCamelCase, ToSnakeCase};

/// `purchaseOrder` -> `purchase_order`
pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

/// `purchase_order` -> `purchaseOrder`
pub fn camel_case(src: &str) -> String {
    src.to_lower_camel_case()
}

/// Pluralizes a single word. Compound names should be split first.
pub fn pluralize(word: &str) -> String {
    pluralizer::pluralize(word, 2, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_conversions() {
        assert_eq!(snake_case("purchaseOrder"), "purchase_order");
        assert_eq!(snake_case("PurchaseOrder"), "purchase_order");
        assert_eq!(camel_case("purchase_order"), "purchaseOrder");
        assert_eq!(camel_case("PurchaseOrder"), "purchaseOrder");
    }

    #[test]
    fn pluralize_words() {
        assert_eq!(pluralize("order"), "orders");
        assert_eq!(pluralize("person"), "people");
        assert_eq!(pluralize("category"), "categories");
    }
}
