//! Built-in template catalog.
//!
//! Ships the seed templates as embedded JSON so the CLI works without any
//! storage backend. Lookup is case-insensitive on the display name.

use datasmith_core::{Error, Result, TemplateDocument};

pub struct CatalogEntry {
    pub name: &'static str,
    pub content: &'static str,
}

pub const BUILTIN: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Healthcare Patients",
        content: include_str!("../templates/healthcare_patients.json"),
    },
    CatalogEntry {
        name: "E-commerce Orders",
        content: include_str!("../templates/ecommerce_orders.json"),
    },
    CatalogEntry {
        name: "Financial Transactions",
        content: include_str!("../templates/financial_transactions.json"),
    },
];

/// Resolves a template by display name.
pub fn resolve(name: &str) -> Result<TemplateDocument> {
    let entry = BUILTIN
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::TemplateNotFound(name.to_string()))?;
    TemplateDocument::from_content(entry.name, entry.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_template_parses() {
        for entry in BUILTIN {
            let template = resolve(entry.name).expect("builtin template parses");
            assert!(!template.properties.is_empty());
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(resolve("healthcare patients").is_ok());
        assert!(matches!(
            resolve("No Such Template"),
            Err(Error::TemplateNotFound(_))
        ));
    }
}
