use crate::domain::model::{Complexity, Module};
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let modules = vec![
        Module::new(
            "User authentication",
            40,
            Complexity::Medium,
            "Login, registration and password recovery",
        ),
        Module::new(
            "Database",
            60,
            Complexity::High,
            "Database modelling and implementation",
        ),
        Module::new(
            "Responsive web interface",
            80,
            Complexity::High,
            "Adaptive layout for desktop and mobile",
        ),
        Module::new(
            "REST API",
            50,
            Complexity::Medium,
            "Web services for frontend communication",
        ),
        Module::new(
            "Admin panel",
            45,
            Complexity::Medium,
            "Interface for managing the system",
        ),
        Module::new(
            "Reports and statistics",
            35,
            Complexity::Low,
            "PDF report generation and charts",
        ),
    ];
    Catalog {
        index: index_of(&modules),
        modules,
    }
});

fn index_of(modules: &[Module]) -> HashMap<String, usize> {
    modules
        .iter()
        .enumerate()
        .map(|(i, m)| (m.name.clone(), i))
        .collect()
}

/// Read-only module catalog. Iteration order is definition order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    modules: Vec<Module>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(modules: Vec<Module>) -> Result<Self> {
        let mut index = HashMap::with_capacity(modules.len());
        for (i, module) in modules.iter().enumerate() {
            validate_non_empty_string("module.name", &module.name)?;
            validate_positive_number("module.effort_hours", u64::from(module.effort_hours), 1)?;
            if index.insert(module.name.clone(), i).is_some() {
                return Err(QuoteError::invalid_input(
                    "module.name",
                    &module.name,
                    "Module names must be unique within a catalog",
                ));
            }
        }
        Ok(Self { modules, index })
    }

    /// The default six-module catalog, built once per process.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn list_modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn get(&self, name: &str) -> Result<&Module> {
        self.index
            .get(name)
            .map(|&i| &self.modules[i])
            .ok_or_else(|| QuoteError::NotFound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_keeps_definition_order() {
        let names: Vec<&str> = Catalog::builtin()
            .list_modules()
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "User authentication",
                "Database",
                "Responsive web interface",
                "REST API",
                "Admin panel",
                "Reports and statistics",
            ]
        );
    }

    #[test]
    fn test_get_known_and_unknown() {
        let catalog = Catalog::builtin();
        let db = catalog.get("Database").unwrap();
        assert_eq!(db.effort_hours, 60);
        assert_eq!(db.complexity, Complexity::High);

        match catalog.get("Blockchain") {
            Err(QuoteError::NotFound { name }) => assert_eq!(name, "Blockchain"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let modules = vec![
            Module::new("Auth", 40, Complexity::Medium, ""),
            Module::new("Auth", 10, Complexity::Low, ""),
        ];
        assert!(Catalog::new(modules).is_err());
    }

    #[test]
    fn test_rejects_zero_effort_and_blank_names() {
        assert!(Catalog::new(vec![Module::new("Auth", 0, Complexity::Low, "")]).is_err());
        assert!(Catalog::new(vec![Module::new("  ", 8, Complexity::Low, "")]).is_err());
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(!catalog.contains("Auth"));
    }
}
