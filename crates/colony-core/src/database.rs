//! Inspiration Database
//!
//! Every inspiration definition the host knows about, loaded from a TOML or
//! JSON catalog file or from the built-in set.

use bevy_ecs::prelude::*;
use colony_events::{InspirationClass, InspirationDef, WorkTag};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),
    #[error("duplicate inspiration def_name: {0}")]
    Duplicate(String),
    #[error("invalid inspiration: {0}")]
    Invalid(String),
}

/// On-disk TOML layout: a list of `[[inspiration]]` tables.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "inspiration")]
    inspirations: Vec<InspirationDef>,
}

/// All statically defined inspirations, in declaration order.
#[derive(Resource, Debug, Clone, Default)]
pub struct InspirationDatabase {
    defs: Vec<InspirationDef>,
}

impl InspirationDatabase {
    /// Builds a database, rejecting empty or duplicate identifiers.
    pub fn from_defs(defs: Vec<InspirationDef>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for def in &defs {
            if def.def_name.trim().is_empty() {
                return Err(CatalogError::Invalid("empty def_name".to_string()));
            }
            if !seen.insert(def.def_name.as_str()) {
                return Err(CatalogError::Duplicate(def.def_name.clone()));
            }
        }
        Ok(Self { defs })
    }

    /// Loads a catalog, choosing the parser from the file extension.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => Err(CatalogError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::from_defs(file.inspirations)
    }

    /// Parses a JSON array of definitions.
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let defs: Vec<InspirationDef> = serde_json::from_str(content)?;
        Self::from_defs(defs)
    }

    /// The built-in catalog shipped with the game.
    pub fn builtin() -> Self {
        Self {
            defs: builtin_defs(),
        }
    }

    pub fn all(&self) -> &[InspirationDef] {
        &self.defs
    }

    pub fn get(&self, def_name: &str) -> Option<&InspirationDef> {
        self.defs.iter().find(|d| d.def_name == def_name)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

fn builtin_defs() -> Vec<InspirationDef> {
    vec![
        InspirationDef::new("Inspired_Creativity", "inspired creativity")
            .with_description("Next crafted or constructed item will be of higher quality.")
            .with_class(InspirationClass::Creativity)
            .with_required_work(WorkTag::Artistic)
            .with_duration_days(4.0),
        InspirationDef::new("Inspired_Trade", "inspired trade")
            .with_description("Better prices on the next trade.")
            .with_class(InspirationClass::Trade)
            .with_required_work(WorkTag::Social)
            .with_duration_days(4.0),
        InspirationDef::new("Inspired_Recruitment", "inspired recruitment")
            .with_description("The next recruitment attempt will succeed.")
            .with_class(InspirationClass::Recruitment)
            .with_required_work(WorkTag::Social)
            .with_duration_days(4.0),
        InspirationDef::new("Frenzy_Work", "frenzy: work")
            .with_description("Greatly increased work speed.")
            .with_class(InspirationClass::FrenzyWork)
            .with_required_work(WorkTag::ManualDumb)
            .with_duration_days(1.0),
        InspirationDef::new("Frenzy_Shoot", "frenzy: shoot")
            .with_description("Greatly increased aiming speed.")
            .with_class(InspirationClass::FrenzyShoot)
            .with_required_work(WorkTag::Violent)
            .with_duration_days(1.0),
        InspirationDef::new("Frenzy_Go", "frenzy: go")
            .with_description("Greatly increased movement speed.")
            .with_class(InspirationClass::FrenzyGo)
            .with_duration_days(1.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let db = InspirationDatabase::builtin();
        assert_eq!(db.len(), 6);
        assert!(db.get("Frenzy_Go").is_some());
        assert!(db.get("missing").is_none());
        // Built-in defs must themselves pass validation
        assert!(InspirationDatabase::from_defs(db.all().to_vec()).is_ok());
    }

    #[test]
    fn test_parse_toml_catalog() {
        let toml = r#"
            [[inspiration]]
            def_name = "Inspired_Surgery"
            label = "inspired surgery"
            class = "creativity"
            required_work = "intellectual"

            [[inspiration]]
            def_name = "Frenzy_Go"
            class = "frenzy_go"
            base_duration_days = 0.5
        "#;

        let db = InspirationDatabase::from_toml_str(toml).unwrap();
        assert_eq!(db.len(), 2);
        assert_eq!(db.all()[0].required_work, Some(WorkTag::Intellectual));
        assert_eq!(db.all()[1].label, None);
        assert_eq!(db.all()[1].base_duration_days, 0.5);
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let db = InspirationDatabase::from_toml_str("").unwrap();
        assert!(db.is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let defs = vec![InspirationDef::new("a", "a"), InspirationDef::new("a", "b")];
        assert!(matches!(
            InspirationDatabase::from_defs(defs),
            Err(CatalogError::Duplicate(name)) if name == "a"
        ));
    }

    #[test]
    fn test_empty_def_name_rejected() {
        let defs = vec![InspirationDef::new(" ", "blank")];
        assert!(matches!(
            InspirationDatabase::from_defs(defs),
            Err(CatalogError::Invalid(_))
        ));
    }
}
