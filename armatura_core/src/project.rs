//! # Project Data Structures
//!
//! The `Project` struct is the root container for a set of named section
//! designs. Projects serialize to `.arm` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: GlobalSettings (design code, default factors)
//! └── items: HashMap<Uuid, CalculationItem> (all sections)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use armatura_core::calculations::{CalculationItem, SectionInput};
//! use armatura_core::project::Project;
//!
//! let mut project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//! project.add_item(CalculationItem::RectangularSection(SectionInput::reference()));
//!
//! let runs = project.run_all();
//! assert_eq!(runs.len(), 1);
//! assert!(runs[0].outcome.is_ok());
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{CalculationItem, SectionInput, SectionResult};
use crate::errors::{CalcError, CalcResult};
use crate::materials::DEFAULT_ES_MPA;

/// Current schema version for .arm files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// Items are stored in a flat UUID-keyed map so labels can be edited
/// without breaking references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Global settings (design code, default factors)
    pub settings: GlobalSettings,

    /// All section designs, keyed by UUID
    pub items: HashMap<Uuid, CalculationItem>,
}

/// Outcome of running one project item.
#[derive(Debug)]
pub struct ItemRun {
    pub id: Uuid,
    pub label: String,
    pub outcome: CalcResult<SectionResult>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// ```rust
    /// use armatura_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// assert_eq!(project.settings.code, "EN 1992-1-1");
    /// ```
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a calculation item to the project.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a calculation item by UUID.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a calculation item by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Find the first item whose label matches exactly.
    pub fn find_by_label(&self, label: &str) -> Option<(Uuid, &CalculationItem)> {
        self.items
            .iter()
            .find(|(_, item)| item.label() == label)
            .map(|(id, item)| (*id, item))
    }

    /// Remove the first item with the given label.
    pub fn remove_by_label(&mut self, label: &str) -> CalcResult<CalculationItem> {
        let id = self
            .find_by_label(label)
            .map(|(id, _)| id)
            .ok_or_else(|| CalcError::item_not_found(label))?;
        self.remove_item(&id).ok_or_else(|| CalcError::item_not_found(label))
    }

    /// Items ordered by label, then id, for stable listings.
    pub fn sorted_items(&self) -> Vec<(Uuid, &CalculationItem)> {
        let mut items: Vec<_> = self.items.iter().map(|(id, item)| (*id, item)).collect();
        items.sort_by(|a, b| a.1.label().cmp(b.1.label()).then(a.0.cmp(&b.0)));
        items
    }

    /// Run every item, in the order of [`Project::sorted_items`].
    ///
    /// An invalid item does not stop the others; its error is kept in the
    /// returned [`ItemRun`].
    pub fn run_all(&self) -> Vec<ItemRun> {
        self.sorted_items()
            .into_iter()
            .map(|(id, item)| ItemRun {
                id,
                label: item.label().to_string(),
                outcome: item.run(),
            })
            .collect()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Design code label
    pub code: String,

    /// Defaults used when building inputs without explicit factors
    pub defaults: DesignDefaults,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            code: "EN 1992-1-1".to_string(),
            defaults: DesignDefaults::default(),
        }
    }
}

/// Partial factors and material defaults (EN 1992-1-1 recommended values).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignDefaults {
    pub alpha_cc: f64,
    pub gamma_c: f64,
    pub gamma_s: f64,
    pub es_mpa: f64,
    pub fyk_mpa: f64,
}

impl Default for DesignDefaults {
    fn default() -> Self {
        DesignDefaults {
            alpha_cc: 1.0,
            gamma_c: 1.5,
            gamma_s: 1.15,
            es_mpa: DEFAULT_ES_MPA,
            fyk_mpa: 500.0,
        }
    }
}

impl DesignDefaults {
    /// Build a section input, filling factors and steel from the defaults.
    #[allow(clippy::too_many_arguments)]
    pub fn section(
        &self,
        label: impl Into<String>,
        h_m: f64,
        b_m: f64,
        c_m: f64,
        c_prime_m: f64,
        fck_mpa: f64,
        med_knm: f64,
        ned_kn: f64,
    ) -> SectionInput {
        SectionInput {
            label: label.into(),
            h_m,
            b_m,
            c_m,
            c_prime_m,
            fck_mpa,
            alpha_cc: self.alpha_cc,
            gamma_c: self.gamma_c,
            fyk_mpa: self.fyk_mpa,
            gamma_s: self.gamma_s,
            es_mpa: self.es_mpa,
            med_knm,
            ned_kn,
        }
    }
}
