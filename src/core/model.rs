//! Data model for the medication catalog and the user's tracked list.
//!
//! NOTE: TypeScript mirror types should be added to ui/src/types.ts

use serde::{Deserialize, Serialize};

use super::reminder::ReminderTime;

/// A single catalog row: reference data about one medication product.
///
/// Field order matches the column order of the persisted tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationRecord {
    /// Product name, unique within a table
    pub product_name: String,
    /// Manufacturer
    pub company: String,
    /// Main active ingredient
    pub main_ingredient: String,
    /// What the product is effective against
    pub effectiveness: String,
    /// How to administer
    pub administration: String,
    /// Precautions while taking
    pub precautions: String,
    /// Usage warnings
    pub warnings: String,
    /// Medications that must not be combined
    pub contraindications: String,
    /// Major side effects
    pub side_effects: String,
    /// Storage instructions
    pub storage: String,
}

/// When a dose should be taken relative to meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DosingCondition {
    BeforeMeal,
    AfterMeal,
    Fasting,
}

impl DosingCondition {
    /// Get the display name for this condition
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::BeforeMeal => "Before meals",
            Self::AfterMeal => "After meals",
            Self::Fasting => "On an empty stomach",
        }
    }

    /// Get the explanatory sentence shown next to the condition
    pub fn description(&self) -> &'static str {
        match self {
            Self::BeforeMeal => "Take about 30 minutes before starting a meal.",
            Self::AfterMeal => "Take within 30 minutes after finishing a meal.",
            Self::Fasting => {
                "Take on an empty stomach, at least 2 hours after the last meal."
            }
        }
    }

    /// Get all available dosing conditions
    pub fn all() -> &'static [DosingCondition] {
        &[Self::BeforeMeal, Self::AfterMeal, Self::Fasting]
    }
}

/// A catalog entry on the user's personal list, with its reminder settings.
///
/// The catalog row is flattened so the persisted table keeps one column per
/// record field, followed by the two mutable reminder columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedMedication {
    #[serde(flatten)]
    pub record: MedicationRecord,
    /// Daily reminder time, minute precision
    pub reminder: ReminderTime,
    /// Dosing condition bound to the reminder
    pub condition: DosingCondition,
}

impl TrackedMedication {
    pub fn new(record: MedicationRecord, reminder: ReminderTime, condition: DosingCondition) -> Self {
        Self {
            record,
            reminder,
            condition,
        }
    }

    pub fn product_name(&self) -> &str {
        &self.record.product_name
    }
}
