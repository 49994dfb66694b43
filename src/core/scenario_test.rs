#[cfg(test)]
mod scenario_tests {
    use crate::core::model::{DosingCondition, MedicationRecord};
    use crate::core::notify::engine::ReminderEngine;
    use crate::core::search;
    use crate::core::store::{AddOutcome, MedStore, RemoveOutcome, CATALOG_FILE};
    use chrono::NaiveDate;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    fn aspirin() -> MedicationRecord {
        MedicationRecord {
            product_name: "Aspirin".to_string(),
            company: "Bayer".to_string(),
            main_ingredient: "Acetylsalicylic acid".to_string(),
            effectiveness: "Pain relief, fever reduction".to_string(),
            administration: "One tablet with water".to_string(),
            precautions: "Do not take on an empty stomach".to_string(),
            warnings: "Not for children under 12".to_string(),
            contraindications: "Warfarin".to_string(),
            side_effects: "Stomach irritation".to_string(),
            storage: "Below 25C, away from light".to_string(),
        }
    }

    #[test]
    fn simulate_search_add_remind_delete() {
        let dir = tempdir().unwrap();
        let catalog = vec![aspirin()];
        fs::write(
            dir.path().join(CATALOG_FILE),
            serde_json::to_string_pretty(&catalog).unwrap(),
        )
        .unwrap();

        let mut store = MedStore::open(dir.path()).unwrap();

        // The user types into the search box and picks the hit.
        let hits = search::filter("asp", store.catalog());
        assert_eq!(hits.len(), 1);
        let picked = hits[0].clone();

        // Add it with an 08:00 after-meal reminder.
        let outcome = store
            .add(picked, "08:00".parse().unwrap(), DosingCondition::AfterMeal)
            .unwrap();
        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(store.tracked().len(), 1);
        assert!(store.tracked_path().exists());

        // At 08:00 the poller fires exactly one notification.
        let mut engine = ReminderEngine::new(Duration::from_secs(60));
        let now = NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(8, 0, 30)
            .unwrap();
        let due = engine.tick(now, store.tracked());
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].product_name, "Aspirin");
        assert_eq!(due[0].condition, DosingCondition::AfterMeal);

        // Delete empties both the list and the file.
        let outcome = store.remove("Aspirin").unwrap();
        assert_eq!(outcome, RemoveOutcome::Removed);
        assert!(store.tracked().is_empty());

        let reopened = MedStore::open(dir.path()).unwrap();
        assert!(reopened.tracked().is_empty());
    }
}
