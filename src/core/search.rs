//! Linear substring search over the medication catalog.

use super::model::MedicationRecord;

/// Case-insensitive substring filter by product name, company, or main
/// ingredient.
///
/// An empty query matches nothing; the UI refilters on every keystroke, so
/// "match all" is never wanted here. Recomputed from scratch per call.
pub fn filter<'a>(query: &str, catalog: &'a [MedicationRecord]) -> Vec<&'a MedicationRecord> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|record| {
            record.product_name.to_lowercase().contains(&needle)
                || record.company.to_lowercase().contains(&needle)
                || record.main_ingredient.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(product: &str, company: &str, ingredient: &str) -> MedicationRecord {
        MedicationRecord {
            product_name: product.to_string(),
            company: company.to_string(),
            main_ingredient: ingredient.to_string(),
            effectiveness: String::new(),
            administration: String::new(),
            precautions: String::new(),
            warnings: String::new(),
            contraindications: String::new(),
            side_effects: String::new(),
            storage: String::new(),
        }
    }

    fn sample_catalog() -> Vec<MedicationRecord> {
        vec![
            make_record("Paracetamol", "Acme Pharma", "Paracetamol"),
            make_record("Aspirin", "Bayer", "Acetylsalicylic acid"),
            make_record("Gaviscon", "Reckitt", "Sodium alginate"),
        ]
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let catalog = sample_catalog();
        assert!(filter("", &catalog).is_empty());
    }

    #[test]
    fn test_matches_product_name_case_insensitive() {
        let catalog = sample_catalog();
        let hits = filter("para", &catalog);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product_name, "Paracetamol");

        assert_eq!(filter("PARA", &catalog).len(), 1);
    }

    #[test]
    fn test_matches_company_and_ingredient() {
        let catalog = sample_catalog();

        let by_company = filter("bayer", &catalog);
        assert_eq!(by_company.len(), 1);
        assert_eq!(by_company[0].product_name, "Aspirin");

        let by_ingredient = filter("alginate", &catalog);
        assert_eq!(by_ingredient.len(), 1);
        assert_eq!(by_ingredient[0].product_name, "Gaviscon");
    }

    #[test]
    fn test_no_match_yields_empty() {
        let catalog = sample_catalog();
        assert!(filter("ibuprofen", &catalog).is_empty());
    }

    #[test]
    fn test_substring_can_hit_several_rows() {
        let catalog = vec![
            make_record("Cold Relief Day", "Acme Pharma", "Phenylephrine"),
            make_record("Cold Relief Night", "Acme Pharma", "Diphenhydramine"),
        ];
        assert_eq!(filter("cold relief", &catalog).len(), 2);
    }
}
