use std::collections::BTreeSet;

/// Treatment categories and their common side effects.
pub static SIDE_EFFECTS: &[(&str, &[&str])] = &[
    (
        "Hormonal Therapy",
        &["Hot flashes", "Vaginal dryness", "Mood changes", "Fatigue", "Nausea"],
    ),
    (
        "HER2-targeted Therapy",
        &[
            "Heart problems",
            "Diarrhea",
            "Liver problems",
            "Low white blood cell counts",
            "Fatigue",
        ],
    ),
    (
        "Chemotherapy",
        &[
            "Hair loss",
            "Nausea and vomiting",
            "Fatigue",
            "Increased risk of infection",
            "Mouth sores",
            "Loss of appetite",
            "Diarrhea or constipation",
            "Neuropathy",
        ],
    ),
    (
        "Immunotherapy",
        &[
            "Fatigue",
            "Skin reactions",
            "Diarrhea",
            "Shortness of breath",
            "Muscle or joint pain",
        ],
    ),
    (
        "Targeted Therapy",
        &[
            "Diarrhea",
            "Liver problems",
            "Skin rash",
            "High blood pressure",
            "Blood clotting issues",
        ],
    ),
    (
        "Bisphosphonates",
        &[
            "Bone, joint, or muscle pain",
            "Nausea",
            "Constipation",
            "Fatigue",
            "Low calcium levels in the blood",
        ],
    ),
];

/// Collects the side effects of every category named in the recommendations.
///
/// Matching is a case-insensitive substring test of each category name
/// against each recommendation.
pub fn resolve_side_effects<I, S>(treatment: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut effects = BTreeSet::new();

    for recommendation in treatment {
        let recommendation = recommendation.as_ref().to_lowercase();
        for (category, category_effects) in SIDE_EFFECTS {
            if recommendation.contains(&category.to_lowercase()) {
                tracing::debug!("Matched side-effect category '{}'", category);
                effects.extend(category_effects.iter().map(|e| e.to_string()));
            }
        }
    }

    effects
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> &'static [&'static str] {
        SIDE_EFFECTS
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, effects)| *effects)
            .unwrap()
    }

    #[test]
    fn test_no_category_gives_empty_set() {
        let effects = resolve_side_effects(["Surgery (lumpectomy or mastectomy), followed by radiation therapy."]);
        assert!(effects.is_empty());
        assert!(resolve_side_effects(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_union_without_duplicates() {
        let effects = resolve_side_effects(["Chemotherapy", "Hormonal Therapy"]);
        let expected: BTreeSet<String> = category("Chemotherapy")
            .iter()
            .chain(category("Hormonal Therapy"))
            .map(|e| e.to_string())
            .collect();
        assert_eq!(effects, expected);
        // Fatigue 兩個類別都有
        assert_eq!(effects.iter().filter(|e| *e == "Fatigue").count(), 1);
    }

    #[test]
    fn test_case_insensitive_match() {
        let effects = resolve_side_effects(["options include chemotherapy and immunotherapy."]);
        assert!(effects.contains("Hair loss"));
        assert!(effects.contains("Skin reactions"));
        assert!(!effects.contains("Hot flashes"));
    }

    #[test]
    fn test_her2_recommendation_also_matches_targeted_therapy() {
        let effects = resolve_side_effects(["HER2-targeted therapy."]);
        assert!(effects.contains("Heart problems"));
        assert!(effects.contains("Skin rash"));
    }
}
