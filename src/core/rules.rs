//! Treatment decision table.
//!
//! [`PROTOCOLS`] is read top-down. A protocol row whose tumor type and stage
//! band match contributes its base recommendation, then at most one
//! biomarker branch: branches are tried in row order and the first match
//! wins. Tumor subtype and lymph-node status are validated upstream but do
//! not select rows.

use crate::domain::model::{GeneticRisk, PatientInputs, TumorType};

pub const NO_DEFINED_PROTOCOL: &str =
    "No defined treatment protocol for this tumor type and stage; refer for multidisciplinary specialist review.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiomarkerProfile {
    /// ER+ PR+ HER2-
    HormonePositiveHer2Negative,
    /// ER+ HER2+, PR either way
    HormoneAndHer2Positive,
    Her2Positive,
    /// ER- PR- HER2-
    TripleNegative,
}

impl BiomarkerProfile {
    pub fn matches(&self, inputs: &PatientInputs) -> bool {
        let er = inputs.er_status.is_positive();
        let pr = inputs.pr_status.is_positive();
        let her2 = inputs.her2_status.is_positive();
        match self {
            BiomarkerProfile::HormonePositiveHer2Negative => er && pr && !her2,
            BiomarkerProfile::HormoneAndHer2Positive => er && her2,
            BiomarkerProfile::Her2Positive => her2,
            BiomarkerProfile::TripleNegative => inputs.is_triple_negative(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Always(&'static str),
    /// Keyed on genetic risk; nothing is added when the risk is unknown.
    ByGeneticRisk {
        low: &'static str,
        high: &'static str,
    },
}

impl Outcome {
    fn resolve(&self, risk: Option<GeneticRisk>) -> Option<&'static str> {
        match (*self, risk) {
            (Outcome::Always(text), _) => Some(text),
            (Outcome::ByGeneticRisk { low, .. }, Some(GeneticRisk::Low)) => Some(low),
            (Outcome::ByGeneticRisk { high, .. }, Some(GeneticRisk::High)) => Some(high),
            (Outcome::ByGeneticRisk { .. }, None) => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Branch {
    pub profile: BiomarkerProfile,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy)]
pub struct Protocol {
    pub name: &'static str,
    pub tumor_type: TumorType,
    pub first_stage: u8,
    pub last_stage: u8,
    pub base: &'static str,
    pub branches: &'static [Branch],
}

impl Protocol {
    pub fn applies_to(&self, inputs: &PatientInputs) -> bool {
        let stage = inputs.tumor_stage.value();
        self.tumor_type == inputs.tumor_type && (self.first_stage..=self.last_stage).contains(&stage)
    }

    fn branch_for(&self, inputs: &PatientInputs) -> Option<&Branch> {
        self.branches.iter().find(|b| b.profile.matches(inputs))
    }
}

pub static PROTOCOLS: &[Protocol] = &[
    Protocol {
        name: "in-situ stage 0",
        tumor_type: TumorType::InSitu,
        first_stage: 0,
        last_stage: 0,
        base: "Lumpectomy or mastectomy, often followed by radiation therapy.",
        branches: &[],
    },
    Protocol {
        name: "invasive early stage",
        tumor_type: TumorType::Invasive,
        first_stage: 1,
        last_stage: 2,
        base: "Surgery (lumpectomy or mastectomy), followed by radiation therapy.",
        branches: &[
            Branch {
                profile: BiomarkerProfile::HormonePositiveHer2Negative,
                outcome: Outcome::ByGeneticRisk {
                    low: "Adjuvant hormone therapy (e.g., Tamoxifen, Aromatase inhibitors).",
                    high: "Chemotherapy followed by hormone therapy.",
                },
            },
            Branch {
                profile: BiomarkerProfile::HormoneAndHer2Positive,
                outcome: Outcome::Always(
                    "Combination of hormone therapy, HER2-targeted therapy (e.g., Trastuzumab), and chemotherapy.",
                ),
            },
            Branch {
                profile: BiomarkerProfile::Her2Positive,
                outcome: Outcome::Always("HER2-targeted therapy with chemotherapy."),
            },
            Branch {
                profile: BiomarkerProfile::TripleNegative,
                outcome: Outcome::Always(
                    "Chemotherapy is the mainstay, with possible addition of immunotherapy for advanced stages.",
                ),
            },
        ],
    },
    Protocol {
        name: "invasive locally advanced",
        tumor_type: TumorType::Invasive,
        first_stage: 3,
        last_stage: 3,
        base: "Neoadjuvant chemotherapy to shrink the tumor, followed by surgery and radiation.",
        branches: &[
            Branch {
                profile: BiomarkerProfile::HormonePositiveHer2Negative,
                outcome: Outcome::Always("Adjuvant hormone therapy."),
            },
            Branch {
                profile: BiomarkerProfile::Her2Positive,
                outcome: Outcome::Always("HER2-targeted therapy."),
            },
            Branch {
                profile: BiomarkerProfile::TripleNegative,
                outcome: Outcome::Always("Chemotherapy."),
            },
        ],
    },
    Protocol {
        name: "invasive metastatic",
        tumor_type: TumorType::Invasive,
        first_stage: 4,
        last_stage: 4,
        base: "Systemic therapies to control spread and improve quality of life.",
        branches: &[
            Branch {
                profile: BiomarkerProfile::HormonePositiveHer2Negative,
                outcome: Outcome::Always("Options include hormone therapy and chemotherapy."),
            },
            Branch {
                profile: BiomarkerProfile::Her2Positive,
                outcome: Outcome::Always("Options include HER2-targeted therapy and chemotherapy."),
            },
            Branch {
                profile: BiomarkerProfile::TripleNegative,
                outcome: Outcome::Always("Options include chemotherapy and immunotherapy."),
            },
        ],
    },
];

/// Builds the ordered recommendation list for validated inputs.
pub fn evaluate(inputs: &PatientInputs) -> Vec<String> {
    let mut recommendations = Vec::new();
    let mut matched = false;

    for protocol in PROTOCOLS.iter().filter(|p| p.applies_to(inputs)) {
        matched = true;
        tracing::debug!("Protocol '{}' applies", protocol.name);
        recommendations.push(protocol.base.to_string());

        match protocol.branch_for(inputs) {
            Some(branch) => {
                tracing::debug!("Biomarker branch {:?} fired", branch.profile);
                if let Some(text) = branch.outcome.resolve(inputs.genetic_risk) {
                    recommendations.push(text.to_string());
                } else {
                    tracing::debug!("No genetic risk given; branch {:?} adds nothing", branch.profile);
                }
            }
            None => tracing::debug!("No biomarker branch matched"),
        }
    }

    if !matched {
        tracing::warn!(
            "⚠️ No protocol for {} tumor at stage {}",
            inputs.tumor_type.as_str(),
            inputs.tumor_stage.value()
        );
        recommendations.push(NO_DEFINED_PROTOCOL.to_string());
    }

    recommendations
}
