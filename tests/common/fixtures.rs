//! Static trial corpora used across harnesses.
//!
//! `TRIALS_CSV` mirrors the shape of the real export: the seven columns the
//! core reads plus unrelated ones it must ignore, in a different order.

/// A small trial table. Relationships:
///
/// - NCT00000001 and NCT00000002 share the intervention `DRUG: Pembrolizumab`.
/// - NCT00000002 and NCT00000003 share the condition `Melanoma`.
/// - NCT00000004 is isolated.
/// - NCT00000005 has empty Conditions/Interventions.
pub const TRIALS_CSV: &str = "\
NCT Number,Study Title,Acronym,Study Status,Brief Summary,Conditions,Interventions,Sponsor,Study URL
NCT00000001,Pembrolizumab in Advanced NSCLC,KEY-1,RECRUITING,Checkpoint inhibitor after platinum chemotherapy.,Non-small Cell Lung Cancer|NSCLC,DRUG: Pembrolizumab,Merck Sharp & Dohme,https://clinicaltrials.gov/study/NCT00000001
NCT00000002,Adjuvant Keytruda for Resected Melanoma,KEY-2,ACTIVE_NOT_RECRUITING,Adjuvant PD-1 blockade.,Melanoma,DRUG: Pembrolizumab|DRUG: Placebo,Merck Sharp & Dohme,https://clinicaltrials.gov/study/NCT00000002
NCT00000003,Dabrafenib Plus Trametinib in BRAF Melanoma,,COMPLETED,Targeted therapy.,Melanoma|BRAF V600E,DRUG: Dabrafenib|DRUG: Trametinib,Novartis,https://clinicaltrials.gov/study/NCT00000003
NCT00000004,Acupuncture for Chronic Headache,,UNKNOWN,Sham-controlled acupuncture.,Headache,DEVICE: Acupuncture Needle,University Hospital,https://clinicaltrials.gov/study/NCT00000004
NCT00000005,\"Registry, Observational\",,WITHDRAWN,,,,Registry Org,
";

pub const TRIALS_CSV_IDS: [&str; 5] = [
    "NCT00000001",
    "NCT00000002",
    "NCT00000003",
    "NCT00000004",
    "NCT00000005",
];

/// Queries that exercise the built-in synonym table.
pub const SYNONYM_QUERIES: &[&str] = &[
    "nsclc",
    "immunotherapy",
    "keytruda",
    "nsclc immunotherapy",
    "chemo",
    "radiation therapy",
];
