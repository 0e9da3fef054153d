use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use thiserror::Error;

use crate::dto::document::ConsentRecord;
use crate::services::classification::{ClassificationError, compute_age};

/// Date format used on the printed consent form.
const FORM_DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("template is missing placeholders: {}", missing.join(", "))]
    TemplateFieldMismatch { missing: Vec<String> },

    #[error(transparent)]
    Classification(#[from] ClassificationError),
}

/// Semantic fields of the consent/registration form. Each variant has one
/// derivation rule against a [`ConsentRecord`]; the placeholder it lands in
/// comes from the [`FieldMapping`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentField {
    FamilyName,
    GivenNames,
    Gender,
    Age,
    Weight,
    Country,
    Email,
    PostalAddress,
    Telephone,
    Rank,
    CoachName,
    CoachRank,
    CompetitorName,
    Signature,
    IssueDate,
    Birthday,
    FormsCompetition,
    SpecialTechniques,
    FreeSparring,
}

/// Immutable field-name → template-placeholder table, evaluated in order.
/// Loaded once per process as static configuration.
#[derive(Debug, Clone)]
pub struct FieldMapping {
    entries: Vec<(ConsentField, String)>,
}

impl FieldMapping {
    pub fn new(entries: Vec<(ConsentField, String)>) -> Self {
        Self { entries }
    }

    /// The mapping for the federation's invitation-letter consent form.
    /// Placeholder names match the fillable fields declared in the PDF
    /// template, including the lowercase `check1` oddity.
    pub fn consent_form() -> Self {
        use ConsentField::*;

        let entries = [
            (FamilyName, "Text1"),
            (GivenNames, "Text2"),
            (Gender, "Text3"),
            (Age, "Text4"),
            (Weight, "Text5"),
            (Country, "Text6"),
            (Email, "Text7"),
            (PostalAddress, "Text8"),
            (Telephone, "Text9"),
            (Rank, "Text10"),
            (CoachName, "Text11"),
            (CoachRank, "Text12"),
            (CompetitorName, "Text13"),
            (Signature, "Text14"),
            (IssueDate, "Text15"),
            (Birthday, "Text16"),
            (FormsCompetition, "check1"),
            (SpecialTechniques, "check2"),
            (FreeSparring, "check3"),
        ];

        Self::new(
            entries
                .into_iter()
                .map(|(field, placeholder)| (field, placeholder.to_string()))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[(ConsentField, String)] {
        &self.entries
    }

    /// The full placeholder set this mapping can produce.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, placeholder)| placeholder.as_str())
    }
}

/// Builds the placeholder → value map for one athlete record.
///
/// Name and date of birth are mandatory; every other field degrades to an
/// empty string when absent. Either a complete map is returned or the call
/// fails; there is no partial fill.
pub fn build_field_values(
    record: &ConsentRecord,
    today: NaiveDate,
    mapping: &FieldMapping,
) -> Result<BTreeMap<String, String>, DocumentError> {
    if record.name.trim().is_empty() {
        return Err(DocumentError::MissingRequiredField("name"));
    }
    let dob = record
        .dob
        .ok_or(DocumentError::MissingRequiredField("date of birth"))?;

    let age = compute_age(dob, today)?;

    // Last whitespace token is the family name, everything before it the
    // given names.
    let tokens: Vec<&str> = record.name.split_whitespace().collect();
    let family_name = tokens.last().copied().unwrap_or_default().to_string();
    let given_names = tokens[..tokens.len().saturating_sub(1)].join(" ");

    let mut values = BTreeMap::new();
    for (field, placeholder) in mapping.entries() {
        let value = match field {
            ConsentField::FamilyName => family_name.clone(),
            ConsentField::GivenNames => given_names.clone(),
            ConsentField::Gender => record.gender.clone(),
            ConsentField::Age => age.to_string(),
            ConsentField::Weight => {
                record.weight.map(|w| w.to_string()).unwrap_or_default()
            }
            ConsentField::Country => record.country.clone(),
            ConsentField::Email | ConsentField::PostalAddress => {
                record.email.clone().unwrap_or_default()
            }
            ConsentField::Telephone => record.contacts.clone().unwrap_or_default(),
            ConsentField::Rank => record.belt.clone().unwrap_or_default(),
            ConsentField::CoachName => record.coach_name.clone().unwrap_or_default(),
            ConsentField::CoachRank => record.coach_belt.clone().unwrap_or_default(),
            ConsentField::CompetitorName => record.name.clone(),
            ConsentField::Signature => String::new(),
            ConsentField::IssueDate => today.format(FORM_DATE_FORMAT).to_string(),
            ConsentField::Birthday => dob.format(FORM_DATE_FORMAT).to_string(),
            ConsentField::FormsCompetition => yes_no(&record.categories, "individual_form"),
            ConsentField::SpecialTechniques => yes_no(&record.categories, "special_technique"),
            ConsentField::FreeSparring => yes_no(&record.categories, "sparring"),
        };
        values.insert(placeholder.clone(), value);
    }

    Ok(values)
}

fn yes_no(categories: &[String], tag: &str) -> String {
    if categories.iter().any(|c| c == tag) {
        "Yes".to_string()
    } else {
        "No".to_string()
    }
}

/// Checks that every produced key exists in the template's declared
/// placeholder set. Must run before handing the map to the fill step so a
/// stale template never gets a partial fill.
pub fn verify_placeholders(
    values: &BTreeMap<String, String>,
    declared: &HashSet<String>,
) -> Result<(), DocumentError> {
    let missing: Vec<String> = values
        .keys()
        .filter(|key| !declared.contains(*key))
        .cloned()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DocumentError::TemplateFieldMismatch { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record() -> ConsentRecord {
        ConsentRecord {
            name: "Jane Mary Doe".to_string(),
            gender: "Female".to_string(),
            dob: NaiveDate::from_ymd_opt(1998, 3, 7),
            weight: Some(dec!(62.50)),
            country: "Kenya".to_string(),
            belt: Some("Black Belt 2nd Dan".to_string()),
            coach_name: Some("Samuel Otieno".to_string()),
            coach_belt: Some("Black Belt 5th Dan".to_string()),
            email: Some("jane@example.com".to_string()),
            contacts: Some("+254700000000".to_string()),
            categories: vec!["sparring".to_string()],
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_name_split() {
        let values = build_field_values(&record(), today(), &FieldMapping::consent_form()).unwrap();
        assert_eq!(values["Text1"], "Doe");
        assert_eq!(values["Text2"], "Jane Mary");
        assert_eq!(values["Text13"], "Jane Mary Doe");
    }

    #[test]
    fn test_single_token_name_has_empty_given_names() {
        let mut rec = record();
        rec.name = "Doe".to_string();
        let values = build_field_values(&rec, today(), &FieldMapping::consent_form()).unwrap();
        assert_eq!(values["Text1"], "Doe");
        assert_eq!(values["Text2"], "");
    }

    #[test]
    fn test_dates_use_day_month_year() {
        let values = build_field_values(&record(), today(), &FieldMapping::consent_form()).unwrap();
        assert_eq!(values["Text16"], "07-03-1998");
        assert_eq!(values["Text15"], "15-06-2024");
    }

    #[test]
    fn test_age_is_derived() {
        let values = build_field_values(&record(), today(), &FieldMapping::consent_form()).unwrap();
        assert_eq!(values["Text4"], "26");
    }

    #[test]
    fn test_category_checks_are_independent() {
        let values = build_field_values(&record(), today(), &FieldMapping::consent_form()).unwrap();
        assert_eq!(values["check1"], "No");
        assert_eq!(values["check2"], "No");
        assert_eq!(values["check3"], "Yes");
    }

    #[test]
    fn test_multiple_category_checks() {
        let mut rec = record();
        rec.categories = vec![
            "individual_form".to_string(),
            "special_technique".to_string(),
            "sparring".to_string(),
        ];
        let values = build_field_values(&rec, today(), &FieldMapping::consent_form()).unwrap();
        assert_eq!(values["check1"], "Yes");
        assert_eq!(values["check2"], "Yes");
        assert_eq!(values["check3"], "Yes");
    }

    #[test]
    fn test_optional_fields_render_empty() {
        let mut rec = record();
        rec.weight = None;
        rec.belt = None;
        rec.coach_name = None;
        rec.coach_belt = None;
        rec.email = None;
        rec.contacts = None;
        let values = build_field_values(&rec, today(), &FieldMapping::consent_form()).unwrap();
        assert_eq!(values["Text5"], "");
        assert_eq!(values["Text7"], "");
        assert_eq!(values["Text8"], "");
        assert_eq!(values["Text9"], "");
        assert_eq!(values["Text10"], "");
        assert_eq!(values["Text11"], "");
        assert_eq!(values["Text12"], "");
        assert_eq!(values["Text14"], "");
    }

    #[test]
    fn test_weight_keeps_decimal_precision() {
        let values = build_field_values(&record(), today(), &FieldMapping::consent_form()).unwrap();
        assert_eq!(values["Text5"], "62.50");
    }

    #[test]
    fn test_missing_name_fails() {
        let mut rec = record();
        rec.name = "".to_string();
        let err = build_field_values(&rec, today(), &FieldMapping::consent_form()).unwrap_err();
        assert!(matches!(err, DocumentError::MissingRequiredField("name")));
    }

    #[test]
    fn test_missing_dob_fails() {
        let mut rec = record();
        rec.dob = None;
        let err = build_field_values(&rec, today(), &FieldMapping::consent_form()).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::MissingRequiredField("date of birth")
        ));
    }

    #[test]
    fn test_future_dob_fails() {
        let mut rec = record();
        rec.dob = NaiveDate::from_ymd_opt(2030, 1, 1);
        let err = build_field_values(&rec, today(), &FieldMapping::consent_form()).unwrap_err();
        assert!(matches!(err, DocumentError::Classification(_)));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let mapping = FieldMapping::consent_form();
        let first = build_field_values(&record(), today(), &mapping).unwrap();
        let second = build_field_values(&record(), today(), &mapping).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_verify_placeholders_accepts_declared_set() {
        let mapping = FieldMapping::consent_form();
        let values = build_field_values(&record(), today(), &mapping).unwrap();
        let declared: HashSet<String> = mapping.placeholders().map(String::from).collect();
        assert!(verify_placeholders(&values, &declared).is_ok());
    }

    #[test]
    fn test_verify_placeholders_reports_missing_keys() {
        let mapping = FieldMapping::consent_form();
        let values = build_field_values(&record(), today(), &mapping).unwrap();
        let mut declared: HashSet<String> = mapping.placeholders().map(String::from).collect();
        declared.remove("Text16");
        declared.remove("check3");

        let err = verify_placeholders(&values, &declared).unwrap_err();
        match err {
            DocumentError::TemplateFieldMismatch { missing } => {
                assert_eq!(missing, vec!["Text16".to_string(), "check3".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
