use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use sqlx::PgPool;
use storage::{
    dto::document::ConsentFormResponse,
    error::Result,
    repository::{athlete::AthleteRepository, tournament::TournamentRepository},
    services::documents::{FieldMapping, build_field_values, verify_placeholders},
};
use uuid::Uuid;

/// Placeholder names declared by the consent-form template, as reported by
/// the document inspector. Shared immutable configuration, loaded once.
#[derive(Debug, Clone)]
pub struct TemplateFields(Arc<HashSet<String>>);

impl TemplateFields {
    /// Uses the TEMPLATE_FIELDS override when present, otherwise assumes
    /// the template declares exactly the built-in mapping's placeholders.
    pub fn from_config(override_fields: Option<&str>, mapping: &FieldMapping) -> Self {
        let declared = match override_fields {
            Some(fields) => fields
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            None => mapping.placeholders().map(String::from).collect(),
        };

        Self(Arc::new(declared))
    }

    pub fn declared(&self) -> &HashSet<String> {
        &self.0
    }
}

/// Builds the consent-form placeholder values for one athlete registered
/// to a tournament. The returned map is complete and template-checked;
/// stamping it into the PDF/Word template is left to the caller's fill
/// collaborator.
pub async fn consent_form(
    pool: &PgPool,
    tournament_id: Uuid,
    athlete_id: Uuid,
    today: NaiveDate,
    mapping: &FieldMapping,
    template: &TemplateFields,
) -> Result<ConsentFormResponse> {
    let tournament_repo = TournamentRepository::new(pool);
    tournament_repo.find_by_id(tournament_id).await?;

    let athlete_repo = AthleteRepository::new(pool);
    let record = athlete_repo.consent_record(athlete_id).await?;

    let values = build_field_values(&record, today, mapping)
        .and_then(|values| verify_placeholders(&values, template.declared()).map(|()| values))?;

    Ok(ConsentFormResponse {
        tournament_id,
        athlete_id,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_fields_default_to_mapping() {
        let mapping = FieldMapping::consent_form();
        let template = TemplateFields::from_config(None, &mapping);
        assert!(template.declared().contains("Text1"));
        assert!(template.declared().contains("check3"));
        assert_eq!(template.declared().len(), 19);
    }

    #[test]
    fn test_template_fields_override_parsing() {
        let mapping = FieldMapping::consent_form();
        let template = TemplateFields::from_config(Some("Text1, Text2,,check1"), &mapping);
        assert!(template.declared().contains("Text1"));
        assert!(template.declared().contains("check1"));
        assert_eq!(template.declared().len(), 3);
    }
}
