use chrono::NaiveDate;
use sqlx::PgPool;
use storage::{
    dto::athlete::{AthleteResponse, CreateAthleteRequest, RosterEntry, UpdateAthleteRequest},
    error::Result,
    repository::{athlete::AthleteRepository, coach::CoachRepository},
    services::classification::{UNKNOWN_CATEGORY, classify_weight_division, compute_age},
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// List all athletes with derived age and weight division
pub async fn list_athletes(pool: &PgPool, today: NaiveDate) -> Result<Vec<AthleteResponse>> {
    let repo = AthleteRepository::new(pool);
    let athletes = repo.list().await?;
    let mut categories = repo.categories_by_athlete().await?;

    Ok(athletes
        .into_iter()
        .map(|athlete| {
            let athlete_categories = categories.remove(&athlete.athlete_id).unwrap_or_default();
            AthleteResponse::from_model(athlete, athlete_categories, today)
        })
        .collect())
}

/// Get one athlete with derived values
pub async fn get_athlete(pool: &PgPool, id: Uuid, today: NaiveDate) -> Result<AthleteResponse> {
    let repo = AthleteRepository::new(pool);
    let athlete = repo.find_by_id(id).await?;
    let categories = repo.categories(id).await?;

    Ok(AthleteResponse::from_model(athlete, categories, today))
}

/// Create a new athlete
pub async fn create_athlete(
    pool: &PgPool,
    request: &CreateAthleteRequest,
    today: NaiveDate,
) -> Result<AthleteResponse> {
    let repo = AthleteRepository::new(pool);
    let athlete = repo.create(request).await?;
    let categories = repo.categories(athlete.athlete_id).await?;

    Ok(AthleteResponse::from_model(athlete, categories, today))
}

/// Update an athlete
pub async fn update_athlete(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateAthleteRequest,
    today: NaiveDate,
) -> Result<AthleteResponse> {
    let repo = AthleteRepository::new(pool);
    let existing = repo.find_by_id(id).await?;
    let athlete = repo.update(&existing, request).await?;
    let categories = repo.categories(id).await?;

    Ok(AthleteResponse::from_model(athlete, categories, today))
}

/// Delete an athlete
pub async fn delete_athlete(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = AthleteRepository::new(pool);
    repo.delete(id).await
}

/// The combined competition roster: every athlete plus every coach who
/// also competes, each with age and weight division attached.
pub async fn roster(pool: &PgPool, today: NaiveDate) -> Result<Vec<RosterEntry>> {
    let athlete_repo = AthleteRepository::new(pool);
    let coach_repo = CoachRepository::new(pool);

    let athletes = athlete_repo.list().await?;
    let mut athlete_categories = athlete_repo.categories_by_athlete().await?;
    let coaches = coach_repo.list_competing().await?;
    let mut coach_categories = coach_repo.categories_by_coach().await?;

    let mut entries = Vec::with_capacity(athletes.len() + coaches.len());

    for athlete in athletes {
        let categories = athlete_categories.remove(&athlete.athlete_id).unwrap_or_default();
        let age = athlete.dob.and_then(|dob| compute_age(dob, today).ok());
        let weight_division = match age {
            Some(age) => classify_weight_division(&athlete.gender, age, athlete.weight),
            None => UNKNOWN_CATEGORY,
        }
        .to_string();

        entries.push(RosterEntry {
            id: athlete.athlete_id,
            name: athlete.name,
            role: "Athlete".to_string(),
            gender: athlete.gender,
            dob: athlete.dob,
            weight: athlete.weight,
            country: athlete.country,
            belt: athlete.belt,
            contacts: athlete.contacts,
            accommodation: athlete.accommodation,
            categories,
            age,
            weight_division,
        });
    }

    for coach in coaches {
        let categories = coach_categories.remove(&coach.coach_id).unwrap_or_default();
        let age = coach.dob.and_then(|dob| compute_age(dob, today).ok());
        let weight_division = match age {
            Some(age) => classify_weight_division(&coach.gender, age, coach.weight),
            None => UNKNOWN_CATEGORY,
        }
        .to_string();

        entries.push(RosterEntry {
            id: coach.coach_id,
            name: coach.name,
            role: "Coach & Athlete".to_string(),
            gender: coach.gender,
            dob: coach.dob,
            weight: coach.weight,
            country: coach.country,
            belt: coach.belt,
            contacts: coach.contacts,
            accommodation: coach.accommodation,
            categories,
            age,
            weight_division,
        });
    }

    Ok(entries)
}

const ROSTER_CSV_HEADER: [&str; 12] = [
    "name",
    "role",
    "gender",
    "dob",
    "age",
    "weight",
    "weight_division",
    "country",
    "belt",
    "categories",
    "contacts",
    "accommodation",
];

/// Render the roster as CSV. Output is deterministic for a given database
/// state so exported reports are reproducible.
pub async fn roster_csv(pool: &PgPool, today: NaiveDate) -> WebResult<String> {
    let entries = roster(pool, today).await?;

    render_roster_csv(&entries)
}

fn render_roster_csv(entries: &[RosterEntry]) -> WebResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(ROSTER_CSV_HEADER).map_err(WebError::Csv)?;

    for entry in entries {
        let dob = entry.dob.map(|d| d.to_string()).unwrap_or_default();
        let age = entry.age.map(|a| a.to_string()).unwrap_or_default();
        let weight = entry.weight.map(|w| w.to_string()).unwrap_or_default();
        let categories = entry.categories.join("; ");

        writer
            .write_record([
                entry.name.as_str(),
                entry.role.as_str(),
                entry.gender.as_str(),
                dob.as_str(),
                age.as_str(),
                weight.as_str(),
                entry.weight_division.as_str(),
                entry.country.as_str(),
                entry.belt.as_deref().unwrap_or_default(),
                categories.as_str(),
                entry.contacts.as_deref().unwrap_or_default(),
                entry.accommodation.as_deref().unwrap_or_default(),
            ])
            .map_err(WebError::Csv)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| WebError::Csv(std::io::Error::other(e.to_string()).into()))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> RosterEntry {
        RosterEntry {
            id: Uuid::nil(),
            name: name.to_string(),
            role: "Athlete".to_string(),
            gender: "Female".to_string(),
            dob: NaiveDate::from_ymd_opt(1998, 3, 7),
            weight: None,
            country: "Kenya".to_string(),
            belt: Some("2nd Dan".to_string()),
            contacts: None,
            accommodation: None,
            categories: vec!["individual_form".to_string(), "sparring".to_string()],
            age: Some(28),
            weight_division: "Fly".to_string(),
        }
    }

    #[test]
    fn test_roster_csv_header_row() {
        let out = render_roster_csv(&[]).unwrap();
        assert_eq!(
            out,
            "name,role,gender,dob,age,weight,weight_division,country,belt,categories,contacts,accommodation\n"
        );
    }

    #[test]
    fn test_roster_csv_plain_row() {
        let out = render_roster_csv(&[entry("Jane Doe")]).unwrap();
        assert_eq!(
            out.lines().nth(1).unwrap(),
            "Jane Doe,Athlete,Female,1998-03-07,28,,Fly,Kenya,2nd Dan,individual_form; sparring,,"
        );
    }

    #[test]
    fn test_roster_csv_quotes_fields_with_commas() {
        let out = render_roster_csv(&[entry("Doe, Jane")]).unwrap();
        assert!(out.lines().nth(1).unwrap().starts_with("\"Doe, Jane\","));
    }

    #[test]
    fn test_roster_csv_doubles_embedded_quotes() {
        let out = render_roster_csv(&[entry("Jane \"Tiger\" Doe")]).unwrap();
        assert!(
            out.lines()
                .nth(1)
                .unwrap()
                .starts_with("\"Jane \"\"Tiger\"\" Doe\",")
        );
    }
}
