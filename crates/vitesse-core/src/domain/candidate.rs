use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Candidate entity - a job applicant tracked by the recruitment backend.
///
/// Equality is structural over every field. The server owns the authoritative
/// record; a local copy is only ever a mirror of the last acknowledged state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, alias = "linkedinURL")]
    pub linkedin_web_address: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Candidate {
    /// Create a candidate locally with a freshly generated id.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            linkedin_web_address: None,
            note: None,
            is_favorite: false,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_linkedin(mut self, address: impl Into<String>) -> Self {
        self.linkedin_web_address = Some(address.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// "First Last", as shown in listings.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Mirror a favorite toggle the server has already acknowledged.
    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
    }
}

/// Fields needed to create a candidate. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCandidate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin_web_address: Option<String>,
    pub note: Option<String>,
}

impl NewCandidate {
    /// Synthesize a local candidate for optimistic display after the server
    /// acknowledged the creation.
    pub fn into_candidate(self) -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: Some(self.phone),
            linkedin_web_address: self.linkedin_web_address,
            note: self.note,
            is_favorite: false,
        }
    }
}

/// Outcome of a successful login.
///
/// The bearer token stays inside the session; callers only learn whether the
/// account may use admin-gated operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authenticated {
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Candidate {
        Candidate::new("John", "Doe", "john.doe@example.com")
    }

    #[test]
    fn test_json_round_trip_with_all_fields() {
        let candidate = sample()
            .with_phone("0612345678")
            .with_linkedin("https://linkedin.com/in/johndoe")
            .with_note("Strong Rust background")
            .favorite(true);

        let json = serde_json::to_string(&candidate).unwrap();
        let decoded: Candidate = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, candidate);
    }

    #[test]
    fn test_json_round_trip_without_optionals() {
        let candidate = sample();

        let json = serde_json::to_string(&candidate).unwrap();
        let decoded: Candidate = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, candidate);
    }

    #[test]
    fn test_wire_shape_uses_camel_case() {
        let candidate = sample().with_linkedin("https://linkedin.com/in/x");
        let value = serde_json::to_value(&candidate).unwrap();

        assert_eq!(value["firstName"], "John");
        assert_eq!(value["lastName"], "Doe");
        assert_eq!(value["linkedinWebAddress"], "https://linkedin.com/in/x");
        assert_eq!(value["isFavorite"], false);
        assert_eq!(value["id"], candidate.id.to_string());
    }

    #[test]
    fn test_decodes_backend_payload() {
        let json = r#"{
            "id": "4bd94c5c-4a0c-4f1e-9a5b-4b3a2d3c1e0f",
            "firstName": "Alice",
            "lastName": "Smith",
            "email": "alice@example.com",
            "phone": null,
            "linkedinURL": "https://linkedin.com/in/alice",
            "isFavorite": true
        }"#;

        let candidate: Candidate = serde_json::from_str(json).unwrap();

        assert_eq!(candidate.first_name, "Alice");
        assert_eq!(candidate.phone, None);
        assert_eq!(candidate.note, None);
        assert_eq!(
            candidate.linkedin_web_address.as_deref(),
            Some("https://linkedin.com/in/alice")
        );
        assert!(candidate.is_favorite);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let json = r#"{"id": "4bd94c5c-4a0c-4f1e-9a5b-4b3a2d3c1e0f", "firstName": "A"}"#;
        assert!(serde_json::from_str::<Candidate>(json).is_err());
    }

    #[test]
    fn test_toggle_favorite_flips_flag() {
        let mut candidate = sample();
        candidate.toggle_favorite();
        assert!(candidate.is_favorite);
        candidate.toggle_favorite();
        assert!(!candidate.is_favorite);
    }

    #[test]
    fn test_new_generates_distinct_ids() {
        assert_ne!(sample().id, sample().id);
    }

    #[test]
    fn test_into_candidate_keeps_fields() {
        let draft = NewCandidate {
            first_name: "Jane".into(),
            last_name: "Roe".into(),
            email: "jane@example.com".into(),
            phone: "0102030405".into(),
            linkedin_web_address: None,
            note: Some("Referred".into()),
        };

        let candidate = draft.into_candidate();

        assert_eq!(candidate.full_name(), "Jane Roe");
        assert_eq!(candidate.phone.as_deref(), Some("0102030405"));
        assert_eq!(candidate.note.as_deref(), Some("Referred"));
        assert!(!candidate.is_favorite);
    }
}
