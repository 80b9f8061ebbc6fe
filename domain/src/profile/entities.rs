//! Personality profile entity

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Fewest suitable roles a profile may list
pub const MIN_SUITABLE_ROLES: usize = 3;

/// Most suitable roles a profile may list; extra roles are dropped
pub const MAX_SUITABLE_ROLES: usize = 4;

/// Wire shape used by providers:
/// `{"type", "description", "suitableRoles", "quote"}`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProfileRecord {
    #[serde(rename = "type")]
    personality_type: String,
    description: String,
    #[serde(rename = "suitableRoles")]
    suitable_roles: Vec<String>,
    quote: String,
}

/// A developer personality profile.
///
/// Produced either by a provider's analysis of the user's answers or by the
/// deterministic fallback matcher. Carries no numeric score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProfileRecord", into = "ProfileRecord")]
pub struct PersonalityProfile {
    personality_type: String,
    description: String,
    suitable_roles: Vec<String>,
    quote: String,
}

impl PersonalityProfile {
    /// Create a profile, validating that every field is present.
    ///
    /// Blank roles are discarded and the list is capped at
    /// [`MAX_SUITABLE_ROLES`]; fewer than [`MIN_SUITABLE_ROLES`] is an error.
    pub fn try_new(
        personality_type: impl Into<String>,
        description: impl Into<String>,
        suitable_roles: impl IntoIterator<Item = impl Into<String>>,
        quote: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let personality_type = personality_type.into();
        let description = description.into();
        let quote = quote.into();

        for (field, value) in [
            ("type", &personality_type),
            ("description", &description),
            ("quote", &quote),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidProfile(format!("`{}` is empty", field)));
            }
        }

        let mut suitable_roles: Vec<String> = suitable_roles
            .into_iter()
            .map(Into::into)
            .filter(|role: &String| !role.trim().is_empty())
            .collect();
        if suitable_roles.len() < MIN_SUITABLE_ROLES {
            return Err(DomainError::InvalidProfile(format!(
                "`suitableRoles` lists {} roles, expected {}-{}",
                suitable_roles.len(),
                MIN_SUITABLE_ROLES,
                MAX_SUITABLE_ROLES
            )));
        }
        suitable_roles.truncate(MAX_SUITABLE_ROLES);

        Ok(Self {
            personality_type,
            description,
            suitable_roles,
            quote,
        })
    }

    /// Build a profile from compile-time data
    pub(crate) fn from_static(
        personality_type: &'static str,
        description: &'static str,
        suitable_roles: [&'static str; MIN_SUITABLE_ROLES],
        quote: &'static str,
    ) -> Self {
        Self {
            personality_type: personality_type.to_string(),
            description: description.to_string(),
            suitable_roles: suitable_roles.map(str::to_string).into(),
            quote: quote.to_string(),
        }
    }

    pub fn personality_type(&self) -> &str {
        &self.personality_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn suitable_roles(&self) -> &[String] {
        &self.suitable_roles
    }

    pub fn quote(&self) -> &str {
        &self.quote
    }
}

impl TryFrom<ProfileRecord> for PersonalityProfile {
    type Error = DomainError;

    fn try_from(record: ProfileRecord) -> Result<Self, Self::Error> {
        PersonalityProfile::try_new(
            record.personality_type,
            record.description,
            record.suitable_roles,
            record.quote,
        )
    }
}

impl From<PersonalityProfile> for ProfileRecord {
    fn from(profile: PersonalityProfile) -> Self {
        Self {
            personality_type: profile.personality_type,
            description: profile.description,
            suitable_roles: profile.suitable_roles,
            quote: profile.quote,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_provider_shape() {
        let profile: PersonalityProfile = serde_json::from_value(json!({
            "type": "The Framework Fanatic",
            "description": "You love exploring new technologies.",
            "suitableRoles": ["Frontend Engineer", "Tech Lead", "Developer Advocate", "Innovation Engineer"],
            "quote": "If it's not in beta, it's already legacy code."
        }))
        .unwrap();

        assert_eq!(profile.personality_type(), "The Framework Fanatic");
        assert_eq!(profile.suitable_roles().len(), 4);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let err = serde_json::from_value::<PersonalityProfile>(json!({
            "type": "The Debug Detective",
            "description": "Finds every bug.",
            "suitableRoles": ["QA Engineer", "SRE", "Backend Engineer"]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("quote"));
    }

    #[test]
    fn test_blank_field_is_rejected() {
        let err = PersonalityProfile::try_new("", "d", ["a", "b", "c"], "q").unwrap_err();
        assert_eq!(err, DomainError::InvalidProfile("`type` is empty".to_string()));
    }

    #[test]
    fn test_role_count_bounds() {
        assert!(PersonalityProfile::try_new("t", "d", ["a", "b"], "q").is_err());
        assert!(PersonalityProfile::try_new("t", "d", ["a", "b", " "], "q").is_err());

        let capped =
            PersonalityProfile::try_new("t", "d", ["a", "b", "c", "d", "e"], "q").unwrap();
        assert_eq!(capped.suitable_roles(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_serializes_provider_shape() {
        let profile = PersonalityProfile::try_new("t", "d", ["a", "b", "c"], "q").unwrap();
        assert_eq!(
            serde_json::to_value(profile).unwrap(),
            json!({"type": "t", "description": "d", "suitableRoles": ["a", "b", "c"], "quote": "q"})
        );
    }
}
