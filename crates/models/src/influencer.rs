use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{MissingFields, ModelError};

/// `local@domain.tld` with no whitespace and exactly one `@` per part.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("compile email pattern"));

/// Platform name (`instagram`, `tiktok`, ...) to handle.
pub type SocialLinks = BTreeMap<String, String>;

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ModelError::InvalidEmail)
    }
}

/// Incoming creator application. Every field is optional at the wire level so
/// that missing fields surface as validation errors rather than parse errors.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub home_country: Option<String>,
    #[serde(default)]
    pub social_links: Option<SocialLinks>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub travel_experience: Option<String>,
}

/// A request that passed validation; required fields are guaranteed present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub name: String,
    pub email: String,
    pub home_country: String,
    pub social_links: Option<SocialLinks>,
    pub bio: Option<String>,
    pub travel_experience: Option<String>,
}

/// Empty strings count as absent; whitespace is a value.
fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl RegistrationRequest {
    /// Build a request from `application/x-www-form-urlencoded` pairs.
    /// Social links use bracket keys (`socialLinks[instagram]=@me`); the last
    /// occurrence of a repeated key wins and unknown keys are ignored.
    pub fn from_form_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut req = RegistrationRequest::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => req.name = Some(value),
                "email" => req.email = Some(value),
                "homeCountry" => req.home_country = Some(value),
                "bio" => req.bio = Some(value),
                "travelExperience" => req.travel_experience = Some(value),
                _ => {
                    if let Some(platform) =
                        key.strip_prefix("socialLinks[").and_then(|rest| rest.strip_suffix(']'))
                    {
                        req.social_links.get_or_insert_with(SocialLinks::new).insert(platform.to_string(), value);
                    }
                }
            }
        }
        req
    }

    /// Required fields first, then email shape.
    pub fn validate(self) -> Result<ValidRegistration, ModelError> {
        let fields = (required(self.name), required(self.email), required(self.home_country));
        let (name, email, home_country) = match fields {
            (Some(name), Some(email), Some(home_country)) => (name, email, home_country),
            (name, email, home_country) => {
                return Err(ModelError::MissingFields(MissingFields {
                    name: name.is_none().then_some("Name is required"),
                    email: email.is_none().then_some("Email is required"),
                    home_country: home_country.is_none().then_some("Home country is required"),
                }));
            }
        };
        validate_email(&email)?;

        Ok(ValidRegistration {
            name,
            email,
            home_country,
            social_links: self.social_links,
            bio: self.bio,
            travel_experience: self.travel_experience,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    PendingReview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    NotStarted,
}

/// Synthetic record echoed back for an accepted application. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    pub name: String,
    pub email: String,
    pub home_country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_experience: Option<String>,
    pub status: RegistrationStatus,
    pub kyc_status: KycStatus,
    pub created_at: DateTime<Utc>,
}

impl Registration {
    pub fn pending(id: String, input: ValidRegistration, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            home_country: input.home_country,
            social_links: input.social_links,
            bio: input.bio,
            travel_experience: input.travel_experience,
            status: RegistrationStatus::PendingReview,
            kyc_status: KycStatus::NotStarted,
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentLocation {
    pub city: String,
    pub country_code: String,
}

/// Landing-page card for a highlighted creator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedInfluencer {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub home_country: String,
    pub current_location: CurrentLocation,
    pub specialties: Vec<String>,
    pub rating: f64,
    pub total_sales: u32,
    pub followers: u32,
    pub is_live: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingTrip {
    pub city: String,
    pub country: String,
    pub dates: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerProfile {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub banner: String,
    pub home_country: String,
    pub current_location: CurrentLocation,
    pub bio: String,
    pub specialties: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
    pub total_sales: u32,
    pub followers: u32,
    pub is_verified: bool,
    pub member_since: String,
    pub upcoming_trips: Vec<UpcomingTrip>,
    pub social_links: SocialLinks,
}

impl InfluencerProfile {
    /// The profile as seen under another id.
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Self { id: id.into(), ..self.clone() }
    }
}
