use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use models::influencer::{Registration, RegistrationRequest};
use tracing::info;
use uuid::Uuid;

use crate::errors::ServiceError;

pub const CONFIRMATION_MESSAGE: &str = "Registration submitted successfully! We will review your application and get back to you within 48 hours.";

/// Source of registration identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// `inf-` followed by a random v4 UUID written as a decimal integer.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        format!("inf-{}", Uuid::new_v4().as_u128())
    }
}

/// Validates creator applications and echoes them back as pending records.
/// Nothing is stored; each call is independent.
#[derive(Clone)]
pub struct RegistrationService {
    ids: Arc<dyn IdGenerator>,
}

impl std::fmt::Debug for RegistrationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationService").finish_non_exhaustive()
    }
}

impl Default for RegistrationService {
    fn default() -> Self {
        Self::new(Arc::new(UuidIdGenerator))
    }
}

impl RegistrationService {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    pub fn register(&self, input: RegistrationRequest) -> Result<Registration, ServiceError> {
        let valid = input.validate()?;
        let registration = Registration::pending(self.ids.next_id(), valid, Utc::now().trunc_subsecs(3));
        info!(
            event = "registration_accepted",
            influencer_id = %registration.id,
            home_country = %registration.home_country,
            "influencer registration accepted"
        );
        Ok(registration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;
    use models::influencer::{KycStatus, RegistrationStatus};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicU64, Ordering};

    struct Sequential(AtomicU64);

    impl IdGenerator for Sequential {
        fn next_id(&self) -> String {
            format!("inf-{}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    fn request(email: &str) -> RegistrationRequest {
        RegistrationRequest {
            name: Some("A".into()),
            email: Some(email.into()),
            home_country: Some("US".into()),
            bio: Some("Street food hunter".into()),
            ..Default::default()
        }
    }

    #[test]
    fn uuid_ids_are_numeric_and_distinct() {
        let gen = UuidIdGenerator;
        let ids: HashSet<String> = (0..1000).map(|_| gen.next_id()).collect();
        assert_eq!(ids.len(), 1000);
        for id in &ids {
            let digits = id.strip_prefix("inf-").unwrap();
            assert!(!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()), "{id}");
        }
    }

    #[test]
    fn register_builds_pending_record() {
        let svc = RegistrationService::new(Arc::new(Sequential(AtomicU64::new(7))));
        let before = Utc::now().trunc_subsecs(3);
        let reg = svc.register(request("a@b.com")).unwrap();
        assert_eq!(reg.id, "inf-7");
        assert_eq!(reg.status, RegistrationStatus::PendingReview);
        assert_eq!(reg.kyc_status, KycStatus::NotStarted);
        assert_eq!(reg.bio.as_deref(), Some("Street food hunter"));
        assert!(reg.created_at >= before && reg.created_at <= Utc::now());
    }

    #[test]
    fn identical_input_yields_new_ids() {
        let svc = RegistrationService::default();
        let a = svc.register(request("a@b.com")).unwrap();
        let b = svc.register(request("a@b.com")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn invalid_email_is_a_validation_error() {
        let err = RegistrationService::default().register(request("bad-email")).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ModelError::InvalidEmail)));
        assert_eq!(err.to_string(), "Invalid email format");
    }
}
