use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::timing::{Timed, Timestamp};

/// How long the success or failure banner stays up.
pub const BANNER_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("email address is not valid")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn fields(&self) -> [(Field, &str); 4] {
        [
            (Field::Name, self.name.as_str()),
            (Field::Email, self.email.as_str()),
            (Field::Subject, self.subject.as_str()),
            (Field::Message, self.message.as_str()),
        ]
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some((field, _)) = self.fields().into_iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ContactError::MissingField(field));
        }
        let valid_email = self
            .email
            .trim()
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && !domain.is_empty() && !domain.contains('@'));
        if !valid_email {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Submitting,
    Sent {
        until: Timestamp,
    },
    Failed {
        until: Timestamp,
        reason: String,
    },
}

/// Submission progress plus the banner that dismisses itself.
#[derive(Debug, Clone, Default)]
pub struct ContactBanner {
    status: ContactStatus,
}

impl ContactBanner {
    pub fn status(&self) -> &ContactStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == ContactStatus::Submitting
    }

    /// Returns false if a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.status = ContactStatus::Submitting;
        true
    }

    pub fn finish<E: fmt::Display>(&mut self, now: Timestamp, result: Result<(), E>) {
        let until = now + BANNER_DURATION;
        self.status = match result {
            Ok(()) => ContactStatus::Sent { until },
            Err(e) => {
                log::error!("contact submission failed: {e}");
                ContactStatus::Failed {
                    until,
                    reason: e.to_string(),
                }
            }
        };
    }
}

impl Timed for ContactBanner {
    type Output = ();

    fn next_deadline(&self) -> Option<Timestamp> {
        match self.status {
            ContactStatus::Sent { until } | ContactStatus::Failed { until, .. } => Some(until),
            _ => None,
        }
    }

    fn fire(&mut self, now: Timestamp) -> Option<()> {
        let until = self.next_deadline()?;
        if now < until {
            return None;
        }
        self.status = ContactStatus::Idle;
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::drain_until;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site".to_string(),
        }
    }

    #[test]
    fn test_valid_message() {
        assert_eq!(message().validate(), Ok(()));
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut m = message();
        m.subject = "   ".to_string();
        assert_eq!(m.validate(), Err(ContactError::MissingField(Field::Subject)));

        // first missing field is reported
        let m = ContactMessage::default();
        let err = m.validate().unwrap_err();
        assert_eq!(err, ContactError::MissingField(Field::Name));
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_malformed_email_rejected() {
        for bad in ["ada", "@example.com", "ada@", "a@b@c"] {
            let mut m = message();
            m.email = bad.to_string();
            assert_eq!(m.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn test_banner_clears_after_timeout() {
        let mut banner = ContactBanner::default();
        assert!(banner.begin());
        assert!(!banner.begin(), "already submitting");

        banner.finish::<ContactError>(Timestamp::from_millis(1_000), Ok(()));
        assert_eq!(
            banner.status(),
            &ContactStatus::Sent {
                until: Timestamp::from_millis(6_000)
            }
        );

        assert!(drain_until(&mut banner, Timestamp::from_millis(5_999)).is_empty());
        assert_eq!(drain_until(&mut banner, Timestamp::from_millis(6_000)).len(), 1);
        assert_eq!(banner.status(), &ContactStatus::Idle);
        assert_eq!(banner.next_deadline(), None);
    }

    #[test]
    fn test_failure_keeps_reason() {
        let mut banner = ContactBanner::default();
        banner.begin();
        banner.finish(Timestamp::ZERO, Err("network unreachable"));
        match banner.status() {
            ContactStatus::Failed { until, reason } => {
                assert_eq!(*until, Timestamp::from_millis(5_000));
                assert_eq!(reason, "network unreachable");
            }
            other => panic!("unexpected status {other:?}"),
        }
        // a new attempt is allowed while the failure banner is showing
        assert!(banner.begin());
    }
}
