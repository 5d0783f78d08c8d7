// src/records/models.rs

use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::db::Collection;

// ----------------------------
// Identity + clock
// ----------------------------

/// Server-assigned identity of a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub id: String,
    pub timestamp: DateTime<Utc>,
}

/// Source of ids and creation times for new records.
pub trait Stamper: Send + Sync {
    fn stamp(&self) -> Stamp;
}

pub type DynStamper = Arc<dyn Stamper>;

/// Random UUID v4 ids and the wall clock in UTC, cut to the microsecond
/// precision timestamps are stored with.
#[derive(Debug, Clone, Default)]
pub struct SystemStamper;

impl Stamper for SystemStamper {
    fn stamp(&self) -> Stamp {
        Stamp {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().trunc_subsecs(6),
        }
    }
}

/// A persisted record kind and the collection it lives in.
pub trait Record: Serialize + for<'de> Deserialize<'de> {
    const COLLECTION: Collection;

    fn id(&self) -> &str;

    fn timestamp(&self) -> &DateTime<Utc>;
}

/// Text field of a create request. NUL characters cannot be stored, so they
/// fail deserialization and the request is rejected before any write.
fn storable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    if text.contains('\0') {
        return Err(de::Error::custom("text must not contain NUL characters"));
    }
    Ok(text)
}

// ----------------------------
// Status checks
// ----------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct StatusCheckCreate {
    #[serde(deserialize_with = "storable_text")]
    pub client_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn new(input: StatusCheckCreate, stamp: Stamp) -> Self {
        Self {
            id: stamp.id,
            client_name: input.client_name,
            timestamp: stamp.timestamp,
        }
    }
}

impl Record for StatusCheck {
    const COLLECTION: Collection = Collection::StatusChecks;

    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> &DateTime<Utc> {
        &self.timestamp
    }
}

// ----------------------------
// Contact form
// ----------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ContactFormCreate {
    #[serde(deserialize_with = "storable_text")]
    pub name: String,
    #[serde(deserialize_with = "storable_text")]
    pub email: String,
    #[serde(deserialize_with = "storable_text")]
    pub phone: String,
    #[serde(deserialize_with = "storable_text")]
    pub country_code: String,
    #[serde(deserialize_with = "storable_text")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country_code: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ContactForm {
    pub fn new(input: ContactFormCreate, stamp: Stamp) -> Self {
        Self {
            id: stamp.id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            country_code: input.country_code,
            message: input.message,
            timestamp: stamp.timestamp,
        }
    }
}

impl Record for ContactForm {
    const COLLECTION: Collection = Collection::Contacts;

    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> &DateTime<Utc> {
        &self.timestamp
    }
}

// ----------------------------
// Newsletter
// ----------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct NewsletterSubscriptionCreate {
    #[serde(deserialize_with = "storable_text")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsletterSubscription {
    pub id: String,
    pub email: String,
    pub timestamp: DateTime<Utc>,
}

impl NewsletterSubscription {
    pub fn new(input: NewsletterSubscriptionCreate, stamp: Stamp) -> Self {
        Self {
            id: stamp.id,
            email: input.email,
            timestamp: stamp.timestamp,
        }
    }
}

impl Record for NewsletterSubscription {
    const COLLECTION: Collection = Collection::Newsletter;

    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> &DateTime<Utc> {
        &self.timestamp
    }
}

/// Outcome of a subscribe call. The two variants serialise to different shapes:
/// the full record, or `{"message": "Email already subscribed"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SubscribeOutcome {
    Subscribed(NewsletterSubscription),
    AlreadySubscribed { message: &'static str },
}

pub const ALREADY_SUBSCRIBED: &str = "Email already subscribed";

impl SubscribeOutcome {
    pub fn already_subscribed() -> Self {
        SubscribeOutcome::AlreadySubscribed {
            message: ALREADY_SUBSCRIBED,
        }
    }
}

// ----------------------------
// Testimonials
// ----------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
    pub image: &'static str,
}
