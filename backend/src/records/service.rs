// src/records/service.rs
//
// Create/list operations over the document store. Each create performs one
// write; subscribe performs one read and at most one write.

use tracing::info;

use crate::db::{DocumentStore, StoreError};
use crate::records::document::{decode, encode};
use crate::records::models::{
    ContactForm, ContactFormCreate, NewsletterSubscription, NewsletterSubscriptionCreate, Record,
    StatusCheck, StatusCheckCreate, Stamper, SubscribeOutcome,
};

/// Upper bound on records returned by a list call.
pub const LIST_LIMIT: i64 = 1000;

async fn insert_record<R: Record>(store: &dyn DocumentStore, record: &R) -> Result<(), StoreError> {
    let doc = encode(record)?;
    store.insert_one(R::COLLECTION, doc).await?;

    info!("Inserted {} record {}", R::COLLECTION.as_str(), record.id());
    Ok(())
}

async fn list_records<R: Record>(store: &dyn DocumentStore) -> Result<Vec<R>, StoreError> {
    store
        .find(R::COLLECTION, LIST_LIMIT)
        .await?
        .into_iter()
        .map(decode::<R>)
        .collect()
}

pub async fn create_status(
    store: &dyn DocumentStore,
    stamper: &dyn Stamper,
    input: StatusCheckCreate,
) -> Result<StatusCheck, StoreError> {
    let record = StatusCheck::new(input, stamper.stamp());
    insert_record(store, &record).await?;
    Ok(record)
}

pub async fn list_statuses(store: &dyn DocumentStore) -> Result<Vec<StatusCheck>, StoreError> {
    list_records(store).await
}

pub async fn create_contact(
    store: &dyn DocumentStore,
    stamper: &dyn Stamper,
    input: ContactFormCreate,
) -> Result<ContactForm, StoreError> {
    let record = ContactForm::new(input, stamper.stamp());
    insert_record(store, &record).await?;
    Ok(record)
}

pub async fn list_contacts(store: &dyn DocumentStore) -> Result<Vec<ContactForm>, StoreError> {
    list_records(store).await
}

/// Subscribe an email unless a subscription with the same email already exists.
///
/// The existence check and the insert are separate store calls, so two
/// concurrent calls for the same email can both insert.
pub async fn subscribe(
    store: &dyn DocumentStore,
    stamper: &dyn Stamper,
    input: NewsletterSubscriptionCreate,
) -> Result<SubscribeOutcome, StoreError> {
    let existing = store
        .find_one(NewsletterSubscription::COLLECTION, "email", &input.email)
        .await?;

    if existing.is_some() {
        info!("Newsletter email already subscribed, skipping insert");
        return Ok(SubscribeOutcome::already_subscribed());
    }

    let record = NewsletterSubscription::new(input, stamper.stamp());
    insert_record(store, &record).await?;
    Ok(SubscribeOutcome::Subscribed(record))
}
