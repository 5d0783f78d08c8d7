// src/records/mod.rs

pub mod document;
pub mod models;
pub mod service;
pub mod testimonials;

pub use models::{
    ContactForm, ContactFormCreate, DynStamper, NewsletterSubscriptionCreate, StatusCheck,
    StatusCheckCreate, SubscribeOutcome, SystemStamper, Testimonial,
};
