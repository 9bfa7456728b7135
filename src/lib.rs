//! contract-service: web backend that drafts a freelance NDA through Gemini.
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod services;
pub mod startup;
