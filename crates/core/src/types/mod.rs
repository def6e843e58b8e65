//! Core types for Fraiche.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod catalog;
pub mod content;
pub mod id;
pub mod money;

pub use catalog::{Category, Farm, PriceVariant, Product};
pub use content::{FooterContent, FooterLink, FooterSection, SiteSettings, SocialLink};
pub use id::*;
pub use money::Money;
