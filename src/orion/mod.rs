//! NGSI-LD context broker access
//!
//! Reads the monitored entity from an Orion-LD broker and exposes its
//! attributes through a lookup that never fails.

pub mod client;
pub mod entity;

pub use client::{FetchError, OrionClient};
pub use entity::{Attribute, EntitySnapshot, NOT_AVAILABLE};
