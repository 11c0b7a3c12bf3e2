//! Self-describing REST dispatcher for a map-serving backend.
//!
//! Exposes one sub-resource (`layers`, the metadata of every layer in the
//! attached map service) and one operation (`getLayerCountByType`), plus a
//! schema call that enumerates the resource/operation tree so clients can
//! discover capabilities without out-of-band documentation. All responses
//! are UTF-8 JSON; every failure surfaces as the fixed error envelope
//! `{"error":{"code":…,"message":…,"details":[…]}}`.
//!
//! The map server itself is an external collaborator reached through the
//! [`provider::MapServiceProvider`] trait, handed to the extension once at
//! [`extension::LayerRestExtension::attach`] time.

pub mod config;
pub mod error;
pub mod extension;
pub mod handlers;
pub mod log;
pub mod protocol;
pub mod provider;
pub mod server;

pub mod schema;
