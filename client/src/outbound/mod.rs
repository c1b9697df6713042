//! Outbound adapters implementing domain ports for external services.
//!
//! Adapters are thin translators: they own transport and wire formats and
//! convert to domain types at the boundary. Classification of service
//! responses lives here because it depends on the wire format.

pub mod account_api;
