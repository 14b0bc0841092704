//! Request and response types for the advisor backend core.
//!
//! This module contains the strongly-typed structs used for serializing
//! requests and deserializing responses across every operation the backend
//! exposes, plus the upstream providers' wire shapes.
//!
//! ## Organization
//!
//! - [`quote`] — Quote-provider wire types and series function selection
//! - [`summary`] — Per-symbol summaries and the stock response shapes
//! - [`news`] — News provider wire types and produced headline shapes
//! - [`chat`] — LLM `generateContent` wire types and the chat reply
//! - [`sip`] — SIP calculator request/response types

pub mod chat;
pub mod news;
pub mod quote;
pub mod sip;
pub mod summary;
