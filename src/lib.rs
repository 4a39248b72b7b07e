//! Gatehouse - Session and token lifecycle core.
//!
//! This crate implements the session aggregate, the access/refresh token
//! rotation protocol, and refresh-token replay detection for a multi-tenant
//! identity provider. Persistence and transport live behind ports; the
//! public surface is the four operations of
//! [`application::SessionLifecycleManager`].

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
