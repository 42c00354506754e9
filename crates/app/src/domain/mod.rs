//! Roster Domain Concerns

pub mod roles;
pub mod tenants;
