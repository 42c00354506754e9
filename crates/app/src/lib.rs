//! Tenant and role registry: domain records, keyset pagination, Postgres
//! persistence and services.

pub mod context;
pub mod database;
pub mod domain;
pub mod identifiers;
pub mod ids;
pub mod pagination;

#[cfg(test)]
mod test;
