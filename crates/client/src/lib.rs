//! `tutorhub-client` — the client shell around the session/role gate.
//!
//! Owns the route table, the navigation side effects, and the in-memory
//! collaborator services used by the demo binary and tests.

pub mod navigator;
pub mod routes;
pub mod services;
pub mod shell;

pub use navigator::Navigator;
pub use routes::{RouteAccess, RouteSpec, find, route_table};
pub use services::{
    DemoAccount, DemoDirectory, InMemoryCredentialService, InMemoryProfileStore,
    InMemoryTokenVault,
};
pub use shell::{ClientShell, Notice, NoticeLevel};
