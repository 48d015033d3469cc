//! Wire types shared by the admin panel and the catalog API server.

pub mod domain;
pub mod system;
