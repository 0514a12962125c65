//! Purpose: Define the stable public Rust API boundary for curio.
//! Exports: Catalog types, envelope services, directory clients, and errors.
//! Role: Public, additive-only surface; hides internal module layout.
//! Invariants: This module is the only public path callers should use.

mod client;
mod remote;

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::athletes::{Athlete, AthleteCatalog};
pub use crate::core::cars::{Car, CarCatalog};
pub use crate::core::catalog::{Catalog, Record};
pub use crate::core::directory::{
    Category, Destination, DirectoryStore, Ingredient, Instruction, Recipe, User,
};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::products::{Product, ProductCatalog};
pub use crate::core::service::{EntityService, Outcome};
pub use client::LocalDirectory;
pub use remote::RemoteClient;
