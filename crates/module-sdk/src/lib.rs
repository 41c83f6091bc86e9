//! LibreCCM Module SDK
//!
//! Types a module uses to declare its content types and authoring kits.
//! The kernel reads these declarations from module manifests or from
//! modules registered in code, then resolves them into descriptors.

pub mod types;

pub mod prelude {
    pub use crate::types::*;
}
