//! Localization of bundle/key pairs.
//!
//! Descriptors only carry bundle names and keys; consumers resolve them
//! to display text through the [`BundleCatalog`].

mod bundle;

pub use bundle::{BundleCatalog, BundleError, parse_bundle};
