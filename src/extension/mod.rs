//! Optional feature bundles.
//!
//! Auxiliary behavior such as pretty-printing or test-matcher helpers can be
//! packaged as an [`Extension`] and loaded by name through an
//! [`ExtensionRegistry`]. Nothing in the rest of the crate depends on an
//! extension being loaded.

mod registry;

pub use registry::{Extension, ExtensionError, ExtensionRegistry, LoadOutcome};
