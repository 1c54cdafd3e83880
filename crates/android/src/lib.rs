//! # sdkversions-android
//!
//! Android project support for sdkversions.
//!
//! Registers the version patterns for Gradle properties files (`moduleVersion`,
//! `maven<Name>Version`, multi-module `<library>ExtensionVersion`), Java
//! `EXTENSION_VERSION` constants and Kotlin `const val VERSION` declarations.

pub mod patterns;
pub mod templates;

pub use patterns::{AndroidPatterns, PROPERTIES_MULTI_MODULE};
pub use templates::{gradle_extension_template, gradle_properties_template};
