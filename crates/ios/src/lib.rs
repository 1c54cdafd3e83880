//! # sdkversions-ios
//!
//! iOS project support for sdkversions.
//!
//! Registers the version patterns for Xcode projects (`MARKETING_VERSION`), CocoaPods
//! specs (`s.version`, `s.dependency`), Swift constants and Swift Package Manager
//! manifests. SPM anchors are built from the dependency's GitHub repository URL.

pub mod patterns;
pub mod templates;

pub use patterns::{IosPatterns, SWIFT_SPM, SWIFT_TEST_VERSION, SWIFT_VERSION_NUMBER};
pub use templates::{ios_repo_url, podspec_template, swift_spm_template};
