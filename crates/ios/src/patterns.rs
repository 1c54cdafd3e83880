use sdkversions_core::{PatternProvider, PatternSpec, VersionGrammar};

use crate::templates::{podspec_template, swift_spm_template};

/// `Package.swift` manifests.
pub const SWIFT_SPM: &str = "swift_spm";
/// Swift files that declare `VERSION_NUMBER` instead of `EXTENSION_VERSION`.
pub const SWIFT_VERSION_NUMBER: &str = "swift_version_number";
/// Swift test files that carry the version inside a JSON literal.
pub const SWIFT_TEST_VERSION: &str = "swift_test_version";

#[derive(Debug)]
pub struct IosPatterns {
    own_version: Vec<(&'static str, PatternSpec)>,
    dependency: Vec<(&'static str, PatternSpec)>,
}

impl Default for IosPatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl IosPatterns {
    pub fn new() -> Self {
        Self {
            own_version: vec![
                (
                    ".pbxproj",
                    PatternSpec::fixed("MARKETING_VERSION", r"^[\s\S]*MARKETING_VERSION = "),
                ),
                (
                    ".podspec",
                    PatternSpec::fixed("s.version", r#"^[\s\S]*s\.version\s*=\s*""#),
                ),
                (
                    ".swift",
                    PatternSpec::fixed(
                        "EXTENSION_VERSION",
                        r#"^[\s\S]*static let EXTENSION_VERSION\s*=\s*""#,
                    ),
                ),
                (
                    SWIFT_VERSION_NUMBER,
                    PatternSpec::fixed(
                        "VERSION_NUMBER",
                        r#"^[\s\S]*static let VERSION_NUMBER\s*=\s*""#,
                    ),
                ),
                (
                    SWIFT_TEST_VERSION,
                    PatternSpec::fixed("version", r#"^[\s\S]*"version"\s*:\s*""#)
                        .with_grammar(VersionGrammar::TestVersion),
                ),
            ],
            dependency: vec![
                (
                    SWIFT_SPM,
                    PatternSpec::templated(".upToNextMajor(from:)", swift_spm_template),
                ),
                (
                    ".podspec",
                    PatternSpec::templated("s.dependency", podspec_template),
                ),
            ],
        }
    }
}

impl PatternProvider for IosPatterns {
    fn own_version_patterns(&self) -> Vec<(&'static str, PatternSpec)> {
        self.own_version.clone()
    }

    fn dependency_patterns(&self) -> Vec<(&'static str, PatternSpec)> {
        self.dependency.clone()
    }
}
