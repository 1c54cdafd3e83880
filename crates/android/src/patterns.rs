use sdkversions_core::{PatternProvider, PatternSpec};

use crate::templates::{gradle_extension_template, gradle_properties_template};

/// Pattern type for the Core repo's `gradle.properties`, which declares one
/// `<library>ExtensionVersion` per module.
pub const PROPERTIES_MULTI_MODULE: &str = "properties_multi_module";

const EXTENSION_VERSION_DESCRIPTION: &str =
    "<library>ExtensionVersion (ex: coreExtensionVersion)";

#[derive(Debug)]
pub struct AndroidPatterns {
    own_version: Vec<(&'static str, PatternSpec)>,
    dependency: Vec<(&'static str, PatternSpec)>,
}

impl Default for AndroidPatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl AndroidPatterns {
    pub fn new() -> Self {
        Self {
            own_version: vec![
                (
                    ".properties",
                    PatternSpec::fixed("moduleVersion", r"^[\s\S]*moduleVersion\s*=\s*"),
                ),
                (
                    PROPERTIES_MULTI_MODULE,
                    PatternSpec::templated(EXTENSION_VERSION_DESCRIPTION, gradle_extension_template),
                ),
                (
                    ".java",
                    PatternSpec::fixed(
                        "EXTENSION_VERSION",
                        r#"^[\s\S]*String EXTENSION_VERSION\s*=\s*""#,
                    ),
                ),
                (
                    ".kt",
                    PatternSpec::fixed("VERSION", r#"^[\s\S]*const val VERSION\s*=\s*""#),
                ),
            ],
            dependency: vec![
                (
                    ".properties",
                    PatternSpec::templated(
                        "maven<dependencyName>Version (ex: mavenCoreVersion)",
                        gradle_properties_template,
                    ),
                ),
                (
                    PROPERTIES_MULTI_MODULE,
                    PatternSpec::templated(EXTENSION_VERSION_DESCRIPTION, gradle_extension_template),
                ),
            ],
        }
    }
}

impl PatternProvider for AndroidPatterns {
    fn own_version_patterns(&self) -> Vec<(&'static str, PatternSpec)> {
        self.own_version.clone()
    }

    fn dependency_patterns(&self) -> Vec<(&'static str, PatternSpec)> {
        self.dependency.clone()
    }
}
