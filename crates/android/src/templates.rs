use regex::escape;
use sdkversions_core::{PatternError, lowercase_first_char, strip_sdk_prefix};

/// Maven dependency version property in `gradle.properties`.
///
/// `AEPCore` (or `Core`) -> `^[\s\S]*mavenCoreVersion\s*=\s*`
///
/// # Errors
/// Never fails; the signature matches [`sdkversions_core::TemplateFn`].
pub fn gradle_properties_template(name: &str) -> Result<String, PatternError> {
    let property = escape(strip_sdk_prefix(name));
    Ok(format!(r"^[\s\S]*maven{property}Version\s*=\s*"))
}

/// Extension version property of a multi-module `gradle.properties` (the Core repo).
///
/// `AEPCore` (or `Core`) -> `^[\s\S]*coreExtensionVersion\s*=\s*`
///
/// # Errors
/// Never fails; the signature matches [`sdkversions_core::TemplateFn`].
pub fn gradle_extension_template(name: &str) -> Result<String, PatternError> {
    let property = escape(&lowercase_first_char(strip_sdk_prefix(name)));
    Ok(format!(r"^[\s\S]*{property}ExtensionVersion\s*=\s*"))
}
