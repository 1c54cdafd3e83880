use regex::escape;
use sdkversions_core::{PatternError, template::SDK_NAME_PREFIX};

/// Dependencies that ship from the Core repository.
pub const CORE_DEPENDENCIES: [&str; 5] = [
    "AEPCore",
    "AEPIdentity",
    "AEPLifecycle",
    "AEPServices",
    "AEPSignal",
];

pub const CORE_REPO_URL: &str = "https://github.com/adobe/aepsdk-core-ios.git";

/// GitHub repository URL of an iOS dependency.
///
/// `AEPEdgeIdentity` -> `https://github.com/adobe/aepsdk-edgeidentity-ios.git`
///
/// # Errors
/// Returns [`PatternError::UnknownDependency`] for names outside the `AEP<Name>` scheme.
pub fn ios_repo_url(name: &str) -> Result<String, PatternError> {
    if CORE_DEPENDENCIES.contains(&name) {
        return Ok(CORE_REPO_URL.to_string());
    }
    match name.strip_prefix(SDK_NAME_PREFIX) {
        Some(repo_name) if !repo_name.is_empty() => Ok(format!(
            "https://github.com/adobe/aepsdk-{}-ios.git",
            repo_name.to_lowercase()
        )),
        _ => Err(PatternError::UnknownDependency {
            name: name.to_string(),
        }),
    }
}

/// Swift Package Manager dependency declared with `.upToNextMajor(from:)`.
///
/// # Errors
/// See [`ios_repo_url`].
pub fn swift_spm_template(name: &str) -> Result<String, PatternError> {
    let url = escape(&ios_repo_url(name)?);
    Ok(format!(
        r#"^[\s\S]*\.package\(\s*url:\s*"{url}"\s*,\s*\.upToNextMajor\(\s*from:\s*""#
    ))
}

/// CocoaPods `s.dependency 'Name', '>= x.y.z'` declaration.
///
/// # Errors
/// Never fails; the signature matches [`sdkversions_core::TemplateFn`].
pub fn podspec_template(name: &str) -> Result<String, PatternError> {
    let name = escape(name);
    Ok(format!(
        r#"^[\s\S]*s\.dependency\s*["']{name}["']\s*,\s*["']>=\s*"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("AEPCore", CORE_REPO_URL)]
    #[case("AEPIdentity", CORE_REPO_URL)]
    #[case("AEPLifecycle", CORE_REPO_URL)]
    #[case("AEPServices", CORE_REPO_URL)]
    #[case("AEPSignal", CORE_REPO_URL)]
    #[case("AEPEdgeIdentity", "https://github.com/adobe/aepsdk-edgeidentity-ios.git")]
    #[case("AEPRulesEngine", "https://github.com/adobe/aepsdk-rulesengine-ios.git")]
    fn test_ios_repo_url(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(ios_repo_url(name).unwrap(), expected);
    }

    #[rstest]
    #[case("Core")]
    #[case("AEP")]
    #[case("aepCore")]
    fn test_ios_repo_url_unknown(#[case] name: &str) {
        let err = ios_repo_url(name).unwrap_err();
        assert!(matches!(err, PatternError::UnknownDependency { name: n } if n == name));
    }

    #[test]
    fn test_swift_spm_template() {
        let anchor = swift_spm_template("AEPCore").unwrap();
        assert!(anchor.starts_with(r"^[\s\S]*\.package\(\s*url:\s*"));
        assert!(anchor.ends_with(r#"\.upToNextMajor\(\s*from:\s*""#));

        let regex = regex::Regex::new(&anchor).unwrap();
        assert!(regex.is_match(
            r#"        .package(url: "https://github.com/adobe/aepsdk-core-ios.git", .upToNextMajor(from: "3.1.1")),"#
        ));
        // the dot in the URL is literal
        assert!(!regex.is_match(
            r#"        .package(url: "https://githubXcom/adobe/aepsdk-core-ios.git", .upToNextMajor(from: "3.1.1")),"#
        ));
        assert!(swift_spm_template("Core").is_err());
    }

    #[test]
    fn test_podspec_template() {
        assert_eq!(
            podspec_template("AEPCore").unwrap(),
            r#"^[\s\S]*s\.dependency\s*["']AEPCore["']\s*,\s*["']>=\s*"#
        );
    }
}
