use regex::Regex;
use std::collections::HashSet;

use crate::{concrete_pattern::ConcretePattern, error::PatternError, mode::Mode};

/// Split `line` into its body and its terminator (`"\r\n"`, `"\n"` or `""`).
#[must_use]
pub fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Result of running every pattern of a file over one line.
#[derive(Debug, PartialEq, Eq)]
pub struct LineOutcome<'a> {
    pub line: String,
    pub matched: Vec<&'a ConcretePattern>,
}

/// Result of running every pattern of a file over its whole content.
#[derive(Debug, PartialEq, Eq)]
pub struct ContentOutcome<'a> {
    pub content: String,
    /// `(1-based line number, pattern)` for every match, in file order.
    pub matched: Vec<(usize, &'a ConcretePattern)>,
}

impl<'a> ContentOutcome<'a> {
    /// `all - matched`, deduplicated, in the order of `all`.
    #[must_use]
    pub fn unmatched(&self, all: &'a [ConcretePattern]) -> Vec<&'a ConcretePattern> {
        let mut seen = self
            .matched
            .iter()
            .map(|(_, pattern)| *pattern)
            .collect::<HashSet<_>>();
        all.iter().filter(|pattern| seen.insert(*pattern)).collect()
    }
}

/// The compiled patterns of one file.
#[derive(Debug)]
pub struct LineMatcher<'a> {
    patterns: Vec<(&'a ConcretePattern, Regex)>,
}

impl<'a> LineMatcher<'a> {
    /// # Errors
    /// Returns [`PatternError::InvalidRegex`] if any anchor fails to compile.
    pub fn new(patterns: &'a [ConcretePattern]) -> Result<Self, PatternError> {
        let patterns = patterns
            .iter()
            .map(|pattern| Ok((pattern, pattern.compile()?)))
            .collect::<Result<Vec<_>, PatternError>>()?;
        Ok(Self { patterns })
    }

    /// Apply every pattern to `line`.
    ///
    /// Each pattern sees the original line. In update mode the returned line is the
    /// rewrite of the last matching pattern; overlapping anchors on one line are not
    /// composed.
    #[must_use]
    pub fn apply(&self, line: &str, mode: Mode) -> LineOutcome<'a> {
        let (body, ending) = split_line_ending(line);
        let mut rewritten = None;
        let mut matched = Vec::new();

        for (pattern, regex) in &self.patterns {
            let Some(caps) = regex.captures(body) else {
                continue;
            };
            match mode {
                Mode::Update => {
                    // group 2 is dropped; the version is inserted literally, never expanded
                    let rest = &body[caps.get(0).map_or(0, |m| m.end())..];
                    rewritten = Some(format!(
                        "{}{}{}{}",
                        &caps[1],
                        pattern.expected_version(),
                        rest,
                        ending
                    ));
                    matched.push(*pattern);
                }
                Mode::Validate => {
                    if &caps[2] == pattern.expected_version() {
                        matched.push(*pattern);
                    }
                }
            }
        }

        LineOutcome {
            line: rewritten.unwrap_or_else(|| line.to_string()),
            matched,
        }
    }
}

/// Run `patterns` over every line of `content`, preserving line endings.
///
/// # Errors
/// Returns [`PatternError::InvalidRegex`] if any anchor fails to compile.
pub fn process_content<'a>(
    content: &str,
    patterns: &'a [ConcretePattern],
    mode: Mode,
) -> Result<ContentOutcome<'a>, PatternError> {
    let matcher = LineMatcher::new(patterns)?;
    let mut output = String::with_capacity(content.len());
    let mut matched = Vec::new();

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let outcome = matcher.apply(line, mode);
        output.push_str(&outcome.line);
        matched.extend(outcome.matched.into_iter().map(|pattern| (index + 1, pattern)));
    }

    Ok(ContentOutcome {
        content: output,
        matched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version_grammar::VersionGrammar;
    use rstest::rstest;

    fn podspec_version(version: &str) -> ConcretePattern {
        ConcretePattern::new(
            "s.version",
            r#"^[\s\S]*s\.version\s*=\s*""#,
            version,
            VersionGrammar::Semver,
        )
    }

    #[rstest]
    #[case("line\n", ("line", "\n"))]
    #[case("line\r\n", ("line", "\r\n"))]
    #[case("line", ("line", ""))]
    #[case("\n", ("", "\n"))]
    #[case("", ("", ""))]
    fn test_split_line_ending(#[case] input: &str, #[case] expected: (&str, &str)) {
        assert_eq!(split_line_ending(input), expected);
    }

    #[test]
    fn test_apply_update_preserves_trailing_content() {
        let patterns = vec![podspec_version("3.0.1")];
        let matcher = LineMatcher::new(&patterns).unwrap();
        let outcome = matcher.apply("  s.version      = \"3.0.0\" # keep\r\n", Mode::Update);
        assert_eq!(outcome.line, "  s.version      = \"3.0.1\" # keep\r\n");
        assert_eq!(outcome.matched, vec![&patterns[0]]);
    }

    #[rstest]
    #[case("16.0.0")]
    #[case("1.0.0")]
    #[case("$1.2.3")]
    fn test_apply_update_inserts_version_literally(#[case] version: &str) {
        let patterns = vec![ConcretePattern::new(
            "uses:",
            r"^[\s\S]*uses:\s*actions/checkout@",
            version,
            VersionGrammar::RestOfLine,
        )];
        let matcher = LineMatcher::new(&patterns).unwrap();
        let outcome = matcher.apply("      - uses: actions/checkout@v3\n", Mode::Update);
        assert_eq!(
            outcome.line,
            format!("      - uses: actions/checkout@{}\n", version)
        );
    }

    #[rstest]
    #[case("  s.version = \"3.0.0\"\n", "3.0.0", true)]
    #[case("  s.version = \"3.0.0\"\n", "3.0.1", false)]
    #[case("  s.version = \"3.0.00\"\n", "3.0.0", false)]
    #[case("  s.version = \"03.0.0\"\n", "3.0.0", false)]
    #[case("  s.name = \"AEPCore\"\n", "3.0.0", false)]
    fn test_apply_validate_exact_match(
        #[case] line: &str,
        #[case] expected_version: &str,
        #[case] matched: bool,
    ) {
        let patterns = vec![podspec_version(expected_version)];
        let matcher = LineMatcher::new(&patterns).unwrap();
        let outcome = matcher.apply(line, Mode::Validate);
        assert_eq!(outcome.line, line);
        assert_eq!(!outcome.matched.is_empty(), matched);
    }

    #[test]
    fn test_apply_no_match_passes_line_through() {
        let patterns = vec![podspec_version("9.9.9")];
        let matcher = LineMatcher::new(&patterns).unwrap();
        let outcome = matcher.apply("Pod::Spec.new do |s|\n", Mode::Update);
        assert_eq!(outcome.line, "Pod::Spec.new do |s|\n");
        assert!(outcome.matched.is_empty());
    }

    #[test]
    fn test_process_content_update_is_idempotent() {
        let content = "Pod::Spec.new do |s|\n  s.version = \"3.0.0\"\n  s.name = \"AEPCore\"\nend";
        let patterns = vec![podspec_version("3.1.0")];

        let first = process_content(content, &patterns, Mode::Update).unwrap();
        assert_eq!(
            first.content,
            "Pod::Spec.new do |s|\n  s.version = \"3.1.0\"\n  s.name = \"AEPCore\"\nend"
        );
        assert_eq!(first.matched, vec![(2, &patterns[0])]);

        let second = process_content(&first.content, &patterns, Mode::Update).unwrap();
        assert_eq!(second.content, first.content);
    }

    #[test]
    fn test_process_content_validate_reports_unmatched() {
        let content = "  s.version      = \"3.0.0\"\n";
        let patterns = vec![podspec_version("3.0.1")];
        let outcome = process_content(content, &patterns, Mode::Validate).unwrap();
        assert_eq!(outcome.content, content);
        assert!(outcome.matched.is_empty());

        let unmatched = outcome.unmatched(&patterns);
        assert_eq!(unmatched.len(), 1);
        assert_eq!(unmatched[0].description(), "s.version");
    }

    #[test]
    fn test_unmatched_is_a_set_difference() {
        let content = "  s.version = \"3.0.0\"\n  s.version = \"3.0.0\"\n";
        let patterns = vec![
            podspec_version("3.0.0"),
            podspec_version("4.0.0"),
            podspec_version("4.0.0"),
        ];
        let outcome = process_content(content, &patterns, Mode::Validate).unwrap();
        assert_eq!(outcome.matched.len(), 2);
        assert_eq!(outcome.unmatched(&patterns), vec![&patterns[1]]);
    }

    #[test]
    fn test_process_content_empty_patterns() {
        let content = "anything\n";
        let outcome = process_content(content, &[], Mode::Validate).unwrap();
        assert_eq!(outcome.content, content);
        assert!(outcome.unmatched(&[]).is_empty());
    }

    #[test]
    fn test_overlapping_anchors_record_every_match() {
        // which rewrite wins on a shared line is left unspecified
        let patterns = vec![
            ConcretePattern::new("a", r"^[\s\S]*v=", "1.0.0", VersionGrammar::Semver),
            ConcretePattern::new("b", r"^[\s\S]*v=", "2.0.0", VersionGrammar::Semver),
        ];
        let outcome = process_content("v=0.0.1\n", &patterns, Mode::Update).unwrap();
        assert_eq!(outcome.matched.len(), 2);
        assert!(outcome.content == "v=1.0.0\n" || outcome.content == "v=2.0.0\n");
    }
}
