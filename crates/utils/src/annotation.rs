use std::fmt::Display;

/// Value of the `file=` field on every annotation.
pub const ANNOTATION_FILE: &str = "sdkversions";

/// Severity of a CI annotation (`::error ...::message`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationType {
    Error,
    Warning,
    Notice,
    Debug,
}

impl Display for AnnotationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Error => "error",
                Self::Warning => "warning",
                Self::Notice => "notice",
                Self::Debug => "debug",
            }
        )
    }
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// `::<level> file=sdkversions[,title=<title>]::<message>`
///
/// An empty title is left out; an empty message still ends with `::`. Newlines and
/// separators are percent-encoded so every annotation stays on one line.
#[must_use]
pub fn format_annotation(annotation_type: AnnotationType, title: &str, message: &str) -> String {
    let mut annotation = format!("::{annotation_type} file={ANNOTATION_FILE}");
    if !title.is_empty() {
        annotation.push_str(&format!(",title={}", escape_property(title)));
    }
    annotation.push_str("::");
    annotation.push_str(&escape_data(message));
    annotation
}

pub fn print_annotation(annotation_type: AnnotationType, title: &str, message: &str) {
    println!("{}", format_annotation(annotation_type, title, message));
}

pub fn log_error(title: &str, message: &str) {
    print_annotation(AnnotationType::Error, title, message);
}

pub fn log_notice(title: &str, message: &str) {
    print_annotation(AnnotationType::Notice, title, message);
}

pub fn log_debug(title: &str, message: &str) {
    print_annotation(AnnotationType::Debug, title, message);
}
