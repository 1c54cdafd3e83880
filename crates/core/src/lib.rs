//! # sdkversions-core
//!
//! Core types and the matching engine for sdkversions.
//!
//! A [`PatternCatalog`] maps file-type keys to [`PatternSpec`]s contributed by the
//! platform crates. Specs are bound to a name and an expected version to produce
//! [`ConcretePattern`]s, which [`process_content`] runs line by line to either rewrite
//! version tokens or check them.

pub mod catalog;
pub mod concrete_pattern;
pub mod dependency;
pub mod error;
pub mod file_target;
pub mod matcher;
pub mod mode;
pub mod pattern_spec;
pub mod report;
pub mod template;
pub mod version_grammar;

pub use catalog::{PatternCatalog, PatternProvider};
pub use concrete_pattern::ConcretePattern;
pub use dependency::{DependencyError, DependencyScope, DependencySpec};
pub use error::PatternError;
pub use file_target::{FileTarget, split_path_arg};
pub use matcher::{ContentOutcome, LineMatcher, LineOutcome, process_content};
pub use mode::Mode;
pub use pattern_spec::PatternSpec;
pub use report::{FileReport, PatternMatch, RunReport};
pub use template::{PatternTemplate, TemplateFn, lowercase_first_char, strip_sdk_prefix};
pub use version_grammar::VersionGrammar;
