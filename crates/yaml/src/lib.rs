//! # sdkversions-yaml
//!
//! YAML support for sdkversions, aimed at GitHub Actions workflows: pins the ref of a
//! `uses: <action>@<ref>` step.

pub mod patterns;

pub use patterns::{YML_USES, YamlPatterns, yml_uses_template};
