use sdkversions_android::AndroidPatterns;
use sdkversions_core::PatternCatalog;
use sdkversions_ios::IosPatterns;
use sdkversions_yaml::YamlPatterns;

pub fn get_catalog() -> PatternCatalog {
    PatternCatalog::new()
        .with(&AndroidPatterns::new())
        .with(&IosPatterns::new())
        .with(&YamlPatterns::new())
}
