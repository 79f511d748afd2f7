//! Folder-glob to file-glob derivation
//!
//! A folder pattern has the exact shape `**/{kw1,kw2}*/**` and matches any
//! directory whose name starts with one of the keywords. The derived file
//! pattern `**/*{kw1*,kw2*}*` matches files carrying one of the keywords anywhere
//! in the tree. Anything else is left alone.

use once_cell::sync::Lazy;
use regex::Regex;

static FOLDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*/\{([^{}]+)\}\*/\*\*$").expect("valid regex"));

/// Derive the file pattern for a folder pattern.
///
/// Returns `folder_pattern` unchanged when it is not of the recognised shape, so
/// callers compare input and output to decide whether a new entry is needed.
pub fn generate_file_pattern(folder_pattern: &str) -> String {
    let Some(keywords) = folder_keywords(folder_pattern) else {
        return folder_pattern.to_string();
    };

    let file_keywords: Vec<String> = keywords.iter().map(|kw| format!("{kw}*")).collect();
    format!("**/*{{{}}}*", file_keywords.join(","))
}

/// Keywords of a folder pattern, trimmed and without empty entries.
///
/// `None` when the pattern does not have the folder shape. A shape match whose
/// entries are all blank yields an empty list.
pub fn folder_keywords(folder_pattern: &str) -> Option<Vec<&str>> {
    let captures = FOLDER_PATTERN.captures(folder_pattern)?;
    let list = captures.get(1)?.as_str();

    Some(list.split(',').map(str::trim).filter(|kw| !kw.is_empty()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_pattern_becomes_file_pattern() {
        assert_eq!(generate_file_pattern("**/{a,b,c}*/**"), "**/*{a*,b*,c*}*");
        assert_eq!(
            generate_file_pattern("**/{http,client,api,network}*/**"),
            "**/*{http*,client*,api*,network*}*"
        );
    }

    #[test]
    fn test_single_keyword() {
        assert_eq!(generate_file_pattern("**/{auth}*/**"), "**/*{auth*}*");
    }

    #[test]
    fn test_keywords_are_trimmed() {
        assert_eq!(folder_keywords("**/{ a , b}*/**"), Some(vec!["a", "b"]));
        assert_eq!(generate_file_pattern("**/{ a , b}*/**"), "**/*{a*,b*}*");
    }

    #[test]
    fn test_empty_keywords_are_dropped() {
        assert_eq!(folder_keywords("**/{a,,b}*/**"), Some(vec!["a", "b"]));
        assert_eq!(generate_file_pattern("**/{a,,b,}*/**"), "**/*{a*,b*}*");
    }

    #[test]
    fn test_all_empty_keywords_give_empty_group() {
        assert_eq!(folder_keywords("**/{ , }*/**"), Some(vec![]));
        assert_eq!(generate_file_pattern("**/{ , }*/**"), "**/*{}*");
        assert_eq!(generate_file_pattern("**/{,}*/**"), "**/*{}*");
    }

    #[test]
    fn test_non_matching_patterns_pass_through_unchanged() {
        let inputs = [
            "**/src/**",
            "**/*.go",
            "src/**/{a,b}*/**",
            "**/{a,b}*/**/*.rs",
            "**/{a,b}/**",
            "**/{a,{b,c}}*/**",
            "**/{a}*/{b}*/**",
            "**/{}*/**",
            "",
        ];
        for input in inputs {
            assert_eq!(generate_file_pattern(input), input, "{input:?} should pass through");
            assert!(folder_keywords(input).is_none());
        }
    }
}
