//! Query parameter sets.
//!
//! A [`ParameterSet`] is built fresh for every request and never shared.
//! Iteration order is unspecified; nothing downstream depends on it.

use std::collections::HashMap;

/// URL query parameters for one request, name to raw (unescaped) value.
pub type ParameterSet = HashMap<String, String>;

/// Combine a primary parameter with optional extra parameters.
///
/// The primary pair is only inserted when `value` is non-empty. Every extra
/// pair is inserted afterwards, so an extra with the same name replaces the
/// primary one.
///
/// ```
/// use puppetdb_client::{ParameterSet, merge_param};
///
/// let extra = ParameterSet::from([("limit".to_string(), "10".to_string())]);
/// let params = merge_param("query", r#"["=","certname","a"]"#, Some(&extra));
/// assert_eq!(params.len(), 2);
///
/// assert!(merge_param("query", "", None).is_empty());
/// ```
pub fn merge_param(name: &str, value: &str, extra: Option<&ParameterSet>) -> ParameterSet {
    let mut result = ParameterSet::new();
    if !value.is_empty() {
        result.insert(name.to_string(), value.to_string());
    }
    if let Some(extra) = extra {
        result.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(&str, &str)]) -> ParameterSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_primary_is_dropped() {
        let extra = set(&[("summarize-by", "certname")]);
        assert_eq!(
            merge_param("query", "", Some(&extra)),
            set(&[("summarize-by", "certname")])
        );
    }

    #[test]
    fn test_extra_overrides_primary() {
        let extra = set(&[("query", "R")]);
        assert_eq!(merge_param("query", "Q", Some(&extra)), set(&[("query", "R")]));
    }

    #[test]
    fn test_no_filter_yields_empty_set() {
        assert!(merge_param("query", "", None).is_empty());
        assert!(merge_param("query", "", Some(&ParameterSet::new())).is_empty());
    }

    #[test]
    fn test_primary_only() {
        assert_eq!(merge_param("query", "Q", None), set(&[("query", "Q")]));
    }

    #[test]
    fn test_chained_merge_lets_extras_shadow_second_parameter() {
        let extra = set(&[("summarize-by", "resource"), ("limit", "5")]);
        let inner = merge_param("query", "Q", Some(&extra));
        let params = merge_param("summarize-by", "certname", Some(&inner));
        assert_eq!(
            params,
            set(&[("query", "Q"), ("summarize-by", "resource"), ("limit", "5")])
        );
    }

    #[test]
    fn test_extra_is_not_mutated() {
        let extra = set(&[("offset", "20")]);
        let _ = merge_param("query", "Q", Some(&extra));
        assert_eq!(extra, set(&[("offset", "20")]));
    }
}
