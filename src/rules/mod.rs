//! Pluggable filter and transform rules.
//!
//! A [`FilterRule`] decides whether a book stays in the batch; a
//! [`TransformRule`] produces a modified copy of a book. Rules hold only their
//! own configuration and are shared read-only by the rule engine.

pub mod exclude_author;
pub mod exclude_weekday;
pub mod factory;
pub mod round_price;

use crate::domain::model::Book;

pub use exclude_author::{CaseSensitivity, ExcludeAuthorContainsRule};
pub use exclude_weekday::ExcludePublishedOnWeekdayRule;
pub use factory::RuleFactory;
pub use round_price::RoundPriceUpRule;

pub trait Rule: Send + Sync {
    /// Human-readable identifier used in logs and exclusion reports.
    fn name(&self) -> &str;
}

pub trait FilterRule: Rule {
    fn evaluate(&self, book: &Book) -> FilterRuleResult;
}

pub trait TransformRule: Rule {
    /// Returns a new book; fields the rule does not touch are carried over.
    fn transform(&self, book: &Book) -> Book;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRuleResult {
    Include,
    Exclude { reason: String },
}

impl FilterRuleResult {
    pub fn include() -> Self {
        FilterRuleResult::Include
    }

    pub fn exclude(reason: impl Into<String>) -> Self {
        FilterRuleResult::Exclude {
            reason: reason.into(),
        }
    }

    pub fn should_include(&self) -> bool {
        matches!(self, FilterRuleResult::Include)
    }

    pub fn exclusion_reason(&self) -> Option<&str> {
        match self {
            FilterRuleResult::Include => None,
            FilterRuleResult::Exclude { reason } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_has_no_reason() {
        let result = FilterRuleResult::include();
        assert!(result.should_include());
        assert_eq!(result.exclusion_reason(), None);
    }

    #[test]
    fn test_exclude_carries_reason() {
        let result = FilterRuleResult::exclude("Test reason");
        assert!(!result.should_include());
        assert_eq!(result.exclusion_reason(), Some("Test reason"));
    }
}
