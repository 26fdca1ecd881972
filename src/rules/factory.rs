use crate::core::rule_engine::RuleEngine;
use crate::domain::ports::ConfigProvider;
use crate::rules::{
    CaseSensitivity, ExcludeAuthorContainsRule, ExcludePublishedOnWeekdayRule, FilterRule,
    RoundPriceUpRule, TransformRule,
};

/// Builds the default rule set.
pub struct RuleFactory;

impl RuleFactory {
    pub fn default_filter_rules(config: &impl ConfigProvider) -> Vec<Box<dyn FilterRule>> {
        let case_sensitivity = if config.author_match_case_sensitive() {
            CaseSensitivity::Sensitive
        } else {
            CaseSensitivity::Insensitive
        };

        vec![
            Box::new(ExcludePublishedOnWeekdayRule::saturday()),
            Box::new(ExcludeAuthorContainsRule::new(
                config.excluded_author_names().iter().cloned(),
                case_sensitivity,
            )),
        ]
    }

    pub fn default_transform_rules() -> Vec<Box<dyn TransformRule>> {
        vec![Box::new(RoundPriceUpRule)]
    }

    pub fn default_engine(config: &impl ConfigProvider) -> RuleEngine {
        let engine = RuleEngine::new(
            Self::default_filter_rules(config),
            Self::default_transform_rules(),
        );
        tracing::debug!(
            "Rule engine configured with filters {:?} and transforms {:?}",
            engine.filter_rule_names(),
            engine.transform_rule_names()
        );
        engine
    }
}
