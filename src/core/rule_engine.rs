use crate::domain::model::Book;
use crate::domain::ports::BookProcessor;
use crate::rules::{FilterRule, FilterRuleResult, TransformRule};
use crate::utils::error::{EtlError, Result};
use tokio_util::sync::CancellationToken;

/// A record dropped by a filter rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion {
    pub id: String,
    pub title: String,
    pub rule: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProcessingReport {
    pub records: Vec<Book>,
    pub exclusions: Vec<Exclusion>,
}

impl ProcessingReport {
    pub fn included_count(&self) -> usize {
        self.records.len()
    }

    pub fn excluded_count(&self) -> usize {
        self.exclusions.len()
    }
}

/// Applies ordered filter rules, then ordered transform rules, to each book.
///
/// The first filter that excludes a book ends its evaluation. Survivors are
/// passed through every transform in turn, so `[t1, t2]` yields `t2(t1(book))`.
#[derive(Default)]
pub struct RuleEngine {
    filter_rules: Vec<Box<dyn FilterRule>>,
    transform_rules: Vec<Box<dyn TransformRule>>,
}

impl RuleEngine {
    pub fn new(
        filter_rules: Vec<Box<dyn FilterRule>>,
        transform_rules: Vec<Box<dyn TransformRule>>,
    ) -> Self {
        Self {
            filter_rules,
            transform_rules,
        }
    }

    pub fn filter_rule_names(&self) -> Vec<&str> {
        self.filter_rules.iter().map(|r| r.name()).collect()
    }

    pub fn transform_rule_names(&self) -> Vec<&str> {
        self.transform_rules.iter().map(|r| r.name()).collect()
    }

    /// Runs the batch and returns the survivors along with every exclusion.
    ///
    /// Fails with `EtlError::Cancelled` if `cancel` fires before the last
    /// record; nothing processed so far is returned in that case.
    pub fn process_with_report(
        &self,
        books: Vec<Book>,
        cancel: &CancellationToken,
    ) -> Result<ProcessingReport> {
        let mut report = ProcessingReport::default();

        for book in books {
            if cancel.is_cancelled() {
                tracing::warn!(
                    "Processing cancelled after {} books",
                    report.included_count() + report.excluded_count()
                );
                return Err(EtlError::Cancelled);
            }

            if let Some((rule, reason)) = self.first_exclusion(&book) {
                tracing::info!("Book excluded: {}", reason);
                report.exclusions.push(Exclusion {
                    id: book.id,
                    title: book.title,
                    rule: rule.to_string(),
                    reason,
                });
                continue;
            }

            report.records.push(self.apply_transforms(book));
        }

        tracing::info!(
            "Processing complete. {} books included, {} books excluded.",
            report.included_count(),
            report.excluded_count()
        );

        Ok(report)
    }

    /// Runs the batch and returns only the surviving books.
    pub fn process(&self, books: Vec<Book>, cancel: &CancellationToken) -> Result<Vec<Book>> {
        Ok(self.process_with_report(books, cancel)?.records)
    }

    fn first_exclusion(&self, book: &Book) -> Option<(&str, String)> {
        self.filter_rules.iter().find_map(|rule| match rule.evaluate(book) {
            FilterRuleResult::Include => None,
            FilterRuleResult::Exclude { reason } => Some((rule.name(), reason)),
        })
    }

    fn apply_transforms(&self, book: Book) -> Book {
        self.transform_rules.iter().fold(book, |current, rule| {
            tracing::debug!("Applying {} to book '{}'", rule.name(), current.id);
            rule.transform(&current)
        })
    }
}

impl BookProcessor for RuleEngine {
    fn name(&self) -> &str {
        "RuleEngine"
    }

    fn process(&self, books: Vec<Book>, cancel: &CancellationToken) -> Result<Vec<Book>> {
        RuleEngine::process(self, books, cancel)
    }
}
