use crate::domain::model::Book;
use crate::rules::{FilterRule, FilterRuleResult, Rule};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseSensitivity {
    #[default]
    Insensitive,
    Sensitive,
}

/// Excludes books whose author contains any of the configured names.
#[derive(Debug, Clone)]
pub struct ExcludeAuthorContainsRule {
    excluded_names: Vec<String>,
    // Lowercased copies, parallel to `excluded_names`.
    folded_names: Vec<String>,
    case_sensitivity: CaseSensitivity,
    name: String,
}

impl ExcludeAuthorContainsRule {
    /// Blank names are ignored.
    pub fn new<I, S>(excluded_names: I, case_sensitivity: CaseSensitivity) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let excluded_names: Vec<String> = excluded_names
            .into_iter()
            .map(Into::into)
            .filter(|n| !n.trim().is_empty())
            .collect();

        if excluded_names.is_empty() {
            tracing::warn!(
                "ExcludeAuthorContainsRule initialized with no excluded names. No books will be excluded by this rule."
            );
        }

        let folded_names = excluded_names.iter().map(|n| n.to_lowercase()).collect();
        let name = format!("ExcludeAuthorContains({} names)", excluded_names.len());

        Self {
            excluded_names,
            folded_names,
            case_sensitivity,
            name,
        }
    }

    pub fn excluded_names(&self) -> &[String] {
        &self.excluded_names
    }

    fn first_match(&self, author: &str) -> Option<&str> {
        match self.case_sensitivity {
            CaseSensitivity::Sensitive => self
                .excluded_names
                .iter()
                .find(|name| author.contains(name.as_str()))
                .map(String::as_str),
            CaseSensitivity::Insensitive => {
                let author = author.to_lowercase();
                self.folded_names
                    .iter()
                    .position(|name| author.contains(name.as_str()))
                    .map(|i| self.excluded_names[i].as_str())
            }
        }
    }
}

impl Rule for ExcludeAuthorContainsRule {
    fn name(&self) -> &str {
        &self.name
    }
}

impl FilterRule for ExcludeAuthorContainsRule {
    fn evaluate(&self, book: &Book) -> FilterRuleResult {
        if self.excluded_names.is_empty() || book.author.is_empty() {
            return FilterRuleResult::include();
        }

        match self.first_match(&book.author) {
            Some(name) => FilterRuleResult::exclude(format!(
                "Book '{}' (ID: {}) excluded because author '{}' contains '{}'",
                book.title, book.id, book.author, name
            )),
            None => FilterRuleResult::include(),
        }
    }
}
