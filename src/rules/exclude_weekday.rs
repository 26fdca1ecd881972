use crate::domain::model::Book;
use crate::rules::{FilterRule, FilterRuleResult, Rule};
use chrono::{Datelike, Weekday};

/// Excludes books published on a given day of the week.
#[derive(Debug, Clone)]
pub struct ExcludePublishedOnWeekdayRule {
    weekday: Weekday,
    name: String,
}

impl ExcludePublishedOnWeekdayRule {
    pub fn new(weekday: Weekday) -> Self {
        Self {
            weekday,
            name: format!("Exclude{}Published", weekday_name(weekday)),
        }
    }

    pub fn saturday() -> Self {
        Self::new(Weekday::Sat)
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl Rule for ExcludePublishedOnWeekdayRule {
    fn name(&self) -> &str {
        &self.name
    }
}

impl FilterRule for ExcludePublishedOnWeekdayRule {
    fn evaluate(&self, book: &Book) -> FilterRuleResult {
        match book.publish_date {
            Some(date) if date.weekday() == self.weekday => FilterRuleResult::exclude(format!(
                "Book '{}' (ID: {}) was published on a {} ({})",
                book.title,
                book.id,
                weekday_name(self.weekday),
                date.format("%Y-%m-%d")
            )),
            _ => FilterRuleResult::include(),
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn book_published(year: i32, month: u32, day: u32) -> Book {
        Book::new(
            "bk101",
            "Test Author",
            "Test Book",
            Decimal::new(1999, 2),
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        )
    }

    #[test]
    fn test_saturday_is_excluded_with_reason() {
        let rule = ExcludePublishedOnWeekdayRule::saturday();

        let result = rule.evaluate(&book_published(2023, 5, 13));

        assert!(!result.should_include());
        let reason = result.exclusion_reason().unwrap();
        assert!(reason.contains("bk101"));
        assert!(reason.contains("Test Book"));
        assert!(reason.contains("2023-05-13"));
        assert!(reason.contains("Saturday"));
    }

    #[test]
    fn test_other_days_are_included() {
        let rule = ExcludePublishedOnWeekdayRule::saturday();
        // 2023-05-14 is a Sunday through 2023-05-19 a Friday
        for day in 14..=19 {
            assert!(rule.evaluate(&book_published(2023, 5, day)).should_include());
        }
    }

    #[test]
    fn test_unset_date_is_included() {
        let mut book = book_published(2023, 5, 13);
        book.publish_date = None;
        assert!(ExcludePublishedOnWeekdayRule::saturday()
            .evaluate(&book)
            .should_include());
    }

    #[test]
    fn test_rule_name() {
        assert_eq!(
            ExcludePublishedOnWeekdayRule::saturday().name(),
            "ExcludeSaturdayPublished"
        );
        assert_eq!(
            ExcludePublishedOnWeekdayRule::new(Weekday::Sun).name(),
            "ExcludeSundayPublished"
        );
    }
}
