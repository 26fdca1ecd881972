pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod rules;
pub mod utils;
pub mod validation;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{CsvBookWriter, JsonBookReader};
pub use config::TomlConfig;
pub use self::core::{
    etl::{EtlEngine, RunSummary},
    normalizer::NormalizingProcessor,
    rule_engine::{Exclusion, ProcessingReport, RuleEngine},
};
pub use domain::model::Book;
pub use domain::ports::{BookProcessor, BookReader, BookWriter};
pub use rules::{FilterRule, FilterRuleResult, RuleFactory, TransformRule};
pub use utils::error::{EtlError, Result};
pub use validation::{CollectionValidator, FieldValidator, ValidationResult};

pub use tokio_util::sync::CancellationToken;
