pub mod etl;
pub mod normalizer;
pub mod rule_engine;

pub use crate::domain::model::Book;
pub use crate::domain::ports::{BookProcessor, BookReader, BookWriter, ConfigProvider};
pub use crate::utils::error::Result;
