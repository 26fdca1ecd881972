use crate::domain::model::Book;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn excluded_author_names(&self) -> &[String];
    fn author_match_case_sensitive(&self) -> bool;
    fn normalize(&self) -> bool;
}

#[async_trait]
pub trait BookReader: Send + Sync {
    /// Name of the source, for logging.
    fn source_name(&self) -> &str;
    async fn read_books(&self) -> Result<Vec<Book>>;
}

#[async_trait]
pub trait BookWriter: Send + Sync {
    fn destination_name(&self) -> &str;
    async fn write_books(&self, books: &[Book]) -> Result<()>;
}

/// A synchronous batch stage. Implementations check `cancel` between records
/// and return `EtlError::Cancelled` without partial output.
pub trait BookProcessor: Send + Sync {
    fn name(&self) -> &str;
    fn process(&self, books: Vec<Book>, cancel: &CancellationToken) -> Result<Vec<Book>>;
}
