use crate::domain::ports::{BookProcessor, BookReader, BookWriter};
use crate::utils::error::{EtlError, Result};
use crate::validation::CollectionValidator;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub read: usize,
    pub valid: usize,
    pub written: usize,
    pub destination: String,
}

/// Reads a batch, validates it, runs each processor in order and writes the result.
pub struct EtlEngine<R: BookReader, W: BookWriter> {
    reader: R,
    writer: W,
    validator: CollectionValidator,
    processors: Vec<Box<dyn BookProcessor>>,
}

impl<R: BookReader, W: BookWriter> EtlEngine<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            validator: CollectionValidator::new(),
            processors: Vec::new(),
        }
    }

    pub fn with_processor(mut self, processor: Box<dyn BookProcessor>) -> Self {
        self.processors.push(processor);
        self
    }

    pub async fn run(&self, cancel: &CancellationToken) -> Result<RunSummary> {
        tracing::info!("Starting book processing");

        // Extract
        tracing::info!("Reading books from {}", self.reader.source_name());
        let books = self.reader.read_books().await?;
        let read = books.len();
        tracing::info!("Read {} books", read);

        // Validate
        let mut books = self.validator.validate_and_filter(&books);
        let valid = books.len();

        // Transform
        for processor in &self.processors {
            tracing::debug!("Running processor {}", processor.name());
            books = processor.process(books, cancel)?;
        }

        if cancel.is_cancelled() {
            return Err(EtlError::Cancelled);
        }

        // Load
        tracing::info!(
            "Writing {} books to {}",
            books.len(),
            self.writer.destination_name()
        );
        self.writer.write_books(&books).await?;

        Ok(RunSummary {
            read,
            valid,
            written: books.len(),
            destination: self.writer.destination_name().to_string(),
        })
    }
}
