use crate::domain::model::Book;
use crate::domain::ports::BookWriter;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::require_non_blank;
use async_trait::async_trait;

const HEADER: [&str; 7] = [
    "Id",
    "Author",
    "Title",
    "Genre",
    "Price",
    "PublishDate",
    "Description",
];

/// Writes books to a CSV file with a fixed header row.
#[derive(Debug, Clone)]
pub struct CsvBookWriter {
    file_path: String,
}

impl CsvBookWriter {
    pub fn new(file_path: impl Into<String>) -> Result<Self> {
        let file_path = file_path.into();
        require_non_blank("file_path", &file_path)?;
        Ok(Self { file_path })
    }

    /// Fields containing commas, quotes or line breaks are quoted.
    pub fn render(books: &[Book]) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.write_record(HEADER)?;

        for book in books {
            let price = book.price.to_string();
            let publish_date = book
                .publish_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();

            writer.write_record([
                book.id.as_str(),
                book.author.as_str(),
                book.title.as_str(),
                book.genre.as_str(),
                price.as_str(),
                publish_date.as_str(),
                book.description.as_str(),
            ])?;
        }

        let bytes = writer.into_inner().map_err(|e| EtlError::ProcessingError {
            message: format!("Failed to flush CSV output: {}", e),
        })?;

        String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
            message: format!("CSV output is not valid UTF-8: {}", e),
        })
    }
}

#[async_trait]
impl BookWriter for CsvBookWriter {
    fn destination_name(&self) -> &str {
        &self.file_path
    }

    async fn write_books(&self, books: &[Book]) -> Result<()> {
        let content = Self::render(books)?;

        if let Some(parent) = std::path::Path::new(&self.file_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&self.file_path, content).await?;
        tracing::debug!("Wrote {} books to {}", books.len(), self.file_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    fn sample_book() -> Book {
        Book::new(
            "bk101",
            "Test Author",
            "Test Book",
            Decimal::new(1999, 2),
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        )
        .with_genre("Fiction")
        .with_description("A test book description.")
    }

    #[test]
    fn test_blank_path_is_rejected() {
        assert!(matches!(
            CsvBookWriter::new(" "),
            Err(EtlError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_empty_batch_renders_header_only() {
        let csv = CsvBookWriter::render(&[]).unwrap();
        assert_eq!(csv, "Id,Author,Title,Genre,Price,PublishDate,Description\n");
    }

    #[test]
    fn test_renders_row() {
        let csv = CsvBookWriter::render(&[sample_book()]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "bk101,Test Author,Test Book,Fiction,19.99,2023-01-15,A test book description."
        );
    }

    #[test]
    fn test_escapes_special_characters() {
        let mut book = sample_book();
        book.author = "Gambardella, Matthew".to_string();
        book.title = "The \"Quoted\" Title".to_string();
        book.description = "Line one\nLine two".to_string();

        let csv = CsvBookWriter::render(&[book]).unwrap();

        assert!(csv.contains("\"Gambardella, Matthew\""));
        assert!(csv.contains("\"The \"\"Quoted\"\" Title\""));
        assert!(csv.contains("\"Line one\nLine two\""));
    }

    #[test]
    fn test_empty_optional_fields_render_empty() {
        let mut book = sample_book();
        book.genre.clear();
        book.description.clear();

        let csv = CsvBookWriter::render(&[book]).unwrap();

        assert_eq!(
            csv.lines().nth(1).unwrap(),
            "bk101,Test Author,Test Book,,19.99,2023-01-15,"
        );
    }

    #[tokio::test]
    async fn test_write_books_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("books_output.csv");
        let writer = CsvBookWriter::new(path.to_str().unwrap()).unwrap();

        writer.write_books(&[sample_book()]).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Id,Author,Title"));
        assert!(content.contains("bk101"));
    }
}
