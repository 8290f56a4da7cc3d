use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{CatalogRecord, Category, PostingKind};

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Invalid { row: usize, reason: String },
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read catalog export: {}", err),
            ImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
            ImportError::Invalid { row, reason } => {
                write!(f, "invalid catalog row {}: {}", row, reason)
            }
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
            ImportError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads catalog records from a CSV export with the headers
/// `kind,title,description,category,price,rating,reviews,author`.
pub struct CatalogCsvImporter;

impl CatalogCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogRecord>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CatalogRecord>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for (index, row) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            // Data rows start on line 2; line 1 is the header.
            let line = index + 2;
            let row = row?;
            records.push(row.into_record(line)?);
        }

        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(default)]
    kind: Option<String>,
    title: String,
    description: String,
    category: String,
    price: String,
    #[serde(default)]
    rating: Option<String>,
    #[serde(default)]
    reviews: Option<String>,
    #[serde(default)]
    author: Option<String>,
}

impl CatalogRow {
    fn into_record(self, line: usize) -> Result<CatalogRecord, ImportError> {
        if self.title.is_empty() {
            return Err(invalid(line, "title must not be empty"));
        }

        let kind = match self.kind.as_deref().unwrap_or("employer") {
            "" | "employer" => PostingKind::Employer,
            "worker" => PostingKind::Worker,
            other => {
                return Err(invalid(
                    line,
                    format!("unknown kind '{other}' (expected employer or worker)"),
                ))
            }
        };

        let category = match self.category.as_str() {
            "remote" => Category::Remote,
            "onsite" => Category::Onsite,
            other => {
                return Err(invalid(
                    line,
                    format!("unknown category '{other}' (expected remote or onsite)"),
                ))
            }
        };

        let rating = match self.rating.as_deref().filter(|raw| !raw.is_empty()) {
            Some(raw) => raw
                .parse::<f32>()
                .map_err(|_| invalid(line, format!("rating '{raw}' is not a number")))?,
            None => 0.0,
        };
        if !(0.0..=5.0).contains(&rating) {
            return Err(invalid(line, format!("rating {rating} is out of 0..=5")));
        }

        let reviews = match self.reviews.as_deref().filter(|raw| !raw.is_empty()) {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| invalid(line, format!("reviews '{raw}' is not a whole number")))?,
            None => 0,
        };

        Ok(CatalogRecord {
            kind,
            title: self.title,
            description: self.description,
            category,
            price: self.price,
            rating,
            reviews,
            author: self
                .author
                .filter(|author| !author.is_empty())
                .unwrap_or_else(|| kind.default_author().to_string()),
            details: None,
        })
    }
}

fn invalid(row: usize, reason: impl Into<String>) -> ImportError {
    ImportError::Invalid {
        row,
        reason: reason.into(),
    }
}
