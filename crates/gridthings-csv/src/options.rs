//! CSV options

/// Options for reading CSV data
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Whether the first record is a header and not part of the grid (default: false)
    pub has_header: bool,
    /// Trim whitespace around fields (default: true)
    pub trim: bool,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            has_header: false,
            trim: true,
        }
    }
}

impl CsvReadOptions {
    /// Default options, skipping a header record
    pub fn with_header() -> Self {
        Self {
            has_header: true,
            ..Self::default()
        }
    }

    /// Set the field delimiter
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}
