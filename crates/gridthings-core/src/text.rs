//! Delimited text ingestion
//!
//! Text such as `"abc\ndef"` or `"a,b,c\nd,e,f"` is split into rows on a
//! line separator and each row into fields, either on an in-line separator
//! or one field per character when no separator is set.

use crate::error::{Error, Result};

/// Options for splitting text into grid rows and fields
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextOptions {
    /// Separator between rows (default: `"\n"`)
    pub line_sep: String,
    /// Separator between fields in a row (default: none, one field per character)
    pub sep: Option<String>,
    /// Trim the whole text and every line before splitting (default: true)
    pub strip_whitespace: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            line_sep: "\n".into(),
            sep: None,
            strip_whitespace: true,
        }
    }
}

impl TextOptions {
    /// Default options with an in-line field separator
    pub fn with_sep<S: Into<String>>(sep: S) -> Self {
        Self {
            sep: Some(sep.into()),
            ..Self::default()
        }
    }

    /// Set the row separator
    pub fn line_sep<S: Into<String>>(mut self, line_sep: S) -> Self {
        self.line_sep = line_sep.into();
        self
    }

    /// Set the field separator
    pub fn sep<S: Into<String>>(mut self, sep: S) -> Self {
        self.sep = Some(sep.into());
        self
    }

    /// Enable or disable whitespace trimming
    pub fn strip_whitespace(mut self, strip: bool) -> Self {
        self.strip_whitespace = strip;
        self
    }

    fn check(&self) -> Result<()> {
        if self.line_sep.is_empty() {
            return Err(Error::InvalidOptions("line separator is empty"));
        }
        if self.sep.as_deref() == Some("") {
            return Err(Error::InvalidOptions("field separator is empty"));
        }
        Ok(())
    }
}

/// Split `text` into rows of fields
pub(crate) fn split_fields<'t>(text: &'t str, options: &TextOptions) -> Result<Vec<Vec<&'t str>>> {
    options.check()?;

    let text = if options.strip_whitespace {
        text.trim()
    } else {
        text
    };

    let rows = text
        .split(options.line_sep.as_str())
        .map(|line| {
            let line = if options.strip_whitespace {
                line.trim()
            } else {
                line
            };
            match options.sep.as_deref() {
                Some(sep) => line.split(sep).collect(),
                None => split_chars(line),
            }
        })
        .collect();

    Ok(rows)
}

fn split_chars(line: &str) -> Vec<&str> {
    line.char_indices()
        .map(|(i, c)| &line[i..i + c.len_utf8()])
        .collect()
}
