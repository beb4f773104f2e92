//! Marker-region template engine.
//!
//! Templates are arbitrary text documents with named regions delimited by
//! sentinel comments. The engine never parses the host format; it only finds
//! sentinel tokens and swaps the text between them, so it keeps working on
//! documents that are not valid on their own (unescaped braces, partial
//! scripts, and so on).
//!
//! # Syntax
//!
//! - `<!--{name}-->` ... `<!--{/name}-->` in markup context
//! - `/*{name}*/` ... `/*{/name}*/` in script and style context
//!
//! Both sentinels of one region must use the same syntax. Region names are
//! made of ASCII letters, digits, `_`, `-` and `.`.
//!
//! The interior text between the sentinels is the region's default value.
//! Replacing a region keeps the sentinels, so a document can be substituted
//! repeatedly:
//!
//! ```
//! use df2tables::template::{extract, replace};
//!
//! let doc = "const rows = /*{tab_data}*/[]/*{/tab_data}*/;";
//! let doc = replace(doc, "tab_data", "[[1, 2]]").unwrap();
//! assert_eq!(doc, "const rows = /*{tab_data}*/[[1, 2]]/*{/tab_data}*/;");
//! assert_eq!(extract(&doc, "tab_data").unwrap(), "[[1, 2]]");
//! ```

mod markers;


pub use markers::MarkerSyntax;

use markers::{Region, locate, scan};
use std::collections::BTreeMap;
use std::fmt;

/// Error type for region lookup and substitution failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// No sentinel with this name exists in the document.
    RegionNotFound {
        /// The requested region name.
        name: String,
    },
    /// Sentinels exist but do not form exactly one well-ordered pair.
    MalformedRegion {
        /// The offending region name.
        name: String,
        /// What is wrong with the sentinels.
        reason: String,
    },
}

impl TemplateError {
    /// Name of the region the error refers to.
    pub fn region_name(&self) -> &str {
        match self {
            TemplateError::RegionNotFound { name } => name,
            TemplateError::MalformedRegion { name, .. } => name,
        }
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::RegionNotFound { name } => {
                write!(f, "region '{}' not found in template", name)
            }
            TemplateError::MalformedRegion { name, reason } => {
                write!(f, "malformed region '{}' in template: {}", name, reason)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// A template document.
///
/// Substitutions return a new `Document`; the receiver is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    /// Wrap template text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The current document text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the document and return its text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Return the interior text of region `name`.
    pub fn extract(&self, name: &str) -> Result<&str, TemplateError> {
        let region = locate(&scan(&self.text), name)?;
        Ok(&self.text[region.interior()])
    }

    /// Return a new document with the interior of region `name` replaced.
    pub fn replace(&self, name: &str, new_text: &str) -> Result<Document, TemplateError> {
        let region = locate(&scan(&self.text), name)?;
        Ok(Document::new(splice(&self.text, &[(region, new_text)])))
    }

    /// Replace every region named in `entries`, skipping names the document lacks.
    ///
    /// All regions are located against the receiver before any text changes, so
    /// the result does not depend on iteration order. When one requested region
    /// nests inside another requested region, the outer replacement wins and the
    /// inner entry is dropped.
    pub fn replace_many<I, K, V>(&self, entries: I) -> Result<Document, TemplateError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let entries: BTreeMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
            .collect();

        let markers = scan(&self.text);
        let mut located: Vec<(Region, &str)> = Vec::with_capacity(entries.len());
        for (name, value) in &entries {
            match locate(&markers, name) {
                Ok(region) => located.push((region, value.as_str())),
                Err(TemplateError::RegionNotFound { .. }) => {
                    tracing::trace!(region = %name, "region absent, skipping");
                }
                Err(err) => return Err(err),
            }
        }

        let outermost: Vec<(Region, &str)> = located
            .iter()
            .filter(|(region, _)| {
                !located
                    .iter()
                    .any(|(other, _)| other.name != region.name && other.encloses(region))
            })
            .cloned()
            .collect();

        Ok(Document::new(splice(&self.text, &outermost)))
    }

    /// Names of all regions in document order.
    ///
    /// Fails on the first name whose sentinels are malformed.
    pub fn region_names(&self) -> Result<Vec<String>, TemplateError> {
        let markers = scan(&self.text);
        let mut names: Vec<String> = Vec::new();
        for marker in &markers {
            if !names.iter().any(|n| n == marker.name) {
                locate(&markers, marker.name)?;
                names.push(marker.name.to_string());
            }
        }
        Ok(names)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Document::new(text)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Document::new(text)
    }
}

/// Return the interior text of region `name` in `document`.
pub fn extract(document: &str, name: &str) -> Result<String, TemplateError> {
    let region = locate(&scan(document), name)?;
    Ok(document[region.interior()].to_string())
}

/// Replace the interior of region `name`, keeping its sentinels.
pub fn replace(document: &str, name: &str, new_text: &str) -> Result<String, TemplateError> {
    Ok(Document::new(document).replace(name, new_text)?.into_string())
}

/// Replace every named region present in `document`; absent names are skipped.
pub fn replace_many<I, K, V>(document: &str, entries: I) -> Result<String, TemplateError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    Ok(Document::new(document).replace_many(entries)?.into_string())
}

/// Build the output text from non-overlapping region replacements.
fn splice(text: &str, replacements: &[(Region, &str)]) -> String {
    let mut ordered: Vec<&(Region, &str)> = replacements.iter().collect();
    ordered.sort_by_key(|(region, _)| region.start.start);

    let extra: usize = ordered.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(text.len() + extra);
    let mut cursor = 0;
    for (region, value) in ordered {
        let interior = region.interior();
        out.push_str(&text[cursor..interior.start]);
        out.push_str(value);
        cursor = interior.end;
    }
    out.push_str(&text[cursor..]);
    out
}
