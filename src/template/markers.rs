//! Sentinel scanning and region pairing.
//!
//! A single linear pass collects every marker token in the document; pairing
//! then happens per name. Nothing else about the host document is parsed.

use super::TemplateError;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Matches `<!--{name}-->`, `<!--{/name}-->`, `/*{name}*/` and `/*{/name}*/`.
static MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--\{(/?)([A-Za-z0-9_.\-]+)\}-->|/\*\{(/?)([A-Za-z0-9_.\-]+)\}\*/")
        .expect("Invalid marker regex")
});

/// Comment syntax a marker is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSyntax {
    /// `<!--{name}-->` for markup context.
    Html,
    /// `/*{name}*/` for script and style context.
    Block,
}

impl MarkerSyntax {
    /// Render the start sentinel for `name`.
    pub fn start_token(self, name: &str) -> String {
        match self {
            MarkerSyntax::Html => format!("<!--{{{}}}-->", name),
            MarkerSyntax::Block => format!("/*{{{}}}*/", name),
        }
    }

    /// Render the end sentinel for `name`.
    pub fn end_token(self, name: &str) -> String {
        match self {
            MarkerSyntax::Html => format!("<!--{{/{}}}-->", name),
            MarkerSyntax::Block => format!("/*{{/{}}}*/", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MarkerKind {
    Start,
    End,
}

/// One sentinel occurrence in the document.
#[derive(Debug, Clone)]
pub(crate) struct Marker<'a> {
    pub name: &'a str,
    pub kind: MarkerKind,
    pub syntax: MarkerSyntax,
    pub span: Range<usize>,
}

/// A located region: sentinel spans plus the interior between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Region {
    pub name: String,
    pub syntax: MarkerSyntax,
    pub start: Range<usize>,
    pub end: Range<usize>,
}

impl Region {
    /// Byte range strictly between the two sentinels.
    pub fn interior(&self) -> Range<usize> {
        self.start.end..self.end.start
    }

    /// True when `other` lies entirely inside this region's interior.
    pub fn encloses(&self, other: &Region) -> bool {
        let interior = self.interior();
        other.start.start >= interior.start && other.end.end <= interior.end
    }
}

/// Collect every marker in document order.
pub(crate) fn scan(document: &str) -> Vec<Marker<'_>> {
    MARKER_REGEX
        .captures_iter(document)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let (slash, name, syntax) = match (caps.get(2), caps.get(4)) {
                (Some(name), _) => (caps.get(1), name, MarkerSyntax::Html),
                (None, Some(name)) => (caps.get(3), name, MarkerSyntax::Block),
                (None, None) => return None,
            };
            let kind = if slash.is_some_and(|m| !m.as_str().is_empty()) {
                MarkerKind::End
            } else {
                MarkerKind::Start
            };
            Some(Marker {
                name: name.as_str(),
                kind,
                syntax,
                span: whole.range(),
            })
        })
        .collect()
}

/// Locate the region called `name` among already scanned markers.
pub(crate) fn locate(markers: &[Marker<'_>], name: &str) -> Result<Region, TemplateError> {
    let own: Vec<&Marker<'_>> = markers.iter().filter(|m| m.name == name).collect();
    if own.is_empty() {
        return Err(TemplateError::RegionNotFound {
            name: name.to_string(),
        });
    }

    let malformed = |reason: &str| TemplateError::MalformedRegion {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let starts: Vec<&&Marker<'_>> = own.iter().filter(|m| m.kind == MarkerKind::Start).collect();
    let ends: Vec<&&Marker<'_>> = own.iter().filter(|m| m.kind == MarkerKind::End).collect();

    match (starts.len(), ends.len()) {
        (1, 1) => {}
        (0, _) => return Err(malformed("end marker without a start marker")),
        (_, 0) => return Err(malformed("start marker without an end marker")),
        (s, _) if s > 1 => return Err(malformed("duplicate start marker")),
        _ => return Err(malformed("duplicate end marker")),
    }

    let (start, end) = (starts[0], ends[0]);
    if end.span.start < start.span.end {
        return Err(malformed("end marker precedes start marker"));
    }
    if start.syntax != end.syntax {
        return Err(malformed("start and end markers use different comment syntax"));
    }

    let region = Region {
        name: name.to_string(),
        syntax: start.syntax,
        start: start.span.clone(),
        end: end.span.clone(),
    };

    // Another region may nest inside this one, but must not straddle either sentinel.
    let interior = region.interior();
    let inside = |m: &Marker<'_>| m.span.start >= interior.start && m.span.end <= interior.end;
    for marker in markers.iter().filter(|m| m.name != name && inside(m)) {
        let escapes = markers
            .iter()
            .any(|other| other.name == marker.name && !inside(other));
        if escapes {
            return Err(TemplateError::MalformedRegion {
                name: name.to_string(),
                reason: format!("region '{}' crosses its boundary", marker.name),
            });
        }
    }

    Ok(region)
}
