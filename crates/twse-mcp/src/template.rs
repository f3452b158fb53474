//! Field templates for one-line record summaries.
//!
//! A template is literal text with `{field}` placeholders, e.g.
//! `"- {公司名稱} ({公司代號}): {變更日期}"`. A placeholder for a field the
//! record lacks renders as `N/A`.

use twse_core::record::display_value;
use twse_core::Record;

/// Text shown for a field the record does not carry.
pub const MISSING: &str = "N/A";

/// A `{field}` template, checked when its tool registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template(&'static str);

impl Template {
    /// Wraps template text.
    pub const fn new(text: &'static str) -> Self {
        Self(text)
    }

    /// The raw template text.
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Substitutes every placeholder with the record's value.
    pub fn render(&self, record: &Record) -> String {
        self.render_with(record, |_| None)
    }

    /// Like [`render`](Self::render), asking `fallback` for missing fields first.
    pub fn render_with<'a, F>(&self, record: &Record, fallback: F) -> String
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let mut out = String::with_capacity(self.0.len() + 16);
        let mut rest = self.0;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                out.push_str(&rest[open..]);
                return out;
            };
            let field = &after[..close];
            match record.get(field) {
                Some(value) => out.push_str(&display_value(value)),
                None => out.push_str(fallback(field).unwrap_or(MISSING)),
            }
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        out
    }

    /// Field names referenced by the template, in order.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        let mut rest = self.0;
        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else { break };
            fields.push(&after[..close]);
            rest = &after[close + 1..];
        }
        fields
    }

    /// Rejects unbalanced braces and empty placeholders.
    pub fn validate(&self) -> Result<(), String> {
        let mut depth = 0usize;
        let mut current = 0usize;
        for c in self.0.chars() {
            match c {
                '{' if depth == 0 => {
                    depth = 1;
                    current = 0;
                }
                '{' => return Err(format!("nested '{{' in template {:?}", self.0)),
                '}' if depth == 1 => {
                    if current == 0 {
                        return Err(format!("empty placeholder in template {:?}", self.0));
                    }
                    depth = 0;
                }
                '}' => return Err(format!("unmatched '}}' in template {:?}", self.0)),
                _ if depth == 1 => current += 1,
                _ => {}
            }
        }
        if depth != 0 {
            return Err(format!("unclosed '{{' in template {:?}", self.0));
        }
        Ok(())
    }
}
