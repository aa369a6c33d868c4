//! Inline Style
//!
//! `element.style` view over the `style` attribute.
//!
//! The attribute text is tokenized with `cssparser` and edited in place:
//! setting or removing one property rewrites only that declaration, so the
//! author's other declarations survive byte for byte.

use std::ops::Range;

use cssparser::{Delimiter, ParseError, Parser, ParserInput};

/// One `name: value` declaration located in the attribute text
#[derive(Debug, Clone, PartialEq, Eq)]
struct Declaration {
    name: String,
    /// Value text, trimmed
    value: Range<usize>,
    /// Whole declaration including its `;`
    span: Range<usize>,
}

/// Inline declarations over the original attribute text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    text: String,
    declarations: Vec<Declaration>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `prop: value; prop: value` text. Malformed declarations are
    /// skipped but kept in the text.
    pub fn parse(css_text: &str) -> Self {
        Self {
            text: css_text.to_string(),
            declarations: scan(css_text),
        }
    }

    /// Property value; the last declaration wins
    pub fn get(&self, property: &str) -> Option<&str> {
        self.find(property).map(|decl| &self.text[decl.value.clone()])
    }

    /// Set a property; an existing declaration keeps its position
    pub fn set(&mut self, property: &str, value: &str) {
        match self.find(property) {
            Some(decl) => {
                let range = decl.value.clone();
                self.text.replace_range(range, value);
            }
            None if self.text.trim().is_empty() => {
                self.text = format!("{property}: {value};");
            }
            None => {
                let kept = self.text.trim_end().len();
                self.text.truncate(kept);
                if self.text.ends_with(';') {
                    self.text.push_str(&format!(" {property}: {value};"));
                } else {
                    self.text.push_str(&format!("; {property}: {value}"));
                }
            }
        }
        self.declarations = scan(&self.text);
    }

    /// Remove every declaration of a property, returning the winning value.
    ///
    /// Removing what `set` appended restores the previous text exactly.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        let old = self.get(property)?.to_string();

        while let Some(index) = self
            .declarations
            .iter()
            .rposition(|decl| same_property(&decl.name, property))
        {
            let span = self.declarations[index].span.clone();
            let after = &self.text[span.end..];
            let cut = if !after.trim().is_empty() {
                // Followed by more declarations: take trailing whitespace along
                span.start..span.end + (after.len() - after.trim_start().len())
            } else if self.text[..span.end].ends_with(';') {
                let before = &self.text[..span.start];
                before.trim_end().len()..span.end
            } else {
                // Unterminated last declaration: take the separator before it
                let start = match index.checked_sub(1) {
                    Some(prev) => self.declarations[prev].value.end,
                    None => 0,
                };
                start..span.end
            };
            self.text.replace_range(cut, "");
            self.declarations = scan(&self.text);
        }

        if self.text.trim().is_empty() {
            self.text.clear();
        }
        Some(old)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Declared property names in source order
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(|decl| decl.name.as_str())
    }

    /// Attribute text
    pub fn css_text(&self) -> &str {
        &self.text
    }

    fn find(&self, property: &str) -> Option<&Declaration> {
        self.declarations
            .iter()
            .rev()
            .find(|decl| same_property(&decl.name, property))
    }
}

/// Custom properties (`--name`) are case-sensitive, everything else is not
fn same_property(a: &str, b: &str) -> bool {
    if a.starts_with("--") || b.starts_with("--") {
        a == b
    } else {
        a.eq_ignore_ascii_case(b)
    }
}

fn scan(css_text: &str) -> Vec<Declaration> {
    let mut input = ParserInput::new(css_text);
    let mut parser = Parser::new(&mut input);
    let mut declarations = Vec::new();

    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }
        let start = parser.position().byte_index();

        let name = match parser.try_parse(|p| p.expect_ident().map(|name| name.to_string())) {
            Ok(name) => name,
            Err(_) => {
                skip_declaration(&mut parser);
                continue;
            }
        };
        if parser.try_parse(|p| p.expect_colon()).is_err() {
            skip_declaration(&mut parser);
            continue;
        }

        parser.skip_whitespace();
        let value_start = parser.position();
        let _ = parser.parse_until_before(Delimiter::Semicolon, |p| consume_all(p));
        let value_text = parser.slice_from(value_start);
        let value_start = value_start.byte_index();
        let value = value_start..value_start + value_text.trim_end().len();
        let _ = parser.try_parse(|p| p.expect_semicolon());

        if value.is_empty() {
            tracing::trace!("Skipping empty inline declaration {:?}", name);
            continue;
        }
        declarations.push(Declaration {
            name,
            value,
            span: start..parser.position().byte_index(),
        });
    }

    declarations
}

fn skip_declaration(parser: &mut Parser<'_, '_>) {
    let _ = parser.parse_until_after(Delimiter::Semicolon, |p| consume_all(p));
}

fn consume_all<'i>(parser: &mut Parser<'i, '_>) -> Result<(), ParseError<'i, ()>> {
    while parser.next().is_ok() {}
    Ok(())
}
