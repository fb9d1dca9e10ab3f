//! Parser for the line-oriented wiki dump format: each file holds many
//! pages, a page starts at a `[[Title]]` line, an optional
//! `CATEGORIES: ...` line names its categories, and everything else is
//! body text. `==Heading==` markers and `[[File:...]]` attachment prefixes
//! are folded into the body as plain text.

use anyhow::Result;
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq)]
pub struct WikiPage {
    pub title: String,
    pub categories: String,
    pub body: String,
}

fn is_attachment(line: &str) -> bool {
    line.starts_with("[[File:")
}

fn is_title(line: &str) -> bool {
    !is_attachment(line) && line.starts_with("[[") && line.ends_with("]]")
}

fn is_subheading(line: &str) -> bool {
    line.starts_with('=') && line.ends_with('=')
}

/// Parse every page in one dump file. Body text appearing before the first
/// title line has no page to belong to and is dropped.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<WikiPage>> {
    let mut pages: Vec<WikiPage> = Vec::new();
    let mut current: Option<WikiPage> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end();
        if line.trim().is_empty() {
            continue;
        }

        if is_title(line) {
            if let Some(page) = current.take() {
                pages.push(page);
            }
            current = Some(WikiPage {
                title: line[2..line.len() - 2].to_string(),
                categories: String::new(),
                body: String::new(),
            });
            continue;
        }

        let Some(page) = current.as_mut() else {
            continue;
        };

        if let Some(rest) = line.strip_prefix("CATEGORIES:") {
            page.categories = rest.trim_start().to_string();
            continue;
        }

        let text = if is_subheading(line) {
            line.replace('=', "")
        } else if let Some(rest) = line.strip_prefix("[[File:") {
            rest.trim_end_matches("]]").to_string()
        } else {
            line.to_string()
        };

        if !page.body.is_empty() {
            page.body.push(' ');
        }
        page.body.push_str(&text);
    }

    if let Some(page) = current.take() {
        pages.push(page);
    }
    Ok(pages)
}
