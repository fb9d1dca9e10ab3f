//! Parser for the query file: repeated groups of three non-blank lines
//! (category, clue, expected answer) separated by blank lines. Control
//! characters are stripped from every line before use.

use anyhow::{bail, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::BufRead;

lazy_static! {
    static ref CONTROL: Regex = Regex::new(r"\p{Cc}").expect("valid regex");
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClueQuery {
    pub category: String,
    pub clue: String,
    pub answer: String,
}

pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<ClueQuery>> {
    let mut queries = Vec::new();
    let mut group: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let clean = CONTROL.replace_all(&line, "").into_owned();
        if clean.trim().is_empty() {
            continue;
        }
        group.push(clean);
        if group.len() == 3 {
            let mut it = group.drain(..);
            queries.push(ClueQuery {
                category: it.next().unwrap_or_default(),
                clue: it.next().unwrap_or_default(),
                answer: it.next().unwrap_or_default(),
            });
        }
    }

    if !group.is_empty() {
        bail!("query file truncated: {} trailing line(s)", group.len());
    }
    Ok(queries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_groups_of_three() {
        let input = "NEWSPAPERS\nThis paper is American.\nWashington Post\n\n\
                     CITIES\nCapital of Massachusetts.\nBoston\n\n";
        let queries = parse_reader(Cursor::new(input)).unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].category, "NEWSPAPERS");
        assert_eq!(queries[0].clue, "This paper is American.");
        assert_eq!(queries[1].answer, "Boston");
    }

    #[test]
    fn strips_control_characters() {
        let input = "CAT\u{1}EGORY\nclue\u{7} text\nanswer\n\n";
        let queries = parse_reader(Cursor::new(input)).unwrap();
        assert_eq!(queries[0].category, "CATEGORY");
        assert_eq!(queries[0].clue, "clue text");
    }

    #[test]
    fn missing_trailing_separator_is_fine() {
        let input = "CAT\nclue\nanswer";
        let queries = parse_reader(Cursor::new(input)).unwrap();
        assert_eq!(queries.len(), 1);
    }

    #[test]
    fn truncated_group_is_an_error() {
        let input = "CAT\nclue without answer\n";
        assert!(parse_reader(Cursor::new(input)).is_err());
    }

    #[test]
    fn empty_file_yields_no_queries() {
        let queries = parse_reader(Cursor::new("\n\n")).unwrap();
        assert!(queries.is_empty());
    }
}
