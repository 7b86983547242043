//! Boundary-aware pattern scanning.
//!
//! The `regex` crate has no lookaround. Patterns that need "not preceded by"
//! or "not followed by" conditions instead consume one boundary character on
//! either side and put the real match in a group named [`BODY`]:
//!
//! ```text
//! (?:^|[^\w/@\-])(?P<body>...)(?:$|[^\w@\-])
//! ```
//!
//! [`BoundedCaptures`] then resumes each search at the last character of the
//! previous body, so a character consumed as a boundary is still available
//! as the leading boundary of the next match, and bodies never overlap. The
//! result is the same set of matches a lookaround engine would report, in
//! linear time.

use regex::{Captures, Regex};

/// Name of the group holding the reported match.
pub const BODY: &str = "body";

/// Iterator over the captures of `re` whose [`BODY`] groups are disjoint.
pub struct BoundedCaptures<'r, 't> {
    re: &'r Regex,
    text: &'t str,
    /// Where the next search starts.
    pos: usize,
    /// Bodies must start at or after this offset.
    floor: usize,
    /// `floor` before the last body was returned.
    prev_floor: usize,
}

pub fn bounded_captures<'r, 't>(re: &'r Regex, text: &'t str) -> BoundedCaptures<'r, 't> {
    BoundedCaptures {
        re,
        text,
        pos: 0,
        floor: 0,
        prev_floor: 0,
    }
}

impl BoundedCaptures<'_, '_> {
    /// Gives back the body just returned and searches again from `from`,
    /// which should lie past that body's start. Its characters become
    /// available to later matches.
    pub fn resume_from(&mut self, mut from: usize) {
        while from < self.text.len() && !self.text.is_char_boundary(from) {
            from += 1;
        }
        self.floor = self.prev_floor;
        self.pos = from;
    }
}

impl<'t> Iterator for BoundedCaptures<'_, 't> {
    type Item = Captures<'t>;

    fn next(&mut self) -> Option<Captures<'t>> {
        while self.pos <= self.text.len() {
            let caps = self.re.captures_at(self.text, self.pos)?;
            let whole = caps.get(0)?;
            let body = caps.name(BODY)?;

            if body.is_empty() || body.start() < self.floor {
                self.pos = next_char_boundary(self.text, whole.start());
                continue;
            }

            self.prev_floor = self.floor;
            self.floor = body.end();
            self.pos = last_char_start(self.text, body.start(), body.end());
            return Some(caps);
        }
        None
    }
}

fn next_char_boundary(text: &str, i: usize) -> usize {
    text.get(i..)
        .and_then(|rest| rest.chars().next())
        .map_or(i + 1, |c| i + c.len_utf8())
}

fn last_char_start(text: &str, start: usize, end: usize) -> usize {
    text.get(start..end)
        .and_then(|body| body.chars().next_back())
        .map_or(end, |c| end - c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bodies<'t>(re: &Regex, text: &'t str) -> Vec<&'t str> {
        bounded_captures(re, text)
            .filter_map(|caps| caps.name(BODY).map(|m| m.as_str()))
            .collect()
    }

    #[test]
    fn trailing_boundary_is_reused_as_leading_boundary() {
        // A word, not touching other word characters on either side
        let re = Regex::new(r"(?:^|\W)(?P<body>\w+)(?:\W|$)").unwrap();
        assert_eq!(bodies(&re, "ab cd,ef"), vec!["ab", "cd", "ef"]);
    }

    #[test]
    fn last_body_char_can_start_next_match() {
        // `*` both ends a body and is a valid leading boundary
        let re = Regex::new(r"(?:^|[^\w])(?P<body>x\*)").unwrap();
        assert_eq!(bodies(&re, "x*x*"), vec!["x*", "x*"]);
    }

    #[test]
    fn overlapping_body_is_skipped() {
        let re = Regex::new(r"(?P<body>aa)").unwrap();
        assert_eq!(bodies(&re, "aaa"), vec!["aa"]);
        assert_eq!(bodies(&re, "aaaa"), vec!["aa", "aa"]);
    }

    #[test]
    fn single_char_body_at_start_terminates() {
        let re = Regex::new(r"(?:^|\s)(?P<body>a)").unwrap();
        assert_eq!(bodies(&re, "a a"), vec!["a", "a"]);
    }

    #[test]
    fn resumed_search_can_reuse_given_back_text() {
        let re = Regex::new(r"(?P<body>a+b)").unwrap();
        let text = "aaab ab";
        let mut it = bounded_captures(&re, text);
        let first = it.next().unwrap();
        assert_eq!(first.name(BODY).unwrap().as_str(), "aaab");
        it.resume_from(2);
        let rest: Vec<_> = it.map(|caps| caps.name(BODY).unwrap().as_str()).collect();
        assert_eq!(rest, vec!["ab", "ab"]);
    }

    #[test]
    fn multibyte_text() {
        let re = Regex::new(r"(?:^|\W)(?P<body>\w+)(?:\W|$)").unwrap();
        assert_eq!(bodies(&re, "héllo wörld"), vec!["héllo", "wörld"]);
    }
}
