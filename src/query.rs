use std::fmt;

use memchr::memmem;

use crate::classify::{floor_char_boundary, is_numeric_pad_byte, leading_run};
use crate::error::QueryError;
use crate::options::Options;
use crate::seeker::{AnyOf, Len, MoveMode, Seeker};

/// One operation of a [`Query`].
///
/// Positioning steps move the working cursor, extraction steps replace it with
/// what they extracted, number steps narrow it to the numeral text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Move just past the first occurrence of a literal.
    Seek(String),
    /// Consume a literal that must be next.
    Expect(String),
    SkipWhitespace,
    Skip(Len),
    Between(String, String),
    Until(String),
    /// Up to the first of a set of terminator characters.
    UntilAnyOf(String),
    Balanced(char, char),
    Fixed(Len),
    JsonProperty(String),
    XmlTag(String),
    XmlBody(String),
    XmlAttr(String),
    Unsigned,
    Signed,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Seek(lit) => write!(f, "seek {lit:?}"),
            Step::Expect(lit) => write!(f, "expect {lit:?}"),
            Step::SkipWhitespace => f.write_str("skip whitespace"),
            Step::Skip(n) => write!(f, "skip {}", n.0),
            Step::Between(from, to) => write!(f, "between {from:?} and {to:?}"),
            Step::Until(to) => write!(f, "until {to:?}"),
            Step::UntilAnyOf(set) => write!(f, "until any of {set:?}"),
            Step::Balanced(open, close) => write!(f, "balanced {open:?}..{close:?}"),
            Step::Fixed(n) => write!(f, "take {}", n.0),
            Step::JsonProperty(name) => write!(f, "json property {name:?}"),
            Step::XmlTag(name) => write!(f, "xml tag {name:?}"),
            Step::XmlBody(name) => write!(f, "xml body {name:?}"),
            Step::XmlAttr(name) => write!(f, "xml attribute {name:?}"),
            Step::Unsigned => f.write_str("unsigned integer"),
            Step::Signed => f.write_str("signed integer"),
        }
    }
}

impl Step {
    /// Steps that only look at the front of the cursor and may match further on.
    fn is_anchored(&self) -> bool {
        matches!(self, Step::Expect(_) | Step::Unsigned | Step::Signed)
    }

    /// For steps that can reject the first occurrence of their leading literal
    /// while a later one still matches: the end of that first occurrence in `view`.
    fn rejected_candidate_end(&self, view: &str) -> Option<usize> {
        match self {
            Step::JsonProperty(name) => {
                let key = format!("\"{name}\"");
                memmem::find(view.as_bytes(), key.as_bytes()).map(|at| at + key.len())
            }
            Step::Balanced(open, _) => view.find(*open).map(|at| at + open.len_utf8()),
            Step::XmlBody(name) => {
                let open = format!("<{name}");
                memmem::find(view.as_bytes(), open.as_bytes()).map(|at| at + open.len())
            }
            _ => None,
        }
    }

    /// Apply to `cur`; false when nothing matched (`cur` is then unspecified).
    fn apply<'a>(&self, cur: &mut Seeker<'a>) -> bool {
        let found = match self {
            Step::Seek(lit) => return cur.seek_to(lit, MoveMode::After),
            Step::Expect(lit) => return cur.expect(lit),
            Step::SkipWhitespace => {
                cur.skip_whitespace();
                return true;
            }
            Step::Skip(n) => {
                cur.skip(*n);
                return true;
            }
            Step::Between(from, to) => cur.extract_between(from, to, MoveMode::Keep),
            Step::Until(to) => cur.extract_until(to, MoveMode::Keep),
            Step::UntilAnyOf(set) => {
                cur.extract_until_any_of(AnyOf(set.as_str()), MoveMode::Keep)
            }
            Step::Balanced(open, close) => cur.extract_balanced(*open, *close, MoveMode::Keep),
            Step::Fixed(n) => Some(cur.extract_fixed(*n, MoveMode::Keep)),
            Step::JsonProperty(name) => cur.json_property(name),
            Step::XmlTag(name) => cur.xml_tag(name, MoveMode::Keep),
            Step::XmlBody(name) => cur.xml_tag_body(name, MoveMode::Keep),
            Step::XmlAttr(name) => cur.xml_attr(name),
            Step::Unsigned => numeral(cur, |c| c.take_unsigned().is_some()),
            Step::Signed => numeral(cur, |c| c.take_signed().is_some()),
        };
        match found {
            Some(derived) => {
                *cur = derived;
                true
            }
            None => false,
        }
    }
}

/// The text of the numeral at the front of `cur`, leading whitespace excluded.
fn numeral<'a>(
    cur: &mut Seeker<'a>,
    take: impl FnOnce(&mut Seeker<'a>) -> bool,
) -> Option<Seeker<'a>> {
    cur.skip(Len(leading_run(cur.as_str(), is_numeric_pad_byte)));
    let mut start = *cur;
    let mut scan = *cur;
    if !take(&mut scan) {
        return None;
    }
    Some(start.extract_fixed(Len(scan.offset() - start.offset()), MoveMode::Keep))
}

/// An ordered list of [`Step`]s run against a fresh cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    steps: Vec<Step>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromIterator<Step> for Query {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

/// A query result, borrowed from the input.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match<'a> {
    pub offset: usize,
    pub length: usize,
    pub text: &'a str,
}

impl<'a> From<Seeker<'a>> for Match<'a> {
    fn from(s: Seeker<'a>) -> Self {
        Self {
            offset: s.offset(),
            length: s.len(),
            text: s.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryLogEntry {
    pub position: usize,
    /// Index of the step in the query.
    pub step: usize,
    pub message: &'static str,
    pub context: String,
}

struct Logger<'a> {
    enable: bool,
    window: usize,
    input: &'a str,
    entries: Vec<QueryLogEntry>,
}

impl<'a> Logger<'a> {
    fn new(input: &'a str, opts: &Options) -> Self {
        Self {
            enable: opts.logging,
            window: opts.log_context_window,
            input,
            entries: Vec::new(),
        }
    }

    #[inline]
    fn log(&mut self, position: usize, step: usize, message: &'static str) {
        if self.enable {
            let context = context_around(self.input, position, self.window);
            self.entries.push(QueryLogEntry {
                position,
                step,
                message,
                context,
            });
        }
    }
}

fn context_around(input: &str, position: usize, window: usize) -> String {
    let lo = floor_char_boundary(input, position.saturating_sub(window));
    let hi = floor_char_boundary(input, position.saturating_add(window));
    input[lo..hi.max(lo)].to_string()
}

/// Failure of step `step` of a query run.
struct Failed {
    step: usize,
    error: QueryError,
}

fn run_once<'a>(
    root: Seeker<'a>,
    query: &Query,
    log: &mut Logger<'a>,
) -> Result<Seeker<'a>, Failed> {
    let mut cur = root;
    for (i, step) in query.steps.iter().enumerate() {
        let at = cur.offset();
        if !step.apply(&mut cur) {
            log.log(at, i, "no match");
            return Err(Failed {
                step: i,
                error: QueryError::not_found(step, at),
            });
        }
        log.log(cur.offset(), i, "matched");
    }
    Ok(cur)
}

fn run<'a>(
    input: &'a str,
    query: &Query,
    opts: &Options,
    log: &mut Logger<'a>,
) -> Result<Vec<Match<'a>>, QueryError> {
    let mut root = Seeker::new(input);
    if !opts.all_matches {
        return run_once(root, query, log)
            .map(|m| vec![Match::from(m)])
            .map_err(|f| f.error);
    }
    let mut out = Vec::new();
    loop {
        let resume = match run_once(root, query, log) {
            Ok(m) => {
                out.push(Match::from(m));
                m.end_offset()
            }
            Err(f) if f.step == 0 && !query.steps[0].is_anchored() => {
                // composite steps may reject their first candidate; plain searches cannot
                match query.steps[0].rejected_candidate_end(root.as_str()) {
                    Some(end) => root.offset() + end,
                    None => break,
                }
            }
            Err(f) => f.error.position,
        };
        let step = match root.as_str().chars().next() {
            Some(c) => c.len_utf8(),
            None => break,
        };
        // always at least one char further than last time
        let resume = resume.max(root.offset() + step);
        root.skip(Len(resume - root.offset()));
    }
    Ok(out)
}

pub fn run_query<'a>(
    input: &'a str,
    query: &Query,
    opts: &Options,
) -> Result<Vec<Match<'a>>, QueryError> {
    let mut log = Logger::new(input, opts);
    run(input, query, opts, &mut log)
}

#[cfg(feature = "logging")]
pub fn run_query_with_log<'a>(
    input: &'a str,
    query: &Query,
    opts: &Options,
) -> Result<(Vec<Match<'a>>, Vec<QueryLogEntry>), QueryError> {
    let mut log = Logger::new(input, opts);
    let matches = run(input, query, opts, &mut log)?;
    Ok((matches, log.entries))
}
