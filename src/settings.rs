//! Run time settings shared by the reader and the writer

use crate::prelude::*;

/// Yes, No or Maybe
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Tri {
    /// always do the thing
    Yes,
    /// never do the thing
    No,
    /// do the thing under some circumstances
    Maybe,
}
impl Tri {
    /// new from string
    pub fn new(x: &str) -> Result<Self> {
        if x.eq_ignore_ascii_case("yes")
            || x.eq_ignore_ascii_case("true")
            || x.eq_ignore_ascii_case("1")
            || x.eq_ignore_ascii_case("on")
        {
            Ok(Self::Yes)
        } else if x.eq_ignore_ascii_case("no")
            || x.eq_ignore_ascii_case("false")
            || x.eq_ignore_ascii_case("0")
            || x.eq_ignore_ascii_case("off")
        {
            Ok(Self::No)
        } else if x.eq_ignore_ascii_case("maybe") || x.eq_ignore_ascii_case("sometimes") {
            Ok(Self::Maybe)
        } else {
            err!("Tri value must be yes, no or maybe '{}'", x)
        }
    }
}
impl Default for Tri {
    fn default() -> Self {
        Self::Maybe
    }
}
impl FromStr for Tri {
    type Err = Error;
    fn from_str(spec: &str) -> Result<Self> {
        Self::new(spec)
    }
}

/// How to read and write files
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Settings {
    /// column delimiter, input and output
    pub delim: u8,
    /// does the input have a header line?
    /// Maybe means "if the age column of the first line is not a number"
    pub header: Tri,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delim: b',',
            header: Tri::Maybe,
        }
    }
}

impl Settings {
    /// new with defaults
    pub fn new() -> Self {
        Self::default()
    }
    /// set delimiter from a command line value, e.g. ';' or 'tab'
    pub fn set_delim(&mut self, spec: &str) -> Result<()> {
        self.delim = parse_delim(spec)?;
        Ok(())
    }
    /// set header handling from a command line value
    pub fn set_header(&mut self, spec: &str) -> Result<()> {
        self.header = spec.parse()?;
        Ok(())
    }
}

fn parse_delim(spec: &str) -> Result<u8> {
    if spec == "\\t" || spec.eq_ignore_ascii_case("tab") {
        return Ok(b'\t');
    }
    let b = spec.as_bytes();
    if b.len() != 1 || !b[0].is_ascii() {
        return err!("Delimiter must be a single ASCII character '{}'", spec);
    }
    if b[0] == b'"' || b[0] == b'\n' || b[0] == b'\r' {
        return err!("Delimiter can't be a quote or newline '{}'", spec);
    }
    Ok(b[0])
}
