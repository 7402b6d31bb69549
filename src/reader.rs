//! Read a roster file into memory
//!
//! Every row must have exactly three columns : name, age and score.
//! A row with the wrong number of columns fails the whole read.
//! A row whose age or score is not a number is reported and dropped.
//!
//! With the default [`Tri::Maybe`] header setting, the first row is taken to be
//! a header if its age column is not a number. This is a guess, and a real data
//! row with a junk age in first position will be silently discarded as a header.
//!
//! ```
//! use rostersort::prelude::*;
//! let v = rostersort::reader::read_records("<<Name,Age,Score\\nBob,25,85\\n", &Settings::new())?;
//! assert_eq!(v, vec![Record::new("Bob", 25, 85)]);
//! # Ok::<(), rostersort::util::Error>(())
//! ```

use crate::prelude::*;
use crate::record::{parse_age, parse_score};
use crate::util::get_reader;
use csv::StringRecord;
use log::{debug, warn};

/// number of columns in every row
pub const NUM_COLS: usize = 3;

/// Read all records from the named file.
/// "-" is standard input, "<<text" is the text itself.
pub fn read_records(name: &str, settings: &Settings) -> Result<Vec<Record>> {
    let res = get_reader(name).and_then(|f| read_from(f, settings));
    res.or_else(|e| err!("Error while reading file {}: {}", name, e))
}

/// Read all records from an open file
pub fn read_from(f: impl Read, settings: &Settings) -> Result<Vec<Record>> {
    let rows = read_rows(f, settings.delim)?;
    let begin = usize::from(has_header(&rows, settings.header));
    let mut people = Vec::with_capacity(rows.len() - begin);
    for row in &rows[begin..] {
        if let Some(r) = to_record(row) {
            people.push(r);
        }
    }
    debug!("Read {} records from {} rows", people.len(), rows.len());
    Ok(people)
}

/// all the rows of the file, each with exactly NUM_COLS columns
fn read_rows(f: impl Read, delim: u8) -> Result<Vec<StringRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delim)
        .from_reader(f);
    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row?;
        if row.len() != NUM_COLS {
            return err!(
                "line {}: wrong number of fields, expected {} found {}",
                line_num(&row),
                NUM_COLS,
                row.len()
            );
        }
        rows.push(row);
    }
    Ok(rows)
}

/// should the first row be skipped?
/// Maybe looks for any integer in the age column, so a bad age like -5 is data, and gets reported.
fn has_header(rows: &[StringRecord], mode: Tri) -> bool {
    let first = match rows.first() {
        Some(x) => x,
        None => return false,
    };
    match mode {
        Tri::Yes => true,
        Tri::No => false,
        Tri::Maybe => {
            let skip = first[1].parse::<i64>().is_err();
            if skip {
                debug!("Treating first line as a header : {:?}", first);
            }
            skip
        }
    }
}

/// convert row to Record, or complain and return None
fn to_record(row: &StringRecord) -> Option<Record> {
    let age = parse_age(&row[1]);
    if let Err(e) = &age {
        warn!("Age not found on line {}: {}", line_num(row), e);
    }
    let score = parse_score(&row[2]);
    if let Err(e) = &score {
        warn!("Score not found on line {}: {}", line_num(row), e);
    }
    match (age, score) {
        (Ok(age), Ok(score)) => Some(Record::new(&row[0], age, score)),
        _ => None,
    }
}

fn line_num(row: &StringRecord) -> u64 {
    row.position().map_or(0, |p| p.line())
}
