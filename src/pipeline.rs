//! The whole job : read, then sort and write once per pass

use crate::prelude::*;
use crate::reader::read_records;
use crate::sort::{by_age, by_name, sort_records, Comparator};
use crate::writer::write_records;
use log::debug;
use std::fmt;

/// One sort-then-write step
#[derive(Copy, Clone)]
pub struct Pass {
    /// description of the ordering, used in messages
    pub label: &'static str,
    /// how to order the records
    pub cmp: Comparator,
}

impl fmt::Debug for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pass {}", self.label)
    }
}

/// The passes, in order. Each one writes the same destination,
/// so the file ends up holding the output of the last pass.
pub const PASSES: [Pass; 2] = [
    Pass {
        label: "Ordered by name",
        cmp: by_name,
    },
    Pass {
        label: "Ordered by age",
        cmp: by_age,
    },
];

/// Read `source`, then run every pass against `dest`.
/// Returns the records as ordered by the last pass.
pub fn run(source: &str, dest: &str, settings: &Settings) -> Result<Vec<Record>> {
    let mut people = read_records(source, settings)?;
    for pass in &PASSES {
        debug!("{} : {} records", pass.label, people.len());
        sort_records(&mut people, pass.cmp);
        write_records(&people, pass.label, dest, settings)?;
    }
    Ok(people)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::is_sorted;
    use fs_err as fs;

    struct Fixture {
        _dir: tempfile::TempDir,
        source: String,
        dest: String,
    }

    fn fixture(input: &str) -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.csv");
        fs::write(&source, input).unwrap();
        let dest = dir.path().join("out.csv");
        Fixture {
            source: source.to_str().unwrap().to_string(),
            dest: dest.to_str().unwrap().to_string(),
            _dir: dir,
        }
    }

    #[test]
    fn three_people() {
        let f = fixture("Alice,30,90\nBob,25,85\nCarol,40,95");
        let v = run(&f.source, &f.dest, &Settings::new()).unwrap();
        assert_eq!(
            v,
            vec![
                Record::new("Bob", 25, 85),
                Record::new("Alice", 30, 90),
                Record::new("Carol", 40, 95)
            ]
        );
        assert_eq!(
            fs::read_to_string(&f.dest).unwrap(),
            "Nome,Idade,Pontuação\nBob,25,85\nAlice,30,90\nCarol,40,95\n"
        );
    }

    #[test]
    fn header_skipped() {
        let f = fixture("Nome,Idade,Pontuação\nAlice,30,90\n");
        run(&f.source, &f.dest, &Settings::new()).unwrap();
        assert_eq!(
            fs::read_to_string(&f.dest).unwrap(),
            "Nome,Idade,Pontuação\nAlice,30,90\n"
        );
    }

    #[test]
    fn bad_row_only() {
        let f = fixture("Dan,abc,70\n");
        let v = run(&f.source, &f.dest, &Settings::new()).unwrap();
        assert!(v.is_empty());
        assert_eq!(fs::read_to_string(&f.dest).unwrap(), "Nome,Idade,Pontuação\n");
    }

    #[test]
    fn row_count() {
        let f = fixture("Name,Age,Score\nA,5,1\nB,x,2\nC,3,y\nD,4,4\nE,1,0\nE,1,0\n");
        let v = run(&f.source, &f.dest, &Settings::new()).unwrap();
        // 7 rows, minus header, minus two bad rows
        assert_eq!(v.len(), 4);
        let back = read_records(&f.dest, &Settings::new()).unwrap();
        assert_eq!(back, v);
        assert!(is_sorted(&back, by_age));
    }

    #[test]
    fn malformed_is_fatal() {
        let f = fixture("Alice,30,90\nBob,25\n");
        assert!(run(&f.source, &f.dest, &Settings::new()).is_err());
        assert!(!std::path::Path::new(&f.dest).exists());
    }

    #[test]
    fn missing_source() {
        let f = fixture("");
        let missing = format!("{}.missing", f.source);
        let e = run(&missing, &f.dest, &Settings::new()).unwrap_err();
        assert!(e.to_string().starts_with("Error while reading file"));
    }

    #[test]
    fn passes() {
        assert_eq!(PASSES.len(), 2);
        assert_eq!(PASSES[0].label, "Ordered by name");
        assert_eq!(PASSES[1].label, "Ordered by age");
        let a = Record::new("Zed", 1, 0);
        let b = Record::new("Amy", 2, 0);
        assert_eq!((PASSES[0].cmp)(&a, &b), Ordering::Greater);
        assert_eq!((PASSES[1].cmp)(&a, &b), Ordering::Less);
    }
}
