//! One person : name, age and score

use crate::prelude::*;
use std::fmt;

/// One row of the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    age: u32,
    score: i64,
}

impl Record {
    /// new Record
    pub fn new(name: impl Into<String>, age: u32, score: i64) -> Self {
        Self {
            name: name.into(),
            age,
            score,
        }
    }
    /// the name, as it appeared in the file
    pub fn name(&self) -> &str {
        &self.name
    }
    /// the age
    pub const fn age(&self) -> u32 {
        self.age
    }
    /// the score
    pub const fn score(&self) -> i64 {
        self.score
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.name, self.age, self.score)
    }
}

/// parse an age column
pub fn parse_age(text: &str) -> Result<u32> {
    Ok(text.parse::<u32>()?)
}

/// parse a score column
pub fn parse_score(text: &str) -> Result<i64> {
    Ok(text.parse::<i64>()?)
}
