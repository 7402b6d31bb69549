//! Write records as delimited text, with a header

use crate::prelude::*;
use crate::util::get_writer;

/// column names written at the top of every output file
pub const HEADER: [&str; 3] = ["Nome", "Idade", "Pontuação"];

/// Create (or truncate) the named file and write the records into it.
/// `label` describes the records, e.g. "Ordered by name", and is only used for messages.
pub fn write_records(people: &[Record], label: &str, name: &str, settings: &Settings) -> Result<()> {
    let w = match get_writer(name) {
        Ok(w) => w,
        Err(e) => return err!("Error while creating file {}: {}", label, e),
    };
    write_to(people, w, settings)?;
    println!("Data {} was saved at {} with success!", label, name);
    Ok(())
}

/// write the header and records, then flush
pub fn write_to(people: &[Record], w: impl Write, settings: &Settings) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(settings.delim).from_writer(w);
    writer.write_record(HEADER)?;
    for p in people {
        let age = p.age().to_string();
        let score = p.score().to_string();
        writer.write_record([p.name(), age.as_str(), score.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
