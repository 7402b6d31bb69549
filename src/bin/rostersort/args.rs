use rostersort::prelude::*;
use clap::error::ErrorKind;
use clap::ArgAction;

#[macro_export]
macro_rules! arg {
    ($a:expr,$b:expr,$c:expr,$d:expr) => {
        $crate::args::ArgSpec { name: $a, short: $b, value: $c, help: $d }
    };
}

#[derive(Debug)]
pub struct ProgSpec {
    pub help: &'static str,
    pub usage: &'static str,
    pub version: &'static str,
}

impl ProgSpec {
    pub const fn new(help: &'static str, usage: &'static str) -> Self {
        Self { help, usage, version: env!("CARGO_PKG_VERSION") }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub short: &'static str,
    pub value: &'static str,
    pub help: &'static str,
}

#[derive(Debug)]
pub struct ArgValue {
    pub name: String,
    pub value: String,
    pub index: usize,
}

impl ArgValue {
    pub fn new(name: &str, value: &str, index: usize) -> Self {
        Self { name: name.to_string(), value: value.to_string(), index }
    }
}

pub fn add_arg(a: clap::Command, x: &ArgSpec) -> clap::Command {
    let mut b = clap::Arg::new(x.name);
    if let Some(ch) = x.short.chars().next() {
        b = b.short(ch);
    }
    b = b.long(x.name).help(x.help);
    if x.value.is_empty() {
        b = b.action(ArgAction::Append).num_args(0).default_missing_value("present");
    } else {
        b = b.value_name(x.value).action(ArgAction::Append);
    }
    a.arg(b)
}

pub fn get_arg(m: &clap::ArgMatches, x: &ArgSpec, v: &mut Vec<ArgValue>) {
    if let (Some(vals), Some(ind)) = (m.get_many::<String>(x.name), m.indices_of(x.name)) {
        for (val, i) in vals.zip(ind) {
            let val = if x.value.is_empty() { "" } else { val.as_str() };
            v.push(ArgValue::new(x.name, val, i));
        }
    }
}

pub fn command(prog: &ProgSpec, spec: &[ArgSpec]) -> clap::Command {
    let mut a = clap::Command::new("rostersort")
        .version(prog.version)
        .about(prog.help)
        .override_usage(prog.usage);
    for x in spec {
        a = add_arg(a, x);
    }
    a.arg(clap::Arg::new("input_files").num_args(1..).action(ArgAction::Append))
}

/// Parse the command line into named values, in command line order, and positional file names.
/// None means help or version was requested, and has already been printed.
pub fn parse(
    prog: &ProgSpec,
    spec: &[ArgSpec],
    argv: &[String],
) -> Result<Option<(Vec<ArgValue>, Vec<String>)>> {
    let m = match command(prog, spec).try_get_matches_from(argv) {
        Ok(m) => m,
        Err(e) => {
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.print()?;
                return Ok(None);
            }
            e.print()?;
            println!("USAGE : {}", prog.usage);
            return Err(Error::Silent);
        }
    };
    let mut v: Vec<ArgValue> = Vec::new();
    for x in spec {
        get_arg(&m, x, &mut v);
    }
    let mut files: Vec<String> = Vec::new();
    if let Some(arg) = m.get_many::<String>("input_files") {
        for f in arg {
            files.push(f.to_string());
        }
    }
    v.sort_by(|a, b| a.index.cmp(&b.index));
    Ok(Some((v, files)))
}
