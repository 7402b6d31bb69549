use env_logger::Env;
use rostersort::pipeline;
use rostersort::prelude::*;
use std::env;

#[macro_use]
pub mod args;
use crate::args::ArgSpec;

const USAGE: &str = "rostersort [options] <source-file.csv> <destination-file.csv>";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
    match inner_main(env::args().collect()) {
        Err(e) => {
            if e.suppress() {
                std::process::exit(0);
            }
            if e.silent() {
                std::process::exit(1);
            }
            eprintln!("Error\t{}", e);
            eprint!("Command\t");
            for x in env::args() {
                eprint!("{} ", x);
            }
            eprintln!();
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}

pub fn inner_main(argv: Vec<String>) -> Result<()> {
    let prog = args::ProgSpec::new(
        "Sort a name,age,score file by name, then by age, writing the destination after each sort.",
        USAGE,
    );
    const A: [ArgSpec; 2] = [
        arg! {"delim", "d", "Char", "Column delimiter, for input and output. Default ','"},
        arg! {"header", "", "yes|no|maybe", "Does the input start with a header line? 'maybe' guesses from the age column"},
    ];
    let (args, files) = match args::parse(&prog, &A, &argv)? {
        Some(x) => x,
        None => return Ok(()),
    };
    if files.len() != 2 {
        println!("USAGE : {}", USAGE);
        return Err(Error::Silent);
    }

    let mut settings = Settings::new();
    for x in args {
        if x.name == "delim" {
            settings.set_delim(&x.value)?;
        } else if x.name == "header" {
            settings.set_header(&x.value)?;
        } else {
            unreachable!();
        }
    }
    pipeline::run(&files[0], &files[1], &settings)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fs_err as fs;

    fn argv(s: &[&str]) -> Vec<String> {
        s.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn usage() {
        assert!(inner_main(argv(&["rostersort"])).unwrap_err().silent());
        assert!(inner_main(argv(&["rostersort", "a.csv"])).unwrap_err().silent());
        assert!(inner_main(argv(&["rostersort", "a", "b", "c"])).unwrap_err().silent());
    }

    #[test]
    fn help() {
        assert!(inner_main(argv(&["rostersort", "--help"])).is_ok());
        assert!(inner_main(argv(&["rostersort", "--version"])).is_ok());
    }

    #[test]
    fn run() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("in.csv");
        let dst = dir.path().join("out.csv");
        fs::write(&src, "Nome;Idade;Pontuação\nCarol;40;95\nBob;25;85\n").unwrap();
        inner_main(argv(&[
            "rostersort",
            "-d",
            ";",
            src.to_str().unwrap(),
            dst.to_str().unwrap(),
        ]))
        .unwrap();
        assert_eq!(
            fs::read_to_string(&dst).unwrap(),
            "Nome;Idade;Pontuação\nBob;25;85\nCarol;40;95\n"
        );
    }

    #[test]
    fn header_option() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("in.csv");
        let dst = dir.path().join("out.csv");
        fs::write(&src, "Zed,99,1\nAmy,3,2\n").unwrap();
        let (s, d) = (src.to_str().unwrap(), dst.to_str().unwrap());
        inner_main(argv(&["rostersort", "--header", "yes", s, d])).unwrap();
        assert_eq!(fs::read_to_string(&dst).unwrap(), "Nome,Idade,Pontuação\nAmy,3,2\n");
        assert!(inner_main(argv(&["rostersort", "--header", "perhaps", s, d])).is_err());
    }

    #[test]
    fn missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("missing.csv");
        let dst = dir.path().join("out.csv");
        let e = inner_main(argv(&["rostersort", src.to_str().unwrap(), dst.to_str().unwrap()]))
            .unwrap_err();
        assert!(!e.silent());
        assert!(!dst.exists());
    }
}
