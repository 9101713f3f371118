#[macro_use]
extern crate clap;

use clap::Arg;
use mathmap::{BAD, MathMap};
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Debug)]
enum IOErrorContext {
    ReadInput,
}

#[derive(Debug)]
enum Error {
    MathMap(mathmap::Error),
    Io(std::io::Error, IOErrorContext, PathBuf),
    BadPoint(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err, context, path) => writeln!(
                f,
                "{} file \"{}\" failed: {}",
                match context {
                    IOErrorContext::ReadInput => "Reading input",
                },
                path.display(),
                err
            ),
            Error::MathMap(err) => {
                writeln!(f, "Compiling input failed:")?;
                write!(f, "{}", err)
            }
            Error::BadPoint(raw) => write!(f, "Expected a comma-separated list of numbers, got \"{}\"", raw),
        }
    }
}

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the records file to use (F<k>=, I<k>=, SimpFI=, SimpIF= lines)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("nin")
                .long("nin")
                .takes_value(true)
                .value_name("N")
                .required(true)
                .help("Number of input (inverse-side) coordinates"),
        )
        .arg(
            Arg::with_name("nout")
                .long("nout")
                .takes_value(true)
                .value_name("N")
                .required(true)
                .help("Number of output (forward-side) coordinates"),
        )
        .arg(
            Arg::with_name("invert")
                .long("invert")
                .help("Sets the map's intrinsic invert flag"),
        )
        .arg(
            Arg::with_name("simpfi")
                .long("simpfi")
                .takes_value(true)
                .value_name("0|1")
                .help("Overrides the SimpFI hint"),
        )
        .arg(
            Arg::with_name("simpif")
                .long("simpif")
                .takes_value(true)
                .value_name("0|1")
                .help("Overrides the SimpIF hint"),
        )
        .arg(
            Arg::with_name("point")
                .short("p")
                .long("point")
                .takes_value(true)
                .value_name("V1,V2,..."),
        )
        .arg(
            Arg::with_name("inverse")
                .short("i")
                .long("inverse")
                .help("Evaluates the inverse direction instead of the forward one"),
        )
        .get_matches();

    let input = matches.value_of("INPUT").unwrap();
    let nin: usize = value_t!(matches, "nin", usize).unwrap_or_else(|e| e.exit());
    let nout: usize = value_t!(matches, "nout", usize).unwrap_or_else(|e| e.exit());
    let invert = matches.is_present("invert");
    let forward_flag = !matches.is_present("inverse");
    let point = matches.value_of("point");
    let mut options: Vec<String> = Vec::new();
    if let Some(value) = matches.value_of("simpfi") {
        options.push(format!("simpfi={}", value));
    }
    if let Some(value) = matches.value_of("simpif") {
        options.push(format!("simpif={}", value));
    }

    if let Err(err) = run(input, nin, nout, invert, &options, forward_flag, point) {
        eprintln!("{}", err);
    }
}

fn run(
    input: &str,
    nin: usize,
    nout: usize,
    invert: bool,
    options: &[String],
    forward_flag: bool,
    point: Option<&str>,
) -> Result<(), Error> {
    let input_path = Path::new(input);
    let input_file = File::open(input_path)
        .map_err(|err| Error::Io(err, IOErrorContext::ReadInput, input_path.to_owned()))?;
    let mut buf_reader = BufReader::new(input_file);
    let mut text = String::new();
    buf_reader
        .read_to_string(&mut text)
        .map_err(|err| Error::Io(err, IOErrorContext::ReadInput, input_path.to_owned()))?;

    let records: Vec<&str> = text.lines().collect();
    let mut map =
        MathMap::from_records(&records, nin, nout, invert).map_err(Error::MathMap)?;

    let option_refs: Vec<&str> = options.iter().map(String::as_str).collect();
    apply_options(&mut map, &option_refs);

    println!(
        "nin={} nout={} forward_defined={} inverse_defined={} simp_fi={:?} simp_if={:?}",
        map.nin(),
        map.nout(),
        map.forward_defined(),
        map.inverse_defined(),
        map.simp_fi(),
        map.simp_if()
    );

    if let Some(raw) = point {
        let values = parse_point(raw)?;
        let ncoord_in = if forward_flag { nin } else { nout };
        let ncoord_out = if forward_flag { nout } else { nin };
        if values.len() != ncoord_in {
            return Err(Error::BadPoint(raw.to_string()));
        }
        let input_refs: Vec<&[f64]> = values.iter().map(|v| std::slice::from_ref(v)).collect();
        let mut outputs: Vec<Vec<f64>> = (0..ncoord_out).map(|_| vec![0.0]).collect();
        {
            let mut output_refs: Vec<&mut [f64]> = outputs.iter_mut().map(Vec::as_mut_slice).collect();
            map.transform(&input_refs, 1, forward_flag, &mut output_refs)
                .map_err(Error::MathMap)?;
        }
        let rendered: Vec<String> = outputs
            .iter()
            .map(|v| if v[0] == BAD { "BAD".to_string() } else { v[0].to_string() })
            .collect();
        println!("{}", rendered.join(","));
    }

    Ok(())
}

fn apply_options(map: &mut MathMap, options: &[&str]) {
    for option in options {
        if let Some(value) = option.strip_prefix("simpfi=") {
            map.set_simp_fi(parse_hint(value));
        } else if let Some(value) = option.strip_prefix("simpif=") {
            map.set_simp_if(parse_hint(value));
        }
    }
}

fn parse_hint(value: &str) -> mathmap::SimplificationHint {
    match value {
        "1" => mathmap::SimplificationHint::True,
        "0" => mathmap::SimplificationHint::False,
        _ => mathmap::SimplificationHint::Unset,
    }
}

fn parse_point(raw: &str) -> Result<Vec<f64>, Error> {
    raw.split(',')
        .map(|s| s.trim().parse::<f64>().map_err(|_| Error::BadPoint(raw.to_string())))
        .collect()
}
