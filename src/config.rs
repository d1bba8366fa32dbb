use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use std::ffi::OsString;

use clap::{self, App, Arg, ArgMatches, ErrorKind};

use common::Bounds;

#[derive(Debug)]
pub enum ConfigError {
    Cli(clap::Error),
    MissingBound { given: &'static str, missing: &'static str, },
    InvalidNumber { param: &'static str, value: String, },
    NotFinite { param: &'static str, },
    EmptyRange { axis: &'static str, min: f64, max: f64, },
    Prompt(io::Error),
    UnexpectedEof { axis: &'static str, },
}

#[derive(Debug)]
pub struct Config {
    pub bounds: Bounds,
    pub assets_dir: PathBuf,
}

fn bound<'a>(name: &'a str, help: &'a str) -> Arg<'a, 'a> {
    Arg::with_name(name)
        .long(name)
        .value_name("NUM")
        .help(help)
        .takes_value(true)
        .allow_hyphen_values(true)
}

pub fn app() -> App<'static, 'static> {
    app_from_crate!()
        .arg(bound("x-min", "Left world bound (prompted on stdin when absent)"))
        .arg(bound("x-max", "Right world bound (prompted on stdin when absent)"))
        .arg(bound("y-min", "Bottom world bound (prompted on stdin when absent)"))
        .arg(bound("y-max", "Top world bound (prompted on stdin when absent)"))
        .arg(Arg::with_name("assets-dir")
             .short("a")
             .long("assets-dir")
             .value_name("DIR")
             .help("Graphics resources directory")
             .default_value("./assets")
             .takes_value(true))
}

/// Parses command line arguments. Help and version requests print and exit
/// right here, any other clap failure is returned.
pub fn matches_from<I, T>(args: I) -> Result<ArgMatches<'static>, ConfigError>
    where I: IntoIterator<Item = T>, T: Into<OsString> + Clone
{
    app().get_matches_from_safe(args)
        .map_err(|e| match e.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed =>
                e.exit(),
            _ =>
                ConfigError::Cli(e),
        })
}

/// Builds config from the command line, asking for any axis which bounds were
/// not fully given there.
pub fn from_matches<R, W>(matches: &ArgMatches, input: R, output: W) -> Result<Config, ConfigError>
    where R: BufRead, W: Write
{
    let mut prompt = Prompt { input, output, pending: Vec::new(), };

    let (x_min, x_max) = match axis_args(matches, "x-min", "x-max")? {
        Some(pair) => pair,
        None => prompt.pair("x", "Enter the x bounds (xMin xMax): ")?,
    };
    let (y_min, y_max) = match axis_args(matches, "y-min", "y-max")? {
        Some(pair) => pair,
        None => prompt.pair("y", "Enter the y bounds (yMin yMax): ")?,
    };

    let bounds = Bounds { x_min, x_max, y_min, y_max, };
    validate(&bounds)?;

    let assets_dir = PathBuf::from(matches.value_of("assets-dir").unwrap_or("./assets"));
    Ok(Config { bounds, assets_dir, })
}

pub fn validate(bounds: &Bounds) -> Result<(), ConfigError> {
    let params = [
        ("x-min", bounds.x_min),
        ("x-max", bounds.x_max),
        ("y-min", bounds.y_min),
        ("y-max", bounds.y_max),
    ];
    for &(param, value) in params.iter() {
        if !value.is_finite() {
            return Err(ConfigError::NotFinite { param, });
        }
    }
    if bounds.x_min >= bounds.x_max {
        return Err(ConfigError::EmptyRange { axis: "x", min: bounds.x_min, max: bounds.x_max, });
    }
    if bounds.y_min >= bounds.y_max {
        return Err(ConfigError::EmptyRange { axis: "y", min: bounds.y_min, max: bounds.y_max, });
    }
    Ok(())
}

// both bounds of an axis or none of them
fn axis_args(matches: &ArgMatches, min: &'static str, max: &'static str) -> Result<Option<(f64, f64)>, ConfigError> {
    match (arg_value(matches, min)?, arg_value(matches, max)?) {
        (Some(min), Some(max)) =>
            Ok(Some((min, max))),
        (None, None) =>
            Ok(None),
        (Some(_), None) =>
            Err(ConfigError::MissingBound { given: min, missing: max, }),
        (None, Some(_)) =>
            Err(ConfigError::MissingBound { given: max, missing: min, }),
    }
}

fn arg_value(matches: &ArgMatches, param: &'static str) -> Result<Option<f64>, ConfigError> {
    match matches.value_of(param) {
        None =>
            Ok(None),
        Some(value) =>
            parse_number(param, value).map(Some),
    }
}

fn parse_number(param: &'static str, value: &str) -> Result<f64, ConfigError> {
    value.trim().parse()
        .map_err(|_| ConfigError::InvalidNumber { param, value: value.to_string(), })
}

struct Prompt<R, W> {
    input: R,
    output: W,
    pending: Vec<String>,
}

impl<R, W> Prompt<R, W> where R: BufRead, W: Write {
    fn pair(&mut self, axis: &'static str, message: &str) -> Result<(f64, f64), ConfigError> {
        self.output.write_all(message.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(ConfigError::Prompt)?;
        let min = self.token(axis)?;
        let max = self.token(axis)?;
        Ok((parse_number(axis, &min)?, parse_number(axis, &max)?))
    }

    // whitespace separated tokens, possibly spread over several lines
    fn token(&mut self, axis: &'static str) -> Result<String, ConfigError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self.input.read_line(&mut line)
                .map_err(ConfigError::Prompt)?;
            if read == 0 {
                return Err(ConfigError::UnexpectedEof { axis, });
            }
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }
        Ok(self.pending.pop().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use common::Bounds;
    use super::{matches_from, from_matches, validate, ConfigError};

    fn parse(args: &[&str], stdin: &str) -> Result<super::Config, ConfigError> {
        let mut argv = vec!["segment-intersection-demo"];
        argv.extend_from_slice(args);
        let matches = matches_from(argv).unwrap();
        let mut output = Vec::new();
        from_matches(&matches, Cursor::new(stdin.as_bytes()), &mut output)
    }

    #[test]
    fn bounds_from_args() {
        let config = parse(&["--x-min", "-10", "--x-max", "10", "--y-min", "-2.5", "--y-max", "7"], "").unwrap();
        assert_eq!(config.bounds, Bounds { x_min: -10., x_max: 10., y_min: -2.5, y_max: 7., });
        assert_eq!(config.assets_dir.to_str(), Some("./assets"));
    }

    #[test]
    fn bounds_from_stdin() {
        let config = parse(&["-a", "/tmp/fonts"], "-1 1\n  -3\n 3\n").unwrap();
        assert_eq!(config.bounds, Bounds { x_min: -1., x_max: 1., y_min: -3., y_max: 3., });
        assert_eq!(config.assets_dir.to_str(), Some("/tmp/fonts"));
    }

    #[test]
    fn partial_args_prompt_for_missing_axis() {
        let config = parse(&["--y-min", "0", "--y-max", "5"], "2 4\n").unwrap();
        assert_eq!(config.bounds, Bounds { x_min: 2., x_max: 4., y_min: 0., y_max: 5., });
    }

    #[test]
    fn truncated_stdin() {
        match parse(&[], "1 2\n3") {
            Err(ConfigError::UnexpectedEof { axis: "y", }) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn garbage_number() {
        match parse(&["--x-min", "zero", "--x-max", "1"], "0 1\n") {
            Err(ConfigError::InvalidNumber { param: "x-min", .. }) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn empty_and_inverted_ranges() {
        match parse(&[], "1 1\n0 1\n") {
            Err(ConfigError::EmptyRange { axis: "x", .. }) => (),
            other => panic!("unexpected result: {:?}", other),
        }
        match parse(&[], "0 1\n5 -5\n") {
            Err(ConfigError::EmptyRange { axis: "y", .. }) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn lone_bound_is_an_error() {
        match parse(&["--x-min", "3"], "0 10\n0 1\n") {
            Err(ConfigError::MissingBound { given: "x-min", missing: "x-max", }) => (),
            other => panic!("unexpected result: {:?}", other),
        }
        match parse(&["--x-min", "0", "--x-max", "1", "--y-max", "2"], "0 1\n") {
            Err(ConfigError::MissingBound { given: "y-max", missing: "y-min", }) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn unknown_argument() {
        match matches_from(vec!["segment-intersection-demo", "--z-min", "1"]) {
            Err(ConfigError::Cli(ref e)) if e.kind == ::clap::ErrorKind::UnknownArgument => (),
            Err(other) => panic!("unexpected error: {:?}", other),
            Ok(_) => panic!("unknown argument accepted"),
        }
    }

    #[test]
    fn non_finite_rejected() {
        let bounds = Bounds { x_min: 0., x_max: ::std::f64::INFINITY, y_min: 0., y_max: 1., };
        match validate(&bounds) {
            Err(ConfigError::NotFinite { param: "x-max", }) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
