use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use days_calculator::properties::{self, KEYS};
use days_calculator::{DaysCalculator, Error};

/// Name of the argument pointing to a properties file.
const FILE_ARGUMENT: &str = "file";

/// Separates the name of an argument from its value.
const ARGUMENT_SEPARATOR: char = '=';

/// Arguments of the form `name=value`, indexed by name. If a name is given
/// several times, the last value is kept.
#[derive(Debug, Default)]
struct Arguments(HashMap<String, Option<String>>);

impl Arguments {
    fn parse(args: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let mut arguments = HashMap::new();

        for arg in args {
            let arg = arg.as_ref().trim();

            if arg.is_empty() {
                continue;
            }

            let (name, value) = match arg.split_once(ARGUMENT_SEPARATOR) {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (arg, None),
            };

            if !name.is_empty() && name != FILE_ARGUMENT && !KEYS.contains(&name) {
                log::debug!("Ignored unknown argument `{name}`");
            }

            arguments.insert(name.to_string(), value);
        }

        Self(arguments)
    }

    /// Value of an argument, if it was given with a value.
    fn value(&self, name: &str) -> Option<&str> {
        self.0.get(name)?.as_deref()
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(arguments: &Arguments) -> Result<u32, Error> {
    let mut calculator = DaysCalculator::new();

    if let Some(path) = arguments.value(FILE_ARGUMENT).map(Path::new) {
        if path.is_file() {
            match properties::load(path) {
                Ok(properties) => calculator = calculator.configure(&properties)?,
                Err(err) => log::warn!("Can not load data file: {err}"),
            }
        } else {
            log::warn!("Ignored data file {} which does not exist", path.display());
        }
    }

    // Explicit arguments are applied last and override the file.
    calculator = calculator.configure(
        KEYS.into_iter()
            .filter_map(|key| Some((key, arguments.value(key)?))),
    )?;

    calculator.calculate()
}

fn main() -> ExitCode {
    init_logging();
    let arguments = Arguments::parse(env::args().skip(1));

    match run(&arguments) {
        Ok(days) => {
            println!("Number of days: {days}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
