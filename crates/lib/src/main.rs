//! Runs every day of the year, collecting answers and bench reports.
//!
//! ```text
//! cargo run -p lib -- [-q] [-V] [--day d04]... [-- <args to each day>]
//! ```

use std::ffi::OsString;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use lib::cli::Report;
use serde::{de::IntoDeserializer, Deserialize};

/// The package containing the solutions to run.
const YEAR: &str = "y2025";

#[derive(Debug, Deserialize)]
struct Target {
    name: String,
    kind: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Artifact {
    target: Target,
    executable: Option<PathBuf>,
}

/// A built day.
struct Day {
    name: String,
    path: PathBuf,
}

#[derive(Default)]
struct Opts {
    quiet: bool,
    verbose: bool,
    days: Vec<String>,
    args: Vec<OsString>,
}

impl Opts {
    fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "-q" | "--quiet" => {
                    opts.quiet = true;
                }
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "--day" => {
                    let day = it.next().context("missing argument to `--day`")?;
                    let day = day.into_string().ok().context("non-utf8 `--day`")?;
                    opts.days.push(day);
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        opts.args.extend(it);
        Ok(opts)
    }

    fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }

    fn is_selected(&self, day: &Day) -> bool {
        self.days.is_empty() || self.days.iter().any(|d| *d == day.name)
    }
}

/// Build the year in release mode, returning its day binaries sorted by name.
fn build() -> Result<Vec<Day>> {
    let mut cmd = Command::new("cargo");
    cmd.stdout(Stdio::piped());
    cmd.args(["build", "--release", "-p", YEAR, "--message-format", "json"]);

    let mut child = cmd.spawn()?;
    let stdout = child.stdout.take().context("missing stdout")?;

    let mut days = Vec::new();

    for value in messages(stdout) {
        let value = value?;

        if value.get("reason").and_then(|d| d.as_str()) != Some("compiler-artifact") {
            continue;
        }

        let artifact = Artifact::deserialize(value.into_deserializer())?;

        if artifact.target.kind != ["bin"] {
            continue;
        }

        days.push(Day {
            path: artifact.executable.context("missing executable")?,
            name: artifact.target.name,
        });
    }

    let status = child.wait()?;

    if !status.success() {
        bail!("building {YEAR} failed: {status}");
    }

    days.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(days)
}

/// Run a single day, adding its bench report to `total`.
fn run(opts: &Opts, day: &Day, total: &mut Report) -> Result<()> {
    let mut cmd = Command::new(&day.path);
    cmd.stdout(Stdio::piped());
    cmd.args(&opts.args);
    cmd.arg("--json");

    let mut child = cmd.spawn()?;
    let stdout = child.stdout.take().context("missing stdout")?;
    let name = &day.name;

    for value in messages(stdout) {
        let value = value?;

        match value.get("type").and_then(|d| d.as_str()) {
            Some("answer") => {
                let parts = Data::<Vec<String>>::deserialize(value.into_deserializer())?.data;

                if !opts.quiet {
                    println!("{name}: {}", parts.join(", "));
                }
            }
            Some("report") => {
                let report = Data::<Report>::deserialize(value.into_deserializer())?.data;

                if !opts.quiet {
                    println!("{name}: {report}");
                }

                *total += &report;
            }
            Some("message") => {
                let message = Data::<Message>::deserialize(value.into_deserializer())?.data;

                if opts.is_verbose() || message.kind == "error" {
                    println!("{name}: {}: {}", message.kind, message.output);
                }
            }
            _ => {}
        }
    }

    let status = child.wait()?;

    if opts.is_verbose() || !status.success() {
        println!("{name}: {status}");
    }

    Ok(())
}

/// JSON values written one after another to `reader`.
fn messages<R>(reader: R) -> impl Iterator<Item = serde_json::Result<serde_json::Value>>
where
    R: Read,
{
    serde_json::Deserializer::from_reader(reader).into_iter()
}

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let mut total = Report::default();

    for day in build()? {
        if opts.is_selected(&day) {
            run(&opts, &day, &mut total).with_context(|| day.name.clone())?;
        }
    }

    println!("total: {total}");
    Ok(())
}

#[derive(Deserialize)]
struct Data<T> {
    data: T,
}

#[derive(Deserialize)]
struct Message {
    kind: String,
    output: String,
}
