use std::{
    convert::Infallible,
    ffi::OsStr,
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
    str::FromStr,
};

use anyhow::{bail, Context};
use flickrdex::{
    api::{decode::decode, image::PhotoSize, search::PhotoSearch, tags::Tags},
    util::truncate,
    ImageSearchResults,
};
use log::{info, warn};

const USAGE: &str = "\
Usage:
  flickrdex [--json] [--width N] hot-tags [FILE]
  flickrdex [--json] [--size S] search QUERY [FILE]

FILE defaults to stdin ('-').
Sizes: s t m - z b (default -)";

enum Command {
    HotTags { input: Input },
    Search { query: String, input: Input },
}

enum Input {
    Stdin,
    File(PathBuf),
}

struct Args {
    json: bool,
    width: usize,
    size: PhotoSize,
    command: Command,
}

impl Args {
    fn parse() -> Result<Self, pico_args::Error> {
        let mut args = pico_args::Arguments::from_env();

        // options first so the subcommand is the first free argument
        let json = args.contains("--json");
        let width = args.opt_value_from_str("--width")?.unwrap_or(40);
        let size = args
            .opt_value_from_fn("--size", parse_size)?
            .unwrap_or_default();

        let command = match args.subcommand()?.as_deref() {
            Some("hot-tags") => Command::HotTags {
                input: args.opt_free_from_os_str(Input::from_arg)?.unwrap_or(Input::Stdin),
            },
            Some("search") => Command::Search {
                query: args.free_from_str()?,
                input: args.opt_free_from_os_str(Input::from_arg)?.unwrap_or(Input::Stdin),
            },
            Some(other) => {
                return Err(pico_args::Error::ArgumentParsingFailed {
                    cause: format!("unknown command '{}'", other),
                })
            }
            None => return Err(pico_args::Error::MissingArgument),
        };

        let rest = args.finish();
        if !rest.is_empty() {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unexpected arguments {:?}", rest),
            });
        }

        Ok(Self {
            json,
            width,
            size,
            command,
        })
    }
}

fn parse_size(s: &str) -> Result<PhotoSize, String> {
    PhotoSize::from_str(s).map_err(|_| format!("unknown photo size '{}'", s))
}

impl Input {
    fn from_arg(arg: &OsStr) -> Result<Self, Infallible> {
        if arg == "-" {
            Ok(Self::Stdin)
        } else {
            Ok(Self::File(PathBuf::from(arg)))
        }
    }

    fn read(&self) -> anyhow::Result<Vec<u8>> {
        match self {
            Self::Stdin => {
                let mut buf = Vec::new();
                io::stdin()
                    .read_to_end(&mut buf)
                    .context("reading stdin")?;
                Ok(buf)
            }
            Self::File(path) => {
                fs::read(path).with_context(|| format!("reading {}", path.display()))
            }
        }
    }

    fn name(&self) -> String {
        match self {
            Self::Stdin => "stdin".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::parse() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, USAGE);
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::HotTags { input } => {
            let payload = input.read()?;
            let tags: Tags = decode(&payload)
                .with_context(|| format!("decoding hot tags from {}", input.name()))?;

            if tags.count != tags.hottags.tag.len() {
                warn!(
                    "count says {} tags but the list holds {}",
                    tags.count,
                    tags.hottags.tag.len()
                );
            }
            if !tags.is_ok() {
                bail!("unexpected stat '{}'", tags.stat);
            }

            if args.json {
                serde_json::to_writer_pretty(&mut out, &tags.hottags.tag)?;
                writeln!(out)?;
            } else {
                writeln!(out, "period: {}", tags.period)?;
                for name in tags.names() {
                    writeln!(out, "{}", name)?;
                }
            }
        }
        Command::Search { query, input } => {
            let payload = input.read()?;
            let search: PhotoSearch = decode(&payload)
                .with_context(|| format!("decoding search results from {}", input.name()))?;
            if !search.is_ok() {
                bail!("unexpected stat '{}'", search.stat);
            }
            info!(
                "page {}/{} of {} photos",
                search.photos.page, search.photos.pages, search.photos.total
            );

            let results = ImageSearchResults::from_page(query.as_str(), search);
            if results.is_empty() {
                info!("no results for '{}'", results.search_string);
            }

            if args.json {
                serde_json::to_writer_pretty(&mut out, &results)?;
                writeln!(out)?;
            } else {
                for image in &results.search_results {
                    writeln!(
                        out,
                        "{}  {}",
                        image.url(args.size),
                        truncate(&image.title, args.width)
                    )?;
                }
            }
        }
    }

    Ok(())
}
