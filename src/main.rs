use anyhow::{Context, Result};
use clap::Parser;
use mutuikan::cli::{Cli, Commands, OutputFormatArg};
use mutuikan::config::get_config;
use mutuikan::io::output::{create_writer, OutputFormat, SampleReport};
use mutuikan::parser::parse_analysis_result;
use mutuikan::scoring::sort_samples;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            input,
            format,
            output,
            sort,
            desc,
        } => {
            let text = read_input(&input)?;
            let mut samples = mutuikan::io::csv::parse_csv(&text)
                .with_context(|| format!("failed to parse {}", input.display()))?;
            if let Some(key) = sort {
                sort_samples(&mut samples, key.into(), !desc);
            }
            let report = SampleReport::new(samples);
            let mut writer = create_writer(open_output(output.as_deref())?, resolve_format(format));
            writer.write_samples(&report)
        }
        Commands::Parse {
            input,
            format,
            output,
        } => {
            let text = read_input(&input)?;
            let result = parse_analysis_result(&text);
            let mut writer = create_writer(open_output(output.as_deref())?, resolve_format(format));
            writer.write_analysis(&result)
        }
    }
}

fn read_input(path: &PathBuf) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            let file = fs::File::create(p)
                .with_context(|| format!("failed to create {}", p.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

fn resolve_format(arg: Option<OutputFormatArg>) -> OutputFormat {
    match arg {
        Some(a) => a.into(),
        None => match get_config().output.format.as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Terminal,
        },
    }
}
