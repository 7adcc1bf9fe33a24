use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stepwise::{
    make_range_iterator, make_range_iterator2, make_string_iterator, run_demo, use_iterator,
    DemoConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stepwise", about = "Drive hand-written and generator-style iterators")]
struct Cli {
    /// Log filter directive for diagnostics on stderr (e.g. `debug`, `stepwise=trace`).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the demonstration blocks (the default).
    Demo {
        /// Skip the hand-written and generator range block.
        #[arg(long)]
        skip_range: bool,
        /// Skip the string block.
        #[arg(long)]
        skip_string: bool,
    },
    /// Drive a single numeric range.
    ///
    /// A zero step, or a step pointing away from `end`, never finishes.
    Range {
        /// First value.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        start: f64,
        /// Exclusive bound (unbounded when omitted).
        #[arg(long, allow_negative_numbers = true)]
        end: Option<f64>,
        /// Increment (ignored by the generator range).
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        step: f64,
        /// Use the generator-style range instead of the hand-written one.
        #[arg(long)]
        generator: bool,
    },
    /// Drive the characters of a string.
    Chars {
        /// Text to iterate.
        text: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Demo {
        skip_range: false,
        skip_string: false,
    }) {
        Commands::Demo {
            skip_range,
            skip_string,
        } => {
            let config = DemoConfig {
                run_range_iterator: !skip_range,
                run_string_iterator: !skip_string,
            };
            run_demo(&config, &mut out).context("demo run failed")?;
        }
        Commands::Range {
            start,
            end,
            step,
            generator,
        } => run_range(start, end, step, generator, &mut out)?,
        Commands::Chars { text } => {
            use_iterator(make_string_iterator(text), &mut out)
                .context("failed to drive string iterator")?;
        }
    }

    out.flush().context("failed to flush stdout")?;
    Ok(())
}

fn run_range(
    start: f64,
    end: Option<f64>,
    step: f64,
    generator: bool,
    out: &mut impl Write,
) -> Result<()> {
    let report = if generator {
        let end = end.unwrap_or(stepwise::generator::DEFAULT_GENERATOR_END);
        use_iterator(make_range_iterator2(start, end, step), out)
    } else {
        let end = end.unwrap_or(f64::INFINITY);
        use_iterator(make_range_iterator(start, end, step), out)
    }
    .with_context(|| format!("failed to drive range from {start} by {step}"))?;

    tracing::info!(count = report.completion, "range finished");
    Ok(())
}
