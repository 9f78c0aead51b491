use clap::Parser;
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use log::info;
use owo_colors::{OwoColorize, Stream};

use crate::{
    cli::{Cli, Command},
    document::Document,
    item::Item,
};

mod aggregate;
mod cli;
mod document;
mod item;
mod locale;
mod normalize;
mod output;
mod report;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();
    match args.command {
        Command::Report {
            input,
            output,
            format,
            locale,
        } => {
            let doc = Document::load(&input)?;
            let items = doc.items();
            info!("{}: {} items", input.display(), items.len());

            let pb = ProgressBar::new(items.len() as u64);
            pb.set_style(
                ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len}")?
                    .progress_chars("#>-"),
            );
            let outcome = report::run_pass(items.progress_with(pb.clone()), locale);
            pb.finish_and_clear();

            let rendered = report::render(outcome.state, locale);
            output::write_report(&rendered, format, output.path())?;
            if let Some(path) = output.path() {
                info!("wrote {}", path.display());
            }

            let ok = outcome.items - outcome.faulted;
            eprintln!(
                "{} {}  {} {}",
                "✓".if_supports_color(Stream::Stderr, |t| t.green()),
                ok,
                "✗".if_supports_color(Stream::Stderr, |t| t.red()),
                outcome.faulted,
            );
        }
        Command::Inspect { input, locale } => {
            let doc = Document::load(&input)?;
            let labels = locale.labels();
            for (index, item) in doc.items().enumerate() {
                match Item::snapshot(&item, labels) {
                    Ok(snapshot) => {
                        let mut value = snapshot.to_json();
                        value["index"] = (index + 1).into();
                        println!("{value}");
                    }
                    Err(err) => log::warn!("item {}: {err:#}", index + 1),
                }
            }
        }
    }
    Ok(())
}
