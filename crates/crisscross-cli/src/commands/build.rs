use crate::cli::BuildArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::utils::progress::{self, CliProgressHandler};
use crate::utils::wordlist;
use crisscross::core::crossword::Crossword;
use crisscross::engine::config::SearchConfig;
use crisscross::engine::progress::ProgressReporter;
use crisscross::workflows;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{info, warn};

pub fn run(args: BuildArgs) -> Result<()> {
    let app = config::build_config(&args)?;

    info!("Loading word list from {:?}", &app.input_path);
    let words = wordlist::load(&app.input_path, &app.words, app.search.seed)?;
    if words.is_empty() {
        warn!("No usable words left in the word list.");
    }

    let progress_handler = CliProgressHandler::new();
    let mut reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    if let Some(limit) = app.time_limit {
        info!("Search time limit: {:?}", limit);
        reporter = reporter.stop_when(progress::deadline(limit));
    }

    info!("Invoking the core build workflow...");
    let crossword = workflows::build::run(words.as_slice(), &app.search, &reporter)?.ok_or_else(|| {
        CliError::NoLayout {
            attempts: progress_handler.summary().attempts,
        }
    })?;
    let summary = progress_handler.summary();
    info!(
        "Best layout is {}x{} with {} crossing(s) ({} improvement(s), {} success(es)).",
        crossword.width(),
        crossword.height(),
        crossword.intersections(),
        summary.improvements,
        summary.successes
    );

    match &app.output_path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_layout(&mut writer, &crossword, &app.search)?;
            writer.flush()?;
            info!("Layout written to {:?}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_layout(&mut writer, &crossword, &app.search)?;
        }
    }

    Ok(())
}

/// Writes the solution grid followed by the numbered clue lists.
pub fn write_layout<W: Write>(
    writer: &mut W,
    crossword: &Crossword,
    search: &SearchConfig,
) -> io::Result<()> {
    writeln!(
        writer,
        "# seed {} | attempts {} | workers {}",
        search.seed, search.max_attempts, search.workers
    )?;
    writeln!(
        writer,
        "# {}x{} | {} intersection(s) | all words crossed: {}",
        crossword.width(),
        crossword.height(),
        crossword.intersections(),
        if crossword.all_intersecting() { "yes" } else { "no" }
    )?;
    writeln!(writer)?;
    if !crossword.is_empty() {
        writeln!(writer, "{}", crossword)?;
    }

    for (heading, words) in [("Across", crossword.across()), ("Down", crossword.down())] {
        if words.is_empty() {
            continue;
        }
        writeln!(writer)?;
        writeln!(writer, "{}:", heading)?;
        for word in words {
            writeln!(writer, "{:>3}. {}", word.reference_index(), word.text())?;
        }
    }
    Ok(())
}
