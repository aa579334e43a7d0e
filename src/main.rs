use std::io::Write;

use engine::aggregate::gear_ratios;
use engine::cli::{error_context, Bencher, Mode, Opts, Output};
use engine::prelude::*;

fn main() -> Result<()> {
    let opts = Opts::parse()?;

    let stdout = std::io::stdout();
    let mut o = opts.output(stdout.lock());

    if let Err(error) = run(&opts, &mut o) {
        o.failure(&error)?;
        return Err(error);
    }

    Ok(())
}

fn run<O>(opts: &Opts, o: &mut Output<O>) -> Result<()>
where
    O: Write,
{
    let text = engine::source::read(&opts.path)?;
    log::info!("loaded {} bytes from {}", text.len(), opts.path.display());

    let grid = build_grid(&text).map_err(|error| error_context(&opts.path, error))?;
    log::info!("grid is {}x{}", grid.rows_len(), grid.columns_len());

    match opts.mode {
        Mode::Default => {
            let (tokens, symbols) = index(&grid);
            let analysis = summarize(&tokens, &symbols);

            log::info!(
                "found {} tokens, {} symbols, {} gears",
                analysis.tokens,
                analysis.symbols,
                analysis.gears
            );

            if log::log_enabled!(log::Level::Debug) {
                for ratio in gear_ratios(&tokens, &symbols) {
                    let [a, b] = ratio.parts();

                    log::debug!(
                        "gear {}: {} * {} = {}",
                        ratio.gear(),
                        a.value(),
                        b.value(),
                        ratio.ratio()
                    );
                }
            }

            o.answer(&analysis)?;
        }
        Mode::Bench => {
            let mut b = Bencher::new();

            b.iter(o, opts, || -> Result<_> {
                let grid = build_grid(&text)?;
                Ok(analyze(&grid))
            })?;
        }
    }

    Ok(())
}
