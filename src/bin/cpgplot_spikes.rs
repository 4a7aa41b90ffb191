use anyhow::{Context, Result};
use clap::Parser;
use cpgplot::cli::{init_tracing, OverlayCli};
use cpgplot::pipeline;

fn main() -> Result<()> {
    let cli = OverlayCli::parse();
    init_tracing(cli.common.debug)?;

    let cfg = cli.config()?;
    let outcome = pipeline::plot_overlay(&cfg, &cli.request())
        .with_context(|| format!("plotting spikes for {}", cli.path))?;
    pipeline::display(&cfg, outcome)?;
    Ok(())
}
