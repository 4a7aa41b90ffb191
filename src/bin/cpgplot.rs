use anyhow::Result;
use clap::Parser;
use cpgplot::cli::{init_tracing, PlainCli};
use cpgplot::pipeline;

fn main() -> Result<()> {
    let cli = PlainCli::parse();
    init_tracing(cli.common.debug)?;

    let cfg = cli.config()?;
    let outcome = pipeline::plot_plain(&cfg, &cli.request())?;
    pipeline::display(&cfg, outcome)?;
    Ok(())
}
