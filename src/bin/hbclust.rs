//! Hydrogen Bond Clustering Binary
//!
//! Reads bond records, clusters their distance/angle/torsion geometry,
//! and prints one summary block per cluster.

use clap::Parser;
use hbclust::*;

fn main() -> anyhow::Result<()> {
    log();
    let ref args = cli::Args::parse();
    let ref config = args.config()?;
    let ref records = records(args)?;
    let mut kernels = match args.kernels {
        Some(ref path) if path.exists() => Kernels::load(path)?,
        _ => Kernels::default(),
    };
    let ref run = cluster(records, config, &kernels)?;
    print!("{}", Report::new(&args.title, run));
    if let Some(ref path) = args.scatter {
        Scatter::new(args.title.as_str(), run).save(path)?;
        log::info!("{:<32}{:<32}", "scatter written", path.display());
    }
    if let (Some(name), Some(path)) = (&args.export, &args.kernels) {
        kernels.insert(name.as_str(), &run.summaries);
        kernels.save(path)?;
        log::info!("{:<32}{:<32}", "kernels exported", name);
    }
    Ok(())
}

fn records(args: &cli::Args) -> anyhow::Result<Vec<Record>> {
    match (&args.input, &args.database) {
        (Some(path), _) => Lines::new(path).records(),
        #[cfg(feature = "database")]
        (None, Some(table)) => tokio::runtime::Runtime::new()?.block_on(async {
            let ref client = db().await?;
            Postgres::new(client, table.as_str()).records().await
        }),
        _ => Err(anyhow::anyhow!("no record source given")),
    }
}
