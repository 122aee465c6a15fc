use chrono::{DateTime, Local, Utc};
use logdigest_core::{process_daily_logs, process_weekly_logs, Config};
use logdigest_notion::{Collector, NotionClient, PageSource};
use logdigest_output::OutputWriter;
use std::path::PathBuf;

pub fn run(days: u32, weeks: u32, output_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(dir) = output_dir {
        config.output_dir = dir;
    }
    tracing::debug!(?config, "Loaded configuration");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let written = runtime.block_on(async {
        let collector = Collector::new(NotionClient::new(&config)?, &config);
        let writer = OutputWriter::new(&config.output_dir);
        collect(&collector, &writer, days, weeks, Local::now()).await
    })?;

    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

/// Fetch both databases, aggregate, and write the three report files.
///
/// Files are written in order daily, weekly, combined; a failure partway
/// leaves earlier files in place.
pub async fn collect<S: PageSource>(
    collector: &Collector<S>,
    writer: &OutputWriter,
    days: u32,
    weeks: u32,
    now: DateTime<Local>,
) -> anyhow::Result<Vec<PathBuf>> {
    tracing::info!("Collecting daily logs");
    let daily = collector.get_daily_logs(days).await?;
    tracing::info!(count = daily.len(), days, "Fetched daily logs");

    tracing::info!("Collecting weekly logs");
    let weekly = collector.get_weekly_logs(weeks).await?;
    tracing::info!(count = weekly.len(), weeks, "Fetched weekly logs");

    let daily_report = process_daily_logs(&daily);
    let weekly_report = process_weekly_logs(&weekly);

    let date = now.date_naive();
    let generated_at: DateTime<Utc> = now.with_timezone(&Utc);
    let written = vec![
        writer.save_daily(&daily_report, date)?,
        writer.save_weekly(&weekly_report, date)?,
        writer.save_combined(&daily_report, &weekly_report, date, generated_at)?,
    ];

    tracing::info!(dir = %writer.dir().display(), files = written.len(), "Reports written");
    Ok(written)
}
