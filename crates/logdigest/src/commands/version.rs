use logdigest_core::{DEFAULT_NOTION_VERSION, DEFAULT_OUTPUT_DIR};
use logdigest_output::ReportKind;

pub fn run() -> anyhow::Result<()> {
    print!("{}", banner());
    Ok(())
}

fn banner() -> String {
    let prefixes: Vec<&str> = [ReportKind::Daily, ReportKind::Weekly, ReportKind::Combined]
        .into_iter()
        .map(ReportKind::prefix)
        .collect();
    format!(
        "logdigest {}\nNotion API version {} (override with NOTION_VERSION)\n\
         Reports: {{{}}}_<date>.json in {}/ by default\n",
        env!("CARGO_PKG_VERSION"),
        DEFAULT_NOTION_VERSION,
        prefixes.join(","),
        DEFAULT_OUTPUT_DIR,
    )
}
