use logdigest_core::Config;
use logdigest_output::OutputWriter;
use std::path::PathBuf;

pub fn run(output_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let dir = output_dir.unwrap_or_else(Config::output_dir_from_env);
    let files = OutputWriter::new(&dir).list_output_files()?;

    if files.is_empty() {
        println!("No reports in {}", dir.display());
        return Ok(());
    }

    println!("Reports in {} ({})", dir.display(), files.len());
    for file in files {
        println!("  {}", file.display());
    }
    Ok(())
}
