use std::path::Path;

use tokio::fs;

use crate::error::AppError;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Reads the file into lines without terminators. Both `\n` and `\r\n` are
/// accepted.
pub async fn load_lines(path: &Path) -> Result<Vec<String>, AppError> {
    tracing::debug!("loading file: {:?}", path);

    let content = fs::read_to_string(path).await?;
    Ok(content.lines().map(|line| line.to_string()).collect())
}

/// Writes every line followed by the platform line terminator in one write.
pub async fn save_lines(path: &Path, lines: &[String]) -> Result<(), AppError> {
    tracing::debug!("saving {} lines to file: {:?}", lines.len(), path);

    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push_str(LINE_ENDING);
    }

    fs::write(path, content).await?;
    Ok(())
}
