//! Plain-text export of the current result

use crate::models::{PlaylistBatch, SummaryResult, SummaryStyle};
use crate::utils::error::SummarizerError;
use std::path::{Path, PathBuf};
use tracing::info;

/// A file ready to be written somewhere the user picks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content: String,
}

/// Pull the video id out of a watch URL, a short link, or a bare id
pub fn extract_video_id(reference: &str) -> String {
    if let Some((_, rest)) = reference.split_once("v=") {
        return rest.split('&').next().unwrap_or_default().to_string();
    }
    if let Some((_, rest)) = reference.split_once("youtu.be/") {
        return rest.split('?').next().unwrap_or_default().to_string();
    }
    reference.to_string()
}

/// The `list=` parameter of a playlist URL, or `"playlist"`
pub fn playlist_id(reference: &str) -> String {
    reference
        .split_once("list=")
        .map(|(_, rest)| rest.split('&').next().unwrap_or_default().to_string())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| "playlist".to_string())
}

pub fn video_export(reference: &str, style: SummaryStyle, result: &SummaryResult) -> ExportFile {
    let filename = format!(
        "summary_{}_{}.txt",
        sanitize_filename(&extract_video_id(reference)),
        style.as_str()
    );

    let mut content = format!("Summary for: {}\n\n", reference);
    if let Some(transcript) = &result.transcript_text {
        content.push_str(&format!("TRANSCRIPT:\n\n{}\n\n", transcript));
    }
    content.push_str(&format!(
        "SUMMARY:\n\n{}",
        result.summary_text.as_deref().unwrap_or_default()
    ));

    ExportFile { filename, content }
}

pub fn playlist_export(reference: &str, batch: &PlaylistBatch) -> ExportFile {
    let filename = format!("playlist_{}_summary.txt", sanitize_filename(&playlist_id(reference)));

    let mut content = format!("Summaries for playlist: {}\n", reference);
    content.push_str(&format!("Total videos: {}\n\n", batch.video_count));

    for (index, video) in batch.items.iter().enumerate() {
        content.push_str(&format!("Video {}: {}\n", index + 1, video.title));
        content.push_str(&format!(
            "URL: {}\n",
            video.source_url.as_deref().unwrap_or("N/A")
        ));

        if video.success {
            content.push_str(&format!(
                "Summary available in: {}\n",
                video.file_path.as_deref().unwrap_or("N/A")
            ));
            if let Some(summary) = &video.summary_text {
                content.push_str(&format!("\n{}\n", summary));
            }
        } else {
            content.push_str(&format!(
                "Error: {}\n",
                video.error_message.as_deref().unwrap_or("Unknown error")
            ));
        }

        content.push_str(&format!("\n{}\n\n", "=".repeat(50)));
    }

    ExportFile { filename, content }
}

/// Write `file` into `dir`, creating the directory if needed
pub async fn save_export(dir: &Path, file: &ExportFile) -> Result<PathBuf, SummarizerError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(&file.filename);
    save_export_to(&path, file).await?;
    Ok(path)
}

/// Write `file` to an explicit path chosen by the user
pub async fn save_export_to(path: &Path, file: &ExportFile) -> Result<(), SummarizerError> {
    tokio::fs::write(path, file.content.as_bytes()).await?;
    info!("Exported summary to {}", path.display());
    Ok(())
}

/// Sanitize filename for filesystem
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}
