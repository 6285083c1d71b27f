use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::classify::{classify_platform, PlatformLabel};
use crate::write::WriteRecord;

/// A written file plus its presentation platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    #[serde(flatten)]
    pub record: WriteRecord,
    pub platform: PlatformLabel,
}

/// Summary of one build, consumed by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    pub version: String,
    pub created: String,
    pub source_label: String,
    /// Output root joined with the normalized path, as written.
    pub output_dir: String,
    /// Normalized subdirectory (`""` or slash-terminated).
    pub path: String,
    pub images: Vec<WriteRecord>,
    pub files: Vec<FileEntry>,
    pub html: Vec<String>,
    pub total_elapsed_secs: f64,
}

impl BuildReport {
    /// Build a report. Records are sorted by name so output is stable
    /// regardless of write completion order.
    pub fn new(
        source_label: String,
        output_dir: String,
        path: String,
        mut images: Vec<WriteRecord>,
        file_records: Vec<WriteRecord>,
        html: Vec<String>,
        total_elapsed_secs: f64,
    ) -> Self {
        images.sort_by(|a, b| a.artifact_name.cmp(&b.artifact_name));

        let mut files: Vec<FileEntry> = file_records
            .into_iter()
            .map(|record| FileEntry {
                platform: classify_platform(&record.artifact_name),
                record,
            })
            .collect();
        files.sort_by(|a, b| a.record.artifact_name.cmp(&b.record.artifact_name));

        Self {
            version: "iconset.build.v0".to_string(),
            created: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            source_label,
            output_dir,
            path,
            images,
            files,
            html,
            total_elapsed_secs,
        }
    }

    pub fn file_count(&self) -> usize {
        self.images.len() + self.files.len()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("build report serialization cannot fail")
    }

    pub fn to_human(&self) -> String {
        let mut lines = Vec::new();
        lines.push("generating favicons".to_string());
        lines.push(format!("▶ {}", self.source_label));

        let last = self.images.len().saturating_sub(1);
        for (idx, record) in self.images.iter().enumerate() {
            let symbol = if idx == last { "└─" } else { "├─" };
            lines.push(format!("  {symbol} {}", self.entry(record)));
        }

        for file in &self.files {
            lines.push(format!("▶ {}", file.platform));
            lines.push(format!("  └─ {}", self.entry(&file.record)));
        }

        lines.push(format!("Completed in {:.3}s.", self.total_elapsed_secs));
        lines.push(format!(
            "{} file(s) built in {:.3}s",
            self.file_count(),
            self.total_elapsed_secs
        ));
        lines.join("\n")
    }

    fn entry(&self, record: &WriteRecord) -> String {
        format!("/{}{} (+{}ms)", self.path, record.artifact_name, record.elapsed_ms)
    }
}
