//! Artifact layout of a completed transcription job.
//!
//! The backend writes every job into its own folder:
//!
//! ```text
//! {folder}/{folder}.log
//! {folder}/request.json
//! {folder}/segment_{i}/chunks_mapping.json
//! {folder}/segment_{i}/text_mapping.json
//! {folder}/segment_{i}/assembled_result/{folder}_{i}.txt
//! {folder}/segment_{i}/assembled_result/{folder}_{i}.srt
//! ```
//!
//! [`artifact_path`] is the only place these paths are built.

/// One kind of file in a job folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Job log (one per folder)
    Log,
    /// Request metadata (one per folder)
    Request,
    /// Assembled transcript text of a segment
    Text,
    /// Assembled subtitles of a segment
    Subtitle,
    /// Chunk timing table of a segment
    ChunkMapping,
    /// Chunk-to-transcript table of a segment
    TextMapping,
}

/// Artifacts listed under each segment, in display order.
pub const SEGMENT_ARTIFACTS: [ArtifactKind; 3] = [
    ArtifactKind::Text,
    ArtifactKind::Subtitle,
    ArtifactKind::ChunkMapping,
];

/// Artifacts listed directly under every batch, in display order.
pub const BATCH_ARTIFACTS: [ArtifactKind; 2] = [ArtifactKind::Log, ArtifactKind::Request];

impl ArtifactKind {
    /// Row label shown in the file tree.
    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::Log => "Log file",
            ArtifactKind::Request => "Request.json",
            ArtifactKind::Text => "Text file",
            ArtifactKind::Subtitle => "Subtitle file",
            ArtifactKind::ChunkMapping => "Mappings",
            ArtifactKind::TextMapping => "Text mappings",
        }
    }
}

/// Builds the path of an artifact relative to the data root.
///
/// `segment_index` is 1-based and ignored for the folder-level artifacts
/// ([`ArtifactKind::Log`] and [`ArtifactKind::Request`]).
pub fn artifact_path(folder: &str, segment_index: usize, kind: ArtifactKind) -> String {
    match kind {
        ArtifactKind::Log => format!("{folder}/{folder}.log"),
        ArtifactKind::Request => format!("{folder}/request.json"),
        ArtifactKind::Text => {
            format!("{folder}/segment_{segment_index}/assembled_result/{folder}_{segment_index}.txt")
        }
        ArtifactKind::Subtitle => {
            format!("{folder}/segment_{segment_index}/assembled_result/{folder}_{segment_index}.srt")
        }
        ArtifactKind::ChunkMapping => format!("{folder}/segment_{segment_index}/chunks_mapping.json"),
        ArtifactKind::TextMapping => format!("{folder}/segment_{segment_index}/text_mapping.json"),
    }
}

const CHUNK_MAPPING_FILE: &str = "chunks_mapping.json";
const TEXT_MAPPING_FILE: &str = "text_mapping.json";

/// Path of the `text_mapping.json` next to a `chunks_mapping.json`.
///
/// Paths without the chunk mapping suffix are returned unchanged.
pub fn sibling_text_mapping(chunk_mapping_path: &str) -> String {
    match chunk_mapping_path.strip_suffix(CHUNK_MAPPING_FILE) {
        Some(dir) => format!("{dir}{TEXT_MAPPING_FILE}"),
        None => chunk_mapping_path.to_string(),
    }
}

/// Last `/`-separated component of a path, used as the saved file name.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
