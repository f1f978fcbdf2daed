//! Batch file tree navigation.
//!
//! The tree has three levels: batch rows (one per job folder), child rows
//! under the selected batch, and, for multi-segment batches, the artifact
//! rows of one segment. Child rows are synthesized from the batch's folder
//! name and segment count alone; nothing is fetched to build the tree.
//!
//! # State machine
//!
//! - `Collapsed` - no children visible
//! - `BatchExpanded(folder)` - the batch's child rows are visible
//! - `SegmentExpanded(folder, i)` - additionally segment `i`'s artifacts are visible
//!
//! At most one batch and at most one segment are expanded at a time.
//! Selecting a different batch drops every child row and the leaf selection.

use crate::artifacts::{artifact_path, ArtifactKind, BATCH_ARTIFACTS, SEGMENT_ARTIFACTS};
use crate::error::ViewerError;
use tracing::{debug, warn};

/// One completed job in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRow {
    pub folder: String,
    pub segment_count: usize,
}

impl BatchRow {
    pub fn new(folder: impl Into<String>, segment_count: usize) -> Self {
        Self {
            folder: folder.into(),
            segment_count,
        }
    }

    /// Builds a row from listing attributes, where the segment count is
    /// still a string. A count that is not a number is treated as zero.
    pub fn from_attributes(folder: &str, segments: &str) -> Self {
        let segment_count = match parse_segment_count(segments) {
            Ok(count) => count,
            Err(e) => {
                warn!("Batch {}: {}", folder, e);
                0
            }
        };
        Self::new(folder, segment_count)
    }
}

/// Parses a segment count attribute.
pub fn parse_segment_count(raw: &str) -> Result<usize, ViewerError> {
    raw.trim().parse::<usize>().map_err(|e| {
        ViewerError::MalformedMetadata(format!("segment count {:?}: {}", raw, e))
    })
}

/// What clicking a child row does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildTarget {
    /// Leaf artifact at `path`
    File(String),
    /// Placeholder that expands segment `i` (1-based)
    Segment(usize),
}

/// A synthesized row under a batch or segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildRow {
    pub label: String,
    pub target: ChildTarget,
}

impl ChildRow {
    fn file(folder: &str, segment_index: usize, kind: ArtifactKind) -> Self {
        Self {
            label: kind.label().to_string(),
            target: ChildTarget::File(artifact_path(folder, segment_index, kind)),
        }
    }

    fn segment(segment_index: usize) -> Self {
        Self {
            label: format!("Result {}", segment_index),
            target: ChildTarget::Segment(segment_index),
        }
    }

    /// Leaf path, `None` for segment placeholders.
    pub fn path(&self) -> Option<&str> {
        match &self.target {
            ChildTarget::File(path) => Some(path),
            ChildTarget::Segment(_) => None,
        }
    }
}

/// Child rows shown when a batch expands.
///
/// Always the log and request metadata; then either the three segment-1
/// artifacts (one segment) or one placeholder per segment (several).
pub fn batch_children(batch: &BatchRow) -> Vec<ChildRow> {
    let mut rows: Vec<ChildRow> = BATCH_ARTIFACTS
        .iter()
        .map(|&kind| ChildRow::file(&batch.folder, 1, kind))
        .collect();

    match batch.segment_count {
        0 => {}
        1 => rows.extend(segment_children(&batch.folder, 1)),
        n => rows.extend((1..=n).map(ChildRow::segment)),
    }

    rows
}

/// Artifact rows of one segment.
pub fn segment_children(folder: &str, segment_index: usize) -> Vec<ChildRow> {
    SEGMENT_ARTIFACTS
        .iter()
        .map(|&kind| ChildRow::file(folder, segment_index, kind))
        .collect()
}

/// Observable expansion state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeState {
    Collapsed,
    BatchExpanded { folder: String },
    SegmentExpanded { folder: String, segment_index: usize },
}

/// A click on the list surface, classified by level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClick {
    /// Batch row by position in the listing
    Batch(usize),
    /// Child row of the expanded batch by position
    Child(usize),
    /// Artifact row of the expanded segment by position
    SegmentChild(usize),
}

/// Result of a click, telling the frontend what to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// A new batch was selected and expanded; the viewer must be cleared
    BatchSelected,
    /// The selected batch's children were hidden
    BatchCollapsed,
    /// The selected batch's children were shown again
    BatchReopened,
    SegmentExpanded(usize),
    SegmentCollapsed(usize),
    /// A leaf was selected; render it
    View(String),
    /// The click referred to a row that is not visible
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SegmentExpansion {
    /// Position of the placeholder among the batch's children
    child_index: usize,
    segment_index: usize,
    rows: Vec<ChildRow>,
    selected: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BatchExpansion {
    rows: Vec<ChildRow>,
    selected: Option<usize>,
    segment: Option<SegmentExpansion>,
}

/// A row as the frontend should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    /// 0 for batches, 1 for batch children, 2 for segment children
    pub depth: u8,
    pub label: String,
    pub selected: bool,
    /// Whether the row has visible children directly below it
    pub expanded: bool,
    pub click: RowClick,
}

/// Owns the expand/collapse/selection state of the file tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNavigator {
    batches: Vec<BatchRow>,
    selected_batch: Option<usize>,
    expansion: Option<BatchExpansion>,
    selected_leaf: Option<String>,
}

impl TreeNavigator {
    pub fn new(batches: Vec<BatchRow>) -> Self {
        Self {
            batches,
            ..Self::default()
        }
    }

    pub fn selected_batch(&self) -> Option<&BatchRow> {
        self.selected_batch.and_then(|idx| self.batches.get(idx))
    }

    /// Path of the selected leaf, the target of the download action.
    pub fn selected_leaf(&self) -> Option<&str> {
        self.selected_leaf.as_deref()
    }

    /// Child rows of the expanded batch (empty when collapsed).
    pub fn children(&self) -> &[ChildRow] {
        self.expansion
            .as_ref()
            .map(|e| e.rows.as_slice())
            .unwrap_or(&[])
    }

    /// Artifact rows of the expanded segment (empty when none is expanded).
    pub fn segment_children(&self) -> &[ChildRow] {
        self.expansion
            .as_ref()
            .and_then(|e| e.segment.as_ref())
            .map(|s| s.rows.as_slice())
            .unwrap_or(&[])
    }

    pub fn state(&self) -> TreeState {
        let (Some(batch), Some(expansion)) = (self.selected_batch(), &self.expansion) else {
            return TreeState::Collapsed;
        };
        match &expansion.segment {
            Some(segment) => TreeState::SegmentExpanded {
                folder: batch.folder.clone(),
                segment_index: segment.segment_index,
            },
            None => TreeState::BatchExpanded {
                folder: batch.folder.clone(),
            },
        }
    }

    /// Applies a click and reports what changed.
    pub fn click(&mut self, click: RowClick) -> NavOutcome {
        let outcome = match click {
            RowClick::Batch(idx) => self.click_batch(idx),
            RowClick::Child(idx) => self.click_child(idx),
            RowClick::SegmentChild(idx) => self.click_segment_child(idx),
        };
        debug!("{:?} -> {:?} ({:?})", click, outcome, self.state());
        outcome
    }

    fn click_batch(&mut self, idx: usize) -> NavOutcome {
        let Some(batch) = self.batches.get(idx) else {
            return NavOutcome::Ignored;
        };

        if self.selected_batch == Some(idx) {
            return if self.expansion.take().is_some() {
                NavOutcome::BatchCollapsed
            } else {
                self.expansion = Some(BatchExpansion::new(batch_children(batch)));
                NavOutcome::BatchReopened
            };
        }

        let rows = batch_children(batch);
        self.selected_batch = Some(idx);
        self.expansion = Some(BatchExpansion::new(rows));
        self.selected_leaf = None;
        NavOutcome::BatchSelected
    }

    fn click_child(&mut self, idx: usize) -> NavOutcome {
        let Some(folder) = self.selected_batch().map(|b| b.folder.clone()) else {
            return NavOutcome::Ignored;
        };
        let Some(expansion) = self.expansion.as_mut() else {
            return NavOutcome::Ignored;
        };
        let Some(row) = expansion.rows.get(idx) else {
            return NavOutcome::Ignored;
        };

        expansion.selected = Some(idx);

        match row.target.clone() {
            ChildTarget::Segment(segment_index) => {
                let was_open = expansion
                    .segment
                    .take()
                    .is_some_and(|open| open.child_index == idx);
                if was_open {
                    NavOutcome::SegmentCollapsed(segment_index)
                } else {
                    expansion.segment = Some(SegmentExpansion {
                        child_index: idx,
                        segment_index,
                        rows: segment_children(&folder, segment_index),
                        selected: None,
                    });
                    NavOutcome::SegmentExpanded(segment_index)
                }
            }
            ChildTarget::File(path) => {
                self.selected_leaf = Some(path.clone());
                NavOutcome::View(path)
            }
        }
    }

    fn click_segment_child(&mut self, idx: usize) -> NavOutcome {
        let Some(segment) = self
            .expansion
            .as_mut()
            .and_then(|e| e.segment.as_mut())
        else {
            return NavOutcome::Ignored;
        };
        let Some(path) = segment.rows.get(idx).and_then(|r| r.path()).map(str::to_string) else {
            return NavOutcome::Ignored;
        };

        segment.selected = Some(idx);
        self.selected_leaf = Some(path.clone());
        NavOutcome::View(path)
    }

    /// Flattens the tree into drawing order.
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        let mut out = Vec::new();

        for (idx, batch) in self.batches.iter().enumerate() {
            let selected = self.selected_batch == Some(idx);
            let expansion = self.expansion.as_ref().filter(|_| selected);

            out.push(VisibleRow {
                depth: 0,
                label: batch.folder.clone(),
                selected,
                expanded: expansion.is_some(),
                click: RowClick::Batch(idx),
            });

            let Some(expansion) = expansion else {
                continue;
            };

            for (child_idx, row) in expansion.rows.iter().enumerate() {
                let open_segment = expansion
                    .segment
                    .as_ref()
                    .filter(|s| s.child_index == child_idx);

                out.push(VisibleRow {
                    depth: 1,
                    label: row.label.clone(),
                    selected: expansion.selected == Some(child_idx),
                    expanded: open_segment.is_some(),
                    click: RowClick::Child(child_idx),
                });

                if let Some(segment) = open_segment {
                    for (seg_idx, seg_row) in segment.rows.iter().enumerate() {
                        out.push(VisibleRow {
                            depth: 2,
                            label: seg_row.label.clone(),
                            selected: segment.selected == Some(seg_idx),
                            expanded: false,
                            click: RowClick::SegmentChild(seg_idx),
                        });
                    }
                }
            }
        }

        out
    }
}

impl BatchExpansion {
    fn new(rows: Vec<ChildRow>) -> Self {
        Self {
            rows,
            selected: None,
            segment: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(rows: &[ChildRow]) -> Vec<Option<&str>> {
        rows.iter().map(ChildRow::path).collect()
    }

    #[test]
    fn test_single_segment_children() {
        let rows = batch_children(&BatchRow::new("job", 1));
        assert_eq!(rows.len(), 5);
        assert_eq!(
            paths(&rows),
            vec![
                Some("job/job.log"),
                Some("job/request.json"),
                Some("job/segment_1/assembled_result/job_1.txt"),
                Some("job/segment_1/assembled_result/job_1.srt"),
                Some("job/segment_1/chunks_mapping.json"),
            ]
        );
        assert_eq!(rows[2].label, "Text file");
        assert_eq!(rows[4].label, "Mappings");
    }

    #[test]
    fn test_multi_segment_children() {
        let rows = batch_children(&BatchRow::new("job", 3));
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2].target, ChildTarget::Segment(1));
        assert_eq!(rows[4].target, ChildTarget::Segment(3));
        assert_eq!(rows[3].label, "Result 2");
    }

    #[test]
    fn test_zero_segments_only_fixed_rows() {
        assert_eq!(batch_children(&BatchRow::new("job", 0)).len(), 2);
    }

    #[test]
    fn test_malformed_segment_count_is_zero() {
        let batch = BatchRow::from_attributes("job", "two");
        assert_eq!(batch.segment_count, 0);
        assert!(matches!(
            parse_segment_count("-1"),
            Err(ViewerError::MalformedMetadata(_))
        ));
        assert_eq!(BatchRow::from_attributes("job", " 4 ").segment_count, 4);
    }

    #[test]
    fn test_expand_then_collapse_round_trip() {
        let mut nav = TreeNavigator::new(vec![BatchRow::new("a", 1), BatchRow::new("b", 2)]);
        let before = nav.visible_rows();

        assert_eq!(nav.click(RowClick::Batch(0)), NavOutcome::BatchSelected);
        assert_eq!(nav.state(), TreeState::BatchExpanded { folder: "a".to_string() });
        assert_eq!(nav.visible_rows().len(), 2 + 5);

        assert_eq!(nav.click(RowClick::Batch(0)), NavOutcome::BatchCollapsed);
        assert_eq!(nav.state(), TreeState::Collapsed);

        let after = nav.visible_rows();
        assert_eq!(after.len(), before.len());
        // The batch row stays selected after collapsing
        assert!(after[0].selected);
        assert!(!after[0].expanded);
    }

    #[test]
    fn test_collapsed_batch_reopens_on_next_click() {
        let mut nav = TreeNavigator::new(vec![BatchRow::new("a", 1)]);
        nav.click(RowClick::Batch(0));
        nav.click(RowClick::Batch(0));
        assert_eq!(nav.click(RowClick::Batch(0)), NavOutcome::BatchReopened);
        assert_eq!(nav.children().len(), 5);
    }

    #[test]
    fn test_selecting_sibling_batch_drops_children_and_leaf() {
        let mut nav = TreeNavigator::new(vec![BatchRow::new("a", 2), BatchRow::new("b", 1)]);
        nav.click(RowClick::Batch(0));
        nav.click(RowClick::Child(2));
        nav.click(RowClick::SegmentChild(0));
        assert!(nav.selected_leaf().is_some());

        assert_eq!(nav.click(RowClick::Batch(1)), NavOutcome::BatchSelected);
        assert_eq!(nav.selected_leaf(), None);
        assert!(nav.segment_children().is_empty());
        assert_eq!(nav.children()[0].path(), Some("b/b.log"));

        let rows = nav.visible_rows();
        assert_eq!(rows.len(), 2 + 5);
        assert!(!rows[0].selected);
        assert!(rows[1].selected && rows[1].expanded);
    }

    #[test]
    fn test_segment_expand_and_collapse() {
        let mut nav = TreeNavigator::new(vec![BatchRow::new("job", 2)]);
        nav.click(RowClick::Batch(0));

        assert_eq!(nav.click(RowClick::Child(3)), NavOutcome::SegmentExpanded(2));
        assert_eq!(
            nav.state(),
            TreeState::SegmentExpanded {
                folder: "job".to_string(),
                segment_index: 2
            }
        );
        assert_eq!(
            paths(nav.segment_children()),
            vec![
                Some("job/segment_2/assembled_result/job_2.txt"),
                Some("job/segment_2/assembled_result/job_2.srt"),
                Some("job/segment_2/chunks_mapping.json"),
            ]
        );

        assert_eq!(nav.click(RowClick::Child(3)), NavOutcome::SegmentCollapsed(2));
        assert_eq!(nav.state(), TreeState::BatchExpanded { folder: "job".to_string() });
    }

    #[test]
    fn test_only_one_segment_expanded() {
        let mut nav = TreeNavigator::new(vec![BatchRow::new("job", 3)]);
        nav.click(RowClick::Batch(0));
        nav.click(RowClick::Child(2));
        assert_eq!(nav.click(RowClick::Child(4)), NavOutcome::SegmentExpanded(3));

        let expanded: Vec<_> = nav.visible_rows().into_iter().filter(|r| r.expanded).collect();
        // The batch row and the segment 3 placeholder
        assert_eq!(expanded.len(), 2);
        assert_eq!(expanded[1].label, "Result 3");
    }

    #[test]
    fn test_leaf_click_views_without_changing_expansion() {
        let mut nav = TreeNavigator::new(vec![BatchRow::new("job", 2)]);
        nav.click(RowClick::Batch(0));
        nav.click(RowClick::Child(2));
        let state = nav.state();

        assert_eq!(
            nav.click(RowClick::Child(0)),
            NavOutcome::View("job/job.log".to_string())
        );
        assert_eq!(nav.state(), state);
        assert_eq!(nav.selected_leaf(), Some("job/job.log"));

        assert_eq!(
            nav.click(RowClick::SegmentChild(2)),
            NavOutcome::View("job/segment_1/chunks_mapping.json".to_string())
        );
        assert_eq!(nav.selected_leaf(), Some("job/segment_1/chunks_mapping.json"));
    }

    #[test]
    fn test_stale_clicks_are_ignored() {
        let mut nav = TreeNavigator::new(vec![BatchRow::new("job", 1)]);
        assert_eq!(nav.click(RowClick::Child(0)), NavOutcome::Ignored);
        assert_eq!(nav.click(RowClick::Batch(9)), NavOutcome::Ignored);
        nav.click(RowClick::Batch(0));
        assert_eq!(nav.click(RowClick::SegmentChild(0)), NavOutcome::Ignored);
        assert_eq!(nav.click(RowClick::Child(99)), NavOutcome::Ignored);
    }
}
