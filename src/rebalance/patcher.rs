//! Literal-text patching of the canonical card source.
//!
//! ## Run Model
//!
//! 1. Read the source once into memory.
//! 2. For each edit, render the `from` block, locate it, and replace it
//!    with the rendered `to` block. A block that is missing or matches more
//!    than once is skipped and recorded; the batch continues.
//! 3. Write the result back once, atomically (temp file + rename).
//!
//! Re-running a batch that already applied reports every edit as not found:
//! the `from` text no longer exists.
//!
//! ## Card Scoping
//!
//! If the source contains an anchor line for the card (`Fire: {` or
//! `"Fire": {`), the search is confined to that card's block, which ends at
//! the brace closing the anchor's `{`. Braces inside quoted strings and `//`
//! comments are not counted. A one-line card is its own block. Without an
//! anchor the whole text is searched.
//!
//! Concurrent runs against the same file are unsafe: the last writer wins.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::ops::Range;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::document::read_text;
use crate::core::{BalanceError, PatchFailure, Result};

use super::edit::{EditField, RebalanceEdit};

/// What happened to one edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditOutcome {
    Applied,
    Skipped(PatchFailure),
}

/// Per-edit record in a rebalance run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditReport {
    pub card: String,
    pub field: EditField,
    pub outcome: EditOutcome,
}

impl EditReport {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self.outcome, EditOutcome::Applied)
    }
}

/// Result of applying a batch of edits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebalanceSummary {
    /// One report per edit, in input order.
    pub reports: Vec<EditReport>,
    /// Whether the canonical source was rewritten.
    pub written: bool,
}

impl RebalanceSummary {
    /// Number of edits applied.
    #[must_use]
    pub fn applied(&self) -> usize {
        self.reports.iter().filter(|r| r.is_applied()).count()
    }

    /// Number of edits skipped.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.reports.len() - self.applied()
    }

    /// Failures of skipped edits, in input order.
    pub fn failures(&self) -> impl Iterator<Item = &PatchFailure> {
        self.reports.iter().filter_map(|r| match &r.outcome {
            EditOutcome::Skipped(failure) => Some(failure),
            EditOutcome::Applied => None,
        })
    }
}

/// Applies edit batches to a canonical source file.
#[derive(Clone, Debug, Default)]
pub struct Rebalancer {
    dry_run: bool,
}

impl Rebalancer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Perform every lookup but never write.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Apply `edits` to `text` in memory. Never fails as a whole.
    #[must_use]
    pub fn apply_to_text(text: &str, edits: &[RebalanceEdit]) -> (String, Vec<EditReport>) {
        let mut text = text.to_string();
        let mut reports = Vec::with_capacity(edits.len());

        for edit in edits {
            let outcome = match apply_one(&mut text, edit) {
                Ok(()) => {
                    tracing::debug!(card = edit.card(), field = %edit.field(), "Applied edit");
                    EditOutcome::Applied
                }
                Err(failure) => {
                    tracing::warn!("Skipping edit: {}", failure);
                    EditOutcome::Skipped(failure)
                }
            };
            reports.push(EditReport {
                card: edit.card().to_string(),
                field: edit.field(),
                outcome,
            });
        }
        (text, reports)
    }

    /// Read `path`, apply `edits`, and write the result back once.
    ///
    /// Skipped edits are reported in the summary. Only reading or writing
    /// the file fails the run. Nothing is written when no edit applied or
    /// in dry-run mode.
    pub fn run(&self, path: &Path, edits: &[RebalanceEdit]) -> Result<RebalanceSummary> {
        let original = read_text(path)?;
        let (patched, reports) = Self::apply_to_text(&original, edits);
        let mut summary = RebalanceSummary {
            reports,
            written: false,
        };

        if self.dry_run {
            tracing::info!(
                applied = summary.applied(),
                skipped = summary.skipped(),
                "Dry run, {} left untouched",
                path.display()
            );
            return Ok(summary);
        }

        if summary.applied() == 0 {
            tracing::info!(skipped = summary.skipped(), "No edits applied, nothing to write");
            return Ok(summary);
        }

        write_atomic(path, &patched).map_err(|source| BalanceError::WriteFailure {
            path: path.to_path_buf(),
            pending_edits: summary.applied(),
            source,
        })?;
        summary.written = true;

        tracing::info!(
            applied = summary.applied(),
            skipped = summary.skipped(),
            bytes = patched.len(),
            "Wrote {}",
            path.display()
        );
        Ok(summary)
    }
}

fn apply_one(text: &mut String, edit: &RebalanceEdit) -> std::result::Result<(), PatchFailure> {
    let needle = edit.from_literal();
    let region = find_card_block(text, edit.card()).unwrap_or(0..text.len());
    let haystack = &text[region.clone()];

    let mut matches = haystack.match_indices(needle.as_str());
    let Some((offset, _)) = matches.next() else {
        return Err(PatchFailure::PatternNotFound {
            card: edit.card().to_string(),
            field: edit.field().name().to_string(),
        });
    };
    let extra = matches.count();
    if extra > 0 {
        return Err(PatchFailure::AmbiguousPattern {
            card: edit.card().to_string(),
            field: edit.field().name().to_string(),
            occurrences: extra + 1,
        });
    }

    let start = region.start + offset;
    text.replace_range(start..start + needle.len(), &edit.to_literal());
    Ok(())
}

/// Byte range of `card`'s block, from the start of its anchor line through
/// the brace closing the anchor's `{` (or end of text if unclosed).
#[must_use]
pub fn find_card_block(text: &str, card: &str) -> Option<Range<usize>> {
    let anchors = [format!("{card}: {{"), format!("\"{card}\": {{"), format!("'{card}': {{")];

    let mut offset = 0;
    let (start, open) = text.split_inclusive('\n').find_map(|line| {
        let line_start = offset;
        offset += line.len();
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        anchors
            .iter()
            .find(|a| trimmed.starts_with(a.as_str()))
            .map(|a| (line_start, line_start + indent + a.len() - 1))
    })?;

    let end = closing_brace(text.as_bytes(), open).map_or(text.len(), |close| close + 1);
    Some(start..end)
}

/// Index of the `}` matching the `{` at `open`.
fn closing_brace(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            quote @ (b'"' | b'\'' | b'`') => i = string_end(bytes, i, quote),
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = bytes[i..]
                    .iter()
                    .position(|&b| b == b'\n')
                    .map_or(bytes.len(), |n| i + n);
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Index of the quote closing the string opened at `start`.
fn string_end(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b if b == quote => return i,
            _ => {}
        }
        i += 1;
    }
    bytes.len()
}

/// Write `contents` to `<path>.tmp`, then rename over `path`.
///
/// An existing file at the temp path is never overwritten; the write fails
/// instead. The temp file is removed if the write or rename fails.
fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut temp: OsString = path.as_os_str().to_owned();
    temp.push(".tmp");
    let temp = PathBuf::from(temp);

    let mut file = OpenOptions::new().write(true).create_new(true).open(&temp)?;
    let written = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.sync_all());
    drop(file);

    let result = written.and_then(|()| fs::rename(&temp, path));
    if result.is_err() {
        let _ = fs::remove_file(&temp);
    }
    result
}
