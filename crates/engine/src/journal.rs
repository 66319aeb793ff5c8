//! Game journal
//!
//! One JSON object per line, appended to a file by a tokio task. The game
//! loop only pushes records into a channel and never waits on the disk.
//! A disabled journal drops every record.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::CascadeReport;
use crate::types::{PieceKind, Rotation, RoundStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    RoundStarted {
        ts: u64,
        seed: u32,
        ghost_enabled: bool,
    },
    PieceSpawned {
        ts: u64,
        kind: &'static str,
        rotation: u8,
        count: u32,
    },
    RowsCleared {
        ts: u64,
        rows: u32,
        score_delta: u32,
        level: u32,
        leveled_up: bool,
    },
    StatusChanged {
        ts: u64,
        status: &'static str,
    },
    GameOver {
        ts: u64,
        score: u32,
        level: u32,
        total_rows: u32,
    },
}

impl Record {
    pub fn round_started(seed: u32, ghost_enabled: bool) -> Self {
        Record::RoundStarted {
            ts: now_ms(),
            seed,
            ghost_enabled,
        }
    }

    pub fn piece_spawned(kind: PieceKind, rotation: Rotation, count: u32) -> Self {
        Record::PieceSpawned {
            ts: now_ms(),
            kind: kind.as_str(),
            rotation: rotation.index() as u8,
            count,
        }
    }

    pub fn rows_cleared(report: &CascadeReport) -> Self {
        Record::RowsCleared {
            ts: now_ms(),
            rows: report.rows_cleared,
            score_delta: report.score_delta,
            level: report.level_after,
            leveled_up: report.leveled_up(),
        }
    }

    pub fn status_changed(status: RoundStatus) -> Self {
        Record::StatusChanged {
            ts: now_ms(),
            status: status.as_str(),
        }
    }

    pub fn game_over(score: u32, level: u32, total_rows: u32) -> Self {
        Record::GameOver {
            ts: now_ms(),
            score,
            level,
            total_rows,
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[derive(Debug, Default)]
pub struct Journal {
    tx: Option<mpsc::UnboundedSender<Record>>,
    writer: Option<JoinHandle<()>>,
}

impl Journal {
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Start the writer task on `handle`, appending to `path`.
    ///
    /// A file that cannot be opened silently disables the journal.
    pub fn open(handle: &Handle, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (tx, mut rx) = mpsc::unbounded_channel::<Record>();

        let writer = handle.spawn(async move {
            let mut file = match OpenOptions::new().create(true).append(true).open(&path).await {
                Ok(f) => f,
                Err(_) => return,
            };

            let mut buf: Vec<u8> = Vec::with_capacity(256);
            while let Some(record) = rx.recv().await {
                buf.clear();
                if serde_json::to_writer(&mut buf, &record).is_err() {
                    continue;
                }
                buf.push(b'\n');
                if file.write_all(&buf).await.is_err() {
                    break;
                }
            }
            let _ = file.flush().await;
        });

        Self {
            tx: Some(tx),
            writer: Some(writer),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    pub fn record(&self, record: Record) {
        if let Some(tx) = self.tx.as_ref() {
            let _ = tx.send(record);
        }
    }

    /// Close the channel; the returned task finishes once every queued
    /// record is on disk
    pub fn close(mut self) -> Option<JoinHandle<()>> {
        self.tx = None;
        self.writer.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pentris-{}-{}.jsonl", name, std::process::id()))
    }

    #[tokio::test]
    async fn test_records_are_appended_as_json_lines() {
        let path = temp_path("journal");
        let _ = std::fs::remove_file(&path);

        let journal = Journal::open(&Handle::current(), &path);
        assert!(journal.is_enabled());
        journal.record(Record::round_started(42, false));
        journal.record(Record::piece_spawned(PieceKind::FMirror, Rotation::South, 1));
        journal.record(Record::status_changed(RoundStatus::Menu));
        journal.close().unwrap().await.unwrap();

        let text = tokio::fs::read_to_string(&path).await.unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["type"], "round_started");
        assert_eq!(lines[0]["seed"], 42);
        assert_eq!(lines[0]["ghost_enabled"], false);
        assert_eq!(lines[1]["type"], "piece_spawned");
        assert_eq!(lines[1]["kind"], "f'");
        assert_eq!(lines[1]["rotation"], 2);
        assert_eq!(lines[2]["status"], "menu");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_disabled_journal_is_a_no_op() {
        let journal = Journal::disabled();
        assert!(!journal.is_enabled());
        journal.record(Record::game_over(100, 1, 1));
        assert!(journal.close().is_none());
    }

    #[test]
    fn test_rows_cleared_record() {
        let report = CascadeReport {
            rows_cleared: 2,
            score_delta: 400,
            level_before: 1,
            level_after: 2,
        };
        match Record::rows_cleared(&report) {
            Record::RowsCleared {
                rows,
                score_delta,
                level,
                leveled_up,
                ..
            } => {
                assert_eq!((rows, score_delta, level, leveled_up), (2, 400, 2, true));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
