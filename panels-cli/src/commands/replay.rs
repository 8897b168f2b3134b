use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use panels::Error;
use panels::queue::{QueueItem, QueueTable};
use panels::socket::{Invalidation, SocketEnvelope, SocketState};
use serde::Deserialize;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::ReplayArgs;

/// The queue endpoint answers either with a bare list or wrapped in the
/// usual `{"error": null, "result": [...]}` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Items(Vec<QueueItem>),
    Wrapped { result: Vec<QueueItem> },
}

impl Snapshot {
    fn into_items(self) -> Vec<QueueItem> {
        match self {
            Snapshot::Items(items) | Snapshot::Wrapped { result: items } => items,
        }
    }
}

#[derive(Debug, Default)]
struct Replay {
    queue: QueueTable,
    socket: SocketState,
    stale: BTreeSet<Invalidation>,
    applied: usize,
    skipped: usize,
}

impl Replay {
    fn new(items: Vec<QueueItem>) -> Self {
        Self {
            queue: QueueTable::new(items),
            ..Self::default()
        }
    }

    /// Feed one transcript line. Blank lines and unknown events are skipped.
    fn feed(&mut self, line_number: usize, line: &str) -> Result<()> {
        if line.trim().is_empty() {
            return Ok(());
        }
        let envelope = SocketEnvelope::parse(line)
            .with_context(|| format!("line {}: not a socket message", line_number))?;
        let event = match envelope.into_event() {
            Ok(event) => event,
            Err(Error::UnknownEvent(name)) => {
                log::warn!("line {}: ignoring unknown event {}", line_number, name);
                self.skipped += 1;
                return Ok(());
            }
            Err(e) => return Err(e).with_context(|| format!("line {}", line_number)),
        };

        log::debug!("line {}: {}", line_number, event.name());
        self.queue.apply_socket_event(&event);
        self.socket.apply(&event);
        self.stale.extend(event.invalidations());
        self.applied += 1;
        Ok(())
    }

    fn print(&self) {
        println!("Queue ({} items):", self.queue.len());
        for (priority, item) in self.queue.items().iter().enumerate() {
            println!(
                "{:>3}  #{:<6} {:<12} {:>5.1}%  {}",
                priority,
                item.id,
                item.status.as_str(),
                item.progress,
                item.title
            );
        }

        println!();
        println!("Events: {} applied, {} skipped", self.applied, self.skipped);
        println!("Connected: {}", self.socket.is_connected());
        if self.socket.search_all_running() {
            println!("Search all: running");
        }
        if self.socket.update_all_running() {
            println!("Update all: running");
        }

        println!();
        println!("Refetch:");
        for stale in &self.stale {
            match stale {
                Invalidation::Queue => println!("  queue"),
                Invalidation::Volume(id) => println!("  volume {}", id),
                Invalidation::AllVolumes => println!("  volumes"),
                Invalidation::Stats => println!("  stats"),
            }
        }
    }
}

async fn read_snapshot(path: &Path) -> Result<Vec<QueueItem>> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let snapshot: Snapshot = serde_json::from_slice(&raw)
        .with_context(|| format!("{} is not a queue snapshot", path.display()))?;
    Ok(snapshot.into_items())
}

pub async fn replay(args: &ReplayArgs) -> Result<()> {
    let items = read_snapshot(&args.queue).await?;
    log::info!("Loaded {} queue items from {}", items.len(), args.queue.display());
    let mut replay = Replay::new(items);

    let file = File::open(&args.events)
        .await
        .with_context(|| format!("failed to open {}", args.events.display()))?;
    let mut lines = BufReader::new(file).lines();
    let mut line_number = 0;
    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        replay.feed(line_number, &line)?;
    }

    replay.print();
    Ok(())
}
