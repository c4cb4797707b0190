//! Reloads the gallery when charts are regenerated on disk.

use chart_source::is_chart_file;
use cosmic::iced::Subscription;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum WatcherEvent {
    /// A chart image was added, removed or rewritten.
    ChartsChanged(PathBuf),
    Error(String),
}

fn chart_change(event: Event) -> Option<WatcherEvent> {
    let relevant = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Remove(_) | EventKind::Modify(_)
    );

    if !relevant {
        return None;
    }

    event
        .paths
        .into_iter()
        .find(|path| is_chart_file(path))
        .map(WatcherEvent::ChartsChanged)
}

pub fn watch_charts(dir: Option<PathBuf>) -> Subscription<WatcherEvent> {
    Subscription::run_with_id(
        dir.clone(),
        cosmic::iced::stream::channel(100, move |mut output| async move {
            use cosmic::iced_futures::futures::SinkExt;

            let Some(dir) = dir else {
                std::future::pending::<()>().await;
                unreachable!()
            };

            let (tx, mut rx) = mpsc::channel(100);

            let watcher = RecommendedWatcher::new(
                move |res: Result<Event, notify::Error>| {
                    let _ = tx.blocking_send(res);
                },
                Config::default(),
            )
            .and_then(|mut watcher| {
                watcher.watch(&dir, RecursiveMode::NonRecursive)?;
                Ok(watcher)
            });

            // Held for the lifetime of the stream, dropping it stops the events.
            let _watcher = match watcher {
                Ok(watcher) => watcher,
                Err(e) => {
                    tracing::warn!("cannot watch {}: {e}", dir.display());
                    let _ = output.send(WatcherEvent::Error(e.to_string())).await;
                    std::future::pending::<()>().await;
                    unreachable!()
                }
            };

            while let Some(result) = rx.recv().await {
                let message = match result {
                    Ok(event) => chart_change(event),
                    Err(e) => Some(WatcherEvent::Error(e.to_string())),
                };

                if let Some(message) = message {
                    let _ = output.send(message).await;
                }
            }

            std::future::pending::<()>().await;
            unreachable!()
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind};

    #[test]
    fn test_chart_changes_are_reported() {
        let event = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/charts/ranking.png"));
        assert!(matches!(
            chart_change(event),
            Some(WatcherEvent::ChartsChanged(_))
        ));
    }

    #[test]
    fn test_other_files_are_ignored() {
        let event = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/charts/data.csv"));
        assert!(chart_change(event).is_none());

        let access = Event::new(EventKind::Access(notify::event::AccessKind::Any))
            .add_path(PathBuf::from("/charts/ranking.png"));
        assert!(chart_change(access).is_none());
    }
}
