use shared::Thumbnail;
use std::{
    cmp::Ordering,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tokio::task::spawn_blocking;

/// File types chart renderers emit.
pub const EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp"];

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("charts directory {} does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("chart scan was interrupted: {0}")]
    Interrupted(String),
}

/// A chart image found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartEntry {
    pub path: PathBuf,
    pub title: Option<String>,
}

impl ChartEntry {
    pub fn from_path(path: PathBuf) -> Self {
        let title = title_from_path(&path);
        Self { path, title }
    }

    pub fn thumbnail(&self) -> Thumbnail {
        let thumbnail = Thumbnail::new(self.path.to_string_lossy());
        match self.title {
            Some(ref title) => thumbnail.with_description(title.clone()),
            None => thumbnail,
        }
    }
}

/// The directory to show for a user-supplied path: the path itself, or the
/// parent when a single chart file was given.
pub fn resolve_charts_dir(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        path.parent().map(Path::to_path_buf)
    } else if path.is_dir() {
        Some(path.to_path_buf())
    } else {
        None
    }
}

pub async fn scan_charts(dir: &Path, include_hidden: bool) -> Result<Vec<ChartEntry>, ScanError> {
    let dir = dir.to_path_buf();

    spawn_blocking(move || scan_charts_sync(&dir, include_hidden))
        .await
        .map_err(|e| ScanError::Interrupted(e.to_string()))?
}

pub fn scan_charts_sync(dir: &Path, include_hidden: bool) -> Result<Vec<ChartEntry>, ScanError> {
    if !dir.exists() {
        return Err(ScanError::NotFound(dir.to_path_buf()));
    }

    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut charts: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                tracing::warn!("skipping unreadable entry in {}: {e}", dir.display());
                None
            }
        })
        .filter(|path| path.is_file())
        .filter(|path| {
            // The overlay addresses charts by their path as a string.
            let utf8 = path.to_str().is_some();
            if !utf8 {
                tracing::warn!("skipping chart with a non UTF-8 path: {}", path.display());
            }
            utf8
        })
        .filter(|path| include_hidden || !is_hidden(path))
        .filter(|path| is_chart_file(path))
        .collect();

    charts.sort_by(|a, b| natural_cmp(&file_name(a), &file_name(b)));

    tracing::info!("found {} chart(s) in {}", charts.len(), dir.display());

    Ok(charts.into_iter().map(ChartEntry::from_path).collect())
}

pub fn is_chart_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Human readable title from a chart file name: `top5_regions.png` becomes
/// `Top5 regions`.
pub fn title_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let words: Vec<&str> = stem
        .split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .collect();

    let joined = words.join(" ");
    let mut chars = joined.chars();
    let first = chars.next()?;

    Some(first.to_uppercase().chain(chars).collect())
}

/// Orders names the way people count: `chart2` before `chart10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Runs::new(a);
    let mut right = Runs::new(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ordering = match (is_number(l), is_number(r)) {
                    (true, true) => cmp_numeric(l, r),
                    _ => l.to_lowercase().cmp(&r.to_lowercase()),
                };

                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

fn is_number(run: &str) -> bool {
    run.starts_with(|c: char| c.is_ascii_digit())
}

fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Splits a string into alternating digit and non-digit runs.
struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Runs<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map_or(self.rest.len(), |(idx, _)| idx);

        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(run)
    }
}
