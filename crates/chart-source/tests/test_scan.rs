#[cfg(test)]
mod tests {
    use chart_source::{ScanError, resolve_charts_dir, scan_charts};
    use std::fs;
    use tempfile::TempDir;

    fn charts_dir(names: &[&str]) -> TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        for name in names {
            fs::write(dir.path().join(name), b"chart").expect("write chart");
        }
        dir
    }

    #[tokio::test]
    async fn test_scan_filters_and_sorts() {
        let dir = charts_dir(&[
            "chart10.png",
            "chart2.png",
            "data.csv",
            ".hidden.png",
            "ranking.jpg",
            "legend.svg",
        ]);
        fs::create_dir(dir.path().join("nested.png")).expect("create subdir");

        let charts = scan_charts(dir.path(), false).await.expect("scan");
        let names: Vec<String> = charts
            .iter()
            .filter_map(|entry| entry.path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["chart2.png", "chart10.png", "ranking.jpg"]);
        assert_eq!(charts[2].title.as_deref(), Some("Ranking"));
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_scan_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        use std::path::PathBuf;

        let dir = charts_dir(&["ranking.png"]);
        let name = OsStr::from_bytes(b"wykres_\xff.png");
        fs::write(dir.path().join(name), b"chart").expect("write chart");

        let charts = scan_charts(dir.path(), false).await.expect("scan");

        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].title.as_deref(), Some("Ranking"));
        for chart in &charts {
            assert!(PathBuf::from(chart.thumbnail().src).exists());
        }
    }

    #[tokio::test]
    async fn test_scan_includes_hidden_when_asked() {
        let dir = charts_dir(&[".hidden.png", "visible.png"]);

        let charts = scan_charts(dir.path(), true).await.expect("scan");
        assert_eq!(charts.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_directory() {
        let dir = charts_dir(&[]);
        let missing = dir.path().join("nope");

        let result = scan_charts(&missing, false).await;
        assert!(matches!(result, Err(ScanError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_file_is_not_a_directory() {
        let dir = charts_dir(&["one.png"]);

        let result = scan_charts(&dir.path().join("one.png"), false).await;
        assert!(matches!(result, Err(ScanError::NotADirectory(_))));
    }

    #[test]
    fn test_resolve_from_file() {
        let dir = charts_dir(&["one.png"]);

        assert_eq!(
            resolve_charts_dir(&dir.path().join("one.png")),
            Some(dir.path().to_path_buf())
        );
        assert_eq!(
            resolve_charts_dir(dir.path()),
            Some(dir.path().to_path_buf())
        );
        assert_eq!(resolve_charts_dir(&dir.path().join("missing")), None);
    }
}
