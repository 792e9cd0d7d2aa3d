//! Parse phase: read every `*.json` schema file of every area.

use std::path::{Path, PathBuf};
use tokio::task::JoinSet;

use crate::error::{Result, SchemaError};
use crate::schema::{NamespaceSchema, RawSchemas};
use crate::strip::strip_comments;
use crate::tag::TagLayout;

/// Parses one schema file's contents (comments allowed). `path` is used for error context.
pub fn parse_schema_str(path: &Path, contents: &str) -> Result<Vec<NamespaceSchema>> {
    serde_json::from_str(&strip_comments(contents)).map_err(|source| SchemaError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

async fn parse_file(path: PathBuf) -> Result<Vec<NamespaceSchema>> {
    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| SchemaError::io(&path, e))?;
    parse_schema_str(&path, &contents)
}

/// Lists `dir` and parses its `*.json` files concurrently.
/// Returns `(file name, fragments)` sorted by file name.
pub async fn parse_schema_dir(dir: PathBuf) -> Result<Vec<(String, Vec<NamespaceSchema>)>> {
    let mut entries = tokio::fs::read_dir(&dir)
        .await
        .map_err(|e| SchemaError::io(&dir, e))?;

    let mut join_set = JoinSet::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| SchemaError::io(&dir, e))?
    {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        join_set.spawn(async move {
            let fragments = parse_file(path).await?;
            Ok::<_, SchemaError>((name, fragments))
        });
    }

    let mut files = Vec::with_capacity(join_set.len());
    while let Some(res) = join_set.join_next().await {
        files.push(res??);
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    tracing::debug!("parsed {} schema files in {}", files.len(), dir.display());
    Ok(files)
}

/// Parses the schema directory of every area concurrently and merges the
/// results in area order. A file name already seen in an earlier area is
/// replaced by the later one.
pub async fn parse_areas(layout: &TagLayout, areas: &[String], subpath: &[String]) -> Result<RawSchemas> {
    let mut join_set = JoinSet::new();
    for (idx, area) in areas.iter().enumerate() {
        let dir = layout.schema_dir(area, subpath);
        join_set.spawn(async move { parse_schema_dir(dir).await.map(|files| (idx, files)) });
    }

    let mut per_area = Vec::with_capacity(areas.len());
    while let Some(res) = join_set.join_next().await {
        per_area.push(res??);
    }
    per_area.sort_by_key(|(idx, _)| *idx);

    let mut raw = RawSchemas::new();
    for (idx, files) in per_area {
        for (name, fragments) in files {
            if raw.insert(name.clone(), fragments).is_some() {
                tracing::warn!(
                    "schema file {} from area {} replaces an earlier area's copy",
                    name,
                    areas[idx]
                );
            }
        }
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::VersionTag;
    use std::fs;

    fn write(dir: &Path, name: &str, body: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), body).unwrap();
    }

    fn subpath() -> Vec<String> {
        vec!["components".into(), "extensions".into(), "schemas".into()]
    }

    #[test]
    fn parse_schema_str_reports_path() {
        let err = parse_schema_str(Path::new("/x/broken.json"), "[{\"namespace\": }]").unwrap_err();
        assert!(matches!(err, SchemaError::Parse { .. }));
        assert!(err.to_string().contains("/x/broken.json"));
    }

    #[tokio::test]
    async fn parse_areas_reads_json_only_and_merges() {
        let root = tempfile::tempdir().unwrap();
        let layout = TagLayout::new(VersionTag::new("T"), root.path(), "repo");
        let areas = vec!["browser".to_string(), "toolkit".to_string()];
        let browser = layout.schema_dir("browser", &subpath());
        let toolkit = layout.schema_dir("toolkit", &subpath());

        write(&browser, "tabs.json", r#"// tabs
[{"namespace": "tabs", "functions": []}]"#);
        write(&browser, "jar.mn", "not json");
        write(&toolkit, "privacy.json", r#"/* header */ [{"namespace": "privacy"}]"#);
        write(&toolkit, "README.txt", "ignored");

        let raw = parse_areas(&layout, &areas, &subpath()).await.unwrap();
        let names: Vec<&str> = raw.keys().map(String::as_str).collect();
        assert_eq!(names, ["privacy.json", "tabs.json"]);
        assert_eq!(raw["tabs.json"][0].namespace, "tabs");
    }

    #[tokio::test]
    async fn later_area_wins_on_collision() {
        let root = tempfile::tempdir().unwrap();
        let layout = TagLayout::new(VersionTag::new("T"), root.path(), "repo");
        let areas = vec!["browser".to_string(), "toolkit".to_string()];
        write(
            &layout.schema_dir("browser", &subpath()),
            "dup.json",
            r#"[{"namespace": "dup", "from": "browser"}]"#,
        );
        write(
            &layout.schema_dir("toolkit", &subpath()),
            "dup.json",
            r#"[{"namespace": "dup", "from": "toolkit"}]"#,
        );

        let raw = parse_areas(&layout, &areas, &subpath()).await.unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw["dup.json"][0].get("from").unwrap(), "toolkit");
    }

    #[tokio::test]
    async fn malformed_file_fails_whole_run() {
        let root = tempfile::tempdir().unwrap();
        let layout = TagLayout::new(VersionTag::new("T"), root.path(), "repo");
        let areas = vec!["browser".to_string()];
        let dir = layout.schema_dir("browser", &subpath());
        write(&dir, "good.json", r#"[{"namespace": "good"}]"#);
        write(&dir, "bad.json", r#"[{"namespace": "bad",]"#);

        let err = parse_areas(&layout, &areas, &subpath()).await.unwrap_err();
        match err {
            SchemaError::Parse { path, .. } => assert!(path.ends_with("bad.json")),
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_area_dir_is_io_error() {
        let root = tempfile::tempdir().unwrap();
        let layout = TagLayout::new(VersionTag::new("T"), root.path(), "repo");
        let areas = vec!["browser".to_string()];
        let err = parse_areas(&layout, &areas, &subpath()).await.unwrap_err();
        assert!(matches!(err, SchemaError::Io { .. }));
    }
}
