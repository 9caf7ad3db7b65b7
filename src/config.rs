use crate::error::{AssessorError, Result};
use crate::types::config::AssessorConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "assessor.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".assessor/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/assessor/config.toml";

pub fn load_config(root: &Path) -> Result<AssessorConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Layers global, directory and local settings; later files win key by key.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<AssessorConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: AssessorConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| AssessorError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| AssessorError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::MatchMode;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert_eq!(cfg.match_mode(), MatchMode::Fuzzy);
        assert_eq!(cfg.top_recommendations(), 3);
    }

    #[test]
    fn load_config_merges_global_directory_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[engine]
top_recommendations = 5

[logging]
level = "info"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[engine]
match_mode = "strict"

[logging]
level = "debug"
"#,
        )
        .expect("directory config should write");

        fs::create_dir_all(root.path().join(".assessor")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[engine]
top_recommendations = 2
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed");

        assert_eq!(cfg.match_mode(), MatchMode::Strict);
        assert_eq!(cfg.top_recommendations(), 2);
        assert_eq!(cfg.log_level(), "debug");
    }

    #[test]
    fn load_config_reports_file_path_on_parse_error() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[engine\n").expect("write");

        let err = load_config_with_global(root.path(), None).expect_err("parse should fail");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }
}
