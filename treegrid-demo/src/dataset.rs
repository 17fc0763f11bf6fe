//! Sample dataset types and loading.

use serde::Deserialize;
use thiserror::Error;
use treegrid::TreeRecord;

/// One entry of the demo dataset: a named item with an optional size
/// and nested children.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleRecord {
    pub name: String,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub children: Vec<SampleRecord>,
}

impl TreeRecord for SampleRecord {
    fn children(&self) -> &[Self] {
        &self.children
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "name" => Some(self.name.clone()),
            "size" => self.size.clone(),
            _ => None,
        }
    }
}

/// Errors loading a dataset from disk.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a dataset from a JSON file.
pub fn load(path: &str) -> Result<SampleRecord, DatasetError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Built-in dataset used when no file is given.
pub fn sample() -> SampleRecord {
    branch(
        "workspace",
        vec![
            branch(
                "src",
                vec![leaf("lib.rs", "4 KB"), leaf("grid.rs", "12 KB")],
            ),
            branch("tests", vec![leaf("render.rs", "9 KB")]),
            leaf("Cargo.toml", "1 KB"),
        ],
    )
}

fn branch(name: &str, children: Vec<SampleRecord>) -> SampleRecord {
    SampleRecord {
        name: name.to_string(),
        size: None,
        children,
    }
}

fn leaf(name: &str, size: &str) -> SampleRecord {
    SampleRecord {
        name: name.to_string(),
        size: Some(size.to_string()),
        children: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dataset() {
        let raw = r#"{"name": "root", "children": [{"name": "a", "size": "1 KB"}]}"#;
        let record: SampleRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.name, "root");
        assert_eq!(record.children().len(), 1);
        assert_eq!(record.children()[0].field("size").as_deref(), Some("1 KB"));
    }

    #[test]
    fn test_sample_shape() {
        let record = sample();
        assert_eq!(record.children().len(), 3);
        assert!(record.field("size").is_none());
    }
}
