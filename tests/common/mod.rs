// Test utility module for fluentgen integration tests
#![allow(dead_code)]

use fluentgen::assembler::FluentGenerator;
use fluentgen::config::GeneratorConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// JSON manifest describing `com.example.Point`
pub const POINT_MANIFEST: &str = r#"{
  "types": [
    {
      "name": "com.example.Point",
      "constructors": [{ "parameters": ["int", "int"] }],
      "methods": [
        { "name": "setX", "parameters": ["int"] },
        { "name": "setY", "parameters": ["int"] },
        { "name": "addTag", "parameters": ["java.lang.String"] },
        { "name": "getX", "returns": "int" }
      ]
    }
  ]
}"#;

/// TOML manifest with two types in different packages
pub const UI_MANIFEST: &str = r#"
[[types]]
name = "com.example.ui.Button"

[[types.constructors]]
parameters = []

[[types.constructors]]
parameters = ["java.lang.String"]

[[types.methods]]
name = "setCaption"
parameters = ["java.lang.String"]

[[types.methods]]
name = "setEnabled"
parameters = ["boolean"]

[[types.methods]]
name = "setId"
parameters = ["java.lang.String"]

[[types]]
name = "com.example.ui.Label"

[[types.constructors]]
parameters = ["java.lang.String"]

[[types.methods]]
name = "addStyleName"
parameters = ["java.lang.String"]
"#;

/// Temporary workspace holding manifests and generated output
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("generated")
    }

    pub fn read_output(&self, relative: &str) -> String {
        fs::read_to_string(self.output_dir().join(relative)).expect("Failed to read generated file")
    }

    /// Generator writing into `output_dir`, without a dated annotation
    pub fn generator(&self, config: GeneratorConfig) -> FluentGenerator {
        FluentGenerator::from_config(
            config
                .with_target_directory(self.output_dir())
                .with_generated_annotation(false),
        )
        .expect("Failed to build generator")
    }
}
