//! JavaScript Scaffold
//!
//! Starter files for a JavaScript functions codebase.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::prompt::Prompter;
use crate::types::FunctionsInstance;

use super::{offer_npm_install, write_if_absent};

const INDEX_JS: &str = r#"/**
 * Import function triggers from their respective submodules:
 *
 *   const { onRequest } = require("firebase-functions/v2/https");
 *   const { onDocumentWritten } = require("firebase-functions/v2/firestore");
 *
 * See a full list of supported triggers at https://firebase.google.com/docs/functions
 */

// const { onRequest } = require("firebase-functions/v2/https");
// const logger = require("firebase-functions/logger");

// Create and deploy your first functions
// https://firebase.google.com/docs/functions/get-started

// exports.helloWorld = onRequest((request, response) => {
//   logger.info("Hello logs!", { structuredData: true });
//   response.send("Hello from Firebase!");
// });
"#;

const GITIGNORE: &str = "node_modules/\n*.local\n";

fn package_json(codebase: &str) -> String {
    format!(
        r#"{{
  "name": "{}",
  "description": "Cloud Functions",
  "scripts": {{
    "serve": "firebase emulators:start --only functions",
    "deploy": "firebase deploy --only functions",
    "logs": "firebase functions:log"
  }},
  "engines": {{
    "node": "20"
  }},
  "main": "index.js",
  "dependencies": {{
    "firebase-admin": "^12.1.0",
    "firebase-functions": "^5.0.0"
  }},
  "private": true
}}
"#,
        codebase
    )
}

/// Write the JavaScript starter files and offer a dependency install.
pub async fn setup(
    instance: &FunctionsInstance,
    source_dir: &Path,
    prompter: &dyn Prompter,
) -> Result<()> {
    println!(
        "{}",
        format!(
            "  Initializing JavaScript codebase {} in {}/\n",
            instance.codebase, instance.source
        )
        .cyan()
    );

    write_if_absent(source_dir, "package.json", &package_json(&instance.codebase))?;
    write_if_absent(source_dir, "index.js", INDEX_JS)?;
    write_if_absent(source_dir, ".gitignore", GITIGNORE)?;

    offer_npm_install(source_dir, prompter).await
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use crate::prompt::scripted::ScriptedPrompter;

    #[test]
    fn test_package_json_uses_codebase_name() {
        let json: serde_json::Value = serde_json::from_str(&package_json("api")).unwrap();
        assert_eq!(json["name"], "api");
        assert_eq!(json["main"], "index.js");
    }

    #[tokio::test]
    async fn test_setup_writes_starter_files() {
        let dir: PathBuf =
            std::env::temp_dir().join(format!("firefn-js-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let instance = FunctionsInstance {
            source: "fns".to_string(),
            codebase: "api".to_string(),
        };
        let prompter = ScriptedPrompter::new().with_confirms(&[false]);

        setup(&instance, &dir, &prompter).await.unwrap();

        assert!(dir.join("package.json").exists());
        assert!(dir.join("index.js").exists());
        assert!(dir.join(".gitignore").exists());
    }
}
