//! TypeScript Scaffold
//!
//! Starter files for a TypeScript functions codebase: compiled sources
//! live under `src/`, build output under `lib/`.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::prompt::Prompter;
use crate::types::FunctionsInstance;

use super::{offer_npm_install, write_if_absent};

const INDEX_TS: &str = r#"/**
 * Import function triggers from their respective submodules:
 *
 *   import { onRequest } from "firebase-functions/v2/https";
 *   import { onDocumentWritten } from "firebase-functions/v2/firestore";
 *
 * See a full list of supported triggers at https://firebase.google.com/docs/functions
 */

// import { onRequest } from "firebase-functions/v2/https";
// import * as logger from "firebase-functions/logger";

// Create and deploy your first functions
// https://firebase.google.com/docs/functions/get-started

// export const helloWorld = onRequest((request, response) => {
//   logger.info("Hello logs!", { structuredData: true });
//   response.send("Hello from Firebase!");
// });
"#;

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "module": "commonjs",
    "noImplicitReturns": true,
    "noUnusedLocals": true,
    "outDir": "lib",
    "sourceMap": true,
    "strict": true,
    "target": "es2017"
  },
  "compileOnSave": true,
  "include": ["src"]
}
"#;

const GITIGNORE: &str = "node_modules/\nlib/\n*.local\n";

fn package_json(codebase: &str) -> String {
    format!(
        r#"{{
  "name": "{}",
  "description": "Cloud Functions",
  "scripts": {{
    "build": "tsc",
    "build:watch": "tsc --watch",
    "serve": "npm run build && firebase emulators:start --only functions",
    "deploy": "firebase deploy --only functions",
    "logs": "firebase functions:log"
  }},
  "engines": {{
    "node": "20"
  }},
  "main": "lib/index.js",
  "dependencies": {{
    "firebase-admin": "^12.1.0",
    "firebase-functions": "^5.0.0"
  }},
  "devDependencies": {{
    "typescript": "^5.4.0"
  }},
  "private": true
}}
"#,
        codebase
    )
}

/// Write the TypeScript starter files and offer a dependency install.
pub async fn setup(
    instance: &FunctionsInstance,
    source_dir: &Path,
    prompter: &dyn Prompter,
) -> Result<()> {
    println!(
        "{}",
        format!(
            "  Initializing TypeScript codebase {} in {}/\n",
            instance.codebase, instance.source
        )
        .cyan()
    );

    write_if_absent(source_dir, "package.json", &package_json(&instance.codebase))?;
    write_if_absent(source_dir, "tsconfig.json", TSCONFIG)?;
    write_if_absent(source_dir, "src/index.ts", INDEX_TS)?;
    write_if_absent(source_dir, ".gitignore", GITIGNORE)?;

    offer_npm_install(source_dir, prompter).await
}
