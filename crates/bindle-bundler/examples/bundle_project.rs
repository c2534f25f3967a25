//! Bundle a small on-disk project and print the result.
//!
//! This example demonstrates:
//! - Writing a fixture project to a temporary directory
//! - Configuring BundleOptions with a working directory and a plugin
//! - Inspecting per-module metadata on the result

use std::sync::Arc;

use bindle_bundler::{BannerPlugin, BundleOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir().join("bindle-example");
    std::fs::create_dir_all(&dir)?;
    std::fs::write(
        dir.join("math.js"),
        "export const add = (a, b) => a + b;\nexport default add;\n",
    )?;
    std::fs::write(
        dir.join("main.js"),
        "import add, { add as plus } from './math.js';\nconsole.log(add(1, plus(2, 3)));\n",
    )?;

    let result = BundleOptions::new("main.js")
        .cwd(&dir)
        .plugin(Arc::new(BannerPlugin::new("/* bundled with bindle */")))
        .bundle()
        .await?;

    println!("Bundled {} modules:", result.modules.len());
    for module in &result.modules {
        println!(
            "  [{}] {} ({} bytes, exports: {})",
            module.id,
            module.key,
            module.original_size,
            module.exports.join(", ")
        );
    }

    println!("\n{}", result.code);
    Ok(())
}
