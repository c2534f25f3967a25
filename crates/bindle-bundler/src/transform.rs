//! Module transformation.
//!
//! Turns an analyzed module record into its emitted body: plugin
//! `preTransform` hooks over the original text, positional edits applied
//! in descending start order, trailing export assignments (scheduled ones
//! plus completion for any exported name not yet satisfied), and plugin
//! `postTransform` hooks over the result. The transformer never
//! re-parses.
//!
//! Records are immutable after analysis, so transforms across the graph
//! run concurrently; the caller reassembles results in discovery order.

use std::path::Path;

use futures::future::try_join_all;

use bindle_graph::{apply_edits, ModuleGraph, ModuleRecord};

use crate::plugin::{ModuleInfo, PluginDriver};
use crate::Result;

/// Transform a single module record into its emitted body.
pub async fn transform_module(
    record: &ModuleRecord,
    plugins: &PluginDriver,
    cwd: &Path,
) -> Result<String> {
    let info = ModuleInfo::for_record(record, cwd);

    let code = plugins
        .pre_transform(record.source.clone(), &info)
        .await?;
    let mut body = apply_edits(&code, &record.edits);

    let completion = record
        .exports
        .named()
        .iter()
        .filter(|name| !record.satisfied.contains(*name))
        .map(|name| format!("exports.{name} = {name};"));
    let additions: Vec<String> = record
        .trailing_assignments
        .iter()
        .cloned()
        .chain(completion)
        .collect();

    if !additions.is_empty() {
        if !body.ends_with('\n') {
            body.push('\n');
        }
        for line in additions {
            body.push_str(&line);
            body.push('\n');
        }
    }

    plugins.post_transform(body, &info).await
}

/// Transform every module in the graph concurrently, returning bodies in
/// discovery order regardless of completion order.
pub async fn transform_graph(
    graph: &ModuleGraph,
    plugins: &PluginDriver,
    cwd: &Path,
) -> Result<Vec<String>> {
    try_join_all(
        graph
            .modules()
            .map(|record| transform_module(record, plugins, cwd)),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindle_graph::ModuleKey;

    fn analyzed_record(source: &str) -> ModuleRecord {
        let key = ModuleKey::new("/proj/mod.js").unwrap();
        let analysis =
            crate::analyzer::analyze_module(source, &key, Path::new("/proj")).unwrap();
        ModuleRecord {
            id: 0,
            key,
            source: source.to_string(),
            edits: analysis.edits,
            imports: analysis.imports,
            exports: analysis.exports,
            trailing_assignments: analysis.trailing_assignments,
            satisfied: analysis.satisfied,
        }
    }

    #[tokio::test]
    async fn appends_exactly_one_assignment_per_export() {
        let record = analyzed_record("export const x = 1;\nexport { x };\n");
        let body = transform_module(&record, &PluginDriver::default(), Path::new("/proj"))
            .await
            .unwrap();
        assert_eq!(body.matches("exports.x = x;").count(), 1);
    }

    #[tokio::test]
    async fn completes_unsatisfied_exports() {
        // A record whose exports set carries a name with no scheduled
        // assignment still gets exactly one completion assignment.
        let mut record = analyzed_record("const q = 1;\n");
        record.exports.add_named("q");
        let body = transform_module(&record, &PluginDriver::default(), Path::new("/proj"))
            .await
            .unwrap();
        assert!(body.contains("exports.q = q;"));
    }

    #[tokio::test]
    async fn bodies_follow_discovery_order() {
        let mut graph = ModuleGraph::new();
        for (id, (path, source)) in [
            ("/proj/main.js", "export const m = 0;"),
            ("/proj/a.js", "export const a = 1;"),
        ]
        .iter()
        .enumerate()
        {
            let mut record = analyzed_record(source);
            record.id = id as u32;
            record.key = ModuleKey::new(*path).unwrap();
            graph.insert(record).unwrap();
        }

        let bodies = transform_graph(&graph, &PluginDriver::default(), Path::new("/proj"))
            .await
            .unwrap();
        assert!(bodies[0].contains("const m = 0;"));
        assert!(bodies[1].contains("const a = 1;"));
    }
}
