//! Single-pass AST analysis.
//!
//! Walks a module's top-level statements once, inspecting only static
//! import declarations, named export declarations, and default export
//! declarations. Each recognized node contributes one positional edit
//! that rewrites the module syntax into the emitted `require`-style
//! format; everything else, including code inside function bodies and
//! classes, is preserved byte-for-byte.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    BindingPatternKind, Declaration, ExportDefaultDeclarationKind, ImportDeclarationSpecifier,
    ModuleDeclaration, ModuleExportName,
};
use oxc_span::GetSpan;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::warn;

use bindle_graph::{
    classify, resolve, Edit, ExportSet, Import, ImportSpecifier, ModuleKey, SourceSpan,
    SpecifierKind,
};

use crate::emit::js_quote;
use crate::parser::parse_program;
use crate::Result;

/// Everything the analyzer learns about one module: the positional edits
/// rewriting its module syntax, its import and export descriptors, and
/// the export assignments to append after the body.
#[derive(Debug)]
pub struct ModuleAnalysis {
    pub edits: Vec<Edit>,
    pub imports: Vec<Import>,
    pub exports: ExportSet,
    pub trailing_assignments: Vec<String>,
    pub satisfied: FxHashSet<String>,
}

/// Parse and analyze one module in a single pass.
///
/// The AST lives only inside this call; the returned analysis owns all of
/// its data. `cwd` anchors the working-directory-relative form used in
/// rewritten `require` calls, which must match the emitted module table.
pub fn analyze_module(source: &str, key: &ModuleKey, cwd: &Path) -> Result<ModuleAnalysis> {
    let allocator = Allocator::default();
    let parsed = parse_program(&allocator, source, key.path())?;

    let mut analyzer = Analyzer {
        source,
        key,
        cwd,
        edits: Vec::new(),
        imports: Vec::new(),
        exports: ExportSet::new(),
        trailing: Vec::new(),
        satisfied: FxHashSet::default(),
        alias_counts: FxHashMap::default(),
    };

    for stmt in &parsed.program.body {
        let Some(module_decl) = stmt.as_module_declaration() else {
            continue;
        };
        match module_decl {
            ModuleDeclaration::ImportDeclaration(import) => analyzer.import_declaration(import),
            ModuleDeclaration::ExportNamedDeclaration(named) => {
                analyzer.export_named_declaration(named)
            }
            ModuleDeclaration::ExportDefaultDeclaration(default) => {
                analyzer.export_default_declaration(default)
            }
            ModuleDeclaration::ExportAllDeclaration(all) => {
                warn!(
                    module = %analyzer.key,
                    source = all.source.value.as_str(),
                    "`export * from` is not supported; statement left unchanged"
                );
            }
            _ => {}
        }
    }

    Ok(ModuleAnalysis {
        edits: analyzer.edits,
        imports: analyzer.imports,
        exports: analyzer.exports,
        trailing_assignments: analyzer.trailing,
        satisfied: analyzer.satisfied,
    })
}

struct Analyzer<'a> {
    source: &'a str,
    key: &'a ModuleKey,
    cwd: &'a Path,
    edits: Vec<Edit>,
    imports: Vec<Import>,
    exports: ExportSet,
    trailing: Vec<String>,
    satisfied: FxHashSet<String>,
    alias_counts: FxHashMap<String, u32>,
}

impl Analyzer<'_> {
    /// Map a specifier to the path text used in the rewritten `require`
    /// call, plus the canonical key when the specifier is a resolvable
    /// local file. External and unresolvable specifiers keep their
    /// original text; the latter fail at runtime with the runtime's own
    /// "Module not found" error if ever required.
    fn require_target(&self, specifier: &str) -> (String, Option<ModuleKey>) {
        match classify(specifier) {
            SpecifierKind::External => (specifier.to_string(), None),
            SpecifierKind::Local => match resolve(self.key, specifier) {
                Ok(resolved) => (resolved.relative_display(self.cwd), Some(resolved)),
                Err(err) => {
                    warn!(
                        module = %self.key,
                        specifier,
                        error = %err,
                        "unresolvable local import; specifier left as written"
                    );
                    (specifier.to_string(), None)
                }
            },
        }
    }

    fn import_declaration(&mut self, import: &oxc_ast::ast::ImportDeclaration<'_>) {
        let specifier = import.source.value.as_str();
        let (target, resolved) = self.require_target(specifier);
        let require = format!("require({})", js_quote(&target));

        let mut namespace: Option<String> = None;
        let mut default: Option<String> = None;
        let mut named: Vec<(String, String)> = Vec::new();
        let mut recorded: Vec<ImportSpecifier> = Vec::new();

        if let Some(specs) = &import.specifiers {
            for spec in specs {
                match spec {
                    ImportDeclarationSpecifier::ImportNamespaceSpecifier(ns) => {
                        let local = ns.local.name.to_string();
                        recorded.push(ImportSpecifier::Namespace {
                            local: local.clone(),
                        });
                        namespace = Some(local);
                    }
                    ImportDeclarationSpecifier::ImportDefaultSpecifier(def) => {
                        let local = def.local.name.to_string();
                        recorded.push(ImportSpecifier::Default {
                            local: local.clone(),
                        });
                        default = Some(local);
                    }
                    ImportDeclarationSpecifier::ImportSpecifier(named_spec) => {
                        let imported = export_name(&named_spec.imported);
                        let local = named_spec.local.name.to_string();
                        recorded.push(ImportSpecifier::Named {
                            imported: imported.clone(),
                            local: local.clone(),
                        });
                        named.push((imported, local));
                    }
                }
            }
        }

        // Binding order: namespace, default, named.
        let mut stmts: Vec<String> = Vec::new();
        if let Some(local) = namespace {
            stmts.push(format!("const {local} = {require};"));
        }
        if let Some(local) = default {
            stmts.push(format!("const {local} = {require}.default;"));
        }
        if !named.is_empty() {
            let no_renames = named.iter().all(|(imported, local)| imported == local);
            if no_renames {
                let list = named
                    .iter()
                    .map(|(_, local)| local.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                stmts.push(format!("const {{ {list} }} = {require};"));
            } else {
                for (imported, local) in &named {
                    stmts.push(format!(
                        "const {local} = {}{};",
                        require,
                        member_access(imported)
                    ));
                }
            }
        }
        if stmts.is_empty() {
            // Side-effect import: evaluate the module, bind nothing.
            stmts.push(format!("{require};"));
        }

        self.edits.push(Edit::new(
            import.span.start,
            import.span.end,
            stmts.join(" "),
        ));
        self.imports.push(Import {
            source: specifier.to_string(),
            resolved,
            specifiers: recorded,
            span: SourceSpan::new(import.span.start, import.span.end),
        });
    }

    fn export_named_declaration(&mut self, named: &oxc_ast::ast::ExportNamedDeclaration<'_>) {
        if let Some(decl) = &named.declaration {
            // `export const x = …` / `export function f(){}` / `export class C{}`:
            // strip the `export ` keyword and schedule trailing assignments.
            self.edits
                .push(Edit::new(named.span.start, decl.span().start, ""));
            for name in declared_names(decl) {
                self.exports.add_named(&name);
                self.schedule_assignment(&name, &name);
            }
            return;
        }

        if let Some(src) = &named.source {
            // `export { a, b as c } from S`: bind the source module to a
            // fresh alias, then assign each re-exported name through it.
            let specifier = src.value.as_str();
            let (target, resolved) = self.require_target(specifier);
            let alias = self.fresh_alias(specifier);

            let mut parts = vec![format!("const {alias} = require({});", js_quote(&target))];
            for spec in &named.specifiers {
                let local = export_name(&spec.local);
                let exported = export_name(&spec.exported);
                self.exports.add_named(&exported);
                if self.satisfied.insert(exported.clone()) {
                    parts.push(format!(
                        "exports{} = {alias}{};",
                        member_access(&exported),
                        member_access(&local)
                    ));
                }
            }

            self.edits
                .push(Edit::new(named.span.start, named.span.end, parts.join(" ")));
            self.imports.push(Import {
                source: specifier.to_string(),
                resolved,
                specifiers: Vec::new(),
                span: SourceSpan::new(named.span.start, named.span.end),
            });
            return;
        }

        // `export { a, b as c }` without source: plain assignments. A name
        // whose assignment is already scheduled is not assigned twice.
        let mut parts = Vec::new();
        for spec in &named.specifiers {
            let local = export_name(&spec.local);
            let exported = export_name(&spec.exported);
            self.exports.add_named(&exported);
            if self.satisfied.insert(exported.clone()) {
                parts.push(format!("exports{} = {local};", member_access(&exported)));
            }
        }
        self.edits
            .push(Edit::new(named.span.start, named.span.end, parts.join(" ")));
    }

    fn export_default_declaration(
        &mut self,
        default: &oxc_ast::ast::ExportDefaultDeclaration<'_>,
    ) {
        self.exports.mark_default();

        match &default.declaration {
            ExportDefaultDeclarationKind::FunctionDeclaration(func) if func.id.is_some() => {
                let name = func.id.as_ref().map(|id| id.name.to_string()).unwrap_or_default();
                self.edits
                    .push(Edit::new(default.span.start, func.span.start, ""));
                self.schedule_assignment("default", &name);
            }
            ExportDefaultDeclarationKind::ClassDeclaration(class) if class.id.is_some() => {
                let name = class.id.as_ref().map(|id| id.name.to_string()).unwrap_or_default();
                self.edits
                    .push(Edit::new(default.span.start, class.span.start, ""));
                self.schedule_assignment("default", &name);
            }
            payload => {
                // Anonymous function/class or arbitrary expression: the
                // payload text is taken verbatim from its source span.
                let span = payload.span();
                let text = &self.source[span.start as usize..span.end as usize];
                self.edits.push(Edit::new(
                    default.span.start,
                    default.span.end,
                    format!("exports.default = {text};"),
                ));
                self.satisfied.insert("default".to_string());
            }
        }
    }

    /// Schedule a trailing `exports.<name> = <value>;` unless one is
    /// already scheduled for `name`.
    fn schedule_assignment(&mut self, name: &str, value: &str) {
        if self.satisfied.insert(name.to_string()) {
            self.trailing
                .push(format!("exports{} = {value};", member_access(name)));
        }
    }

    /// Alias for a re-export source: `_` plus the specifier with every
    /// non-identifier character replaced by `_`, suffixed with a counter
    /// when the same source is re-exported more than once.
    fn fresh_alias(&mut self, specifier: &str) -> String {
        let sanitized: String = specifier
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect();
        let base = format!("_{sanitized}");
        let count = self.alias_counts.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base
        } else {
            format!("{base}_{count}")
        }
    }
}

/// Identifiers declared by an exported declaration, in declaration order.
/// Destructuring patterns declare no recordable export name.
fn declared_names(decl: &Declaration<'_>) -> Vec<String> {
    match decl {
        Declaration::VariableDeclaration(var) => var
            .declarations
            .iter()
            .filter_map(|declarator| match &declarator.id.kind {
                BindingPatternKind::BindingIdentifier(ident) => Some(ident.name.to_string()),
                _ => None,
            })
            .collect(),
        Declaration::FunctionDeclaration(func) => {
            func.id.iter().map(|id| id.name.to_string()).collect()
        }
        Declaration::ClassDeclaration(class) => {
            class.id.iter().map(|id| id.name.to_string()).collect()
        }
        _ => Vec::new(),
    }
}

fn export_name(name: &ModuleExportName<'_>) -> String {
    match name {
        ModuleExportName::IdentifierName(ident) => ident.name.to_string(),
        ModuleExportName::IdentifierReference(ident) => ident.name.to_string(),
        ModuleExportName::StringLiteral(lit) => lit.value.to_string(),
    }
}

/// Property access for `name`: dot form for plain identifiers, bracket
/// form otherwise (string-literal export names).
fn member_access(name: &str) -> String {
    if is_identifier(name) {
        format!(".{name}")
    } else {
        format!("[{}]", js_quote(name))
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
