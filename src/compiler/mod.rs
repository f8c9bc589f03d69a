//! Core build pipeline.
//!
//! A build runs as a single synchronous pass: fingerprint the source tree,
//! bail out early when nothing changed, otherwise gather every locale's
//! document, audit each non-default locale against the default, deep-merge
//! each locale over the default, and emit one module per locale.

use std::path::PathBuf;

use serde_json::Value;

use crate::error::BuildError;

pub mod aggregate;
pub mod audit;
pub mod cache;
pub mod emit;
pub mod flatten;
pub mod loader;
pub mod merge;

use aggregate::Aggregation;
use cache::CacheManifest;

/// A locale's translation content: string keys mapping to leaf strings or
/// nested sub-documents. Backed by `serde_json::Map` with `preserve_order`
/// so source key order survives into the emitted artifact.
pub type Document = serde_json::Map<String, Value>;

/// Locale identifier derived from a source file's base name, e.g. `en-us`.
pub type LocaleId = String;

/// Options for one compiler instance.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Root directory holding the translation source files.
    pub translations_root: PathBuf,
    /// Locale used as the completeness baseline and merge fallback.
    /// When absent the whole build is a configured no-op.
    pub default_locale: Option<LocaleId>,
    /// Absolute destination root.
    pub dest_dir: PathBuf,
    /// Path under `dest_dir` where compiled modules are written.
    pub output_path: PathBuf,
}

impl BuildOptions {
    pub fn output_dir(&self) -> PathBuf {
        self.dest_dir.join(&self.output_path)
    }
}

/// What a completed build invocation produced.
#[derive(Debug)]
pub struct BuildReport {
    /// Locales compiled, in emission order.
    pub locales: Vec<LocaleId>,
    /// Paths of the artifacts written (empty for audit-only runs).
    pub artifacts: Vec<PathBuf>,
    /// Human-readable warnings: unreadable files and missing key paths.
    pub warnings: Vec<String>,
}

/// Result of one build invocation.
#[derive(Debug)]
pub enum BuildOutcome {
    /// No default locale is configured; the build is a deliberate no-op.
    NotConfigured,
    /// No tracked input changed since the previous run; outputs untouched.
    Unchanged,
    /// No source file matched the configured default locale. Nothing was
    /// written; any prior artifacts remain on disk.
    MissingDefaultLocale { warnings: Vec<String> },
    /// The pipeline ran to completion.
    Built(BuildReport),
}

/// Compiles translation sources into per-locale modules, keeping a
/// fingerprint manifest between invocations so unchanged inputs skip the
/// whole rebuild.
///
/// The manifest lives on this value rather than in any global state, so
/// separate compiler instances never share caching decisions.
#[derive(Debug)]
pub struct TranslationCompiler {
    options: BuildOptions,
    manifest: Option<CacheManifest>,
}

impl TranslationCompiler {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            manifest: None,
        }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Runs one build invocation.
    ///
    /// The manifest is updated only when the invocation completes without a
    /// fatal error, so a failed build leaves the next invocation to retry a
    /// full rebuild. A missing default locale counts as completion: inputs
    /// were scanned successfully, and re-running before they change would
    /// reproduce the same warning.
    pub fn build(&mut self) -> Result<BuildOutcome, BuildError> {
        let Some(default_locale) = self.options.default_locale.clone() else {
            return Ok(BuildOutcome::NotConfigured);
        };

        let manifest = cache::scan(&self.options.translations_root)?;
        if self.manifest.as_ref() == Some(&manifest) {
            return Ok(BuildOutcome::Unchanged);
        }

        let outcome = self.run_pipeline(&default_locale, true)?;
        self.manifest = Some(manifest);
        Ok(outcome)
    }

    /// Runs aggregation and the completeness audit without writing any
    /// artifact and without touching the cache manifest.
    pub fn check(&self) -> Result<BuildOutcome, BuildError> {
        let Some(default_locale) = self.options.default_locale.clone() else {
            return Ok(BuildOutcome::NotConfigured);
        };

        self.run_pipeline(&default_locale, false)
    }

    fn run_pipeline(
        &self,
        default_locale: &str,
        emit_artifacts: bool,
    ) -> Result<BuildOutcome, BuildError> {
        let Aggregation {
            translations,
            mut warnings,
        } = aggregate::gather_translations(&self.options.translations_root)?;

        let Some(default_document) = translations.get(default_locale).cloned() else {
            warnings.push(format!(
                "\"{}\" default locale missing from {}",
                default_locale,
                self.options.translations_root.display()
            ));
            return Ok(BuildOutcome::MissingDefaultLocale { warnings });
        };

        let default_paths = flatten::flatten(&default_document);

        let output_dir = self.options.output_dir();
        if emit_artifacts {
            emit::ensure_output_dir(&output_dir)?;
        }

        let mut locales = Vec::new();
        let mut artifacts = Vec::new();

        for (locale, document) in &translations {
            if locale != default_locale {
                for path in audit::missing_keys(&default_paths, document) {
                    warnings.push(format!("'{}' missing from {}", path, locale));
                }
            }

            if emit_artifacts {
                let merged = merge::deep_merge(&default_document, document);
                let artifact = emit::emit_locale(&output_dir, locale, &merged)?;
                artifacts.push(artifact);
            }
            locales.push(locale.clone());
        }

        Ok(BuildOutcome::Built(BuildReport {
            locales,
            artifacts,
            warnings,
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn options(root: &std::path::Path, dest: &std::path::Path) -> BuildOptions {
        BuildOptions {
            translations_root: root.to_path_buf(),
            default_locale: Some("en-us".to_string()),
            dest_dir: dest.to_path_buf(),
            output_path: PathBuf::from("translations"),
        }
    }

    #[test]
    fn test_build_without_default_locale_is_noop() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        fs::write(src.path().join("en-us.json"), r#"{"greeting": "Hello"}"#).unwrap();

        let mut opts = options(src.path(), dest.path());
        opts.default_locale = None;

        let mut compiler = TranslationCompiler::new(opts);
        let outcome = compiler.build().unwrap();

        assert!(matches!(outcome, BuildOutcome::NotConfigured));
        assert!(!dest.path().join("translations").exists());
    }

    #[test]
    fn test_build_emits_one_artifact_per_locale() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        fs::write(
            src.path().join("en-us.json"),
            r#"{"greeting": "Hello {name}"}"#,
        )
        .unwrap();
        fs::write(src.path().join("fr-fr.json"), r#"{}"#).unwrap();

        let mut compiler = TranslationCompiler::new(options(src.path(), dest.path()));
        let outcome = compiler.build().unwrap();

        let BuildOutcome::Built(report) = outcome else {
            panic!("expected a full build");
        };
        assert_eq!(report.locales, vec!["en-us", "fr-fr"]);
        assert_eq!(report.artifacts.len(), 2);
        assert_eq!(report.warnings, vec!["'greeting' missing from fr-fr"]);

        let fr = fs::read_to_string(dest.path().join("translations/fr-fr.js")).unwrap();
        assert_eq!(fr, r#"export default {"greeting":"Hello {name}"};"#);
    }

    #[test]
    fn test_rerun_with_unchanged_inputs_skips_rebuild() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        fs::write(src.path().join("en-us.json"), r#"{"greeting": "Hello"}"#).unwrap();

        let mut compiler = TranslationCompiler::new(options(src.path(), dest.path()));
        assert!(matches!(compiler.build().unwrap(), BuildOutcome::Built(_)));

        let artifact = dest.path().join("translations/en-us.js");
        fs::remove_file(&artifact).unwrap();

        // Second run is gated by the manifest: the deleted output is not
        // rewritten because no input changed.
        assert!(matches!(compiler.build().unwrap(), BuildOutcome::Unchanged));
        assert!(!artifact.exists());
    }

    #[test]
    fn test_changed_input_triggers_rebuild() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        let en = src.path().join("en-us.json");
        fs::write(&en, r#"{"greeting": "Hello"}"#).unwrap();

        let mut compiler = TranslationCompiler::new(options(src.path(), dest.path()));
        assert!(matches!(compiler.build().unwrap(), BuildOutcome::Built(_)));

        fs::write(&en, r#"{"greeting": "Hello again"}"#).unwrap();
        assert!(matches!(compiler.build().unwrap(), BuildOutcome::Built(_)));

        let emitted = fs::read_to_string(dest.path().join("translations/en-us.js")).unwrap();
        assert_eq!(emitted, r#"export default {"greeting":"Hello again"};"#);
    }

    #[test]
    fn test_missing_default_locale_writes_nothing() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        fs::write(src.path().join("fr-fr.json"), r#"{"greeting": "Bonjour"}"#).unwrap();

        let mut compiler = TranslationCompiler::new(options(src.path(), dest.path()));
        let outcome = compiler.build().unwrap();

        let BuildOutcome::MissingDefaultLocale { warnings } = outcome else {
            panic!("expected missing default locale");
        };
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("en-us"));
        assert!(!dest.path().join("translations").exists());
    }

    #[test]
    fn test_nested_merge_scenario() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        fs::write(
            src.path().join("en-us.json"),
            r#"{"a": {"b": "x", "c": "y"}}"#,
        )
        .unwrap();
        fs::write(src.path().join("de-de.json"), r#"{"a": {"c": "z"}}"#).unwrap();

        let mut compiler = TranslationCompiler::new(options(src.path(), dest.path()));
        compiler.build().unwrap();

        let de = fs::read_to_string(dest.path().join("translations/de-de.js")).unwrap();
        assert_eq!(de, r#"export default {"a":{"b":"x","c":"z"}};"#);
    }

    #[test]
    fn test_check_audits_without_writing() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        fs::write(src.path().join("en-us.json"), r#"{"greeting": "Hello"}"#).unwrap();
        fs::write(src.path().join("ja-jp.json"), r#"{}"#).unwrap();

        let compiler = TranslationCompiler::new(options(src.path(), dest.path()));
        let outcome = compiler.check().unwrap();

        let BuildOutcome::Built(report) = outcome else {
            panic!("expected an audit report");
        };
        assert_eq!(report.locales, vec!["en-us", "ja-jp"]);
        assert!(report.artifacts.is_empty());
        assert_eq!(report.warnings, vec!["'greeting' missing from ja-jp"]);
        assert!(!dest.path().join("translations").exists());
    }
}
