//! Primary language detection for a single project directory.
//!
//! Classification is a fixed cascade where the first step that produces a
//! result wins:
//!
//! 1. **Manifest markers** in order: `package.json`, `requirements.txt`,
//!    `Cargo.toml`, `go.mod`, `Gemfile`, `tsconfig.json`. `package.json` is
//!    refined by its dependencies (React, then Vue, then TypeScript, else
//!    JavaScript).
//! 2. **Conventional source folders** (`src`, `app`, `source`, `lib`): a C#
//!    entry point or `.cs` file wins outright, otherwise the most frequent
//!    recognised extension among the folder's children, otherwise the same
//!    probe one level further down.
//! 3. **Ambiguous build markers** (`Makefile`, `gradle.properties`,
//!    `pom.xml`): flat counts of JVM and native extensions in the root pick
//!    between Java, Kotlin, Java/Kotlin and C/C++, falling back to the
//!    marker's guess.
//! 4. **Histogram** of the root's immediate children.
//!
//! If nothing matches the result is `Unknown` with the folder icon. No step
//! can fail: unreadable directories, missing files and malformed manifests
//! all fall through to the next step.
//!
//! Ties in the histogram steps are deterministic: entries are visited in
//! sorted order and extensions compared lexicographically, so among equally
//! frequent recognised extensions the lexicographically smallest wins.

use crate::core::extension_counter::{count_by_extension_flat, count_of};
use crate::core::ignore_patterns::IgnorePatterns;
use crate::core::language::{extension_of, language_for_extension, Detection, Language};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

const PACKAGE_MANIFEST: &str = "package.json";
const TYPESCRIPT_CONFIG: &str = "tsconfig.json";

/// Manifest files checked in order, with the language each one implies
const MANIFEST_MARKERS: &[(&str, Language)] = &[
    (PACKAGE_MANIFEST, Language::JavaScriptTypeScript),
    ("requirements.txt", Language::Python),
    ("Cargo.toml", Language::Rust),
    ("go.mod", Language::Go),
    ("Gemfile", Language::Ruby),
    (TYPESCRIPT_CONFIG, Language::TypeScript),
];

const REACT_DEPENDENCIES: &[&str] = &["react", "react-dom", "@types/react", "@types/react-dom"];
const VUE_DEPENDENCIES: &[&str] = &["vue", "@vue/runtime-core", "@vue/cli-service"];
const TYPESCRIPT_DEPENDENCIES: &[&str] = &["typescript"];

/// Conventional source folder names, probed in order
pub const SOURCE_FOLDERS: &[&str] = &["src", "app", "source", "lib"];

/// Single-file program entry point that marks a C# project
const CSHARP_ENTRY_POINT: &str = "program.cs";
const CSHARP_EXTENSION: &str = ".cs";

/// Build files that do not identify a language on their own
struct BuildMarker {
    file: &'static str,
    guess: Language,
}

const BUILD_MARKERS: &[BuildMarker] = &[
    BuildMarker {
        file: "Makefile",
        guess: Language::CCppOther,
    },
    BuildMarker {
        file: "gradle.properties",
        guess: Language::JavaKotlin,
    },
    BuildMarker {
        file: "pom.xml",
        guess: Language::JavaKotlin,
    },
];

/// Extensions counted next to a build marker
const BUILD_MARKER_EXTENSIONS: &[&str] = &[".kt", ".java", ".c", ".cpp", ".h", ".hpp"];

/// Language detector with a per-path memo.
///
/// The first classification of a path is kept for the lifetime of the
/// detector; later changes on disk are not observed.
#[derive(Debug, Default)]
pub struct LanguageDetector {
    memo: HashMap<PathBuf, Detection>,
}

impl LanguageDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `directory`, serving repeated calls from the memo
    pub fn detect(&mut self, directory: &Path) -> Detection {
        if let Some(cached) = self.memo.get(directory) {
            log::trace!("Detection memo hit for '{}'", directory.display());
            return cached.clone();
        }

        let detection = classify(directory);
        log::debug!(
            "Detected {} for '{}'",
            detection.language,
            directory.display()
        );
        self.memo
            .insert(directory.to_path_buf(), detection.clone());
        detection
    }

    /// Number of memoized paths
    pub fn memoized(&self) -> usize {
        self.memo.len()
    }

    pub fn is_memoized(&self, directory: &Path) -> bool {
        self.memo.contains_key(directory)
    }
}

/// Run the full cascade on `directory` without memoization
pub fn classify(directory: &Path) -> Detection {
    let patterns = IgnorePatterns::load(directory);

    detect_from_manifests(directory)
        .or_else(|| detect_from_source_folders(directory, &patterns))
        .or_else(|| detect_from_build_markers(directory))
        .or_else(|| detect_from_histogram(directory, &patterns))
        .unwrap_or_else(Detection::unknown)
}

fn detect_from_manifests(directory: &Path) -> Option<Detection> {
    let (file, language) = MANIFEST_MARKERS
        .iter()
        .find(|(file, _)| directory.join(file).exists())?;

    log::debug!("Manifest '{file}' found in '{}'", directory.display());

    if *file == PACKAGE_MANIFEST {
        return Some(classify_package_manifest(directory));
    }
    Some(Detection::of(*language))
}

/// Refine a `package.json` project by its declared dependencies
fn classify_package_manifest(directory: &Path) -> Detection {
    let Some(dependencies) = read_package_dependencies(&directory.join(PACKAGE_MANIFEST)) else {
        return Detection::with_icon(
            Language::JavaScriptTypeScript,
            Language::JavaScript.icon(),
        );
    };

    let has_any = |names: &[&str]| names.iter().any(|name| dependencies.contains_key(*name));

    if has_any(REACT_DEPENDENCIES) {
        Detection::of(Language::React)
    } else if has_any(VUE_DEPENDENCIES) {
        Detection::of(Language::Vue)
    } else if has_any(TYPESCRIPT_DEPENDENCIES) || directory.join(TYPESCRIPT_CONFIG).exists() {
        Detection::of(Language::TypeScript)
    } else {
        Detection::of(Language::JavaScript)
    }
}

/// Merged `dependencies` and `devDependencies` of a package manifest, keeping
/// only entries with a truthy value. `None` when the file cannot be read or
/// is not valid JSON.
fn read_package_dependencies(path: &Path) -> Option<HashMap<String, Value>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::debug!("Could not read '{}': {e}", path.display());
            return None;
        }
    };
    let manifest: Value = match serde_json::from_str(&content) {
        Ok(manifest) => manifest,
        Err(e) => {
            log::debug!("Malformed manifest '{}': {e}", path.display());
            return None;
        }
    };
    if manifest.is_null() {
        return None;
    }

    let mut merged = HashMap::new();
    for section in ["dependencies", "devDependencies"] {
        if let Some(entries) = manifest.get(section).and_then(Value::as_object) {
            for (name, version) in entries {
                merged.insert(name.clone(), version.clone());
            }
        }
    }
    merged.retain(|_, value| is_truthy(value));
    Some(merged)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn detect_from_source_folders(directory: &Path, patterns: &IgnorePatterns) -> Option<Detection> {
    SOURCE_FOLDERS
        .iter()
        .find_map(|folder| scan_source_folder(&directory.join(folder), patterns))
}

fn scan_source_folder(folder: &Path, patterns: &IgnorePatterns) -> Option<Detection> {
    if !folder.is_dir() {
        return None;
    }
    let names = sorted_entry_names(folder)?;

    if names.iter().any(|name| is_csharp_source(name)) {
        log::debug!("C# sources found in '{}'", folder.display());
        return Some(Detection::of(Language::CSharp));
    }

    if let Some(detection) = dominant_language(&names, patterns) {
        return Some(detection);
    }

    names
        .iter()
        .map(|name| folder.join(name))
        .filter(|path| path.is_dir())
        .find_map(|path| scan_source_folder(&path, patterns))
}

fn is_csharp_source(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower == CSHARP_ENTRY_POINT || lower.ends_with(CSHARP_EXTENSION)
}

fn detect_from_build_markers(directory: &Path) -> Option<Detection> {
    let marker = BUILD_MARKERS
        .iter()
        .find(|marker| directory.join(marker.file).exists())?;

    let counts = count_by_extension_flat(directory, BUILD_MARKER_EXTENSIONS);
    let kotlin = count_of(&counts, ".kt");
    let java = count_of(&counts, ".java");
    let native = count_of(&counts, ".c") + count_of(&counts, ".cpp");

    log::debug!(
        "Build marker '{}' in '{}': kt={kotlin} java={java} c/cpp={native}",
        marker.file,
        directory.display()
    );

    let language = match (kotlin > 0, java > 0) {
        (true, false) => Language::Kotlin,
        (false, true) => Language::Java,
        (true, true) => Language::JavaKotlin,
        (false, false) if native > 0 => Language::CCpp,
        (false, false) => marker.guess,
    };
    Some(Detection::of(language))
}

fn detect_from_histogram(directory: &Path, patterns: &IgnorePatterns) -> Option<Detection> {
    let names = sorted_entry_names(directory)?;
    dominant_language(&names, patterns)
}

/// Most frequent recognised extension among `names`, skipping ignored names.
/// A later extension only wins with a strictly higher count.
fn dominant_language(names: &[String], patterns: &IgnorePatterns) -> Option<Detection> {
    let mut histogram: BTreeMap<String, usize> = BTreeMap::new();
    for name in names.iter().filter(|name| !patterns.is_ignored(name)) {
        if let Some(ext) = extension_of(name) {
            *histogram.entry(ext).or_insert(0) += 1;
        }
    }

    let mut best: Option<(usize, Detection)> = None;
    for (ext, count) in &histogram {
        let Some(detection) = language_for_extension(ext) else {
            continue;
        };
        if best.as_ref().map_or(true, |(max, _)| count > max) {
            best = Some((*count, detection));
        }
    }
    best.map(|(_, detection)| detection)
}

/// Entry names of `directory` in sorted order, `None` when unreadable
fn sorted_entry_names(directory: &Path) -> Option<Vec<String>> {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Cannot list '{}': {e}", directory.display());
            return None;
        }
    };
    let mut names: Vec<String> = entries
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    Some(names)
}
