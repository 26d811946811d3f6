//! Type-safe language labels and the extension → language map.
//!
//! This module defines [`Language`], the closed set of labels the detector can
//! produce, and [`Detection`], the `(language, icon)` pair attached to every
//! scanned folder. The static extension map drives both the single-extension
//! lookups and the histogram fallback of the detector.
//!
//! # Public API
//! - [`Language`]: Enumeration of every label, including the dual labels
//!   (`Java/Kotlin`, `C/C++`) and the explicit `Unknown` sentinel
//! - [`Detection`]: Language plus icon reference
//! - [`language_for_extension`]: Lookup in the extension map
//! - [`RECOGNIZED_EXTENSIONS`]: Every extension the map knows about

use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon used when no language could be determined
pub const FOLDER_ICON: &str = "icons/folder.svg";

/// Primary language label of a project folder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// `package.json` present but unparseable
    #[serde(rename = "JavaScript/TypeScript")]
    JavaScriptTypeScript,
    JavaScript,
    TypeScript,
    React,
    #[serde(rename = "Vue.js")]
    Vue,
    Python,
    Rust,
    Go,
    Ruby,
    #[serde(rename = "C#")]
    CSharp,
    Java,
    Kotlin,
    /// Both `.java` and `.kt` sources next to a JVM build marker
    #[serde(rename = "Java/Kotlin")]
    JavaKotlin,
    #[serde(rename = "C/C++")]
    CCpp,
    /// Makefile without any recognised sources
    #[serde(rename = "C/C++/Other")]
    CCppOther,
    #[serde(rename = "C++")]
    Cpp,
    C,
    Godot,
    Swift,
    Dart,
    #[default]
    Unknown,
}

impl Language {
    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::JavaScriptTypeScript => "JavaScript/TypeScript",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::React => "React",
            Language::Vue => "Vue.js",
            Language::Python => "Python",
            Language::Rust => "Rust",
            Language::Go => "Go",
            Language::Ruby => "Ruby",
            Language::CSharp => "C#",
            Language::Java => "Java",
            Language::Kotlin => "Kotlin",
            Language::JavaKotlin => "Java/Kotlin",
            Language::CCpp => "C/C++",
            Language::CCppOther => "C/C++/Other",
            Language::Cpp => "C++",
            Language::C => "C",
            Language::Godot => "Godot",
            Language::Swift => "Swift",
            Language::Dart => "Dart",
            Language::Unknown => "Unknown",
        }
    }

    /// Default icon reference for this language
    pub fn icon(&self) -> &'static str {
        match self {
            Language::JavaScriptTypeScript | Language::JavaScript => "icons/javascript.svg",
            Language::TypeScript => "icons/typescript.svg",
            Language::React => "icons/react.svg",
            Language::Vue => "icons/vuejs.svg",
            Language::Python => "icons/python.svg",
            Language::Rust => "icons/rust.svg",
            Language::Go => "icons/go.svg",
            Language::Ruby => "icons/ruby.svg",
            Language::CSharp => "icons/csharp.svg",
            Language::Java | Language::JavaKotlin => "icons/java.svg",
            Language::Kotlin => "icons/kotlin.svg",
            Language::CCpp | Language::CCppOther | Language::Cpp => "icons/cpp.svg",
            Language::C => "icons/c.svg",
            Language::Godot => "icons/godot.svg",
            Language::Swift => "icons/swift.svg",
            Language::Dart => "icons/dart.svg",
            Language::Unknown => FOLDER_ICON,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Language::Unknown)
    }

    /// Case-insensitive label comparison, used to match user-entered languages
    pub fn matches_label(&self, label: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(label.trim())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of classifying one directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub language: Language,
    pub icon: String,
}

impl Detection {
    /// Detection using the language's default icon
    pub fn of(language: Language) -> Self {
        Self {
            language,
            icon: language.icon().to_string(),
        }
    }

    pub fn with_icon(language: Language, icon: &str) -> Self {
        Self {
            language,
            icon: icon.to_string(),
        }
    }

    pub fn unknown() -> Self {
        Self::of(Language::Unknown)
    }
}

/// Lowercase extension (with leading dot) → language and icon.
/// `.tsx` keeps the TypeScript label but shows the React icon.
const EXTENSION_LANGUAGES: &[(&str, Language, &str)] = &[
    (".py", Language::Python, "icons/python.svg"),
    (".js", Language::JavaScript, "icons/javascript.svg"),
    (".ts", Language::TypeScript, "icons/typescript.svg"),
    (".tsx", Language::TypeScript, "icons/react.svg"),
    (".vue", Language::Vue, "icons/vuejs.svg"),
    (".rs", Language::Rust, "icons/rust.svg"),
    (".go", Language::Go, "icons/go.svg"),
    (".java", Language::Java, "icons/java.svg"),
    (".kt", Language::Kotlin, "icons/kotlin.svg"),
    (".rb", Language::Ruby, "icons/ruby.svg"),
    (".gd", Language::Godot, "icons/godot.svg"),
    (".swift", Language::Swift, "icons/swift.svg"),
    (".dart", Language::Dart, "icons/dart.svg"),
    (".cpp", Language::Cpp, "icons/cpp.svg"),
    (".c", Language::C, "icons/c.svg"),
    (".cs", Language::CSharp, "icons/csharp.svg"),
];

/// Every extension present in the extension map
pub const RECOGNIZED_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".ts", ".tsx", ".vue", ".rs", ".go", ".java", ".kt", ".rb", ".gd", ".swift",
    ".dart", ".cpp", ".c", ".cs",
];

/// Look up a lowercase, dot-prefixed extension in the extension map
pub fn language_for_extension(extension: &str) -> Option<Detection> {
    EXTENSION_LANGUAGES
        .iter()
        .find(|(ext, _, _)| *ext == extension)
        .map(|(_, language, icon)| Detection::with_icon(*language, icon))
}

/// Lowercased, dot-prefixed extension of a file name.
///
/// Dotfiles without a further dot (`.gitignore`) have no extension.
pub fn extension_of(name: &str) -> Option<String> {
    std::path::Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}
