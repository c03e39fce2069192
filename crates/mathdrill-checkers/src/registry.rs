//! Checker registry: compiled-in bindings plus descriptor discovery.
//!
//! The registry maps quiz names to checker kinds. Bindings come from a
//! compiled-in table and from `*.toml` descriptor files in an explicitly
//! passed directory — no search path is consulted or mutated. Descriptor
//! files are visited in sorted file-name order so discovery is
//! deterministic on every platform, and a quiz bound by two descriptor
//! files is rejected as a configuration error rather than resolved by
//! discovery order.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use mathdrill_core::traits::Checker;

use crate::arithmetic::ArithmeticChecker;
use crate::fraction::FractionChecker;
use crate::power::PowerChecker;

/// The checker families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckerKind {
    Arithmetic,
    Fraction,
    Power,
}

impl fmt::Display for CheckerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerKind::Arithmetic => write!(f, "arithmetic"),
            CheckerKind::Fraction => write!(f, "fraction"),
            CheckerKind::Power => write!(f, "power"),
        }
    }
}

impl FromStr for CheckerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "arithmetic" => Ok(CheckerKind::Arithmetic),
            "fraction" | "fractions" => Ok(CheckerKind::Fraction),
            "power" | "powers" => Ok(CheckerKind::Power),
            other => Err(format!("unknown checker kind: {other}")),
        }
    }
}

/// Instantiate a checker of the given kind.
pub fn create_checker(kind: CheckerKind) -> Box<dyn Checker> {
    match kind {
        CheckerKind::Arithmetic => Box::new(ArithmeticChecker),
        CheckerKind::Fraction => Box::new(FractionChecker),
        CheckerKind::Power => Box::new(PowerChecker),
    }
}

/// Registry configuration errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// One quiz name is bound by two descriptor files (or twice in one).
    #[error("quiz '{quiz}' is bound by both {first} and {second}")]
    DuplicateBinding {
        quiz: String,
        first: String,
        second: String,
    },
}

/// A `[[checkers]]` descriptor file.
#[derive(Debug, Deserialize)]
struct DescriptorFile {
    #[serde(default)]
    checkers: Vec<DescriptorEntry>,
}

#[derive(Debug, Deserialize)]
struct DescriptorEntry {
    quiz: String,
    kind: CheckerKind,
}

/// Explicit quiz-name → checker-kind bindings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckerRegistry {
    bindings: BTreeMap<String, CheckerKind>,
}

impl CheckerRegistry {
    /// The compiled-in bindings for the stock quizzes.
    pub fn builtin() -> Self {
        let mut bindings = BTreeMap::new();
        bindings.insert("Basic Arithmetic".to_string(), CheckerKind::Arithmetic);
        bindings.insert("Fractions".to_string(), CheckerKind::Fraction);
        bindings.insert("Powers".to_string(), CheckerKind::Power);
        Self { bindings }
    }

    /// Load bindings from the `*.toml` descriptor files in `dir`.
    ///
    /// Files are visited in sorted file-name order. A file that cannot be
    /// read or parsed is skipped with a warning and discovery continues
    /// with the remaining files.
    pub fn discover(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            anyhow::bail!("not a directory: {}", dir.display());
        }

        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
            .with_context(|| format!("failed to read directory: {}", dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .collect();
        paths.sort();

        let mut bindings = BTreeMap::new();
        let mut sources: HashMap<String, PathBuf> = HashMap::new();

        for path in paths {
            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    warn!("skipping {}: {e}", path.display());
                    continue;
                }
            };
            let descriptor: DescriptorFile = match toml::from_str(&content) {
                Ok(descriptor) => descriptor,
                Err(e) => {
                    warn!("skipping {}: {e}", path.display());
                    continue;
                }
            };

            for entry in descriptor.checkers {
                if let Some(first) = sources.get(&entry.quiz) {
                    return Err(RegistryError::DuplicateBinding {
                        quiz: entry.quiz,
                        first: first.display().to_string(),
                        second: path.display().to_string(),
                    }
                    .into());
                }
                sources.insert(entry.quiz.clone(), path.clone());
                bindings.insert(entry.quiz, entry.kind);
            }
        }

        Ok(Self { bindings })
    }

    /// The effective registry: the compiled-in table with descriptors from
    /// `dir` layered on top when the directory exists.
    pub fn load(dir: &Path) -> Result<Self> {
        if dir.is_dir() {
            Ok(Self::builtin().with_overrides(Self::discover(dir)?))
        } else {
            Ok(Self::builtin())
        }
    }

    /// Layer `overrides` on top of this registry; an override for an
    /// existing name wins.
    pub fn with_overrides(mut self, overrides: CheckerRegistry) -> Self {
        for (quiz, kind) in overrides.bindings {
            if let Some(previous) = self.bindings.insert(quiz.clone(), kind) {
                if previous != kind {
                    debug!("binding for '{quiz}' overrides {previous} with {kind}");
                }
            }
        }
        self
    }

    pub fn contains(&self, quiz: &str) -> bool {
        self.bindings.contains_key(quiz)
    }

    /// The bound kind for a quiz, if any.
    pub fn kind_of(&self, quiz: &str) -> Option<CheckerKind> {
        self.bindings.get(quiz).copied()
    }

    /// Bound quiz names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Instantiate the checker bound to `quiz`, if any.
    pub fn create(&self, quiz: &str) -> Option<Box<dyn Checker>> {
        self.bindings.get(quiz).map(|kind| create_checker(*kind))
    }

    /// Instantiate every binding into the quiz-name → checker map the
    /// catalog consumes.
    pub fn instantiate_all(&self) -> HashMap<String, Box<dyn Checker>> {
        self.bindings
            .iter()
            .map(|(quiz, kind)| (quiz.clone(), create_checker(*kind)))
            .collect()
    }
}
