//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use numbertext::{
    FsReader, LanguageTag, ModuleReader, Numbertext, ReadError, Resolver, RuleModule, WideText,
};
use tempfile::TempDir;

/// A lookup-table rule module.
///
/// Each source line is `<number> <text>`; a line starting with `#` names the
/// module so tests can tell which file was loaded.
#[derive(Debug)]
pub struct Table {
    pub name: String,
    pub language: LanguageTag,
    entries: HashMap<String, String>,
}

impl RuleModule for Table {
    fn compile(source: WideText, language: &LanguageTag) -> Self {
        let source = source.to_string();
        let mut name = String::new();
        let mut entries = HashMap::new();
        for line in source.lines() {
            if let Some(rest) = line.strip_prefix('#') {
                name = rest.trim().to_string();
            } else if let Some((number, text)) = line.split_once(' ') {
                entries.insert(number.to_string(), text.to_string());
            }
        }
        Table {
            name,
            language: language.clone(),
            entries,
        }
    }

    fn run(&self, number: &mut WideText) {
        if let Some(text) = self.entries.get(&number.to_string()) {
            number.set(text);
        }
    }
}

/// Records every path read, delegating to the filesystem.
#[derive(Debug, Default)]
pub struct CountingReader {
    reads: Mutex<Vec<PathBuf>>,
}

impl CountingReader {
    pub fn reads(&self) -> Vec<PathBuf> {
        self.reads.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.reads.lock().unwrap().len()
    }

    /// File names of every read, in order.
    pub fn file_names(&self) -> Vec<String> {
        self.reads()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }
}

impl ModuleReader for CountingReader {
    fn read(&self, path: &Path) -> Result<WideText, ReadError> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        FsReader.read(path)
    }
}

/// A temporary directory of rule module files.
pub struct ModuleDir {
    pub dir: TempDir,
}

impl ModuleDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Write `<stem>.sor` named `stem` with the given table lines.
    pub fn module(self, stem: &str, lines: &[&str]) -> Self {
        let mut content = format!("# {stem}\n");
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        fs::write(self.path(&format!("{stem}.sor")), content).unwrap();
        self
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.dir.path().join(file_name)
    }

    pub fn resolver(&self) -> Resolver {
        Resolver::builder().module_dir(self.dir.path()).build()
    }

    /// A facade over this directory that counts its reads.
    pub fn numbertext(&self) -> (Numbertext<Table>, Arc<CountingReader>) {
        let reader = Arc::new(CountingReader::default());
        let numbertext = Numbertext::builder()
            .resolver(self.resolver())
            .reader(Box::new(Arc::clone(&reader)))
            .build();
        (numbertext, reader)
    }
}
