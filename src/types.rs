// src/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The external enumeration tools, in the order they run and merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Amass,
    Sublist3r,
    Ffuf,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Amass, Tool::Sublist3r, Tool::Ffuf];

    /// Key used in the wordlist config file
    pub fn key(&self) -> &'static str {
        match self {
            Tool::Amass => "amass",
            Tool::Sublist3r => "sublist3r",
            Tool::Ffuf => "ffuf",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tool::Amass => "Amass",
            Tool::Sublist3r => "Sublist3r",
            Tool::Ffuf => "FFUF",
        }
    }

    /// File the tool writes its results to, relative to the working directory
    pub fn output_file(&self) -> &'static str {
        match self {
            Tool::Amass => "amass_output.txt",
            Tool::Sublist3r => "sublist3r_output.txt",
            Tool::Ffuf => "ffuf_output.txt",
        }
    }

    /// Entry number in the customization menu
    pub fn menu_index(&self) -> u8 {
        match self {
            Tool::Amass => 1,
            Tool::Sublist3r => 2,
            Tool::Ffuf => 3,
        }
    }

    pub fn from_menu_choice(choice: &str) -> Option<Tool> {
        Tool::ALL
            .into_iter()
            .find(|tool| choice == tool.menu_index().to_string())
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Wordlist path per tool. Field order is the key order of the saved JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordlistConfig {
    pub amass: String,
    pub sublist3r: String,
    pub ffuf: String,
}

impl Default for WordlistConfig {
    fn default() -> Self {
        Self {
            amass: "amass_default_wordlist.txt".to_string(),
            sublist3r: "sublist3r_default_wordlist.txt".to_string(),
            ffuf: "ffuf_default_wordlist.txt".to_string(),
        }
    }
}

impl WordlistConfig {
    pub fn get(&self, tool: Tool) -> &str {
        match tool {
            Tool::Amass => &self.amass,
            Tool::Sublist3r => &self.sublist3r,
            Tool::Ffuf => &self.ffuf,
        }
    }

    pub fn set(&mut self, tool: Tool, wordlist: String) {
        match tool {
            Tool::Amass => self.amass = wordlist,
            Tool::Sublist3r => self.sublist3r = wordlist,
            Tool::Ffuf => self.ffuf = wordlist,
        }
    }
}

/// Startup configuration shared by the store, the runner and the merger.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: PathBuf,
    pub work_dir: PathBuf,
    pub merged_output: String,
    pub default_wordlists: WordlistConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("wordlists_config.json"),
            work_dir: PathBuf::from("."),
            merged_output: "final_output.txt".to_string(),
            default_wordlists: WordlistConfig::default(),
        }
    }
}

impl Settings {
    /// Settings rooted at `dir`: the config file and all outputs live there.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let work_dir = dir.into();
        Self {
            config_path: work_dir.join("wordlists_config.json"),
            work_dir,
            ..Self::default()
        }
    }

    pub fn merged_output_path(&self) -> PathBuf {
        self.work_dir.join(&self.merged_output)
    }
}

/// A fully described external process call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub tool: Tool,
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: PathBuf,
    pub output_file: PathBuf,
}

impl ToolInvocation {
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// How an external process ended. Failures are reported, never raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Exited(Option<i32>),
    FailedToStart(String),
}

impl Completion {
    pub fn success(&self) -> bool {
        matches!(self, Completion::Exited(Some(0)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    pub output: PathBuf,
    pub included: Vec<Tool>,
    pub bytes_written: usize,
}

#[derive(Debug, Error)]
pub enum SubenumError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{context}: {message}")]
    Context { context: String, message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    PromptError(String),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}
