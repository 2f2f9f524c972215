// src/runner.rs
use crate::types::{Completion, Tool, ToolInvocation};
use async_trait::async_trait;
use log::{info, warn};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Executes an external process and reports how it ended.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, invocation: &ToolInvocation) -> Completion;
}

/// Runs invocations as real child processes, waiting for each to exit.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner;

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(&self, invocation: &ToolInvocation) -> Completion {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.current_dir)
            .status()
            .await;

        match status {
            Ok(status) => Completion::Exited(status.code()),
            Err(e) => Completion::FailedToStart(e.to_string()),
        }
    }
}

/// Builds the fixed command line of each tool and hands it to a runner.
pub struct ToolRunner<R> {
    runner: R,
    work_dir: PathBuf,
}

impl<R: ProcessRunner> ToolRunner<R> {
    pub fn new(runner: R, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            work_dir: work_dir.into(),
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub async fn run_amass(&self, domain: &str, wordlist: &str) -> Completion {
        self.run(Tool::Amass, domain, wordlist).await
    }

    pub async fn run_sublist3r(&self, domain: &str, wordlist: &str) -> Completion {
        self.run(Tool::Sublist3r, domain, wordlist).await
    }

    pub async fn run_ffuf(&self, domain: &str, wordlist: &str) -> Completion {
        self.run(Tool::Ffuf, domain, wordlist).await
    }

    pub async fn run(&self, tool: Tool, domain: &str, wordlist: &str) -> Completion {
        let invocation = build_invocation(tool, domain, wordlist, &self.work_dir);
        info!("{}: running {}", tool, invocation.command_line());

        let completion = self.runner.run(&invocation).await;
        match &completion {
            Completion::Exited(Some(0)) => info!("{}: finished", tool),
            Completion::Exited(code) => warn!("{}: exited with status {:?}", tool, code),
            Completion::FailedToStart(e) => warn!("{}: failed to start {}: {}", tool, invocation.program, e),
        }

        completion
    }
}

pub fn build_invocation(tool: Tool, domain: &str, wordlist: &str, work_dir: &Path) -> ToolInvocation {
    let output = tool.output_file();
    let (program, args): (&str, Vec<String>) = match tool {
        Tool::Amass => (
            "amass",
            vec![
                "enum".to_string(),
                "-d".to_string(),
                domain.to_string(),
                "-o".to_string(),
                output.to_string(),
                "-w".to_string(),
                wordlist.to_string(),
            ],
        ),
        Tool::Sublist3r => (
            "python3",
            vec![
                "sublist3r.py".to_string(),
                "-d".to_string(),
                domain.to_string(),
                "-o".to_string(),
                output.to_string(),
                "-w".to_string(),
                wordlist.to_string(),
            ],
        ),
        Tool::Ffuf => (
            "ffuf",
            vec![
                "-w".to_string(),
                wordlist.to_string(),
                "-u".to_string(),
                format!("https://FUZZ.{}", domain),
                "-o".to_string(),
                output.to_string(),
            ],
        ),
    };

    ToolInvocation {
        tool,
        program: program.to_string(),
        args,
        current_dir: work_dir.to_path_buf(),
        output_file: work_dir.join(output),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every invocation instead of spawning anything.
    #[derive(Default)]
    pub(crate) struct RecordingRunner {
        pub calls: Mutex<Vec<ToolInvocation>>,
    }

    impl RecordingRunner {
        pub fn tools(&self) -> Vec<Tool> {
            self.calls.lock().unwrap().iter().map(|c| c.tool).collect()
        }
    }

    #[async_trait]
    impl ProcessRunner for RecordingRunner {
        async fn run(&self, invocation: &ToolInvocation) -> Completion {
            self.calls.lock().unwrap().push(invocation.clone());
            Completion::Exited(Some(0))
        }
    }

    #[test]
    fn test_amass_command_line() {
        let inv = build_invocation(Tool::Amass, "example.com", "words.txt", Path::new("/tmp/run"));
        assert_eq!(inv.command_line(), "amass enum -d example.com -o amass_output.txt -w words.txt");
        assert_eq!(inv.current_dir, PathBuf::from("/tmp/run"));
        assert_eq!(inv.output_file, PathBuf::from("/tmp/run/amass_output.txt"));
    }

    #[test]
    fn test_sublist3r_command_line() {
        let inv = build_invocation(Tool::Sublist3r, "example.com", "names.txt", Path::new("."));
        assert_eq!(
            inv.command_line(),
            "python3 sublist3r.py -d example.com -o sublist3r_output.txt -w names.txt"
        );
    }

    #[test]
    fn test_ffuf_command_line() {
        let inv = build_invocation(Tool::Ffuf, "example.com", "fuzz.txt", Path::new("."));
        assert_eq!(inv.program, "ffuf");
        assert_eq!(
            inv.args,
            vec!["-w", "fuzz.txt", "-u", "https://FUZZ.example.com", "-o", "ffuf_output.txt"]
        );
    }

    #[tokio::test]
    async fn test_tool_runner_passes_wordlist_through() {
        let tools = ToolRunner::new(RecordingRunner::default(), ".");

        let completion = tools.run_sublist3r("example.org", "custom.txt").await;

        assert!(completion.success());
        let calls = tools.runner().calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].args.contains(&"custom.txt".to_string()));
        assert!(calls[0].args.contains(&"example.org".to_string()));
    }

    #[tokio::test]
    async fn test_missing_executable_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let invocation = ToolInvocation {
            tool: Tool::Amass,
            program: "subenum-test-no-such-binary".to_string(),
            args: vec![],
            current_dir: dir.path().to_path_buf(),
            output_file: dir.path().join("amass_output.txt"),
        };

        let completion = SystemRunner.run(&invocation).await;

        assert!(matches!(completion, Completion::FailedToStart(_)));
        assert!(!completion.success());
    }
}
