use crate::cli::Args;
use crate::config::ConfigStore;
use crate::error::Result;
use crate::merger::ResultMerger;
use crate::output::write_banner;
use crate::prompter::Prompter;
use crate::runner::{ProcessRunner, ToolRunner};
use crate::types::{MergeSummary, Settings, Tool};
use colored::Colorize;
use log::info;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No domain was given; nothing ran.
    MissingDomain,
    Completed {
        tools_run: Vec<Tool>,
        merge: MergeSummary,
    },
}

pub struct SubenumEngine<R> {
    settings: Settings,
    store: ConfigStore,
    tools: ToolRunner<R>,
    merger: ResultMerger,
}

impl<R: ProcessRunner> SubenumEngine<R> {
    pub fn new(settings: Settings, runner: R) -> Self {
        let store = ConfigStore::new(settings.config_path.clone(), settings.default_wordlists.clone());
        let tools = ToolRunner::new(runner, settings.work_dir.clone());
        let merger = ResultMerger::new(settings.work_dir.clone(), settings.merged_output_path());

        Self {
            settings,
            store,
            tools,
            merger,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn runner(&self) -> &R {
        self.tools.runner()
    }

    /// One full invocation: load wordlists, optionally customize them, run
    /// the selected tools one after another and merge what they produced.
    pub async fn run<I, W>(&self, args: &Args, input: &mut I, out: &mut W) -> Result<RunOutcome>
    where
        I: BufRead,
        W: Write,
    {
        let mut wordlists = self.store.load()?;

        let domain = match args.target() {
            Some(domain) => domain,
            None => {
                write_banner(out, Some(&wordlists))?;
                writeln!(out, "{}\n", "Error: Domain argument is required.".red())?;
                return Ok(RunOutcome::MissingDomain);
            }
        };

        if args.customize_wordlists {
            wordlists = Prompter::new(&self.store).customize(wordlists, input, out)?;
        }

        if !args.quiet {
            write_banner(out, Some(&wordlists))?;
        }

        writeln!(out, "Starting checks for domain: {}", domain)?;
        out.flush()?;

        let selected = args.selected_tools();
        info!("Running {} tool(s) against {}", selected.len(), domain);
        for tool in &selected {
            self.tools.run(*tool, domain, wordlists.get(*tool)).await;
        }

        let merge = self.merger.merge()?;
        writeln!(
            out,
            "Subdomain enumeration completed. Results saved in {}.",
            self.settings.merged_output
        )?;

        Ok(RunOutcome::Completed {
            tools_run: selected,
            merge,
        })
    }
}
