// src/prompter.rs
use crate::config::ConfigStore;
use crate::error::Result;
use crate::types::{SubenumError, Tool, WordlistConfig};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Interactive menu for overriding the wordlist of each tool.
pub struct Prompter<'a> {
    store: &'a ConfigStore,
}

impl<'a> Prompter<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        Self { store }
    }

    /// Runs the menu until "Done" is chosen, then saves and returns the config.
    pub fn customize<R, W>(&self, mut wordlists: WordlistConfig, input: &mut R, out: &mut W) -> Result<WordlistConfig>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(out, "Customize your wordlists for each tool:")?;
        for tool in Tool::ALL {
            writeln!(out, "{}) {}", tool.menu_index(), tool.display_name())?;
        }
        writeln!(out, "4) Done")?;

        loop {
            let choice = prompt(input, out, "Select an option (1-4): ")?;
            let choice = choice.trim();

            if let Some(tool) = Tool::from_menu_choice(choice) {
                let wordlist = self.ask_wordlist(tool, input, out)?;
                wordlists.set(tool, wordlist);
            } else if choice == "4" {
                self.store.save(&wordlists)?;
                writeln!(
                    out,
                    "{}",
                    format!("Wordlists saved to {}.", self.store.path().display()).yellow()
                )?;
                writeln!(out, "Customization completed.")?;
                return Ok(wordlists);
            } else {
                writeln!(out, "Invalid choice. Please select a valid option.")?;
            }
        }
    }

    // An empty answer means the built-in default, not the currently loaded path.
    fn ask_wordlist<R: BufRead, W: Write>(&self, tool: Tool, input: &mut R, out: &mut W) -> Result<String> {
        let answer = prompt(
            input,
            out,
            &format!(
                "Enter the wordlist path for {} (or press Enter to use default): ",
                tool.display_name()
            ),
        )?;

        if answer.is_empty() {
            Ok(self.store.defaults().get(tool).to_string())
        } else {
            Ok(answer)
        }
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<String> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SubenumError::PromptError("input closed before customization was completed".to_string()));
    }

    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}
