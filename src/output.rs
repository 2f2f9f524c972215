// src/output.rs
use crate::types::{Tool, WordlistConfig};
use std::io::{self, Write};

const BANNER: &str = r#"
      _______. __    __  .______    _______ .__   __.  __    __  .___  ___.
     /       ||  |  |  | |   _  \  |   ____||  \ |  | |  |  |  | |   \/   |
    |   (----`|  |  |  | |  |_)  | |  |__   |   \|  | |  |  |  | |  \  /  |
     \   \    |  |  |  | |   _  <  |   __|  |  . `  | |  |  |  | |  |\/|  |
 .----)   |   |  `--'  | |  |_)  | |  |____ |  |\   | |  `--'  | |  |  |  |
 |_______/     \______/  |______/  |_______||__| \__|  \______/  |__|  |__|
"#;

const USAGE: &str = "Usage: subenum <domain> [-a] [-u] [-f] [-w] [-q]
Options:
  -a    Use Amass
  -u    Use Sublist3r
  -f    Use FFUF
  -w    Customize wordlists
  -q    Quiet mode (suppress banner)

Note: If no flags are provided, all tools will be used by default.
";

/// Banner, usage text and, when given, the wordlists in effect.
pub fn write_banner<W: Write>(writer: &mut W, wordlists: Option<&WordlistConfig>) -> io::Result<()> {
    writeln!(writer, "{:>75}", format!("Version: {}", crate::VERSION))?;
    writeln!(writer, "{}", BANNER)?;
    writeln!(writer, "{:>75}\n", format!("build {} ({})", env!("GIT_HASH"), env!("BUILD_TIME")))?;
    writeln!(writer, "{}", USAGE)?;

    if let Some(wordlists) = wordlists {
        writeln!(writer, "Current Wordlists:")?;
        for tool in Tool::ALL {
            writeln!(writer, "  {}: {}", tool.display_name(), wordlists.get(tool))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}
