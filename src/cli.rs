use crate::types::Tool;
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "subenum",
    version,
    about = "Subdomain Enumeration Tool",
    long_about = "Runs amass, sublist3r and ffuf against a domain and merges their results into final_output.txt.\nIf no tool flag is given, all three tools are used."
)]
pub struct Args {
    /// The target domain to enumerate subdomains for (e.g., example.com)
    #[arg(value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Use Amass for enumeration
    #[arg(short = 'a')]
    pub amass: bool,

    /// Use Sublist3r for enumeration
    #[arg(short = 'u')]
    pub sublist3r: bool,

    /// Use FFUF for enumeration
    #[arg(short = 'f')]
    pub ffuf: bool,

    /// Customize wordlists
    #[arg(short = 'w')]
    pub customize_wordlists: bool,

    /// Quiet mode (suppress banner)
    #[arg(short = 'q')]
    pub quiet: bool,
}

impl Args {
    /// Tools to run, in execution order. No selection means all of them.
    pub fn selected_tools(&self) -> Vec<Tool> {
        let selected: Vec<Tool> = Tool::ALL
            .into_iter()
            .filter(|tool| match tool {
                Tool::Amass => self.amass,
                Tool::Sublist3r => self.sublist3r,
                Tool::Ffuf => self.ffuf,
            })
            .collect();

        if selected.is_empty() {
            Tool::ALL.to_vec()
        } else {
            selected
        }
    }

    /// The domain, if one was given and is not blank.
    pub fn target(&self) -> Option<&str> {
        self.domain.as_deref().filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_flags() {
        let args = Args::try_parse_from(["subenum", "example.com", "-a", "-f", "-q"]).unwrap();
        assert_eq!(args.target(), Some("example.com"));
        assert!(args.amass && args.ffuf && args.quiet);
        assert!(!args.sublist3r && !args.customize_wordlists);
        assert_eq!(args.selected_tools(), vec![Tool::Amass, Tool::Ffuf]);
    }

    #[test]
    fn test_combined_flags_after_domain() {
        let args = Args::try_parse_from(["subenum", "-uw", "example.com"]).unwrap();
        assert!(args.sublist3r && args.customize_wordlists);
        assert_eq!(args.selected_tools(), vec![Tool::Sublist3r]);
    }

    #[test]
    fn test_no_tool_flags_selects_all() {
        let args = Args::try_parse_from(["subenum", "example.com"]).unwrap();
        assert_eq!(args.selected_tools(), Tool::ALL.to_vec());
    }

    #[test]
    fn test_domain_is_optional() {
        let args = Args::try_parse_from(["subenum", "-q"]).unwrap();
        assert_eq!(args.target(), None);

        let args = Args::try_parse_from(["subenum", ""]).unwrap();
        assert_eq!(args.target(), None);
    }

    #[test]
    fn test_long_tool_flags_are_rejected() {
        assert!(Args::try_parse_from(["subenum", "example.com", "--amass"]).is_err());
    }
}
