use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "backlog-mcp")]
#[command(version)]
#[command(about = "An MCP server for the Backlog issue tracker")]
#[command(long_about = "
backlog-mcp is an MCP (Model Context Protocol) server that exposes the
projects, issues and wiki pages of a Backlog space as tools.

Configuration is read from the environment:
  BACKLOG_API_KEY     API key (required)
  BACKLOG_SPACE_ID    space identifier, e.g. 'myspace' (required)
  BACKLOG_DOMAIN      Backlog domain (default: backlog.com)
  BACKLOG_BASE_URL    full API base URL override

Example usage:
  backlog-mcp serve                 # Run as MCP server on stdio
  backlog-mcp tools                 # Print the tool catalog as JSON
  backlog-mcp call backlog_get_issue --args '{\"issueIdOrKey\": \"PROJ-1\"}'
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run as MCP server (default when no subcommand is given)
    #[command(long_about = "
Runs backlog-mcp as an MCP server over stdio until the client disconnects
or Ctrl-C is received. Logs go to stderr, or to the file named by
BACKLOG_MCP_LOG_FILE, never to stdout.

Example:
  backlog-mcp serve
")]
    Serve,
    /// Print the tool catalog as JSON
    Tools,
    /// Run a single tool and print its response
    #[command(long_about = "
Runs one tool through the same dispatch path the MCP server uses and prints
the response text. Exits 1 when the tool reports an error.

Example:
  backlog-mcp call backlog_get_projects
  backlog-mcp call backlog_get_issues --args '{\"projectId\": [1], \"count\": 5}'
")]
    Call {
        /// Tool name, e.g. backlog_get_issue
        name: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }

    /// Subcommand to run, `serve` when none was given
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Serve)
    }

    /// Log level requested by flags, if any
    ///
    /// `--quiet` wins over `--debug`, which wins over `--verbose`.
    pub fn log_level(&self) -> Option<Level> {
        if self.quiet {
            Some(Level::ERROR)
        } else if self.debug {
            Some(Level::DEBUG)
        } else if self.verbose {
            Some(Level::TRACE)
        } else {
            None
        }
    }
}
