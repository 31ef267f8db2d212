//! The `init` command: shell integration snippets.
//!
//! Printed to stdout for `eval`/`source` from the user's shell rc. The
//! integration defines a function that runs the picker via command
//! substitution and `cd`s into the printed path.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

/// Shells we ship integration for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Shell to emit integration for
    #[arg(value_enum)]
    pub shell: Shell,
}

const POSIX_SNIPPET: &str = r#"# dongle shell integration
__dongle_jump() {
  local dest
  dest="$(dongle pick "$@")" || return
  [ -n "$dest" ] && cd -- "$dest"
}
alias dg='__dongle_jump'
"#;

const FISH_SNIPPET: &str = r#"# dongle shell integration
function __dongle_jump
    set -l dest (dongle pick $argv)
    or return
    test -n "$dest"; and cd -- $dest
end
alias dg='__dongle_jump'
"#;

/// Prints the integration snippet for the requested shell.
pub fn run(args: InitArgs) -> Result<ExitCode> {
    let snippet = match args.shell {
        Shell::Bash | Shell::Zsh => POSIX_SNIPPET,
        Shell::Fish => FISH_SNIPPET,
    };
    print!("{snippet}");
    Ok(ExitCode::SUCCESS)
}
