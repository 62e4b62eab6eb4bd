//! Command parsing.
//!
//! The grammar is a fixed table of literal commands, matched case-sensitively:
//! exact literals first, then the `cat <name>` / `open <target>` /
//! `sudo <other>` prefix families, then an unknown-command fallback. The
//! graduated `rm` ladder is deliberate: `rm`, `rm -rf` and `rm -rf /` are
//! three distinct commands with three distinct deflections, and only the
//! fully qualified `sudo rm -rf /` escalates.

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Pwd,
    Ls,
    Tree,
    CdProjects,
    CdUp,
    Clear,
    Rm,
    RmRf,
    RmRfRoot,
    Sudo,
    SudoRmRfRoot,
    SudoOther(String),
    Cat(String),
    Open(String),
    Unknown(String),
}

/// Parse one trimmed, non-empty input line.
///
/// Returns `None` for empty or whitespace-only input; such lines are a
/// total no-op for the caller.
pub fn parse(raw: &str) -> Option<Command> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }

    let cmd = match line {
        "help" => Command::Help,
        "pwd" => Command::Pwd,
        "ls" => Command::Ls,
        "tree" => Command::Tree,
        "cd projects" => Command::CdProjects,
        "cd .." => Command::CdUp,
        "clear" => Command::Clear,
        "rm" => Command::Rm,
        "rm -rf" => Command::RmRf,
        "rm -rf /" => Command::RmRfRoot,
        "sudo" => Command::Sudo,
        "sudo rm -rf /" => Command::SudoRmRfRoot,
        _ => {
            if let Some(name) = line.strip_prefix("cat ") {
                Command::Cat(name.trim().to_string())
            } else if let Some(target) = line.strip_prefix("open ") {
                // Targets are matched case-insensitively against the route
                // table; commands themselves stay case-sensitive.
                Command::Open(target.trim().to_lowercase())
            } else if let Some(rest) = line.strip_prefix("sudo ") {
                Command::SudoOther(rest.trim().to_string())
            } else {
                Command::Unknown(line.to_string())
            }
        }
    };
    Some(cmd)
}
