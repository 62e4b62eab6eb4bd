//! Read-only virtual filesystem backing the shell.
//!
//! A fixed two-level tree: `/` with a handful of files plus one `projects/`
//! subdirectory. Nothing is created or destroyed at runtime. Lookups are
//! scoped to the current directory: a file that exists at `/` is not found
//! from `/projects`, and vice versa.

/// The interpreter's current working directory. Only two exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cwd {
    #[default]
    Root,
    Projects,
}

impl Cwd {
    pub fn as_path(self) -> &'static str {
        match self {
            Cwd::Root => "/",
            Cwd::Projects => "/projects",
        }
    }
}

impl std::fmt::Display for Cwd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Listing at `/`, directories suffixed with `/`.
pub const ROOT_ITEMS: &[&str] = &[
    "projects/",
    "resume.pdf",
    "about.txt",
    "contact.txt",
    "notes.md",
    "ops-key.txt",
];

/// Listing at `/projects`.
pub const PROJECT_ITEMS: &[&str] = &[
    "chat-websocket-demo",
    "todo-list-web-desktop-app",
    "resume-analyzer",
    "latex-template-resume",
];

const ABOUT_TXT: &str =
    "Sicheng Ouyang | Software Engineering @ UWaterloo | Backend systems + practical ML.";
const CONTACT_TXT: &str = "email: support@sicheng.dev | github: github.com/carols12352";
const NOTES_MD: &str =
    "Build small, ship fast, keep interfaces clear. Ops note: if sudo asks questions, check ops-key.txt.";
const OPS_KEY_TXT: &str = "sudo password: thankyouforplaying";
const PROJECTS_README: &str = "Use `ls` then `open <project-name>` to jump to project details.";

/// Contents of the current directory, in listing order.
pub fn list(cwd: Cwd) -> &'static [&'static str] {
    match cwd {
        Cwd::Root => ROOT_ITEMS,
        Cwd::Projects => PROJECT_ITEMS,
    }
}

/// Look up a file's content, scoped to the current directory.
///
/// Returns `None` both for names that do not exist anywhere and for names
/// that exist only in the other directory.
pub fn read(cwd: Cwd, name: &str) -> Option<&'static str> {
    match (cwd, name) {
        (Cwd::Root, "about.txt") => Some(ABOUT_TXT),
        (Cwd::Root, "contact.txt") => Some(CONTACT_TXT),
        (Cwd::Root, "notes.md") => Some(NOTES_MD),
        (Cwd::Root, "ops-key.txt") => Some(OPS_KEY_TXT),
        (Cwd::Projects, "readme.txt") => Some(PROJECTS_README),
        _ => None,
    }
}

/// Fixed ASCII tree for the current directory.
pub fn tree(cwd: Cwd) -> &'static [&'static str] {
    match cwd {
        Cwd::Root => &[
            ".",
            "|-- projects",
            "|   |-- chat-websocket-demo",
            "|   |-- todo-list-web-desktop-app",
            "|   |-- resume-analyzer",
            "|   `-- latex-template-resume",
            "|-- resume.pdf",
            "|-- about.txt",
            "|-- contact.txt",
            "|-- ops-key.txt",
            "`-- notes.md",
        ],
        Cwd::Projects => &[
            ".",
            "|-- chat-websocket-demo",
            "|-- todo-list-web-desktop-app",
            "|-- resume-analyzer",
            "|-- latex-template-resume",
        ],
    }
}
