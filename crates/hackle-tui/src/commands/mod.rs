//! Command-bar commands — parsed from the text typed after `:`.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Quit |
//! | `help` | Toggle the help popup |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `sort <key>` | Sort by `title`, `author`, `comments`, `points` or `none` |
//! | `more` | Load the next page of results |
//! | `search <term>` | Commit `<term>` and fetch it |
//! | `url` | Toggle URL display in the story list |

use hackle_core::SortKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Theme(String),
    Sort(SortKey),
    More,
    Search(String),
    Url,
}

impl Command {
    /// Parse a command string (without the `:` prefix).
    ///
    /// Empty input is reported as `Err(String::new())` — a sentinel the
    /// command bar treats as "just close me" rather than an error.
    pub fn parse(input: &str) -> Result<Self, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (head, rest) = match input.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (input, ""),
        };

        match head {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "more" => Ok(Command::More),
            "url" => Ok(Command::Url),
            "theme" => {
                if rest.is_empty() {
                    Err("theme: expected a theme name".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "sort" => match rest {
                "title" => Ok(Command::Sort(SortKey::Title)),
                "author" => Ok(Command::Sort(SortKey::Author)),
                "comments" => Ok(Command::Sort(SortKey::Comments)),
                "points" => Ok(Command::Sort(SortKey::Points)),
                "none" => Ok(Command::Sort(SortKey::None)),
                "" => Err("sort: expected title|author|comments|points|none".to_string()),
                other => Err(format!("sort: unknown key '{other}'")),
            },
            "search" => {
                if rest.is_empty() {
                    Err("search: expected a search term".to_string())
                } else {
                    Ok(Command::Search(rest.to_string()))
                }
            }
            other => Err(format!("unknown command '{other}'")),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
