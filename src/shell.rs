//! Line-oriented command shell over an [`Explorer`].

use dialoguer::Confirm;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::warn;

use filehub_core::error::AppError;
use filehub_core::result::AppResult;
use filehub_core::types::{FileId, FolderId, MetadataId};
use filehub_entity::file::{MetadataPatch, NewMetadata};
use filehub_entity::navigation::ContentItem;
use filehub_explorer::{Confirmation, Explorer};

use crate::render;

const HELP: &str = "\
Commands:
  tree                      show the folder tree
  expand <id>               expand a folder (refetches its sub-folders)
  collapse <id>             collapse a folder
  open <id>                 open a folder shown in the tree
  enter <id>                open a sub-folder of the current folder
  ls                        list the current folder
  select <id>               select a sub-folder of the current folder
  file <id>                 select a file of the current folder
  info                      show the selected item
  crumbs                    show the breadcrumb path
  crumb <index>             open a folder on the breadcrumb path
  meta add <key> <value>    add metadata to the selected file
  meta set <id> <value>     change a metadata value
  meta rm <id>              delete a metadata entry
  help                      show this help
  quit                      leave
";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tree,
    Expand(FolderId),
    Collapse(FolderId),
    Open(FolderId),
    Enter(FolderId),
    List,
    SelectFolder(FolderId),
    SelectFile(FileId),
    Info,
    Crumbs,
    Crumb(usize),
    MetaAdd { key: String, value: String },
    MetaSet { id: MetadataId, value: String },
    MetaRemove(MetadataId),
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let (word, rest) = next_word(line);
        let command = match word {
            "" => return Ok(None),
            "tree" => Self::Tree,
            "expand" => Self::Expand(id_arg(rest, "expand <id>")?),
            "collapse" => Self::Collapse(id_arg(rest, "collapse <id>")?),
            "open" => Self::Open(id_arg(rest, "open <id>")?),
            "enter" | "cd" => Self::Enter(id_arg(rest, "enter <id>")?),
            "ls" => Self::List,
            "select" => Self::SelectFolder(id_arg(rest, "select <id>")?),
            "file" => Self::SelectFile(id_arg(rest, "file <id>")?),
            "info" => Self::Info,
            "crumbs" => Self::Crumbs,
            "crumb" => Self::Crumb(id_arg(rest, "crumb <index>")?),
            "meta" => Self::parse_meta(rest)?,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => {
                return Err(AppError::validation(format!(
                    "Unknown command '{other}'. Type 'help' for a list."
                )));
            }
        };
        Ok(Some(command))
    }

    fn parse_meta(args: &str) -> AppResult<Self> {
        let (action, rest) = next_word(args);
        match action {
            "add" => {
                let (key, value) = next_word(rest);
                Ok(Self::MetaAdd {
                    key: key.to_string(),
                    value: value.trim().to_string(),
                })
            }
            "set" => {
                let (id, value) = next_word(rest);
                Ok(Self::MetaSet {
                    id: id_arg(id, "meta set <id> <value>")?,
                    value: value.trim().to_string(),
                })
            }
            "rm" | "delete" => Ok(Self::MetaRemove(id_arg(rest, "meta rm <id>")?)),
            _ => Err(AppError::validation(
                "Usage: meta add <key> <value> | meta set <id> <value> | meta rm <id>",
            )),
        }
    }
}

/// Split off the first whitespace-delimited word.
fn next_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(end) => (&input[..end], &input[end..]),
        None => (input, ""),
    }
}

fn id_arg<T: std::str::FromStr>(input: &str, usage: &str) -> AppResult<T> {
    input
        .trim()
        .parse()
        .map_err(|_| AppError::validation(format!("Usage: {usage}")))
}

/// Asks on the terminal; anything but an explicit yes declines.
struct TerminalConfirm;

impl Confirmation for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        match Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "Confirmation prompt unavailable");
                false
            }
        }
    }
}

/// Whether the shell keeps running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The interactive shell.
pub struct Shell {
    explorer: Explorer,
}

impl Shell {
    pub fn new(explorer: Explorer) -> Self {
        Self { explorer }
    }

    /// Read commands from stdin until `quit` or end of input.
    pub async fn run(&self) -> AppResult<()> {
        let state = self.explorer.snapshot().await;
        println!("{}", render::tree(state.tree(), None));
        println!("Type 'help' for commands.");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();
        loop {
            stdout.write_all(b"filehub> ").await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    render::print_error(&e.message);
                    continue;
                }
            };
            match self.dispatch(command).await {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => render::print_error(&e.to_string()),
            }
        }
        Ok(())
    }

    async fn dispatch(&self, command: Command) -> AppResult<Flow> {
        match command {
            Command::Tree => {
                let text = self
                    .explorer
                    .read(|s| render::tree(s.tree(), s.selection().folder().map(|f| f.id)))
                    .await;
                print!("{text}");
                return Ok(Flow::Continue);
            }
            Command::Expand(id) => self.explorer.toggle(id, true).await?,
            Command::Collapse(id) => {
                if self.explorer.read(|s| s.tree().is_expanded(id)).await {
                    self.explorer.toggle(id, false).await?;
                }
            }
            Command::Open(id) => {
                let folder = self
                    .explorer
                    .read(|s| s.tree().find(id).map(|f| f.without_children()))
                    .await
                    .ok_or_else(|| AppError::not_found(format!("Folder {id} is not in the tree")))?;
                self.explorer.select_folder(folder).await?;
            }
            Command::Enter(id) => {
                let folder = self
                    .explorer
                    .read(|s| {
                        s.contents()
                            .data()
                            .and_then(|c| c.folders.iter().find(|f| f.id == id).cloned())
                    })
                    .await
                    .ok_or_else(|| {
                        AppError::not_found(format!("Folder {id} is not in the current folder"))
                    })?;
                self.explorer.open_from_descendant(folder).await?;
            }
            Command::List => {
                let text = self.explorer.read(|s| render::contents(s.contents())).await;
                print!("{text}");
                return Ok(Flow::Continue);
            }
            Command::SelectFolder(id) => {
                let item = self
                    .explorer
                    .read(|s| {
                        s.contents()
                            .data()
                            .and_then(|c| c.folders.iter().find(|f| f.id == id).cloned())
                    })
                    .await
                    .map(ContentItem::Folder)
                    .ok_or_else(|| {
                        AppError::not_found(format!("Folder {id} is not in the current folder"))
                    })?;
                self.explorer.select_item(item).await?;
            }
            Command::SelectFile(id) => {
                let item = self
                    .explorer
                    .read(|s| s.contents().file(id).cloned())
                    .await
                    .map(ContentItem::File)
                    .ok_or_else(|| {
                        AppError::not_found(format!("File {id} is not in the current folder"))
                    })?;
                self.explorer.select_item(item).await?;
            }
            Command::Info => {
                let text = self
                    .explorer
                    .read(|s| render::details(s.selection().item()))
                    .await;
                print!("{text}");
                return Ok(Flow::Continue);
            }
            Command::Crumbs => {
                let text = self
                    .explorer
                    .read(|s| render::breadcrumb_list(s.selection().breadcrumbs()))
                    .await;
                print!("{text}");
                return Ok(Flow::Continue);
            }
            Command::Crumb(index) => self.explorer.open_breadcrumb(index).await?,
            Command::MetaAdd { key, value } => {
                let file_id = self
                    .explorer
                    .read(|s| s.selection().item().and_then(|i| i.as_file()).map(|f| f.id))
                    .await
                    .ok_or_else(|| AppError::validation("Select a file first"))?;
                self.explorer
                    .add_metadata(file_id, NewMetadata::new(key, value))
                    .await?;
            }
            Command::MetaSet { id, value } => {
                self.explorer
                    .update_metadata(id, MetadataPatch::new(value))
                    .await?;
            }
            Command::MetaRemove(id) => {
                if !self.explorer.delete_metadata(id, &TerminalConfirm).await? {
                    println!("Cancelled.");
                }
            }
            Command::Help => {
                print!("{HELP}");
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Exit),
        }

        let text = self.explorer.read(render::screen).await;
        print!("{text}");
        Ok(Flow::Continue)
    }
}
