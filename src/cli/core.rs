//! Shell context, command dispatch, and command handlers.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::cli::commands::{self, CommandRegistry};
use crate::cli::output;
use crate::cli::table::record_matrix;
use crate::config::{Config, ConfigError, ConfigManager};
use crate::editor::TableEditor;
use crate::errors::{EditError, ValidationError, WizardError};
use crate::registry::{Field, RecordStore};
use crate::wizard::{Step, WizardController};

/// Fatal shell errors that end the process.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Recoverable per-command errors, reported and then ignored by the loop.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("validation failed")]
    Validation(Vec<ValidationError>),
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Shared shell runtime state.
///
/// Owns the record store and hands it by reference to the wizard and the
/// table editor; those two never talk to each other directly.
pub struct ShellContext {
    mode: CliMode,
    registry: CommandRegistry,
    store: RecordStore,
    wizard: WizardController,
    editor: TableEditor,
    config: Config,
    config_manager: ConfigManager,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        output::apply_config(&config);

        Ok(Self {
            mode,
            registry,
            store: RecordStore::new(),
            wizard: WizardController::new(),
            editor: TableEditor::new(),
            config,
            config_manager,
            running: true,
        })
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            output::warning(format!(
                "Unknown command `{}`. Type `help` to see available commands.",
                raw
            ));
            Ok(LoopControl::Continue)
        }
    }

    pub fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::Validation(errors) => {
                for error in errors {
                    output::error(error.to_string());
                }
            }
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
            }
            other => output::error(other.to_string()),
        }
    }

    fn step_banner(step: Step) -> String {
        format!("Step {} of {}: {}", step.index() + 1, Step::ALL.len(), step.title())
    }

    fn advance_with(&mut self, input: BTreeMap<Field, String>) -> CommandResult {
        let completed = self.wizard.current_step();
        let next = self
            .wizard
            .advance(input)
            .map_err(CommandError::Validation)?;
        output::success(format!("{} recorded.", completed.title()));
        output::info(format!("Now at {}.", Self::step_banner(next)));
        Ok(())
    }

    pub(crate) fn cmd_personal(&mut self, args: &[&str]) -> CommandResult {
        if self.wizard.current_step() != Step::PersonalDetails {
            return Err(CommandError::InvalidArguments(format!(
                "wizard is at `{}`; use `back` to revisit earlier steps",
                self.wizard.current_step().title()
            )));
        }
        if args.len() != 2 {
            return Err(CommandError::InvalidArguments(
                "usage: personal <first_name> <last_name>".into(),
            ));
        }
        let mut input = BTreeMap::new();
        input.insert(Field::FirstName, args[0].to_string());
        input.insert(Field::LastName, args[1].to_string());
        self.advance_with(input)
    }

    pub(crate) fn cmd_bank(&mut self, args: &[&str]) -> CommandResult {
        if self.wizard.current_step() != Step::BankDetails {
            return Err(CommandError::InvalidArguments(format!(
                "wizard is at `{}`; complete the steps in order",
                self.wizard.current_step().title()
            )));
        }
        if args.len() != 2 {
            return Err(CommandError::InvalidArguments(
                "usage: bank <bank_name> <ifsc_code>".into(),
            ));
        }
        let mut input = BTreeMap::new();
        input.insert(Field::BankName, args[0].to_string());
        input.insert(Field::IfscCode, args[1].to_string());
        self.advance_with(input)
    }

    pub(crate) fn cmd_back(&mut self, _args: &[&str]) -> CommandResult {
        let step = self.wizard.retreat();
        output::info(format!("Back to {}.", Self::step_banner(step)));
        for field in step.fields() {
            let value = self.wizard.draft_value(*field).unwrap_or("-");
            output::info(format!("  {}: {}", field.label(), value));
        }
        Ok(())
    }

    pub(crate) fn cmd_preview(&mut self, _args: &[&str]) -> CommandResult {
        if self.wizard.current_step() != Step::Preview {
            output::info(format!(
                "Wizard is at {}; the draft so far:",
                Self::step_banner(self.wizard.current_step())
            ));
        }
        output::section("Preview Details");
        for field in Field::ALL {
            let value = self.wizard.draft_value(field).unwrap_or("-");
            output::info(format!("  {}: {}", field.label(), value));
        }
        Ok(())
    }

    pub(crate) fn cmd_submit(&mut self, _args: &[&str]) -> CommandResult {
        let record = self.wizard.confirm(&mut self.store)?;
        tracing::debug!(
            first_name = %record.first_name,
            last_name = %record.last_name,
            "user appended to registry"
        );
        output::success("User submitted successfully.");
        output::info(format!("Registry now holds {} user(s).", self.store.len()));
        Ok(())
    }

    pub(crate) fn cmd_list(&mut self, _args: &[&str]) -> CommandResult {
        if self.store.is_empty() {
            output::info("No users registered yet. Complete the wizard to add one.");
            return Ok(());
        }
        output::section("All Users");
        println!("{}", record_matrix(&self.store, &self.editor).render());
        Ok(())
    }

    pub(crate) fn cmd_edit(&mut self, args: &[&str]) -> CommandResult {
        if args.len() != 1 {
            return Err(CommandError::InvalidArguments("usage: edit <index>".into()));
        }
        let index: usize = args[0]
            .parse()
            .map_err(|_| CommandError::InvalidArguments("index must be numeric".into()))?;
        if self.editor.is_editing() {
            output::warning("Discarding the previous uncommitted edit.");
        }
        self.editor.begin_edit(&self.store, index)?;
        output::success(format!(
            "Editing user #{index}. Use `set <field> <value>`, then `save` or `cancel`."
        ));
        Ok(())
    }

    pub(crate) fn cmd_set(&mut self, args: &[&str]) -> CommandResult {
        if args.len() < 2 {
            return Err(CommandError::InvalidArguments(
                "usage: set <field> <value>".into(),
            ));
        }
        let field = Field::from_key(args[0]).ok_or_else(|| {
            let keys: Vec<&str> = Field::ALL.iter().map(|f| f.key()).collect();
            CommandError::InvalidArguments(format!(
                "unknown field `{}` (expected one of: {})",
                args[0],
                keys.join(", ")
            ))
        })?;
        let value = args[1..].join(" ");
        self.editor.update_field(field, value.clone())?;
        if self.editor.is_field_dirty(field) {
            output::info(format!("{}: {} (changed)", field.label(), value));
        } else {
            output::info(format!("{}: {} (unchanged)", field.label(), value));
        }
        Ok(())
    }

    pub(crate) fn cmd_save(&mut self, _args: &[&str]) -> CommandResult {
        let index = self.editor.commit(&mut self.store)?;
        tracing::debug!(index, "edit committed to registry");
        output::success(format!("User #{index} updated."));
        Ok(())
    }

    pub(crate) fn cmd_cancel(&mut self, _args: &[&str]) -> CommandResult {
        if self.editor.is_editing() {
            self.editor.cancel();
            output::info("Edit cancelled. No changes were saved.");
        } else {
            output::info("No edit in progress.");
        }
        Ok(())
    }

    pub(crate) fn cmd_status(&mut self, _args: &[&str]) -> CommandResult {
        output::info(format!(
            "Wizard: {}",
            Self::step_banner(self.wizard.current_step())
        ));
        output::info(format!("Registered users: {}", self.store.len()));
        match self.editor.active_index() {
            Some(index) => output::info(format!("Editing user #{index}.")),
            None => output::info("No edit in progress."),
        }
        Ok(())
    }

    pub(crate) fn cmd_config(&mut self, args: &[&str]) -> CommandResult {
        match args {
            ["show"] | [] => {
                output::section("Configuration");
                output::info(format!("  plain-mode: {}", self.config.plain_mode));
                output::info(format!("  quiet-mode: {}", self.config.quiet_mode));
                Ok(())
            }
            ["set", key, value] => {
                let enabled = match value.to_ascii_lowercase().as_str() {
                    "true" | "on" | "1" => true,
                    "false" | "off" | "0" => false,
                    other => {
                        return Err(CommandError::InvalidArguments(format!(
                            "expected a boolean, got `{other}`"
                        )))
                    }
                };
                match key.to_ascii_lowercase().as_str() {
                    "plain-mode" => self.config.plain_mode = enabled,
                    "quiet-mode" => self.config.quiet_mode = enabled,
                    other => {
                        return Err(CommandError::InvalidArguments(format!(
                            "unknown config key `{other}` (expected plain-mode or quiet-mode)"
                        )))
                    }
                }
                self.config_manager.save(&self.config)?;
                output::apply_config(&self.config);
                output::success("Configuration updated.");
                Ok(())
            }
            _ => Err(CommandError::InvalidArguments(
                "usage: config show | config set <key> <value>".into(),
            )),
        }
    }

    pub(crate) fn cmd_help(&mut self, args: &[&str]) -> CommandResult {
        match args {
            [name] => match self.registry.get(&name.to_lowercase()) {
                Some(entry) => {
                    output::info(format!("{} — {}", entry.usage, entry.summary));
                    Ok(())
                }
                None => Err(CommandError::InvalidArguments(format!(
                    "unknown command `{name}`"
                ))),
            },
            [] => {
                output::section("Commands");
                for entry in self.registry.iter() {
                    output::info(format!("  {:<40} {}", entry.usage, entry.summary));
                }
                Ok(())
            }
            _ => Err(CommandError::InvalidArguments("usage: help [command]".into())),
        }
    }

    pub(crate) fn cmd_exit(&mut self, _args: &[&str]) -> CommandResult {
        Err(CommandError::ExitRequested)
    }
}
