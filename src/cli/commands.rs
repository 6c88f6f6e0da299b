//! Command table for the shell: names, usage strings, and handlers.

use std::collections::HashMap;

use crate::cli::core::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
    pub handler: CommandHandler,
}

pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    order: Vec<&'static str>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.commands.get(name).map(|entry| entry.handler)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.order
            .iter()
            .filter_map(move |name| self.commands.get(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }
}

pub fn register_all(registry: &mut CommandRegistry) {
    let entries = [
        CommandEntry {
            name: "personal",
            usage: "personal <first_name> <last_name>",
            summary: "Submit the Personal Details step of the wizard",
            handler: ShellContext::cmd_personal,
        },
        CommandEntry {
            name: "bank",
            usage: "bank <bank_name> <ifsc_code>",
            summary: "Submit the Bank Details step of the wizard",
            handler: ShellContext::cmd_bank,
        },
        CommandEntry {
            name: "back",
            usage: "back",
            summary: "Return to the previous wizard step, keeping entered values",
            handler: ShellContext::cmd_back,
        },
        CommandEntry {
            name: "preview",
            usage: "preview",
            summary: "Show the accumulated draft before submission",
            handler: ShellContext::cmd_preview,
        },
        CommandEntry {
            name: "submit",
            usage: "submit",
            summary: "Finalize the draft and add the user to the registry",
            handler: ShellContext::cmd_submit,
        },
        CommandEntry {
            name: "list",
            usage: "list",
            summary: "Render all registered users as a table",
            handler: ShellContext::cmd_list,
        },
        CommandEntry {
            name: "edit",
            usage: "edit <index>",
            summary: "Start inline editing of the user at <index>",
            handler: ShellContext::cmd_edit,
        },
        CommandEntry {
            name: "set",
            usage: "set <field> <value>",
            summary: "Change one field of the edit in progress",
            handler: ShellContext::cmd_set,
        },
        CommandEntry {
            name: "save",
            usage: "save",
            summary: "Commit the edit in progress back into the registry",
            handler: ShellContext::cmd_save,
        },
        CommandEntry {
            name: "cancel",
            usage: "cancel",
            summary: "Discard the edit in progress",
            handler: ShellContext::cmd_cancel,
        },
        CommandEntry {
            name: "status",
            usage: "status",
            summary: "Show the wizard step, registry size, and edit state",
            handler: ShellContext::cmd_status,
        },
        CommandEntry {
            name: "config",
            usage: "config show | config set <key> <value>",
            summary: "Show or change display preferences",
            handler: ShellContext::cmd_config,
        },
        CommandEntry {
            name: "help",
            usage: "help [command]",
            summary: "List commands or show usage for one command",
            handler: ShellContext::cmd_help,
        },
        CommandEntry {
            name: "exit",
            usage: "exit",
            summary: "Leave the shell",
            handler: ShellContext::cmd_exit,
        },
        CommandEntry {
            name: "quit",
            usage: "quit",
            summary: "Leave the shell",
            handler: ShellContext::cmd_exit,
        },
    ];

    for entry in entries {
        registry.register(entry);
    }
}
