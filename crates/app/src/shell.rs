use sparc_api::SparcApi;
use sparc_chat_store::{ChatStore, MessagePatch, MessageRole};

use crate::settings::SettingsStore;
use crate::summary::render_search_reply;
use crate::theme::ShellTheme;

const MISSING_KEY_REPLY: &str = "Set a SPARC API key with /key <key> to search datasets.";

const HELP: &str = "Type a question to search SPARC datasets.\n\
/history        show the conversation\n\
/clear          forget the conversation\n\
/model <id>     select the chat model\n\
/key <key>      set the SPARC API key\n\
/save           store the key and model in the settings file\n\
/quit           leave";

/// One line of user input, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Ask(String),
    History,
    Clear,
    Model(String),
    Key(String),
    Save,
    Help,
    Quit,
    Unknown(String),
}

impl ShellCommand {
    /// Returns `None` for blank input.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let Some(rest) = line.strip_prefix('/') else {
            return Some(Self::Ask(line.to_string()));
        };

        let (name, argument) = match rest.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (rest, ""),
        };

        let command = match name {
            "history" => Self::History,
            "clear" => Self::Clear,
            "model" => Self::Model(argument.to_string()),
            "key" => Self::Key(argument.to_string()),
            "save" => Self::Save,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(name.to_string()),
        };
        Some(command)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOutcome {
    Reply(String),
    Quit,
}

/// Terminal front-end over a [`ChatStore`] and the SPARC search client.
pub struct ChatShell {
    store: ChatStore,
    settings: SettingsStore,
    search: Option<SparcApi>,
    theme: ShellTheme,
}

impl ChatShell {
    pub fn new(settings: SettingsStore) -> Self {
        let store = ChatStore::with_session(settings.settings().session_state());
        let mut shell = Self {
            store,
            settings,
            search: None,
            theme: ShellTheme::default(),
        };
        shell.rebuild_search();
        shell
    }

    pub fn store(&self) -> &ChatStore {
        &self.store
    }

    pub fn theme(&self) -> &ShellTheme {
        &self.theme
    }

    pub fn banner(&self) -> String {
        let search = match &self.search {
            Some(api) => format!("searching {}", api.index()),
            None => "no SPARC API key set".to_string(),
        };
        format!(
            "SPARC chat ({} theme, {} icons), model {}, {}. /help for commands.",
            self.theme.name,
            self.theme.icon_set,
            self.store.model(),
            search
        )
    }

    pub async fn handle(&mut self, command: ShellCommand) -> ShellOutcome {
        match command {
            ShellCommand::Ask(prompt) => ShellOutcome::Reply(self.ask(prompt).await),
            ShellCommand::History => ShellOutcome::Reply(self.history()),
            ShellCommand::Clear => {
                self.store.clear_messages();
                ShellOutcome::Reply("Conversation cleared.".to_string())
            }
            ShellCommand::Model(model) => {
                if model.is_empty() {
                    return ShellOutcome::Reply(format!("Current model: {}", self.store.model()));
                }
                self.store.set_model(model);
                ShellOutcome::Reply(format!("Model set to {}.", self.store.model()))
            }
            ShellCommand::Key(api_key) => {
                self.store.set_api_key(api_key);
                self.rebuild_search();
                let reply = if self.store.has_api_key() {
                    "API key set."
                } else {
                    "API key cleared."
                };
                ShellOutcome::Reply(reply.to_string())
            }
            ShellCommand::Save => ShellOutcome::Reply(self.save()),
            ShellCommand::Help => ShellOutcome::Reply(HELP.to_string()),
            ShellCommand::Quit => ShellOutcome::Quit,
            ShellCommand::Unknown(name) => {
                ShellOutcome::Reply(format!("Unknown command /{name}. Try /help."))
            }
        }
    }

    async fn ask(&mut self, prompt: String) -> String {
        self.store
            .add_message(MessageRole::User, prompt.clone(), None);
        let pending = self
            .store
            .add_message(MessageRole::Assistant, String::new(), Some(true));
        self.store.set_typing(true);

        let reply = match &self.search {
            Some(api) => {
                let page_size = self.settings.settings().page_size;
                match api.search_text(&prompt, page_size).await {
                    Ok(response) => render_search_reply(&prompt, &response),
                    Err(error) => {
                        tracing::warn!(%error, "dataset search failed");
                        format!("Search failed: {error}")
                    }
                }
            }
            None => MISSING_KEY_REPLY.to_string(),
        };

        self.store.update_message(
            pending.id,
            MessagePatch::new().content(reply.clone()).loading(false),
        );
        self.store.set_typing(false);
        reply
    }

    fn history(&self) -> String {
        if self.store.message_count() == 0 {
            return "(no messages)".to_string();
        }

        self.store
            .messages()
            .iter()
            .map(|message| format!("[{}] {}", message.role, message.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn save(&self) -> String {
        let mut settings = (*self.settings.settings()).clone();
        settings.api_key = self.store.api_key().to_string();
        settings.model = self.store.model().to_string();

        match self.settings.update(settings) {
            Ok(()) => format!("Settings saved to {}.", self.settings.config_path().display()),
            Err(error) => {
                tracing::error!(%error, "failed to save settings");
                format!("Could not save settings: {error}")
            }
        }
    }

    fn rebuild_search(&mut self) {
        let Some(config) = self
            .settings
            .settings()
            .api_config_for(self.store.api_key())
        else {
            self.search = None;
            return;
        };

        match SparcApi::new(config) {
            Ok(api) => {
                tracing::debug!(url = %api.search_url(), "sparc search client ready");
                self.search = Some(api);
            }
            Err(error) => {
                tracing::warn!(%error, "failed to build sparc search client");
                self.search = None;
            }
        }
    }
}
