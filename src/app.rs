//! Orchestrates one run: configure, fetch, synthesize, write, report.

use crate::config::{Configuration, Settings};
use crate::editor::Editor;
use crate::error::Result;
use crate::fetch::{Fetcher, representative_sample};
use crate::paths::{SavePaths, expand_home};
use crate::progress::Spinner;
use crate::prompt::{Prompter, Terminal};
use crate::synth::{GeneratedType, synthesize};
use crate::validate::{validate_type_name, validate_url};
use crate::writer::write_types;
use colored::*;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Steps of a run, in order. `Failed` can follow any step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    Prompting,
    FlagsParsed,
    Fetching,
    Synthesizing,
    Writing,
    Reporting,
    EditorOpen,
    Done,
    Failed,
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub url: Option<String>,
    pub name: Option<String>,
    pub path: Option<String>,
    pub no_open: bool,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct Report {
    pub config: Configuration,
    pub generated: GeneratedType,
    pub file: PathBuf,
}

pub struct App<T: Terminal> {
    settings: Settings,
    paths: SavePaths,
    terminal: T,
    fetcher: Fetcher,
    editor: Option<Editor>,
    stage: Stage,
}

impl<T: Terminal> App<T> {
    pub fn new(settings: Settings, paths: SavePaths, terminal: T, fetcher: Fetcher) -> Self {
        Self {
            settings,
            paths,
            terminal,
            fetcher,
            editor: None,
            stage: Stage::Init,
        }
    }

    /// Offer to open the generated file in `editor` once it is written.
    pub fn with_editor(mut self, editor: Option<Editor>) -> Self {
        self.editor = editor;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Run the whole flow once. Nothing is retried.
    pub async fn run(&mut self, flags: &Flags) -> Result<Report> {
        match self.execute(flags).await {
            Ok(report) => {
                self.advance(Stage::Done);
                Ok(report)
            }
            Err(e) => {
                self.advance(Stage::Failed);
                Err(e)
            }
        }
    }

    async fn execute(&mut self, flags: &Flags) -> Result<Report> {
        let config = match flags.url.as_deref() {
            Some(url) => {
                self.advance(Stage::FlagsParsed);
                self.config_from_flags(url, flags)?
            }
            None => {
                self.advance(Stage::Prompting);
                Prompter::new(&mut self.terminal, &self.paths, self.settings.type_name())
                    .prompt_configuration()?
            }
        };
        debug!(url = %config.url, name = %config.name, path = %config.path.display(), "configured");

        let generated = self.generate(&config).await?;

        self.advance(Stage::Writing);
        let spinner = Spinner::start("💾 Saving file...");
        let file = match write_types(&config.path, &generated) {
            Ok(file) => {
                spinner.succeed("File saved");
                file
            }
            Err(e) => {
                spinner.fail("Could not save file");
                return Err(e);
            }
        };

        self.advance(Stage::Reporting);
        self.report(&file, &generated);

        if !flags.no_open {
            self.offer_editor(&file);
        }

        self.terminal
            .message(&"\n👋 Thanks for using api2ts, happy coding!\n".green().to_string());

        Ok(Report {
            config,
            generated,
            file,
        })
    }

    /// Fetch the sample and infer its type.
    async fn generate(&mut self, config: &Configuration) -> Result<GeneratedType> {
        self.advance(Stage::Fetching);
        let spinner = Spinner::start("🚀 Fetching API data...");
        let value = match self.fetcher.fetch_json(&config.url).await {
            Ok(value) => value,
            Err(e) => {
                spinner.fail("Request failed");
                return Err(e);
            }
        };

        self.advance(Stage::Synthesizing);
        spinner.set_message("📝 Generating type definitions...");
        let sample = representative_sample(value);
        match synthesize(sample.as_ref(), &config.name) {
            Ok(generated) => {
                spinner.succeed("Type definitions generated");
                Ok(generated)
            }
            Err(e) => {
                spinner.fail("Type generation failed");
                Err(e)
            }
        }
    }

    /// Flag-driven mode: missing name and path fall back to defaults.
    fn config_from_flags(&self, url: &str, flags: &Flags) -> Result<Configuration> {
        let url = validate_url(url)?;
        let name = validate_type_name(flags.name.as_deref().unwrap_or(self.settings.type_name()))?;
        let path = match flags.path.as_deref() {
            Some(path) => expand_home(path),
            None => self
                .settings
                .save_path()
                .unwrap_or_else(|| self.paths.current.clone()),
        };
        Ok(Configuration { url, name, path })
    }

    fn report(&mut self, file: &std::path::Path, generated: &GeneratedType) {
        let separator = "✨ ----------------------------------------".dimmed().to_string();
        self.terminal
            .message(&format!("\n{} {}", "📍 Saved to:".cyan(), file.display()));
        self.terminal
            .message(&"\n👀 Preview:\n".yellow().to_string());
        self.terminal.message(&separator);
        self.terminal.message(&generated.source());
        self.terminal.message(&separator);
    }

    /// Ask to open the file in the detected editor. Failures only warn.
    fn offer_editor(&mut self, file: &std::path::Path) {
        let Some(editor) = self.editor.clone() else {
            return;
        };
        self.advance(Stage::EditorOpen);

        let question = format!("🔍 Open the generated file in {}?", editor.command());
        let open = match self.terminal.confirm(&question, false) {
            Ok(open) => open,
            Err(e) => {
                warn!(error = %e, "skipping editor prompt");
                return;
            }
        };
        if !open {
            return;
        }

        match editor.open(file) {
            Ok(()) => self
                .terminal
                .message(&format!("\n📝 Opened in {}", editor.command()).green().to_string()),
            Err(e) => {
                warn!(error = %e, "failed to launch editor");
                self.terminal.message(
                    &"\n⚠️  Could not open the file automatically, please open it manually"
                        .yellow()
                        .to_string(),
                );
            }
        }
    }

    fn advance(&mut self, next: Stage) {
        debug!(from = ?self.stage, to = ?next, "stage");
        self.stage = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedTerminal;

    fn app(tmp: &std::path::Path, settings: Settings) -> App<ScriptedTerminal> {
        let paths = SavePaths {
            desktop: tmp.join("Desktop"),
            current: tmp.to_path_buf(),
        };
        App::new(settings, paths, ScriptedTerminal::new(), Fetcher::new().unwrap())
    }

    #[test]
    fn test_flags_fill_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let app = app(tmp.path(), Settings::default());
        let flags = Flags {
            url: Some("https://api.example.com/user".to_string()),
            ..Flags::default()
        };

        let config = app.config_from_flags("https://api.example.com/user", &flags).unwrap();
        assert_eq!(config.name, "ApiTypes");
        assert_eq!(config.path, tmp.path());
    }

    #[test]
    fn test_flags_use_settings_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = Settings {
            default_name: Some("Payload".to_string()),
            default_path: Some("/srv/types".to_string()),
            editor: None,
        };
        let app = app(tmp.path(), settings);

        let config = app
            .config_from_flags("https://api.example.com/user", &Flags::default())
            .unwrap();
        assert_eq!(config.name, "Payload");
        assert_eq!(config.path, PathBuf::from("/srv/types"));
    }

    #[test]
    fn test_flags_are_validated() {
        let tmp = tempfile::tempdir().unwrap();
        let app = app(tmp.path(), Settings::default());

        assert!(app.config_from_flags("nope", &Flags::default()).is_err());

        let flags = Flags {
            name: Some("my-type".to_string()),
            ..Flags::default()
        };
        assert!(app
            .config_from_flags("https://api.example.com/user", &flags)
            .is_err());
    }

    #[tokio::test]
    async fn test_invalid_flag_fails_run_without_prompting() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = app(tmp.path(), Settings::default());
        let flags = Flags {
            url: Some("not-a-url".to_string()),
            ..Flags::default()
        };

        assert!(app.run(&flags).await.is_err());
        assert_eq!(app.stage(), Stage::Failed);
        assert!(app.terminal().prompts().is_empty());
    }
}
