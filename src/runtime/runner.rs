use crate::account::client::AccountClient;
use crate::runtime::command::Command;
use crate::runtime::effect::Effect;
use crate::runtime::key_bindings::KeyBindings;
use crate::runtime::reducer::Reducer;
use crate::runtime::submit::SubmissionExecutor;
use crate::state::app_state::AppState;
use crate::terminal::Terminal;
use crate::terminal_event::TerminalEvent;
use crate::ui::renderer::Renderer;
use std::io;
use std::sync::Arc;
use std::time::Duration;

const POLL_TIMEOUT: Duration = Duration::from_millis(120);

pub struct Runtime {
    state: AppState,
    terminal: Terminal,
    key_bindings: KeyBindings,
    executor: SubmissionExecutor,
    client: Arc<dyn AccountClient>,
    renderer: Renderer,
}

impl Runtime {
    pub fn new(state: AppState, terminal: Terminal, client: Arc<dyn AccountClient>) -> Self {
        Self {
            state,
            terminal,
            key_bindings: KeyBindings::new(),
            executor: SubmissionExecutor::new(),
            client,
            renderer: Renderer::default(),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.terminal.enter()?;
        let run_result = self.event_loop();
        let exit_result = self.terminal.exit();
        run_result.and(exit_result)
    }

    fn event_loop(&mut self) -> io::Result<()> {
        self.render()?;

        while !self.state.should_exit() {
            // Settled submissions release the in-flight guard here, the only
            // place completions are applied.
            let completions = self.executor.drain_ready();
            if !completions.is_empty() {
                for outcome in completions {
                    self.state.apply_completion(outcome);
                }
                self.render()?;
            }

            match self.terminal.poll_event(POLL_TIMEOUT)? {
                TerminalEvent::Key(key) => {
                    let command = self
                        .key_bindings
                        .resolve(key)
                        .unwrap_or(Command::InputKey(key));
                    self.process_command(command)?;
                }
                TerminalEvent::Resize { .. } => self.render()?,
                TerminalEvent::Tick => self.process_command(Command::Tick)?,
            }
        }

        Ok(())
    }

    fn process_command(&mut self, command: Command) -> io::Result<()> {
        let effects = Reducer::reduce(&mut self.state, command);
        self.apply_effects(effects)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        let mut render_requested = false;

        for effect in effects {
            match effect {
                Effect::Submit(request) => {
                    self.executor.spawn(Arc::clone(&self.client), request);
                    render_requested = true;
                }
                Effect::RequestRender => {
                    render_requested = true;
                }
            }
        }

        if render_requested {
            self.render()?;
        }

        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = self.renderer.render(&self.state);
        self.terminal.render(&frame)
    }
}
