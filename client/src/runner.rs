use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

use tictactoe_common::games::tictactoe::{SessionPhase, TicTacToeSession};
use tictactoe_common::log;

use crate::state::{ClientCommand, InputContext, parse_command};
use crate::terminal_ui::{GameRenderer, help_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct GameRunner<R: GameRenderer> {
    session: TicTacToeSession,
    renderer: R,
    ai_move_delay: Duration,
}

impl<R: GameRenderer> GameRunner<R> {
    pub fn new(session: TicTacToeSession, renderer: R, ai_move_delay: Duration) -> Self {
        Self {
            session,
            renderer,
            ai_move_delay,
        }
    }

    /// Consumes input lines until `quit` or the channel closes.
    pub async fn run(
        mut self,
        input_rx: &mut mpsc::UnboundedReceiver<String>,
    ) -> io::Result<(TicTacToeSession, R)> {
        self.renderer.render(&self.session)?;

        while let Some(line) = input_rx.recv().await {
            let command = match parse_command(&line, self.input_context()) {
                Ok(command) => command,
                Err(e) => {
                    self.renderer.show_message(&e)?;
                    continue;
                }
            };

            if self.apply(command)? == Flow::Quit {
                break;
            }

            if self.session.is_awaiting_ai() {
                self.renderer.render(&self.session)?;
                if self.wait_for_ai(input_rx).await? == Flow::Quit {
                    break;
                }
            }

            self.renderer.render(&self.session)?;
        }

        Ok((self.session, self.renderer))
    }

    fn input_context(&self) -> InputContext {
        if self.session.phase() == SessionPhase::AwaitingMode {
            InputContext::Menu
        } else {
            InputContext::Game
        }
    }

    fn apply(&mut self, command: ClientCommand) -> io::Result<Flow> {
        match command {
            ClientCommand::SelectMode(mode) => self.session.select_mode(mode),
            ClientCommand::PlaceMark(index) => {
                if !self.session.place_human_mark(index) && self.session.is_active() {
                    self.renderer
                        .show_message(&format!("Cell {} is already taken", index + 1))?;
                }
            }
            ClientCommand::Reset => self.session.reset(),
            ClientCommand::Menu => self.session = TicTacToeSession::new(),
            ClientCommand::Help => self.renderer.show_message(&help_text())?,
            ClientCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Cosmetic pause before the AI replies. Moves typed meanwhile are
    /// dropped; reset, menu and quit cancel the pending reply. Closed input
    /// still gets the reply.
    async fn wait_for_ai(
        &mut self,
        input_rx: &mut mpsc::UnboundedReceiver<String>,
    ) -> io::Result<Flow> {
        let delay = tokio::time::sleep(self.ai_move_delay);
        tokio::pin!(delay);

        loop {
            tokio::select! {
                biased;

                _ = &mut delay => {
                    self.play_ai_turn().await?;
                    return Ok(Flow::Continue);
                }
                line = input_rx.recv() => {
                    let Some(line) = line else {
                        (&mut delay).await;
                        self.play_ai_turn().await?;
                        return Ok(Flow::Continue);
                    };
                    match parse_command(&line, InputContext::Game) {
                        Ok(command @ (ClientCommand::Reset | ClientCommand::Menu | ClientCommand::Quit)) => {
                            return self.apply(command);
                        }
                        Ok(_) | Err(_) => {
                            log!("Ignoring input '{}' while the AI is thinking", line.trim());
                        }
                    }
                }
            }
        }
    }

    async fn play_ai_turn(&mut self) -> io::Result<()> {
        let mut session = std::mem::take(&mut self.session);
        session = tokio::task::spawn_blocking(move || {
            session.play_ai_turn();
            session
        })
        .await
        .map_err(|e| io::Error::other(format!("AI task failed: {}", e)))?;
        self.session = session;
        Ok(())
    }
}
