//! Top-level menu controller.

use anyhow::Result;
use log::{info, warn};

use crate::context::Context;
use crate::core::{Leaderboard, Player};
use crate::game_loop::{GameLoop, RunSummary};
use crate::input::{parse_menu_choice, parse_profile_choice};
use crate::screens;
use crate::types::{Frame, MenuChoice, ProfileChoice};

/// The shop application: main menu, profiles and runs.
pub struct App {
    ctx: Context,
    player: Option<Player>,
    leaderboard: Leaderboard,
}

impl App {
    /// Build the app, loading the leaderboard (unreadable → empty).
    pub fn new(ctx: Context) -> Self {
        let leaderboard = match ctx.leaderboard.load_leaderboard() {
            Ok(scores) => Leaderboard::from_scores(scores),
            Err(e) => {
                warn!("failed to load leaderboard, starting empty: {e}");
                Leaderboard::new()
            }
        };
        Self {
            ctx,
            player: None,
            leaderboard,
        }
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Intro, then the main menu until the player picks Exit.
    pub fn run(&mut self) -> Result<()> {
        let delay = self.ctx.config.pacing.intro;
        self.ctx.show_for(&screens::intro(), delay);

        loop {
            let choice = self.choose(&screens::main_menu(), parse_menu_choice)?;
            info!("menu: {choice:?}");
            match choice {
                MenuChoice::NewGame => {
                    self.new_game()?;
                }
                MenuChoice::Profile => self.profile()?,
                MenuChoice::Statistics => {
                    let guest = Player::new("Guest");
                    let player = self.player.as_ref().unwrap_or(&guest);
                    let frame = screens::statistics(player);
                    self.ctx.ask(&frame)?;
                }
                MenuChoice::Tutorial => {
                    self.ctx.ask(&screens::tutorial())?;
                }
                MenuChoice::Leaderboard => {
                    let frame = screens::leaderboard(&self.leaderboard.entries());
                    self.ctx.ask(&frame)?;
                }
                MenuChoice::Achievements => {
                    let unlocked = self.player.as_ref().map(Player::achievements).unwrap_or(&[]);
                    let frame = screens::achievements(unlocked);
                    self.ctx.ask(&frame)?;
                }
                MenuChoice::Credits => {
                    self.ctx.ask(&screens::credits())?;
                }
                MenuChoice::Exit => {
                    self.ctx.ask(&screens::exit_message())?;
                    return Ok(());
                }
            }
        }
    }

    /// Start a run for the current player, asking them to log in first if needed.
    ///
    /// Returns `None` if there is still no player after the profile menu.
    pub fn new_game(&mut self) -> Result<Option<RunSummary>> {
        if self.player.is_none() {
            self.message("Please log in or create a profile first!")?;
            self.profile()?;
        }
        let Some(player) = self.player.as_mut() else {
            return Ok(None);
        };
        let summary = GameLoop::new(&mut self.ctx, player, &mut self.leaderboard).run()?;
        Ok(Some(summary))
    }

    pub fn profile(&mut self) -> Result<()> {
        match self.choose(&screens::profile_menu(), parse_profile_choice)? {
            ProfileChoice::Login => self.login(),
            ProfileChoice::Register => self.register(),
        }
    }

    fn login(&mut self) -> Result<()> {
        let username = self.ctx.ask(&screens::text_prompt("Enter Username:"))?;
        let username = username.trim();
        let found = match self.ctx.players.load_player(username) {
            Ok(found) => found,
            Err(e) => {
                warn!("failed to load player {username:?}: {e}");
                None
            }
        };
        match found {
            Some(player) => {
                info!("logged in as {username:?}");
                self.player = Some(player);
                self.message(&format!("Welcome back, {username}!"))
            }
            None => self.message("User not found."),
        }
    }

    fn register(&mut self) -> Result<()> {
        let username = self.ctx.ask(&screens::text_prompt("New Username:"))?;
        let username = username.trim();
        if username.is_empty() {
            return self.message("Username cannot be empty.");
        }
        if let Ok(Some(_)) = self.ctx.players.load_player(username) {
            return self.message("Username already taken.");
        }

        let player = Player::new(username);
        let saved = self.ctx.players.save_player(&player);
        self.player = Some(player);
        match saved {
            Ok(()) => {
                info!("registered {username:?}");
                self.message("Profile created!")
            }
            Err(e) => {
                warn!("failed to save new player {username:?}: {e}");
                self.message("Error saving profile.")
            }
        }
    }

    fn message(&mut self, msg: &str) -> Result<()> {
        self.ctx.ask(&screens::message(msg))?;
        Ok(())
    }

    /// Present `frame` until a line parses; invalid selections re-prompt forever.
    fn choose<T>(&mut self, frame: &Frame, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
        loop {
            let line = self.ctx.ask(frame)?;
            if let Some(choice) = parse(&line) {
                return Ok(choice);
            }
        }
    }
}
