//! Game loop - days, customers and orders
//!
//! A run moves through these phases:
//!
//! ```text
//! NotStarted → DayInProgress → DayComplete → DayInProgress → … → GameOver
//!                    │
//!                    └─ (player types "exit") → Aborted → GameOver
//! ```
//!
//! Each day draws `customers_per_day` customers up front and serves them in
//! arrival order. An order is timed from the moment its frame is presented to
//! the moment the answer line arrives. Correct orders are credited to both the
//! day and the player's total as soon as they are served.
//!
//! Persistence failures are logged and swallowed; only an input-stream fault
//! ends a run with an error.

use anyhow::{bail, Result};
use log::{debug, info, warn};

use crate::context::Context;
use crate::core::{
    check_achievements, credit_points, generate_customers, Achievement, Customer, DayReport,
    Leaderboard, Player,
};
use crate::input::is_exit_command;
use crate::screens;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    DayInProgress { day: u32 },
    DayComplete { day: u32 },
    /// The player left during `day`; remaining customers were not served.
    Aborted { day: u32 },
    GameOver,
}

/// What happened to a single customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeOutcome {
    /// Points are the credited amount (VIP bonus included, 0 on failure).
    Served { correct: bool, points: u32 },
    Abort,
}

/// Result of a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// One report per day that was started, the aborted one included.
    pub days: Vec<DayReport>,
    /// Points earned during this run.
    pub run_score: u32,
    pub rating: u8,
    pub aborted: bool,
    pub unlocked: Vec<Achievement>,
}

impl RunSummary {
    pub fn days_completed(&self) -> usize {
        self.days.iter().filter(|d| !d.aborted).count()
    }
}

pub struct GameLoop<'a> {
    ctx: &'a mut Context,
    player: &'a mut Player,
    leaderboard: &'a mut Leaderboard,
    phase: GamePhase,
}

impl<'a> GameLoop<'a> {
    pub fn new(
        ctx: &'a mut Context,
        player: &'a mut Player,
        leaderboard: &'a mut Leaderboard,
    ) -> Self {
        Self {
            ctx,
            player,
            leaderboard,
            phase: GamePhase::NotStarted,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn player(&self) -> &Player {
        self.player
    }

    /// Play a full run: opening cutscene, every day, then the game-over sequence.
    pub fn run(&mut self) -> Result<RunSummary> {
        if self.phase != GamePhase::NotStarted {
            bail!("run already played (phase {:?})", self.phase);
        }

        let days = self.ctx.config.days_per_game;
        info!(
            "run started for {:?} ({} days)",
            self.player.username(),
            days
        );
        self.ctx.ask(&screens::game_start(self.player.username(), days))?;

        let mut summary = RunSummary::default();
        for day in 1..=days {
            let report = self.run_day(day)?;
            summary.run_score += report.score;
            summary.days.push(report);
            if report.aborted {
                summary.aborted = true;
                break;
            }
            let unlocked = self.finish_day(&report)?;
            summary.unlocked.extend(unlocked);
        }

        summary.rating = self.finish_game();
        Ok(summary)
    }

    /// Serve one day's customers. Stops early if the player types the exit
    /// sentinel, leaving the phase at `Aborted`.
    pub fn run_day(&mut self, day: u32) -> Result<DayReport> {
        self.phase = GamePhase::DayInProgress { day };
        let pacing = self.ctx.config.pacing;
        self.ctx.show_for(&screens::day_transition(day), pacing.day_transition);

        let count = self.ctx.config.customers_per_day;
        let vip_probability = self.ctx.config.vip_probability;
        let mut queue = generate_customers(self.ctx.rng.as_mut(), count, vip_probability);
        info!("day {day}: {} customers", queue.len());

        let mut report = DayReport::new(day);
        while let Some(mut customer) = queue.pop_front() {
            self.ctx.show_for(&screens::customer_arrival(&customer), pacing.arrival);

            match self.serve(&mut customer)? {
                ServeOutcome::Abort => {
                    info!("day {day}: aborted with {} customers unserved", queue.len());
                    report.aborted = true;
                    self.phase = GamePhase::Aborted { day };
                    return Ok(report);
                }
                ServeOutcome::Served { correct: true, points } => {
                    report.orders_made += 1;
                    report.score += points;
                    self.player.add_score(points);
                    self.ctx.show_for(&screens::happy_customer(), pacing.reaction);
                }
                ServeOutcome::Served { correct: false, .. } => {
                    report.orders_missed += 1;
                    self.ctx.show_for(&screens::unhappy_customer(), pacing.reaction);
                }
            }
        }

        self.phase = GamePhase::DayComplete { day };
        Ok(report)
    }

    /// Present one customer's order, time the answer and score it.
    pub fn serve(&mut self, customer: &mut Customer) -> Result<ServeOutcome> {
        self.ctx.present(&screens::order(customer));
        let started = self.ctx.clock.now();
        let answer = self.ctx.read_line()?;
        let elapsed = self.ctx.clock.now().saturating_sub(started);

        if is_exit_command(&answer) {
            return Ok(ServeOutcome::Abort);
        }

        let correct = customer.order().check(&answer);
        customer.order_mut().complete(correct, elapsed);
        let points = credit_points(customer.order().score(), customer.is_vip());
        debug!(
            "{} ordered {:?}: correct={} elapsed={:.2}s vip={} points={}",
            customer.name(),
            customer.order().drink_name(),
            correct,
            elapsed.as_secs_f64(),
            customer.is_vip(),
            points
        );

        self.ctx.ask(&screens::order_result(correct, points))?;
        Ok(ServeOutcome::Served { correct, points })
    }

    fn finish_day(&mut self, report: &DayReport) -> Result<Vec<Achievement>> {
        self.player.increment_days_played();
        let unlocked = check_achievements(self.player, report);
        info!(
            "day {} complete: made={} missed={} score={}",
            report.day, report.orders_made, report.orders_missed, report.score
        );
        self.ctx.ask(&screens::day_summary(report, &unlocked))?;
        self.save_player();
        Ok(unlocked)
    }

    /// Rate the run, record the leaderboard entry and persist everything.
    fn finish_game(&mut self) -> u8 {
        self.phase = GamePhase::GameOver;
        self.player.increment_games_played();
        let stars = self.player.rating();
        info!(
            "game over for {:?}: total={} rating={}",
            self.player.username(),
            self.player.total_score(),
            stars
        );

        let delay = self.ctx.config.pacing.ending;
        self.ctx.show_for(&screens::ending(stars), delay);

        self.leaderboard
            .record(self.player.username(), self.player.total_score());
        self.save_player();
        if let Err(e) = self.ctx.leaderboard.save_leaderboard(self.leaderboard.scores()) {
            warn!("failed to save leaderboard: {e}");
        }
        stars
    }

    fn save_player(&mut self) {
        if let Err(e) = self.ctx.players.save_player(self.player) {
            warn!("failed to save player {:?}: {e}", self.player.username());
        }
    }
}
