//! Turn and level controller
//!
//! Owns the board and session state and is the only thing that mutates
//! them. Player input arrives as cell clicks and hovers; the enemy answers
//! each completed player action. All methods take `&mut self`, so an action
//! in flight (awaiting a damage display) cannot be interleaved with another.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::battle::ai::{EnemyAction, EnemyPolicy, GreedyEnemy};
use crate::battle::combat::{resolve_attack, AttackOutcome};
use crate::battle::events::{GameEventKind, GameEventLog};
use crate::battle::level::{calculate_score, is_final_theme, next_theme_index, team_size_for_level};
use crate::board::{attack_range, move_range, PositionRegistry};
use crate::character::{generate_team, CharacterType};
use crate::core::config::GameConfig;
use crate::core::error::{Result, SkirmishError};
use crate::core::types::{is_valid_cell, Cell, Side, Turn, UnitId};
use crate::persistence::{GameSnapshot, StateStore};
use crate::presentation::{Cursor, HighlightColor, Presenter, Theme};

/// Where the controller is in the turn cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPhase {
    #[default]
    PlayerSelecting, // Nothing selected
    PlayerUnitSelected, // A player unit is ready to act
    ActionResolving,    // Move or attack in progress
    EnemyTurn,
    GameWon,
    GameLost,
}

impl TurnPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnPhase::GameWon | TurnPhase::GameLost)
    }
}

/// Level units are spawned at, both for new games and level fills
const SPAWN_LEVEL: u32 = 1;

pub struct GameController<P: Presenter, S: StateStore> {
    presenter: P,
    store: S,
    config: GameConfig,
    policy: Box<dyn EnemyPolicy>,
    rng: StdRng,

    registry: PositionRegistry,
    selected: Option<UnitId>,
    phase: TurnPhase,
    current_turn: Turn,
    theme_index: usize,
    current_score: u32,
    max_score: u32,
    wipe_prompted: bool,

    turn_number: u32,
    events: GameEventLog,
}

impl<P: Presenter, S: StateStore> GameController<P, S> {
    pub fn new(presenter: P, store: S, config: GameConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            presenter,
            store,
            config,
            policy: Box::new(GreedyEnemy::new()),
            rng,
            registry: PositionRegistry::new(),
            selected: None,
            phase: TurnPhase::PlayerSelecting,
            current_turn: Turn::Player,
            theme_index: 0,
            current_score: 0,
            max_score: 0,
            wipe_prompted: false,
            turn_number: 0,
            events: GameEventLog::new(),
        })
    }

    /// Replace the enemy AI
    pub fn with_policy(mut self, policy: Box<dyn EnemyPolicy>) -> Self {
        self.policy = policy;
        self
    }

    // ---- accessors ----

    pub fn registry(&self) -> &PositionRegistry {
        &self.registry
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn current_turn(&self) -> Turn {
        self.current_turn
    }

    pub fn selected(&self) -> Option<UnitId> {
        self.selected
    }

    pub fn selected_cell(&self) -> Option<Cell> {
        self.selected
            .and_then(|id| self.registry.get(id))
            .map(|p| p.cell)
    }

    pub fn theme_index(&self) -> usize {
        self.theme_index
    }

    pub fn theme(&self) -> Theme {
        Theme::from_index(self.theme_index)
    }

    pub fn current_score(&self) -> u32 {
        self.current_score
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn is_game_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn events(&self) -> &GameEventLog {
        &self.events
    }

    // ---- session lifecycle ----

    /// Read the stored high score and start the first game
    pub fn init(&mut self) -> Result<()> {
        self.max_score = match self.store.load() {
            Ok(snapshot) => snapshot.and_then(|s| s.max_score).unwrap_or(0),
            Err(e) => {
                warn!("could not read stored high score: {}", e);
                0
            }
        };
        info!(max_score = self.max_score, "controller initialised");
        self.start_session()
    }

    /// Start over. The first call per controller offers to wipe the high score.
    pub fn new_game(&mut self) -> Result<()> {
        if !self.wipe_prompted {
            self.wipe_prompted = true;
            if self.presenter.confirm("Reset the high score?") {
                self.max_score = 0;
                if let Err(e) = self.store.clear() {
                    warn!("could not clear stored state: {}", e);
                }
                info!("high score wiped");
            }
        }
        self.presenter.show_message("New game started!");
        self.start_session()
    }

    fn start_session(&mut self) -> Result<()> {
        self.selected = None;
        self.theme_index = 0;
        self.current_turn = Turn::Player;
        self.phase = TurnPhase::PlayerSelecting;
        self.turn_number = 0;
        self.events.clear();

        let size = self.config.starting_team_size;
        let mut registry = PositionRegistry::new();
        self.spawn_into(&mut registry, Side::Player, size)?;
        self.spawn_into(&mut registry, Side::Enemy, size)?;
        self.registry = registry;

        self.presenter.set_theme(self.theme());
        self.presenter.render(self.registry.positions());
        self.update_score();

        self.log(GameEventKind::GameStarted, format!("{size} vs {size}"));
        info!(team_size = size, "game started");
        Ok(())
    }

    /// Generate `count` level-1 units for `side` and place them in its
    /// columns of `registry`
    fn spawn_into(
        &mut self,
        registry: &mut PositionRegistry,
        side: Side,
        count: usize,
    ) -> Result<Vec<UnitId>> {
        let team = generate_team(
            CharacterType::for_side(side),
            SPAWN_LEVEL,
            count,
            &mut self.rng,
        )?;
        let columns = match side {
            Side::Player => &self.config.player_columns,
            Side::Enemy => &self.config.enemy_columns,
        };
        registry.place_team(team, columns, &mut self.rng)
    }

    // ---- player input ----

    /// Handle a click on `cell`
    ///
    /// Ignored while the game is over or the enemy is acting. Invalid
    /// choices are reported through the presenter and change nothing.
    pub async fn on_cell_click(&mut self, cell: Cell) -> Result<()> {
        if self.phase.is_terminal() || self.current_turn != Turn::Player {
            debug!(cell, "click ignored");
            return Ok(());
        }
        if !is_valid_cell(cell) {
            self.presenter.show_error("That cell is not on the board.");
            return Ok(());
        }

        let occupant = self.registry.find_at(cell).map(|p| (p.id, p.side()));
        let selected = self
            .selected
            .and_then(|id| self.registry.get(id))
            .map(|p| (p.id, p.cell, p.character.character_type()));

        match (selected, occupant) {
            (Some((id, from, kind)), None) => {
                if move_range(&self.registry, kind, from).contains(&cell) {
                    self.player_move(id, from, cell)?;
                    self.enemy_turn().await
                } else {
                    self.presenter.show_error("Cannot move to this cell.");
                    Ok(())
                }
            }
            (None, None) => {
                self.presenter.show_error("There is no character in this cell.");
                Ok(())
            }
            (Some((id, from, kind)), Some((_, Side::Enemy))) => {
                if attack_range(kind, from).contains(&cell) {
                    self.player_attack(id, cell).await
                } else {
                    self.presenter.show_error("Cannot perform this action.");
                    Ok(())
                }
            }
            (_, Some((target, Side::Player))) => {
                self.select(target, cell);
                Ok(())
            }
            (None, Some((_, Side::Enemy))) => {
                self.presenter
                    .show_error("This character does not belong to you.");
                Ok(())
            }
        }
    }

    fn select(&mut self, id: UnitId, cell: Cell) {
        if let Some(previous) = self.selected_cell() {
            self.presenter.clear_highlight(previous);
        }
        self.selected = Some(id);
        self.phase = TurnPhase::PlayerUnitSelected;
        self.presenter.highlight_cell(cell, HighlightColor::Yellow);
        debug!(cell, "unit selected");
    }

    fn deselect(&mut self) {
        if let Some(cell) = self.selected_cell() {
            self.presenter.clear_highlight(cell);
        }
        self.selected = None;
    }

    fn player_move(&mut self, id: UnitId, from: Cell, to: Cell) -> Result<()> {
        self.phase = TurnPhase::ActionResolving;
        self.deselect();
        self.registry.move_unit(id, to)?;
        self.presenter.render(self.registry.positions());
        self.log(
            GameEventKind::UnitMoved { unit: id, from, to },
            format!("player unit {from} -> {to}"),
        );
        debug!(from, to, "player moved");
        Ok(())
    }

    async fn player_attack(&mut self, attacker: UnitId, target_cell: Cell) -> Result<()> {
        self.phase = TurnPhase::ActionResolving;
        let outcome = self.attack(attacker, target_cell).await?;
        self.presenter.render(self.registry.positions());
        self.update_score();

        if outcome.killed && self.registry.team(Side::Enemy).is_empty() {
            self.evaluate_round_end();
            return Ok(());
        }
        self.enemy_turn().await
    }

    /// Shared attack path for both sides
    async fn attack(&mut self, attacker: UnitId, target_cell: Cell) -> Result<AttackOutcome> {
        let character = self
            .registry
            .get(attacker)
            .map(|p| p.character.clone())
            .ok_or(SkirmishError::UnitNotFound(attacker))?;

        let outcome = resolve_attack(
            &mut self.registry,
            &mut self.presenter,
            &character,
            target_cell,
        )
        .await?;

        self.log(
            GameEventKind::UnitAttacked {
                attacker,
                target: outcome.target,
                damage: outcome.damage,
            },
            format!("{} hits {} for {}", character.character_type(), target_cell, outcome.damage),
        );

        if outcome.killed {
            if self.selected == Some(outcome.target) {
                self.presenter.clear_highlight(target_cell);
                self.selected = None;
            }
            self.log(
                GameEventKind::UnitDied {
                    unit: outcome.target,
                    cell: target_cell,
                    side: outcome.target_side,
                },
                format!("{:?} unit died at {}", outcome.target_side, target_cell),
            );
        }
        Ok(outcome)
    }

    // ---- enemy turn ----

    /// Let the enemy act once, then hand the turn back to the player
    pub async fn enemy_turn(&mut self) -> Result<()> {
        if self.phase.is_terminal() {
            return Ok(());
        }
        self.current_turn = Turn::Enemy;
        self.phase = TurnPhase::EnemyTurn;
        self.turn_number += 1;

        if self.registry.team(Side::Player).is_empty() {
            self.declare_loss();
            return Ok(());
        }

        match self.policy.decide(&self.registry) {
            Some(EnemyAction::Attack {
                attacker,
                target_cell,
            }) => {
                self.attack(attacker, target_cell).await?;
                self.presenter.render(self.registry.positions());
                self.update_score();
                if self.registry.team(Side::Player).is_empty() {
                    self.declare_loss();
                    return Ok(());
                }
            }
            Some(EnemyAction::Move { unit, to }) => {
                let from = self
                    .registry
                    .get(unit)
                    .map(|p| p.cell)
                    .ok_or(SkirmishError::UnitNotFound(unit))?;
                self.registry.move_unit(unit, to)?;
                self.presenter.render(self.registry.positions());
                self.log(
                    GameEventKind::UnitMoved { unit, from, to },
                    format!("enemy unit {from} -> {to}"),
                );
            }
            None => debug!("enemy passes"),
        }

        self.current_turn = Turn::Player;
        self.phase = if self.selected.is_some() {
            TurnPhase::PlayerUnitSelected
        } else {
            TurnPhase::PlayerSelecting
        };
        Ok(())
    }

    // ---- round and game end ----

    /// Check whether a side has been wiped out and act on it.
    /// Returns true if the round or game ended.
    pub fn evaluate_round_end(&mut self) -> bool {
        if self.phase.is_terminal() {
            return true;
        }
        let players_left = !self.registry.team(Side::Player).is_empty();
        let enemies_left = !self.registry.team(Side::Enemy).is_empty();

        match (players_left, enemies_left) {
            (true, false) if is_final_theme(self.theme_index) => {
                self.declare_win();
                true
            }
            (true, false) => {
                self.presenter
                    .show_message("Round complete! Moving on to the next level.");
                self.track_max_score();
                if let Err(e) = self.start_next_level() {
                    warn!("failed to start next level: {}", e);
                    self.presenter.show_error(&format!("Could not start the next level: {e}"));
                }
                true
            }
            (false, _) => {
                self.declare_loss();
                true
            }
            (true, true) => false,
        }
    }

    fn declare_win(&mut self) {
        self.update_score();
        self.track_max_score();
        self.finish(TurnPhase::GameWon);
        self.presenter
            .show_message("Congratulations! You have completed every level!");
        let score = self.current_score;
        self.log(GameEventKind::GameWon { score }, format!("won with {score}"));
        info!(score, "game won");
    }

    fn declare_loss(&mut self) {
        self.update_score();
        self.track_max_score();
        self.finish(TurnPhase::GameLost);
        self.presenter.show_message("You lost. Game over!");
        self.log(GameEventKind::GameLost, "player team destroyed".to_string());
        info!("game lost");
    }

    fn finish(&mut self, phase: TurnPhase) {
        self.deselect();
        self.phase = phase;
        self.current_turn = Turn::Player;
    }

    /// Advance the theme, level up survivors and top both sides up
    ///
    /// The new roster is built on a copy. If placement fails the current
    /// round is left exactly as it was.
    pub fn start_next_level(&mut self) -> Result<()> {
        let theme_index = next_theme_index(self.theme_index);
        let level = theme_index + 1;
        let target = team_size_for_level(level);

        let mut registry = self.registry.clone();
        for id in registry.team(Side::Player).members().to_vec() {
            if let Some(unit) = registry.get_mut(id) {
                unit.character.level_up();
            }
        }

        let players_needed = target.saturating_sub(registry.team_size(Side::Player));
        let enemies_needed = target.saturating_sub(registry.team_size(Side::Enemy));
        self.spawn_into(&mut registry, Side::Player, players_needed)?;
        self.spawn_into(&mut registry, Side::Enemy, enemies_needed)?;

        self.deselect();
        self.registry = registry;
        self.theme_index = theme_index;
        self.presenter.set_theme(self.theme());

        self.current_turn = Turn::Player;
        self.phase = TurnPhase::PlayerSelecting;
        self.presenter.render(self.registry.positions());
        self.update_score();

        self.log(
            GameEventKind::RoundWon { level },
            format!("advanced to {} ({target} per side)", self.theme()),
        );
        info!(level, theme = %self.theme(), team_size = target, "next level");
        Ok(())
    }

    // ---- score ----

    fn update_score(&mut self) {
        self.current_score = calculate_score(&self.registry);
        self.presenter
            .update_score(self.current_score, self.max_score);
    }

    fn track_max_score(&mut self) {
        if self.current_score <= self.max_score {
            return;
        }
        info!(old = self.max_score, new = self.current_score, "new high score");
        self.max_score = self.current_score;
        self.presenter
            .update_score(self.current_score, self.max_score);
        if let Err(e) = self.persist_max_score() {
            warn!("could not save high score: {}", e);
        }
    }

    /// Merge the high score into whatever the store already holds
    fn persist_max_score(&mut self) -> Result<()> {
        let mut snapshot = self.store.load().ok().flatten().unwrap_or_default();
        snapshot.max_score = Some(self.max_score);
        self.store.save(&snapshot)
    }

    // ---- hover ----

    pub fn on_cell_enter(&mut self, cell: Cell) {
        if self.phase.is_terminal() || !is_valid_cell(cell) {
            return;
        }
        let selected = self
            .selected
            .and_then(|id| self.registry.get(id))
            .map(|p| (p.cell, p.character.character_type()));

        if let Some(unit) = self.registry.find_at(cell) {
            let info = unit.character.info();
            let side = unit.side();
            self.presenter.show_tooltip(&info, cell);

            match (side, selected) {
                (Side::Player, _) => self.presenter.set_cursor(Cursor::Pointer),
                (Side::Enemy, Some((from, kind))) => {
                    if attack_range(kind, from).contains(&cell) {
                        self.presenter.set_cursor(Cursor::Crosshair);
                        self.presenter.highlight_cell(cell, HighlightColor::Red);
                    } else {
                        self.presenter.set_cursor(Cursor::NotAllowed);
                    }
                }
                (Side::Enemy, None) => {}
            }
            return;
        }

        match selected {
            Some((from, kind)) => {
                if move_range(&self.registry, kind, from).contains(&cell) {
                    self.presenter.set_cursor(Cursor::Pointer);
                    self.presenter.highlight_cell(cell, HighlightColor::Green);
                } else {
                    self.presenter.set_cursor(Cursor::NotAllowed);
                }
                self.presenter.highlight_cell(from, HighlightColor::Yellow);
            }
            None => self.presenter.set_cursor(Cursor::Auto),
        }
    }

    pub fn on_cell_leave(&mut self, cell: Cell) {
        if self.phase.is_terminal() || !is_valid_cell(cell) {
            return;
        }
        self.presenter.hide_tooltip(cell);
        // The selected unit keeps its highlight
        if self.selected_cell() != Some(cell) {
            self.presenter.clear_highlight(cell);
        }
    }

    // ---- save / load ----

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(
            &self.registry,
            self.theme_index,
            self.current_turn == Turn::Player,
            self.max_score,
        )
    }

    /// Write the current game to the store
    pub fn save_game(&mut self) -> Result<()> {
        if self.phase.is_terminal() {
            return Ok(());
        }
        let snapshot = self.snapshot();
        if let Err(e) = self.store.save(&snapshot) {
            self.presenter
                .show_error(&format!("Failed to save game: {e}"));
            return Err(e);
        }
        self.presenter.show_message("Game saved");
        self.log(
            GameEventKind::GameSaved,
            format!("{} units", self.registry.positions().len()),
        );
        info!(level = self.theme_index + 1, "game saved");
        Ok(())
    }

    /// Restore the stored game, all or nothing
    ///
    /// Load problems are shown through the presenter and leave the current
    /// game untouched. If the save was taken on the enemy's turn, the enemy
    /// moves right away.
    pub async fn load_game(&mut self) -> Result<()> {
        if self.phase.is_terminal() {
            return Ok(());
        }

        let snapshot = match self.store.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                self.presenter
                    .show_error("Failed to load game: no saved game found");
                return Ok(());
            }
            Err(e) => {
                warn!("load failed: {}", e);
                self.presenter.show_error(&format!("Failed to load game: {e}"));
                return Ok(());
            }
        };

        let (registry, theme_index) = match restore(&snapshot) {
            Ok(restored) => restored,
            Err(e) => {
                warn!("restore failed: {}", e);
                self.presenter
                    .show_error(&format!("Failed to restore game: {e}"));
                return Ok(());
            }
        };

        self.deselect();
        self.registry = registry;
        self.theme_index = theme_index;
        self.max_score = snapshot.max_score.unwrap_or(self.max_score);
        self.current_turn = Turn::Player;
        self.phase = TurnPhase::PlayerSelecting;

        self.presenter.set_theme(self.theme());
        self.presenter.render(self.registry.positions());
        self.update_score();
        self.presenter.show_message("Game loaded successfully!");

        let level = theme_index + 1;
        self.log(
            GameEventKind::GameLoaded { level },
            format!("{} units", self.registry.positions().len()),
        );
        info!(level, units = self.registry.positions().len(), "game loaded");

        if !snapshot.player_move() {
            self.enemy_turn().await?;
        }
        self.evaluate_round_end();
        Ok(())
    }

    fn log(&mut self, kind: GameEventKind, description: String) {
        self.events.push(kind, description, self.turn_number);
    }
}

fn restore(snapshot: &GameSnapshot) -> Result<(PositionRegistry, usize)> {
    Ok((snapshot.to_registry()?, snapshot.theme_index()?))
}
