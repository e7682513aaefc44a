//! Viewer session state.
//!
//! Owns the loaded map, the move log, the replay cursor and playback state.
//! Loads are all-or-nothing: a failed load leaves the previous state intact.
//! File reads may finish out of order, so every load is tagged with a
//! generation and only the latest begun load of each kind may complete.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::config::{OptionError, ViewerConfig};
use crate::error::SessionError;
use crate::map::{load_graph, DistanceTable, GameMap};
use crate::protocol::json::{parse_map, parse_moves};
use crate::render::{edge_layers, player_colors, DrawnEdge, Layout, Rgb};
use crate::replay::{MoveLog, PunterId, ReplayCursor};
use crate::score::{edges_at, score_at, ClaimedEdge, ScoreCache, Scores};

/// A map together with its distance table.
#[derive(Debug, Clone)]
pub struct LoadedMap {
    pub map: GameMap,
    pub distances: DistanceTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadKind {
    Map,
    Moves,
}

/// Handle for a load in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    kind: LoadKind,
    generation: u64,
}

/// Which controls the UI should enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub moves_input: bool,
    pub prev: bool,
    pub next: bool,
    pub play: bool,
    pub slider: bool,
    pub slider_max: usize,
}

#[derive(Debug, Default)]
pub struct Session {
    map: Option<LoadedMap>,
    log: Option<MoveLog>,
    cursor: ReplayCursor,
    cache: ScoreCache,
    playing: bool,
    config: ViewerConfig,
    map_generation: u64,
    moves_generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ViewerConfig) -> Self {
        Session { config, ..Self::default() }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        self.config.set_option(name, value)
    }

    /// Starts a map load. Any earlier map or moves load still in flight
    /// becomes stale.
    pub fn begin_map_load(&mut self) -> LoadTicket {
        self.map_generation += 1;
        self.moves_generation += 1;
        LoadTicket { kind: LoadKind::Map, generation: self.map_generation }
    }

    /// Starts a moves load. An earlier moves load still in flight becomes stale.
    pub fn begin_moves_load(&mut self) -> LoadTicket {
        self.moves_generation += 1;
        LoadTicket { kind: LoadKind::Moves, generation: self.moves_generation }
    }

    /// Finishes a map load begun with `begin_map_load`.
    pub fn complete_map_load(&mut self, ticket: LoadTicket, json: &str) -> Result<(), SessionError> {
        self.check_ticket(ticket, LoadKind::Map)?;
        let result = parse_map(json).and_then(|raw| load_graph(&raw));
        let (map, distances) = match result {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!(error = %e, "map load rejected");
                return Err(e.into());
            }
        };
        info!(
            sites = map.site_count(),
            rivers = map.rivers().len(),
            mines = map.mines().len(),
            "map loaded"
        );
        self.map = Some(LoadedMap { map, distances });
        self.log = None;
        self.replace_cursor(0);
        Ok(())
    }

    /// Finishes a moves load begun with `begin_moves_load`. Requires a map.
    pub fn complete_moves_load(&mut self, ticket: LoadTicket, json: &str) -> Result<(), SessionError> {
        self.check_ticket(ticket, LoadKind::Moves)?;
        let loaded = self.map.as_ref().ok_or(SessionError::NoMap)?;
        let result = parse_moves(json).and_then(|raw| MoveLog::from_raw(&raw, &loaded.map));
        let log = match result {
            Ok(log) => log,
            Err(e) => {
                warn!(error = %e, "moves load rejected");
                return Err(e.into());
            }
        };
        info!(moves = log.len(), players = log.players().len(), "moves loaded");
        let len = log.len();
        self.log = Some(log);
        self.replace_cursor(len);
        Ok(())
    }

    /// Loads a map synchronously.
    pub fn load_map(&mut self, json: &str) -> Result<(), SessionError> {
        let ticket = self.begin_map_load();
        self.complete_map_load(ticket, json)
    }

    /// Loads a move log synchronously against the current map.
    pub fn load_moves(&mut self, json: &str) -> Result<(), SessionError> {
        if self.map.is_none() {
            return Err(SessionError::NoMap);
        }
        let ticket = self.begin_moves_load();
        self.complete_moves_load(ticket, json)
    }

    fn check_ticket(&self, ticket: LoadTicket, kind: LoadKind) -> Result<(), SessionError> {
        let latest = match kind {
            LoadKind::Map => self.map_generation,
            LoadKind::Moves => self.moves_generation,
        };
        if ticket.kind != kind || ticket.generation != latest {
            debug!(ticket = ticket.generation, latest, "stale load discarded");
            return Err(SessionError::Stale { ticket: ticket.generation, latest });
        }
        Ok(())
    }

    fn replace_cursor(&mut self, len: usize) {
        self.cursor = ReplayCursor::new(len);
        self.cache.clear();
        self.playing = false;
    }

    pub fn map(&self) -> Option<&LoadedMap> {
        self.map.as_ref()
    }

    pub fn log(&self) -> Option<&MoveLog> {
        self.log.as_ref()
    }

    pub fn step(&self) -> usize {
        self.cursor.step()
    }

    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    pub fn step_forward(&mut self) -> usize {
        self.cursor.step_forward()
    }

    pub fn step_backward(&mut self) -> usize {
        self.cursor.step_backward()
    }

    /// Jumps to `step`. Stops playback; out-of-range requests change nothing.
    pub fn seek(&mut self, step: usize) -> Result<usize, SessionError> {
        if !self.cursor.seek(step) {
            return Err(SessionError::CursorOutOfRange { requested: step, len: self.cursor.len() });
        }
        self.playing = false;
        Ok(step)
    }

    pub fn reset(&mut self) {
        self.cursor.reset();
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Starts or stops playback. Starting at the end rewinds to the beginning.
    pub fn toggle_play(&mut self) -> bool {
        if self.playing {
            self.playing = false;
        } else if !self.cursor.is_empty() {
            if self.cursor.at_end() {
                self.cursor.reset();
            }
            self.playing = true;
        }
        self.playing
    }

    /// Advances one playback tick. Playback stops on reaching the end.
    pub fn tick(&mut self) -> usize {
        if self.playing {
            self.cursor.step_forward();
            if self.cursor.at_end() {
                self.playing = false;
            }
        }
        self.cursor.step()
    }

    fn loaded(&self) -> Result<(&LoadedMap, &MoveLog), SessionError> {
        let map = self.map.as_ref().ok_or(SessionError::NoMap)?;
        let log = self.log.as_ref().ok_or(SessionError::NoMoves)?;
        Ok((map, log))
    }

    /// Scores at the current step, memoized per step.
    pub fn scores(&mut self) -> Result<Scores, SessionError> {
        let map = self.map.as_ref().ok_or(SessionError::NoMap)?;
        let log = self.log.as_ref().ok_or(SessionError::NoMoves)?;
        let step = self.cursor.step();
        let scores = self
            .cache
            .get_or_compute(step, || score_at(&map.map, &map.distances, log, step));
        Ok(scores.clone())
    }

    pub fn edges(&self) -> Result<BTreeMap<PunterId, Vec<ClaimedEdge>>, SessionError> {
        let (_, log) = self.loaded()?;
        Ok(edges_at(log, self.cursor.step()))
    }

    pub fn layers(&self) -> Result<Vec<DrawnEdge>, SessionError> {
        let (_, log) = self.loaded()?;
        Ok(edge_layers(log, self.cursor.step()))
    }

    pub fn colors(&self) -> BTreeMap<PunterId, Rgb> {
        self.log.as_ref().map(|log| player_colors(log.players())).unwrap_or_default()
    }

    /// Canvas layout for the loaded map within the configured viewport.
    pub fn layout(&self) -> Option<Layout> {
        self.map.as_ref().map(|m| {
            Layout::fit(m.map.sites(), self.config.viewport_width, self.config.viewport_height)
        })
    }

    pub fn controls(&self) -> Controls {
        let has_log = self.log.is_some();
        let len = self.cursor.len();
        Controls {
            moves_input: self.map.is_some(),
            prev: has_log && self.cursor.step() > 0,
            next: has_log && self.cursor.step() < len,
            play: has_log && len > 0,
            slider: has_log && len > 0,
            slider_max: len,
        }
    }
}
