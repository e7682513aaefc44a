//! Headless controller.
//!
//! Dispatches parsed commands onto a `Session` and writes one-line
//! responses, standing in for the UI event handlers of the browser viewer.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::SessionError;
use crate::map::SiteId;
use crate::protocol::parser::Command;
use crate::session::Session;

/// Whether the main loop should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Default)]
pub struct Controller {
    pub session: Session,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one command, writing its response to `out`.
    pub fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<Flow> {
        match cmd {
            Command::Map { path } => self.handle_map(&path, out)?,
            Command::Moves { path } => self.handle_moves(&path, out)?,
            Command::Next => {
                self.session.step_forward();
                self.write_step(out)?;
            }
            Command::Prev => {
                self.session.step_backward();
                self.write_step(out)?;
            }
            Command::Reset => {
                self.session.reset();
                self.write_step(out)?;
            }
            Command::Seek { step } => match self.session.seek(step) {
                Ok(_) => self.write_step(out)?,
                Err(e) => writeln!(out, "error {}", e)?,
            },
            Command::Play => {
                self.session.toggle_play();
                self.write_step(out)?;
                writeln!(out, "playing {}", self.session.is_playing())?;
            }
            Command::Tick => {
                self.session.tick();
                self.write_step(out)?;
                writeln!(out, "playing {}", self.session.is_playing())?;
            }
            Command::Scores => match self.session.scores() {
                Ok(scores) => writeln!(out, "scores {}", to_json(&scores))?,
                Err(e) => writeln!(out, "error {}", e)?,
            },
            Command::Edges => match self.external_edges() {
                Ok(edges) => writeln!(out, "edges {}", to_json(&edges))?,
                Err(e) => writeln!(out, "error {}", e)?,
            },
            Command::Controls => {
                let c = self.session.controls();
                writeln!(
                    out,
                    "controls prev {} next {} play {} moves {} max {}",
                    c.prev, c.next, c.play, c.moves_input, c.slider_max
                )?;
            }
            Command::SetOption { name, value } => {
                if let Err(e) = self.session.set_option(&name, value.as_deref()) {
                    tracing::warn!("{}", e);
                }
            }
            Command::IsReady => writeln!(out, "readyok")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    fn handle_map<W: Write>(&mut self, path: &Path, out: &mut W) -> io::Result<()> {
        let ticket = self.session.begin_map_load();
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => return writeln!(out, "error failed to read {}: {}", path.display(), e),
        };
        match self.session.complete_map_load(ticket, &json) {
            Ok(()) => {
                let loaded = self.session.map().map(|m| &m.map);
                let (sites, rivers, mines) = loaded
                    .map(|m| (m.site_count(), m.rivers().len(), m.mines().len()))
                    .unwrap_or_default();
                writeln!(out, "mapok sites {} rivers {} mines {}", sites, rivers, mines)
            }
            Err(e) => writeln!(out, "error {}", e),
        }
    }

    fn handle_moves<W: Write>(&mut self, path: &Path, out: &mut W) -> io::Result<()> {
        if self.session.map().is_none() {
            return writeln!(out, "error {}", SessionError::NoMap);
        }
        let ticket = self.session.begin_moves_load();
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => return writeln!(out, "error failed to read {}: {}", path.display(), e),
        };
        match self.session.complete_moves_load(ticket, &json) {
            Ok(()) => writeln!(out, "movesok {}", self.session.len()),
            Err(e) => writeln!(out, "error {}", e),
        }
    }

    fn write_step<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "step {}/{}", self.session.step(), self.session.len())
    }

    /// Attributed edges with sites translated back to external ids.
    fn external_edges(&self) -> Result<BTreeMap<u32, Vec<(SiteId, SiteId)>>, SessionError> {
        let edges = self.session.edges()?;
        let map = &self.session.map().ok_or(SessionError::NoMap)?.map;
        Ok(edges
            .into_iter()
            .map(|(punter, held)| {
                let pairs = held
                    .iter()
                    .filter_map(|e| Some((map.site_id(e.source)?.clone(), map.site_id(e.target)?.clone())))
                    .collect();
                (punter, pairs)
            })
            .collect())
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("\"{}\"", e))
}
