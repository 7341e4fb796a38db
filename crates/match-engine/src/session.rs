//! Game Session
//!
//! Owns everything that belongs to one board: layout, connections, the
//! in-flight gesture and the last verdict. Regenerating replaces all of
//! it at once; between regenerations only connections are added.

use rand::Rng;

use crate::board::Board;
use crate::catalog::PairCatalog;
use crate::config::GameConfig;
use crate::connection::{Connection, ConnectionStore};
use crate::error::{ConfigError, DropRejected};
use crate::evaluator::{evaluate, Verdict};
use crate::geometry::Point;
use crate::gesture::DragController;
use crate::renderer::LineRenderer;
use crate::surface::RenderSurface;

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    catalog: PairCatalog,
    renderer: LineRenderer,
    board: Board,
    connections: ConnectionStore,
    drag: DragController,
    verdict: Option<Verdict>,
    retry_visible: bool,
}

impl Session {
    /// Session with an empty board; call [`Session::generate`] to deal one
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let catalog = config.catalog()?;
        Ok(Self::with_catalog(config, catalog))
    }

    fn with_catalog(config: GameConfig, catalog: PairCatalog) -> Self {
        Self {
            renderer: LineRenderer::from_config(&config),
            config,
            catalog,
            board: Board::default(),
            connections: ConnectionStore::new(),
            drag: DragController::new(),
            verdict: None,
            retry_visible: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &PairCatalog {
        &self.catalog
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn connections(&self) -> &ConnectionStore {
        &self.connections
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn retry_visible(&self) -> bool {
        self.retry_visible
    }

    /// Text for the result area; empty until the board is checked
    pub fn result_message(&self) -> &str {
        self.verdict
            .as_ref()
            .map(|v| v.message(&self.config))
            .unwrap_or("")
    }

    /// Deal a fresh board and forget everything about the previous one
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let generation = self.board.generation.wrapping_add(1);
        self.board = Board::generate(&self.catalog, &self.config, generation, rng);
        self.connections.clear();
        self.drag.cancel();
        self.verdict = None;
        self.retry_visible = false;
        log::debug!(
            "[BOARD] generation {}: items={:?} slots={:?}",
            generation,
            self.board.items.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
            self.board.slots.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
        );
    }

    /// Erase every stroke on the overlay
    pub fn reset_surface<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        self.renderer.clear_surface(surface);
    }

    /// Regenerate and wipe the overlay (retry control)
    pub fn retry<R: Rng + ?Sized, S: RenderSurface + ?Sized>(&mut self, rng: &mut R, surface: &mut S) {
        self.generate(rng);
        self.reset_surface(surface);
    }

    /// Gesture started on `item`. Returns false (and stays idle) when the
    /// name is not an item on this board.
    pub fn begin_drag(&mut self, item: &str) -> bool {
        if !self.board.has_item(item) {
            log::debug!("[DND] ignore start on unknown item {}", item);
            return false;
        }
        self.drag.begin(item);
        true
    }

    pub fn track_drag(&mut self, point: Point) {
        self.drag.track(point);
    }

    /// Gesture ended away from any slot
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Gesture ended over `target`. On success the connection is stored
    /// and its line drawn; on rejection nothing but the gesture changes.
    pub fn drop_on<S: RenderSurface + ?Sized>(
        &mut self,
        target: &str,
        surface: &mut S,
    ) -> Result<&Connection, DropRejected> {
        let item = self.drag.finish(Some(target)).ok_or(DropRejected::NoActiveItem)?;
        if !self.board.has_item(&item) {
            return Err(DropRejected::UnknownItem(item));
        }
        if !self.board.has_slot(target) {
            return Err(DropRejected::UnknownTarget(target.to_string()));
        }

        let connection = self.connections.try_connect(&item, target)?;
        log::debug!("[DND] connected {} -> {}", connection.left, connection.right);
        self.renderer.draw_connection(surface, connection);
        Ok(connection)
    }

    /// Resize the overlay to the container and redraw every connection
    pub fn sync_surface<S: RenderSurface + ?Sized>(&self, surface: &mut S) -> usize {
        self.renderer.sync_size(surface, &self.connections)
    }

    /// Evaluate the board; failure reveals the retry control
    pub fn check_results(&mut self) -> Verdict {
        let verdict = evaluate(&self.catalog, &self.connections);
        match verdict {
            Verdict::Success => log::info!("[CHECK] all {} pairs correct", self.catalog.len()),
            Verdict::Failure {
                correct,
                attempted,
                expected,
            } => log::info!(
                "[CHECK] failed: {} correct of {} attempted, {} expected",
                correct,
                attempted,
                expected
            ),
        }
        self.retry_visible = !verdict.is_success();
        self.verdict = Some(verdict);
        verdict
    }

    pub fn is_item_connected(&self, item: &str) -> bool {
        self.connections.is_left_connected(item)
    }

    pub fn is_slot_connected(&self, slot: &str) -> bool {
        self.connections.is_right_connected(slot)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_catalog(GameConfig::default(), PairCatalog::reference())
    }
}
