//! Game Context
//!
//! The session signal, DnD signals and overlay refs shared by every
//! component, plus the handlers that bridge DOM events into the engine.

use leptos::html::{Canvas, Div};
use leptos::prelude::*;
use leptos_dragdrop::{DndSignals, Gesture};
use match_engine::{Point, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::surface::DomSurface;

#[derive(Clone, Copy)]
pub struct GameContext {
    pub session: RwSignal<Session>,
    pub dnd: DndSignals,
    /// Game container; the overlay is sized to its bounding box
    pub container_ref: NodeRef<Div>,
    pub canvas_ref: NodeRef<Canvas>,
}

impl GameContext {
    pub fn new(session: Session, dnd: DndSignals) -> Self {
        Self {
            session: RwSignal::new(session),
            dnd,
            container_ref: NodeRef::new(),
            canvas_ref: NodeRef::new(),
        }
    }

    /// Canvas surface over the mounted container, if both are mounted
    fn surface(&self) -> Option<DomSurface> {
        let container = self.container_ref.get_untracked()?;
        let canvas = self.canvas_ref.get_untracked()?;
        match DomSurface::new(container.into(), canvas) {
            Ok(surface) => Some(surface),
            Err(e) => {
                log::warn!("[CANVAS] unavailable: {:?}", e);
                None
            }
        }
    }

    /// Feed one gesture from either input adapter into the session
    pub fn handle_gesture(&self, gesture: Gesture) {
        match gesture {
            Gesture::Start { item } => {
                self.session.update(|s| {
                    s.begin_drag(&item);
                });
            }
            Gesture::Move { x, y } => {
                // Pointer position matters to nobody reactive
                self.session.update_untracked(|s| s.track_drag(Point::new(x, y)));
            }
            Gesture::End { target } => {
                let Some(mut surface) = self.surface() else {
                    self.session.update(|s| s.cancel_drag());
                    return;
                };
                self.session.update(|s| match s.drop_on(&target, &mut surface) {
                    Ok(conn) => log::info!("[DND] {} -> {}", conn.left, conn.right),
                    Err(e) => log::debug!("[DND] drop rejected: {}", e),
                });
            }
            Gesture::Cancel => self.session.update(|s| s.cancel_drag()),
        }
    }

    /// Deal a new board and wipe the overlay (initial load and retry)
    pub fn new_board(&self) {
        let mut rng = StdRng::from_entropy();
        let surface = self.surface();
        self.session.update(|s| match surface {
            Some(mut surface) => s.retry(&mut rng, &mut surface),
            None => s.generate(&mut rng),
        });
    }

    pub fn check(&self) {
        self.session.update(|s| {
            s.check_results();
        });
    }

    /// Resize the overlay to the container and redraw every line
    pub fn sync_surface(&self) {
        let Some(mut surface) = self.surface() else { return };
        let drawn = self.session.with_untracked(|s| s.sync_surface(&mut surface));
        log::debug!("[CANVAS] resynced, {} lines", drawn);
    }
}
