//! Selection session state and the drag gesture state machine

use image::RgbaImage;

use crate::config::Config;
use crate::document::{DocumentHandle, Generation};
use crate::domain::{Point, Rect, SelectionStore};
use crate::error::{FieldmarkError, Result};
use crate::render::overlay;
use crate::render::page::PageRenderer;

/// Drag gesture state.
///
/// `AwaitingLabel` serializes commits: while a label is pending, new
/// pointer-downs are ignored so a second drag can never start mid-commit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        start: Point,
        current: Point,
    },
    AwaitingLabel {
        rect: Rect,
    },
}

/// Owns everything one loaded document accumulates: the handle, the cached
/// page raster, the gesture state, and the selection store.
///
/// Constructed once and reset wholesale by each document load; nothing here
/// lives in module globals.
#[derive(Debug, Default)]
pub struct SelectionSession {
    config: Config,
    document: Option<DocumentHandle>,
    page: Option<RgbaImage>,
    store: SelectionStore,
    gesture: GestureState,
    next_generation: Generation,
}

impl SelectionSession {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn document(&self) -> Option<&DocumentHandle> {
        self.document.as_ref()
    }

    /// Replace the loaded document with a new one, resetting the page
    /// raster, the store, and any in-progress gesture. Invalid input leaves
    /// every piece of state untouched.
    pub fn load_document(&mut self, bytes: Vec<u8>) -> Result<Generation> {
        let handle = DocumentHandle::new(bytes, self.next_generation)?;
        let generation = handle.generation();
        self.next_generation += 1;
        log::info!(
            "loaded document: {} bytes, generation {}",
            handle.bytes().len(),
            generation
        );
        self.document = Some(handle);
        self.page = None;
        self.store = SelectionStore::new();
        self.gesture = GestureState::Idle;
        Ok(generation)
    }

    /// Install a resolved page raster, unless the document it was rendered
    /// for has since been replaced. Returns whether the raster was applied.
    pub fn apply_page_render(&mut self, generation: Generation, image: RgbaImage) -> bool {
        match &self.document {
            Some(doc) if doc.generation() == generation => {
                self.page = Some(image);
                true
            }
            _ => {
                log::debug!("discarding stale page render for generation {generation}");
                false
            }
        }
    }

    /// Render page 1 of the current document through the collaborator and
    /// install the result. A failed render leaves the prior raster in place.
    pub async fn render_page(&mut self, renderer: &dyn PageRenderer) -> Result<()> {
        let doc = self.document.as_ref().ok_or(FieldmarkError::NoDocument)?;
        let generation = doc.generation();
        let image = renderer
            .render_page(doc, 1, self.config.page_scale)
            .await?;
        self.apply_page_render(generation, image);
        Ok(())
    }

    /// Pointer pressed on the surface. Starts a drag only from Idle.
    pub fn pointer_down(&mut self, position: Point) {
        match self.gesture {
            GestureState::Idle => {
                self.gesture = GestureState::Dragging {
                    start: position,
                    current: position,
                };
            }
            // A drag is live or a label is pending; no second gesture starts
            GestureState::Dragging { .. } | GestureState::AwaitingLabel { .. } => {}
        }
    }

    /// Pointer moved. Updates the candidate and returns it so the caller can
    /// redraw; a move outside a drag is a no-op.
    pub fn pointer_move(&mut self, position: Point) -> Option<Rect> {
        match &mut self.gesture {
            GestureState::Dragging { start, current } => {
                *current = position;
                Some(Rect::from_points(*start, *current))
            }
            _ => None,
        }
    }

    /// Pointer released. Freezes the candidate and waits for a label.
    pub fn pointer_up(&mut self, position: Point) {
        if let GestureState::Dragging { start, .. } = self.gesture {
            self.gesture = GestureState::AwaitingLabel {
                rect: Rect::from_points(start, position),
            };
        }
    }

    /// Resolve the pending label. A non-empty label commits the selection;
    /// `None` or an empty string discards it silently. Either way the
    /// candidate is cleared and the machine returns to Idle. Returns whether
    /// a selection was committed.
    pub fn provide_label(&mut self, label: Option<String>) -> bool {
        let GestureState::AwaitingLabel { rect } = self.gesture else {
            return false;
        };
        self.gesture = GestureState::Idle;
        let committed = match label {
            Some(label) => self.store.add(&label, rect),
            None => false,
        };
        if committed {
            log::debug!(
                "committed selection #{}: {:?}",
                self.store.len() - 1,
                self.store.all().last()
            );
        }
        committed
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn is_awaiting_label(&self) -> bool {
        matches!(self.gesture, GestureState::AwaitingLabel { .. })
    }

    /// The transient rectangle to draw over the page, if any: live while
    /// dragging and frozen while a label is pending.
    pub fn candidate(&self) -> Option<Rect> {
        match self.gesture {
            GestureState::Idle => None,
            GestureState::Dragging { start, current } => Some(Rect::from_points(start, current)),
            GestureState::AwaitingLabel { rect } => Some(rect),
        }
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn field_summaries(&self) -> Vec<String> {
        self.store.summaries()
    }

    /// Compose the current overlay: page raster plus every stored rectangle
    /// plus the candidate
    pub fn overlay(&self) -> Result<RgbaImage> {
        let page = self.page.as_ref().ok_or(FieldmarkError::NoPageRendered)?;
        Ok(overlay::compose(
            page,
            self.store.all(),
            self.candidate(),
            &self.config,
        ))
    }
}
