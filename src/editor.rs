//! The polygon editor: input classification, geometry mutation, undo, and
//! outcome notification.
//!
//! [`Editor`] is bound to a [`MapSurface`] for its lifetime but stays inert
//! until [`Editor::start_new`] or [`Editor::edit_existing`]. Activation
//! attaches to the surface (double-click zoom off, crosshair cursor); [`Editor::stop`]
//! detaches and resets everything. Dropping an active editor detaches too.
//!
//! Every handler runs to completion synchronously. After each mutation the
//! editor re-derives the [`RenderFrame`] and publishes it on the render port,
//! together with the undo depth on the undo port.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use tracing::{debug, info, trace};

use crate::config::EditorConfig;
use crate::draft::{Draft, Polygon};
use crate::error::EditorError;
use crate::events::{ListenerId, Listeners};
use crate::geom::LngLat;
use crate::hit::{HoverTarget, resolve_hover};
use crate::input::{FocusKind, KeyEvent, PointerEvent, Response, ToolState};
use crate::port::Published;
use crate::render::{self, RenderFrame};
use crate::surface::{CursorStyle, MapSurface};
use crate::undo::UndoStack;

pub struct Editor<S: MapSurface> {
    surface: S,
    config: EditorConfig,
    draft: Draft,
    state: ToolState,
    hover: HoverTarget,
    preview: Option<LngLat>,
    last_pointer: Option<PointerEvent>,
    cursor: CursorStyle,
    undo: UndoStack,
    listeners: Listeners,
    render_port: Published<RenderFrame>,
    undo_port: Published<usize>,
}

impl<S: MapSurface> Editor<S> {
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, EditorConfig::default())
    }

    #[must_use]
    pub fn with_config(surface: S, config: EditorConfig) -> Self {
        Self {
            surface,
            undo: UndoStack::new(config.undo_limit),
            config,
            draft: Draft::new(),
            state: ToolState::Inactive,
            hover: HoverTarget::None,
            preview: None,
            last_pointer: None,
            cursor: CursorStyle::Default,
            listeners: Listeners::new(),
            render_port: Published::new(RenderFrame::default()),
            undo_port: Published::new(0),
        }
    }

    // --- Lifecycle ---

    /// Begin drawing a new polygon from an empty draft.
    pub fn start_new(&mut self) {
        self.activate(Draft::new());
    }

    /// Begin editing an existing polygon. The ring may be closed or open.
    ///
    /// On error the editor is left as it was.
    pub fn edit_existing(&mut self, polygon: &Polygon) -> Result<(), EditorError> {
        let draft = Draft::from_polygon(polygon)?;
        self.activate(draft);
        Ok(())
    }

    fn activate(&mut self, draft: Draft) {
        if self.state.is_active() {
            debug!(vertices = self.draft.len(), "restarting active editor; discarding draft");
            self.reset();
        }
        self.draft = draft;
        self.state = ToolState::Editing;
        self.attach();
        info!(vertices = self.draft.len(), "polygon editor activated");
        self.publish();
    }

    /// Reset to inactive and release the surface. No listener is notified.
    pub fn stop(&mut self) {
        if !self.state.is_active() {
            return;
        }
        self.reset();
        self.detach();
        info!("polygon editor stopped");
        self.publish();
    }

    fn reset(&mut self) {
        self.draft.clear();
        self.undo.clear();
        self.state = ToolState::Inactive;
        self.hover = HoverTarget::None;
        self.preview = None;
        self.last_pointer = None;
    }

    fn attach(&mut self) {
        self.surface.set_double_click_zoom(false);
        self.sync_cursor();
    }

    fn detach(&mut self) {
        self.surface.set_double_click_zoom(true);
        self.sync_cursor();
    }

    /// Commit the draft. Success listeners get the polygon when it has at least
    /// three vertices, failure listeners otherwise. The editor stops either way.
    pub fn finish(&mut self) {
        if !self.state.is_active() {
            return;
        }
        match self.draft.finalize(self.config.precision) {
            Some(polygon) => {
                info!(vertices = self.draft.len(), "polygon committed");
                self.listeners.emit_success(&polygon);
            }
            None => {
                info!(vertices = self.draft.len(), "finish rejected: too few vertices");
                self.listeners.emit_failure();
            }
        }
        self.stop();
    }

    /// Abandon the draft. Failure listeners always run.
    pub fn cancel(&mut self) {
        if !self.state.is_active() {
            return;
        }
        info!(vertices = self.draft.len(), "polygon edit cancelled");
        self.listeners.emit_failure();
        self.stop();
    }

    /// Restore the most recent snapshot. No-op while dragging or with no history.
    pub fn undo(&mut self) {
        if self.state != ToolState::Editing {
            return;
        }
        let Some(snapshot) = self.undo.pop() else {
            return;
        };
        self.draft.restore(snapshot);
        self.hover = HoverTarget::None;
        debug!(vertices = self.draft.len(), remaining = self.undo.len(), "undo");
        self.notify_updated();
        self.publish();
        if let Some(pointer) = self.last_pointer {
            self.refresh_hover(pointer);
        }
    }

    // --- Listeners ---

    pub fn on_success(&mut self, handler: impl FnMut(&Polygon) + 'static) -> ListenerId {
        self.listeners.on_success(handler)
    }

    pub fn on_updated(&mut self, handler: impl FnMut(&Polygon) + 'static) -> ListenerId {
        self.listeners.on_updated(handler)
    }

    pub fn on_failure(&mut self, handler: impl FnMut() + 'static) -> ListenerId {
        self.listeners.on_failure(handler)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    // --- Input events ---

    pub fn on_pointer_move(&mut self, event: PointerEvent) -> Response {
        if !self.state.is_active() {
            return Response::Ignored;
        }
        self.last_pointer = Some(event);
        match self.state {
            ToolState::DraggingVertex { index, .. } => {
                self.draft.move_vertex(index, event.map);
                self.state = ToolState::DraggingVertex { index, origin: event.map };
                self.publish();
                Response::Handled
            }
            ToolState::DraggingPolygon { origin } => {
                self.draft.translate(event.map.delta_from(origin));
                self.state = ToolState::DraggingPolygon { origin: event.map };
                self.publish();
                Response::Handled
            }
            ToolState::Editing => {
                self.refresh_hover(event);
                Response::Ignored
            }
            ToolState::Inactive => Response::Ignored,
        }
    }

    /// Start a drag when pressing on a vertex or the polygon body.
    ///
    /// `Handled` means the host should suppress the surface's drag-pan.
    pub fn on_pointer_down(&mut self, event: PointerEvent) -> Response {
        if self.state != ToolState::Editing {
            return Response::Ignored;
        }
        self.last_pointer = Some(event);
        let Some(drag) = ToolState::drag_for(self.hover, event.map) else {
            return Response::Ignored;
        };
        self.preview = None;
        self.push_undo();
        self.state = drag;
        debug!(hover = ?self.hover, "drag started");
        self.sync_cursor();
        self.publish();
        Response::Handled
    }

    pub fn on_pointer_up(&mut self, event: PointerEvent) -> Response {
        if !self.state.is_dragging() {
            return Response::Ignored;
        }
        self.last_pointer = Some(event);
        self.state = ToolState::Editing;
        debug!(vertices = self.draft.len(), "drag finished");
        self.sync_cursor();
        self.notify_updated();
        self.publish();
        Response::Handled
    }

    /// Insert at the preview point over empty map, or delete the hovered vertex.
    pub fn on_click(&mut self, event: PointerEvent) -> Response {
        if self.state != ToolState::Editing {
            return Response::Ignored;
        }
        self.last_pointer = Some(event);
        self.handle_click(event)
    }

    /// Place a final vertex at the pointer and finish.
    ///
    /// The surface delivers `click, click, double-click`. The second click lands
    /// on the vertex the first one inserted and deletes it, so this re-places
    /// the preview and replays the insertion before finishing rather than
    /// trusting the current hover.
    pub fn on_double_click(&mut self, event: PointerEvent) -> Response {
        if self.state != ToolState::Editing {
            return Response::Ignored;
        }
        self.last_pointer = Some(event);
        self.hover = HoverTarget::None;
        self.preview = Some(event.map);
        let replay = self.handle_click(event);
        debug!(?replay, "double-click replayed insertion");
        self.finish();
        Response::Handled
    }

    /// Escape cancels; Ctrl/Cmd+Z undoes. Ctrl/Cmd+Shift+Z is left to the host.
    pub fn on_key_down(&mut self, event: &KeyEvent) -> Response {
        if !self.accepts_keys(event) {
            return Response::Ignored;
        }
        if event.key.is("Escape") {
            self.cancel();
            return Response::Handled;
        }
        if event.key.is("z") && event.modifiers.command() && !event.modifiers.shift {
            self.undo();
            return Response::Handled;
        }
        Response::Ignored
    }

    /// Enter finishes.
    pub fn on_key_press(&mut self, event: &KeyEvent) -> Response {
        if !self.accepts_keys(event) || self.state.is_dragging() {
            return Response::Ignored;
        }
        if event.key.is("Enter") {
            self.finish();
            return Response::Handled;
        }
        Response::Ignored
    }

    fn accepts_keys(&self, event: &KeyEvent) -> bool {
        self.state.is_active() && event.focus != FocusKind::TextInput
    }

    // --- Transitions ---

    fn handle_click(&mut self, event: PointerEvent) -> Response {
        match self.hover {
            HoverTarget::None => {
                let Some(cursor) = self.preview else {
                    return Response::Ignored;
                };
                self.insert_vertex(cursor);
                Response::Handled
            }
            HoverTarget::Vertex(index) if index < self.draft.len() => {
                self.delete_vertex(index, event);
                Response::Handled
            }
            HoverTarget::Vertex(index) => {
                debug!(index, vertices = self.draft.len(), "click on stale vertex index");
                self.refresh_hover(event);
                Response::Ignored
            }
            HoverTarget::Polygon => Response::Ignored,
        }
    }

    fn insert_vertex(&mut self, cursor: LngLat) {
        self.push_undo();
        let index = self.draft.insert_near(cursor);
        self.hover = HoverTarget::Vertex(index);
        self.preview = None;
        debug!(index, vertices = self.draft.len(), "vertex inserted");
        self.sync_cursor();
        self.notify_updated();
        self.publish();
    }

    fn delete_vertex(&mut self, index: usize, pointer: PointerEvent) {
        self.push_undo();
        self.draft.delete(index);
        self.hover = HoverTarget::None;
        debug!(index, vertices = self.draft.len(), "vertex deleted");
        self.notify_updated();
        self.publish();
        self.refresh_hover(pointer);
    }

    /// Re-run hit-testing at `pointer` against the published frame.
    fn refresh_hover(&mut self, pointer: PointerEvent) {
        let layers = [self.config.layers.fill.as_str(), self.config.layers.vertices.as_str()];
        let features = self.surface.query_rendered_features(pointer.screen, &layers);
        let hover = resolve_hover(&features, &self.config.layers, self.config.hit_priority, self.draft.len());
        if hover != self.hover {
            trace!(?hover, "hover changed");
        }
        self.hover = hover;
        self.preview = hover.is_none().then_some(pointer.map);
        self.sync_cursor();
        self.publish();
    }

    fn push_undo(&mut self) {
        self.undo.push(self.draft.snapshot());
    }

    fn notify_updated(&mut self) {
        if let Some(polygon) = self.draft.finalize(self.config.precision) {
            self.listeners.emit_updated(&polygon);
        }
    }

    fn sync_cursor(&mut self) {
        let cursor = match self.state {
            ToolState::Inactive => CursorStyle::Default,
            ToolState::DraggingVertex { .. } | ToolState::DraggingPolygon { .. } => CursorStyle::Grabbing,
            ToolState::Editing if self.hover.is_none() => CursorStyle::Crosshair,
            ToolState::Editing => CursorStyle::Pointer,
        };
        if cursor != self.cursor {
            self.cursor = cursor;
            self.surface.set_cursor(cursor);
        }
    }

    fn publish(&mut self) {
        let preview = if self.state.is_active() && self.hover.is_none() { self.preview } else { None };
        let frame = render::derive(&self.draft, self.hover, preview, self.config.precision);
        self.render_port.set(frame);
        self.undo_port.set(self.undo.len());
    }

    // --- Queries ---

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    #[must_use]
    pub fn state(&self) -> ToolState {
        self.state
    }

    #[must_use]
    pub fn vertices(&self) -> &[LngLat] {
        self.draft.vertices()
    }

    #[must_use]
    pub fn hover(&self) -> HoverTarget {
        self.hover
    }

    /// The cursor preview point, shown only while hovering empty map.
    #[must_use]
    pub fn preview(&self) -> Option<LngLat> {
        self.preview
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // --- Output ports ---

    /// Render-ready frame for the visual layer.
    #[must_use]
    pub fn render_port(&self) -> &Published<RenderFrame> {
        &self.render_port
    }

    pub fn render_port_mut(&mut self) -> &mut Published<RenderFrame> {
        &mut self.render_port
    }

    /// Number of available undo steps.
    #[must_use]
    pub fn undo_port(&self) -> &Published<usize> {
        &self.undo_port
    }

    pub fn undo_port_mut(&mut self) -> &mut Published<usize> {
        &mut self.undo_port
    }
}

impl<S: MapSurface> Drop for Editor<S> {
    fn drop(&mut self) {
        if self.state.is_active() {
            self.state = ToolState::Inactive;
            self.detach();
        }
    }
}
