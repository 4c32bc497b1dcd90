//! Overlay engine coordinating all components

use log::{debug, info};

use crate::bridge::{HostBridge, HostChannel};
use crate::catalog::{CatalogError, CatalogSession, ParameterValue, ScriptLoad};
use crate::config::OverlayConfig;
use crate::dock::{apply_placement, DockBinding};
use crate::input::{DragController, DragOutcome};
use crate::layout::LayoutSnapshot;
use crate::math::Vec2;
use crate::panels::{PanelCoordinator, PanelId};
use crate::render::{Renderable, Surface};
use crate::zone::{DockTarget, ZoneGenerator};

/// Overlay engine coordinating all overlay components
///
/// Owns every piece of mutable overlay state:
/// - Last accepted layout snapshot and the active dock binding
/// - Dock zones rendered into the surface
/// - Drag controller for the toolbar
/// - Panel visibility
/// - Script catalog session
/// - Host bridge and its report schedule
///
/// Time is passed in as `now_ms` wherever a timer is involved; the caller
/// drives [`tick`](Self::tick) from its own heartbeat.
pub struct OverlayEngine<S: Surface, C> {
    config: OverlayConfig,
    surface: S,
    bridge: HostBridge<C>,
    zones: ZoneGenerator<S>,
    drag: DragController<S::Element>,
    panels: PanelCoordinator,
    catalog: CatalogSession,
    layout: Option<LayoutSnapshot>,
    binding: Option<DockBinding>,
}

impl<S: Surface, C: HostChannel> OverlayEngine<S, C> {
    /// Create an engine rendering into `surface` and talking to `channel`
    pub fn new(config: OverlayConfig, surface: S, channel: Option<C>) -> Self {
        let zones = ZoneGenerator::new(config.geometry());
        Self {
            config,
            surface,
            bridge: HostBridge::new(channel),
            zones,
            drag: DragController::new(),
            panels: PanelCoordinator::new(),
            catalog: CatalogSession::default(),
            layout: None,
            binding: None,
        }
    }

    /// Bind the toolbar and its drag handle
    pub fn attach_toolbar(&mut self, handle: S::Element, toolbar: S::Element) {
        self.drag.initialize(handle, toolbar);
        info!("[engine] toolbar attached");
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn bridge(&self) -> &HostBridge<C> {
        &self.bridge
    }

    pub fn zones(&self) -> &ZoneGenerator<S> {
        &self.zones
    }

    pub fn drag(&self) -> &DragController<S::Element> {
        &self.drag
    }

    pub fn panels(&self) -> &PanelCoordinator {
        &self.panels
    }

    pub fn catalog(&self) -> &CatalogSession {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogSession {
        &mut self.catalog
    }

    /// Last accepted layout snapshot
    pub fn layout(&self) -> Option<&LayoutSnapshot> {
        self.layout.as_ref()
    }

    /// Active dock binding
    pub fn dock_binding(&self) -> Option<DockBinding> {
        self.binding
    }

    /// The toolbar element
    pub fn toolbar(&self) -> Option<&S::Element> {
        self.drag.element()
    }

    /// Check if the toolbar is being dragged
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Register the drag-start subscriber
    pub fn on_drag_start(&mut self, handler: impl FnMut() + 'static) {
        self.drag.on_drag_start(handler);
    }

    /// Register the drag-end subscriber
    pub fn on_drag_end(&mut self, handler: impl FnMut(Option<DockTarget>) + 'static) {
        self.drag.on_drag_end(handler);
    }

    /// Register the layout subscriber
    pub fn on_layout(&mut self, handler: impl FnMut(&LayoutSnapshot) + 'static) {
        self.bridge.on_layout(handler);
    }

    /// Register the change subscriber for `panel`
    pub fn on_panel_change(&mut self, panel: PanelId, handler: impl FnMut(bool) + 'static) {
        self.panels.on_change(panel, handler);
    }

    // =========================================================================
    // Host layout
    // =========================================================================

    /// Feed one raw inbound host message
    ///
    /// Returns true when it carried a usable layout. Anything else leaves the
    /// current snapshot and dock targets untouched.
    pub fn handle_host_message(&mut self, raw: &str) -> bool {
        match self.bridge.handle_message(raw) {
            Some(snapshot) => {
                self.apply_layout(snapshot);
                true
            }
            None => false,
        }
    }

    /// Replace the layout snapshot
    ///
    /// Dock targets are rebuilt (visible only mid-drag). When idle, a docked
    /// toolbar follows its region; if that region index no longer exists the
    /// toolbar stays where it is and the binding is kept.
    pub fn apply_layout(&mut self, snapshot: LayoutSnapshot) {
        let dragging = self.drag.is_dragging();
        self.zones.rebuild(&mut self.surface, &snapshot, dragging);

        if !dragging {
            if let (Some(binding), Some(toolbar)) = (self.binding, self.drag.element_mut()) {
                match binding.resolve(&snapshot, toolbar.size()) {
                    Some(placement) => apply_placement(toolbar, &placement),
                    None => debug!(
                        "[engine] region {} gone, keeping toolbar in place",
                        binding.region_index
                    ),
                }
            }
        }

        self.layout = Some(snapshot);
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Handle pointer down at screen `(x, y)`
    pub fn pointer_down(&mut self, x: f32, y: f32) -> DragOutcome {
        let outcome = self.drag.pointer_down(Vec2::new(x, y), &mut self.zones);
        if outcome == DragOutcome::Started {
            if let Some(layout) = self.layout.as_ref() {
                self.zones.rebuild(&mut self.surface, layout, true);
            }
        }
        outcome
    }

    /// Handle pointer move at screen `(x, y)`
    pub fn pointer_move(&mut self, x: f32, y: f32) -> DragOutcome {
        self.drag.pointer_move(Vec2::new(x, y), &mut self.zones)
    }

    /// Handle pointer up at screen `(x, y)`
    ///
    /// A drop inside a dock target docks the toolbar there and reports the
    /// new interactive regions right away.
    pub fn pointer_up(&mut self, x: f32, y: f32) -> DragOutcome {
        let outcome = self.drag.pointer_up(Vec2::new(x, y), &mut self.zones);
        if let DragOutcome::Ended { target: Some(target) } = &outcome {
            self.dock(target.binding());
        }
        outcome
    }

    /// Target under screen `(x, y)`
    pub fn find_target_at(&self, x: f32, y: f32) -> Option<DockTarget> {
        self.drag.find_target_at(&self.zones, x, y)
    }

    /// Dock the toolbar to `binding` under the current layout
    ///
    /// Returns false (leaving the previous binding) without a layout, a
    /// toolbar, or a region at the binding's index.
    pub fn dock(&mut self, binding: DockBinding) -> bool {
        let (layout, toolbar) = match (self.layout.as_ref(), self.drag.element_mut()) {
            (Some(layout), Some(toolbar)) => (layout, toolbar),
            _ => return false,
        };
        let placement = match binding.resolve(layout, toolbar.size()) {
            Some(placement) => placement,
            None => return false,
        };

        apply_placement(toolbar, &placement);
        self.binding = Some(binding);
        info!(
            "[engine] docked to {}-{} at ({}, {})",
            binding.kind, binding.region_index, placement.x, placement.y
        );
        self.report_now();
        true
    }

    // =========================================================================
    // Timers and reporting
    // =========================================================================

    /// Advance timers; sends a report when one is due
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.bridge.poll(now_ms) {
            self.report_now();
            true
        } else {
            false
        }
    }

    /// Send the interactive-region report immediately
    pub fn report_now(&mut self) -> Option<String> {
        let regions = self.surface.interactive_regions();
        self.bridge.report(&regions)
    }

    /// Start periodic reporting at `interval_ms`, or the configured interval
    pub fn start_reporting(&mut self, interval_ms: Option<f64>, now_ms: f64) {
        let interval = interval_ms.unwrap_or(self.config.report_interval_ms);
        self.bridge.start_reporting(interval, now_ms);
    }

    /// Stop periodic reporting
    pub fn stop_reporting(&mut self) {
        self.bridge.stop_reporting();
    }

    /// Send a raw message to the host
    pub fn send_message(&mut self, raw: &str) -> bool {
        self.bridge.send_message(raw)
    }

    // =========================================================================
    // Panels
    // =========================================================================

    /// Open `panel`; a change schedules a region resync
    pub fn open_panel(&mut self, panel: PanelId, now_ms: f64) -> bool {
        let changed = self.panels.open(panel);
        self.after_panel_change(changed, now_ms)
    }

    /// Close `panel`; a change schedules a region resync
    pub fn close_panel(&mut self, panel: PanelId, now_ms: f64) -> bool {
        let changed = self.panels.close(panel);
        if changed && panel == PanelId::Catalog {
            self.catalog.cancel();
        }
        self.after_panel_change(changed, now_ms)
    }

    /// Flip `panel`
    pub fn toggle_panel(&mut self, panel: PanelId, now_ms: f64) -> bool {
        if self.panels.is_open(panel) {
            self.close_panel(panel, now_ms)
        } else {
            self.open_panel(panel, now_ms)
        }
    }

    pub fn is_panel_open(&self, panel: PanelId) -> bool {
        self.panels.is_open(panel)
    }

    fn after_panel_change(&mut self, changed: bool, now_ms: f64) -> bool {
        if changed {
            self.bridge.request_resync(now_ms, self.config.resync_delay_ms);
        }
        changed
    }

    // =========================================================================
    // Script catalog
    // =========================================================================

    /// Pick a script; returns the URL its body must be fetched from
    pub fn select_script(&mut self, id: &str) -> Result<String, CatalogError> {
        let script = self.catalog.select(id)?;
        Ok(script.content_url(&self.config.scripts_base_url))
    }

    /// The body of script `id` arrived
    pub fn script_loaded(&mut self, id: &str, content: String) -> Result<(), CatalogError> {
        self.catalog.content_loaded(id, content)
    }

    /// Fetching script `id` failed
    pub fn script_failed(&mut self, id: &str) -> bool {
        self.catalog.content_failed(id)
    }

    /// Change one parameter of the script being prepared
    pub fn set_script_parameter(
        &mut self,
        name: &str,
        value: ParameterValue,
    ) -> Result<(), CatalogError> {
        self.catalog.set_parameter(name, value)
    }

    /// Send the prepared script to the host and close the catalog
    ///
    /// `now_ms` is wall-clock time and doubles as the payload timestamp.
    pub fn submit_script(&mut self, now_ms: f64) -> Result<ScriptLoad, CatalogError> {
        let load = self.catalog.submit(now_ms.max(0.0) as u64)?;
        self.bridge.send_message(&load.to_message());
        info!("[engine] sent script {}", load.name);
        self.close_panel(PanelId::Catalog, now_ms);
        Ok(load)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Remove dock targets, detach the host channel and release the toolbar
    ///
    /// Outbound bridge calls are no-ops afterwards.
    pub fn teardown(&mut self) -> Option<(S::Element, S::Element)> {
        self.zones.clear(&mut self.surface);
        self.bridge.disconnect();
        self.layout = None;
        info!("[engine] torn down");
        self.drag.release()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Rect, Size};
    use crate::testing::{MockChannel, MockElement, MockSurface};
    use crate::zone::DockKind;

    const LAYOUT_600: &str = r#"{"windows":[{"width":800,"height":600,"screen":{"areas":[{"x":0,"y":0,"width":800,"height":600}]}}]}"#;

    type Engine = OverlayEngine<MockSurface, MockChannel>;

    fn engine() -> (Engine, MockChannel) {
        let channel = MockChannel::new();
        let mut engine = OverlayEngine::new(
            OverlayConfig::default(),
            MockSurface::new(),
            Some(channel.clone()),
        );
        engine.attach_toolbar(
            MockElement::new(Rect::new(300.0, 300.0, 20.0, 40.0)),
            MockElement::new(Rect::new(300.0, 300.0, 200.0, 40.0)),
        );
        (engine, channel)
    }

    #[test]
    fn test_layout_builds_hidden_targets() {
        let (mut engine, _) = engine();
        assert!(engine.handle_host_message(LAYOUT_600));

        assert_eq!(engine.zones().len(), 8);
        assert!(engine.zones().zones().iter().all(|z| !z.element.visible()));
        assert_eq!(engine.layout().unwrap().window, Size::new(800.0, 600.0));
    }

    #[test]
    fn test_drag_start_shows_targets() {
        let (mut engine, _) = engine();
        engine.handle_host_message(LAYOUT_600);

        assert_eq!(engine.pointer_down(305.0, 305.0), DragOutcome::Started);
        assert!(engine.zones().zones().iter().all(|z| z.element.visible()));
        assert_eq!(engine.surface().live_targets(), 8);
    }

    #[test]
    fn test_drag_without_layout() {
        let (mut engine, _) = engine();
        assert_eq!(engine.pointer_down(305.0, 305.0), DragOutcome::Started);
        assert_eq!(
            engine.pointer_up(790.0, 10.0),
            DragOutcome::Ended { target: None }
        );
        assert!(engine.dock_binding().is_none());
    }

    #[test]
    fn test_drop_docks_and_reports() {
        let (mut engine, channel) = engine();
        engine.surface_mut().add_interactive(Rect::new(10.0, 20.0, 100.0, 40.0));
        engine.handle_host_message(LAYOUT_600);

        engine.pointer_down(305.0, 305.0);
        engine.pointer_move(790.0, 10.0);
        engine.pointer_up(790.0, 10.0);

        assert_eq!(
            engine.dock_binding(),
            Some(DockBinding::new(DockKind::CornerBottomRight, 0))
        );
        let toolbar = engine.toolbar().unwrap();
        assert_eq!(toolbar.position(), Vec2::new(600.0, 0.0));
        assert!(!toolbar.rotated());
        assert_eq!(channel.last().as_deref(), Some("[10,20,100,40]"));
    }

    #[test]
    fn test_layout_mid_drag_keeps_targets_visible() {
        let (mut engine, _) = engine();
        engine.handle_host_message(LAYOUT_600);
        engine.pointer_down(305.0, 305.0);

        engine.handle_host_message(LAYOUT_600);
        assert!(engine.zones().zones().iter().all(|z| z.element.visible()));
    }

    #[test]
    fn test_layout_mid_drag_does_not_move_toolbar() {
        let (mut engine, _) = engine();
        engine.handle_host_message(LAYOUT_600);
        assert!(engine.dock(DockBinding::new(DockKind::CornerTopLeft, 0)));

        assert_eq!(engine.toolbar().unwrap().position(), Vec2::new(0.0, 560.0));

        // Grab the handle 305 right of and 255 above the toolbar origin
        engine.pointer_down(305.0, 305.0);
        engine.pointer_move(400.0, 300.0);
        engine.handle_host_message(LAYOUT_600);

        assert_eq!(engine.toolbar().unwrap().position(), Vec2::new(95.0, 555.0));
        assert_eq!(
            engine.dock_binding(),
            Some(DockBinding::new(DockKind::CornerTopLeft, 0))
        );
    }

    #[test]
    fn test_vanished_region_freezes_placement() {
        let (mut engine, _) = engine();
        let two = r#"{"windows":[{"width":800,"height":600,"screen":{"areas":[{"x":0,"y":0,"width":400,"height":600},{"x":400,"y":0,"width":400,"height":600}]}}]}"#;
        engine.handle_host_message(two);
        assert!(engine.dock(DockBinding::new(DockKind::SideLeft, 1)));
        let before = engine.toolbar().unwrap().clone();

        engine.handle_host_message(LAYOUT_600);

        assert_eq!(engine.toolbar().unwrap(), &before);
        assert_eq!(engine.dock_binding(), Some(DockBinding::new(DockKind::SideLeft, 1)));
    }

    #[test]
    fn test_dock_requires_region() {
        let (mut engine, _) = engine();
        assert!(!engine.dock(DockBinding::new(DockKind::SideTop, 0)));

        engine.handle_host_message(LAYOUT_600);
        assert!(!engine.dock(DockBinding::new(DockKind::SideTop, 3)));
        assert!(engine.dock_binding().is_none());
    }

    #[test]
    fn test_side_dock_rotates_toolbar() {
        let (mut engine, _) = engine();
        engine.handle_host_message(LAYOUT_600);
        assert!(engine.dock(DockBinding::new(DockKind::SideRight, 0)));

        let toolbar = engine.toolbar().unwrap();
        assert!(toolbar.rotated());
        // x = 0 + 800 - 40, y = 600 - 0 - (600 + 200) / 2
        assert_eq!(toolbar.position(), Vec2::new(760.0, 200.0));
    }

    #[test]
    fn test_tick_reports_on_schedule() {
        let (mut engine, channel) = engine();
        engine.start_reporting(None, 0.0);

        assert!(engine.tick(0.0));
        assert!(!engine.tick(1000.0));
        assert!(engine.tick(2000.0));
        assert_eq!(channel.sent(), vec![String::new(), String::new()]);

        engine.stop_reporting();
        assert!(!engine.tick(10_000.0));
    }

    #[test]
    fn test_panel_change_schedules_one_resync() {
        let (mut engine, channel) = engine();

        assert!(engine.open_panel(PanelId::PaintTool, 0.0));
        assert!(!engine.open_panel(PanelId::PaintTool, 10.0));

        assert!(!engine.tick(99.0));
        assert!(engine.tick(100.0));
        assert!(!engine.tick(500.0));
        assert_eq!(channel.sent().len(), 1);
    }

    #[test]
    fn test_script_flow_closes_catalog() {
        let (mut engine, channel) = engine();
        engine.open_panel(PanelId::Catalog, 0.0);

        let url = engine.select_script("9").unwrap();
        assert_eq!(url, "./scripts/image_resizer.py");
        engine.script_loaded("9", "body".to_string()).unwrap();
        engine
            .set_script_parameter("maintain_aspect_ratio", ParameterValue::Bool(false))
            .unwrap();

        let load = engine.submit_script(1234.0).unwrap();
        assert_eq!(load.timestamp, 1234);
        assert!(!engine.is_panel_open(PanelId::Catalog));

        let sent = channel.last().unwrap();
        let decoded = ScriptLoad::parse(&sent).unwrap();
        assert_eq!(decoded, load);
    }

    #[test]
    fn test_script_failure_keeps_catalog_open() {
        let (mut engine, channel) = engine();
        engine.open_panel(PanelId::Catalog, 0.0);
        engine.select_script("2").unwrap();

        assert!(engine.script_failed("2"));
        assert!(engine.submit_script(0.0).is_err());
        assert!(engine.is_panel_open(PanelId::Catalog));
        assert!(channel.sent().is_empty());
    }

    #[test]
    fn test_detached_engine_is_quiet() {
        let mut engine: Engine =
            OverlayEngine::new(OverlayConfig::default(), MockSurface::new(), None);
        engine.start_reporting(None, 0.0);

        assert!(!engine.tick(0.0));
        assert!(engine.report_now().is_none());
        assert!(!engine.send_message("x"));
    }

    #[test]
    fn test_teardown() {
        let (mut engine, _) = engine();
        engine.handle_host_message(LAYOUT_600);
        engine.start_reporting(None, 0.0);

        assert!(engine.teardown().is_some());
        assert_eq!(engine.surface().live_targets(), 0);
        assert!(!engine.tick(0.0));
        assert!(engine.toolbar().is_none());
        assert!(!engine.bridge().is_connected());
        assert!(!engine.send_message("late"));
        assert!(engine.report_now().is_none());
    }
}
