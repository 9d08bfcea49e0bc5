//! Raging Sea - an animated water surface
//!
//! Big sine swells, folded-noise chop and an elevation color ramp fading into
//! fog, with every parameter live-tunable from the debug panel.

use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use ragingsea::camera::OrbitCamera;
use ragingsea::cli::Args;
use ragingsea::clock::SystemClock;
use ragingsea::error::AppError;
use ragingsea::frame::{ConfigStore, FrameDriver};
use ragingsea::panel::{DebugPanel, EguiIntegration, FpsTracker, PanelStats, ProbeReading};
use ragingsea::params::{OrbitParams, RenderConfig};
use ragingsea::rendering::{Overlay, RenderSystem, WaterUniforms};
use ragingsea::water::WaterGrid;

/// Wheel pixels that count as one line
const PIXELS_PER_LINE: f32 = 40.0;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,
    egui: Option<EguiIntegration>,

    // Scene
    grid: WaterGrid,
    camera: OrbitCamera,

    // Configuration
    store: ConfigStore,
    render_config: RenderConfig,
    panel: DebugPanel,

    // Time tracking
    clock: SystemClock,
    driver: FrameDriver,
    fps: FpsTracker,

    /// Fatal error that ended the event loop
    error: Option<AppError>,
}

impl App {
    fn new(args: &Args) -> Self {
        let render_config = args.render_config();
        let grid = WaterGrid::new(render_config.plane_size, render_config.subdivisions);

        log::info!(
            "Water grid: {} subdivisions, {} vertices",
            grid.subdivisions(),
            grid.vertices.len()
        );

        Self {
            window: None,
            render_system: None,
            egui: None,
            grid,
            camera: OrbitCamera::new(OrbitParams::default()),
            store: ConfigStore::new(args.water_config()),
            render_config,
            panel: DebugPanel::new(!args.hide_panel),
            clock: SystemClock::new(),
            driver: FrameDriver::new(),
            fps: FpsTracker::new(),
            error: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window_attributes = Window::default_attributes()
            .with_title("Raging Sea")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes)?);

        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.grid,
            self.render_config.clear_color,
        ))?;

        let (width, height) = render_system.size();
        self.render_config.set_window_size(width, height);

        let egui = EguiIntegration::new(&render_system.device, render_system.format(), &window);

        log::info!(
            "Running; H toggles the panel ({}), Esc quits",
            if self.panel.visible() { "shown" } else { "hidden" }
        );

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.egui = Some(egui);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.render_config.set_window_size(width, height);
        if self.render_config.is_minimized() {
            log::debug!("Window minimized, pausing rendering");
            return;
        }
        if let Some(render_system) = self.render_system.as_mut() {
            render_system.resize(width, height);
        }
    }

    /// Render a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.clone() else {
            return;
        };
        // Minimized: no tick, no displacement, no surface access
        if self.render_config.is_minimized() {
            return;
        }

        // One clock read and one config snapshot for the whole frame
        let frame = self.driver.tick(&self.clock, &self.store);

        self.camera.update();
        let (view_proj, eye) = self.camera.create_view_proj_matrix(&self.render_config);
        self.grid.update(frame.time_s, &frame.config.waves);
        self.fps.record_frame();

        // Panel edits land in the store and show up next frame
        let ui_output = match self.egui.as_mut() {
            Some(egui) if self.panel.visible() => {
                let stats = PanelStats {
                    fps: self.fps.current_fps(),
                    frame_index: frame.index,
                    revision: self.store.revision(),
                    probe: ProbeReading::sample(&self.grid, &frame, 0.0, 0.0),
                };
                let panel = &mut self.panel;
                let store = &mut self.store;
                Some(egui.run(&window, |ctx| {
                    panel.show(ctx, store, &stats);
                }))
            }
            _ => None,
        };

        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };
        render_system.update_vertices(&self.grid.vertices);
        render_system.update_uniforms(&WaterUniforms::new(view_proj, eye, &frame.config));

        let overlay = match (self.egui.as_mut(), ui_output.as_ref()) {
            (Some(egui), Some(output)) => Some(Overlay { egui, output }),
            _ => None,
        };

        match render_system.render(overlay) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_system.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, AppError::OutOfMemory);
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(e) = self.init_graphics(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let consumed = match (self.window.as_ref(), self.egui.as_mut()) {
            (Some(window), Some(egui)) if self.panel.visible() => egui.on_window_event(window, &event),
            _ => false,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        repeat: false,
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape => event_loop.exit(),
                KeyCode::KeyH if !consumed => self.panel.toggle(),
                _ => {}
            },
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let pressed = state == ElementState::Pressed;
                // Drags that start on the panel belong to the panel
                if !pressed || !consumed {
                    self.camera.set_dragging(pressed);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.camera.cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } if !consumed => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_LINE,
                };
                self.camera.zoom(lines);
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut app = App::new(&args);
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Raging Sea - initializing...");

    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
