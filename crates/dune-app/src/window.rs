//! winit shell: window creation, cursor capture, and event routing.

use std::time::Instant;

use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use dune_config::Config;
use dune_input::{KeyboardState, MouseState, bindings};

use crate::game_loop::GameLoop;
use crate::scene::SceneState;

/// Application state driven by the winit event loop.
pub struct App {
    config: Config,
    window: Option<Window>,
    scene: Option<SceneState>,
    keyboard: KeyboardState,
    mouse: MouseState,
    game_loop: GameLoop,
    fps_frames: u32,
    fps_timer: Instant,
}

impl App {
    /// An app that will build its window and scene on `resumed`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            window: None,
            scene: None,
            keyboard: KeyboardState::new(),
            mouse: MouseState::new(),
            game_loop: GameLoop::new(),
            fps_frames: 0,
            fps_timer: Instant::now(),
        }
    }

    fn update_fps_title(&mut self) {
        if !self.config.debug.show_fps {
            return;
        }
        self.fps_frames += 1;
        let elapsed = self.fps_timer.elapsed().as_secs_f64();
        if elapsed >= 1.0 {
            if let Some(window) = &self.window {
                let fps = self.fps_frames as f64 / elapsed;
                window.set_title(&format!("{} - {fps:.0} fps", self.config.window.title));
            }
            self.fps_frames = 0;
            self.fps_timer = Instant::now();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let mut attrs = Window::default_attributes()
                .with_title(self.config.window.title.clone())
                .with_inner_size(LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));
            if self.config.window.fullscreen {
                attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
            }
            match event_loop.create_window(attrs) {
                Ok(window) => {
                    self.mouse.set_captured(&window, true);
                    self.window = Some(window);
                }
                Err(err) => {
                    error!(%err, "failed to create window");
                    event_loop.exit();
                    return;
                }
            }
        }

        if self.scene.is_none() {
            match SceneState::new(&self.config) {
                Ok(scene) => self.scene = Some(scene),
                Err(err) => {
                    error!(%err, "failed to build the scene");
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.process_event(&event);
                if self.keyboard.is_pressed(bindings::QUIT) {
                    info!("quit key pressed, shutting down");
                    event_loop.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse.on_cursor_moved(position.x, position.y);
            }
            WindowEvent::Focused(focused) => {
                if let Some(window) = &self.window {
                    self.mouse.set_captured(window, focused);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(scene) = self.scene.as_mut() {
                    let keyboard = &self.keyboard;
                    let mouse = &self.mouse;
                    self.game_loop.tick(|dt, elapsed| {
                        scene.update(dt as f32, elapsed as f32, keyboard, mouse);
                    });
                }
                self.keyboard.clear_transients();
                self.mouse.clear_transients();
                self.update_fps_title();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: winit::event::DeviceEvent,
    ) {
        if let winit::event::DeviceEvent::MouseMotion { delta } = event {
            self.mouse.on_raw_motion(delta.0, delta.1);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Create the event loop and run until the window closes.
pub fn run(config: Config) -> Result<(), EventLoopError> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)
}
