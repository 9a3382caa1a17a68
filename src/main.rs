use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId},
};

use quadview::camera::Camera;
use quadview::cli::Cli;
use quadview::diagnostics::{DebugEvent, DebugKind, DebugSeverity, DebugSource};
use quadview::frame::FrameClock;
use quadview::input::ScrollState;
use quadview::renderer::QuadRenderer;
use quadview::texture::TextureData;
use quadview::types::FrameUniforms;

// === Constants ===

const FPS_UPDATE_INTERVAL: f32 = 1.0;

// === Type Aliases ===

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

// === Application ===

struct App {
    config: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<QuadRenderer>,
    camera: Camera,
    scroll: ScrollState,
    clock: FrameClock,
    frame_count: u32,
    fps_update_timer: f32,
}

impl App {
    fn new(config: Cli) -> Self {
        Self {
            config,
            window: None,
            renderer: None,
            camera: Camera::new(),
            scroll: ScrollState::new(),
            clock: FrameClock::new(),
            frame_count: 0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            let fps = self.frame_count as f32 / self.fps_update_timer;
            log::info!("FPS: {:.1}", fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let mut attributes = Window::default_attributes()
                .with_title("nice")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.width,
                    self.config.height,
                ));
            if self.config.fullscreen {
                attributes = attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
            }

            let window = match event_loop.create_window(attributes) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let texture = match TextureData::load(&self.config.texture) {
                Ok(t) => t,
                Err(e) => {
                    log::error!("Failed to load texture: {:#}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(QuadRenderer::new(window.clone(), &texture)) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("Failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.camera.process_keyboard(&event),
            WindowEvent::MouseWheel { delta, .. } => self.scroll.process_scroll(&delta),
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                let frame = self.clock.tick();
                self.update_fps(frame.delta);

                let (wheel_x, wheel_y) = self.scroll.take_wheel();
                self.camera.apply_scroll(wheel_x, wheel_y);
                self.camera.update(frame.delta);

                if let Some(renderer) = &mut self.renderer {
                    let size = renderer.size();
                    let uniforms = FrameUniforms::new(
                        self.camera.mvp(),
                        [size.width as f32, size.height as f32],
                        frame.time,
                    );

                    match renderer.render(&uniforms) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            renderer.resize(size);
                        }
                        Err(wgpu::SurfaceError::Timeout) => {
                            log::warn!("Surface frame acquire timed out");
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Out of memory acquiring surface frame");
                            event_loop.exit();
                        }
                        Err(e) => {
                            DebugEvent::new(
                                DebugSource::Api,
                                DebugKind::Error,
                                DebugSeverity::High,
                                0,
                                format!("Render error: {}", e),
                            )
                            .report();
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let config = Cli::parse();

    if config.debug {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    println!("Quad viewer - Controls: W/S to zoom, scroll to tilt, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
