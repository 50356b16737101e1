use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    config::ViewerConfig,
    error::{Result, ViewerError},
    gfx::{
        camera::InputController,
        geometry::{build_scene, desk_scene},
        rendering::RenderEngine,
        scene::SceneState,
    },
    ui::{control_panel, UiManager},
};

/// The desk viewer application
///
/// Owns the event loop until [`DeskViewApp::run`] hands it to winit.
pub struct DeskViewApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

struct AppState {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    scene_state: SceneState,
    input: InputController,
    fatal: Option<ViewerError>,
}

impl DeskViewApp {
    pub fn new(config: ViewerConfig) -> Result<Self> {
        config.validate()?;
        let event_loop = EventLoop::new()?;

        Ok(Self {
            event_loop,
            app_state: AppState {
                scene_state: SceneState::new(&config),
                config,
                window: None,
                render_engine: None,
                ui_manager: None,
                input: InputController::new(),
                fatal: None,
            },
        })
    }

    /// Run the application until the window closes
    ///
    /// Returns the error that stopped start-up, if any.
    pub fn run(mut self) -> Result<()> {
        self.event_loop.set_control_flow(ControlFlow::Poll);
        self.event_loop.run_app(&mut self.app_state)?;

        match self.app_state.fatal.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_config = &self.config.window;
        let window = Arc::new(
            event_loop.create_window(
                WindowAttributes::default()
                    .with_title(window_config.title.clone())
                    .with_inner_size(LogicalSize::new(window_config.width, window_config.height)),
            )?,
        );

        let (width, height) = window.inner_size().into();
        let mesh = build_scene(&desk_scene());
        let renderer = pollster::block_on(RenderEngine::new(
            window.clone(),
            width,
            height,
            mesh,
            &self.config,
        ))?;

        let ui_manager = UiManager::new(
            renderer.device(),
            renderer.queue(),
            renderer.surface_format(),
            &window,
        );

        self.window = Some(window);
        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(renderer);
        log::info!("Viewer ready ({}x{})", width, height);
        Ok(())
    }

    fn redraw(&mut self) {
        let (Some(render_engine), Some(window)) =
            (self.render_engine.as_mut(), self.window.as_ref())
        else {
            return;
        };

        // The panel edits a copy; its changes are picked up by the next frame
        let mut edited = self.scene_state.clone();

        match self.ui_manager.as_mut() {
            Some(ui_manager) => {
                let draw_ui = |device: &wgpu::Device,
                               queue: &wgpu::Queue,
                               encoder: &mut wgpu::CommandEncoder,
                               color_attachment: &wgpu::TextureView| {
                    ui_manager.draw(device, queue, encoder, window, color_attachment, |ui| {
                        control_panel(ui, &mut edited);
                    });
                };
                render_engine.render_frame(&self.scene_state, Some(draw_ui));
            }
            None => {
                render_engine.render_frame(
                    &self.scene_state,
                    None::<fn(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView)>,
                );
            }
        }

        self.scene_state = edited;
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(error) = self.init_graphics(event_loop) {
            log::error!("Failed to start viewer: {}", error);
            self.fatal = Some(error);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // Handle UI input first
        if let Some(ui_manager) = self.ui_manager.as_mut() {
            let ui_event: winit::event::Event<()> = winit::event::Event::WindowEvent {
                window_id,
                event: event.clone(),
            };
            if ui_manager.handle_input(&window, &ui_event) {
                return;
            }
        }

        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            }
            | WindowEvent::CloseRequested => {
                log::info!("Closing viewer");
                event_loop.exit();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            other => {
                self.input.process_window_event(&other, &mut self.scene_state);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
