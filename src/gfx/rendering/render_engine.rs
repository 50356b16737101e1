//! WGPU-based rendering engine for the desk viewer
//!
//! Owns every GPU resource for the process lifetime. Vertex and index
//! buffers, the checkerboard texture, uniform buffers and the pipeline are
//! created once in [`RenderEngine::new`]; only the depth buffer is rebuilt,
//! on resize.

use std::sync::Arc;
use wgpu::{util::DeviceExt, Device, TextureFormat};

use crate::{
    config::ViewerConfig,
    error::{Result, ViewerError},
    gfx::{
        geometry::Mesh,
        resources::{
            checkerboard::generate_checkerboard,
            draw_pass::PassBindings,
            global_bindings::{update_global_ubo, GlobalBindings, GlobalUBO, GlobalUBOContent},
            texture_resource::TextureResource,
        },
        scene::{plan_frame, DrawSet, FramePlan, SceneState},
    },
};

use super::pipeline_manager::{PipelineConfig, PipelineManager};

const SCENE_PIPELINE: &str = "Scene";
const PHONG_SHADER: &str = "phong";

/// Index buffer for one draw set; `None` when the set is empty
struct IndexBuffer {
    buffer: Option<wgpu::Buffer>,
    count: u32,
}

impl IndexBuffer {
    fn new(device: &Device, indices: &[u32], label: &str) -> Self {
        let buffer = (!indices.is_empty()).then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            })
        });
        Self {
            buffer,
            count: indices.len() as u32,
        }
    }
}

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    format: TextureFormat,
    clear_color: wgpu::Color,
    pipeline_manager: PipelineManager,
    global_ubo: GlobalUBO,
    global_bindings: GlobalBindings,
    pass_bindings: PassBindings,

    mesh: Mesh,
    vertex_buffer: wgpu::Buffer,
    non_textured_indices: IndexBuffer,
    textured_indices: IndexBuffer,
}

impl RenderEngine {
    /// Creates the render engine for `window` and uploads `mesh`
    ///
    /// # Arguments
    /// * `window` - Window surface target for rendering
    /// * `width` - Initial surface width in pixels
    /// * `height` - Initial surface height in pixels
    /// * `mesh` - Scene geometry; kept for the lifetime of the engine
    /// * `viewer_config` - Clear color and checkerboard parameters
    ///
    /// # Errors
    /// Any failure to obtain a surface, adapter or device, an invalid
    /// checkerboard configuration, or a shader that does not compile.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        mesh: Mesh,
        viewer_config: &ViewerConfig,
    ) -> Result<RenderEngine> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        let info = adapter.get_info();
        log::info!("Using adapter '{}' ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .ok_or(ViewerError::UnsupportedSurface)?;
        let alpha_mode = surface_capabilities
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let texture_config = &viewer_config.texture;
        let checkerboard = generate_checkerboard(
            texture_config.checkerboard_size,
            texture_config.checkerboard_tile,
        )?;
        let checkerboard_texture =
            TextureResource::from_checkerboard(&device, &queue, &checkerboard, "Checkerboard");

        let initial_plan = plan_frame(
            &SceneState::new(viewer_config),
            &mesh,
            config.width as f32 / config.height as f32,
        );
        let global_ubo =
            GlobalUBO::new_with_data(&device, &GlobalUBOContent::from_plan(&initial_plan));
        let global_bindings = GlobalBindings::new(&device, &global_ubo);
        let pass_bindings = PassBindings::new(
            &device,
            &checkerboard_texture,
            texture_config.procedural_tiles,
        );

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Vertex Buffer"),
            contents: bytemuck::cast_slice(&mesh.to_vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let non_textured_indices =
            IndexBuffer::new(&device, &mesh.non_textured_indices, "Non-textured Index Buffer");
        let textured_indices =
            IndexBuffer::new(&device, &mesh.textured_indices, "Textured Index Buffer");
        log::info!(
            "Uploaded mesh: {} vertices, {} triangles ({} textured indices)",
            mesh.vertex_count(),
            mesh.triangle_count(),
            textured_indices.count
        );

        let device_handle: Arc<Device> = Arc::new(device);
        let queue_handle: Arc<wgpu::Queue> = Arc::new(queue);
        let mut pipeline_manager = PipelineManager::new(device_handle.clone());

        pipeline_manager.load_shader(PHONG_SHADER, include_str!("phong.wgsl"))?;
        pipeline_manager.register_pipeline(
            SCENE_PIPELINE,
            PipelineConfig::default_with_shader(PHONG_SHADER)
                .with_label(SCENE_PIPELINE)
                .with_surface_format(format)
                .with_depth_format(TextureResource::DEPTH_FORMAT)
                .with_bind_group_layouts(vec![
                    global_bindings.bind_group_layout().clone(),
                    pass_bindings.bind_group_layout().clone(),
                ]),
        );
        pipeline_manager.create_all_pipelines()?;

        let [r, g, b, a] = viewer_config.window.clear_color;

        Ok(RenderEngine {
            surface,
            device: device_handle,
            queue: queue_handle,
            config,
            depth_texture,
            format,
            clear_color: wgpu::Color { r, g, b, a },
            pipeline_manager,
            global_ubo,
            global_bindings,
            pass_bindings,
            mesh,
            vertex_buffer,
            non_textured_indices,
            textured_indices,
        })
    }

    /// Width over height of the current surface
    pub fn aspect_ratio(&self) -> f32 {
        self.config.width as f32 / self.config.height as f32
    }

    /// Plan the frame for `state` at the current aspect ratio
    pub fn plan(&self, state: &SceneState) -> FramePlan {
        plan_frame(state, &self.mesh, self.aspect_ratio())
    }

    /// Renders one frame with an optional UI overlay
    ///
    /// Returns false if the surface texture could not be acquired; the frame
    /// is then skipped and the next redraw tries again.
    ///
    /// # Arguments
    /// * `state` - Current scene state
    /// * `ui_callback` - Optional function that records UI draw commands
    pub fn render_frame<F>(&mut self, state: &SceneState, ui_callback: Option<F>) -> bool
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(error @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                log::warn!("Surface {}; reconfiguring and skipping frame", error);
                self.surface.configure(&self.device, &self.config);
                return false;
            }
            Err(error) => {
                log::warn!("Skipping frame: {}", error);
                return false;
            }
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let plan = self.plan(state);
        update_global_ubo(&mut self.global_ubo, &self.queue, &plan);
        self.pass_bindings.update(&self.queue, &plan.passes);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if let Some(pipeline) = self.pipeline_manager.get_pipeline(SCENE_PIPELINE) {
                render_pass.set_pipeline(pipeline);
                render_pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

                for pass in &plan.passes {
                    let indices = match pass.set {
                        DrawSet::NonTextured => &self.non_textured_indices,
                        DrawSet::Textured => &self.textured_indices,
                    };
                    let Some(buffer) = indices.buffer.as_ref() else {
                        continue;
                    };
                    render_pass.set_bind_group(1, self.pass_bindings.bind_group(pass.set), &[]);
                    render_pass.set_index_buffer(buffer.slice(..), wgpu::IndexFormat::Uint32);
                    render_pass.draw_indexed(0..pass.index_count, 0, 0..1);
                }
            }
        }

        if let Some(ui_callback) = ui_callback {
            ui_callback(
                &self.device,
                &self.queue,
                &mut encoder,
                &surface_texture_view,
            );
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        true
    }

    /// Reconfigures the surface and recreates the depth buffer
    ///
    /// A zero dimension (minimised window) is ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
        log::debug!("Resized surface to {}x{}", width, height);
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Used for creating compatible render targets and UI systems
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.format
    }
}
