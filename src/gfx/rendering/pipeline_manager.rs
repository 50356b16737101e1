//! Render pipeline management system for wgpu
//!
//! Shaders and pipelines are registered by name and created up front, so a
//! broken shader is reported at start-up rather than on the first frame.

use std::{collections::HashMap, sync::Arc};
use wgpu::*;

use crate::{
    error::{Result, ViewerError},
    gfx::scene::vertex::Vertex3D,
};

/// Configuration for creating a render pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub label: String,
    pub shader: String,
    pub bind_group_layouts: Vec<BindGroupLayout>,
    pub primitive_topology: PrimitiveTopology,
    pub cull_mode: Option<Face>,
    pub depth_format: Option<TextureFormat>,
    pub multisample: MultisampleState,
    pub color_targets: Vec<Option<ColorTargetState>>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            label: "Default Pipeline".to_string(),
            shader: "shader.wgsl".to_string(),
            bind_group_layouts: Vec::new(),
            primitive_topology: PrimitiveTopology::TriangleList,
            // A reflected scene flips the winding, so nothing is culled
            cull_mode: None,
            depth_format: None,
            multisample: MultisampleState::default(),
            color_targets: vec![Some(ColorTargetState {
                format: TextureFormat::Bgra8Unorm,
                blend: Some(BlendState::REPLACE),
                write_mask: ColorWrites::ALL,
            })],
        }
    }
}

impl PipelineConfig {
    pub fn default_with_shader(shader: &str) -> Self {
        Self {
            shader: shader.to_string(),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_owned();
        self
    }

    pub fn with_bind_group_layouts(mut self, layouts: Vec<BindGroupLayout>) -> Self {
        self.bind_group_layouts = layouts;
        self
    }

    /// Enables depth testing against a buffer of `format`
    pub fn with_depth_format(mut self, format: TextureFormat) -> Self {
        self.depth_format = Some(format);
        self
    }

    /// Single opaque color target in the surface format
    pub fn with_surface_format(mut self, format: TextureFormat) -> Self {
        self.color_targets = vec![Some(ColorTargetState {
            format,
            blend: Some(BlendState::REPLACE),
            write_mask: ColorWrites::ALL,
        })];
        self
    }
}

/// Compiles shaders and owns the render pipelines built from them
pub struct PipelineManager {
    device: Arc<Device>,
    pipelines: HashMap<String, RenderPipeline>,
    pipeline_configs: HashMap<String, PipelineConfig>,
    shader_modules: HashMap<String, ShaderModule>,
}

impl PipelineManager {
    pub fn new(device: Arc<Device>) -> Self {
        Self {
            device,
            pipelines: HashMap::new(),
            pipeline_configs: HashMap::new(),
            shader_modules: HashMap::new(),
        }
    }

    /// Compiles a WGSL module and keeps it under `name`
    ///
    /// WGSL errors come back as [`ViewerError::ShaderCompilation`] with the
    /// backend's diagnostic instead of tripping the device error handler.
    pub fn load_shader(&mut self, name: &str, source: &str) -> Result<()> {
        self.device.push_error_scope(ErrorFilter::Validation);
        let shader_module = self.device.create_shader_module(ShaderModuleDescriptor {
            label: Some(name),
            source: ShaderSource::Wgsl(source.into()),
        });
        if let Some(error) = pollster::block_on(self.device.pop_error_scope()) {
            return Err(ViewerError::ShaderCompilation {
                name: name.to_string(),
                message: error.to_string(),
            });
        }

        log::debug!("Compiled shader '{}'", name);
        self.shader_modules.insert(name.to_string(), shader_module);
        Ok(())
    }

    /// Registers a pipeline configuration; it is built by [`Self::create_all_pipelines`]
    pub fn register_pipeline(&mut self, name: &str, config: PipelineConfig) {
        self.pipeline_configs.insert(name.to_string(), config);
    }

    /// Builds every registered pipeline that does not exist yet
    pub fn create_all_pipelines(&mut self) -> Result<()> {
        let pending: Vec<String> = self
            .pipeline_configs
            .keys()
            .filter(|name| !self.pipelines.contains_key(*name))
            .cloned()
            .collect();

        for name in pending {
            let config = &self.pipeline_configs[&name];
            let pipeline = self.create_pipeline_from_config(&name, config)?;
            self.pipelines.insert(name, pipeline);
        }
        Ok(())
    }

    pub fn get_pipeline(&self, name: &str) -> Option<&RenderPipeline> {
        self.pipelines.get(name)
    }

    fn create_pipeline_from_config(
        &self,
        name: &str,
        config: &PipelineConfig,
    ) -> Result<RenderPipeline> {
        let shader =
            self.shader_modules
                .get(&config.shader)
                .ok_or_else(|| ViewerError::Pipeline {
                    name: name.to_string(),
                    message: format!("shader '{}' not loaded", config.shader),
                })?;

        let bind_group_layout_refs: Vec<&BindGroupLayout> =
            config.bind_group_layouts.iter().collect();

        self.device.push_error_scope(ErrorFilter::Validation);

        let pipeline_layout = self
            .device
            .create_pipeline_layout(&PipelineLayoutDescriptor {
                label: Some(&format!("{} Layout", name)),
                bind_group_layouts: &bind_group_layout_refs,
                push_constant_ranges: &[],
            });

        let depth_stencil = config.depth_format.map(|format| DepthStencilState {
            format,
            depth_write_enabled: true,
            depth_compare: CompareFunction::Less,
            stencil: StencilState::default(),
            bias: DepthBiasState::default(),
        });

        let pipeline = self
            .device
            .create_render_pipeline(&RenderPipelineDescriptor {
                label: Some(&config.label),
                layout: Some(&pipeline_layout),
                vertex: VertexState {
                    module: shader,
                    entry_point: Some("vs_main"),
                    buffers: &[Vertex3D::desc()],
                    compilation_options: PipelineCompilationOptions::default(),
                },
                fragment: Some(FragmentState {
                    module: shader,
                    entry_point: Some("fs_main"),
                    targets: &config.color_targets,
                    compilation_options: PipelineCompilationOptions::default(),
                }),
                primitive: PrimitiveState {
                    topology: config.primitive_topology,
                    strip_index_format: None,
                    front_face: FrontFace::Ccw,
                    cull_mode: config.cull_mode,
                    polygon_mode: PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil,
                multisample: config.multisample,
                multiview: None,
                cache: None,
            });

        if let Some(error) = pollster::block_on(self.device.pop_error_scope()) {
            return Err(ViewerError::Pipeline {
                name: name.to_string(),
                message: error.to_string(),
            });
        }

        log::debug!("Created pipeline '{}'", name);
        Ok(pipeline)
    }
}
