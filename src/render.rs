use crate::core::defaults::POINT_LIGHT_RANGE;
use crate::core::geometry::hex_color;
use crate::core::SceneState;
use glam::{Mat4, Vec3};
use web_sys as web;

mod helpers;
mod mesh;
mod targets;
use helpers::PipelineDesc;
use mesh::GpuMesh;
use targets::DepthTarget;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    light: [f32; 4],
    intensities: [f32; 4],
}

/// Per-frame inputs that only touch uniforms.
pub struct FrameParams {
    pub view_proj: Mat4,
    pub light_position: Vec3,
    pub ambient: f32,
    pub directional: f32,
    pub point: f32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    lit_pipeline: wgpu::RenderPipeline,
    unlit_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,

    // Rebuilt whenever the scene revision changes
    room: Option<GpuMesh>,
    marker: Option<GpuMesh>,
    path: Option<GpuMesh>,
    uploaded_revision: Option<u64>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits on web; older WebGPU impls reject unknown fields
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth = DepthTarget::new(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let lit_pipeline = helpers::make_scene_pipeline(
            &device,
            &pl,
            &shader,
            format,
            PipelineDesc {
                label: "lit_pipeline",
                frag_entry: "fs_lit",
                topology: wgpu::PrimitiveTopology::TriangleList,
                blend: None,
                depth_write: true,
                // Room quads are one-sided: walls facing away from the camera drop out
                cull_mode: Some(wgpu::Face::Back),
            },
        );
        let unlit_pipeline = helpers::make_scene_pipeline(
            &device,
            &pl,
            &shader,
            format,
            PipelineDesc {
                label: "unlit_pipeline",
                frag_entry: "fs_unlit",
                topology: wgpu::PrimitiveTopology::TriangleList,
                blend: None,
                depth_write: true,
                cull_mode: Some(wgpu::Face::Back),
            },
        );
        let line_pipeline = helpers::make_scene_pipeline(
            &device,
            &pl,
            &shader,
            format,
            PipelineDesc {
                label: "line_pipeline",
                frag_entry: "fs_unlit",
                topology: wgpu::PrimitiveTopology::LineStrip,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: false,
                cull_mode: None,
            },
        );

        let bg = hex_color(crate::constants::BACKGROUND_COLOR, 1.0);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            uniform_buffer,
            bind_group,
            lit_pipeline,
            unlit_pipeline,
            line_pipeline,
            room: None,
            marker: None,
            path: None,
            uploaded_revision: None,
            width,
            height,
            clear_color: wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: 1.0,
            },
        })
    }

    /// Re-upload room, marker and arc path when the scene changed since the last upload.
    pub fn sync_scene(&mut self, scene: &SceneState) {
        if self.uploaded_revision == Some(scene.revision()) {
            return;
        }
        self.room = GpuMesh::indexed(&self.device, "room_mesh", &scene.room_mesh());
        self.marker = GpuMesh::indexed(&self.device, "marker_mesh", &scene.marker_mesh());
        self.path = GpuMesh::strip(&self.device, "arc_path", &scene.path_vertices());
        self.uploaded_revision = Some(scene.revision());
        log::debug!("[render] uploaded scene revision {}", scene.revision());
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    pub fn render(&mut self, params: &FrameParams) -> Result<(), wgpu::SurfaceError> {
        let uniforms = SceneUniforms {
            view_proj: params.view_proj.to_cols_array_2d(),
            light: params.light_position.extend(POINT_LIGHT_RANGE).to_array(),
            intensities: [params.ambient, params.directional, params.point, 0.0],
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            if let Some(room) = &self.room {
                rpass.set_pipeline(&self.lit_pipeline);
                room.draw(&mut rpass);
            }
            if let Some(marker) = &self.marker {
                rpass.set_pipeline(&self.unlit_pipeline);
                marker.draw(&mut rpass);
            }
            // Translucent path last so it blends over the room
            if let Some(path) = &self.path {
                rpass.set_pipeline(&self.line_pipeline);
                path.draw(&mut rpass);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
