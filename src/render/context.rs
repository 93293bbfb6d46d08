//! wgpu-backed frame renderer.
//!
//! Draws a lit stand-in box at the subject's position and clears to the
//! plan's background colour. The box is deliberately modest; the point of
//! this crate is the choreography, and any glTF-capable renderer can slot
//! in behind [`FrameRenderer`] without touching it.

use std::fmt;

use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::assets::SubjectHandle;
use crate::camera::{Camera, CameraUniform};
use crate::render::{FrameRenderer, RenderError};
use crate::showcase::ShowcasePlan;

/// Footprint of the stand-in box, metres. Roughly an estate car: the
/// plan's stock viewpoints are tuned against these proportions.
const MARKER_HALF_LENGTH: f32 = 2.3;
const MARKER_HEIGHT: f32 = 1.4;
const MARKER_HALF_WIDTH: f32 = 0.95;

// ── Errors ───────────────────────────────────────────────────────────────

/// Errors that can occur during GPU context initialization.
#[derive(Debug)]
pub enum RenderContextError {
    /// Failed to create a wgpu surface from the window handle.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    AdapterRequest(wgpu::RequestAdapterError),
    /// GPU device request failed (limits or features not met).
    DeviceRequest(wgpu::RequestDeviceError),
    /// Surface configuration not supported by the selected adapter.
    UnsupportedSurface,
}

impl fmt::Display for RenderContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceCreation(e) => {
                write!(f, "surface creation failed: {e}")
            }
            Self::AdapterRequest(e) => {
                write!(f, "no compatible GPU adapter found: {e}")
            }
            Self::DeviceRequest(e) => write!(f, "device request failed: {e}"),
            Self::UnsupportedSurface => {
                write!(f, "surface configuration not supported by adapter")
            }
        }
    }
}

impl std::error::Error for RenderContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SurfaceCreation(e) => Some(e),
            Self::AdapterRequest(e) => Some(e),
            Self::DeviceRequest(e) => Some(e),
            Self::UnsupportedSurface => None,
        }
    }
}

// ── Uniforms and geometry ────────────────────────────────────────────────

/// Per-frame scene constants. Layout must match the WGSL `Scene` struct
/// (32 bytes, vec3/f32 pairs).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniform {
    light_position: [f32; 3],
    light_intensity: f32,
    subject_position: [f32; 3],
    /// 0.0 while the stand-in is ghosted, 1.0 once the model resolved.
    loaded: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

/// One box face: `u` cross `v` is the outward normal, triangles wound CCW
/// from outside.
fn push_face(out: &mut Vec<Vertex>, center: Vec3, u: Vec3, v: Vec3) {
    let normal = u.cross(v).normalize().to_array();
    let corners = [
        center - u - v,
        center + u - v,
        center + u + v,
        center - u - v,
        center + u + v,
        center - u + v,
    ];
    for corner in corners {
        out.push(Vertex {
            position: corner.to_array(),
            normal,
        });
    }
}

/// Box spanning `[-half_length, half_length]` in x, `[0, height]` in y,
/// `[-half_width, half_width]` in z.
fn marker_vertices(half_length: f32, height: f32, half_width: f32) -> Vec<Vertex> {
    let hy = height / 2.0;
    let x = Vec3::new(half_length, 0.0, 0.0);
    let y = Vec3::new(0.0, hy, 0.0);
    let z = Vec3::new(0.0, 0.0, half_width);

    let mut vertices = Vec::with_capacity(36);
    push_face(&mut vertices, Vec3::new(half_length, hy, 0.0), -z, y);
    push_face(&mut vertices, Vec3::new(-half_length, hy, 0.0), z, y);
    push_face(&mut vertices, Vec3::new(0.0, height, 0.0), x, -z);
    push_face(&mut vertices, Vec3::new(0.0, 0.0, 0.0), x, z);
    push_face(&mut vertices, Vec3::new(0.0, hy, half_width), x, y);
    push_face(&mut vertices, Vec3::new(0.0, hy, -half_width), -x, y);
    vertices
}

// ── Context ──────────────────────────────────────────────────────────────

/// GPU surface, device, and the single stand-in pipeline.
pub struct RenderContext {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    camera_buffer: wgpu::Buffer,
    scene_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    camera_uniform: CameraUniform,
    scene_uniform: SceneUniform,
    clear_color: wgpu::Color,
}

impl RenderContext {
    /// Create a renderer targeting any window-like surface.
    ///
    /// `window` must satisfy `Into<wgpu::SurfaceTarget<'static>>`, which
    /// `Arc<winit::window::Window>` does. `initial_size` is in physical
    /// pixels; the plan supplies the background and light.
    ///
    /// # Errors
    ///
    /// Returns [`RenderContextError`] if surface creation, adapter
    /// request, device request, or surface configuration fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        initial_size: (u32, u32),
        plan: &ShowcasePlan,
    ) -> Result<Self, RenderContextError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(RenderContextError::SurfaceCreation)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                power_preference: wgpu::PowerPreference::HighPerformance,
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::AdapterRequest)?;
        log::info!(
            "adapter: {:?}, backend: {:?}",
            adapter.get_info().name,
            adapter.get_info().backend
        );

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Showcase Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::DeviceRequest)?;

        let mut config = surface
            .get_default_config(&adapter, initial_size.0.max(1), initial_size.1.max(1))
            .ok_or(RenderContextError::UnsupportedSurface)?;
        // Fifo (vsync) is supported everywhere
        config.present_mode = wgpu::PresentMode::Fifo;
        surface.configure(&device, &config);

        let camera_uniform = CameraUniform::new();
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let scene_uniform = SceneUniform {
            light_position: plan.light.position.to_array(),
            light_intensity: plan.light.intensity,
            subject_position: [0.0; 3],
            loaded: 0.0,
        };
        let scene_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Buffer"),
            contents: bytemuck::cast_slice(&[scene_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let frame_layout = Self::create_frame_layout(&device);
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &frame_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: scene_buffer.as_entire_binding(),
                },
            ],
            label: Some("Frame Bind Group"),
        });

        let vertices = marker_vertices(MARKER_HALF_LENGTH, MARKER_HEIGHT, MARKER_HALF_WIDTH);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Marker Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let pipeline = Self::create_render_pipeline(&device, config.format, &frame_layout);

        let clear_color = wgpu::Color {
            r: f64::from(plan.background[0]),
            g: f64::from(plan.background[1]),
            b: f64::from(plan.background[2]),
            a: 1.0,
        };

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            vertex_count: vertices.len() as u32,
            camera_buffer,
            scene_buffer,
            frame_bind_group,
            camera_uniform,
            scene_uniform,
            clear_color,
        })
    }

    fn create_frame_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        let uniform_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Bind Group Layout"),
            entries: &[uniform_entry(0), uniform_entry(1)],
        })
    }

    fn create_render_pipeline(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        frame_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let shader = device.create_shader_module(wgpu::include_wgsl!("shader.wgsl"));

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Showcase Pipeline Layout"),
            bind_group_layouts: &[frame_layout],
            immediate_size: 0,
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Showcase Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: size_of::<Vertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x3,
                            offset: 0,
                            shader_location: 0,
                        },
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x3,
                            offset: 12,
                            shader_location: 1,
                        },
                    ],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            // Convex geometry with back faces culled needs no depth buffer.
            primitive: wgpu::PrimitiveState {
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        })
    }
}

impl FrameRenderer for RenderContext {
    fn render_frame(&mut self, camera: &Camera) -> Result<(), RenderError> {
        self.camera_uniform.update_view_proj(camera);
        self.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera_uniform]),
        );
        self.queue.write_buffer(
            &self.scene_buffer,
            0,
            bytemuck::cast_slice(&[self.scene_uniform]),
        );

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Err(RenderError::SurfaceOutdated);
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("surface frame timed out, skipping");
                return Ok(());
            }
            Err(err) => return Err(RenderError::Fatal(err.to_string())),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Showcase Encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Showcase Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });
            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.frame_bind_group, &[]);
            pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            pass.draw(0..self.vertex_count, 0..1);
        }
        let _ = self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn subject_loaded(&mut self, subject: &SubjectHandle) {
        self.scene_uniform.subject_position = subject.position.to_array();
        self.scene_uniform.loaded = 1.0;
    }
}
