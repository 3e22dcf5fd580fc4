use temcy_core::camera::Camera;
use temcy_core::constants::FOG_COLOR;
use temcy_core::terrain::{Orientation, TerrainMesh, TerrainUniforms};
use web_sys as web;

mod terrain;
use terrain::{create_terrain_resources, TerrainResources};

/// WebGPU state for the hero canvas: one wireframe terrain pass over a
/// fog-colored clear.
pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    terrain: TerrainResources,
    camera: Camera,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, mesh: &TerrainMesh) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        // Colors are authored as sRGB hex values, so write them unconverted.
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
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

        let terrain = create_terrain_resources(&device, format, mesh);
        log::info!(
            "[gpu] terrain ready: {} vertices, {} line indices, {:?}",
            mesh.vertices().len(),
            terrain.index_count,
            format
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            terrain,
            camera: Camera::hero(width as f32 / height as f32),
            width,
            height,
            clear_color: wgpu::Color {
                r: FOG_COLOR[0] as f64,
                g: FOG_COLOR[1] as f64,
                b: FOG_COLOR[2] as f64,
                a: 1.0,
            },
        })
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
            self.camera.set_aspect(width as f32 / height as f32);
        }
    }

    pub fn render(&mut self, orientation: &Orientation) -> Result<(), wgpu::SurfaceError> {
        let uniforms = TerrainUniforms::new(&self.camera, orientation);
        self.queue.write_buffer(
            &self.terrain.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms),
        );

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
                label: Some("terrain_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.terrain.pipeline);
            rpass.set_bind_group(0, &self.terrain.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.terrain.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.terrain.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.terrain.index_count, 0, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Build the renderer for the hero canvas.
///
/// The surface borrows the canvas for the life of the page, so a clone is
/// leaked to get a `'static` state.
pub async fn init_gpu(canvas: &web::HtmlCanvasElement, mesh: &TerrainMesh) -> Option<GpuState<'static>> {
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    match GpuState::new(leaked_canvas, mesh).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}
