use backdrop_core::render::SceneRenderer;
use backdrop_core::{InstantClock, PointerState, SceneParams, SceneSession};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

// Stand-in for the page background behind the transparent web canvas
const CLEAR: wgpu::Color = wgpu::Color {
    r: 0.04,
    g: 0.04,
    b: 0.07,
    a: 1.0,
};

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: SceneRenderer,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window, session: &SceneSession) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
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
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        log::info!("[gpu] {:?} surface {}x{}", format, config.width, config.height);

        let renderer = SceneRenderer::new(&device, format, session);
        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(&mut self, session: &SceneSession) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.renderer
            .upload(&self.queue, session, self.config.width, self.config.height);
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        self.renderer.encode(&mut encoder, &view, CLEAR);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut session = SceneSession::new(&SceneParams::default(), &mut rand::thread_rng())?;
    let clock = InstantClock::default();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Backdrop preview")
        .build(&event_loop)?;
    let size = window.inner_size();
    session.camera.set_viewport(size.width, size.height);

    let mut state = pollster::block_on(GpuState::new(&window, &session))?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            session.camera.set_viewport(size.width, size.height);
            state.resize(size);
        }
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => {
            let size = state.window.inner_size();
            session.set_pointer(PointerState::from_client(
                position.x,
                position.y,
                size.width as f64,
                size.height as f64,
            ));
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::AboutToWait => {
            session.tick_with(&clock);
            match state.render(&session) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[frame] out of GPU memory, exiting");
                    elwt.exit();
                }
                Err(e) => log::debug!("[frame] skipped: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
