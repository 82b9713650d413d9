//! Desktop preview of the photo book. Renders the same skinned page meshes
//! as the web frontend, with procedural placeholder pictures instead of
//! downloaded sheets, so the animation can be exercised without a browser.

use std::f32::consts::FRAC_PI_2;
use std::time::Instant;

use glam::{Mat4, Vec3, Vec4};
use wgpu::util::DeviceExt;
use winit::{event::*, event_loop::EventLoop, keyboard, window::WindowBuilder};

use book_core::{
    assemble_pages, ray_page_rect, tap_target, AnimationTuning, BoneChain, Gesture, PageAnimator,
    PageDimensions, PageFlags, PageGeometry, PageRecord, PageWalk, PointerKind, SheetHalves,
    TapTracker, Tick, MAX_BONES, PAGE_WGSL,
};

const PAGE_COUNT: usize = 7;
const CAMERA_EYE: Vec3 = Vec3::new(-0.5, 1.0, 4.0);
const BOOK_TILT_RAD: f32 = -std::f32::consts::PI / 64.0;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PageUniform {
    model: [[f32; 4]; 4],
    emissive: f32,
    _pad: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct JointsUniform {
    m: [[[f32; 4]; 4]; MAX_BONES],
}

impl JointsUniform {
    fn from_matrices(joints: &[Mat4]) -> Self {
        let mut m = [Mat4::IDENTITY.to_cols_array_2d(); MAX_BONES];
        for (slot, joint) in m.iter_mut().zip(joints.iter()) {
            *slot = joint.to_cols_array_2d();
        }
        Self { m }
    }
}

/// Flat RGBA8 placeholder picture.
#[derive(Clone)]
struct Picture {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// A soft checkerboard tinted per sheet so flipped pages are telling apart.
fn placeholder_picture(sheet: usize, left_half: bool) -> Picture {
    let (width, height) = (512u32, 340u32);
    let hue = sheet as f32 / PAGE_COUNT as f32;
    let tint = [
        (0.6 + 0.4 * (hue * std::f32::consts::TAU).sin()) * 255.0,
        (0.6 + 0.4 * (hue * std::f32::consts::TAU + 2.1).sin()) * 255.0,
        (0.6 + 0.4 * (hue * std::f32::consts::TAU + 4.2).sin()) * 255.0,
    ];
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let check = ((x / 32) + (y / 32)) % 2 == 0;
            let shade = if check { 1.0 } else { 0.75 };
            let edge = if left_half { x < 8 } else { x >= width - 8 };
            for c in 0..3 {
                let v = if edge { 30.0 } else { tint[c] * shade };
                pixels.push(v as u8);
            }
            pixels.push(255);
        }
    }
    Picture {
        width,
        height,
        pixels,
    }
}

fn placeholder_records() -> anyhow::Result<Vec<PageRecord<Picture>>> {
    let sheets: Vec<SheetHalves<Picture>> = (0..PAGE_COUNT)
        .map(|i| SheetHalves {
            left: placeholder_picture(i, true),
            right: placeholder_picture(i, false),
        })
        .collect();
    Ok(assemble_pages(&sheets)?)
}

struct PageGpu {
    uniform: wgpu::Buffer,
    joints: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct BookState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    pages: Vec<PageGpu>,
    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,

    dims: PageDimensions,
    walk: PageWalk,
    next_step_at: Option<Instant>,
    animators: Vec<PageAnimator>,
    chains: Vec<BoneChain>,
    models: Vec<Mat4>,
    joints_scratch: Vec<Vec<Mat4>>,
    emissives: Vec<f32>,
    tracker: TapTracker,
    cursor: (f32, f32),
    hover: Option<usize>,
    started: Instant,
    last_frame: Instant,
}

impl<'w> BookState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let dims = PageDimensions::DEFAULT;
        let geometry = PageGeometry::build(&dims)?;
        let records = placeholder_records()?;
        let page_count = records.len();

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

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("page shader"),
            source: wgpu::ShaderSource::Wgsl(PAGE_WGSL.into()),
        });

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("camera"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let camera_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("camera bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera bg"),
            layout: &camera_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let page_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("page bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 3,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 4,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("page sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let mut pages = Vec::with_capacity(page_count);
        for record in &records {
            let uniform = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("page uniform"),
                size: std::mem::size_of::<PageUniform>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let joints = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("page joints"),
                size: std::mem::size_of::<JointsUniform>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let front = upload_texture(&device, &queue, &record.front);
            let back = upload_texture(&device, &queue, &record.back);
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("page bg"),
                layout: &page_bgl,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: joints.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::TextureView(&front),
                    },
                    wgpu::BindGroupEntry {
                        binding: 3,
                        resource: wgpu::BindingResource::TextureView(&back),
                    },
                    wgpu::BindGroupEntry {
                        binding: 4,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                ],
            });
            pages.push(PageGpu {
                uniform,
                joints,
                bind_group,
            });
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("page vb"),
            contents: bytemuck::cast_slice(&geometry.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("page ib"),
            contents: bytemuck::cast_slice(&geometry.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("page pl"),
            bind_group_layouts: &[&camera_bgl, &page_bgl],
            push_constant_ranges: &[],
        });
        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<book_core::PageVertex>() as u64,
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
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 24,
                    shader_location: 2,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Uint32,
                    offset: 32,
                    shader_location: 3,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Uint32x4,
                    offset: 36,
                    shader_location: 4,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 52,
                    shader_location: 5,
                },
            ],
        };
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("page pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_layout],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let depth_view = create_depth_view(&device, config.width, config.height);
        let chains = (0..page_count)
            .map(|_| BoneChain::new(dims.segments, dims.segment_width()))
            .collect::<Result<Vec<_>, _>>()?;
        let animators = (0..page_count)
            .map(|i| PageAnimator::new(i, page_count, AnimationTuning::default()))
            .collect();

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            camera_buffer,
            camera_bind_group,
            vertex_buffer,
            index_buffer,
            index_count: geometry.indices.len() as u32,
            pages,
            depth_view,
            width: size.width.max(1),
            height: size.height.max(1),
            dims,
            walk: PageWalk::new(page_count),
            next_step_at: None,
            animators,
            chains,
            models: vec![Mat4::IDENTITY; page_count],
            joints_scratch: vec![Vec::new(); page_count],
            emissives: vec![0.0; page_count],
            tracker: TapTracker::default(),
            cursor: (0.0, 0.0),
            hover: None,
            started: Instant::now(),
            last_frame: Instant::now(),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, self.width, self.height);
    }

    fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    fn view_proj(&self) -> Mat4 {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, aspect, 0.1, 100.0);
        let view = Mat4::look_at_rh(CAMERA_EYE, Vec3::ZERO, Vec3::Y);
        proj * view
    }

    fn screen_ray(&self, sx: f32, sy: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / self.width.max(1) as f32) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / self.height.max(1) as f32);
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let far: Vec3 = p_far.truncate() / p_far.w;
        (CAMERA_EYE, (far - CAMERA_EYE).normalize())
    }

    fn pick_page(&self, sx: f32, sy: f32) -> Option<usize> {
        let (ro, rd) = self.screen_ray(sx, sy);
        let mut best: Option<(usize, f32)> = None;
        for (i, model) in self.models.iter().enumerate() {
            let inv = model.inverse();
            let local_origin = inv.transform_point3(ro);
            let local_dir = inv.transform_vector3(rd);
            if let Some(t) =
                ray_page_rect(local_origin, local_dir, self.dims.width, self.dims.height)
            {
                match best {
                    Some((_, best_t)) if t >= best_t => {}
                    _ => best = Some((i, t)),
                }
            }
        }
        best.map(|(i, _)| i)
    }

    /// Point the walk at a page; the first step fires on the next frame.
    fn request_page(&mut self, target: usize) {
        if self.walk.request(target) {
            self.next_step_at = Some(Instant::now());
        }
        log::info!("navigating to page {}", self.walk.target());
    }

    /// Walk steps ride on the render loop: run the pending step once its
    /// deadline passes and arm the next one from the tick's delay.
    fn tick_walk(&mut self, now: Instant) {
        let Some(deadline) = self.next_step_at else {
            return;
        };
        if now < deadline {
            return;
        }
        match self.walk.tick() {
            Tick::Done => self.next_step_at = None,
            Tick::Stepped { next_in, .. } => {
                self.next_step_at = Some(now + next_in);
            }
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.tick_walk(now);

        let delayed = self.walk.delayed();
        let book_closed = self.walk.book_closed();
        let book = Mat4::from_rotation_x(BOOK_TILT_RAD) * Mat4::from_rotation_y(-FRAC_PI_2);
        for (i, animator) in self.animators.iter_mut().enumerate() {
            let flags = PageFlags {
                opened: delayed > i,
                book_closed,
            };
            animator.set_highlighted(self.hover == Some(i));
            // `book-core` keeps time with `instant`, an alias of std's
            // Instant off wasm.
            animator.update(&mut self.chains[i], flags, now, dt);
            let (bend, fold) = self.chains[i].root_rotation();
            let stack_z = (delayed as f32 - i as f32) * self.dims.depth;
            self.models[i] = book
                * Mat4::from_translation(Vec3::new(0.0, 0.0, stack_z))
                * Mat4::from_rotation_x(fold)
                * Mat4::from_rotation_y(bend);
            self.emissives[i] = animator.emissive();
            self.chains[i].skinning_matrices(&mut self.joints_scratch[i]);
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&CameraUniform {
                view_proj: self.view_proj().to_cols_array_2d(),
            }),
        );
        for (i, page) in self.pages.iter().enumerate() {
            self.queue.write_buffer(
                &page.uniform,
                0,
                bytemuck::bytes_of(&PageUniform {
                    model: self.models[i].to_cols_array_2d(),
                    emissive: self.emissives[i],
                    _pad: [0.0; 3],
                }),
            );
            self.queue.write_buffer(
                &page.joints,
                0,
                bytemuck::bytes_of(&JointsUniform::from_matrices(&self.joints_scratch[i])),
            );
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("book pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.01,
                            g: 0.01,
                            b: 0.02,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.camera_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            for page in &self.pages {
                rpass.set_bind_group(1, &page.bind_group, &[]);
                rpass.draw_indexed(0..self.index_count, 0, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth32Float,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn upload_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    picture: &Picture,
) -> wgpu::TextureView {
    let size = wgpu::Extent3d {
        width: picture.width,
        height: picture.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("picture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &picture.pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * picture.width),
            rows_per_image: Some(picture.height),
        },
        size,
    );
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("Photo Book (native preview)")
        .build(&event_loop)
        .expect("window");

    let mut state = pollster::block_on(BookState::new(&window)).expect("gpu");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => state.resize(size),
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent {
                event: WindowEvent::CursorMoved { position, .. },
                ..
            } => {
                state.cursor = (position.x as f32, position.y as f32);
                state.hover = state.pick_page(state.cursor.0, state.cursor.1);
            }
            Event::WindowEvent {
                event:
                    WindowEvent::MouseInput {
                        state: button_state,
                        button: MouseButton::Left,
                        ..
                    },
                ..
            } => {
                let (x, y) = state.cursor;
                let at_ms = state.now_ms();
                match button_state {
                    ElementState::Pressed => {
                        state.tracker.press(x, y, at_ms, PointerKind::Mouse);
                    }
                    ElementState::Released => {
                        if state.tracker.release(x, y, at_ms) == Some(Gesture::Tap) {
                            if let Some(page) = state.pick_page(x, y) {
                                let opened = state.walk.opened(page);
                                state.request_page(tap_target(opened, page));
                            }
                        }
                    }
                }
            }
            Event::WindowEvent {
                event:
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                logical_key,
                                state: ElementState::Pressed,
                                ..
                            },
                        ..
                    },
                ..
            } => match logical_key {
                keyboard::Key::Named(keyboard::NamedKey::ArrowRight) => {
                    let target = state.walk.target().saturating_add(1);
                    state.request_page(target);
                }
                keyboard::Key::Named(keyboard::NamedKey::ArrowLeft) => {
                    let target = state.walk.target().saturating_sub(1);
                    state.request_page(target);
                }
                _ => {}
            },
            Event::AboutToWait => match state.render() {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            },
            _ => {}
        })
        .unwrap();
}
