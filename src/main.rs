//! Bounce Sim entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use bounce_sim::renderer::{GpuSurface, Palette, RenderState, render_with};
    use bounce_sim::sim::{PhysicsParams, World, advance_with};
    use bounce_sim::{GpuError, Settings};

    /// Everything one browser tab runs
    struct App {
        world: World,
        params: PhysicsParams,
        palette: Palette,
        dt: f32,
        surface: GpuSurface,
        running: bool,
        frames: u64,
    }

    impl App {
        /// One fixed step and one draw per animation frame
        fn frame(&mut self) {
            advance_with(&mut self.world, &self.params, self.dt);
            render_with(&mut self.surface, &self.world, &self.palette);
            self.frames += 1;
        }
    }

    async fn create_surface(
        canvas: HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<GpuSurface, GpuError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
        let state = RenderState::new(&instance, surface, width, height).await?;
        Ok(GpuSurface::new(state))
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Bounce Sim starting...");

        let settings = match Settings::load() {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        };

        let Some(window) = web_sys::window() else {
            log::error!("No window available");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document available");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element found");
            return;
        };

        canvas.set_width(settings.width);
        canvas.set_height(settings.height);
        document.set_title(&settings.title);

        let surface = match create_surface(canvas, settings.width, settings.height).await {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        };

        let app = Rc::new(RefCell::new(App {
            world: settings.build_world(),
            params: settings.physics,
            palette: settings.palette,
            dt: settings.dt,
            surface,
            running: true,
            frames: 0,
        }));

        setup_quit_on_pagehide(app.clone());
        request_animation_frame(app);

        log::info!("Bounce Sim running!");
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            if !a.running {
                log::info!("Frame loop stopped after {} frames", a.frames);
                return;
            }
            a.frame();
        }

        request_animation_frame(app);
    }

    /// Stop at the next frame boundary when the page goes away
    fn setup_quit_on_pagehide(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().running = false;
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bounce Sim (native, headless) starting...");

    if let Err(e) = run_headless() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play the configured scene into a software framebuffer
#[cfg(not(target_arch = "wasm32"))]
fn run_headless() -> Result<(), Box<dyn std::error::Error>> {
    use std::time::Duration;

    use bounce_sim::Settings;
    use bounce_sim::platform::{self, HeadlessPlatform};
    use bounce_sim::renderer::FramebufferSurface;

    let settings = Settings::load()?;
    let mut world = settings.build_world();
    let mut surface = FramebufferSurface::new(settings.width, settings.height);
    let mut host = HeadlessPlatform::new(
        settings.max_frames,
        Duration::from_millis(settings.frame_delay_ms),
    );

    log::info!(
        "{} ({}x{}), {} bodies",
        settings.title,
        settings.width,
        settings.height,
        world.len()
    );

    let frames = platform::run(
        &mut world,
        &settings.physics,
        settings.dt,
        &settings.palette,
        &mut surface,
        &mut host,
    );

    for (i, body) in world.iter().enumerate() {
        log::info!(
            "body {} after {} frames: pos ({:.2}, {:.2}) vel ({:.2}, {:.2})",
            i,
            frames,
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y
        );
    }

    if let Some(path) = &settings.snapshot_path {
        surface.save_snapshot(path)?;
        log::info!("Wrote snapshot of frame {} to {}", surface.frames_presented(), path);
    }

    Ok(())
}
