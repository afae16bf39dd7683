//! Contrib Breakout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use contrib_breakout::audio::{AudioManager, sounds_for};
    use contrib_breakout::game::{Control, Game, LoopControl};
    use contrib_breakout::platform::InputEvent;
    use contrib_breakout::renderer::{CanvasRenderer, GpuRenderer, build_scene};
    use contrib_breakout::settings::{RenderBackend, Settings};
    use contrib_breakout::sim::Arena;

    /// Active drawing backend
    enum Backend {
        Canvas(CanvasRenderer),
        Gpu {
            gpu: GpuRenderer,
            /// 2D canvas stacked over the GPU canvas for text
            overlay: Option<CanvasRenderer>,
        },
    }

    /// Everything the browser callbacks share
    struct App {
        game: Game,
        settings: Settings,
        backend: Backend,
        audio: Option<AudioManager>,
        document: Document,
    }

    impl App {
        /// Draw the current state
        fn render(&mut self) {
            let scene = build_scene(&self.game.state, &self.settings);
            match &mut self.backend {
                Backend::Canvas(canvas) => {
                    if let Err(e) = canvas.draw(&scene) {
                        log::warn!("Render error: {:?}", e);
                    }
                }
                Backend::Gpu { gpu, overlay } => {
                    match gpu.render(&scene) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            let (w, h) = gpu.size;
                            gpu.resize(w, h);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Out of memory!");
                        }
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                    if let Some(overlay) = overlay {
                        overlay.clear();
                        if let Err(e) = overlay.draw_labels(&scene.labels) {
                            log::warn!("Overlay error: {:?}", e);
                        }
                    }
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let session = &self.game.state.session;
            set_text(&self.document, "score", &session.score_text());
            set_text(&self.document, "time", &session.time_text());
            set_text(&self.document, "message", session.message());
        }

        fn play_sounds(&mut self) {
            let events = self.game.take_events();
            if let Some(audio) = &self.audio {
                for sound in sounds_for(&events) {
                    audio.play(sound);
                }
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    async fn init_gpu(
        canvas: &HtmlCanvasElement,
        document: &Document,
    ) -> Result<Backend, String> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        // Adapter first: creating the surface claims the canvas for WebGPU
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| e.to_string())?;

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| e.to_string())?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let gpu = GpuRenderer::new(surface, &adapter, canvas.width(), canvas.height())
            .await
            .map_err(|e| e.to_string())?;

        let overlay = document
            .get_element_by_id("overlay")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .and_then(|c| CanvasRenderer::new(c).ok());
        if overlay.is_none() {
            log::warn!("No #overlay canvas - grid labels will not be drawn");
        }

        Ok(Backend::Gpu { gpu, overlay })
    }

    /// Swap `canvas` for an unclaimed copy with the same id and size
    ///
    /// A canvas that handed out a "webgpu" context returns null for "2d".
    fn fresh_canvas(canvas: &HtmlCanvasElement) -> Result<HtmlCanvasElement, JsValue> {
        let copy: HtmlCanvasElement = canvas.clone_node()?.dyn_into()?;
        if let Some(parent) = canvas.parent_node() {
            parent.replace_child(&copy, canvas)?;
        }
        Ok(copy)
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Contrib Breakout starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let settings = Settings::load();
        let arena = Arena::new(canvas.width() as f32, canvas.height() as f32);
        log::info!("Arena {}x{}", arena.width, arena.height);

        let backend = match settings.renderer {
            RenderBackend::WebGpu => match init_gpu(&canvas, &document).await {
                Ok(backend) => backend,
                Err(e) => {
                    log::warn!("WebGPU unavailable ({e}), falling back to Canvas 2D");
                    Backend::Canvas(CanvasRenderer::new(fresh_canvas(&canvas)?)?)
                }
            },
            RenderBackend::Canvas2d => Backend::Canvas(CanvasRenderer::new(canvas.clone())?),
        };
        log::info!("Renderer: {}", settings.renderer.as_str());

        let audio = settings.sound.then(AudioManager::new);
        let app = Rc::new(RefCell::new(App {
            game: Game::new(arena, &settings),
            settings,
            backend,
            audio,
            document: document.clone(),
        }));

        setup_input_handlers(&document, app.clone())?;
        setup_control(&document, "start", Control::Start, app.clone())?;
        setup_control(&document, "restart", Control::Restart, app.clone())?;
        setup_control(&document, "reset", Control::Reset, app.clone())?;

        // Show the board before the first start
        {
            let mut a = app.borrow_mut();
            a.render();
            a.update_hud();
        }

        log::info!("Contrib Breakout ready");
        Ok(())
    }

    fn setup_input_handlers(document: &Document, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(input) = InputEvent::from_key(&event.key(), pressed) {
                    app.borrow_mut().game.input.push(input);
                }
            });
            document
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn setup_control(
        document: &Document,
        id: &str,
        control: Control,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("No #{id} button - {control:?} unavailable");
            return Ok(());
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let now = js_sys::Date::now();
            let schedule = {
                let mut a = app.borrow_mut();
                if let Some(audio) = &a.audio {
                    audio.resume();
                }
                let schedule = a.game.control(control, now);
                a.render();
                a.update_hud();
                schedule
            };
            if schedule {
                request_animation_frame(app.clone());
            }
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let control = {
            let mut a = app.borrow_mut();
            let control = a.game.frame(js_sys::Date::now());
            if control == LoopControl::Continue {
                a.play_sounds();
                a.render();
                a.update_hud();
            }
            control
        };

        if control == LoopControl::Continue {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use contrib_breakout::game::{Control, Game, LoopControl};
    use contrib_breakout::settings::Settings;
    use contrib_breakout::sim::Arena;

    /// One display refresh at 60 Hz
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Give up after five minutes of simulated play
    const MAX_FRAMES: u32 = 60 * 60 * 5;

    env_logger::init();
    log::info!("Contrib Breakout (native) starting...");
    log::info!("Native mode runs a headless autopilot session - run with `trunk serve` for the web version");

    let settings = Settings {
        autopilot: true,
        ..Settings::load()
    };
    let mut game = Game::new(Arena::default(), &settings);

    let mut now = 0.0;
    let mut frames = 0;
    game.control(Control::Start, now);
    while frames < MAX_FRAMES && game.frame(now) == LoopControl::Continue {
        now += FRAME_MS;
        frames += 1;
    }

    let session = &game.state.session;
    let message = match session.message() {
        "" => "Still running",
        m => m,
    };
    println!(
        "{message} after {frames} frames - {}, {}",
        session.score_text(),
        session.time_text()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
