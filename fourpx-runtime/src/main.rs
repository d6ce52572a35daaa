use std::{fmt::Display, num::NonZeroU32, rc::Rc};

use clap::Parser;
use eyre::WrapErr;
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowBuilder},
};

use args::Args;
use editor::Editor;
use graphics::glyph::BuiltinCatalog;
use layout::Position;
use render::{canvas::Canvas, DrawHandle, Drawable};

mod args;
pub mod config;
pub mod editor;
pub mod error;

/// Graphics primitives: channel slots, colors and the glyph catalog
pub mod graphics;

/// Packing glyph dots into the color channels of pixel columns
pub mod encode;

/// Cursor bookkeeping
pub mod layout;

/// Rendering engine implementation
pub mod render;

type FourPx = Editor<BuiltinCatalog, Canvas>;

/// Simple wrapper for the errors returned by `winit` and `softbuffer`;
/// not all of them are `Send + Sync`, which `eyre` needs
#[derive(Debug)]
pub struct ShellError(String);
impl Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ShellError: {}", self.0)
    }
}
impl std::error::Error for ShellError {}

fn shell_error(err: impl Display) -> ShellError {
    ShellError(err.to_string())
}

fn main() -> eyre::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config();
    let (width, height) = config.canvas_size();

    let catalog = BuiltinCatalog::try_default().wrap_err("processing builtin glyphs")?;
    let mut editor = Editor::new(config, catalog, Canvas::new(width, height));

    if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading {}", path.display()))?;
        if let Err(err) = editor.insert_text(&text) {
            editor::report(&err);
        }
        log::info!("inserted {}", path.display());
    }

    let event_loop = EventLoop::new()
        .map_err(shell_error)
        .wrap_err("creating event loop")?;
    let window = Rc::new(
        WindowBuilder::new()
            .with_title("4PX")
            .with_inner_size(PhysicalSize::new(
                (width * config.scale) as u32,
                (height * config.scale) as u32,
            ))
            .build(&event_loop)
            .map_err(shell_error)
            .wrap_err("creating window")?,
    );

    let context = softbuffer::Context::new(window.clone())
        .map_err(shell_error)
        .wrap_err("creating softbuffer context")?;
    let mut surface = softbuffer::Surface::new(&context, window.clone())
        .map_err(shell_error)
        .wrap_err("creating softbuffer surface")?;

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Wait);

            let Event::WindowEvent { window_id, event } = event else {
                return;
            };
            if window_id != window.id() {
                return;
            }

            match event {
                WindowEvent::CloseRequested => elwt.exit(),

                WindowEvent::RedrawRequested => {
                    if let Err(err) = redraw(&window, &mut surface, &editor) {
                        log::error!("{err:?}");
                        elwt.exit();
                    }
                }

                WindowEvent::KeyboardInput { event, .. } => {
                    if on_key(&mut editor, event) {
                        window.request_redraw();
                    }
                }
                _ => (),
            }
        })
        .map_err(shell_error)
        .wrap_err("running event loop")
}

/// Routes a key press to the editor.
/// Returns `true` if anything might have been drawn.
fn on_key(editor: &mut FourPx, event: KeyEvent) -> bool {
    if event.state != ElementState::Pressed {
        return false;
    }

    let result = match event.logical_key {
        Key::Named(NamedKey::Enter) => editor.on_enter(),
        Key::Named(NamedKey::Tab) => editor.on_tab(),
        Key::Named(NamedKey::Escape) => {
            editor.reset();
            Ok(())
        }
        _ => match event.text {
            Some(text) => text
                .chars()
                .try_for_each(|character| editor.on_char(character).map(|_| ())),
            None => return false,
        },
    };

    if let Err(err) = result {
        editor::report(&err);
    }
    true
}

fn redraw(
    window: &Window,
    surface: &mut softbuffer::Surface<Rc<Window>, Rc<Window>>,
    editor: &FourPx,
) -> eyre::Result<()> {
    let size = window.inner_size();
    let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
    else {
        // Minimized
        return Ok(());
    };

    surface
        .resize(width, height)
        .map_err(shell_error)
        .wrap_err("resizing surface")?;
    let mut buffer = surface.buffer_mut().map_err(shell_error)?;

    let mut handle = DrawHandle {
        buffer: &mut buffer,
        width: size.width as usize,
        scale: editor.config().scale,
    };
    handle.clear(graphics::to_pixel(palette::named::BLACK));
    editor
        .surface()
        .draw_at(&mut handle, Position { x: 0, y: 0 });

    buffer.present().map_err(shell_error)?;
    Ok(())
}
