//! SDL2 window that shows a framebuffer and reports pointer input in
//! canvas coordinates.

use super::{Framebuffer, PixelBuffer};
use crate::geometry::Point;

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

/// Window `scale` screen pixels per canvas pixel
pub struct Viewer {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    window_size: (u32, u32),
    pen_down: bool,
}

/// Streaming texture a frame is copied into before presenting
pub struct Screen<'a> {
    texture: Texture<'a>,
    width: u32,
    height: u32,
}

/// Canvas positions are normalized to `[0, 1)`, `None` when the pointer is
/// off the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    Quit,
    Key(Keycode),
    /// Left button pressed
    PenDown(Option<Point>),
    /// Pointer moved with the left button held
    PenDrag(Option<Point>),
    /// Left button released, or the pointer left the window
    PenUp,
}

impl Viewer {
    pub fn open(
        title: &str,
        canvas_width: u32,
        canvas_height: u32,
        scale: u32,
        vsync: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>), String> {
        let window_size = (canvas_width * scale.max(1), canvas_height * scale.max(1));

        let sdl = sdl2::init()?;
        let window = sdl
            .video()?
            .window(title, window_size.0, window_size.1)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let builder = window.into_canvas().accelerated();
        let builder = if vsync { builder.present_vsync() } else { builder };
        let canvas = builder.build().map_err(|e| e.to_string())?;
        let texture_creator = canvas.texture_creator();

        let viewer = Self {
            canvas,
            event_pump: sdl.event_pump()?,
            window_size,
            pen_down: false,
        };
        Ok((viewer, texture_creator))
    }

    /// Upload `frame` and show it stretched over the whole window
    pub fn show(&mut self, screen: &mut Screen, frame: &Framebuffer) -> Result<(), String> {
        if (frame.width(), frame.height()) != (screen.width, screen.height) {
            return Err(format!(
                "frame is {}x{} but screen is {}x{}",
                frame.width(),
                frame.height(),
                screen.width,
                screen.height
            ));
        }
        let pitch = screen.width as usize * 4;
        screen
            .texture
            .update(None, frame.as_bytes(), pitch)
            .map_err(|e| e.to_string())?;
        self.canvas.copy(&screen.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }

    pub fn poll_events(&mut self) -> Vec<ViewerEvent> {
        let mut out = Vec::new();
        for event in self.event_pump.poll_iter() {
            let mapped = match event {
                Event::Quit { .. } => Some(ViewerEvent::Quit),
                Event::KeyDown {
                    keycode: Some(key), ..
                } => Some(ViewerEvent::Key(key)),
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => {
                    self.pen_down = true;
                    Some(ViewerEvent::PenDown(window_to_uv(x, y, self.window_size)))
                },
                Event::MouseMotion { x, y, .. } if self.pen_down => {
                    Some(ViewerEvent::PenDrag(window_to_uv(x, y, self.window_size)))
                },
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                }
                | Event::Window {
                    win_event: WindowEvent::Leave,
                    ..
                } => {
                    self.pen_down = false;
                    Some(ViewerEvent::PenUp)
                },
                _ => None,
            };
            out.extend(mapped);
        }
        out
    }
}

impl<'a> Screen<'a> {
    pub fn new(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        // RGBA8888 matches Framebuffer's byte order
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::RGBA8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(Self {
            texture,
            width,
            height,
        })
    }
}

fn window_to_uv(x: i32, y: i32, (width, height): (u32, u32)) -> Option<Point> {
    let u = x as f32 / width as f32;
    let v = y as f32 / height as f32;
    ((0.0..1.0).contains(&u) && (0.0..1.0).contains(&v)).then_some(Point::new(u, v))
}
