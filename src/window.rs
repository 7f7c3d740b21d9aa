//! SDL2 window, event translation and frame pacing for the host shell.

use std::time::Duration;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

/// Host actions bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ChangeShape,
    Reload,
    CloseModel,
    Reset,
    AutoRotate,
    Screenshot,
}

/// Input the host forwards to the viewer, already stripped of SDL types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    Quit,
    Resize(u32, u32),
    PointerDown { x: i32, y: i32, clicks: u8 },
    PointerUp,
    /// `held` is true while the left button is down.
    PointerMotion { x: i32, y: i32, held: bool },
    /// Wheel notches, positive toward the user.
    Wheel(i32),
    Key(Key),
}

fn map_key(keycode: Keycode) -> Option<Key> {
    match keycode {
        Keycode::C => Some(Key::ChangeShape),
        Keycode::L => Some(Key::Reload),
        Keycode::X => Some(Key::CloseModel),
        Keycode::R => Some(Key::Reset),
        Keycode::Space => Some(Key::AutoRotate),
        Keycode::P => Some(Key::Screenshot),
        _ => None,
    }
}

pub struct FrameLimiter {
    previous_frame_time: u64,
    frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window, period: Duration) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
            frame_time: period.as_millis() as u64,
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time - self.previous_frame_time;

        if delta_time < self.frame_time {
            std::thread::sleep(Duration::from_millis(self.frame_time - delta_time));
            current_time = window.timer().ticks64();
            delta_time = current_time - self.previous_frame_time;
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

pub struct Window {
    // Field order matters: `texture` borrows from `texture_creator` and must drop first.
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // texture is declared before texture_creator, so it is dropped first.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            canvas,
            texture_creator,
            texture,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    /// Drains every pending SDL event, keeping the ones the viewer cares about.
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            let mapped = match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => Some(WindowEvent::Quit),
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => map_key(keycode).map(WindowEvent::Key),
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => Some(WindowEvent::Resize(w as u32, h as u32)),
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    clicks,
                    x,
                    y,
                    ..
                } => Some(WindowEvent::PointerDown { x, y, clicks }),
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => Some(WindowEvent::PointerUp),
                Event::MouseMotion {
                    x, y, mousestate, ..
                } => Some(WindowEvent::PointerMotion {
                    x,
                    y,
                    held: mousestate.left(),
                }),
                // SDL reports scrolling away from the user as positive.
                Event::MouseWheel { y, .. } => Some(WindowEvent::Wheel(-y)),
                _ => None,
            };
            events.extend(mapped);
        }
        events
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), String> {
        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(|e| e.to_string())
    }

    pub fn present(&mut self, buffer: &[u8]) -> Result<(), String> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), String> {
        self.width = width;
        self.height = height;
        // SAFETY: Same as in new() - texture_creator outlives texture
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(self.texture_creator.as_ref() as *const _) };
        self.texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}
