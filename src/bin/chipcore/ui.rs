// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)
#![allow(missing_docs)]
//! Platform-specific IO/UI code, and some debug functionality.

use chipcore::prelude::*;
use minifb::*;
use std::time::Instant;

#[derive(Clone, Debug)]
pub struct UIBuilder {
    pub width: usize,
    pub height: usize,
    pub name: Option<&'static str>,
    pub window_options: WindowOptions,
}

impl UIBuilder {
    pub fn new(width: usize, height: usize) -> Self {
        UIBuilder {
            width,
            height,
            ..Default::default()
        }
    }
    pub fn build(&self) -> Result<UI> {
        let ui = UI {
            window: Window::new(
                self.name.unwrap_or_default(),
                self.width,
                self.height,
                self.window_options,
            )?,
            keyboard: Default::default(),
            fb: FrameBuffer::new(self.width, self.height),
            time: Instant::now(),
        };
        Ok(ui)
    }
}

impl Default for UIBuilder {
    fn default() -> Self {
        UIBuilder {
            width: 64,
            height: 32,
            name: Some("chipcore"),
            window_options: WindowOptions {
                title: true,
                resize: false,
                scale: Scale::X16,
                scale_mode: ScaleMode::AspectRatioStretch,
                none: true,
                ..Default::default()
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameBufferFormat {
    pub fg: u32,
    pub bg: u32,
}

impl Default for FrameBufferFormat {
    fn default() -> Self {
        FrameBufferFormat {
            fg: 0x0011a434,
            bg: 0x001E2431,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameBuffer {
    buffer: Vec<u32>,
    width: usize,
    height: usize,
    format: FrameBufferFormat,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            buffer: vec![0x00be4d; width * height],
            width,
            height,
            format: Default::default(),
        }
    }
    /// Paints each pixel of the screen into the buffer
    pub fn draw(&mut self, screen: &Screen) {
        for (out, &lit) in self.buffer.iter_mut().zip(screen.pixels()) {
            *out = if lit { self.format.fg } else { self.format.bg };
        }
    }
    pub fn render(&mut self, window: &mut Window, screen: &Screen) -> Result<()> {
        self.draw(screen);
        window.update_with_buffer(&self.buffer, self.width, self.height)?;
        Ok(())
    }
    pub fn buffer(&self) -> &[u32] {
        &self.buffer
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new(64, 32)
    }
}

#[derive(Debug)]
pub struct UI {
    window: Window,
    keyboard: Vec<Key>,
    fb: FrameBuffer,
    time: Instant,
}

impl UI {
    pub fn frame(&mut self, machine: &Machine) -> Result<bool> {
        match machine.state() {
            RunState::Running => self.window.set_title(&format!(
                "chipcore  ▶ {:02.02}",
                (1.0 / self.time.elapsed().as_secs_f64())
            )),
            state => self.window.set_title(&format!("chipcore ⏸ {state}")),
        }
        if !self.window.is_open() {
            return Ok(false);
        }
        self.time = Instant::now();
        // update framebuffer
        self.fb.render(&mut self.window, machine.screen())?;
        Ok(true)
    }

    pub fn keys(&mut self, machine: &mut Machine, keypad: &mut Keypad) -> Result<bool> {
        // minifb's get_keys_pressed/released miss keys between frames, so diff against last frame
        let get_keys_pressed = || {
            self.window
                .get_keys()
                .into_iter()
                .filter(|key| !self.keyboard.contains(key))
        };
        let get_keys_released = || {
            self.keyboard
                .clone()
                .into_iter()
                .filter(|key| !self.window.get_keys().contains(key))
        };
        for key in get_keys_released() {
            if let Some(key) = identify_key(key) {
                keypad.release(key)?;
            }
        }
        // handle keybinds for the UI
        for key in get_keys_pressed() {
            use Key::*;
            match key {
                F1 | Comma => eprintln!(
                    "{}\n{}, cycle {}, stack {:03x?}",
                    machine.registers(),
                    machine.state(),
                    machine.cycle(),
                    machine.stack()
                ),
                F2 | Period => eprintln!("{}", machine.screen()),
                F4 | Slash => {
                    eprintln!("Debug {}.", {
                        machine.flags.debug();
                        if machine.flags.debug {
                            "enabled"
                        } else {
                            "disabled"
                        }
                    })
                }
                F5 | Backslash => {
                    machine.pause();
                    eprintln!("{}.", machine.state());
                }
                F6 | Enter => {
                    eprintln!("Step");
                    machine.singlestep();
                }
                F7 => {
                    eprintln!("Set breakpoint {:03x}.", machine.pc());
                    machine.set_break(machine.pc());
                }
                F8 => {
                    eprintln!("Unset breakpoint {:03x}.", machine.pc());
                    machine.unset_break(machine.pc());
                }
                F9 | Delete => {
                    eprintln!("Soft reset {:03x}", machine.pc());
                    machine.reset();
                }
                Escape => return Ok(false),
                key => {
                    if let Some(key) = identify_key(key) {
                        keypad.press(key)?;
                    }
                }
            }
        }
        self.keyboard = self.window.get_keys();
        Ok(true)
    }
}

/// Maps the left side of a QWERTY keyboard onto the hex keypad
pub fn identify_key(key: Key) -> Option<usize> {
    match key {
        Key::Key1 => Some(0x1),
        Key::Key2 => Some(0x2),
        Key::Key3 => Some(0x3),
        Key::Key4 => Some(0xc),
        Key::Q => Some(0x4),
        Key::W => Some(0x5),
        Key::E => Some(0x6),
        Key::R => Some(0xD),
        Key::A => Some(0x7),
        Key::S => Some(0x8),
        Key::D => Some(0x9),
        Key::F => Some(0xE),
        Key::Z => Some(0xA),
        Key::X => Some(0x0),
        Key::C => Some(0xB),
        Key::V => Some(0xF),
        _ => None,
    }
}
