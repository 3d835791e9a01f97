//! Desktop SDL simulator for the boilerboard event loop.
//!
//! One window plays both board roles: the keyboard is the button matrix and
//! the window surface is the panel. Presses are printed to stdout, one per
//! line.

use std::cell::RefCell;
use std::convert::Infallible;
use std::fmt;
use std::rc::Rc;

use boilerboard::{
    Button, Error, EventLoop, FrameDisplay, InputSource, IoWriter, LoopConfig, StdDelay,
    WriteReporter,
};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    sdl2::Keycode, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};

/// Portrait size of the reference panel
const DISPLAY_WIDTH: u32 = 480;
const DISPLAY_HEIGHT: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SimError {
    /// The window was closed or Escape was pressed
    WindowClosed,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::WindowClosed => write!(f, "Simulator window closed"),
        }
    }
}

impl std::error::Error for SimError {}

struct Board {
    window: Window,
    display: SimulatorDisplay<BinaryColor>,
    held: Option<(Keycode, Button)>,
}

/// Keyboard side of the shared window
struct Keyboard(Rc<RefCell<Board>>);

impl InputSource for Keyboard {
    type Button = Button;
    type Error = SimError;

    fn poll_pressed_button(&mut self) -> Result<Option<Button>, SimError> {
        let mut board = self.0.borrow_mut();
        let events = board.window.events().collect::<Vec<_>>();

        for event in events {
            match event {
                SimulatorEvent::Quit => return Err(SimError::WindowClosed),
                SimulatorEvent::KeyDown { keycode, .. } => {
                    if keycode == Keycode::Escape {
                        return Err(SimError::WindowClosed);
                    }
                    if let Some(button) = keycode_to_button(keycode) {
                        board.held = Some((keycode, button));
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => {
                    if board.held.is_some_and(|(held, _)| held == keycode) {
                        board.held = None;
                    }
                }
                _ => {}
            }
        }

        Ok(board.held.map(|(_, button)| button))
    }
}

/// Panel side of the shared window
struct Screen(Rc<RefCell<Board>>);

impl FrameDisplay for Screen {
    type Error = Infallible;

    fn fill_buffer(&mut self, color: BinaryColor) {
        self.0.borrow_mut().display.clear(color).ok();
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        let board = &mut *self.0.borrow_mut();
        board.window.update(&board.display);
        Ok(())
    }
}

fn keycode_to_button(keycode: Keycode) -> Option<Button> {
    match keycode {
        Keycode::Left | Keycode::A => Some(Button::Left),
        Keycode::Right | Keycode::D => Some(Button::Right),
        Keycode::Up | Keycode::W => Some(Button::Up),
        Keycode::Down | Keycode::S => Some(Button::Down),
        Keycode::Return | Keycode::Space => Some(Button::Confirm),
        Keycode::Backspace => Some(Button::Back),
        Keycode::PageUp | Keycode::Equals => Some(Button::VolumeUp),
        Keycode::PageDown | Keycode::Minus => Some(Button::VolumeDown),
        Keycode::P => Some(Button::Power),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let display: SimulatorDisplay<BinaryColor> =
        SimulatorDisplay::new(Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT));
    let mut window = Window::new("Boilerboard", &output_settings);
    // The window only delivers events once it has been shown
    window.update(&display);

    let board = Rc::new(RefCell::new(Board {
        window,
        display,
        held: None,
    }));

    println!("Boilerboard Simulator");
    println!("Controls:");
    println!("  Arrow Keys / WASD - Left / Right / Up / Down");
    println!("  Enter / Space     - Confirm");
    println!("  Backspace         - Back");
    println!("  PageUp / =        - Volume up");
    println!("  PageDown / -      - Volume down");
    println!("  P                 - Power");
    println!("  Escape            - Quit");

    let reporter = WriteReporter::new(IoWriter(std::io::stdout()));
    let mut event_loop = EventLoop::new(
        Keyboard(Rc::clone(&board)),
        reporter,
        StdDelay,
        LoopConfig::default(),
    )
    .with_display(Screen(board));

    match event_loop.run() {
        Ok(never) => match never {},
        Err(Error::InputSource(SimError::WindowClosed)) => Ok(()),
        Err(err) => Err(err.into()),
    }
}
