use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use crate::keymap::keymap;
use emu8_core::Chip8;
use emu8_display::Display;

/// Everything the run loop needs from the command line
pub struct Config {
    pub rom: PathBuf,
    /// Size multiplier for each Chip-8 pixel
    pub scale: u32,
    /// Minimum time between two cycles
    pub cycle_time: Duration,
}

pub fn run(config: Config) -> Result<(), Box<dyn Error>> {
    let mut chip8: Chip8 = Chip8::new();

    // Load ROM
    let file = File::open(&config.rom)?;
    chip8.load_rom(&mut BufReader::new(file))?;
    info!("loaded {}", config.rom.display());

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init()?;
    let mut display: Display = Display::new(&sdl, config.scale)?;
    let mut events = sdl.event_pump()?;
    display.render(chip8.frame())?;

    let mut last_cycle: Instant = Instant::now();

    // Whether or not the cycle time should be respected
    let mut fast_forward: bool = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Escape, _) => break 'event,
                    (Keycode::Space, _) => fast_forward = true,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        chip8.step()?;

        // Render if the frame changed
        if let Some(frame) = chip8.take_frame() {
            display.render(frame)?;
        }

        // Handle timing
        let elapsed_cycle_time = last_cycle.elapsed();
        if !fast_forward && config.cycle_time > elapsed_cycle_time {
            std::thread::sleep(config.cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    info!("quit");
    Ok(())
}
