use log::debug;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

use emu8_core::{FrameBuffer, DISPLAY_HEIGHT, DISPLAY_WIDTH, FRAME_PITCH};

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// The frame buffer stores each pixel as a 32-bit value that is either all ones or all zeros,
/// so it can be uploaded as-is to an RGBA8888 texture: lit pixels come out white, dark ones
/// transparent black.
pub struct Display {
    canvas: WindowCanvas,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, String> {
        let (width, height) = (DISPLAY_WIDTH as u32 * scale, DISPLAY_HEIGHT as u32 * scale);
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window("Emu-8", width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| e.to_string())?;

        debug!("opened {}x{} window", width, height);
        Ok(Display { canvas })
    }

    /// Flattens a Chip-8 FrameBuffer into the raw bytes of an RGBA8888 texture.
    ///
    /// SDL reads packed pixel formats in native byte order, so each pixel is written with
    /// `to_ne_bytes`. Rows are `FRAME_PITCH` bytes long.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    fn frame_to_sdl_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame.iter().flat_map(|pixel| pixel.to_ne_bytes()).collect()
    }

    /// Uploads the Chip-8 FrameBuffer as an SDL2 RGBA8888 texture and presents it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGBA8888,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        texture
            .update(None, &Display::frame_to_sdl_texture(frame), FRAME_PITCH)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
