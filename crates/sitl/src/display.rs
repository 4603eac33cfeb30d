//! Text rendition of the device's small OLED screen.
//!
//! The physical display fits 16 characters per row. Three screens exist:
//! navigating (name on top, arrow in the middle, distance at the bottom),
//! arrived, and waiting for a fix.

use std::io::{self, Write};

use poi_compass_core::navigation::{CompassOctant, NavigationOutput};
use poi_compass_core::traits::RenderSink;

/// Characters per display row.
pub const DISPLAY_WIDTH: usize = 16;

/// Rows per frame.
pub const FRAME_ROWS: usize = 3;

/// One screenful of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    rows: [String; FRAME_ROWS],
}

impl Frame {
    fn new(top: String, middle: String, bottom: String) -> Self {
        Self {
            rows: [top, middle, bottom],
        }
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> &[String; FRAME_ROWS] {
        &self.rows
    }
}

/// Truncate to the display width, counting characters rather than bytes.
pub fn truncate_name(name: &str) -> String {
    name.chars().take(DISPLAY_WIDTH).collect()
}

/// Arrow glyph pointing toward `octant`.
pub fn arrow(octant: CompassOctant) -> char {
    match octant {
        CompassOctant::N => '↑',
        CompassOctant::NE => '↗',
        CompassOctant::E => '→',
        CompassOctant::SE => '↘',
        CompassOctant::S => '↓',
        CompassOctant::SW => '↙',
        CompassOctant::W => '←',
        CompassOctant::NW => '↖',
    }
}

/// Center `text` within the display width.
fn centered(text: &str) -> String {
    let len = text.chars().count();
    let pad = DISPLAY_WIDTH.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Lay out one navigation output as a frame.
pub fn compose(output: &NavigationOutput) -> Frame {
    match output {
        NavigationOutput::AwaitingFix => {
            Frame::new(String::new(), centered("Waiting for GPS"), String::new())
        }
        NavigationOutput::Arrived { target_name } => Frame::new(
            centered("ARRIVED!"),
            String::new(),
            truncate_name(target_name),
        ),
        NavigationOutput::Navigating {
            target_name,
            distance_m,
            octant,
        } => Frame::new(
            truncate_name(target_name),
            centered(&arrow(*octant).to_string()),
            // Whole meters, truncated toward zero
            format!("{}m", *distance_m as u64),
        ),
    }
}

/// Startup screen.
pub fn splash() -> Frame {
    Frame::new(
        centered("INTRODUCING"),
        centered("POI COMPASS"),
        String::new(),
    )
}

/// Render sink that writes frames as text.
///
/// Frames are only written when they differ from the previous one, so a
/// stationary device does not flood the terminal at the tick rate.
pub struct TextDisplay<W: Write> {
    out: W,
    last: Option<Frame>,
    frames_written: u64,
}

impl TextDisplay<io::Stdout> {
    /// Display writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextDisplay<W> {
    /// Create a display writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            last: None,
            frames_written: 0,
        }
    }

    /// Show the startup screen.
    pub fn show_splash(&mut self) -> io::Result<()> {
        let frame = splash();
        self.write_frame(&frame)?;
        self.last = Some(frame);
        Ok(())
    }

    fn write_frame(&mut self, frame: &Frame) -> io::Result<()> {
        let border = "-".repeat(DISPLAY_WIDTH + 2);
        writeln!(self.out, "+{}+", border)?;
        for row in frame.rows() {
            let len = row.chars().count();
            let fill = " ".repeat(DISPLAY_WIDTH.saturating_sub(len));
            writeln!(self.out, "| {}{} |", row, fill)?;
        }
        writeln!(self.out, "+{}+", border)?;
        self.out.flush()?;
        self.frames_written += 1;
        Ok(())
    }

    /// Most recently shown frame.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.last.as_ref()
    }

    /// Number of frames actually written.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Consume the display and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for TextDisplay<W> {
    fn render(&mut self, output: &NavigationOutput) {
        let frame = compose(output);
        if self.last.as_ref() == Some(&frame) {
            return;
        }

        // A failed frame is not remembered, so the next tick redraws it
        match self.write_frame(&frame) {
            Ok(()) => self.last = Some(frame),
            Err(e) => log::warn!("Display write failed: {}", e),
        }
    }
}

impl<W: Write> std::fmt::Debug for TextDisplay<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextDisplay")
            .field("last", &self.last)
            .field("frames_written", &self.frames_written)
            .finish()
    }
}
