//! Terminal frontend: input mapping, render loop, and presentation.

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, MouseEvent,
        MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tracing::warn;

use meshview_core::{
    project_to_screen, ControlEvent, DisplayMode, Mesh, Projection, RenderConfig, Transform,
    ViewState,
};

pub mod canvas;

pub use canvas::Canvas;

/// Map a key press to a control event.
pub fn map_key(code: KeyCode) -> Option<ControlEvent> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(ControlEvent::Quit),
        KeyCode::Up | KeyCode::Char('w') => Some(ControlEvent::RotateUp),
        KeyCode::Down | KeyCode::Char('s') => Some(ControlEvent::RotateDown),
        KeyCode::Left | KeyCode::Char('a') => Some(ControlEvent::RotateLeft),
        KeyCode::Right | KeyCode::Char('d') => Some(ControlEvent::RotateRight),
        KeyCode::Char('z') => Some(ControlEvent::RollPositive),
        KeyCode::Char('x') => Some(ControlEvent::RollNegative),
        _ => None,
    }
}

/// Map a mouse event to a control event. Only the wheel is interpreted.
pub fn map_mouse(kind: MouseEventKind) -> Option<ControlEvent> {
    match kind {
        MouseEventKind::ScrollUp => Some(ControlEvent::ScrollUp),
        MouseEventKind::ScrollDown => Some(ControlEvent::ScrollDown),
        _ => None,
    }
}

/// Main application struct for terminal mesh viewing.
pub struct TerminalApp {
    mesh: Mesh,
    view: ViewState,
    projection: Projection,
    mode: DisplayMode,
    canvas: Canvas,
    target_fps: u32,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh, config: &RenderConfig) -> io::Result<Self> {
        // The canvas tracks the live terminal; the configured dimensions
        // are the fallback when the size cannot be queried.
        let (width, height) =
            terminal::size().unwrap_or((config.width as u16, config.height as u16));

        Ok(Self {
            mesh,
            view: ViewState::new(),
            projection: Projection::default(),
            mode: config.display_mode(),
            canvas: Canvas::new(width as usize, height as usize),
            target_fps: config.target_fps,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    /// Run the interactive loop, holding the terminal for its duration.
    ///
    /// Raw mode, the alternate screen, and mouse capture are acquired here
    /// and released on every exit path, including an error out of the loop
    /// body.
    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        let result = self.main_loop();

        // Cleanup
        execute!(
            stdout(),
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;
        terminal::disable_raw_mode()?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / u64::from(self.target_fps.max(1)));

        while self.running {
            let frame_start = Instant::now();

            self.drain_input()?;
            self.render_frame()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    /// Apply every pending event, in delivery order, without blocking.
    fn drain_input(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(KeyEvent { code, .. }) => {
                    if let Some(control) = map_key(code) {
                        self.apply(control);
                    }
                }
                Event::Mouse(MouseEvent { kind, .. }) => {
                    if let Some(control) = map_mouse(kind) {
                        self.apply(control);
                    }
                }
                Event::Resize(width, height) => {
                    self.canvas.resize(width as usize, height as usize);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn apply(&mut self, control: ControlEvent) {
        if control == ControlEvent::Quit {
            self.running = false;
        } else {
            self.view.apply(control);
        }
    }

    fn render_frame(&mut self) -> io::Result<()> {
        self.canvas.clear();

        // Rebuilt every frame so the matrix always reflects current state.
        let matrix = Transform::composed(&self.projection.matrix(), &self.view);
        let (width, height) = (self.canvas.width() as u32, self.canvas.height() as u32);

        match &self.mode {
            DisplayMode::Points => {
                for vertex in self.mesh.vertices() {
                    if let Some((x, y)) = project_to_screen(&matrix, vertex, width, height) {
                        self.canvas.plot(x, y);
                    }
                }
            }
            DisplayMode::Wireframe => {
                let vertices = self.mesh.vertices();
                for face in self.mesh.faces() {
                    let a = project_to_screen(&matrix, &vertices[face[0]], width, height);
                    let b = project_to_screen(&matrix, &vertices[face[1]], width, height);
                    let c = project_to_screen(&matrix, &vertices[face[2]], width, height);
                    // A face with a degenerate vertex is skipped whole.
                    if let (Some(a), Some(b), Some(c)) = (a, b, c) {
                        self.canvas.triangle(a, b, c);
                    }
                }
            }
            DisplayMode::Unsupported(mode) => {
                warn!(%mode, "unsupported display mode, drawing nothing; use points or wireframe");
            }
        }

        let mut stdout = stdout();
        self.canvas.draw(&mut stdout)?;
        self.draw_overlay(&mut stdout)?;
        stdout.flush()?;
        Ok(())
    }

    fn draw_overlay<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        queue!(
            writer,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "meshview | FPS: {:.1} | WASD/Arrows=Rotate Z/X=Roll Wheel=Zoom Q=Quit",
                self.fps
            ))
        )?;

        let zoom_row = self.canvas.height().saturating_sub(2) as u16;
        queue!(
            writer,
            cursor::MoveTo(1, zoom_row),
            SetForegroundColor(Color::Red),
            Print(format!("Zoom: {:.3}", 100.0 - self.view.zoom)),
            ResetColor
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key(KeyCode::Up), Some(ControlEvent::RotateUp));
        assert_eq!(map_key(KeyCode::Char('w')), Some(ControlEvent::RotateUp));
        assert_eq!(map_key(KeyCode::Down), Some(ControlEvent::RotateDown));
        assert_eq!(map_key(KeyCode::Left), Some(ControlEvent::RotateLeft));
        assert_eq!(map_key(KeyCode::Right), Some(ControlEvent::RotateRight));
        assert_eq!(map_key(KeyCode::Char('z')), Some(ControlEvent::RollPositive));
        assert_eq!(map_key(KeyCode::Char('x')), Some(ControlEvent::RollNegative));
        assert_eq!(map_key(KeyCode::Char('q')), Some(ControlEvent::Quit));
        assert_eq!(map_key(KeyCode::Esc), Some(ControlEvent::Quit));
        assert_eq!(map_key(KeyCode::Enter), None);
    }

    #[test]
    fn test_mouse_mapping() {
        assert_eq!(map_mouse(MouseEventKind::ScrollUp), Some(ControlEvent::ScrollUp));
        assert_eq!(map_mouse(MouseEventKind::ScrollDown), Some(ControlEvent::ScrollDown));
        assert_eq!(
            map_mouse(MouseEventKind::Down(event::MouseButton::Left)),
            None
        );
    }
}
