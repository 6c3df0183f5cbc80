use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::Rng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::{io, time::Duration};

use crate::core::{parse_grid_size, Action, Mode, Session, SizeRequest};
use crate::renderer::{toolbar, Button, CanvasGeometry, GridWidget, Toolbar};
use crate::shared::constants;
use crate::utils::logger;

type UiTerminal = Terminal<CrosstermBackend<io::Stderr>>;

/// Screen regions of the last drawn frame, used to route mouse events
#[derive(Copy, Clone, Debug, Default)]
struct Regions {
    toolbar: Rect,
    canvas: Rect,
}

fn split(area: Rect) -> Regions {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    Regions {
        toolbar: layout[0],
        canvas: layout[1],
    }
}

/// Text being typed into the size prompt
struct SizePrompt {
    input: String,
}

pub struct SketchApp<R> {
    session: Session<R>,
    prompt: Option<SizePrompt>,
    status: String,
    should_quit: bool,
    regions: Regions,
    /// Grid cell the pointer was last over; a hover fires only on entering a new one
    last_hovered: Option<(usize, usize)>,
}

impl<R: Rng> SketchApp<R> {
    pub fn new(session: Session<R>) -> Self {
        let status = format!("Hover to draw. Mode: {}", session.mode().label());
        Self {
            session,
            prompt: None,
            status,
            should_quit: false,
            regions: Regions::default(),
            last_hovered: None,
        }
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    fn apply(&mut self, action: Action) {
        self.session.dispatch(action);
        match action {
            Action::SetMode(mode) => self.status = format!("Mode: {}", mode.label()),
            Action::Clear => {
                self.last_hovered = None;
                self.status = "Cleared".to_string();
            }
            Action::Resize(size) => {
                self.last_hovered = None;
                self.status = format!("Grid is now {}x{}", size, size);
            }
            Action::Hover { .. } => {}
        }
    }

    fn open_prompt(&mut self) {
        self.prompt = Some(SizePrompt {
            input: self.session.settings().size.to_string(),
        });
        self.status = "Enter number of squares per side (max 100), Esc to cancel".to_string();
    }

    fn on_key(&mut self, key: KeyCode) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        match key {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('s') => self.open_prompt(),
            KeyCode::Char('c') => self.apply(Action::Clear),
            KeyCode::Char('n') => self.apply(Action::SetMode(Mode::Default)),
            KeyCode::Char('r') => self.apply(Action::SetMode(Mode::Random)),
            KeyCode::Char('d') => self.apply(Action::SetMode(Mode::Darken)),
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyCode) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };

        match key {
            KeyCode::Esc => {
                // A cancelled prompt counts as empty input
                self.prompt = None;
                self.submit_size("");
            }
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Char(c) => prompt.input.push(c),
            KeyCode::Enter => {
                let input = prompt.input.clone();
                self.prompt = None;
                self.submit_size(&input);
            }
            _ => {}
        }
    }

    fn submit_size(&mut self, input: &str) {
        match parse_grid_size(input) {
            Ok(SizeRequest::Accepted(size)) => self.apply(Action::Resize(size)),
            Ok(SizeRequest::Clamped(size)) => {
                self.apply(Action::Resize(size));
                self.status = "Maximum size is 100".to_string();
            }
            Err(err) => {
                logger::info(&format!("Rejected size input {:?}: {:?}", input, err));
                self.status = err.to_string();
            }
        }
    }

    fn on_button(&mut self, button: Button) {
        match button {
            Button::Size => self.open_prompt(),
            Button::Clear => self.apply(Action::Clear),
            Button::Mode(mode) => self.apply(Action::SetMode(mode)),
            Button::Quit => self.should_quit = true,
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) if self.prompt.is_none() => {
                let geometry = CanvasGeometry::fit(self.regions.canvas, self.session.settings().size);
                let entered = geometry.cell_at(mouse.column, mouse.row);
                if entered == self.last_hovered {
                    return;
                }
                self.last_hovered = entered;
                if let Some((row, col)) = entered {
                    self.apply(Action::Hover { row, col });
                }
            }
            MouseEventKind::Down(MouseButton::Left) if self.prompt.is_none() => {
                if let Some(button) = toolbar::hit(self.regions.toolbar, mouse.column, mouse.row) {
                    self.on_button(button);
                }
            }
            _ => {}
        }
    }

    fn on_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key(key.code),
            Event::Mouse(mouse) => self.on_mouse(mouse),
            _ => {}
        }
    }
}

pub fn run_sketch<R: Rng>(session: Session<R>) -> Result<()> {
    let mut app = SketchApp::new(session);

    let mut terminal = setup_terminal()?;
    let run_result = run_app(&mut terminal, &mut app);
    let restore_result = restore_terminal(&mut terminal);

    if let Err(err) = restore_result {
        logger::error(&format!("Failed to restore terminal: {}", err));
    }

    run_result
}

fn setup_terminal() -> Result<UiTerminal> {
    enable_raw_mode().context("failed to enable raw mode")?;

    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture, Hide)
        .context("failed to switch to alternate screen")?;

    let backend = CrosstermBackend::new(stderr);
    let terminal = Terminal::new(backend).context("failed to initialize terminal backend")?;

    Ok(terminal)
}

fn restore_terminal(terminal: &mut UiTerminal) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen,
        Show
    )
    .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;
    Ok(())
}

/// Best-effort terminal reset for paths that have no `Terminal` handle.
pub fn force_restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen, Show);
}

fn run_app<R: Rng>(terminal: &mut UiTerminal, app: &mut SketchApp<R>) -> Result<()> {
    logger::debug(&format!(
        "Sketch started: {} cells, mode {}",
        app.session().grid().len(),
        app.session().mode().label()
    ));

    loop {
        terminal.draw(|frame| draw_sketch(frame, app))?;

        if app.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(constants::TICK_MS))? {
            let event = event::read().context("failed to read terminal event")?;
            app.on_event(event);
        }
    }

    logger::debug("Sketch closed");
    Ok(())
}

fn draw_sketch<R: Rng>(frame: &mut Frame<'_>, app: &mut SketchApp<R>) {
    let regions = split(frame.size());
    app.regions = regions;

    frame.render_widget(Toolbar::new(app.session.mode()), regions.toolbar);
    frame.render_widget(GridWidget::new(app.session.grid()), regions.canvas);

    let footer_area = Rect::new(
        frame.size().x,
        frame.size().bottom().saturating_sub(1),
        frame.size().width,
        1,
    );

    match &app.prompt {
        Some(prompt) => draw_prompt(frame, regions.canvas, &prompt.input, &app.status),
        None => draw_footer(frame, footer_area, &app.status),
    }
}

fn draw_prompt(frame: &mut Frame<'_>, canvas: Rect, input: &str, status: &str) {
    let width = canvas.width.min(60);
    let area = Rect::new(
        canvas.x + (canvas.width - width) / 2,
        canvas.y + canvas.height.saturating_sub(3) / 2,
        width,
        canvas.height.min(3),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} | Grid size ", constants::APP_NAME),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    let text = Paragraph::new(format!("{}_", input))
        .block(block)
        .style(Style::default().fg(Color::White).bg(Color::Black));

    frame.render_widget(ratatui::widgets::Clear, area);
    frame.render_widget(text, area);

    let footer = Rect::new(canvas.x, canvas.bottom(), canvas.width, 1);
    draw_footer(frame, footer, status);
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect, status: &str) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{}  ", constants::HELP_LINE),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(status, Style::default().fg(Color::White)),
    ]));

    frame.render_widget(footer, area);
}
