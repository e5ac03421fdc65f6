//! Interactive TUI for the BrandForge wizard
//!
//! A landing screen leads into the five-step wizard shell. All wizard
//! behaviour lives in [`WizardSession`]; this module only owns the terminal,
//! feeds the session keys and clock ticks, and draws its state.
//!
//! # Layout
//!
//! - Logo above a fixed-width box titled `Step n/5 · Title`
//! - Step strip with completion marks and a progress gauge
//! - Step content, inline validation message, help bar below the box
//! - Quit confirmation and premium tier overlays
//!
//! The terminal is restored on normal exit and from a panic hook.

use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Terminal,
};
use tracing::info;

use super::args::Cli;
use super::screens::IdentityField;
use super::session::{SessionEvent, WizardSession};
use crate::report::{hex_to_rgb, ExportTier};
use crate::studio::{GenerationDelays, MockStudio};
use crate::wizard::steps::{index, vision_length};
use crate::wizard::{BrandRecord, MIN_VISION_CHARS};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

// ============================================================================
// Core Result Types
// ============================================================================

/// How the interactive run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardResult {
    /// The user finished the brand kit step
    Completed(Box<BrandRecord>),
    /// The user quit from the landing screen or the quit dialog
    Quit,
}

/// Landing page or an active wizard visit
enum Screen {
    Landing,
    Wizard(Box<WizardSession>),
}

// ============================================================================
// Terminal Setup/Teardown
// ============================================================================

/// Setup terminal for TUI rendering with panic-safe cleanup
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    // Install panic hook for clean terminal restoration
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        teardown_terminal();
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

// ============================================================================
// Entry Point
// ============================================================================

/// Run the interactive wizard until the user finishes or quits
pub fn run_wizard(cli: &Cli) -> Result<WizardResult> {
    let vision = cli.initial_vision()?;
    let delays = cli.delays();

    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, vision.as_deref(), delays);
    teardown_terminal();

    result
}

fn new_session(vision: Option<&str>, delays: GenerationDelays) -> WizardSession {
    let session = WizardSession::new(Box::new(MockStudio), delays);
    match vision {
        Some(v) => session.with_vision(v),
        None => session,
    }
}

// ============================================================================
// Event Loop
// ============================================================================

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    vision: Option<&str>,
    delays: GenerationDelays,
) -> Result<WizardResult> {
    let started = Instant::now();
    // Skip the landing page when a vision was given on the command line
    let mut screen = match vision {
        Some(_) => Screen::Wizard(Box::new(new_session(vision, delays))),
        None => Screen::Landing,
    };

    loop {
        let frame = (started.elapsed().as_millis() / POLL_INTERVAL.as_millis()) as usize;
        terminal.draw(|f| match &screen {
            Screen::Landing => render_landing(f),
            Screen::Wizard(session) => render_wizard(f, session, frame),
        })?;

        let now = Instant::now();
        if let Screen::Wizard(session) = &mut screen {
            session.tick(now);
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let next = match &mut screen {
            Screen::Landing => match key.code {
                KeyCode::Enter => {
                    info!("wizard started");
                    Some(Screen::Wizard(Box::new(new_session(None, delays))))
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(WizardResult::Quit);
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(WizardResult::Quit);
                }
                _ => None,
            },
            Screen::Wizard(session) => match session.handle_key(key, Instant::now()) {
                SessionEvent::Continue => None,
                SessionEvent::Exit => {
                    info!("left wizard from first step");
                    Some(Screen::Landing)
                }
                SessionEvent::Finished(record) => return Ok(WizardResult::Completed(record)),
                SessionEvent::Quit => return Ok(WizardResult::Quit),
            },
        };
        if let Some(next) = next {
            screen = next;
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Create a centered rectangle with fixed dimensions
fn centered_fixed_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Terminal color for a `#RRGGBB` value
fn hex_color(hex: &str) -> Color {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::Gray,
    }
}

/// Get semantic color for a step
fn step_color(step_index: usize) -> Color {
    match step_index {
        index::VISION => Color::Cyan,
        index::IDENTITY => Color::Magenta,
        index::PALETTE => Color::Yellow,
        index::LOGO => Color::Blue,
        _ => Color::Green,
    }
}

fn selected_style(color: Color) -> Style {
    Style::default().fg(Color::Black).bg(color).bold()
}

fn key_hint(spans: &mut Vec<Span<'static>>, key: &'static str, action: &'static str) {
    spans.push(Span::styled(key, Style::default().fg(Color::Cyan)));
    spans.push(Span::styled(action, Style::default().fg(Color::DarkGray)));
}

// ============================================================================
// Main Rendering Functions
// ============================================================================

/// Smallest terminal the shell box fits in
const MIN_WIDTH: u16 = 30;
const MIN_HEIGHT: u16 = 8;

fn too_small(area: Rect) -> bool {
    area.width < MIN_WIDTH || area.height < MIN_HEIGHT
}

fn render_too_small(f: &mut Frame) {
    let area = f.area();
    f.render_widget(Clear, area);
    let text = format!(
        "Terminal too small ({}x{}). Resize to at least {}x{}.",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );
    f.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(Color::Yellow)))
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Logo, box and hint row, centered as one unit and kept inside `area`.
/// The logo is dropped when it would squeeze the box below its ideal height.
fn shell_areas(area: Rect, logo_height: u16, ideal_box_height: u16) -> (Rect, Rect, Rect) {
    let hint_height = 1u16.min(area.height);
    let width = 72u16.min(area.width);
    let logo_height = if area.height >= logo_height + ideal_box_height + hint_height {
        logo_height
    } else {
        0
    };
    let box_height = ideal_box_height.min(area.height - logo_height - hint_height);

    let total_height = logo_height + box_height + hint_height;
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - total_height) / 2;

    let logo_area = Rect::new(x, y, width, logo_height);
    let box_area = Rect::new(x, logo_area.bottom(), width, box_height);
    let hint_area = Rect::new(x, box_area.bottom(), width, hint_height);
    (logo_area, box_area, hint_area)
}

fn render_landing(f: &mut Frame) {
    if too_small(f.area()) {
        render_too_small(f);
        return;
    }
    let (logo_area, box_area, hint_area) = shell_areas(f.area(), 9, 12);
    render_logo(f, logo_area);
    f.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" Welcome ")
        .title_style(Style::default().fg(Color::Magenta).bold())
        .title_alignment(Alignment::Center);
    let inner = block.inner(box_area);
    f.render_widget(block, box_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Build your brand in minutes",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Describe your startup and get a name, tagline, color palette",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "and logo concept, ready to take to launch.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("◆ ", Style::default().fg(Color::Magenta)),
            Span::raw("Vision  "),
            Span::styled("◆ ", Style::default().fg(Color::Magenta)),
            Span::raw("Identity  "),
            Span::styled("◆ ", Style::default().fg(Color::Magenta)),
            Span::raw("Palette  "),
            Span::styled("◆ ", Style::default().fg(Color::Magenta)),
            Span::raw("Logo  "),
            Span::styled("◆ ", Style::default().fg(Color::Magenta)),
            Span::raw("Kit"),
        ]),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );

    let mut spans = vec![];
    key_hint(&mut spans, "  Enter", " start building  ");
    key_hint(&mut spans, "Q/Esc", " quit");
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        hint_area,
    );
}

/// Render the complete wizard UI with persistent shell layout
fn render_wizard(f: &mut Frame, session: &WizardSession, frame: usize) {
    if too_small(f.area()) {
        render_too_small(f);
        return;
    }
    let (logo_area, box_area, hint_area) = shell_areas(f.area(), 9, 24);
    render_logo(f, logo_area);
    f.render_widget(Clear, box_area);

    let controller = session.controller();
    let current = controller.current_index();
    let color = step_color(current);
    let title_text = format!(
        " Step {}/{} \u{00b7} {} ",
        current + 1,
        controller.step_count(),
        controller.current_step().title
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title_text)
        .title_style(Style::default().fg(color).bold())
        .title_alignment(Alignment::Center);
    let inner = block.inner(box_area);
    f.render_widget(block, box_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Step strip
            Constraint::Length(1), // Progress gauge
            Constraint::Length(1), // Description
            Constraint::Min(1),    // Step content
            Constraint::Length(1), // Error line
        ])
        .split(inner);

    render_step_strip(f, chunks[0], session);
    render_progress(f, chunks[1], session, color);
    f.render_widget(
        Paragraph::new(Span::styled(
            format!("  {}", controller.current_step().description),
            Style::default().fg(Color::DarkGray),
        )),
        chunks[2],
    );
    render_step(f, chunks[3], session, frame);

    if let Some(error) = session.error() {
        f.render_widget(
            Paragraph::new(Span::styled(
                format!("  ✗ {}", error),
                Style::default().fg(Color::Red).bold(),
            )),
            chunks[4],
        );
    }

    render_help_bar(f, hint_area, session);

    if session.screens().kit.show_upgrade {
        render_upgrade_overlay(f);
    }
    if session.show_quit_confirm() {
        render_quit_confirm_overlay(f);
    }
}

/// Render logo
fn render_logo(f: &mut Frame, area: Rect) {
    let style = Style::default().fg(Color::Magenta).bold();
    let logo_lines = vec![
        Line::from(Span::styled("██████╗ ██████╗  █████╗ ███╗   ██╗██████╗ ", style)),
        Line::from(Span::styled("██╔══██╗██╔══██╗██╔══██╗████╗  ██║██╔══██╗", style)),
        Line::from(Span::styled("██████╔╝██████╔╝███████║██╔██╗ ██║██║  ██║", style)),
        Line::from(Span::styled("██╔══██╗██╔══██╗██╔══██║██║╚██╗██║██║  ██║", style)),
        Line::from(Span::styled("██████╔╝██║  ██║██║  ██║██║ ╚████║██████╔╝", style)),
        Line::from(Span::styled("╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═══╝╚═════╝ ", style)),
        Line::from(""),
        Line::from(vec![
            Span::styled("✦ ", Style::default().fg(Color::Cyan).bold()),
            Span::styled(
                "BrandForge: from vision to brand kit",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let logo_paragraph = Paragraph::new(logo_lines).alignment(Alignment::Center);
    f.render_widget(logo_paragraph, area);
}

fn render_step_strip(f: &mut Frame, area: Rect, session: &WizardSession) {
    let controller = session.controller();
    let current = controller.current_index();
    let mut spans = vec![Span::raw(" ")];

    for (i, step) in controller.steps().iter().enumerate() {
        let (mark, style) = if i < current {
            ("✓", Style::default().fg(Color::Green))
        } else if i == current {
            ("●", Style::default().fg(step_color(i)).bold())
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(format!(" {} {} ", mark, step.title), style));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_progress(f: &mut Frame, area: Rect, session: &WizardSession, color: Color) {
    let fraction = session.controller().progress_fraction();
    let area = Rect::new(
        area.x + 2,
        area.y,
        area.width.saturating_sub(4),
        area.height,
    );
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
        .ratio(fraction.clamp(0.0, 1.0))
        .label(format!("{:.0}% complete", fraction * 100.0));
    f.render_widget(gauge, area);
}

/// Render the current step inside the shell box
fn render_step(f: &mut Frame, area: Rect, session: &WizardSession, frame: usize) {
    match session.controller().current_index() {
        index::VISION => render_vision(f, area, session),
        index::IDENTITY => render_identity(f, area, session, frame),
        index::PALETTE => render_palette(f, area, session),
        index::LOGO => render_logo_step(f, area, session, frame),
        _ => render_kit(f, area, session, frame),
    }
}

/// Render help bar with context-appropriate shortcuts
fn render_help_bar(f: &mut Frame, area: Rect, session: &WizardSession) {
    let screens = session.screens();
    let mut spans = vec![];

    match session.controller().current_index() {
        index::VISION => {
            key_hint(&mut spans, "  Type", " vision  ");
            key_hint(&mut spans, "Tab", " example  ");
            key_hint(&mut spans, "Enter", " next  ");
            key_hint(&mut spans, "Bksp", " delete/back  ");
        }
        index::IDENTITY if screens.identity.editor.is_some() => {
            key_hint(&mut spans, "  Type", " edit  ");
            key_hint(&mut spans, "↑↓", " field  ");
            key_hint(&mut spans, "Tab/Enter", " done  ");
        }
        index::IDENTITY => {
            key_hint(&mut spans, "  ↑↓", " select  ");
            key_hint(&mut spans, "R", " regenerate  ");
            key_hint(&mut spans, "Tab", " customize  ");
            key_hint(&mut spans, "Enter", " next  ");
            key_hint(&mut spans, "Bksp", " back  ");
        }
        index::PALETTE => {
            key_hint(&mut spans, "  ↑↓", " select  ");
            key_hint(&mut spans, "R", " regenerate  ");
            key_hint(&mut spans, "Enter", " next  ");
            key_hint(&mut spans, "Bksp", " back  ");
        }
        index::LOGO if screens.logo.prompt_open => {
            key_hint(&mut spans, "  Type", " prompt  ");
            key_hint(&mut spans, "Enter", " generate  ");
            key_hint(&mut spans, "Tab", " close  ");
        }
        index::LOGO => {
            key_hint(&mut spans, "  ↑↓", " select  ");
            key_hint(&mut spans, "Space", " like  ");
            key_hint(&mut spans, "R", " regenerate  ");
            key_hint(&mut spans, "Tab", " custom  ");
            key_hint(&mut spans, "Enter", " next  ");
        }
        _ => {
            key_hint(&mut spans, "  E", " export  ");
            key_hint(&mut spans, "U", " upgrade  ");
            key_hint(&mut spans, "N", " new brand  ");
            key_hint(&mut spans, "Enter", " finish  ");
            key_hint(&mut spans, "Bksp", " back  ");
        }
    }

    key_hint(&mut spans, "Esc", " quit");

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Render quit confirmation overlay
fn render_quit_confirm_overlay(f: &mut Frame) {
    let popup = centered_fixed_rect(40, 8, f.area());
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Quit BrandForge? ")
        .title_style(Style::default().fg(Color::Red).bold())
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Your brand will not be saved.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("      ", Style::default()),
            Span::styled("Y", Style::default().fg(Color::Cyan)),
            Span::styled(" yes  ", Style::default().fg(Color::DarkGray)),
            Span::styled("N", Style::default().fg(Color::Cyan)),
            Span::styled(" no", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    f.render_widget(Paragraph::new(content), inner);
}

fn render_upgrade_overlay(f: &mut Frame) {
    let tier = ExportTier::Premium;
    let popup = centered_fixed_rect(50, tier.includes().len() as u16 + 7, f.area());
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Premium Brand Kit ")
        .title_style(Style::default().fg(Color::Yellow).bold())
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut content = vec![Line::from("")];
    for (item, _) in tier.includes() {
        content.push(Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(Color::Green)),
            Span::styled(*item, Style::default().fg(Color::White)),
        ]));
    }
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "  Payments are not available in this build.",
        Style::default().fg(Color::DarkGray),
    )));
    content.push(Line::from(vec![
        Span::styled("  Enter/M", Style::default().fg(Color::Cyan)),
        Span::styled(" maybe later", Style::default().fg(Color::DarkGray)),
    ]));

    f.render_widget(Paragraph::new(content), inner);
}

/// Spinner line for a step waiting on generation
fn render_generating(f: &mut Frame, area: Rect, session: &WizardSession, frame: usize) {
    let Some(task) = session.active_job() else {
        return;
    };
    let remaining = task.remaining(Instant::now());
    let line = Line::from(vec![
        Span::styled(
            format!("  {} ", SPINNER[frame % SPINNER.len()]),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(
            format!("{}...", task.payload().label()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("  {:.1}s", remaining.as_secs_f64()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

// ============================================================================
// Step Renderers
// ============================================================================

fn render_vision(f: &mut Frame, area: Rect, session: &WizardSession) {
    let data = session.data();
    let color = step_color(index::VISION);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Your vision ")
        .title_style(Style::default().fg(Color::DarkGray));

    let text = if data.vision.is_empty() {
        Line::from(vec![
            Span::styled(
                "Describe the problem you solve and who you solve it for",
                Style::default().fg(Color::DarkGray).italic(),
            ),
            Span::styled("\u{258c}", Style::default().fg(color)),
        ])
    } else {
        Line::from(vec![
            Span::styled(data.vision.clone(), Style::default().fg(Color::White)),
            Span::styled("\u{258c}", Style::default().fg(color)),
        ])
    };
    f.render_widget(
        Paragraph::new(text)
            .block(input_block)
            .wrap(Wrap { trim: false }),
        chunks[0],
    );

    let len = vision_length(data);
    let status = if len > MIN_VISION_CHARS {
        Span::styled(
            "  ✓ Ready to generate",
            Style::default().fg(Color::Green).bold(),
        )
    } else {
        Span::styled(
            format!("  {} more characters needed", MIN_VISION_CHARS + 1 - len),
            Style::default().fg(Color::Yellow),
        )
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("  {} characters", len),
                Style::default().fg(Color::DarkGray),
            ),
            status,
        ])),
        chunks[1],
    );
}

fn render_identity(f: &mut Frame, area: Rect, session: &WizardSession, frame: usize) {
    let screen = &session.screens().identity;
    let color = step_color(index::IDENTITY);

    if screen.set.is_none() || session.is_generating() {
        render_generating(f, area, session, frame);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(5)])
        .split(area);

    let items: Vec<ListItem> = screen
        .suggestions()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let selected = i == screen.selected;
            let head = if selected {
                selected_style(color)
            } else {
                Style::default().fg(Color::White).bold()
            };
            ListItem::new(vec![
                Line::from(Span::styled(format!("  {}  \"{}\"", s.name, s.tagline), head)),
                Line::from(Span::styled(
                    format!("    {} · {}", s.tone, s.reasoning),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(screen.selected));
    f.render_stateful_widget(List::new(items), chunks[0], &mut list_state);

    // Custom editor / current values
    let data = session.data();
    let fields = [IdentityField::Name, IdentityField::Tagline, IdentityField::Tone];
    let mut lines = vec![];
    for field in fields {
        let active = screen.editor == Some(field);
        let label_style = if active {
            Style::default().fg(color).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut spans = vec![
            Span::styled(format!("  {:<11}", field.label()), label_style),
            Span::styled(field.value(data).to_string(), Style::default().fg(Color::White)),
        ];
        if active {
            spans.push(Span::styled("\u{258c}", Style::default().fg(color)));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        format!("  Industry   {}", data.industry),
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(if screen.editor.is_some() {
            " Customize "
        } else {
            " Selected "
        });
    f.render_widget(Paragraph::new(lines).block(block), chunks[1]);
}

fn render_palette(f: &mut Frame, area: Rect, session: &WizardSession) {
    let screen = &session.screens().palette;
    let color = step_color(index::PALETTE);

    let items: Vec<ListItem> = screen
        .schemes
        .iter()
        .enumerate()
        .map(|(i, scheme)| {
            let head = if i == screen.selected {
                selected_style(color)
            } else {
                Style::default().fg(Color::White).bold()
            };
            let mut swatches = vec![Span::raw("    ")];
            for (_, hex) in scheme.colors.labeled() {
                swatches.push(Span::styled("████", Style::default().fg(hex_color(hex))));
                swatches.push(Span::styled(
                    format!(" {}  ", hex),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("  {} · {}", scheme.name, scheme.mood),
                    head,
                )),
                Line::from(Span::styled(
                    format!("    {}", scheme.description),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(swatches),
                Line::from(""),
            ])
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(screen.selected));
    f.render_stateful_widget(List::new(items), area, &mut list_state);
}

fn render_logo_step(f: &mut Frame, area: Rect, session: &WizardSession, frame: usize) {
    let screen = &session.screens().logo;
    let color = step_color(index::LOGO);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    if screen.options.is_empty() {
        render_generating(f, chunks[0], session, frame);
    } else {
        let items: Vec<ListItem> = screen
            .options
            .iter()
            .enumerate()
            .map(|(i, logo)| {
                let head = if i == screen.selected {
                    selected_style(color)
                } else {
                    Style::default().fg(Color::White).bold()
                };
                let heart = if logo.liked { " ♥" } else { "" };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!("  {}", logo.style), head),
                        Span::styled(heart, Style::default().fg(Color::Red)),
                    ]),
                    Line::from(Span::styled(
                        format!("    {}", logo.description),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(screen.selected));
        f.render_stateful_widget(List::new(items), chunks[0], &mut list_state);
    }

    // Generation status for a custom logo while the list stays visible
    if !screen.options.is_empty() && session.is_generating() {
        render_generating(f, chunks[1], session, frame);
    } else if let Some(notice) = &screen.notice {
        f.render_widget(
            Paragraph::new(Span::styled(
                format!("  {}", notice),
                Style::default().fg(Color::Yellow),
            )),
            chunks[1],
        );
    } else if let Some(logo) = screen.selected_option() {
        f.render_widget(
            Paragraph::new(Span::styled(
                format!("  {}", logo.url),
                Style::default().fg(Color::DarkGray),
            )),
            chunks[1],
        );
    }

    let prompt_color = if screen.prompt_open {
        color
    } else {
        Color::DarkGray
    };
    let mut prompt = vec![Span::styled(
        screen.prompt.clone(),
        Style::default().fg(Color::White),
    )];
    if screen.prompt_open {
        prompt.push(Span::styled("\u{258c}", Style::default().fg(color)));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(prompt_color))
        .title(" Custom logo prompt ")
        .title_style(Style::default().fg(prompt_color));
    f.render_widget(Paragraph::new(Line::from(prompt)).block(block), chunks[2]);
}

fn render_kit(f: &mut Frame, area: Rect, session: &WizardSession, frame: usize) {
    let data = session.data();
    let screen = &session.screens().kit;

    let mut lines = vec![
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(
                data.name.clone(),
                Style::default().fg(hex_color(&data.colors.primary)).bold(),
            ),
            Span::styled(
                format!("  \"{}\"", data.tagline),
                Style::default().fg(Color::White).italic(),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {} · {}", data.tone, data.industry),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let mut swatches = vec![Span::raw("  ")];
    for (label, hex) in data.colors.labeled() {
        swatches.push(Span::styled("██", Style::default().fg(hex_color(hex))));
        swatches.push(Span::styled(
            format!(" {} {}  ", label, hex),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(swatches));
    lines.push(Line::from(vec![
        Span::styled("  Fonts  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} / {}", data.fonts.primary, data.fonts.secondary),
            Style::default().fg(Color::White),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Logo   ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            data.logo_url.clone().unwrap_or_else(|| "none".to_string()),
            Style::default().fg(Color::White),
        ),
    ]));
    lines.push(Line::from(""));

    let tier = ExportTier::Basic;
    lines.push(Line::from(Span::styled(
        format!("  {} export ({})", tier.label(), tier.format().to_uppercase()),
        Style::default().fg(Color::Green).bold(),
    )));
    for (item, included) in tier.includes() {
        let (mark, style) = if *included {
            ("✓", Style::default().fg(Color::Green))
        } else {
            ("✗", Style::default().fg(Color::DarkGray))
        };
        lines.push(Line::from(vec![
            Span::styled(format!("    {} ", mark), style),
            Span::styled(*item, style),
        ]));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    f.render_widget(Paragraph::new(lines), chunks[0]);

    if session.is_generating() {
        render_generating(f, chunks[1], session, frame);
    } else if let Some(status) = &screen.status {
        f.render_widget(
            Paragraph::new(Span::styled(
                format!("  ✓ {}", status),
                Style::default().fg(Color::Green).bold(),
            )),
            chunks[1],
        );
    }
}
