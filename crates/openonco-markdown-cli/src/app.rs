use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use openonco_markdown_engine::{ParseOptions, io, parse_document_with};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{io::Stdout, path::PathBuf};

use crate::terminal::document_lines;

const PAGE: u16 = 10;

pub struct App {
    docs_path: PathBuf,
    files: Vec<PathBuf>,
    file_list_state: ListState,
    options: ParseOptions,
    /// Rendered lines of the selected file, rebuilt only on selection change.
    current_lines: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    pub fn new(docs_path: PathBuf, options: ParseOptions) -> Result<Self> {
        let files = io::scan_documents(&docs_path)?;
        log::info!("browsing {} documents in {}", files.len(), docs_path.display());

        let mut app = Self {
            docs_path,
            files,
            file_list_state: ListState::default(),
            options,
            current_lines: Vec::new(),
            scroll: 0,
        };

        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    pub fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    pub fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    pub fn scroll_down(&mut self) {
        let max = u16::try_from(self.current_lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(PAGE).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(PAGE);
    }

    fn update_content_for_selection(&mut self) {
        self.scroll = 0;
        let Some(path) = self
            .file_list_state
            .selected()
            .and_then(|i| self.files.get(i))
        else {
            self.current_lines.clear();
            return;
        };

        self.current_lines = match io::read_file(path) {
            Ok(content) => {
                let doc = parse_document_with(&content, &self.options);
                if doc.is_empty() {
                    vec![Line::from("(empty document)")]
                } else {
                    document_lines(&doc)
                }
            }
            Err(e) => {
                log::warn!("failed to read {}: {e}", path.display());
                vec![Line::from(format!("Error reading file: {e}"))]
            }
        };
    }

    fn display_name(&self, path: &std::path::Path) -> String {
        path.strip_prefix(&self.docs_path)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::PageDown => app.scroll_down(),
                KeyCode::PageUp => app.scroll_up(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // File list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|path| ListItem::new(Line::from(app.display_name(path))))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Documents"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Preview panel
    let content_text = if app.current_lines.is_empty() {
        vec![Line::from("No documents found")]
    } else {
        app.current_lines.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Preview"))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("PgUp/PgDn: Scroll"),
    ]);

    f.render_widget(Paragraph::new(help), rows[1]);
}
