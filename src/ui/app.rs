use std::mem;

use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, info};

use crate::index::{InsertOutcome, TitleIndex};

use super::forms::{MovieField, MovieForm};
use super::helpers::{centered_rect, cursor_column, key_hint, visible_window};
use super::screens::{CatalogScreen, DetailsScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows skipped by PageUp/PageDown on the catalog.
const PAGE_STEP: isize = 10;

/// High-level navigation states.
enum Screen {
    Catalog,
    Details(DetailsScreen),
}

/// Fine-grained modes layered over the current screen.
enum Mode {
    Normal,
    AddingMovie(MovieForm),
    Searching(SearchState),
}

/// State for an active title search.
#[derive(Default)]
struct SearchState {
    query: String,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state. Translates key presses into index inserts,
/// lookups and in-order walks, and renders their results.
pub struct App {
    index: TitleIndex,
    catalog: CatalogScreen,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(index: TitleIndex) -> Self {
        Self {
            index,
            catalog: CatalogScreen::default(),
            screen: Screen::Catalog,
            mode: Mode::Normal,
            status: Some(StatusMessage {
                text: "Welcome to the Movie Rental System!".to_string(),
                kind: StatusKind::Info,
            }),
        }
    }

    pub fn index(&self) -> &TitleIndex {
        &self.index
    }

    /// Apply one key press. Returns `true` once the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit),
            Mode::AddingMovie(form) => self.handle_add_movie(code, form),
            Mode::Searching(state) => self.handle_search(code, state),
        };

        exit
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        if let Screen::Details(_) = self.screen {
            if matches!(
                code,
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter | KeyCode::Char('q')
            ) {
                self.screen = Screen::Catalog;
                self.clear_status();
            }
            return Mode::Normal;
        }

        let len = self.index.len();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("quitting");
                *exit = true;
            }
            KeyCode::Up => self.catalog.move_selection(-1, len),
            KeyCode::Down => self.catalog.move_selection(1, len),
            KeyCode::PageUp => self.catalog.move_selection(-PAGE_STEP, len),
            KeyCode::PageDown => self.catalog.move_selection(PAGE_STEP, len),
            KeyCode::Home => self.catalog.select_first(),
            KeyCode::End => self.catalog.select_last(len),
            KeyCode::Enter => {
                if let Some(movie) = self.catalog.current_movie(&self.index).cloned() {
                    self.clear_status();
                    self.screen = Screen::Details(DetailsScreen { movie });
                } else {
                    self.set_status("No movies in the collection.", StatusKind::Error);
                }
            }
            KeyCode::Char('a') => {
                self.clear_status();
                return Mode::AddingMovie(MovieForm::default());
            }
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.clear_status();
                return Mode::Searching(SearchState::default());
            }
            _ => {}
        }
        Mode::Normal
    }

    fn handle_add_movie(&mut self, code: KeyCode, mut form: MovieForm) -> Mode {
        match code {
            KeyCode::Esc => return Mode::Normal,
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(ch) => {
                form.push_char(ch);
            }
            KeyCode::Enter => return self.submit_movie(form),
            _ => {}
        }
        Mode::AddingMovie(form)
    }

    /// Validate the form and hand the movie to the index. Rejections keep the
    /// form open so the user can correct it.
    fn submit_movie(&mut self, mut form: MovieForm) -> Mode {
        let movie = match form.parse_inputs() {
            Ok(movie) => movie,
            Err(err) => {
                debug!(error = %err, "rejected movie form");
                form.error = Some(err.to_string());
                return Mode::AddingMovie(form);
            }
        };

        let title = movie.title.clone();
        match self.index.insert_movie(movie) {
            InsertOutcome::Inserted => {
                info!(title = %title, total = self.index.len(), "movie added");
                self.catalog.select_title(&self.index, &title);
                self.set_status(
                    format!("Movie \"{title}\" added to the collection."),
                    StatusKind::Info,
                );
                Mode::Normal
            }
            InsertOutcome::DuplicateRejected(existing) => {
                info!(title = %title, existing = %existing, "duplicate movie rejected");
                form.error = Some(format!(
                    "Movie \"{existing}\" already exists in the collection."
                ));
                Mode::AddingMovie(form)
            }
        }
    }

    fn handle_search(&mut self, code: KeyCode, mut state: SearchState) -> Mode {
        match code {
            KeyCode::Esc => return Mode::Normal,
            KeyCode::Backspace => {
                state.query.pop();
            }
            KeyCode::Char(ch) if !ch.is_control() => state.query.push(ch),
            KeyCode::Enter => {
                self.run_search(state.query.trim());
                return Mode::Normal;
            }
            _ => {}
        }
        Mode::Searching(state)
    }

    fn run_search(&mut self, query: &str) {
        if query.is_empty() {
            self.set_status("Enter a title to search for.", StatusKind::Error);
            return;
        }

        match self.index.lookup(query).cloned() {
            Some(movie) => {
                debug!(query, title = %movie.title, "search hit");
                self.catalog.select_title(&self.index, &movie.title);
                self.set_status(format!("Found \"{}\".", movie.title), StatusKind::Info);
                self.screen = Screen::Details(DetailsScreen { movie });
            }
            None => {
                debug!(query, "search miss");
                self.set_status(format!("Movie \"{query}\" not found."), StatusKind::Error);
            }
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Catalog => self.draw_catalog(frame, content_area),
            Screen::Details(details) => self.draw_details(frame, content_area, details),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::AddingMovie(form) => self.draw_movie_form(frame, area, form),
            Mode::Searching(state) => self.draw_search_bar(frame, area, state),
            Mode::Normal => {}
        }
    }

    fn draw_catalog(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Movies in alphabetical order ({})", self.index.len()));

        if self.index.is_empty() {
            let paragraph = Paragraph::new("No movies in the collection.")
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(paragraph, area);
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let window = visible_window(
            self.catalog.selected,
            inner.height as usize,
            self.index.len(),
        );
        let items: Vec<ListItem> = self
            .index
            .iter()
            .skip(window.start)
            .take(window.len())
            .map(|movie| ListItem::new(movie.to_string()))
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        if !window.is_empty() {
            list_state.select(Some(self.catalog.selected - window.start));
        }
        frame.render_stateful_widget(list, inner, &mut list_state);
    }

    fn draw_details(&self, frame: &mut Frame, area: Rect, details: &DetailsScreen) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Details of the movie");
        let lines: Vec<Line> = details
            .movie
            .details()
            .into_iter()
            .map(Line::from)
            .collect();
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let hints: Vec<[Span<'static>; 2]> = match (&self.screen, &self.mode) {
            (_, Mode::AddingMovie(_)) => vec![
                key_hint("[Tab]", " Next field   "),
                key_hint("[Enter]", " Save   "),
                key_hint("[Esc]", " Cancel"),
            ],
            (_, Mode::Searching(_)) => vec![
                key_hint("[Enter]", " Search   "),
                key_hint("[Esc]", " Cancel"),
            ],
            (Screen::Details(_), Mode::Normal) => vec![key_hint("[Esc]", " Back")],
            (Screen::Catalog, Mode::Normal) => vec![
                key_hint("[↑↓]", " Navigate   "),
                key_hint("[Enter]", " Details   "),
                key_hint("[a]", " Add   "),
                key_hint("[/]", " Search   "),
                key_hint("[q]", " Quit"),
            ],
        };
        Line::from(hints.into_iter().flatten().collect::<Vec<_>>())
    }

    fn draw_search_bar(&self, frame: &mut Frame, area: Rect, state: &SearchState) {
        let height = 3u16.min(area.height);
        let popup_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, popup_area);

        let block = Block::default().borders(Borders::ALL).title("Search");
        let paragraph = Paragraph::new(Span::raw(format!("Title: {}", state.query)))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        let cursor_x = cursor_column(inner, "Title: ".len(), state.query.chars().count());
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn draw_movie_form(&self, frame: &mut Frame, area: Rect, form: &MovieForm) {
        let popup_area = centered_rect(70, 50, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Add Movie").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![
            form.build_line(MovieField::Title),
            form.build_line(MovieField::Genre),
            form.build_line(MovieField::Year),
            Line::from(""),
        ];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Tab to switch • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let prefix = format!("{}: ", form.active.label()).len();
        frame.set_cursor_position((
            cursor_column(inner, prefix, form.value_len(form.active)),
            inner.y + form.active.row(),
        ));
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}
