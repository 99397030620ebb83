//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These render whole frames for the main application states and check the
//! visible text rather than business logic.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use podcast_explorer::events::handle_event;
use podcast_explorer::state::{AppState, GENRES, PodcastRecord, Session, ViewMode};
use podcast_explorer::ui;

/// App with `n` loaded records.
fn app_with(n: usize, mode: ViewMode) -> AppState {
    let mut session = Session::new(&GENRES, mode);
    let records = (0..n)
        .map(|i| PodcastRecord {
            id: i.to_string(),
            title: format!("Show {i:02}"),
            genres: vec![u32::try_from(i % 9).unwrap_or(0) + 1],
            updated: format!("2024-03-{:02}", i % 28 + 1),
            seasons: Some(u32::try_from(i % 4).unwrap_or(0) + 1),
            description: format!("Description of show {i}"),
            ..PodcastRecord::default()
        })
        .collect();
    session.finish_fetch(Ok(records));
    AppState::new(session, "https://example.test/shows")
}

/// Render one frame into a 120x40 buffer and return it as text.
fn render(app: &mut AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("failed to create test terminal");
    terminal
        .draw(|f| ui::ui(f, app))
        .expect("failed to draw test terminal");
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn press(app: &mut AppState, code: KeyCode) {
    handle_event(&CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)), app);
}

#[test]
fn test_ui_renders_header_and_source() {
    let mut app = app_with(5, ViewMode::Paginated);
    let out = render(&mut app);
    assert!(out.contains("Podcast Explorer"));
    assert!(out.contains("All Genres"));
    assert!(out.contains("Recently Updated"));
    assert!(out.contains("https://example.test/shows"));
}

#[test]
fn test_ui_pagination_footer_follows_navigation() {
    let mut app = app_with(30, ViewMode::Paginated);
    assert!(render(&mut app).contains("Page 1 of 3"));
    press(&mut app, KeyCode::Right);
    assert!(render(&mut app).contains("Page 2 of 3"));
}

#[test]
fn test_ui_load_more_control_disappears_when_exhausted() {
    let mut app = app_with(20, ViewMode::LoadMore);
    assert!(render(&mut app).contains("Load More"));
    press(&mut app, KeyCode::Enter);
    let out = render(&mut app);
    assert!(out.contains("Showing 20 of 20"));
    assert!(!out.contains("[Enter] Load More"));
}

#[test]
fn test_ui_search_and_empty_results() {
    let mut app = app_with(12, ViewMode::Paginated);
    for c in "show 03".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    let out = render(&mut app);
    assert!(out.contains("Show 03"));
    assert!(out.contains("Podcasts (1/12)"));

    press(&mut app, KeyCode::Char('x'));
    let out = render(&mut app);
    assert!(out.contains("No podcasts match your search."));
    assert!(out.contains("No results"));
}

#[test]
fn test_ui_empty_directory_message() {
    let mut app = app_with(0, ViewMode::Paginated);
    let out = render(&mut app);
    assert!(out.contains("The directory is empty."));
    assert!(!out.contains("No podcasts match your search."));
}

#[test]
fn test_ui_small_terminal_does_not_panic() {
    let mut app = app_with(30, ViewMode::Paginated);
    let mut terminal = Terminal::new(TestBackend::new(20, 8)).expect("terminal");
    terminal.draw(|f| ui::ui(f, &mut app)).expect("draw");
}
