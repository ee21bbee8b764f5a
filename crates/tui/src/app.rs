//! Main application struct and run loop.
//!
//! The [`App`] owns the task store, the loader feeding it and the UI state.
//! Every store mutation happens on the UI task: background loads only send
//! their outcomes back over a channel, which is drained once per frame.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tasklane_config::{Config, ConfigError, DropPolicy, SourceConfig, SourceKind};
use tasklane_protocol::{DragEvent, DragLocation, Message};
use tasklane_store::{
    ConfiguredSource, JsonFileSource, LoadId, LoadOutcome, LoadStatus, Loader, MockTaskSource,
    TaskSource, TaskStore,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{
    AppState,
    event::{event_to_message, poll_event},
    layout::{HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, STATUS_BAR_HEIGHT},
    state::DragOrigin,
    terminal::AppTerminal,
    widgets::{
        ColumnView, StatusInfo, column_at, render_board, render_help_overlay, render_status_bar,
    },
};

/// Builds the task source described by `config`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSource`] if a file source has no path.
///
/// # Examples
///
/// ```
/// use tasklane_config::SourceConfig;
/// use tasklane_store::ConfiguredSource;
/// use tasklane_tui::build_source;
///
/// let source = build_source(&SourceConfig::file("tasks.json"))?;
/// assert!(matches!(source, ConfiguredSource::File(_)));
/// # Ok::<(), tasklane_config::ConfigError>(())
/// ```
pub fn build_source(config: &SourceConfig) -> Result<ConfiguredSource, ConfigError> {
    let source = match config.kind {
        SourceKind::Mock => MockTaskSource::new().with_delay(config.delay()).into(),
        SourceKind::File => {
            let path = config.path.as_ref().ok_or_else(|| ConfigError::InvalidSource {
                reason: "file source requires a path".to_string(),
            })?;
            JsonFileSource::new(path).with_delay(config.delay()).into()
        }
    };
    Ok(source)
}

/// The main application struct.
///
/// Owns the task store and its loader, and provides the main event loop.
#[derive(Debug)]
pub struct App<S: TaskSource + 'static> {
    state: AppState,
    store: TaskStore,
    loader: Loader<S>,
    outcomes: mpsc::UnboundedReceiver<LoadOutcome>,
    mounted: bool,
    should_quit: bool,
    /// Last known terminal area, used for mouse hit-testing.
    last_area: Rect,
    /// Whether the header was shown in the last render (affects hit-testing).
    header_visible: bool,
}

impl<S: TaskSource + 'static> App<S> {
    /// Creates an application that loads from `source`.
    ///
    /// Nothing is loaded until [`mount`](Self::mount) is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklane_config::DropPolicy;
    /// use tasklane_store::{DEFAULT_LOAD_TIMEOUT, MockTaskSource};
    /// use tasklane_tui::App;
    ///
    /// let app = App::new(MockTaskSource::new(), DEFAULT_LOAD_TIMEOUT, DropPolicy::default());
    /// assert!(!app.is_mounted());
    /// assert!(app.store().is_empty());
    /// ```
    #[must_use]
    pub fn new(source: S, timeout: Duration, policy: DropPolicy) -> Self {
        let (loader, outcomes) = Loader::new(source, timeout);
        Self {
            state: AppState::new(policy),
            store: TaskStore::new(),
            loader,
            outcomes,
            mounted: false,
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
        }
    }

    /// Creates an application using the timeout and drop policy from
    /// `config`.
    #[must_use]
    pub fn with_config(source: S, config: &Config) -> Self {
        Self::new(source, config.source.timeout(), config.board.drop_policy)
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the task store.
    #[must_use]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Puts the board on screen and starts the initial load.
    ///
    /// Mounting twice does not start a second load. Must be called from
    /// within a tokio runtime.
    pub fn mount(&mut self) -> Option<LoadId> {
        if self.mounted {
            return None;
        }

        self.mounted = true;
        info!("board mounted");
        Some(self.reload())
    }

    /// Takes the board off screen, cancelling every in-flight load.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }

        self.mounted = false;
        self.loader.cancel();
        info!("board unmounted");
    }

    /// Starts another load. Loads already in flight keep running; the last
    /// one to finish determines the list.
    pub fn reload(&mut self) -> LoadId {
        self.store.begin_load();
        let id = self.loader.start();
        self.sync_view();
        id
    }

    /// Applies the outcomes of finished loads to the store.
    ///
    /// Outcomes of cancelled loads are discarded. Returns the number of
    /// outcomes applied.
    pub fn drain_outcomes(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcomes.try_recv() {
            if !self.loader.accepts(&outcome) {
                debug!(id = outcome.id.get(), "discarding outcome of cancelled load");
                continue;
            }
            self.store.finish_load(outcome.result);
            applied += 1;
        }

        if applied > 0 {
            self.sync_view();
        }
        applied
    }

    /// Refreshes the column mirror after a store change.
    ///
    /// A drag survives only if the card it carries is still where it was
    /// picked up.
    fn sync_view(&mut self) {
        let columns = self.state.binding.columns();
        let dragged = self
            .state
            .drag
            .and_then(|drag| columns.get(drag.source.column, drag.source.index))
            .map(|task| task.key.clone());

        if !self.state.binding.sync(&self.store) {
            return;
        }

        if let Some(drag) = self.state.drag {
            let columns = self.state.binding.columns();
            let same_card = columns
                .get(drag.source.column, drag.source.index)
                .map(|task| &task.key)
                == dragged.as_ref();
            let target_fits = drag.target.index <= self.state.max_drop_index(drag.target.column);
            if !same_card || !target_fits {
                debug!("columns changed under the drag, dropping it");
                self.state.drag = None;
            }
        }
        self.state.clamp_task_selection();
    }

    /// Updates the application state based on a message.
    ///
    /// While the help overlay is visible, any message dismisses it instead
    /// of performing its action. `Quit` still quits.
    pub fn update(&mut self, msg: Message) {
        if self.state.dismiss_help() {
            if msg.is_terminating() {
                self.should_quit = true;
            }
            return;
        }

        match msg {
            Message::Quit => {
                self.should_quit = true;
            }
            Message::ToggleHelp => {
                self.state.toggle_help();
            }
            Message::NavigateLeft => {
                self.state.navigate_left();
            }
            Message::NavigateRight => {
                self.state.navigate_right();
            }
            Message::NavigateUp => {
                self.state.navigate_up();
            }
            Message::NavigateDown => {
                self.state.navigate_down();
            }
            Message::Grab => {
                self.grab_or_drop();
            }
            Message::Escape => {
                if let Some(drag) = self.state.take_drag() {
                    self.finish_drag(&drag.cancel_event());
                } else {
                    self.state.clear_selection();
                }
            }
            Message::ToggleStatus => {
                self.toggle_selected_status();
            }
            Message::Refresh => {
                self.reload();
            }
            Message::PressAt { column, row } => {
                self.press_at(column, row);
            }
            Message::ReleaseAt { column, row } => {
                self.release_at(column, row);
            }
        }
    }

    fn grab_or_drop(&mut self) {
        if let Some(drag) = self.state.take_drag() {
            self.finish_drag(&drag.drop_event());
            return;
        }

        let Some(index) = self.state.selected_task else {
            return;
        };
        let source = DragLocation::new(self.state.selected_column, index);
        if self.state.begin_drag(source, DragOrigin::Keyboard) {
            debug!(?source, "picked up card");
        }
    }

    fn finish_drag(&mut self, event: &DragEvent) {
        match self.state.binding.on_drag_end(event, &mut self.store) {
            Ok(true) => {
                if let Some(destination) = event.destination {
                    self.state.select(destination);
                }
            }
            Ok(false) => {}
            Err(err) => {
                warn!(%err, "rejected drag");
            }
        }
    }

    fn toggle_selected_status(&mut self) {
        if self.state.is_dragging() {
            return;
        }
        let Some(task) = self.state.selected_task() else {
            return;
        };

        let key = task.key.clone();
        let target = task.status.toggled();
        let Some(stored) = self.store.status_of(&key) else {
            return;
        };

        if stored == target {
            // A mirror-only move already shows the other status; go back to the store's.
            debug!(%key, ?target, "store already holds toggled status, resyncing mirror");
            self.state.binding.invalidate();
        } else if target.is_done() {
            self.store.mark_done(&key);
        } else {
            self.store.mark_todo(&key);
        }
        self.sync_view();
    }

    /// Starts a pointer drag if the press lands on a card.
    fn press_at(&mut self, column: u16, row: u16) {
        if self.state.is_dragging() {
            return;
        }
        let Some(location) = self.hit_test(column, row) else {
            return;
        };
        if location.index >= self.state.column(location.column).len() {
            return;
        }

        self.state.select(location);
        if self.state.begin_drag(location, DragOrigin::Pointer) {
            debug!(?location, "picked up card with pointer");
        }
    }

    /// Ends a pointer drag: dropped over a column, cancelled anywhere else.
    fn release_at(&mut self, column: u16, row: u16) {
        if !self
            .state
            .drag
            .is_some_and(|drag| drag.origin == DragOrigin::Pointer)
        {
            return;
        }

        let target = self.hit_test(column, row).map(|hit| {
            let index = hit.index.min(self.state.max_drop_index(hit.column));
            DragLocation::new(hit.column, index)
        });
        let Some(drag) = self.state.take_drag() else {
            return;
        };

        let event = match target {
            Some(target) => DragEvent::dropped(drag.source, target),
            None => drag.cancel_event(),
        };
        self.finish_drag(&event);
    }

    /// The area the board occupied in the last render.
    fn board_area(&self) -> Rect {
        let header_offset = if self.header_visible { HEADER_HEIGHT } else { 0 };
        Rect {
            x: self.last_area.x,
            y: self.last_area.y + header_offset,
            width: self.last_area.width,
            height: self
                .last_area
                .height
                .saturating_sub(header_offset + STATUS_BAR_HEIGHT),
        }
    }

    /// Maps a terminal cell to a card slot. The slot may lie past the end
    /// of the column.
    fn hit_test(&self, column: u16, row: u16) -> Option<DragLocation> {
        let (id, area) = column_at(self.board_area(), column, row)?;
        let view = ColumnView::from_state(&self.state, id, self.is_loading());
        let slot = view.slot_at(area, row)?;
        Some(DragLocation::new(id, slot))
    }

    fn is_loading(&self) -> bool {
        self.store.status() == LoadStatus::Loading
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - Below the minimum dimensions, a "terminal too small" message is shown.
    /// - Below `MIN_HEIGHT_WITH_HEADER`, the header is hidden.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        let header_height = if show_header { HEADER_HEIGHT } else { 0 };
        let [header_area, board_area, status_area] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        if show_header {
            render_header(frame, header_area);
        }

        let loading = self.is_loading();
        let info = StatusInfo::from_store(
            &self.store,
            self.state.binding.policy(),
            self.state.is_dragging(),
        );
        let buf = frame.buffer_mut();
        render_board(&self.state, loading, board_area, buf);
        render_status_bar(&info, status_area, buf);

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Runs the main application loop until the user quits.
    ///
    /// Mounts the board on entry and unmounts it on exit, so no load
    /// outlives the loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tasklane_config::DropPolicy;
    /// use tasklane_store::{DEFAULT_LOAD_TIMEOUT, MockTaskSource};
    /// use tasklane_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(MockTaskSource::new(), DEFAULT_LOAD_TIMEOUT, DropPolicy::default());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        self.mount();
        let result = self.event_loop(terminal).await;
        self.unmount();
        result
    }

    async fn event_loop(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            self.drain_outcomes();
            terminal.draw(|frame| self.view(frame))?;

            if let Some(msg) = poll_event()?.as_ref().and_then(event_to_message) {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }

            // Let load tasks run between frames.
            tokio::task::yield_now().await;
        }

        Ok(())
    }
}

fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: false });

    let vertical_offset = area.height.saturating_sub(2) / 2;
    let centered_area = Rect {
        x: area.x,
        y: area.y + vertical_offset,
        width: area.width,
        height: area.height.saturating_sub(vertical_offset),
    };

    frame.render_widget(paragraph, centered_area);
}

/// Renders the header bar with title and help cue.
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, help_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(17)]).areas(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "tasklane",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled("Task Board", Style::default().fg(Color::White)),
    ]));
    frame.render_widget(title, title_area);

    let help_cue = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" for help", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(help_cue, help_area);
}
