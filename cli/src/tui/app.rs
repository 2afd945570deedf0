use std::sync::Arc;

use chrono::Local;
use ratatui::widgets::ListState;
use showcal_core::{
    expansion_key, next_show_option, reduce, CalendarSource, Event, FilterState, Month,
    SessionState, ShowEntry,
};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

/// One selectable show card in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub day: String,
    pub code: String,
    pub entry: ShowEntry,
    pub first_of_day: bool,
}

impl Card {
    pub fn key(&self) -> String {
        expansion_key(&self.day, &self.code)
    }
}

pub fn build_cards(session: &SessionState) -> Vec<Card> {
    session
        .visible_days()
        .into_iter()
        .flat_map(|day| {
            let name = day.day;
            day.shows
                .into_iter()
                .enumerate()
                .map(move |(i, (code, entry))| Card {
                    day: name.clone(),
                    code,
                    entry,
                    first_of_day: i == 0,
                })
        })
        .collect()
}

pub struct App {
    pub session: SessionState,
    pub state: ListState,
    source: Arc<dyn CalendarSource>,
    runtime: Handle,
    tx: UnboundedSender<Event>,
    rx: UnboundedReceiver<Event>,
}

impl App {
    pub fn new(source: Arc<dyn CalendarSource>, runtime: Handle, filter: FilterState) -> App {
        let (tx, rx) = unbounded_channel();
        let mut app = App {
            session: SessionState::new(filter),
            state: ListState::default(),
            source,
            runtime,
            tx,
            rx,
        };
        app.start_fetch();
        app
    }

    pub fn cards(&self) -> Vec<Card> {
        build_cards(&self.session)
    }

    pub fn dispatch(&mut self, event: Event) {
        let fetch = event.triggers_fetch(&self.session);
        self.session = reduce(std::mem::take(&mut self.session), event);
        if fetch {
            self.start_fetch();
        }
        self.clamp_selection();
    }

    /// Drain finished fetches. Called once per frame.
    pub fn poll_responses(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.dispatch(event);
        }
    }

    pub fn retry(&mut self) {
        self.start_fetch();
    }

    fn start_fetch(&mut self) {
        self.session = reduce(std::mem::take(&mut self.session), Event::FetchStarted);
        let request = self.session.current_request();
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        debug!(generation = request.generation, month = %request.month, "spawning fetch");
        self.runtime.spawn(async move {
            let event = match source.fetch(request.month).await {
                Ok(response) => Event::FetchSucceeded {
                    generation: request.generation,
                    response,
                    fetched_at: Local::now(),
                },
                Err(err) => Event::FetchFailed {
                    generation: request.generation,
                    message: err.to_string(),
                },
            };
            if tx.send(event).is_err() {
                warn!("ui closed before fetch completed");
            }
        });
    }

    pub fn select_month(&mut self, month: Month) {
        self.dispatch(Event::MonthSelected(month));
    }

    pub fn next_month(&mut self) {
        self.select_month(self.session.filter.month().next());
    }

    pub fn previous_month(&mut self) {
        self.select_month(self.session.filter.month().previous());
    }

    pub fn cycle_park(&mut self) {
        self.dispatch(Event::ParkSelected(self.session.filter.park().next()));
    }

    pub fn cycle_show(&mut self) {
        let filter = self.session.filter;
        self.dispatch(Event::ShowSelected(next_show_option(filter.park(), filter.show())));
    }

    pub fn toggle_selected(&mut self) {
        let Some(i) = self.state.selected() else { return };
        if let Some(card) = self.cards().get(i) {
            self.dispatch(Event::ExpansionToggled(card.key()));
        }
    }

    pub fn next(&mut self) {
        let len = self.cards().len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.cards().len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    fn clamp_selection(&mut self) {
        let len = self.cards().len();
        match self.state.selected() {
            _ if len == 0 => self.state.select(None),
            Some(i) if i >= len => self.state.select(Some(len - 1)),
            None => self.state.select(Some(0)),
            _ => {}
        }
    }
}
