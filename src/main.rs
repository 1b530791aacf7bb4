use chrono::{Local, Utc};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};
use voyage::achievements::get_achievement_def;
use voyage::constants::{INPUT_POLL_MS, NOTIFICATION_LIMIT, WEATHER_CYCLE_SECS};
use voyage::shop::SHOP_CATALOG;
use voyage::ui::quest_form::{draw_quest_form, FormAction, QuestForm};
use voyage::ui::{
    achievements_scene::draw_achievements_scene, draw_footer, draw_header,
    map_scene::draw_map_scene, quest_panel::draw_quest_panel, shop_scene::draw_shop_scene,
    stats_panel::draw_stats_panel,
};
use voyage::{
    FileStorage, ProgressionEngine, Quest, QuestEvent, QuestId, VoyageError, WeatherCycle,
};

enum Screen {
    Map,
    NewQuest,
    Achievements,
    Shop,
}

struct App {
    engine: ProgressionEngine<FileStorage>,
    weather: WeatherCycle,
    screen: Screen,
    selected: usize,
    form: QuestForm,
    notifications: VecDeque<String>,
    last_weather_change: Instant,
    should_quit: bool,
}

impl App {
    fn new(engine: ProgressionEngine<FileStorage>) -> Self {
        Self {
            engine,
            weather: WeatherCycle::new(),
            screen: Screen::Map,
            selected: 0,
            form: QuestForm::new(),
            notifications: VecDeque::new(),
            last_weather_change: Instant::now(),
            should_quit: false,
        }
    }

    fn notify(&mut self, message: String) {
        self.notifications.push_back(message);
        while self.notifications.len() > NOTIFICATION_LIMIT {
            self.notifications.pop_front();
        }
    }

    fn notify_event(&mut self, event: QuestEvent) {
        let message = match event {
            QuestEvent::QuestCompleted { coins_earned, .. } => {
                format!("Quest complete! +{coins_earned} coins")
            }
            QuestEvent::AchievementUnlocked { id } => match get_achievement_def(id) {
                Some(def) => format!("Achievement unlocked: {} {}", def.icon, def.name),
                None => format!("Achievement unlocked: {}", id.key()),
            },
            QuestEvent::WeatherChanged { weather } => format!(
                "The weather shifts: {} {} (rewards ×{:.2})",
                weather.icon(),
                weather.name(),
                weather.multiplier()
            ),
        };
        self.notify(message);
    }

    fn drain_engine_events(&mut self) {
        for event in self.engine.take_events() {
            self.notify_event(event);
        }
    }

    fn active_count(&self) -> usize {
        self.engine.ledger().list_active().count()
    }

    fn selected_quest_id(&self) -> Option<QuestId> {
        self.engine
            .ledger()
            .list_active()
            .nth(self.selected)
            .map(|q| q.id)
    }

    fn clamp_selection(&mut self) {
        let count = self.active_count();
        self.selected = if count == 0 {
            0
        } else {
            self.selected.min(count - 1)
        };
    }

    /// The timer lives here; the core only owns the transition.
    fn advance_weather_if_due(&mut self) {
        if self.last_weather_change.elapsed() >= Duration::from_secs(WEATHER_CYCLE_SECS) {
            self.toggle_weather();
        }
    }

    fn toggle_weather(&mut self) {
        let weather = self.weather.tick();
        self.last_weather_change = Instant::now();
        self.notify_event(QuestEvent::WeatherChanged { weather });
    }

    fn handle_key(&mut self, code: KeyCode) {
        match self.screen {
            Screen::Map => self.handle_map_key(code),
            Screen::NewQuest => self.handle_form_key(code),
            Screen::Achievements => {
                if matches!(code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('a')) {
                    self.screen = Screen::Map;
                }
            }
            Screen::Shop => self.handle_shop_key(code),
        }
    }

    fn handle_map_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => {
                self.form = QuestForm::new();
                self.screen = Screen::NewQuest;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected += 1;
                self.clamp_selection();
            }
            KeyCode::Enter | KeyCode::Char('c') => self.complete_selected(),
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('a') => self.screen = Screen::Achievements,
            KeyCode::Char('s') => self.screen = Screen::Shop,
            KeyCode::Char('w') => self.toggle_weather(),
            _ => {}
        }
    }

    fn handle_shop_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('s') => self.screen = Screen::Map,
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10) {
                    let index = digit as usize;
                    if (1..=SHOP_CATALOG.len()).contains(&index) {
                        match self.engine.purchase(SHOP_CATALOG[index - 1].id) {
                            Ok(item) => {
                                self.notify(format!("Purchased {} {}", item.icon, item.name))
                            }
                            Err(e) => self.notify(e.to_string()),
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        match self.form.handle_key(code) {
            FormAction::Cancel => self.screen = Screen::Map,
            FormAction::Submit => self.submit_form(),
            FormAction::None => {}
        }
    }

    fn submit_form(&mut self) {
        let deadline = match self.form.deadline_date() {
            Ok(deadline) => deadline,
            Err(e) => {
                self.notify(e.to_string());
                return;
            }
        };

        let title = self.form.title.clone();
        let difficulty = self.form.difficulty;
        match self
            .engine
            .create_quest(&title, difficulty, deadline, Utc::now().timestamp_millis())
        {
            Ok(quest) => {
                self.notify(format!("New quest charted: {}", quest.title));
                self.screen = Screen::Map;
            }
            Err(e) => self.notify(e.to_string()),
        }
    }

    fn complete_selected(&mut self) {
        let Some(id) = self.selected_quest_id() else {
            self.notify("No quest selected".to_string());
            return;
        };

        let today = Local::now().date_naive();
        let now = Utc::now().timestamp();
        match self
            .engine
            .complete_quest(id, self.weather.current(), today, now)
        {
            Ok(_) => {
                self.drain_engine_events();
                self.clamp_selection();
            }
            Err(e) => self.notify(e.to_string()),
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_quest_id() else {
            self.notify("No quest selected".to_string());
            return;
        };

        match self.engine.delete_quest(id) {
            Ok(true) => {
                self.notify("Quest struck from the chart".to_string());
                self.clamp_selection();
            }
            Ok(false) => {}
            Err(e) => self.notify(e.to_string()),
        }
    }
}

fn draw(frame: &mut ratatui::Frame, app: &App) {
    let size = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(5), // Footer / log
        ])
        .split(size);

    let progress = app.engine.progress();
    let weather = app.weather.current();
    draw_header(frame, chunks[0], progress, weather);

    let notifications: Vec<String> = app.notifications.iter().cloned().collect();
    draw_footer(frame, chunks[2], &notifications);

    match app.screen {
        Screen::Achievements => draw_achievements_scene(frame, chunks[1], progress),
        Screen::Shop => draw_shop_scene(frame, chunks[1], progress),
        Screen::Map | Screen::NewQuest => {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(chunks[1]);
            let right = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(6), Constraint::Length(8)])
                .split(body[1]);

            let quests: Vec<&Quest> = app.engine.ledger().list_active().collect();
            draw_map_scene(frame, body[0], &quests, weather);
            draw_quest_panel(
                frame,
                right[0],
                &quests,
                app.selected,
                Local::now().date_naive(),
            );
            draw_stats_panel(frame, right[1], progress, weather);

            if matches!(app.screen, Screen::NewQuest) {
                draw_quest_form(frame, size, &app.form);
            }
        }
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        app.advance_weather_if_due();

        if app.should_quit {
            return Ok(());
        }
    }
}

fn load_engine() -> io::Result<ProgressionEngine<FileStorage>> {
    let storage = FileStorage::new()?;
    ProgressionEngine::load(storage).map_err(|e| match e {
        VoyageError::Persistence(io_err) => io_err,
        other => io::Error::new(io::ErrorKind::InvalidData, other.to_string()),
    })
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "voyage {} ({})",
                    voyage::build_info::BUILD_DATE,
                    voyage::build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Voyage - a map-themed gamified task tracker\n");
                println!("Usage: voyage [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'voyage --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let engine = load_engine()?;

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(engine);
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
