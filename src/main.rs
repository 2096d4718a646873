use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use lifequest::core::constants::POLL_INTERVAL_MS;
use lifequest::session::Session;
use lifequest::store::FileStore;
use lifequest::ui::add_mission::AddMissionScreen;
use lifequest::ui::confirm_reset::draw_confirm_reset;
use lifequest::ui::hero_panel::draw_hero_panel;
use lifequest::ui::mission_list::draw_mission_list;
use lifequest::ui::{draw_header, draw_status, root_layout, Tab};
use lifequest::{build_info, Attribute};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

enum Screen {
    Game,
    AddMission,
    ConfirmReset,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "lifequest {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("LifeQuest - Gamified Task Tracker\n");
                println!("Usage: lifequest\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'lifequest --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Load the session before touching the terminal
    let store = FileStore::new()?;
    let mut session = Session::new(store);
    session.load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session<FileStore>,
) -> io::Result<()> {
    let mut screen = Screen::Game;
    let mut active_tab = Tab::Missions;
    let mut selected: usize = 0;
    let mut add_screen = AddMissionScreen::new();
    let mut status: Option<String> = None;

    loop {
        terminal.draw(|frame| {
            let (header_area, body_area, status_area) = root_layout(frame.size());

            draw_header(frame, header_area, active_tab);
            match active_tab {
                Tab::Missions => draw_mission_list(
                    frame,
                    body_area,
                    session.hero(),
                    session.missions(),
                    selected,
                ),
                Tab::Hero => draw_hero_panel(frame, body_area, session.hero()),
            }
            draw_status(
                frame,
                status_area,
                status.as_deref(),
                session.last_store_error(),
            );

            match screen {
                Screen::AddMission => add_screen.draw(frame, frame.size()),
                Screen::ConfirmReset => draw_confirm_reset(frame, frame.size()),
                Screen::Game => {}
            }
        })?;

        if !event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            continue;
        }
        let Event::Key(key_event) = event::read()? else {
            continue;
        };

        match screen {
            Screen::Game => match key_event.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(()),
                KeyCode::Tab | KeyCode::BackTab => {
                    active_tab = match active_tab {
                        Tab::Missions => Tab::Hero,
                        Tab::Hero => Tab::Missions,
                    };
                }
                KeyCode::Up if matches!(active_tab, Tab::Missions) => {
                    selected = selected.saturating_sub(1);
                }
                KeyCode::Down if matches!(active_tab, Tab::Missions) => {
                    if selected + 1 < session.missions().len() {
                        selected += 1;
                    }
                }
                KeyCode::Enter if matches!(active_tab, Tab::Missions) => {
                    let id = session.missions().get(selected).map(|m| m.id.clone());
                    if let Some(id) = id {
                        if let Some(outcome) = session.complete_mission(&id) {
                            status = Some(if outcome.levels_gained > 0 {
                                format!(
                                    "Mission complete! +{} XP, level up to {}!",
                                    outcome.xp_awarded,
                                    session.hero().level
                                )
                            } else {
                                format!("Mission complete! +{} XP", outcome.xp_awarded)
                            });
                        }
                    }
                }
                KeyCode::Char('a') | KeyCode::Char('A')
                    if matches!(active_tab, Tab::Missions) =>
                {
                    add_screen = AddMissionScreen::new();
                    screen = Screen::AddMission;
                }
                KeyCode::Char('c') | KeyCode::Char('C')
                    if matches!(active_tab, Tab::Missions) =>
                {
                    session.clear_completed_missions();
                    selected = selected.min(session.missions().len().saturating_sub(1));
                    status = Some("Cleared completed missions".to_string());
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    screen = Screen::ConfirmReset;
                }
                KeyCode::Char('1') if matches!(active_tab, Tab::Hero) => {
                    allocate(session, Attribute::Strength, &mut status);
                }
                KeyCode::Char('2') if matches!(active_tab, Tab::Hero) => {
                    allocate(session, Attribute::Intelligence, &mut status);
                }
                KeyCode::Char('3') if matches!(active_tab, Tab::Hero) => {
                    allocate(session, Attribute::Vitality, &mut status);
                }
                _ => {}
            },

            Screen::AddMission => match key_event.code {
                KeyCode::Char(c) => add_screen.handle_char_input(c),
                KeyCode::Backspace => add_screen.handle_backspace(),
                KeyCode::Left => add_screen.prev_difficulty(),
                KeyCode::Right => add_screen.next_difficulty(),
                KeyCode::Enter => {
                    if session.add_mission(&add_screen.title(), add_screen.difficulty()) {
                        status = Some(format!("Added \"{}\"", add_screen.title()));
                        screen = Screen::Game;
                    }
                }
                KeyCode::Esc => screen = Screen::Game,
                _ => {}
            },

            Screen::ConfirmReset => match key_event.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    session.reset();
                    selected = 0;
                    status = Some("Progress reset".to_string());
                    screen = Screen::Game;
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    screen = Screen::Game;
                }
                _ => {}
            },
        }
    }
}

fn allocate(session: &mut Session<FileStore>, attr: Attribute, status: &mut Option<String>) {
    if session.hero().unspent_points == 0 {
        return;
    }
    session.allocate_point(attr);
    *status = Some(format!(
        "+1 {} ({} points left)",
        attr.name(),
        session.hero().unspent_points
    ));
}
