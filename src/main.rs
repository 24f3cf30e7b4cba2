use std::io;
use std::process;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use clap::error::ErrorKind;
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use typist::clock::SystemClock;
use typist::config::{Config, clamp_probability};
use typist::demo::demo_state;
use typist::logging;
use typist::runtime::{EventHandler, ExitRequest, Runtime};
use typist::session::{Options, init};
use typist::ui::{self, theme::Theme};

const INPUT_POLL_RATE: Duration = Duration::from_millis(100);

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

#[derive(Parser)]
#[command(name = "typist", version, about = "Terminal typing practice: fast, slow, then normal")]
struct Cli {
    #[arg(short = 'f', value_name = "FILE", help = "Word list or code file to practice, - for stdin")]
    file: Option<String>,

    #[arg(short = 'c', help = "Use the file's lines as phrases, in order")]
    codelines: bool,

    #[arg(short = 'd', help = "Show a fixed demo screen and exit on any key")]
    demo: bool,

    #[arg(short = 'n', value_name = "PROBABILITY", help = "Chance of swapping a word for a number")]
    number_probability: Option<f64>,

    #[arg(help = "Practice exactly this phrase")]
    words: Vec<String>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let status = if err.kind() == ErrorKind::DisplayVersion { 0 } else { 1 };
            process::exit(status);
        }
    };

    match run(cli) {
        Ok(exit) => {
            if !exit.goodbye.is_empty() {
                println!("{}", exit.goodbye);
            }
            process::exit(exit.status);
        }
        Err(err) => {
            eprintln!("Error: {err:?}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<ExitRequest> {
    let mut config = Config::load()?;
    if let Some(p) = cli.number_probability {
        config.number_probability = clamp_probability(p);
    }
    if let Some(path) = logging::init(config.log_file.as_deref())? {
        info!(log = %path.display(), "logging enabled");
    }

    if cli.demo {
        return run_demo();
    }

    let stats_file = config.stats_path();
    info!(stats = %stats_file.display(), codelines = cli.codelines, "starting");
    let options = Options {
        words: cli.words,
        datafile: cli.file,
        codelines: cli.codelines,
        number_probability: config.number_probability,
        hide_fingers: config.hide_fingers,
        tick_rate: config.tick_rate(),
    };
    let (state, commands) = init(options, stats_file);

    let (mut terminal, keyboard_enhanced) = setup_terminal()?;
    let theme = Theme::default();
    let mut runtime = Runtime::new(SystemClock, EventHandler::terminal(INPUT_POLL_RATE));
    let result = runtime.run(state, commands, |state, now| {
        terminal.draw(|frame| ui::render(frame, state, now, &theme))?;
        Ok(())
    });
    restore_terminal(&mut terminal, keyboard_enhanced)?;

    let (_, exit) = result?;
    Ok(exit)
}

fn run_demo() -> Result<ExitRequest> {
    let now = Utc::now();
    let state = demo_state(now);
    let theme = Theme::default();

    let (mut terminal, keyboard_enhanced) = setup_terminal()?;
    let events = EventHandler::terminal(INPUT_POLL_RATE);
    let result = terminal
        .draw(|frame| ui::render(frame, &state, now, &theme))
        .map_err(anyhow::Error::from)
        .and_then(|_| events.wait_for_key());
    restore_terminal(&mut terminal, keyboard_enhanced)?;
    result?;

    Ok(ExitRequest {
        status: 0,
        goodbye: String::new(),
    })
}

fn setup_terminal() -> Result<(Tui, bool)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Disambiguates Esc and Ctrl combinations where supported
    let keyboard_enhanced = execute!(
        io::stdout(),
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    )
    .is_ok();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    Ok((terminal, keyboard_enhanced))
}

fn restore_terminal(terminal: &mut Tui, keyboard_enhanced: bool) -> Result<()> {
    if keyboard_enhanced {
        let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
