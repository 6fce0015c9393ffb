use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use article_suggest::app::App;
use article_suggest::config::{self, Config, ConfigResult};
use article_suggest::suggest::{SearchTransport, WikipediaClient, WorkerRuntime};

/// Longest the event loop sleeps, so worker responses are picked up promptly
const MAX_POLL: Duration = Duration::from_millis(50);

/// Pick two Wikipedia articles with search-as-you-type suggestions
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file (defaults to ~/.config/article-suggest/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Search API endpoint
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Quiet period before a search is issued
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api.url = url.clone();
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.suggest.debounce_ms = debounce_ms;
        }
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    let ConfigResult {
        mut config,
        warning,
    } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    if let Some(warning) = warning {
        eprintln!("article-suggest: {}", warning);
    }
    args.apply(&mut config);

    if args.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    #[cfg(debug_assertions)]
    init_logging();

    let runtime = WorkerRuntime::start()?;
    let transport: Arc<dyn SearchTransport> = Arc::new(WikipediaClient::new(&config.api)?);
    let mut app = App::new(&config, &runtime, transport, Instant::now());

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = run(terminal, &mut app);
    ratatui::restore();
    result?;

    if let Some(output) = app.output() {
        println!("{}", output);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(MAX_POLL)
            .min(MAX_POLL);

        // Only process key press events (avoid duplicates)
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Log to a file; the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_logging() {
    use std::io::Write;

    let path = std::env::temp_dir().join("article-suggest.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("article_suggest=debug"),
    )
    .target(env_logger::Target::Pipe(Box::new(file)))
    .format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    })
    .try_init();
}
