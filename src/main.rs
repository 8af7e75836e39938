//! Terminal Life runner (default binary).
//!
//! This is the primary entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_life::core::{Catalog, World, WorldSnapshot};
use tui_life::input::{handle_key_event, should_quit};
use tui_life::term::{DriverStatus, FrameBuffer, LifeView, TerminalRenderer, Viewport};
use tui_life::types::{
    DriverAction, Margins, DEFAULT_MARGIN, DEFAULT_STEP_MS, MAX_STEP_MS, MIN_STEP_MS,
};

const USAGE: &str = "\
Usage: tui-life [OPTIONS] [PATTERN]

Seed the lattice with PATTERN (default: glider) and run it.

Options:
  -d, --delay <MS>   milliseconds between generations (default: 200)
  -m, --margin <N>   border cells kept around the population (default: 2)
      --no-adjust    do not re-anchor the population after each step
  -l, --list         list built-in patterns and exit
  -h, --help         print this help and exit

Keys: q quit, p pause, n step, +/- speed, r restart
";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Cli {
    pattern: String,
    step_ms: u64,
    margin: i64,
    adjust: bool,
    list: bool,
    help: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            pattern: "glider".to_string(),
            step_ms: DEFAULT_STEP_MS,
            margin: DEFAULT_MARGIN,
            adjust: true,
            list: false,
            help: false,
        }
    }
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Cli, String> {
    let mut cli = Cli::default();
    let mut it = args.into_iter();

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "-l" | "--list" => cli.list = true,
            "--no-adjust" => cli.adjust = false,
            "-d" | "--delay" => {
                let value = it.next().ok_or_else(|| format!("{arg} needs a value"))?;
                let ms: u64 = value
                    .parse()
                    .map_err(|_| format!("bad delay {value:?}, expected milliseconds"))?;
                cli.step_ms = ms.clamp(MIN_STEP_MS, MAX_STEP_MS);
            }
            "-m" | "--margin" => {
                let value = it.next().ok_or_else(|| format!("{arg} needs a value"))?;
                let n: i64 = value
                    .parse()
                    .map_err(|_| format!("bad margin {value:?}, expected a cell count"))?;
                if !(0..=64).contains(&n) {
                    return Err(format!("margin {n} out of range 0..=64"));
                }
                cli.margin = n;
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option {other:?}"));
            }
            name => cli.pattern = name.to_string(),
        }
    }

    Ok(cli)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(msg) => {
            eprintln!("tui-life: {msg}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    if cli.help {
        print!("{USAGE}");
        return Ok(());
    }
    if cli.list {
        for name in Catalog::builtin().names() {
            println!("{name}");
        }
        return Ok(());
    }

    let world = match World::from_catalog(&Catalog::builtin(), &cli.pattern) {
        Ok(world) => world
            .with_margins(Margins::uniform(cli.margin))
            .with_auto_adjust(cli.adjust),
        Err(err) => {
            eprintln!("tui-life: {err}");
            eprintln!("Known patterns:");
            for name in Catalog::builtin().names() {
                eprintln!("  {name}");
            }
            std::process::exit(2);
        }
    };

    log::info!(
        "seeding {:?} ({} cells), {} ms per generation",
        cli.pattern,
        world.population(),
        cli.step_ms
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, world, &cli);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Err(err) = &result {
        log::error!("runner failed: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, mut world: World, cli: &Cli) -> Result<()> {
    let initial = world.clone();
    let view = LifeView::default();

    let mut snap = WorldSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut paused = false;
    let mut step_ms = cli.step_ms;
    let mut last_step = Instant::now();

    loop {
        // Render.
        world.snapshot_into(&mut snap);
        let status = DriverStatus {
            pattern: &cli.pattern,
            step_ms,
            paused,
            adjust: world.auto_adjust(),
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, &status, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next generation is due.
        let step_delay = Duration::from_millis(step_ms);
        let timeout = if paused {
            // Nothing is ticking; poll slowly just to stay responsive.
            Duration::from_millis(250)
        } else {
            step_delay
                .checked_sub(last_step.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0))
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }

                    match handle_key_event(key) {
                        Some(DriverAction::Pause) => {
                            paused = !paused;
                            last_step = Instant::now();
                        }
                        Some(DriverAction::Step) => {
                            paused = true;
                            world.step();
                        }
                        Some(DriverAction::Faster) => {
                            step_ms = (step_ms / 2).max(MIN_STEP_MS);
                        }
                        Some(DriverAction::Slower) => {
                            step_ms = (step_ms * 2).min(MAX_STEP_MS);
                        }
                        Some(DriverAction::Restart) => {
                            world = initial.clone();
                            last_step = Instant::now();
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Advance.
        if !paused && last_step.elapsed() >= step_delay {
            last_step = Instant::now();
            world.step();
        }
    }
}
