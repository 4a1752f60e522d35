use std::{
    thread,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use gameoflive::{Config, NoSurface, PatternDecoder, Pos2, RunLengthEncoded, Shell};
use tracing::info;

mod console;
mod logging;
mod options;
mod stats;

use console::{ConsoleCommand, ConsoleSurface};
use options::{Args, FillMode};
use stats::Stats;

/// How long to wait for input while no tick is pending
const IDLE_WAIT: Duration = Duration::from_millis(250);
const MIN_PERIOD: Duration = Duration::from_millis(10);
const MAX_PERIOD: Duration = Duration::from_secs(10);

/// Cells brought to life when the world is first created
struct Seed {
    fill: FillMode,
    pattern: Vec<Pos2>,
}
impl Seed {
    fn from_args(args: &Args) -> Result<Self> {
        let pattern = match args.input_file() {
            Some(file_name) => {
                let text = std::fs::read_to_string(&file_name)
                    .with_context(|| format!("reading pattern {file_name}"))?;
                RunLengthEncoded
                    .decode(&text)
                    .with_context(|| format!("decoding pattern {file_name}"))?
            }
            None => Vec::new(),
        };
        Ok(Self {
            fill: args.fill_mode()?,
            pattern,
        })
    }

    fn apply(self, shell: &mut Shell) {
        let world = shell.world_mut();
        let filled = self.fill.create_alive(world.cols(), world.rows());
        world.stamp(Pos2::default(), filled);
        world.stamp(Pos2::default(), self.pattern);
        info!(alive = world.alive_count(), "world seeded");
    }
}

fn main() -> Result<()> {
    let Some(args) = Args::from_env()? else {
        return Ok(());
    };
    logging::init(args.log_file().as_deref())?;

    let config = args.config()?;
    let seed = Seed::from_args(&args)?;
    if args.headless() {
        run_headless(&args, config, seed)
    } else {
        run_console(&args, config, seed)
    }
}

fn run_console(args: &Args, config: Config, seed: Seed) -> Result<()> {
    let mut console = ConsoleSurface::new(&config).context("initializing terminal")?;
    let mut shell = Shell::new(config, Instant::now());
    shell.on_created();

    let (cols, rows) = ConsoleSurface::world_size()?;
    shell.on_size_changed(cols.into(), rows.into());
    seed.apply(&mut shell);
    shell.set_playing(!args.paused());

    let mut stats = Stats::new(shell.world().alive_count());
    loop {
        let timeout = shell
            .next_due()
            .map(|due| due.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_WAIT);

        if let Some(command) = console.poll_events(timeout)? {
            match command {
                ConsoleCommand::Exit => break,
                ConsoleCommand::TogglePlay => {
                    shell.toggle_playing();
                }
                ConsoleCommand::ToggleGrid => {
                    let mut config = shell.config().clone();
                    config.draw_grid = !config.draw_grid;
                    reconfigure(&mut shell, &mut console, config);
                }
                ConsoleCommand::ToggleNumbers => {
                    let mut config = shell.config().clone();
                    config.draw_numbers = !config.draw_numbers;
                    reconfigure(&mut shell, &mut console, config);
                }
                ConsoleCommand::Faster | ConsoleCommand::Slower => {
                    let mut config = shell.config().clone();
                    config.period = match command {
                        ConsoleCommand::Faster => config.period / 2,
                        _ => config.period * 2,
                    }
                    .clamp(MIN_PERIOD, MAX_PERIOD);
                    reconfigure(&mut shell, &mut console, config);
                }
                ConsoleCommand::Clear => {
                    let world = shell.world_mut();
                    let (cols, rows) = (world.cols(), world.rows());
                    world.create_matrix(cols, rows);
                    stats.set_alive(0);
                    shell.force_present(&mut console);
                }
                ConsoleCommand::Click(pixel) => {
                    shell.on_touch(pixel, &mut console);
                    stats.set_alive(shell.world().alive_count());
                }
                ConsoleCommand::Resize { cols, rows } => {
                    shell.on_size_changed(cols.into(), rows.into());
                    stats.set_alive(0);
                    shell.force_present(&mut console);
                }
                ConsoleCommand::Visible(visible) => {
                    shell.on_visibility_changed(visible, Instant::now());
                }
                ConsoleCommand::Handled => {}
            }
        }

        if let Some(tick) = shell.poll(Instant::now(), &mut console) {
            if tick.evolved {
                stats.record(shell.world().generation(), shell.world().alive_count());
            }
        }
        if stats.has_report() {
            let state = if shell.is_playing() { "" } else { " [paused]" };
            console.set_report(format!(
                "{}{} period:{}ms",
                stats.report(),
                state,
                shell.config().period.as_millis()
            ));
        }
    }

    shell.on_destroyed();
    Ok(())
}

fn reconfigure(shell: &mut Shell, console: &mut ConsoleSurface, config: Config) {
    console.apply(&config);
    shell.set_configuration(config);
    shell.force_present(console);
}

/// Runs the loop without a terminal until enough generations have passed
fn run_headless(args: &Args, config: Config, seed: Seed) -> Result<()> {
    let (cols, rows) = args.grid_size()?;
    let generations = args.generations()?;
    let cell_size = config.cell_size as usize;

    let mut shell = Shell::new(config, Instant::now());
    shell.on_created();
    let pixels = |cells: usize| {
        cells
            .checked_mul(cell_size)
            .and_then(|pixels| u32::try_from(pixels).ok())
    };
    shell.on_size_changed(
        pixels(cols).context("grid width out of range")?,
        pixels(rows).context("grid height out of range")?,
    );
    seed.apply(&mut shell);
    println!("alive: {}", shell.world().alive_count());

    let mut stats = Stats::new(shell.world().alive_count());
    run_generations(&mut shell, generations, &mut stats);
    shell.on_destroyed();

    println!("{}", shell.world());
    Ok(())
}

/// Ticks `shell` until its world reaches `generations`, sleeping in between
///
/// Stops early when no tick is pending or the world is paused, since the
/// count could never be reached.
fn run_generations(shell: &mut Shell, generations: u64, stats: &mut Stats) {
    while shell.world().generation() < generations && shell.is_playing() {
        let Some(due) = shell.next_due() else {
            break;
        };
        let now = Instant::now();
        if due > now {
            thread::sleep(due - now);
        }

        if let Some(tick) = shell.poll(Instant::now(), &mut NoSurface) {
            if tick.evolved {
                stats.record(shell.world().generation(), shell.world().alive_count());
            }
        }
        if stats.has_report() {
            println!("{}", stats.report());
        }
    }
}
