use std::{fmt::Display, str::FromStr, time::Duration};

use gameoflive::{Config, Pos2};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error(transparent)]
    Parse(#[from] getopts::Fail),

    #[error("invalid value for --{option}: {message}")]
    InvalidValue {
        option: &'static str,
        message: String,
    },

    #[error("unknown fill mode {0:?}")]
    FillMode(String),

    #[error(transparent)]
    Config(#[from] gameoflive::Error),
}

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, OptionsError> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optopt("p", "period", "delay between two generations", "MILLIS");
        opts.optopt("s", "cell-size", "terminal characters per cell side", "N");
        opts.optflag("", "no-touch", "ignore mouse clicks");
        opts.optflag("", "no-grid", "do not mark dead cells");
        opts.optflag("", "numbers", "show the neighbor count of every cell");
        opts.optopt("f", "fill", "initial fill: empty, random, alternating, all", "TYPE");
        opts.optopt("i", "input", "RLE pattern placed at the top-left", "FILE");
        opts.optflag("", "paused", "start paused");
        opts.optflag("", "headless", "run without a console and print the final world");
        opts.optopt("w", "width", "headless grid width", "WIDTH");
        opts.optopt("h", "height", "headless grid height", "HEIGHT");
        opts.optopt("g", "gens", "headless number of generations", "COUNT");
        opts.optopt("", "log", "write logs to file (filter with RUST_LOG)", "FILE");

        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: gameoflive [options]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> Result<Option<Self>, OptionsError> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn get<T>(&self, option: &'static str) -> Result<Option<T>, OptionsError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.matches
            .opt_get::<T>(option)
            .map_err(|err| OptionsError::InvalidValue {
                option,
                message: err.to_string(),
            })
    }

    pub fn config(&self) -> Result<Config, OptionsError> {
        let defaults = Config::default();
        let config = Config {
            touch_enabled: !self.matches.opt_present("no-touch"),
            draw_grid: !self.matches.opt_present("no-grid"),
            draw_numbers: self.matches.opt_present("numbers"),
            period: self
                .get("period")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.period),
            // one terminal character is one pixel
            cell_size: self.get("cell-size")?.unwrap_or(1),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn paused(&self) -> bool {
        self.matches.opt_present("paused")
    }
    pub fn headless(&self) -> bool {
        self.matches.opt_present("headless")
    }

    pub fn grid_size(&self) -> Result<(usize, usize), OptionsError> {
        Ok((
            self.get("width")?.unwrap_or(64),
            self.get("height")?.unwrap_or(32),
        ))
    }
    pub fn generations(&self) -> Result<u64, OptionsError> {
        Ok(self.get("gens")?.unwrap_or(100))
    }

    pub fn fill_mode(&self) -> Result<FillMode, OptionsError> {
        let mode_str = self.matches.opt_str("fill");
        let mode_str = mode_str.as_deref().unwrap_or("empty");
        FillMode::new(mode_str).ok_or_else(|| OptionsError::FillMode(mode_str.to_owned()))
    }

    pub fn input_file(&self) -> Option<String> {
        self.matches.opt_str("input")
    }
    pub fn log_file(&self) -> Option<String> {
        self.matches.opt_str("log")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    Random,
    Alternating,
    All,
    Empty,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    fn fill_cell<R: rand::Rng>(&self, cell: Pos2, rng: &mut R) -> bool {
        match self {
            Self::Random => rng.random_bool(0.5),
            Self::Alternating => (cell.x + cell.y) % 2 == 0,
            Self::All => true,
            Self::Empty => false,
        }
    }
    /// Positions to bring to life on a `cols` x `rows` grid
    pub fn create_alive(self, cols: usize, rows: usize) -> Vec<Pos2> {
        if self == Self::Empty {
            return Vec::new();
        }

        let mut rng = rand::rng();
        (0..rows as i32)
            .flat_map(|y| (0..cols as i32).map(move |x| Pos2 { x, y }))
            .filter(|&cell| self.fill_cell(cell, &mut rng))
            .collect()
    }
}
