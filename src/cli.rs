use crate::config::Config;
use crate::ui::app::Page;
use clap::Parser;
use std::path::PathBuf;

/// Terminal playground for a counter, a todo list and a static home page.
#[derive(Debug, Parser)]
#[command(name = "component-lab", version, about)]
pub struct Args {
    /// Counter value on mount and after Reset
    #[arg(long, allow_negative_numbers = true)]
    pub initial: Option<i64>,

    /// Counter increment/decrement amount
    #[arg(long, allow_negative_numbers = true)]
    pub step: Option<i64>,

    /// Page shown at startup
    #[arg(long, value_enum)]
    pub page: Option<Page>,

    /// Config file (default: <config dir>/component-lab/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// CLI values win over the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(initial) = self.initial {
            config.counter.initial_value = initial;
        }
        if let Some(step) = self.step {
            config.counter.step = step;
        }
        if let Some(page) = self.page {
            config.ui.start_page = page;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}
