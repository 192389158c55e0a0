// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use expense_tracker::commands::{budget, expenses, menu, storage};
use expense_tracker::{cli, config::Settings, console, tracker::Tracker, utils};

fn main() -> Result<()> {
    utils::init_tracing();
    let matches = cli::build_cli().get_matches();
    let settings = Settings::from_matches(&matches)?;
    let mut console = console::stdio();

    if let Some(("init", _)) = matches.subcommand() {
        return storage::init(&settings, console.out());
    }

    let path = settings.data_file.clone();
    let mut tracker = Tracker::open(settings)
        .with_context(|| format!("Load expenses from {}", path.display()))?;

    match matches.subcommand() {
        Some(("add", sub)) => expenses::handle_add(&mut tracker, sub, &mut console, utils::today())?,
        Some(("view", sub)) => expenses::handle_view(&tracker, sub, console.out())?,
        Some(("budget", sub)) => budget::handle(&tracker, sub, &mut console)?,
        _ => menu::run(&mut tracker, &mut console, utils::today())?,
    }
    Ok(())
}
