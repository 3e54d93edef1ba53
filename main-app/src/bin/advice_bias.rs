// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.


use std::fs::File;
use std::path::PathBuf;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use advice::comparator::check_parties;
use advice::report::ComparisonReport;
use advice::simulation::simulate;
use main_app::data_source::{load_alignment, load_outcome};
use main_app::options::SimulationOptions;
use main_app::progress::ProgressLine;

#[derive(Parser)]
#[command(version = "0.2", author = "Andrew Conway", name="AdviceBias")]
/// Estimate how a voting advice questionnaire would distribute voters answering completely at random,
/// and compare that with an actual election result.
///
/// By default uses the parties and seats of the 2012 Dutch general election, with a placeholder stance matrix
/// that is not the published questionnaire. Give the real stances with --alignment.
struct Opts {
    /// A JSON file with the stance of each party on each topic, to use instead of the built in questionnaire.
    #[arg(long)]
    alignment : Option<PathBuf>,

    /// A JSON file with the number of seats each party won, to use instead of the built in result.
    #[arg(long)]
    outcome : Option<PathBuf>,

    /// An optional file to also write the final report to, as JSON.
    #[arg(long)]
    json : Option<PathBuf>,

    /// Logging directive, such as info, warn or advice=debug.
    #[arg(long, default_value = "info")]
    log : String,

    #[command(flatten)]
    simulation : SimulationOptions,
}

fn main() -> anyhow::Result<()> {
    let opt : Opts = Opts::parse();
    let filter = EnvFilter::from_default_env().add_directive(opt.log.parse()?);
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let alignment = load_alignment(opt.alignment.as_deref())?;
    let real_outcome = load_outcome(opt.outcome.as_deref())?;
    // No point simulating if the result cannot be compared.
    check_parties(&alignment,&real_outcome)?;
    let config = opt.simulation.to_config()?;

    println!("Simulating an election:");
    let mut progress = ProgressLine::new(std::io::stdout());
    let outcome = simulate(&alignment,&config,|p|progress.update(p))?;
    progress.finish()?;

    let report = ComparisonReport::new(&outcome,&alignment,&real_outcome)?;
    report.print_table_results();

    if let Some(json) = &opt.json {
        if let Some(parent) = json.parent() { std::fs::create_dir_all(parent)? }
        serde_json::to_writer_pretty(File::create(json)?,&report)?;
        log::info!("Wrote report to {}",json.display());
    }
    Ok(())
}
