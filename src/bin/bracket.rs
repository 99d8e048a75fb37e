//! Command-line runner: load the field, resolve the bracket, write the results.
//! Run with: cargo run --bin bracket -- [POLICY]
//! Configure with env: BRACKET_INPUT, BRACKET_OUTPUT, BRACKET_POLICY, BRACKET_REGIONS.
//! A POLICY argument (1-4 or a policy name) overrides BRACKET_POLICY.

use bracket_sim::{
    build_bracket_with_policy, group_regions, load_competitors_from_path, write_bracket, RunConfig,
};
use std::error::Error;

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let arg = std::env::args().nth(1);
    let config = RunConfig::from_env()?.with_policy_arg(arg.as_deref())?;
    log::info!(
        "Policy {} ({}), input {}",
        config.policy.id(),
        config.policy,
        config.input.display()
    );

    let competitors = load_competitors_from_path(&config.input)?;
    let regions = group_regions(competitors, &config.regions)?;
    let bracket = build_bracket_with_policy(&regions, config.policy)?;
    write_bracket(&config.output_dir, &bracket)?;

    let champion = &bracket.champion;
    println!("Champion: {} ({} seed, {})", champion.team, champion.seed, champion.region);
    Ok(())
}
