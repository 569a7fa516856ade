use std::io;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{debug, info};

use disk_scheduling::common::logger::initialize_logger;
use disk_scheduling::include::common::config::{Direction, PolicyKind, Track};
use disk_scheduling::include::common::error::SimulationError;
use disk_scheduling::simulation::compare::compare_policies;
use disk_scheduling::simulation::config::SimulationConfig;
use disk_scheduling::simulation::generator::RequestGenerator;
use disk_scheduling::simulation::input::{parse_track, parse_tracks, read_interactive};
use disk_scheduling::simulation::report::{render_comparison, render_json};

fn build_cli() -> Command {
    Command::new("disk-sched")
        .about("Compares disk head scheduling policies on a batch of track requests")
        .arg(
            Arg::new("requests")
                .short('r')
                .long("requests")
                .value_name("TRACKS")
                .allow_hyphen_values(true)
                .help("requested tracks, comma or space separated"),
        )
        .arg(
            Arg::new("head")
                .short('H')
                .long("head")
                .value_name("TRACK")
                .allow_hyphen_values(true)
                .help("initial head position"),
        )
        .arg(
            Arg::new("random")
                .long("random")
                .value_name("COUNT")
                .value_parser(value_parser!(usize))
                .conflicts_with("requests")
                .help("generate COUNT random requests"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .value_parser(value_parser!(u64))
                .requires("random")
                .help("seed for --random"),
        )
        .arg(
            Arg::new("disk_max")
                .short('d')
                .long("disk-max")
                .value_name("TRACK")
                .allow_hyphen_values(true)
                .help("highest track on the disk (default 199)"),
        )
        .arg(
            Arg::new("direction")
                .long("direction")
                .value_name("up|down")
                .help("initial sweep direction for SCAN, C-SCAN, LOOK and C-LOOK"),
        )
        .arg(
            Arg::new("policy")
                .short('p')
                .long("policy")
                .value_name("POLICY")
                .action(ArgAction::Append)
                .help("fcfs, sstf, scan, cscan, look or clook; repeatable (default: all)"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("JSON simulation config"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("log per-policy results"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("print the comparison as JSON"),
        )
}

// command line flags override the config file, which overrides the defaults
fn load_config(matches: &ArgMatches) -> Result<SimulationConfig, SimulationError> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => SimulationConfig::load_from_disk(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(disk_max) = matches.get_one::<String>("disk_max") {
        config.disk_max = parse_track(disk_max)?;
    }
    if let Some(direction) = matches.get_one::<String>("direction") {
        config.direction = direction.parse::<Direction>()?;
    }
    if let Some(policies) = matches.get_many::<String>("policy") {
        config.policies = policies
            .map(|key| key.parse::<PolicyKind>())
            .collect::<Result<Vec<_>, _>>()?;
    }
    config.validate()?;
    Ok(config)
}

fn load_batch(
    matches: &ArgMatches,
    config: &SimulationConfig,
) -> Result<(Vec<Track>, Track), SimulationError> {
    let head = matches
        .get_one::<String>("head")
        .map(|head| parse_track(head))
        .transpose()?;

    if let Some(&count) = matches.get_one::<usize>("random") {
        let mut generator = match matches.get_one::<u64>("seed") {
            Some(&seed) => RequestGenerator::with_seed(config.disk_max, seed)?,
            None => RequestGenerator::new(config.disk_max)?,
        };
        let requests = generator.requests(count);
        let head = head.unwrap_or_else(|| generator.head());
        info!("generated {} random requests, head at {}", count, head);
        return Ok((requests, head));
    }

    if let Some(list) = matches.get_one::<String>("requests") {
        let requests = parse_tracks(list)?;
        let head = head.ok_or_else(|| {
            SimulationError::Parse("--head is required together with --requests".to_string())
        })?;
        return Ok((requests, head));
    }

    let stdin = io::stdin();
    read_interactive(stdin.lock(), io::stdout())
}

fn run(matches: &ArgMatches) -> Result<(), SimulationError> {
    let config = load_config(matches)?;
    debug!("simulation config: {:?}", config);
    let (requests, head) = load_batch(matches, &config)?;

    let comparison = compare_policies(&requests, head, &config)?;
    if let Some(best) = comparison.best() {
        info!("best policy {} with total seek {}", best.policy, best.report.total_seek);
    }

    if matches.get_flag("json") {
        println!("{}", render_json(&comparison)?);
    } else {
        print!("{}", render_comparison(&comparison));
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    initialize_logger(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
