use std::error::Error;
use std::fmt::Display;
use std::process;

use clap::{App, Arg, ArgMatches};
use log::debug;

use river_crossing_solver::config::{Format, Method, Options};
use river_crossing_solver::puzzle::Puzzle;
use river_crossing_solver::solution_formatter::SolutionFormatter;
use river_crossing_solver::Solve;

fn main() {
    env_logger::init();

    let matches = App::new("river-crossing-solver")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves the missionaries and cannibals puzzle")
        .arg(
            Arg::with_name("travelers")
                .short("n")
                .long("travelers")
                .takes_value(true)
                .default_value("3")
                .help("number of missionaries (and also of cannibals)"),
        )
        .arg(
            Arg::with_name("capacity")
                .short("b")
                .long("capacity")
                .takes_value(true)
                .default_value("2")
                .help("how many travelers fit in the boat"),
        )
        .arg(
            Arg::with_name("method")
                .short("m")
                .long("method")
                .takes_value(true)
                .possible_values(&["breadth-first", "bfs", "depth-first", "dfs"])
                .default_value("breadth-first")
                .help("order of visiting states"),
        )
        .arg(
            Arg::with_name("max-steps")
                .long("max-steps")
                .takes_value(true)
                .help("give up after visiting this many states"),
        )
        .arg(
            Arg::with_name("counts")
                .short("c")
                .long("counts")
                .help("print states as counts instead of pictures"),
        )
        .arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .help("print search statistics"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("print status while searching"),
        )
        .arg(
            Arg::with_name("graph")
                .short("g")
                .long("graph")
                .takes_value(true)
                .help("write explored states to this file in dot format (needs the graph feature)"),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        println!("{}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches<'_>) -> Result<(), Box<dyn Error>> {
    let travelers: u8 = parse_arg(matches, "travelers")?;
    let capacity: u8 = parse_arg(matches, "capacity")?;
    let method: Method = parse_arg(matches, "method")?;
    let max_steps = match matches.value_of("max-steps") {
        Some(_) => Some(parse_arg(matches, "max-steps")?),
        None => None,
    };
    let format = if matches.is_present("counts") {
        Format::Counts
    } else {
        Format::Banks
    };

    #[allow(unused_mut)]
    let mut options = Options {
        method,
        max_steps,
        print_status: matches.is_present("verbose"),
        ..Options::default()
    };
    #[cfg(feature = "graph")]
    {
        options.graph = matches.value_of("graph").map(Into::into);
    }
    #[cfg(not(feature = "graph"))]
    {
        if matches.is_present("graph") {
            return Err("Drawing the state space requires the graph feature".into());
        }
    }

    let puzzle = Puzzle::new(travelers, capacity)?;
    debug!("Options: {:?}", options);

    println!("Solving {} using {}...", puzzle, method);
    let solver_ok = puzzle.solve(&options)?;
    if matches.is_present("stats") {
        println!("{}", solver_ok.stats);
    }

    match solver_ok.path_states {
        Some(ref states) => {
            println!("Found solution:");
            print!("{}", SolutionFormatter::new(&puzzle, states, format));
            if let Some(crossings) = solver_ok.crossings() {
                println!("{}", crossings);
                println!("Crossings: {}", crossings.len());
            }
        }
        None if solver_ok.budget_exhausted => println!("No solution found within the step budget"),
        None => println!("No solution"),
    }
    Ok(())
}

fn parse_arg<T>(matches: &ArgMatches<'_>, name: &str) -> Result<T, Box<dyn Error>>
where
    T: std::str::FromStr,
    T::Err: Display,
{
    let value = matches
        .value_of(name)
        .ok_or_else(|| format!("Missing value for {}", name))?;
    value
        .parse()
        .map_err(|err| format!("Invalid value for {}: {} ({})", name, value, err).into())
}
