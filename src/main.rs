//! Colour Print entry point
//!
//! Native builds print a level to the terminal. The browser build is driven
//! through `platform::web`.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use clap::Parser;
    use colour_print::consts::MAX_LEVEL_COUNT;
    use rand::Rng;

    /// Which level to show
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum LevelArg {
        Id(u32),
        Random,
    }

    impl LevelArg {
        pub fn resolve(self) -> u32 {
            match self {
                LevelArg::Id(id) => id,
                LevelArg::Random => rand::rng().random_range(1..=MAX_LEVEL_COUNT),
            }
        }
    }

    fn parse_level(s: &str) -> Result<LevelArg, String> {
        if s.eq_ignore_ascii_case("random") {
            return Ok(LevelArg::Random);
        }
        s.parse()
            .map(LevelArg::Id)
            .map_err(|_| format!("expected a level id or \"random\", got {s:?}"))
    }

    /// Print a Colour Print level
    #[derive(Parser, Debug)]
    #[command(name = "colour-print")]
    #[command(about = "Print a procedurally generated Colour Print level", long_about = None)]
    pub struct Args {
        /// Level id (1-50000) or "random"
        #[arg(value_parser = parse_level, default_value = "1")]
        pub level: LevelArg,

        /// Also print the moves the generator used to build the target
        #[arg(long)]
        pub solution: bool,
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    log::info!("Colour Print (native) starting...");

    let args = cli::Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::init, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn run(args: &cli::Args) -> colour_print::Result<()> {
    let level = colour_print::generate_level(args.level.resolve())?;
    let names = |items: Vec<&str>| items.join(", ");

    println!("{}", level.name);
    println!("{}", level.hint);
    println!("Moves: {}  Undos: {}", level.moves, level.undos);
    println!(
        "Colors: {}",
        names(level.available_colors.iter().map(|c| c.as_str()).collect())
    );
    println!(
        "Tools: {}",
        names(level.available_tools.iter().map(|t| t.as_str()).collect())
    );
    println!("\nTarget ({0}x{0}):", level.grid_size);
    print!("{}", level.target);

    if args.solution {
        println!("\nSolution:");
        for (i, mv) in level.solution.iter().enumerate() {
            println!(
                "{:>3}. {} {} at ({}, {})",
                i + 1,
                mv.color.as_str(),
                mv.tool.as_str(),
                mv.row,
                mv.col
            );
        }
    }

    Ok(())
}
