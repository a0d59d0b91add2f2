use mazekit::{Direction, Maze, MazeConfig, storage};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!(
        "Usage: mazekit <width> <height> [options]\n\
         \n\
         Options:\n\
         \x20 --loops <fraction>    break extra walls, fraction of cells in [0, 1]\n\
         \x20 --portals <n>         number of portal groups to place\n\
         \x20 --portal-size <s>     cells per portal group (default 2)\n\
         \x20 --seed <u64>          fixed seed for reproducible generation\n\
         \x20 --save <path>         save the generated grid as JSON\n\
         \x20 --load <path>         load a saved grid instead of generating"
    );
}

fn parse_args() -> Result<(MazeConfig, Option<String>, Option<String>), String> {
    let mut args = std::env::args().skip(1);
    let width = args
        .next()
        .ok_or("missing width")?
        .parse::<u16>()
        .map_err(|_| "width must be a number".to_string())?;
    let height = args
        .next()
        .ok_or("missing height")?
        .parse::<u16>()
        .map_err(|_| "height must be a number".to_string())?;

    let mut config = MazeConfig {
        width,
        height,
        ..MazeConfig::default()
    };
    let mut save_path = None;
    let mut load_path = None;

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("{} requires a value", name))
        };
        match flag.as_str() {
            "--loops" => {
                config.loops = true;
                config.loop_fraction = value("--loops")?
                    .parse()
                    .map_err(|_| "--loops expects a fraction".to_string())?;
            }
            "--portals" => {
                config.portal_sets = value("--portals")?
                    .parse()
                    .map_err(|_| "--portals expects a count".to_string())?;
            }
            "--portal-size" => {
                config.portal_set_size = value("--portal-size")?
                    .parse()
                    .map_err(|_| "--portal-size expects a count".to_string())?;
            }
            "--seed" => {
                config.seed = Some(
                    value("--seed")?
                        .parse()
                        .map_err(|_| "--seed expects an integer".to_string())?,
                );
            }
            "--save" => save_path = Some(value("--save")?),
            "--load" => load_path = Some(value("--load")?),
            other => return Err(format!("unknown option: {}", other)),
        }
    }

    Ok((config, save_path, load_path))
}

/// Plain-text preview of the wall state. Portal cells are marked `()`.
fn print_maze(maze: &Maze) {
    for y in 0..maze.height() {
        let mut wall_line = String::new();
        let mut cell_line = String::new();
        for x in 0..maze.width() {
            wall_line.push('+');
            wall_line.push_str(if maze.is_open((x, y), Direction::North) {
                "  "
            } else {
                "--"
            });
            cell_line.push(if maze.is_open((x, y), Direction::West) {
                ' '
            } else {
                '|'
            });
            cell_line.push_str(if maze.is_portal((x, y)) { "()" } else { "  " });
        }
        wall_line.push('+');
        cell_line.push('|');
        println!("{}", wall_line);
        println!("{}", cell_line);
    }
    println!("{}", "+--".repeat(maze.width() as usize) + "+");
}

fn main() -> std::io::Result<()> {
    // Log to a file so the preview output stays clean; level via RUST_LOG.
    let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), "mazekit.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let (config, save_path, load_path) = match parse_args() {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}", message);
            print_usage();
            std::process::exit(2);
        }
    };

    let maze = if let Some(path) = load_path {
        match storage::load_maze(&path) {
            Ok(maze) => maze,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        }
    } else {
        match Maze::generate(&config) {
            Ok(maze) => maze,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(2);
            }
        }
    };

    tracing::info!(
        width = maze.width(),
        height = maze.height(),
        edges = maze.graph().edge_count(),
        "maze ready"
    );

    print_maze(&maze);
    println!(
        "{}x{} maze, {} open passages, {} portal group(s)",
        maze.width(),
        maze.height(),
        maze.graph().edge_count(),
        maze.portals().count(),
    );

    if let Some(path) = save_path {
        if let Err(e) = storage::save_grid(&maze, &path) {
            eprintln!("Failed to save {}: {}", path, e);
            std::process::exit(1);
        }
        println!("Saved grid to {}", path);
    }

    Ok(())
}
