use structopt::StructOpt;
use trackwork::cars::{Car, CarManager};
use trackwork::grid::{Direction, GridPosition};
use trackwork::sim::Sim;
use trackwork::track::{Layout, TrackPosition};
use trackwork::AppResult;

/// trackwork -- toy rail network simulation on a grid
#[derive(StructOpt, Debug)]
#[structopt(name = "trackwork")]
struct Opt {
    /// Verbose mode (-v, -vv)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,

    /// Loop height in cells
    #[structopt(short = "r", long = "rows", default_value = "4")]
    rows: i32,

    /// Loop width in cells
    #[structopt(short = "c", long = "cols", default_value = "6")]
    cols: i32,

    /// Number of cars to place on the loop
    #[structopt(short = "n", long = "cars", default_value = "2")]
    cars: usize,

    /// Number of simulation ticks
    #[structopt(short = "t", long = "ticks", default_value = "40")]
    ticks: usize,

    /// Time step per tick
    #[structopt(short = "d", long = "time-step", default_value = "0.1")]
    timestep: f64,

    /// Initial impulse applied to each car
    #[structopt(short = "i", long = "impulse", default_value = "1.0")]
    impulse: f64,
}

fn run(opt: &Opt) -> AppResult<()> {
    let mut layout = Layout::new();
    let grid = layout.create_loop(opt.rows, opt.cols, GridPosition::new(0, 0))?;

    println!("# Layout:");
    print!("{}", layout.debug_render(grid));

    // The cell right of the top-left corner always exists on a loop
    // and is entered from the Left when running clockwise.
    let start_piece = layout.piece_at(grid, GridPosition::new(0, 1))?;
    let start = TrackPosition::new(layout.connection(start_piece, Direction::Left)?, 0.0);

    let perimeter = layout.grid(grid).pieces.len() as f64;
    let spacing = perimeter / opt.cars.max(1) as f64;
    let mut cars = CarManager::new();
    for i in 0..opt.cars {
        let position = start.add(&layout, i as f64 * spacing)?;
        let mut car = Car::new(position);
        car.apply_impulse(opt.impulse);
        cars.add_car(car);
    }

    let mut sim = Sim::new(layout, grid, cars);
    let history = sim.run(opt.ticks, opt.timestep);

    if opt.verbose >= 1 {
        println!("# History:");
        for (tick, events) in history.ticks.iter().enumerate() {
            for event in events {
                println!("> tick {} {:?}", tick, event);
            }
        }
    }

    println!("# Cars at t={}:", sim.time());
    for (id, car) in sim.cars.iter() {
        println!(
            "## Car {} at {:?} u={:.2} v={:.2}",
            id,
            car.position.grid_position(&sim.layout),
            car.position.u,
            car.velocity
        );
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let opt = Opt::from_args();
    if opt.verbose >= 2 {
        println!("{:?}", opt);
    }
    match run(&opt) {
        Ok(()) => {}
        Err(e) => {
            println!("Error:\n{}", e.as_fail());
            std::process::exit(1);
        }
    }
}
