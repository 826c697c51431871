//! Lays out cladding panels along an L-shaped wall.
//!
//! Run with: `RUST_LOG=gridline=debug cargo run --example panel_layout`

use std::cell::Cell;
use std::rc::Rc;

use gridline::geometry::{Point, Polyline};
use gridline::grid::{FixedDivisionMode, Grid1d};
use qtty::{Meter, Quantity};
use tracing_subscriber::EnvFilter;

type Length = Quantity<Meter>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Panel Layout Example ===\n");

    let wall = Polyline::new(vec![
        Point::from_f64(0.0, 0.0, 0.0),
        Point::from_f64(7.5, 0.0, 0.0),
        Point::from_f64(7.5, 4.2, 0.0),
    ])
    .expect("wall has two segments");

    let mut grid = Grid1d::<Meter>::from_curve(wall).expect("wall has length");
    println!("Wall length: {:.2} m", grid.domain().length().value());

    let rebuilds = Rc::new(Cell::new(0));
    let counter = Rc::clone(&rebuilds);
    grid.subscribe(move |g| {
        counter.set(counter.get() + 1);
        println!("  (layout changed: {} cells)", g.cell_count());
    });

    // Reserve a door opening 1.0 m wide starting 2.0 m along the wall.
    println!("\n--- Door opening ---");
    grid.split_at_positions([Length::new(2.0), Length::new(3.0)])
        .expect("door lies on the wall");

    // Panel the long stretch after the door with 1.2 m panels, remainder centred.
    println!("\n--- Panels after the door ---");
    let stretch = grid
        .find_cell_at_position_mut(Length::new(5.0))
        .expect("position on the wall");
    stretch
        .divide_by_fixed_length(Length::new(1.2), FixedDivisionMode::RemainderNearMiddle, 0)
        .expect("valid panel length");

    println!("\n--- Cells ---");
    for (i, cell) in grid.get_cells().iter().enumerate() {
        let line = cell.get_cell_geometry();
        println!(
            "Cell {:>2}: {} (length {:.2} m) {}",
            i,
            cell.domain(),
            cell.domain().length().value(),
            line
        );
    }

    println!("\nRoot notifications: {}", rebuilds.get());
}
