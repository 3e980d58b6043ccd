//! Desktop simulator for the area-graph widget.
//!
//! Renders an [`AreaGraph`] in an SDL2 window via `embedded-graphics-simulator`
//! and forwards mouse motion as pointer events.
//!
//! # Key bindings
//!
//! | Key | Action                          |
//! |-----|---------------------------------|
//! | 1   | Raw values                      |
//! | 2   | Pesos (es-MX, MXN)              |
//! | 3   | Dollars (en-US, USD)            |
//! | D   | Next dataset                    |
//! | R   | Toggle widget size              |
//! | Q   | Quit                            |

use std::time::{Duration, Instant};

use area_graph::prelude::*;
use embedded_graphics::prelude::{DrawTarget, RgbColor};
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{info, warn};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

const DISPLAY_WIDTH_PX: u32 = 320;
const DISPLAY_HEIGHT_PX: u32 = 240;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

/// Named datasets the `D` key cycles through. The empty one shows the
/// placeholder a host gets after invalid input.
fn datasets() -> Vec<(&'static str, Vec<DataPoint>)> {
    let months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug"];
    let sales = [1200.0, 1850.5, 1630.0, 2400.0, 2210.75, 2980.0, 2650.0, 3120.0];

    vec![
        (
            "monthly sales",
            months
                .iter()
                .zip(sales)
                .map(|(name, value)| DataPoint::new(*name, value))
                .collect(),
        ),
        (
            "quarter",
            vec![
                DataPoint::new("Jan", 10.0),
                DataPoint::new("Feb", 20.0),
                DataPoint::new("Mar", 15.0),
            ],
        ),
        ("single point", vec![DataPoint::new("X", 5.0)]),
        ("empty", Vec::new()),
    ]
}

/// The two sizes `R` toggles between.
fn widget_bounds(compact: bool) -> Rectangle {
    if compact {
        Rectangle::new(Point::new(40, 60), Size::new(200, 120))
    } else {
        Rectangle::new(
            Point::new(10, 10),
            Size::new(DISPLAY_WIDTH_PX - 20, DISPLAY_HEIGHT_PX - 20),
        )
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting area-graph simulator");
    info!("Keys: 1=Raw  2=MXN  3=USD  D=Dataset  R=Resize  Q=Quit");

    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Area Graph Simulator", &output_settings);

    let datasets = datasets();
    let mut dataset_index = 0;
    let mut compact = false;

    let mut graph = match AreaGraph::new(widget_bounds(compact), datasets[0].1.clone()) {
        Ok(graph) => graph,
        Err(e) => {
            log::error!("Cannot build initial graph: {}", e);
            return;
        }
    };

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = display.clear(Rgb565::BLACK);
    let _ = graph.draw(&mut display);
    graph.mark_clean();
    window.update(&display);

    'running: loop {
        let frame_start = Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Q | Keycode::Escape => break 'running,
                    Keycode::Num1 | Keycode::Kp1 => graph.set_formatter(ValueFormatter::Raw),
                    Keycode::Num2 | Keycode::Kp2 => set_currency(&mut graph, "es-MX", "MXN"),
                    Keycode::Num3 | Keycode::Kp3 => set_currency(&mut graph, "en-US", "USD"),
                    Keycode::D => {
                        dataset_index = (dataset_index + 1) % datasets.len();
                        let (name, points) = &datasets[dataset_index];
                        info!("Dataset → {}", name);
                        if let Err(e) = graph.set_data(points.clone()) {
                            warn!("Showing placeholder: {}", e);
                        }
                    }
                    Keycode::R => {
                        compact = !compact;
                        graph.resize(widget_bounds(compact));
                    }
                    _ => {}
                },

                SimulatorEvent::MouseMove { point } => {
                    let event = if graph.contains_point(point) {
                        PointerEvent::Move(point)
                    } else {
                        PointerEvent::Leave
                    };
                    graph.handle_pointer(event);
                }

                _ => {}
            }
        }

        if graph.is_dirty() {
            let _ = display.clear(Rgb565::BLACK);
            if let Err(e) = graph.draw(&mut display) {
                log::error!("Draw error: {:?}", e);
            }
            graph.mark_clean();
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}

fn set_currency(graph: &mut AreaGraph, locale: &str, code: &str) {
    match ValueFormatter::currency(locale, code) {
        Ok(formatter) => graph.set_formatter(formatter),
        Err(e) => warn!("{}-{}: {}", locale, code, e),
    }
}
