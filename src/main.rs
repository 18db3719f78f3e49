mod cli;
mod display;

use std::cell::Cell;
use std::rc::Rc;

use clap::Parser;
use display::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use frame_timer::{Clock, Timer, TimerEvent};
use log::{error, info, trace};
use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

fn create_window() -> (EventLoop<()>, Window, Pixels) {
    let event_loop = EventLoop::new();

    let min_size = LogicalSize::new(DISPLAY_WIDTH as f64, DISPLAY_HEIGHT as f64);
    let window = WindowBuilder::new()
        .with_title("Frame Timer")
        .with_inner_size(LogicalSize::new(
            (DISPLAY_WIDTH * 4) as f64,
            (DISPLAY_HEIGHT * 4) as f64,
        ))
        .with_min_inner_size(min_size)
        .build(&event_loop)
        .expect("Failed to create window");

    let size = window.inner_size();
    let surface = SurfaceTexture::new(size.width, size.height, &window);
    let pixels = Pixels::new(DISPLAY_WIDTH as u32, DISPLAY_HEIGHT as u32, surface)
        .expect("Failed to create the pixel frame buffer");

    (event_loop, window, pixels)
}

/// Log the timer events.
///
/// The end is announced once per run, although the timer raises
/// [`TimerEvent::Ended`] on every tick past its duration.
fn log_events(timer: &mut Timer) {
    let announced = Rc::new(Cell::new(false));

    let ended = announced.clone();
    timer.on(TimerEvent::Ended, move || {
        if !ended.replace(true) {
            info!("Timer ended");
        }
    });

    timer.on_any(move |event| match event {
        TimerEvent::Running | TimerEvent::Ended => trace!("Timer event: {}", event),
        TimerEvent::Started | TimerEvent::Reset => {
            announced.set(false);
            info!("Timer event: {}", event);
        }
        _ => info!("Timer event: {}", event),
    });
}

fn title(timer: &Timer) -> String {
    format!(
        "Frame Timer - {:.1}s / {:.1}s",
        timer.elapsed(),
        timer.duration()
    )
}

fn main() {
    // Start logger
    env_logger::init();

    // Read command line arguments
    let args = cli::Args::parse();

    // Create window
    let (event_loop, window, mut pixels) = create_window();

    // Create timer
    let mut timer = Timer::new();
    log_events(&mut timer);
    timer.begin(args.duration);
    if args.paused {
        timer.pause();
    }

    // Prepare clock
    let mut clock = Clock::new(args.hz);

    // Start the main loop
    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
            WindowEvent::KeyboardInput { input, .. } => {
                if input.state != ElementState::Pressed {
                    return;
                }

                match input.virtual_keycode {
                    Some(VirtualKeyCode::Space) => {
                        if timer.is_running() {
                            timer.pause();
                        } else {
                            timer.play();
                        }
                    }
                    Some(VirtualKeyCode::R) => timer.reset(),
                    Some(VirtualKeyCode::Return) => timer.begin(args.duration),
                    Some(VirtualKeyCode::Escape) => *control_flow = ControlFlow::Exit,
                    _ => return,
                }

                window.request_redraw();
            }
            WindowEvent::Resized(physical_size) => {
                pixels.resize_surface(physical_size.width, physical_size.height);
                window.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                pixels.resize_surface(new_inner_size.width, new_inner_size.height);
                window.request_redraw();
            }
            _ => (),
        },
        Event::Resumed => clock.restart(),
        Event::RedrawRequested(window_id) if window_id == window.id() => {
            display::draw_progress(
                pixels.get_frame_mut(),
                timer.progress(),
                args.foreground,
                args.background,
            );
            window.set_title(&title(&timer));

            if let Err(err) = pixels.render() {
                error!("Render failed: {}", err);
                *control_flow = ControlFlow::Exit;
            }
        }
        Event::MainEventsCleared => {
            // Redraw only when the timer advanced
            if clock.tick(|dt| timer.update(dt)) && timer.is_running() {
                window.request_redraw();
            }
        }
        _ => (),
    });
}
