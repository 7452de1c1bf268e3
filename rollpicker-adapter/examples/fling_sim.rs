// Example: a scripted fling against recording surfaces, with picker logs on stderr.
//
// Run with `RUST_LOG=rollpicker=trace cargo run -p rollpicker-adapter --example fling_sim --features tracing`.
use rollpicker::{GeometryConfig, PickerOptions};
use rollpicker_adapter::{Controller, HostEvent, ManualClock, RecordingSurface};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let items = ["C", "Java", "Python", "JavaScript", "PHP", ".NET", "C#", "C++", "Ruby"];
    let options = PickerOptions::new(items)
        .with_geometry(50.0, 250.0)
        .with_on_index_change(|i| println!("on_index_change({i})"));
    let clock = ManualClock::new(0);
    let mut c = match Controller::new(
        options,
        RecordingSurface::new(),
        RecordingSurface::new(),
        &clock,
    ) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("invalid picker config: {err}");
            return;
        }
    };

    // Simulate a decelerating fling at 60fps, then let the host snap to the nearest row.
    let mut offset = 0.0f64;
    let mut velocity = 42.0f64;
    while velocity > 0.5 {
        clock.advance(16);
        offset += velocity;
        velocity *= 0.85;
        c.dispatch(HostEvent::Scroll { offset });
    }
    let rest = c.picker().primary().rest_offset(offset);
    clock.advance(16);
    c.dispatch(HostEvent::ScrollEnd { offset: rest });
    println!(
        "released at {offset:.1}, resting at {rest}, pending={:?}",
        c.picker().pending_index()
    );

    while let Some(wait) = c.time_until_settle_ms() {
        clock.advance(wait.max(1));
        if let Some(index) = c.tick() {
            println!("settled on {:?} ({index})", c.picker().selected_item());
        }
    }

    // A dimension change re-centers the committed row without a notification.
    if let Err(err) = c.reconfigure_geometry(GeometryConfig::new(40.0, 200.0)) {
        eprintln!("reconfigure failed: {err}");
        return;
    }
    println!(
        "after resize: offsets={:?} commands={}",
        c.picker().offsets(),
        c.picker().primary().commands().len()
    );
}
