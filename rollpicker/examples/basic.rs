// Example: headless picker driven by simulated scroll events and a manual clock.
use rollpicker::{Picker, PickerOptions};

fn main() {
    let items = ["C", "Java", "Python", "JavaScript", "PHP", ".NET", "C#", "C++", "Ruby"];
    let options = PickerOptions::new(items)
        .with_geometry(50.0, 250.0)
        .with_label("Choose your language")
        .with_on_index_change(|i| println!("on_index_change({i})"));
    let mut picker = match Picker::headless(options) {
        Ok(p) => p,
        Err(err) => {
            eprintln!("invalid picker config: {err}");
            return;
        }
    };
    println!(
        "padding={} snap_offsets={:?}",
        picker.geometry().padding_height(),
        picker.primary_surface_config().snap_offsets
    );

    // A fling: the host reports offsets every frame until motion stops.
    let mut now_ms = 0u64;
    for off in [12.0, 48.0, 97.0, 131.0, 148.0, 151.0, 150.0] {
        now_ms += 16;
        picker.on_primary_scroll(off, now_ms);
        println!(
            "t={now_ms} off={off} pending={:?} offsets={:?}",
            picker.pending_index(),
            picker.offsets()
        );
    }

    if let Some(deadline) = picker.next_deadline_ms() {
        picker.poll(deadline);
    }
    println!(
        "selected={:?} ({})",
        picker.selected_item(),
        picker.committed_index()
    );

    // A controlled update re-centers silently.
    picker.set_index(7);
    println!(
        "after set_index: selected={:?} offsets={:?}",
        picker.selected_item(),
        picker.offsets()
    );
}
