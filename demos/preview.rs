//! Renders a sample board to a PNG without a panel attached.
//!
//! Usage: `cargo run --example preview [board.toml]`

use todo_display::{Board, BoardConfig, MemorySink, StaticSource, TaskRecord, init_logging};

fn main() -> todo_display::Result<()> {
    init_logging("info", None)?;

    let mut config = match std::env::args().nth(1) {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };
    if config.display.preview_path.is_none() {
        config.display.preview_path = Some("todo_preview.png".into());
    }
    let board = Board::new(config)?;

    let mut source = StaticSource::new([
        TaskRecord::new("Buy milk", "").with_owner("Bryan"),
        TaskRecord::new("Walk dog", "done").with_owner("Stacy"),
        TaskRecord::new("Call plumber", "").with_owner("Bryan"),
        TaskRecord::new("Renew passport", "done").with_owner("Bryan"),
    ]);
    let mut sink = MemorySink::new();

    let report = board.refresh(&mut source, &mut sink, &chrono::Local::now())?;
    for list in &report.lists {
        println!(
            "{}: {} of {} shown",
            list.label.as_deref().unwrap_or("Tasks"),
            list.rendered,
            list.total
        );
    }
    Ok(())
}
