use sweeper_core::{CellContent, CellView, GameStatus, Snapshot, ToNdIndex};

fn glyph(view: CellView) -> char {
    match (view.content, view.is_revealed, view.is_open, view.has_flag) {
        (Some(CellContent::Mine), true, _, _) => 'X',
        (Some(CellContent::Mine), false, _, _) => '*',
        (Some(CellContent::Clear(0)), _, _, _) => ' ',
        (Some(CellContent::Clear(count)), _, _, _) => char::from(b'0' + count),
        (None, _, _, true) => 'F',
        (None, _, true, _) => '.',
        (None, _, false, false) => '#',
    }
}

fn status_line(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Pending => "open a cell to start",
        GameStatus::Running => "running",
        GameStatus::Won => "cleared!",
        GameStatus::Lost => "boom",
    }
}

/// Draws a snapshot as text, x across and y down.
pub fn render(snapshot: &Snapshot) -> String {
    let (width, height) = snapshot.size;
    let mut out = format!(
        "mines left: {}  time: {}s  {}\n",
        snapshot.mines_remaining,
        snapshot.elapsed_secs,
        status_line(snapshot.status)
    );

    out.push_str("   ");
    out.extend((0..width).map(|x| char::from(b'0' + x % 10)));
    out.push('\n');

    for y in 0..height {
        out.push_str(&format!("{y:>2} "));
        for x in 0..width {
            out.push(glyph(snapshot.cells[(x, y).to_nd_index()]));
        }
        out.push('\n');
    }
    out
}
