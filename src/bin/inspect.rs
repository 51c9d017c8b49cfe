use clap::Parser;

use slidecargo::{classify, Game, Pos, Proximity};

#[derive(Debug, Parser)]
#[command(name = "inspect", about = "Decode a sliding-puzzle share token and describe the board")]
struct Args {
    /// Share token, with or without the leading '#' fragment marker
    token: String,

    /// Emit the render snapshot as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

/// Marker printed after each tile: '=' on its goal cell, '+' one step away,
/// '.' otherwise, space for the empty slot.
fn proximity_mark(p: Proximity) -> char {
    match p {
        Proximity::Correct => '=',
        Proximity::Close => '+',
        Proximity::Far => '.',
        Proximity::Empty => ' ',
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let game = Game::from_token(&args.token).map_err(|e| format!("token rejected: {e}"))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
        return Ok(());
    }

    let size = game.size();
    println!("[inspect] {0}x{0} board, solved: {1}", size, game.is_solved());
    for r in 0..size {
        for c in 0..size {
            let pos = Pos::new(r, c);
            let cell = game.board().get(pos).flatten();
            let mark = proximity_mark(classify(cell, pos, size));
            match cell {
                Some(label) => print!("{label:>3}{mark} "),
                None => print!("   {mark} "),
            }
        }
        println!();
    }
    println!("token: {}", game.share_token());

    Ok(())
}
