mod options;

pub use options::DemoOptions;

use crate::prelude::*;

/// Generates one board from the demo options and dumps it to stdout,
/// along with the outcome variant and its complexity score.
pub fn run_demo(options: DemoOptions) -> Result<()> {
    let mask = options.shape.as_deref().map(parse_mask).transpose()?;

    let generated = generate(options.width, options.height, options.kinds, mask.as_ref());
    let complexity = score(generated.tiles(), options.width, options.height);

    match &generated {
        Generated::Validated(tiles) => {
            log::info!("validated board with {} tiles (complexity {complexity:.2})", tiles.len());
        }
        Generated::BestEffort { tiles, complexity } => {
            log::warn!("best-effort board with {} tiles (complexity {complexity:.2})", tiles.len());
        }
    }

    let board = Board::new(options.width, options.height, generated.into_tiles());
    println!("{}", board.pretty());

    if let Some((a, b)) = board.find_hint() {
        let path = board.connect_tiles(a, b)?.expect("hinted pair connects");
        log::info!(
            "first available move: {} -> {} via {} corner(s)",
            board.tile(a)?.position.notate(),
            board.tile(b)?.position.notate(),
            path.corner_count()
        );
    }

    Ok(())
}
