use crate::{board::Position, movegen::legal_moves_into, types::Move};

/// Number of legal move paths of length `depth` from `pos`.
///
/// One move buffer per ply is allocated up front and reused for the whole
/// walk. The last ply is bulk-counted instead of played.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    count(pos, &mut layers)
}

/// Per-root-move breakdown of [`perft`], in move generation order.
/// Handy for bisecting a movegen bug against another engine's `divide`.
pub fn perft_divide(pos: &mut Position, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut roots = Vec::with_capacity(64);
    legal_moves_into(pos, &mut roots);

    let mut layers = vec![Vec::with_capacity(64); depth as usize - 1];
    roots
        .into_iter()
        .map(|mv| {
            let undo = pos.make_move(mv);
            let nodes = count(pos, &mut layers);
            pos.unmake_move(mv, undo);
            (mv, nodes)
        })
        .collect()
}

fn count(pos: &mut Position, layers: &mut [Vec<Move>]) -> u64 {
    let Some((buf, rest)) = layers.split_first_mut() else {
        return 1;
    };

    legal_moves_into(pos, buf);
    if rest.is_empty() {
        return buf.len() as u64;
    }

    let mut nodes = 0;
    for mv in buf.iter().copied() {
        let undo = pos.make_move(mv);
        nodes += count(pos, rest);
        pos.unmake_move(mv, undo);
    }
    nodes
}
