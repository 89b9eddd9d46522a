use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::games::tictactoe::{Board, GameStatus, Mark, calculate_minimax_move, evaluate, select_ai_move};

fn board_from_moves(moves: &[usize]) -> Board {
    let mut board = Board::new();
    for &index in moves {
        let mark = board.next_mark();
        board.place_mark(index, mark).expect("benchmark moves must be legal");
    }
    board
}

fn bench_reply_to_opening(c: &mut Criterion) {
    let board = board_from_moves(&[0]);
    c.bench_function("minimax_reply_to_corner_opening", |b| {
        b.iter(|| select_ai_move(black_box(&board)))
    });
}

fn bench_mid_game(c: &mut Criterion) {
    let board = board_from_moves(&[4, 0, 8]);
    c.bench_function("minimax_mid_game", |b| {
        b.iter(|| select_ai_move(black_box(&board)))
    });
}

fn bench_perfect_game(c: &mut Criterion) {
    c.bench_function("minimax_perfect_game_from_empty", |b| {
        b.iter(|| {
            let mut board = Board::new();
            while evaluate(&board) == GameStatus::InProgress {
                let mark = board.next_mark();
                let Some(bot_move) = calculate_minimax_move(&board, mark) else {
                    break;
                };
                if board.place_mark(bot_move.index, mark).is_err() {
                    break;
                }
            }
            black_box(board.count(Mark::Empty))
        })
    });
}

criterion_group!(benches, bench_reply_to_opening, bench_mid_game, bench_perfect_game);
criterion_main!(benches);
